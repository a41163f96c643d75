//! Typed synchronous client for the blockchain.info data API.
//!
//! One [`Client`] handle wraps every public data resource: address lookups,
//! multi-address summaries, balances, unspent outputs, raw transactions and
//! blocks, chart series, mining pools, network statistics, and exchange-rate
//! tickers. Each call is a single blocking GET that deserializes the JSON
//! response into a typed record; failures come back as [`ApiError`] return
//! values and are never stored on the client, so one `Client` can be shared
//! across threads.
//!
//! ```no_run
//! use blockchain_info_api::{Client, RequestOptions};
//!
//! # fn main() -> Result<(), blockchain_info_api::ApiError> {
//! let client = Client::new();
//!
//! let address = client.get_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa")?;
//! println!("balance: {} satoshi", address.final_balance);
//!
//! let paged = client.get_address_with(
//!     "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
//!     &RequestOptions::new().with("offset", "50").with("limit", "50"),
//! )?;
//! println!("page 2: {} txs", paged.txs.len());
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod balance;
pub mod block;
pub mod chart;
pub mod client;
pub mod error;
pub mod options;
pub mod ticker;
pub mod transaction;
pub mod unspent;

pub use address::{Address, AddressInfo, MultiAddr, Symbol, Wallet};
pub use balance::{Balance, Balances};
pub use block::{Block, LatestBlock, SimpleBlock};
pub use chart::{Chart, ChartValue, Pools, Stats};
pub use client::{Client, ClientBuilder, BASE_URL, TOR_BASE_URL, USER_AGENT};
pub use error::ApiError;
pub use options::RequestOptions;
pub use ticker::{Ticker, Tickers};
pub use transaction::{Tx, TxInput, TxOutput};
pub use unspent::{UnspentOutput, UnspentOutputs};
