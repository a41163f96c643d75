//! Address records and the single- and multi-address lookups.
//!
//! The same [`Address`] record serves both resources: a single-address lookup
//! fills `hash160` and embeds transactions, a multi-address lookup reports
//! wallet indexes and leaves per-address transaction lists empty. Fields that
//! only one resource produces are optional or default.

use serde::{Deserialize, Serialize};

use crate::block::LatestBlock;
use crate::client::{active_options, check_address, Client};
use crate::error::ApiError;
use crate::options::RequestOptions;
use crate::transaction::Tx;

/// Per-address summary with an optional transaction listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash160: Option<String>,
    pub address: String,
    pub n_tx: u64,
    pub total_received: u64,
    pub total_sent: u64,
    pub final_balance: u64,
    pub txs: Vec<Tx>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_index: Option<u64>,
}

/// Result of querying a set of addresses at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiAddr {
    pub recommend_include_fee: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharedcoin_endpoint: Option<String>,
    pub wallet: Wallet,
    pub addresses: Vec<Address>,
    pub txs: Vec<Tx>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<AddressInfo>,
}

/// Aggregate totals over the requested address set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
    pub n_tx: u64,
    pub n_tx_filtered: u64,
    pub total_received: u64,
    pub total_sent: u64,
    pub final_balance: u64,
}

/// Network and market context attached to multi-address responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressInfo {
    pub nconnected: u64,
    pub conversion: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_local: Option<Symbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_btc: Option<Symbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_block: Option<LatestBlock>,
}

/// Currency symbol descriptor, shared by the local and BTC variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbol {
    pub code: String,
    pub symbol: String,
    pub name: String,
    pub conversion: f64,
    #[serde(rename = "symbolAppearsAfter")]
    pub symbol_appears_after: bool,
    pub local: bool,
}

impl Client {
    /// Fetch one address with its transaction listing. Supports `offset` and
    /// `limit` options for paging through transactions.
    pub fn get_address(&self, address: &str) -> Result<Address, ApiError> {
        self.get_address_with(address, &RequestOptions::new())
    }

    /// [`Client::get_address`] with explicit query options.
    pub fn get_address_with(
        &self,
        address: &str,
        options: &RequestOptions,
    ) -> Result<Address, ApiError> {
        check_address(address)?;
        self.execute(&format!("/address/{address}"), options)
    }

    /// Fetch a summary over one or more addresses. The service caps a single
    /// request at roughly 80 addresses.
    pub fn get_addresses(&self, addresses: &[&str]) -> Result<MultiAddr, ApiError> {
        self.get_addresses_with(addresses, &RequestOptions::new())
    }

    /// [`Client::get_addresses`] with explicit query options.
    pub fn get_addresses_with(
        &self,
        addresses: &[&str],
        options: &RequestOptions,
    ) -> Result<MultiAddr, ApiError> {
        let options = active_options(addresses, options)?;
        self.execute("/multiaddr", &options)
    }
}
