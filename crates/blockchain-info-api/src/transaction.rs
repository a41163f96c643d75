//! Transaction records and the single-transaction lookup.
//!
//! [`Tx`] is the shared transaction shape: the address and block endpoints
//! embed the same record, with some fields absent depending on which resource
//! produced it. Absent wire fields deserialize to their defaults.

use serde::{Deserialize, Serialize};

use crate::client::{check_hash, Client};
use crate::error::ApiError;
use crate::options::RequestOptions;

/// One transaction as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tx {
    pub hash: String,
    pub ver: u64,
    pub vin_sz: u64,
    pub vout_sz: u64,
    pub size: u64,
    pub weight: u64,
    pub fee: u64,
    pub lock_time: u64,
    pub tx_index: u64,
    pub double_spend: bool,
    pub time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relayed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
    /// Net effect on the queried address(es); only present on address and
    /// multi-address lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<i64>,
    /// Running balance after this transaction; only present on multi-address
    /// lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
    pub inputs: Vec<TxInput>,
    pub out: Vec<TxOutput>,
}

/// One transaction input. Coinbase inputs have no `prev_out`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxInput {
    pub sequence: u64,
    pub witness: String,
    pub script: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_out: Option<TxOutput>,
}

/// One transaction output, also used for input `prev_out` references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxOutput {
    #[serde(rename = "type")]
    pub kind: u64,
    pub spent: bool,
    pub value: u64,
    pub n: u64,
    pub tx_index: u64,
    pub script: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,
}

impl Client {
    /// Fetch one transaction by its 64-character hex hash.
    pub fn get_transaction(&self, hash: &str) -> Result<Tx, ApiError> {
        self.get_transaction_with(hash, &RequestOptions::new())
    }

    /// [`Client::get_transaction`] with explicit query options.
    pub fn get_transaction_with(
        &self,
        hash: &str,
        options: &RequestOptions,
    ) -> Result<Tx, ApiError> {
        check_hash(hash, ApiError::WrongTxHash)?;
        self.execute(&format!("/rawtx/{hash}"), options)
    }
}
