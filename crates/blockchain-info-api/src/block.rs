//! Block records and block lookups.

use serde::{Deserialize, Serialize};

use crate::client::{check_hash, Client};
use crate::error::ApiError;
use crate::options::RequestOptions;
use crate::transaction::Tx;

/// A full block as returned by the raw-block and block-height resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    pub hash: String,
    pub ver: u64,
    pub prev_block: String,
    pub mrkl_root: String,
    pub time: u64,
    pub bits: u64,
    pub nonce: u64,
    pub n_tx: u64,
    pub size: u64,
    pub block_index: u64,
    pub main_chain: bool,
    pub height: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relayed_by: Option<String>,
    pub tx: Vec<Tx>,
}

/// The abbreviated block shape from the day/pool block listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleBlock {
    pub height: u64,
    pub hash: String,
    pub time: u64,
    pub main_chain: bool,
}

/// Chain-tip summary from the latest-block resource. Also embedded in
/// multi-address responses under `info.latest_block`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatestBlock {
    pub hash: String,
    pub time: u64,
    pub block_index: u64,
    pub height: u64,
    #[serde(rename = "txIndexes")]
    pub tx_indexes: Vec<u64>,
}

/// Wrapper shape shared by `/block-height/{n}` and `/blocks/{selector}`.
#[derive(Debug, Deserialize)]
struct BlockList<T> {
    blocks: Vec<T>,
}

impl Client {
    /// Fetch one block by its 64-character hex hash, transactions included.
    pub fn get_block(&self, hash: &str) -> Result<Block, ApiError> {
        self.get_block_with(hash, &RequestOptions::new())
    }

    /// [`Client::get_block`] with explicit query options.
    pub fn get_block_with(&self, hash: &str, options: &RequestOptions) -> Result<Block, ApiError> {
        check_hash(hash, ApiError::WrongBlockHash)?;
        self.execute(&format!("/rawblock/{hash}"), options)
    }

    /// Fetch every block at a given height. Returns more than one block when
    /// the height saw a stale fork; `main_chain` distinguishes them.
    pub fn get_blocks_at_height(&self, height: u64) -> Result<Vec<Block>, ApiError> {
        self.get_blocks_at_height_with(height, &RequestOptions::new())
    }

    /// [`Client::get_blocks_at_height`] with explicit query options.
    pub fn get_blocks_at_height_with(
        &self,
        height: u64,
        options: &RequestOptions,
    ) -> Result<Vec<Block>, ApiError> {
        let list: BlockList<Block> = self.execute(&format!("/block-height/{height}"), options)?;
        Ok(list.blocks)
    }

    /// Fetch the current chain tip summary.
    pub fn get_latest_block(&self) -> Result<LatestBlock, ApiError> {
        self.execute("/latestblock", &RequestOptions::new())
    }

    /// List blocks for a selector: a day as a millisecond timestamp, or a
    /// mining pool name.
    pub fn get_blocks(&self, selector: &str) -> Result<Vec<SimpleBlock>, ApiError> {
        self.get_blocks_with(selector, &RequestOptions::new())
    }

    /// [`Client::get_blocks`] with explicit query options.
    pub fn get_blocks_with(
        &self,
        selector: &str,
        options: &RequestOptions,
    ) -> Result<Vec<SimpleBlock>, ApiError> {
        if selector.trim().is_empty() {
            return Err(ApiError::EmptyParameter("block selector"));
        }
        let list: BlockList<SimpleBlock> =
            self.execute(&format!("/blocks/{selector}"), options)?;
        Ok(list.blocks)
    }
}
