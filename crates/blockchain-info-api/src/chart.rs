//! Chart series, mining-pool distribution, and network statistics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::ApiError;
use crate::options::RequestOptions;

/// One chart series, e.g. `transactions-per-second` or `market-price`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chart {
    pub status: String,
    pub name: String,
    pub unit: String,
    pub period: String,
    pub description: String,
    pub values: Vec<ChartValue>,
}

/// One chart point: `x` is a unix timestamp, `y` the sampled value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartValue {
    pub x: u64,
    pub y: f64,
}

/// Blocks-mined count per pool over the queried timespan.
pub type Pools = HashMap<String, u64>;

/// Network-wide statistics snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub market_price_usd: f64,
    pub hash_rate: f64,
    pub total_fees_btc: u64,
    pub n_btc_mined: u64,
    pub n_tx: u64,
    pub n_blocks_mined: u64,
    pub minutes_between_blocks: f64,
    pub totalbc: u64,
    pub n_blocks_total: u64,
    pub estimated_transaction_volume_usd: f64,
    pub blocks_size: u64,
    pub miners_revenue_usd: f64,
    pub nextretarget: u64,
    pub difficulty: u64,
    pub estimated_btc_sent: u64,
    pub miners_revenue_btc: u64,
    pub total_btc_sent: u64,
    pub trade_volume_btc: f64,
    pub trade_volume_usd: f64,
    pub timestamp: u64,
}

impl Client {
    /// Fetch one chart series by name. Supports `timespan`, `start`, and
    /// `sampled` options.
    pub fn get_chart(&self, chart_type: &str) -> Result<Chart, ApiError> {
        self.get_chart_with(chart_type, &RequestOptions::new())
    }

    /// [`Client::get_chart`] with explicit query options.
    pub fn get_chart_with(
        &self,
        chart_type: &str,
        options: &RequestOptions,
    ) -> Result<Chart, ApiError> {
        if chart_type.trim().is_empty() {
            return Err(ApiError::EmptyParameter("chart type"));
        }
        self.execute(&format!("/charts/{chart_type}"), options)
    }

    /// Fetch the mining-pool block distribution. Supports a `timespan`
    /// option between `1days` and `10days`.
    pub fn get_pools(&self) -> Result<Pools, ApiError> {
        self.get_pools_with(&RequestOptions::new())
    }

    /// [`Client::get_pools`] with explicit query options.
    pub fn get_pools_with(&self, options: &RequestOptions) -> Result<Pools, ApiError> {
        self.execute("/pools", options)
    }

    /// Fetch the network statistics snapshot.
    pub fn get_stats(&self) -> Result<Stats, ApiError> {
        self.get_stats_with(&RequestOptions::new())
    }

    /// [`Client::get_stats`] with explicit query options.
    pub fn get_stats_with(&self, options: &RequestOptions) -> Result<Stats, ApiError> {
        self.execute("/stats", options)
    }
}
