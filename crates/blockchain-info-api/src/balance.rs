//! Compact per-address balances.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::client::{active_options, Client};
use crate::error::ApiError;
use crate::options::RequestOptions;

/// Balance lookups are keyed by the queried address, not positional.
pub type Balances = HashMap<String, Balance>;

/// Balance summary for one address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    pub final_balance: u64,
    pub n_tx: u64,
    pub total_received: u64,
}

impl Client {
    /// Fetch balances for one or more addresses. The service caps a single
    /// request at roughly 200 addresses.
    pub fn get_balance(&self, addresses: &[&str]) -> Result<Balances, ApiError> {
        self.get_balance_with(addresses, &RequestOptions::new())
    }

    /// [`Client::get_balance`] with explicit query options.
    pub fn get_balance_with(
        &self,
        addresses: &[&str],
        options: &RequestOptions,
    ) -> Result<Balances, ApiError> {
        let options = active_options(addresses, options)?;
        self.execute("/balance", &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_balance_rejects_empty_list_without_network() {
        let client = Client::builder().base_url("http://192.0.2.1:1").build();
        let err = client
            .get_balance(&[])
            .expect_err("empty list must be rejected");
        assert!(matches!(err, ApiError::NoAddresses));
    }

    #[test]
    fn balances_deserialize_keyed_by_address() {
        let body = r#"{
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa":
                {"final_balance": 6815558459, "n_tx": 1105, "total_received": 6815558459},
            "12c6DSiU4Rq3P4ZxziKxzrL5LmMBrzjrJX":
                {"final_balance": 1500000000, "n_tx": 57, "total_received": 1500000000}
        }"#;

        let balances: Balances = serde_json::from_str(body).expect("must deserialize");
        assert_eq!(balances.len(), 2);
        assert_eq!(
            balances["1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"].n_tx,
            1105
        );
        assert_eq!(
            balances["12c6DSiU4Rq3P4ZxziKxzrL5LmMBrzjrJX"].final_balance,
            1_500_000_000
        );
    }
}
