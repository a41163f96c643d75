//! Unspent transaction outputs for a set of addresses.

use serde::{Deserialize, Serialize};

use crate::client::{active_options, Client};
use crate::error::ApiError;
use crate::options::RequestOptions;

/// The unspent-output listing. `notice` is set when the service degrades the
/// result, for example when an address has too many outputs to enumerate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnspentOutputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub unspent_outputs: Vec<UnspentOutput>,
}

/// One spendable output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnspentOutput {
    pub tx_hash: String,
    pub tx_index: u64,
    pub tx_output_n: u64,
    pub script: String,
    pub value: u64,
    pub confirmations: u64,
}

impl Client {
    /// Fetch unspent outputs for one or more addresses. Supports `limit` and
    /// `confirmations` options.
    pub fn get_unspent(&self, addresses: &[&str]) -> Result<UnspentOutputs, ApiError> {
        self.get_unspent_with(addresses, &RequestOptions::new())
    }

    /// [`Client::get_unspent`] with explicit query options.
    pub fn get_unspent_with(
        &self,
        addresses: &[&str],
        options: &RequestOptions,
    ) -> Result<UnspentOutputs, ApiError> {
        let options = active_options(addresses, options)?;
        self.execute("/unspent", &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_unspent_rejects_empty_list_without_network() {
        let client = Client::builder().base_url("http://192.0.2.1:1").build();
        let err = client
            .get_unspent(&[])
            .expect_err("empty list must be rejected");
        assert!(matches!(err, ApiError::NoAddresses));
    }

    #[test]
    fn unspent_listing_deserializes_with_notice() {
        let body = r#"{
            "notice": "Results may be trimmed",
            "unspent_outputs": [{
                "tx_hash": "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
                "tx_index": 14011, "tx_output_n": 0,
                "script": "76a914..88ac", "value": 5000000000, "confirmations": 820000
            }]
        }"#;

        let outputs: UnspentOutputs = serde_json::from_str(body).expect("must deserialize");
        assert_eq!(outputs.notice.as_deref(), Some("Results may be trimmed"));
        assert_eq!(outputs.unspent_outputs.len(), 1);
        assert_eq!(outputs.unspent_outputs[0].value, 5_000_000_000);
    }

    #[test]
    fn unspent_listing_notice_is_absent_on_clean_results() {
        let body = r#"{"unspent_outputs": []}"#;
        let outputs: UnspentOutputs = serde_json::from_str(body).expect("must deserialize");
        assert_eq!(outputs.notice, None);
        assert!(outputs.unspent_outputs.is_empty());
    }
}
