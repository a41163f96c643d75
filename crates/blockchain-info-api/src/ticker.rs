//! Exchange-rate tickers and fiat-to-BTC conversion.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::ApiError;
use crate::options::RequestOptions;

/// Market rates keyed by currency code (`USD`, `EUR`, ...).
pub type Tickers = HashMap<String, Ticker>;

/// Market rates for one currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticker {
    pub last: f64,
    pub buy: f64,
    pub sell: f64,
    pub symbol: String,
    #[serde(rename = "15m")]
    pub fifteen_min: f64,
}

impl Client {
    /// Fetch current market rates for all supported currencies.
    pub fn get_ticker(&self) -> Result<Tickers, ApiError> {
        self.execute("/ticker", &RequestOptions::new())
    }

    /// Convert a fiat amount to BTC at the current market rate. The endpoint
    /// answers with a bare JSON number.
    pub fn to_btc(&self, currency: &str, value: f64) -> Result<f64, ApiError> {
        if currency.trim().is_empty() {
            return Err(ApiError::EmptyParameter("currency"));
        }
        let options = RequestOptions::new()
            .with("currency", currency)
            .with("value", value.to_string());
        self.execute("/tobtc", &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_btc_rejects_blank_currency_without_network() {
        let client = Client::builder().base_url("http://192.0.2.1:1").build();
        let err = client
            .to_btc(" ", 10.0)
            .expect_err("blank currency must be rejected");
        assert!(matches!(err, ApiError::EmptyParameter("currency")));
    }

    #[test]
    fn tickers_deserialize_keyed_by_currency() {
        let body = r#"{
            "USD": {"15m": 2764.23, "last": 2764.23, "buy": 2764.23,
                    "sell": 2764.23, "symbol": "$"},
            "EUR": {"15m": 2372.77, "last": 2372.77, "buy": 2372.77,
                    "sell": 2372.77, "symbol": "€"}
        }"#;

        let tickers: Tickers = serde_json::from_str(body).expect("must deserialize");
        assert_eq!(tickers.len(), 2);
        assert_eq!(tickers["USD"].symbol, "$");
        assert!((tickers["EUR"].fifteen_min - 2372.77).abs() < f64::EPSILON);
    }

    #[test]
    fn bare_number_body_parses_as_f64() {
        let value: f64 = serde_json::from_str("0.00361674").expect("bare number is valid JSON");
        assert!((value - 0.00361674).abs() < f64::EPSILON);
    }
}
