//! Error taxonomy for API calls.
//!
//! Every failure a call can produce is a variant of [`ApiError`]. Errors are
//! returned, never stored: a `Client` keeps no last-error slot, so sharing one
//! client across threads cannot race on error state.

use reqwest::StatusCode;

/// Failure of a single API call. The first failure encountered wins; the
/// library never retries.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent (DNS failure, connection
    /// refused, timeout, TLS handshake).
    #[error("cannot get data on url")]
    Request(#[source] reqwest::Error),

    /// A response arrived but its body could not be read.
    #[error("could not read answer response (status {status})")]
    ReadBody {
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered outside the 2xx range. The raw body is retained
    /// for inspection.
    #[error("incorrect response status {status}")]
    Status { status: StatusCode, body: String },

    /// A 2xx body that does not deserialize into the destination shape.
    #[error("response parsing error")]
    Parse {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// An address argument was empty or blank. Carries the offending value.
    #[error("address is wrong: `{0}`")]
    WrongAddress(String),

    /// A multi-address call received an empty address list.
    #[error("no address(es) provided")]
    NoAddresses,

    /// A transaction hash argument was not 64 hex characters.
    #[error("transaction hash is wrong: `{0}`")]
    WrongTxHash(String),

    /// A block hash argument was not 64 hex characters.
    #[error("block hash is wrong: `{0}`")]
    WrongBlockHash(String),

    /// A required string parameter (chart type, currency code) was blank.
    #[error("empty parameter: {0}")]
    EmptyParameter(&'static str),
}

impl ApiError {
    /// True for failures detected before any network activity.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::WrongAddress(_)
                | Self::NoAddresses
                | Self::WrongTxHash(_)
                | Self::WrongBlockHash(_)
                | Self::EmptyParameter(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_classification() {
        assert!(ApiError::NoAddresses.is_invalid_input());
        assert!(ApiError::WrongAddress(String::new()).is_invalid_input());
        assert!(ApiError::WrongTxHash("ab".into()).is_invalid_input());

        let parse = ApiError::Parse {
            source: serde_json::from_str::<u8>("x").expect_err("must not parse"),
            body: "x".into(),
        };
        assert!(!parse.is_invalid_input());
    }

    #[test]
    fn wrong_address_display_carries_offender() {
        let err = ApiError::WrongAddress("  ".into());
        assert_eq!(err.to_string(), "address is wrong: `  `");
    }
}
