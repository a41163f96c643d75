//! Synchronous HTTP transport for the blockchain.info data API.
//!
//! [`Client`] owns a blocking `reqwest` client and a base URL, and exposes
//! one transport primitive, [`Client::execute`]: encode options as a query
//! string, GET, check the status, deserialize JSON. Endpoint wrappers in the
//! resource modules validate their inputs and delegate here.
//!
//! A call blocks the calling thread for the duration of the round trip.
//! Timeouts and cancellation belong to the underlying `reqwest` client
//! configuration; the transport adds no policy of its own.

use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::ApiError;
use crate::options::RequestOptions;

/// Root of the public API endpoint.
pub const BASE_URL: &str = "https://blockchain.info";

/// Root of the onion-routed alternative endpoint. Reaching it requires a
/// Tor-capable proxy on the underlying HTTP client.
pub const TOR_BASE_URL: &str = "https://blockchainbdgpzk.onion";

/// Fixed identifier sent as the `User-Agent` header on every request.
pub const USER_AGENT: &str = concat!(
    "blockchain-info-api/",
    env!("CARGO_PKG_VERSION"),
    " (rust)"
);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A reusable handle to the API. Construct once, share freely: every call is
/// a stateless request-response round trip and errors are only ever returned,
/// never stored on the client.
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
    user_agent: String,
}

impl Client {
    /// Client against the public endpoint with default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Client against the onion-routed endpoint with default configuration.
    pub fn tor() -> Self {
        Self::builder().base_url(TOR_BASE_URL).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one GET against `base_url + path` and deserialize the JSON body
    /// into `T`.
    ///
    /// `format=json` is forced onto the options after merging, so it cannot
    /// be overridden by callers. Intended for the resource wrappers, but
    /// public so endpoints this crate does not wrap yet remain reachable.
    pub fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let query = options.merged(&RequestOptions::new().with("format", "json"));
        let url = format!("{}{}", self.base_url, path);
        debug!(path, params = query.len(), "api request");

        let response = self
            .http
            .get(&url)
            .query(&query.pairs())
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .map_err(ApiError::Request)?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|source| ApiError::ReadBody { status, source })?;
        debug!(path, %status, body_len = body.len(), "api response");
        trace!(path, body = %body, "api response body");

        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Parse { source, body })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Configures and builds a [`Client`].
pub struct ClientBuilder {
    base_url: String,
    user_agent_suffix: Option<String>,
    timeout: Duration,
    http: Option<reqwest::blocking::Client>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            user_agent_suffix: None,
            timeout: DEFAULT_TIMEOUT,
            http: None,
        }
    }
}

impl ClientBuilder {
    /// Point the client at a different root URL. Trailing slashes are
    /// trimmed so resource paths concatenate cleanly.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Append a caller identifier to the library `User-Agent`.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Overall per-request timeout. Ignored when a custom HTTP client is
    /// supplied via [`ClientBuilder::http_client`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a pre-configured blocking client (proxy setup, custom TLS, Tor).
    pub fn http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Client {
        let http = self.http.unwrap_or_else(|| {
            reqwest::blocking::Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .timeout(self.timeout)
                .build()
                .expect("reqwest client builder uses valid static config")
        });
        let user_agent = match self.user_agent_suffix {
            Some(ref suffix) => format!("{USER_AGENT} {suffix}"),
            None => USER_AGENT.to_owned(),
        };

        Client {
            http,
            base_url: self.base_url,
            user_agent,
        }
    }
}

// ==============================================================================
// Input Validation
// ==============================================================================

/// Reject blank single addresses before any network activity.
pub(crate) fn check_address(address: &str) -> Result<(), ApiError> {
    if address.trim().is_empty() {
        return Err(ApiError::WrongAddress(address.to_owned()));
    }
    Ok(())
}

/// Reject empty address lists and blank members. One valid address is
/// sufficient for every multi-address endpoint.
pub(crate) fn check_addresses(addresses: &[&str]) -> Result<(), ApiError> {
    if addresses.is_empty() {
        return Err(ApiError::NoAddresses);
    }
    for address in addresses {
        check_address(address)?;
    }
    Ok(())
}

/// Require a 64-character hex hash; `wrap` selects the tx/block error kind.
pub(crate) fn check_hash(hash: &str, wrap: fn(String) -> ApiError) -> Result<(), ApiError> {
    if hash.len() != 64 || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(wrap(hash.to_owned()));
    }
    Ok(())
}

/// Build the options for a multi-address endpoint: validated addresses joined
/// with `|` under `active`, caller overrides merged on top.
pub(crate) fn active_options(
    addresses: &[&str],
    overrides: &RequestOptions,
) -> Result<RequestOptions, ApiError> {
    check_addresses(addresses)?;
    let defaults = RequestOptions::new().with("active", addresses.join("|"));
    Ok(defaults.merged(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_options_joins_addresses_with_pipe() {
        let addresses = [
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            "12c6DSiU4Rq3P4ZxziKxzrL5LmMBrzjrJX",
        ];

        let opts =
            active_options(&addresses, &RequestOptions::new()).expect("addresses must validate");
        assert_eq!(
            opts.get("active"),
            Some("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa|12c6DSiU4Rq3P4ZxziKxzrL5LmMBrzjrJX")
        );
    }

    #[test]
    fn active_options_single_address_is_accepted() {
        let opts = active_options(&["1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"], &RequestOptions::new())
            .expect("one address is enough");
        assert_eq!(opts.get("active"), Some("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
    }

    #[test]
    fn active_options_caller_overrides_win() {
        let overrides = RequestOptions::new().with("active", "overridden");
        let opts = active_options(&["addr"], &overrides).expect("addresses must validate");
        assert_eq!(opts.get("active"), Some("overridden"));
    }

    #[test]
    fn check_addresses_rejects_empty_list() {
        assert!(matches!(check_addresses(&[]), Err(ApiError::NoAddresses)));
    }

    #[test]
    fn check_addresses_rejects_blank_member() {
        let err = check_addresses(&["1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", " "])
            .expect_err("blank member must be rejected");
        assert!(matches!(err, ApiError::WrongAddress(a) if a == " "));
    }

    #[test]
    fn check_hash_rejects_short_and_non_hex() {
        assert!(matches!(
            check_hash("abc", ApiError::WrongTxHash),
            Err(ApiError::WrongTxHash(_))
        ));
        let non_hex = "g".repeat(64);
        assert!(matches!(
            check_hash(&non_hex, ApiError::WrongBlockHash),
            Err(ApiError::WrongBlockHash(_))
        ));
    }

    #[test]
    fn check_hash_accepts_64_hex_chars() {
        let hash = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
        assert!(check_hash(hash, ApiError::WrongTxHash).is_ok());
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let client = Client::builder().base_url("http://127.0.0.1:1/").build();
        assert_eq!(client.base_url(), "http://127.0.0.1:1");
    }

    #[test]
    fn builder_user_agent_suffix_is_appended() {
        let client = Client::builder().user_agent_suffix("my-app/2.0").build();
        assert!(client.user_agent.starts_with("blockchain-info-api/"));
        assert!(client.user_agent.ends_with(" my-app/2.0"));
    }
}
