//! Blocking Chargebee v2 REST client.

use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};
use std::fmt;
use std::time::Duration;

use super::wire::{CustomerList, billing_form};
use crate::batch::BillingApi;
use crate::core::{ApiError, MergedBillingRecord, RemoteCustomer};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// API root for a Chargebee site.
pub fn site_base_url(site: &str) -> String {
    format!("https://{site}.chargebee.com/api/v2")
}

/// Chargebee client authenticated with an API key.
///
/// Requests use HTTP Basic auth with the key as user name and an empty
/// password. Bodies are form-encoded, responses are JSON.
#[derive(Clone)]
pub struct ChargebeeClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for ChargebeeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChargebeeClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ChargebeeClient {
    /// Client for `https://<site>.chargebee.com/api/v2`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(site: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        Self::with_base_url(site_base_url(site), api_key, timeout)
    }

    /// Client for an arbitrary API root, e.g. a local test server.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if `base_url` is not an absolute
    /// http(s) URL or the HTTP client cannot be built.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let base_url = base_url.into();
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::Transport(format!("invalid base URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Transport(format!("invalid base URL {base_url}")));
        }
        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// API root joined with `segments`, each percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send an authenticated request and return the body of a non-error response.
    fn execute(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let resp = request
            .basic_auth(&self.api_key, Some(""))
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if status.is_client_error() || status.is_server_error() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

impl BillingApi for ChargebeeClient {
    fn find_customer_by_email(&self, email: &str) -> Result<Option<RemoteCustomer>, ApiError> {
        let url = self.endpoint(&["customers"]);
        log::debug!("looking up customer {email}");
        let body = self.execute(self.http.get(url).query(&[("email[is]", email)]))?;
        let list: CustomerList =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(list.into_first())
    }

    fn update_billing_info(
        &self,
        customer_id: &str,
        record: &MergedBillingRecord,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["customers", customer_id, "update_billing_info"]);
        log::debug!("updating billing info of {customer_id}");
        self.execute(self.http.post(url).form(&billing_form(record)))?;
        Ok(())
    }
}
