//! Chargebee v2 integration.
//!
//! Provides a blocking [`ChargebeeClient`] implementing
//! [`BillingApi`](crate::batch::BillingApi) and a one-call entry point,
//! [`update_vat_numbers`], that runs a whole batch from an [`UpdaterConfig`].
//!
//! # Example
//!
//! ```ignore
//! use vatsync::chargebee::*;
//! use vatsync::core::CustomerInputBuilder;
//!
//! let config = UpdaterConfig::new("acme", "live_...");
//! let customers = vec![CustomerInputBuilder::new("billing@kunde.de", "DE123456789").build()];
//! let report = update_vat_numbers(&config, customers)?;
//! assert!(report.is_clean());
//! ```

mod client;
mod wire;

pub use client::{ChargebeeClient, DEFAULT_TIMEOUT, site_base_url};
pub use wire::{billing_form, form_key};

use std::path::PathBuf;
use std::time::Duration;

use crate::batch::{BatchReport, OutcomeLog, VatUpdater};
use crate::core::{CustomerInput, VatSyncError};

/// Default outcome log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "vat_update_log.txt";

/// Everything a batch run needs, passed in at call time.
#[derive(Clone)]
pub struct UpdaterConfig {
    /// Chargebee site name, the `<site>` in `<site>.chargebee.com`.
    pub site: String,
    pub api_key: String,
    /// Append-only outcome log.
    pub log_file: PathBuf,
    pub timeout: Duration,
    /// Overrides the site-derived API root when set.
    pub base_url: Option<String>,
}

impl std::fmt::Debug for UpdaterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdaterConfig")
            .field("site", &self.site)
            .field("log_file", &self.log_file)
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl UpdaterConfig {
    pub fn new(site: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            api_key: api_key.into(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            timeout: DEFAULT_TIMEOUT,
            base_url: None,
        }
    }

    pub fn log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Check that credentials are present.
    pub fn validate(&self) -> Result<(), VatSyncError> {
        if self.api_key.trim().is_empty() {
            return Err(VatSyncError::Config("API key is empty".into()));
        }
        if self.base_url.is_none() && self.site.trim().is_empty() {
            return Err(VatSyncError::Config("site name is empty".into()));
        }
        Ok(())
    }

    /// Build the client this configuration describes.
    pub fn client(&self) -> Result<ChargebeeClient, VatSyncError> {
        self.validate()?;
        let client = match &self.base_url {
            Some(url) => ChargebeeClient::with_base_url(url.as_str(), &self.api_key, self.timeout)?,
            None => ChargebeeClient::new(&self.site, &self.api_key, self.timeout)?,
        };
        Ok(client)
    }
}

/// Run one batch against Chargebee, logging to `config.log_file`.
///
/// # Errors
///
/// Setup failures (invalid config, unopenable log) and log write failures.
/// Per-customer failures are reported in the returned [`BatchReport`].
pub fn update_vat_numbers<I>(config: &UpdaterConfig, customers: I) -> Result<BatchReport, VatSyncError>
where
    I: IntoIterator<Item = CustomerInput>,
{
    let client = config.client()?;
    let log = OutcomeLog::open(&config.log_file)?;
    log::info!(
        "starting VAT update against {}, logging to {}",
        client.base_url(),
        config.log_file.display()
    );
    VatUpdater::new(client, log).run(customers)
}
