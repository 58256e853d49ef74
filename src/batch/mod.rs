//! Batch orchestration: the billing API port, the outcome log, and the
//! updater that runs lookup, normalize, merge, update, and log for every
//! customer in turn.
//!
//! # Example
//!
//! ```ignore
//! use vatsync::batch::*;
//!
//! let log = OutcomeLog::open("vat_update_log.txt")?;
//! let mut updater = VatUpdater::new(client, log);
//! let report = updater.run(load_customers(std::fs::File::open("customers.json")?)?)?;
//! println!("{} updated, {} failed", report.succeeded(), report.failed());
//! ```

mod api;
mod input;
mod outcome_log;
mod updater;

pub use api::BillingApi;
pub use input::load_customers;
pub use outcome_log::{LogEntry, LogLevel, OutcomeLog};
pub use updater::{BatchReport, CustomerReport, PreparedUpdate, VatUpdater, prepare_update};
