use std::fs::File;
use std::io::{self, Write};

use super::api::BillingApi;
use super::outcome_log::OutcomeLog;
use crate::core::{
    CustomerError, CustomerInput, MergedBillingRecord, NormalizedVat, VatSyncError,
    merge_billing_record, normalize_vat_number,
};

/// A found customer with its merged billing record, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedUpdate {
    pub customer_id: String,
    pub vat: NormalizedVat,
    pub record: MergedBillingRecord,
}

/// Lookup, normalize, and merge for one customer. No writes happen here.
///
/// # Errors
///
/// `CustomerError::NotFound` if no remote customer has the email,
/// `CustomerError::Lookup` if the lookup request itself failed.
pub fn prepare_update(
    api: &impl BillingApi,
    customer: &CustomerInput,
) -> Result<PreparedUpdate, CustomerError> {
    let remote = api
        .find_customer_by_email(&customer.email)
        .map_err(CustomerError::Lookup)?
        .ok_or_else(|| CustomerError::NotFound {
            email: customer.email.clone(),
        })?;

    let vat = normalize_vat_number(&customer.vat_number);
    let record = merge_billing_record(customer, &vat.value, Some(&remote));
    log::debug!(
        "{}: merged {} billing fields for customer {}",
        customer.email,
        record.len(),
        remote.id
    );

    Ok(PreparedUpdate {
        customer_id: remote.id,
        vat,
        record,
    })
}

/// Terminal outcome for one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerReport {
    pub email: String,
    pub result: Result<PreparedUpdate, CustomerError>,
}

/// Outcomes of one batch run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub customers: Vec<CustomerReport>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.customers.iter().filter(|c| c.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.customers.len() - self.succeeded()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &CustomerError)> {
        self.customers
            .iter()
            .filter_map(|c| c.result.as_ref().err().map(|e| (c.email.as_str(), e)))
    }
}

/// Runs the per-customer pipeline over a batch, one customer at a time.
///
/// A failing customer is logged and skipped; it never stops the batch.
/// Only a failure to write the outcome log aborts the run.
pub struct VatUpdater<A, W = File> {
    api: A,
    log: OutcomeLog<W>,
}

impl<A: BillingApi, W: Write> VatUpdater<A, W> {
    pub fn new(api: A, log: OutcomeLog<W>) -> Self {
        Self { api, log }
    }

    /// Process `customers` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns `VatSyncError::Io` if an outcome could not be written to the
    /// log. Customers processed before that point keep their outcome.
    pub fn run<I>(&mut self, customers: I) -> Result<BatchReport, VatSyncError>
    where
        I: IntoIterator<Item = CustomerInput>,
    {
        let mut report = BatchReport::default();
        for customer in customers {
            let result = self.process(&customer)?;
            report.customers.push(CustomerReport {
                email: customer.email,
                result,
            });
        }
        log::info!(
            "batch finished: {} updated, {} failed",
            report.succeeded(),
            report.failed()
        );
        Ok(report)
    }

    /// Run the full pipeline for a single customer and log its outcome.
    ///
    /// The outer `Result` only fails on log I/O; the inner one is the
    /// customer's own outcome.
    pub fn process(
        &mut self,
        customer: &CustomerInput,
    ) -> io::Result<Result<PreparedUpdate, CustomerError>> {
        let email = &customer.email;
        let result = match prepare_update(&self.api, customer) {
            Ok(update) => {
                if update.vat.was_stripped() {
                    self.log.info(format!(
                        "Removed country code from VAT number for {email}"
                    ))?;
                }
                self.api
                    .update_billing_info(&update.customer_id, &update.record)
                    .map(|()| update)
                    .map_err(CustomerError::Update)
            }
            Err(e) => Err(e),
        };

        match &result {
            Ok(_) => self.log.success(format!(
                "Updated VAT number and billing info for customer {email}"
            ))?,
            Err(CustomerError::NotFound { .. }) => {
                self.log.error(format!("Customer not found with email {email}"))?
            }
            Err(CustomerError::Lookup(e) | CustomerError::Update(e)) => self
                .log
                .error(format!("Failed to update VAT for {email}: {e}"))?,
        };
        Ok(result)
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn log(&self) -> &OutcomeLog<W> {
        &self.log
    }

    pub fn into_parts(self) -> (A, OutcomeLog<W>) {
        (self.api, self.log)
    }
}
