use crate::core::{ApiError, MergedBillingRecord, RemoteCustomer};

/// The two calls the updater needs from a billing backend.
pub trait BillingApi {
    /// First customer whose email matches exactly, or `None`.
    fn find_customer_by_email(&self, email: &str) -> Result<Option<RemoteCustomer>, ApiError>;

    /// Replace the billing info of `customer_id` with `record`.
    fn update_billing_info(
        &self,
        customer_id: &str,
        record: &MergedBillingRecord,
    ) -> Result<(), ApiError>;
}

impl<T: BillingApi + ?Sized> BillingApi for &T {
    fn find_customer_by_email(&self, email: &str) -> Result<Option<RemoteCustomer>, ApiError> {
        (**self).find_customer_by_email(email)
    }

    fn update_billing_info(
        &self,
        customer_id: &str,
        record: &MergedBillingRecord,
    ) -> Result<(), ApiError> {
        (**self).update_billing_info(customer_id, record)
    }
}
