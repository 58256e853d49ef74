use serde_json::Value;
use std::io::Read;

use crate::core::{CustomerInput, VatSyncError};

/// Read customers from a JSON object keyed by email.
///
/// ```json
/// {
///   "billing@acme.de": { "vat_number": "DE123456789", "city": "Berlin" },
///   "info@kunde.at": { "vat_number": "ATU12345678" }
/// }
/// ```
///
/// Customers are returned in file order. `vat_number` is required for
/// every entry; all address fields are optional.
pub fn load_customers(reader: impl Read) -> Result<Vec<CustomerInput>, VatSyncError> {
    let value: Value =
        serde_json::from_reader(reader).map_err(|e| VatSyncError::Input(e.to_string()))?;
    let Value::Object(entries) = value else {
        return Err(VatSyncError::Input(
            "expected a JSON object mapping email to customer fields".into(),
        ));
    };

    entries
        .into_iter()
        .map(|(email, fields)| {
            if email.trim().is_empty() {
                return Err(VatSyncError::Input("empty email key".into()));
            }
            let mut customer: CustomerInput = serde_json::from_value(fields)
                .map_err(|e| VatSyncError::Input(format!("{email}: {e}")))?;
            customer.email = email;
            Ok(customer)
        })
        .collect()
}
