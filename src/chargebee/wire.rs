//! Chargebee v2 request and response shapes.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::{BillingField, MergedBillingRecord, RemoteCustomer};

/// `GET /customers` response.
#[derive(Debug, Deserialize)]
pub(crate) struct CustomerList {
    #[serde(default)]
    pub list: Vec<CustomerListEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomerListEntry {
    pub customer: CustomerPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomerPayload {
    pub id: String,
    #[serde(default)]
    pub vat_number: Option<String>,
    #[serde(default)]
    pub billing_address: Option<BTreeMap<String, Value>>,
}

impl CustomerList {
    /// The first listed customer, if any.
    pub fn into_first(self) -> Option<RemoteCustomer> {
        self.list.into_iter().next().map(|entry| entry.customer.into())
    }
}

impl From<CustomerPayload> for RemoteCustomer {
    fn from(payload: CustomerPayload) -> Self {
        // non-string values (booleans, nested objects) never take part in a merge
        let billing_address = payload.billing_address.map(|address| {
            address
                .into_iter()
                .filter_map(|(key, value)| match value {
                    Value::String(s) => Some((key, s)),
                    _ => None,
                })
                .collect()
        });
        RemoteCustomer {
            id: payload.id,
            vat_number: payload.vat_number,
            billing_address,
        }
    }
}

/// Form key of a field on `update_billing_info`.
pub fn form_key(field: BillingField) -> &'static str {
    match field {
        BillingField::VatNumber => "vat_number",
        BillingField::FirstName => "billing_address[first_name]",
        BillingField::LastName => "billing_address[last_name]",
        BillingField::Line1 => "billing_address[line1]",
        BillingField::City => "billing_address[city]",
        BillingField::Country => "billing_address[country]",
        BillingField::Zip => "billing_address[zip]",
        BillingField::Company => "billing_address[company]",
        BillingField::State => "billing_address[state]",
        BillingField::StateCode => "billing_address[state_code]",
    }
}

/// Form pairs for `update_billing_info`, in merge order.
pub fn billing_form(record: &MergedBillingRecord) -> Vec<(&'static str, &str)> {
    record
        .iter()
        .map(|(field, value)| (form_key(field), value))
        .collect()
}
