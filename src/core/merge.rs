//! Two-source billing merge.

use std::collections::BTreeMap;

use super::types::*;

/// Key carried by raw API objects to tag their type. Never forwarded.
pub const RESERVED_KEY: &str = "object";

/// Billing fields ready to be sent: no value is empty or `"0"`.
///
/// Keys are [`BillingField`]s, so raw remote keys such as
/// [`RESERVED_KEY`] cannot end up in a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedBillingRecord {
    fields: BTreeMap<BillingField, String>,
}

impl MergedBillingRecord {
    pub fn get(&self, field: BillingField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Look a field up by its API name.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(field, _)| field.as_str() == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in merge order.
    pub fn iter(&self) -> impl Iterator<Item = (BillingField, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// API names of the present fields, in merge order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().map(|field| field.as_str())
    }
}

/// Whether a value is left out of a merged record: empty, or the string `"0"`.
pub fn is_blank(value: &str) -> bool {
    value.is_empty() || value == "0"
}

/// Blank values are dropped on collection.
impl FromIterator<(BillingField, String)> for MergedBillingRecord {
    fn from_iter<I: IntoIterator<Item = (BillingField, String)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .filter(|(_, value)| !is_blank(value))
                .collect(),
        }
    }
}

/// Pick the supplied value if non-empty, else the remote one if non-empty.
pub fn prefer_supplied<'a>(supplied: Option<&'a str>, remote: Option<&'a str>) -> Option<&'a str> {
    supplied
        .filter(|value| !value.is_empty())
        .or_else(|| remote.filter(|value| !value.is_empty()))
}

/// Overlay a customer's supplied fields onto the remote billing data.
///
/// `vat_number` is the already normalized VAT number. For every
/// [`BillingField`] the supplied value wins when non-empty, otherwise the
/// remote value is kept. A winning `"0"` is dropped rather than replaced
/// by the remote value. Fields empty on both sides are left out.
pub fn merge_billing_record(
    input: &CustomerInput,
    vat_number: &str,
    remote: Option<&RemoteCustomer>,
) -> MergedBillingRecord {
    BillingField::ALL
        .into_iter()
        .filter_map(|field| {
            let supplied = match field {
                BillingField::VatNumber => Some(vat_number),
                _ => input.address_field(field),
            };
            let existing = remote.and_then(|customer| customer.field(field));
            prefer_supplied(supplied, existing).map(|value| (field, value.to_string()))
        })
        .collect()
}
