use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A field that takes part in the billing merge.
///
/// The declaration order is the order fields are merged and sent in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingField {
    VatNumber,
    FirstName,
    LastName,
    Line1,
    City,
    Country,
    Zip,
    Company,
    State,
    StateCode,
}

impl BillingField {
    /// All mergeable fields, in merge order.
    pub const ALL: [BillingField; 10] = [
        Self::VatNumber,
        Self::FirstName,
        Self::LastName,
        Self::Line1,
        Self::City,
        Self::Country,
        Self::Zip,
        Self::Company,
        Self::State,
        Self::StateCode,
    ];

    /// The nine address fields, i.e. everything except the VAT number.
    pub fn address_fields() -> impl Iterator<Item = BillingField> {
        Self::ALL.into_iter().skip(1)
    }

    /// Field name as used by the billing API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VatNumber => "vat_number",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Line1 => "line1",
            Self::City => "city",
            Self::Country => "country",
            Self::Zip => "zip",
            Self::Company => "company",
            Self::State => "state",
            Self::StateCode => "state_code",
        }
    }

    /// Whether the field lives inside the remote `billing_address` object.
    pub fn is_address_field(self) -> bool {
        self != Self::VatNumber
    }
}

impl fmt::Display for BillingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied data for one customer.
///
/// `email` is the lookup key. When deserialized from a customers file the
/// email comes from the surrounding map key, not from the record itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInput {
    #[serde(skip)]
    pub email: String,
    /// VAT number as supplied, possibly with a country prefix (e.g. "DE123456789").
    pub vat_number: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub state_code: Option<String>,
}

impl CustomerInput {
    /// Supplied value of an address field. Returns `None` for `VatNumber`,
    /// which is always normalized before it takes part in a merge.
    pub fn address_field(&self, field: BillingField) -> Option<&str> {
        let value = match field {
            BillingField::VatNumber => return None,
            BillingField::FirstName => &self.first_name,
            BillingField::LastName => &self.last_name,
            BillingField::Line1 => &self.line1,
            BillingField::City => &self.city,
            BillingField::Country => &self.country,
            BillingField::Zip => &self.zip,
            BillingField::Company => &self.company,
            BillingField::State => &self.state,
            BillingField::StateCode => &self.state_code,
        };
        value.as_deref()
    }
}

/// Snapshot of a customer as returned by the billing API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteCustomer {
    /// Remote customer id used for the update call.
    pub id: String,
    /// Top-level VAT number currently stored remotely.
    pub vat_number: Option<String>,
    /// Raw billing address, string values only. May contain keys outside
    /// [`BillingField`], such as the `object` type tag.
    pub billing_address: Option<BTreeMap<String, String>>,
}

impl RemoteCustomer {
    /// Remote value for a mergeable field.
    pub fn field(&self, field: BillingField) -> Option<&str> {
        if field.is_address_field() {
            self.billing_address
                .as_ref()
                .and_then(|address| address.get(field.as_str()))
                .map(String::as_str)
        } else {
            self.vat_number.as_deref()
        }
    }
}
