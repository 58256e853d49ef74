use std::collections::BTreeMap;

use super::types::*;

/// Builder for CustomerInput.
pub struct CustomerInputBuilder {
    input: CustomerInput,
}

impl CustomerInputBuilder {
    pub fn new(email: impl Into<String>, vat_number: impl Into<String>) -> Self {
        Self {
            input: CustomerInput {
                email: email.into(),
                vat_number: vat_number.into(),
                ..Default::default()
            },
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.input.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.input.last_name = Some(last_name.into());
        self
    }

    pub fn line1(mut self, line1: impl Into<String>) -> Self {
        self.input.line1 = Some(line1.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.input.city = Some(city.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.input.country = Some(country.into());
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.input.zip = Some(zip.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.input.company = Some(company.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.input.state = Some(state.into());
        self
    }

    pub fn state_code(mut self, state_code: impl Into<String>) -> Self {
        self.input.state_code = Some(state_code.into());
        self
    }

    pub fn build(self) -> CustomerInput {
        self.input
    }
}

/// Builder for RemoteCustomer, mostly useful for tests and fakes.
pub struct RemoteCustomerBuilder {
    customer: RemoteCustomer,
}

impl RemoteCustomerBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            customer: RemoteCustomer {
                id: id.into(),
                ..Default::default()
            },
        }
    }

    pub fn vat_number(mut self, vat_number: impl Into<String>) -> Self {
        self.customer.vat_number = Some(vat_number.into());
        self
    }

    /// Set a raw billing address entry. Any key is accepted, including
    /// ones the merge ignores.
    pub fn billing(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.customer
            .billing_address
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> RemoteCustomer {
        self.customer
    }
}
