use vatsync::core::*;

// ---------------------------------------------------------------------------
// VAT normalization
// ---------------------------------------------------------------------------

#[test]
fn eu_prefixes_stripped() {
    for (raw, expected) in [
        ("DE123456789", "123456789"),
        ("ATU12345678", "U12345678"),
        ("FR12345678901", "12345678901"),
        ("NL123456789B01", "123456789B01"),
        ("ESX1234567X", "X1234567X"),
    ] {
        assert_eq!(normalize_vat_number(raw).value, expected, "{raw}");
    }
}

#[test]
fn unknown_prefix_still_stripped() {
    // no country code check, just two letters
    assert_eq!(normalize_vat_number("XX999").value, "999");
}

#[test]
fn digits_only_unchanged() {
    let vat = normalize_vat_number("123456789");
    assert_eq!(vat.value, "123456789");
    assert_eq!(vat.stripped_prefix, None);
}

#[test]
fn leading_space_blocks_strip() {
    assert_eq!(normalize_vat_number(" DE123").value, " DE123");
}

// ---------------------------------------------------------------------------
// Billing merge
// ---------------------------------------------------------------------------

fn full_input() -> CustomerInput {
    CustomerInputBuilder::new("billing@acme.de", "DE123456789")
        .first_name("Max")
        .last_name("Mustermann")
        .line1("Friedrichstraße 123")
        .city("Berlin")
        .country("DE")
        .zip("10115")
        .company("ACME GmbH")
        .state("Berlin")
        .state_code("BE")
        .build()
}

#[test]
fn all_supplied_fields_present_in_order() {
    let record = merge_billing_record(&full_input(), "123456789", None);
    assert_eq!(
        record.keys().collect::<Vec<_>>(),
        vec![
            "vat_number",
            "first_name",
            "last_name",
            "line1",
            "city",
            "country",
            "zip",
            "company",
            "state",
            "state_code",
        ]
    );
    assert_eq!(record.get(BillingField::Line1), Some("Friedrichstraße 123"));
}

#[test]
fn remote_fills_gaps() {
    let input = CustomerInputBuilder::new("kunde@example.at", "ATU12345678")
        .company("Kunde GmbH")
        .build();
    let remote = RemoteCustomerBuilder::new("cb_42")
        .billing("first_name", "Anna")
        .billing("company", "Old Name KG")
        .billing("city", "Wien")
        .billing("country", "AT")
        .billing("zip", "")
        .build();

    let record = merge_billing_record(&input, "U12345678", Some(&remote));
    assert_eq!(record.get(BillingField::Company), Some("Kunde GmbH"));
    assert_eq!(record.get(BillingField::FirstName), Some("Anna"));
    assert_eq!(record.get(BillingField::City), Some("Wien"));
    assert_eq!(record.get(BillingField::Country), Some("AT"));
    assert_eq!(record.get(BillingField::Zip), None);
    assert_eq!(record.get(BillingField::LastName), None);
}

#[test]
fn empty_supplied_value_keeps_remote() {
    let input = CustomerInputBuilder::new("a@example.com", "1").city("").build();
    let remote = RemoteCustomerBuilder::new("cb_1").billing("city", "Köln").build();
    let record = merge_billing_record(&input, "1", Some(&remote));
    assert_eq!(record.get(BillingField::City), Some("Köln"));
}

#[test]
fn zero_values_are_not_sent() {
    let input = CustomerInputBuilder::new("a@example.com", "0")
        .zip("0")
        .city("Berlin")
        .build();
    let record = merge_billing_record(&input, "0", None);
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["city"]);
    assert_eq!(record.get(BillingField::Zip), None);
    assert_eq!(record.get(BillingField::VatNumber), None);
}

#[test]
fn zero_with_more_digits_is_kept() {
    let input = CustomerInputBuilder::new("a@example.com", "1").zip("01067").build();
    let record = merge_billing_record(&input, "1", None);
    assert_eq!(record.get(BillingField::Zip), Some("01067"));
}

#[test]
fn remote_without_billing_address() {
    let input = CustomerInputBuilder::new("a@example.com", "1").zip("80331").build();
    let remote = RemoteCustomerBuilder::new("cb_1").build();
    let record = merge_billing_record(&input, "1", Some(&remote));
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["vat_number", "zip"]);
}

#[test]
fn supplied_vat_overrides_remote_vat() {
    let input = CustomerInputBuilder::new("a@example.com", "DE111").build();
    let remote = RemoteCustomerBuilder::new("cb_1").vat_number("222").build();
    let record = merge_billing_record(&input, "111", Some(&remote));
    assert_eq!(record.get(BillingField::VatNumber), Some("111"));
}

#[test]
fn collecting_drops_blank_values() {
    let record: MergedBillingRecord = [
        (BillingField::City, "Berlin".to_string()),
        (BillingField::Zip, String::new()),
        (BillingField::State, "0".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(record.len(), 1);
    assert_eq!(record.get(BillingField::Zip), None);
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[test]
fn field_names() {
    let names: Vec<_> = BillingField::ALL.iter().map(|f| f.as_str()).collect();
    assert!(!names.contains(&RESERVED_KEY));
    assert_eq!(BillingField::address_fields().count(), 9);
    assert!(!BillingField::VatNumber.is_address_field());
    assert_eq!(BillingField::StateCode.to_string(), "state_code");
}

#[test]
fn input_deserializes_without_email() {
    let input: CustomerInput =
        serde_json::from_str(r#"{"vat_number":"DE1","city":"Berlin"}"#).unwrap();
    assert_eq!(input.email, "");
    assert_eq!(input.address_field(BillingField::City), Some("Berlin"));
    assert_eq!(input.address_field(BillingField::VatNumber), None);
}

#[test]
fn error_messages() {
    let err = CustomerError::NotFound {
        email: "x@example.com".into(),
    };
    assert_eq!(err.to_string(), "Customer not found with email x@example.com");
    assert!(err.api_error().is_none());

    let api = ApiError::Status {
        status: 404,
        body: "gone".into(),
    };
    assert_eq!(api.to_string(), "API request failed with status 404: gone");
    assert_eq!(api.status(), Some(404));
    assert_eq!(ApiError::Transport("timeout".into()).status(), None);
}
