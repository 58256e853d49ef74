use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vatsync::core::*;

fn full_input() -> CustomerInput {
    CustomerInputBuilder::new("billing@acme.de", "DE123456789")
        .first_name("Max")
        .last_name("Mustermann")
        .line1("Friedrichstraße 123")
        .city("Berlin")
        .zip("10115")
        .company("ACME GmbH")
        .build()
}

fn remote() -> RemoteCustomer {
    RemoteCustomerBuilder::new("cb_bench")
        .vat_number("123456789")
        .billing("object", "billing_address")
        .billing("country", "DE")
        .billing("state", "Berlin")
        .billing("state_code", "BE")
        .billing("validation_status", "not_validated")
        .build()
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_prefixed", |b| {
        b.iter(|| normalize_vat_number(black_box("DE123456789")))
    });
    c.bench_function("normalize_plain", |b| {
        b.iter(|| normalize_vat_number(black_box("123456789")))
    });
}

fn bench_merge(c: &mut Criterion) {
    let input = full_input();
    let remote = remote();

    c.bench_function("merge_with_remote", |b| {
        b.iter(|| merge_billing_record(black_box(&input), "123456789", Some(black_box(&remote))))
    });
    c.bench_function("merge_without_remote", |b| {
        b.iter(|| merge_billing_record(black_box(&input), "123456789", None))
    });
}

fn bench_batch_of_1000(c: &mut Criterion) {
    let customers: Vec<CustomerInput> = (0..1000)
        .map(|i| {
            CustomerInputBuilder::new(format!("c{i}@example.com"), format!("AT{i:09}"))
                .city("Wien")
                .build()
        })
        .collect();
    let remote = remote();

    c.bench_function("normalize_and_merge_1000", |b| {
        b.iter(|| {
            for customer in &customers {
                let vat = normalize_vat_number(&customer.vat_number);
                black_box(merge_billing_record(customer, &vat.value, Some(&remote)));
            }
        })
    });
}

criterion_group!(benches, bench_normalize, bench_merge, bench_batch_of_1000);
criterion_main!(benches);
