//! Benchmarks for add-employee form validation.
//!
//! These benchmarks measure single-field validation, including the regex
//! backed email and phone rules, and whole-form validation passes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use employee_directory::state::{validate, FieldName, FormState};

fn bench_validate_field(c: &mut Criterion) {
    c.bench_function("validate_required_field", |b| {
        b.iter(|| validate(black_box(FieldName::FirstName), black_box("  Jane  ")))
    });
    c.bench_function("validate_email", |b| {
        b.iter(|| validate(black_box(FieldName::Email), black_box("jane.doe@example.com")))
    });
    c.bench_function("validate_phone_number", |b| {
        b.iter(|| validate(black_box(FieldName::PhoneNumber), black_box("5551234")))
    });
}

fn bench_validate_all(c: &mut Criterion) {
    let mut filled = FormState::new();
    filled.update_field(FieldName::FirstName, "Jane");
    filled.update_field(FieldName::LastName, "Doe");
    filled.update_field(FieldName::AddressLine1, "1 Rd");
    filled.update_field(FieldName::Country, "US");
    filled.update_field(FieldName::City, "NYC");
    filled.update_field(FieldName::Email, "a@b.co");
    filled.update_field(FieldName::PhoneNumber, "5551234");

    c.bench_function("validate_all_valid_form", |b| {
        b.iter(|| {
            let mut form = filled.clone();
            black_box(form.validate_all())
        })
    });
    c.bench_function("validate_all_empty_form", |b| {
        b.iter(|| {
            let mut form = FormState::new();
            black_box(form.validate_all())
        })
    });
}

criterion_group!(benches, bench_validate_field, bench_validate_all);
criterion_main!(benches);
