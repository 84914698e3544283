use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contact_manager::prelude::{ContactManager, PhonePolicy};

// Helper to create a manager prepopulated with `n` contacts.
fn make_manager_with_n(n: usize, policy: PhonePolicy) -> ContactManager {
    let mut manager = ContactManager::with_policy(policy);
    for i in 0..n {
        let first = format!("User{i}");
        let phone = format!("0{:09}", i);
        manager
            .add_contact(Some(&first), Some("Bench"), Some(&phone))
            .expect("valid contact");
    }
    manager
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("Adding one contact to 5k (lenient)", |b| {
        b.iter_batched(
            || make_manager_with_n(5_000, PhonePolicy::Lenient),
            |mut manager| {
                let added = manager
                    .add_contact(Some("Zoe"), Some("Welch"), Some("0885549952"))
                    .map(|c| c.phone_number.len());
                black_box(added.ok());
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("Adding one contact to 5k (strict)", |b| {
        b.iter_batched(
            || make_manager_with_n(5_000, PhonePolicy::Strict),
            |mut manager| {
                let added = manager
                    .add_contact(Some("Zoe"), Some("Welch"), Some("0885549952"))
                    .map(|c| c.phone_number.len());
                black_box(added.ok());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_list(c: &mut Criterion) {
    c.bench_function("Reading all of 5k contacts", |b| {
        let manager = make_manager_with_n(5_000, PhonePolicy::Lenient);
        b.iter(|| black_box(manager.get_all_contacts().len()));
    });
}

criterion_group!(benches, bench_add, bench_list);
criterion_main!(benches);
