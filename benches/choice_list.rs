//! Benchmarks for choice list editing.
//!
//! Candidate checks scan the whole list, so these measure the cost of
//! editing a list near its capacity.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use select_field_builder::field::{ChoiceList, MAX_CHOICES};

fn full_list() -> ChoiceList {
    let mut list = ChoiceList::new();
    for i in 0..MAX_CHOICES {
        if let Ok(events) = list.propose_add(&format!("choice {}", i)) {
            list.apply_all(&events);
        }
    }
    list
}

fn bench_fill_to_capacity(c: &mut Criterion) {
    c.bench_function("fill_to_capacity", |b| b.iter(full_list));
}

fn bench_check_candidate(c: &mut Criterion) {
    let mut list = full_list();
    let events = list.remove_item("choice 49");
    list.apply_all(&events);
    c.bench_function("check_candidate_near_capacity", |b| {
        b.iter(|| list.check_candidate(black_box("  a fresh choice  ")))
    });
}

fn bench_remove_default(c: &mut Criterion) {
    let list = full_list();
    c.bench_function("remove_default", |b| {
        b.iter(|| {
            let mut list = list.clone();
            let events = list.remove_item(black_box("choice 0"));
            list.apply_all(&events);
            list
        })
    });
}

criterion_group!(
    benches,
    bench_fill_to_capacity,
    bench_check_candidate,
    bench_remove_default
);
criterion_main!(benches);
