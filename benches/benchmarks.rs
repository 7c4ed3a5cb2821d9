use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use courier::{Notifier, Store, Value};
use serde_json::json;

#[derive(Clone, Default)]
struct Counter {
    value: usize,
}

fn notifier_publish_benchmark(c: &mut Criterion) {
    let mut notifier: Notifier<usize> = Notifier::new();
    for _ in 0..10 {
        notifier.subscribe(|value| {
            black_box(*value);
        });
    }

    c.bench_function("notifier_publish", |b| {
        let mut i = 0;
        b.iter(|| {
            notifier.publish(&black_box(i));
            i += 1;
        });
    });
}

fn typed_dispatch_benchmark(c: &mut Criterion) {
    let store: Store<Counter, usize> = Store::default();
    store.register_action("set", true);
    store.register_reducer("set").unwrap();
    store
        .on("set", |mut state, value| {
            state.value = value.copied().unwrap_or_default();
            state
        })
        .unwrap();

    c.bench_function("typed_dispatch", |b| {
        let mut i = 0;
        b.iter(|| {
            store.dispatch("set", Some(black_box(i))).unwrap();
            i += 1;
        });
    });
}

fn json_dispatch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_dispatch");

    for subscriber_count in [1, 10, 100].iter() {
        let store = Store::new();
        let action = store.register_action("[USER] create", true);
        store.register_reducer(&action).unwrap();

        for _ in 0..*subscriber_count {
            store
                .on(&action, |mut state, props| {
                    state.insert("user".into(), props.cloned().unwrap_or(Value::Null));
                    state
                })
                .unwrap();
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(subscriber_count),
            subscriber_count,
            |b, _| {
                let mut i = 0;
                b.iter(|| {
                    store
                        .dispatch(&action, Some(json!({ "id": black_box(i) })))
                        .unwrap();
                    i += 1;
                });
            },
        );
    }
    group.finish();
}

fn select_benchmark(c: &mut Criterion) {
    let store: Store<Counter, usize> = Store::default();
    store.register_selector("doubled", |state: &Counter| state.value * 2);

    c.bench_function("select", |b| {
        b.iter(|| {
            black_box(store.select::<usize>("doubled").unwrap());
        });
    });
}

criterion_group!(
    benches,
    notifier_publish_benchmark,
    typed_dispatch_benchmark,
    json_dispatch_benchmark,
    select_benchmark,
);
criterion_main!(benches);
