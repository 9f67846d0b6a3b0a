use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use warehouse_core::{ItemId, OrderId};
use warehouse_engine::FulfilmentEngine;

/// Catalog built from sorted names: every node hangs off the right spine.
fn degenerate_engine(categories: usize) -> FulfilmentEngine {
    let mut engine = FulfilmentEngine::new();
    for i in 0..categories {
        let name = format!("cat-{i:06}");
        engine.add_category(name.clone());
        engine.add_item(&name, ItemId::new(i as i64), "widget", i64::MAX);
    }
    engine
}

/// Catalog built from interleaved names: roughly balanced.
fn bushy_engine(categories: usize) -> FulfilmentEngine {
    let mut engine = FulfilmentEngine::new();
    let mut order: Vec<usize> = (0..categories).collect();
    order.sort_by_key(|i| i.reverse_bits());
    for i in order {
        let name = format!("cat-{i:06}");
        engine.add_category(name.clone());
        engine.add_item(&name, ItemId::new(i as i64), "widget", i64::MAX);
    }
    engine
}

fn bench_process_last_category(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_next_order");

    for size in [100usize, 1_000, 10_000] {
        let target = OrderId::new(size as i64 - 1);

        let mut degenerate = degenerate_engine(size);
        group.bench_with_input(BenchmarkId::new("degenerate", size), &size, |b, _| {
            b.iter(|| {
                degenerate.enqueue_order(target);
                let done = black_box(degenerate.process_next_order());
                // Keep the action log from growing across iterations.
                degenerate.undo_last_entry();
                done
            })
        });

        let mut bushy = bushy_engine(size);
        group.bench_with_input(BenchmarkId::new("bushy", size), &size, |b, _| {
            b.iter(|| {
                bushy.enqueue_order(target);
                let done = black_box(bushy.process_next_order());
                // Keep the action log from growing across iterations.
                bushy.undo_last_entry();
                done
            })
        });
    }

    group.finish();
}

fn bench_dump_state(c: &mut Criterion) {
    let engine = bushy_engine(1_000);
    c.bench_function("dump_state_1000_categories", |b| {
        b.iter(|| black_box(engine.dump_state()))
    });
}

criterion_group!(benches, bench_process_last_category, bench_dump_state);
criterion_main!(benches);
