use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use restock_core::ItemId;
use restock_replenishment::{aggregate, plan, plan_with_demand, ItemSnapshot, ReasonCode, ReorderPolicy, StockMovement};

const UNITS: [&str; 4] = ["pcs", "kg", "Stk.", "l"];
const REASONS: [ReasonCode; 4] = [
    ReasonCode::Sale,
    ReasonCode::Sale,
    ReasonCode::Return,
    ReasonCode::Other,
];

/// Deterministic synthetic catalogue: `items` items, `per_item` movements each.
fn catalogue(items: usize, per_item: usize) -> (Vec<ItemSnapshot>, Vec<StockMovement>) {
    let mut snapshots = Vec::with_capacity(items);
    let mut movements = Vec::with_capacity(items * per_item);

    for i in 0..items {
        let id = ItemId::parse(&format!("item-{i:06}")).expect("valid id");
        let stock = (i % 50) as f64 - 5.0;
        snapshots.push(
            ItemSnapshot::new(id.clone(), format!("Item {i}"), stock).with_unit(UNITS[i % UNITS.len()]),
        );
        for j in 0..per_item {
            let qty = ((i * 7 + j * 13) % 20) as f64 + 0.25;
            movements.push(StockMovement::new(id.clone(), REASONS[j % REASONS.len()], qty));
        }
    }

    (snapshots, movements)
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for &items in &[100usize, 1_000, 10_000] {
        let (_, movements) = catalogue(items, 20);
        group.throughput(Throughput::Elements(movements.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &movements, |b, movements| {
            b.iter(|| aggregate(black_box(movements)));
        });
    }

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    let policy = ReorderPolicy::default();

    for &items in &[100usize, 1_000, 10_000] {
        let (snapshots, movements) = catalogue(items, 20);
        group.throughput(Throughput::Elements(items as u64));

        group.bench_with_input(
            BenchmarkId::new("from_movements", items),
            &(snapshots.clone(), movements.clone()),
            |b, (snapshots, movements)| {
                b.iter(|| plan(black_box(snapshots), black_box(movements), &policy));
            },
        );

        let demand = aggregate(&movements);
        group.bench_with_input(
            BenchmarkId::new("precomputed_demand", items),
            &snapshots,
            |b, snapshots| {
                b.iter(|| plan_with_demand(black_box(snapshots), &demand, &policy));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_plan);
criterion_main!(benches);
