use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use shoplens_catalog::{Catalog, Product};
use shoplens_core::{CurrencyCode, Money, OrderId, Sku, UserId};
use shoplens_orders::{LineItemEdit, OrderComposer, OrderHeaderDraft};

fn bench_product(n: usize) -> Product {
    Product {
        id: None,
        sku: Sku::new(format!("P{n}")),
        name: format!("Product {n}"),
        category: "general".to_string(),
        unit_price: Money::from_minor(100 + n as u64),
        currency: CurrencyCode::new("INR"),
        in_stock: true,
    }
}

fn setup_composer(catalog_size: usize, lines: usize) -> OrderComposer {
    let catalog = Catalog::from_products((0..catalog_size).map(bench_product).collect());
    let mut composer = OrderComposer::new(catalog);

    for index in 0..lines {
        if index > 0 {
            composer.add_line();
        }
        let sku = Sku::new(format!("P{}", index % catalog_size));
        composer.update_line(index, LineItemEdit::Sku(sku)).unwrap();
        composer
            .update_line(index, LineItemEdit::Quantity(1 + index as i64))
            .unwrap();
    }
    composer
}

fn bench_header() -> OrderHeaderDraft {
    OrderHeaderDraft {
        order_id: OrderId::new("O1"),
        user_id: UserId::new("U1"),
        created_at: Some(chrono::Utc::now()),
        currency: CurrencyCode::new("INR"),
    }
}

fn bench_running_total(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_total");
    for lines in [1usize, 10, 100] {
        let composer = setup_composer(1_000, lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &composer, |b, composer| {
            b.iter(|| black_box(composer.running_total()));
        });
    }
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let header = bench_header();
    for lines in [1usize, 10, 100] {
        let composer = setup_composer(1_000, lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &composer, |b, composer| {
            b.iter(|| black_box(composer.compose(&header).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_running_total, bench_compose);
criterion_main!(benches);
