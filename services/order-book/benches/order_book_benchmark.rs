use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use order_book::OrderBook;
use types::ids::OrderId;
use types::numeric::Price;
use types::order::Order;

const BOOK_SIZE: u64 = 1_000;

/// Book with `BOOK_SIZE` asks spread over 100 levels, 10 orders deep
fn seeded_book() -> OrderBook {
    let mut book = OrderBook::new();
    for i in 0..BOOK_SIZE {
        let price = Price::from_u64(50_000 + i % 100);
        book.insert(Order::sell(i, price, 10, i as i64))
            .expect("seed orders are valid sells with unique ids");
    }
    book
}

fn insert_benchmark(c: &mut Criterion) {
    let master = seeded_book();

    c.bench_function("insert into book with 1000 asks", |b| {
        b.iter_batched(
            || master.clone(),
            |mut book| {
                let order = Order::sell(BOOK_SIZE, Price::from_u64(50_050), 10, 0);
                book.insert(black_box(order)).unwrap();
            },
            BatchSize::SmallInput,
        );
    });
}

fn cancel_benchmark(c: &mut Criterion) {
    let master = seeded_book();

    c.bench_function("cancel mid-level order", |b| {
        b.iter_batched(
            || master.clone(),
            |mut book| {
                book.cancel(black_box(OrderId::new(BOOK_SIZE / 2)));
            },
            BatchSize::SmallInput,
        );
    });
}

fn match_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("match");
    let master = seeded_book();

    group.bench_function("1-to-1 match at best ask", |b| {
        b.iter_batched(
            || master.clone(),
            |mut book| {
                let order = Order::buy(0, Price::from_u64(50_000), 10, 0);
                book.match_order(black_box(order)).unwrap();
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("sweep 10 levels", |b| {
        b.iter_batched(
            || master.clone(),
            |mut book| {
                let order = Order::buy(0, Price::from_u64(50_009), 1_000, 0);
                book.match_order(black_box(order)).unwrap();
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, insert_benchmark, cancel_benchmark, match_benchmark);
criterion_main!(benches);
