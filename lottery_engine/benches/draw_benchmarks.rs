use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lottery_engine::{Entry, LotteryDraw};
use std::hint::black_box;

fn entries(n: usize) -> Vec<Entry> {
    (0..n)
        .map(|i| Entry::new(format!("REG-{i:06}")).unwrap())
        .collect()
}

fn benchmark_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    for size in [100, 1_000, 10_000] {
        let input = entries(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| LotteryDraw::new(black_box(input.clone()), 10, None).unwrap());
        });
    }
    group.finish();
}

fn benchmark_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    for size in [100, 1_000, 10_000] {
        let seeded = LotteryDraw::new(entries(size), 10, Some("bench".to_string())).unwrap();
        group.bench_with_input(BenchmarkId::new("seeded", size), &seeded, |b, draw| {
            b.iter(|| {
                let mut draw = draw.clone();
                black_box(draw.shuffle().unwrap())
            });
        });

        let secure = LotteryDraw::new(entries(size), 10, None).unwrap();
        group.bench_with_input(BenchmarkId::new("secure", size), &secure, |b, draw| {
            b.iter(|| {
                let mut draw = draw.clone();
                black_box(draw.shuffle().unwrap())
            });
        });
    }
    group.finish();
}

fn benchmark_pick_all(c: &mut Criterion) {
    let mut draw = LotteryDraw::new(entries(1_000), 1_000, Some("bench".to_string())).unwrap();
    draw.shuffle().unwrap();

    c.bench_function("pick_all_1000", |b| {
        b.iter(|| {
            let mut draw = draw.clone();
            while let Ok(winner) = draw.pick_next() {
                black_box(winner);
            }
        });
    });
}

fn benchmark_export(c: &mut Criterion) {
    let mut draw = LotteryDraw::new(entries(10_000), 500, Some("bench".to_string())).unwrap();
    draw.shuffle().unwrap();
    for _ in 0..500 {
        draw.pick_next().unwrap();
    }

    c.bench_function("export_csv_10000", |b| {
        b.iter(|| black_box(draw.export_csv().unwrap()));
    });
}

criterion_group!(
    benches,
    benchmark_construct,
    benchmark_shuffle,
    benchmark_pick_all,
    benchmark_export
);
criterion_main!(benches);
