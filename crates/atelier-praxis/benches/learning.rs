//! Learning-core benchmarks
//!
//! - Pattern bank retrieval over growing banks
//! - Trait effectiveness update per cycle
//! - Reinforcement grid folding

use atelier_common::{Agent, Design, Genome, Strategy, Trait};
use atelier_praxis::{PatternBankEntry, PatternRetriever, QTable, TraitEffectiveness};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const CATEGORIES: [&str; 4] = ["Ring", "Pendant", "Earrings", "Bracelet"];

fn roster(n: usize) -> Vec<Agent> {
    (0..n)
        .map(|i| {
            let genome = Genome::builder()
                .with(Trait::Risk, (i * 11 % 100) as i32)
                .with(Trait::Novelty, (i * 7 % 100) as i32)
                .build();
            Agent::new(i as u32, format!("Designer {}", i))
                .with_genome(genome)
                .with_market_focus(CATEGORIES[i % 4])
        })
        .collect()
}

fn designs(n: usize) -> Vec<Design> {
    (0..n)
        .map(|i| {
            Design::new(i, format!("Piece {}", i), CATEGORIES[i % 4], Strategy::ALL[i % 3])
                .with_result(i as u32 + 1, ((n - i) * 10) as u64)
        })
        .collect()
}

fn bank(size: usize) -> Vec<PatternBankEntry> {
    (0..size)
        .map(|i| {
            PatternBankEntry::new(
                (i / 10) as u32 + 1,
                (i % 10) as u32 + 1,
                format!("Piece {}", i),
                CATEGORIES[i % 4],
                Strategy::ALL[i % 3],
            )
            .with_confidence((i % 10) as f64 / 10.0)
            .with_trait(Trait::Risk, (i * 13 % 100) as i32)
            .with_trait(Trait::Novelty, (i * 17 % 100) as i32)
        })
        .collect()
}

// ============ RETRIEVAL BENCHMARKS ============

fn bench_retrieval(c: &mut Criterion) {
    let mut group = c.benchmark_group("retrieval");
    let retriever = PatternRetriever::default();
    let agents = roster(1);
    let agent = &agents[0];

    for size in [50, 500, 5000].iter() {
        let entries = bank(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("bank", size), &entries, |b, entries| {
            b.iter(|| retriever.retrieve(black_box(agent), black_box(entries), 5))
        });
    }

    group.finish();
}

// ============ ESTIMATOR BENCHMARKS ============

fn bench_effectiveness(c: &mut Criterion) {
    let mut group = c.benchmark_group("effectiveness");

    for n in [10, 100].iter() {
        let agents = roster(*n);
        let ranked = designs(*n);
        group.bench_with_input(BenchmarkId::new("update", n), n, |b, _| {
            let mut state = TraitEffectiveness::default();
            let mut cycle = 0;
            b.iter(|| {
                cycle += 1;
                state.update(cycle, black_box(&ranked), black_box(&agents));
            })
        });
    }

    group.finish();
}

fn bench_q_table(c: &mut Criterion) {
    let ranked = designs(10);

    c.bench_function("q_table/record_cycle", |b| {
        b.iter(|| {
            let mut grid = QTable::new();
            grid.record_cycle(black_box(&ranked), 1).ok();
            black_box(grid.summary())
        })
    });
}

criterion_group!(benches, bench_retrieval, bench_effectiveness, bench_q_table);
criterion_main!(benches);
