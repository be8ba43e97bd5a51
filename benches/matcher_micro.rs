//! Microbenchmark that isolates the run matcher from all other overhead
//! (I/O, ranking, highlighting).

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use fuzzy_highlight::fuzzy_matcher::RunMatcher;
use fuzzy_highlight::{ScanStrategy, highlight};

fn load_lines() -> Vec<String> {
    let words = ["src", "fuzzy", "matcher", "highlight", "runs", "cartwheel", "语言", "options"];
    (0..100_000)
        .map(|i| {
            let a = words[i % words.len()];
            let b = words[(i / words.len()) % words.len()];
            format!("{a}/{b}_{i}.rs")
        })
        .collect()
}

fn bench_matcher(c: &mut Criterion) {
    let lines = load_lines();

    c.bench_function("micro_greedy", |b| {
        let m = RunMatcher::default();
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if m.fuzzy_runs(black_box("mtch"), line).is_match {
                    count += 1;
                }
            }
            count
        });
    });

    c.bench_function("micro_best_start", |b| {
        let m = RunMatcher::default().strategy(ScanStrategy::BestStart);
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if m.fuzzy_runs(black_box("mtch"), line).is_match {
                    count += 1;
                }
            }
            count
        });
    });

    c.bench_function("micro_highlight", |b| {
        let m = RunMatcher::default();
        let results: Vec<_> = lines.iter().map(|line| m.fuzzy_runs("rs", line)).collect();
        b.iter(|| {
            lines
                .iter()
                .zip(&results)
                .map(|(line, result)| highlight(line, &result.ranges, "strong").len())
                .sum::<usize>()
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_matcher
);
criterion_main!(benches);
