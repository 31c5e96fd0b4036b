use criterion::{criterion_group, criterion_main, Criterion};
use libra_detection::coincidence::CoincidenceFilter;
use libra_detection::events::{ChannelEvents, RunData};
use std::hint::black_box;

/// Deterministic trigger train: strictly positive inter-arrival times so
/// the list stays sorted, with a phase offset per channel.
fn synthetic_channel(name: &str, n: usize, phase: f64) -> ChannelEvents {
    let mut t = phase * 1e-9;
    let mut times = Vec::with_capacity(n);
    let mut amps = Vec::with_capacity(n);
    for i in 0..n {
        t += 1e-6 * (1.0 + 0.5 * (i as f64 * 0.7).sin());
        times.push(t);
        amps.push(120.0 + 40.0 * (i as f64 * 0.3).cos());
    }
    ChannelEvents::new(name, times, amps).unwrap()
}

fn make_run(n: usize) -> RunData {
    let mut run = RunData::new();
    run.insert("A", synthetic_channel("A", n, 0.0));
    run.insert("B", synthetic_channel("B", n, 3.0));
    run.insert("C", synthetic_channel("C", n, 7.0));
    run.insert("D", synthetic_channel("D", n, 11.0));
    run
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn bench_two_fold_100k(c: &mut Criterion) {
    let run = make_run(100_000);
    let filter = CoincidenceFilter::new(names(&["A", "B"]), vec![], 20e-9).unwrap();

    c.bench_function("coincidence_2fold_100k", |b| {
        b.iter(|| black_box(filter.apply(&run).unwrap().n_events()))
    });
}

fn bench_four_fold_100k(c: &mut Criterion) {
    let run = make_run(100_000);
    let filter =
        CoincidenceFilter::new(names(&["A", "B", "C", "D"]), vec![], 20e-9).unwrap();

    c.bench_function("coincidence_4fold_100k", |b| {
        b.iter(|| black_box(filter.apply(&run).unwrap().n_events()))
    });
}

fn bench_veto_vs_plain(c: &mut Criterion) {
    let run = make_run(50_000);
    let plain = CoincidenceFilter::new(names(&["A", "B"]), vec![], 20e-9).unwrap();
    let vetoed =
        CoincidenceFilter::new(names(&["A", "B"]), names(&["C"]), 20e-9).unwrap();

    let mut group = c.benchmark_group("coincidence_veto_50k");
    group.sample_size(20);
    group.bench_function("plain_2fold", |b| {
        b.iter(|| black_box(plain.apply(&run).unwrap().n_events()))
    });
    group.bench_function("vetoed_2fold", |b| {
        b.iter(|| black_box(vetoed.apply(&run).unwrap().n_events()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_two_fold_100k,
    bench_four_fold_100k,
    bench_veto_vs_plain
);
criterion_main!(benches);
