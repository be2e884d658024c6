use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fwdtrace_analysis::{
    AgeFilter, TidyFilter, allele_ages, allele_ages_per_replicate, merge_trajectories,
    tidy_trajectories,
};
use fwdtrace_sim::tracking::{SelectedMutation, TrajectorySet};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// `n_mut` mutations arising at random generations, each followed for up to
/// 200 generations of a random walk in frequency.
fn random_set(n_mut: usize, seed: u64) -> TrajectorySet {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut set = TrajectorySet::new();
    for k in 0..n_mut {
        let origin = rng.random_range(0..1_000);
        let mutation =
            SelectedMutation::new(k as f64 / n_mut as f64, origin, rng.random_range(-0.05..0.05));
        let mut freq = 0.01;
        for generation in origin..origin + rng.random_range(1..200) {
            set.record(mutation, generation, freq);
            freq = (freq + rng.random_range(-0.02..0.03)).clamp(0.0, 1.0);
            if freq == 0.0 || freq == 1.0 {
                break;
            }
        }
    }
    set
}

fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("trajectories");

    for &n_mut in &[1_000usize, 10_000] {
        let set = random_set(n_mut, 7);
        group.throughput(Throughput::Elements(n_mut as u64));

        group.bench_with_input(BenchmarkId::new("allele_ages", n_mut), &set, |b, set| {
            b.iter(|| allele_ages(black_box(set), 0.1, 10))
        });

        let filter = TidyFilter::new().min_sojourn(10).min_frequency(0.1);
        group.bench_with_input(BenchmarkId::new("tidy", n_mut), &set, |b, set| {
            b.iter(|| tidy_trajectories(black_box(set), &filter))
        });

        let other = random_set(n_mut, 8);
        group.bench_with_input(BenchmarkId::new("merge", n_mut), &set, |b, set| {
            b.iter(|| merge_trajectories(black_box(set), black_box(&other)))
        });
    }

    group.finish();
}

fn bench_replicates(c: &mut Criterion) {
    let sets: Vec<TrajectorySet> = (0..16).map(|seed| random_set(2_000, seed)).collect();
    let filter = AgeFilter::default();
    c.bench_function("allele_ages_per_replicate/16x2000", |b| {
        b.iter(|| allele_ages_per_replicate(black_box(&sets), &filter))
    });
}

criterion_group!(benches, bench_summaries, bench_replicates);
criterion_main!(benches);
