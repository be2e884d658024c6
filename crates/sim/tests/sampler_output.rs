//! Integration tests for sampler output files and reproducibility.

use flate2::read::MultiGzDecoder;
use fwdtrace_sim::errors::{SamplerError, StorageError};
use fwdtrace_sim::population::{Diploid, Fixation, Gamete, Mutation, Population};
use fwdtrace_sim::sampling::{Sampler, SamplerConfig};
use fwdtrace_sim::storage::{ms_block, GzAppender};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tempfile::tempdir;

/// Ten diploids over five gametes, with neutral and selected sites on two
/// loci ([0, 1) and [1, 2)) and one selected fixation still present in every
/// gamete.
fn create_test_population() -> Population {
    let mutations = vec![
        Mutation::neutral(0.05, 0),
        Mutation::selected(0.15, 0.01, 2),
        Mutation::neutral(0.45, 3),
        Mutation::selected(0.75, -0.02, 4),
        Mutation::neutral(1.25, 5),
        Mutation::selected(1.55, 0.03, 6),
        Mutation::selected(0.95, 0.05, 1),
    ];
    let gametes = vec![
        Gamete::with_mutations(vec![0], vec![1, 6]),
        Gamete::with_mutations(vec![2], vec![3, 6]),
        Gamete::with_mutations(vec![0, 4], vec![5, 6]),
        Gamete::with_mutations(vec![], vec![6]),
        Gamete::with_mutations(vec![2, 4], vec![1, 5, 6]),
    ];
    let diploids = (0..10).map(|i| Diploid::new(i % 5, (i * 3 + 1) % 5)).collect();
    Population::new(mutations.clone(), gametes, diploids)
        .with_fixations(vec![Fixation::from_mutation(&mutations[6], 8)])
}

fn read_gz(path: &Path) -> String {
    let mut text = String::new();
    MultiGzDecoder::new(File::open(path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    text
}

fn run_sampler(dir: &Path, seed: u64, config: impl Fn(&Path) -> SamplerConfig) -> Sampler {
    let pop = create_test_population();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut sampler = Sampler::new(config(dir), &mut rng).unwrap();
    for generation in [10, 20, 30] {
        sampler.sample(&pop, generation).unwrap();
    }
    sampler
}

fn both_outputs(dir: &Path) -> SamplerConfig {
    SamplerConfig::new(6)
        .with_neutral_output(dir.join("neutral.gz"))
        .with_selected_output(dir.join("selected.gz"))
        .truncate()
}

#[test]
fn test_identical_runs_write_identical_files() {
    let dir1 = tempdir().unwrap();
    let dir2 = tempdir().unwrap();
    run_sampler(dir1.path(), 2024, both_outputs);
    run_sampler(dir2.path(), 2024, both_outputs);

    for name in ["neutral.gz", "selected.gz"] {
        let a = std::fs::read(dir1.path().join(name)).unwrap();
        let b = std::fs::read(dir2.path().join(name)).unwrap();
        assert_eq!(a, b, "{name} differs between identical runs");
    }
}

#[test]
fn test_file_content_matches_results() {
    let dir = tempdir().unwrap();
    let sampler = run_sampler(dir.path(), 7, both_outputs);

    let neutral: String = sampler
        .results()
        .iter()
        .map(|r| ms_block(&r.sample.neutral))
        .collect();
    let selected: String = sampler
        .results()
        .iter()
        .map(|r| ms_block(&r.sample.selected))
        .collect();
    assert_eq!(read_gz(&dir.path().join("neutral.gz")), neutral);
    assert_eq!(read_gz(&dir.path().join("selected.gz")), selected);
}

#[test]
fn test_multi_locus_writes_block_per_locus() {
    let dir = tempdir().unwrap();
    let sampler = run_sampler(dir.path(), 7, |d| {
        both_outputs(d).with_loci(vec![(0.0, 1.0), (1.0, 2.0)])
    });

    assert_eq!(sampler.results().len(), 6);
    let text = read_gz(&dir.path().join("selected.gz"));
    assert_eq!(text.lines().filter(|l| *l == "//").count(), 6);
    for (i, r) in sampler.results().iter().enumerate() {
        assert!(r.details.iter().all(|d| d.locus == i % 2));
    }
}

#[test]
fn test_append_keeps_existing_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("selected.gz");
    GzAppender::new(&path).append(["previous run\n"]).unwrap();

    let config = |d: &Path| SamplerConfig::new(4).with_selected_output(d.join("selected.gz"));
    run_sampler(dir.path(), 1, config);

    let text = read_gz(&path);
    assert!(text.starts_with("previous run\n//\n"));
    assert_eq!(text.lines().filter(|l| *l == "//").count(), 3);
}

#[test]
fn test_truncate_clears_existing_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("selected.gz");
    GzAppender::new(&path).append(["previous run\n"]).unwrap();

    let config = |d: &Path| {
        SamplerConfig::new(4)
            .with_selected_output(d.join("selected.gz"))
            .truncate()
    };
    run_sampler(dir.path(), 1, config);

    let text = read_gz(&path);
    assert!(text.starts_with("//\n"));
    assert!(!text.contains("previous run"));
}

#[test]
fn test_truncate_failure_is_fatal() {
    let dir = tempdir().unwrap();
    let config = SamplerConfig::new(4)
        .with_neutral_output(dir.path().join("missing/dir/neutral.gz"))
        .truncate();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    let err = Sampler::new(config, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        SamplerError::Storage(StorageError::Truncate { .. })
    ));
}

#[test]
fn test_empty_path_writes_nothing() {
    let dir = tempdir().unwrap();
    let config = |d: &Path| {
        SamplerConfig::new(4)
            .with_neutral_output("")
            .with_selected_output(d.join("selected.gz"))
            .truncate()
    };
    run_sampler(dir.path(), 3, config);
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_fixation_copy_collapses_when_fixed_sites_kept() {
    let dir = tempdir().unwrap();
    let sampler = run_sampler(dir.path(), 11, |_| SamplerConfig::new(6).remove_fixed(false));
    for r in sampler.results() {
        let copies = r
            .sample
            .selected
            .iter()
            .filter(|s| s.position == 0.95)
            .count();
        assert_eq!(copies, 1);
        let detail = r
            .sample
            .selected
            .iter()
            .zip(&r.details)
            .find(|(s, _)| s.position == 0.95)
            .map(|(_, d)| d.clone())
            .unwrap();
        assert_eq!(detail.frequency, 1.0);
        assert_eq!(detail.origin, 1);
    }
}
