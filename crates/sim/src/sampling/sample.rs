use crate::population::{Mutation, PopulationSnapshot};
use crate::sampling::LocusBoundary;
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// A variable site in a sample: its position and one `0`/`1` state per
/// sampled gamete, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub position: f64,
    pub states: String,
}

impl Site {
    pub fn new(position: f64, states: impl Into<String>) -> Self {
        Self {
            position,
            states: states.into(),
        }
    }

    /// Number of sampled gametes carrying the derived state.
    pub fn derived_count(&self) -> usize {
        self.states.bytes().filter(|&b| b == b'1').count()
    }

    /// Return `true` if every sampled gamete carries the derived state.
    pub fn is_fixed_in_sample(&self) -> bool {
        !self.states.is_empty() && self.states.bytes().all(|b| b == b'1')
    }
}

/// Sample of one locus, split into neutral and selected sites.
///
/// Both blocks are sorted by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeparatedSample {
    pub neutral: Vec<Site>,
    pub selected: Vec<Site>,
}

/// Collapse runs of identical consecutive sites into one, returning how many
/// entries were removed.
///
/// Simulations that copy a selected fixation into the fixation table while
/// also leaving it in the population report that site twice when fixed sites
/// are kept. After sorting by position the two copies are adjacent and
/// identical (same position, all-derived states); this removes the second.
/// Comparison is exact; sites that merely share a position are kept.
pub fn drop_consecutive_duplicates(sites: &mut Vec<Site>) -> usize {
    let before = sites.len();
    sites.dedup();
    before - sites.len()
}

/// Draw `sample_size` gametes without replacement from the 2N gametes of the
/// population, returning gamete pool indices in draw order.
///
/// Gamete `2i` is diploid `i`'s first gamete and `2i + 1` its second.
pub fn draw_gametes<R, P>(rng: &mut R, population: &P, sample_size: usize) -> Vec<usize>
where
    R: Rng + ?Sized,
    P: PopulationSnapshot + ?Sized,
{
    let diploids = population.diploids();
    let available = 2 * diploids.len();
    if sample_size > available {
        warn!(
            sample_size,
            available, "sample size exceeds gametes in population; drawing all"
        );
    }
    index::sample(rng, available, sample_size.min(available))
        .into_iter()
        .map(|i| {
            let d = &diploids[i / 2];
            if i % 2 == 0 {
                d.first
            } else {
                d.second
            }
        })
        .collect()
}

/// Build the neutral and selected blocks of one locus from drawn gametes.
///
/// With `remove_fixed`, sites carried by every sampled gamete are dropped.
/// Otherwise the population's fixations inside the locus are appended as
/// all-derived sites to the block matching their class.
pub fn separate_sample<P>(
    population: &P,
    gametes: &[usize],
    locus: &LocusBoundary,
    remove_fixed: bool,
) -> SeparatedSample
where
    P: PopulationSnapshot + ?Sized,
{
    let pool = population.gametes();
    let mutations = population.mutations();
    let mut neutral = segregating_sites(
        gametes.iter().map(|&g| pool[g].neutral.as_slice()),
        gametes.len(),
        mutations,
        locus,
    );
    let mut selected = segregating_sites(
        gametes.iter().map(|&g| pool[g].selected.as_slice()),
        gametes.len(),
        mutations,
        locus,
    );

    if remove_fixed {
        neutral.retain(|s| !s.is_fixed_in_sample());
        selected.retain(|s| !s.is_fixed_in_sample());
    } else {
        let all_derived = "1".repeat(gametes.len());
        for f in population.fixations() {
            if !locus.contains(f.position) {
                continue;
            }
            let site = Site::new(f.position, all_derived.clone());
            if f.neutral {
                neutral.push(site);
            } else {
                selected.push(site);
            }
        }
        // Stable: a live site stays ahead of a fixation at the same position.
        neutral.sort_by(|a, b| a.position.total_cmp(&b.position));
        selected.sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    SeparatedSample { neutral, selected }
}

/// Columns for every mutation key carried by at least one row, sorted by
/// position and then key.
fn segregating_sites<'a, I>(
    rows: I,
    nsam: usize,
    mutations: &[Mutation],
    locus: &LocusBoundary,
) -> Vec<Site>
where
    I: Iterator<Item = &'a [usize]>,
{
    let mut columns: HashMap<usize, usize> = HashMap::new();
    let mut keys: Vec<usize> = Vec::new();
    let mut matrix: Vec<Vec<u8>> = Vec::new();

    for (row, carried) in rows.enumerate() {
        for &key in carried {
            if !locus.contains(mutations[key].position) {
                continue;
            }
            let col = *columns.entry(key).or_insert_with(|| {
                keys.push(key);
                matrix.push(vec![b'0'; nsam]);
                keys.len() - 1
            });
            matrix[col][row] = b'1';
        }
    }

    let mut sites: Vec<(usize, Site)> = keys
        .into_iter()
        .zip(matrix)
        .map(|(key, states)| {
            let states: String = states.into_iter().map(char::from).collect();
            (key, Site::new(mutations[key].position, states))
        })
        .collect();
    sites.sort_by(|(ka, a), (kb, b)| a.position.total_cmp(&b.position).then(ka.cmp(kb)));
    sites.into_iter().map(|(_, s)| s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::{Diploid, Fixation, Gamete, Population};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    // Keys: 0 neutral@0.1, 1 selected@0.2, 2 neutral@0.3, 3 selected@1.5
    fn create_test_population() -> Population {
        let mutations = vec![
            Mutation::neutral(0.1, 0),
            Mutation::selected(0.2, 0.1, 1),
            Mutation::neutral(0.3, 2),
            Mutation::selected(1.5, -0.1, 3),
        ];
        let gametes = vec![
            Gamete::with_mutations(vec![0], vec![1]),
            Gamete::with_mutations(vec![0, 2], vec![1, 3]),
        ];
        let diploids = vec![Diploid::new(0, 1), Diploid::new(1, 0)];
        Population::new(mutations, gametes, diploids)
    }

    #[test]
    fn test_drop_consecutive_duplicates() {
        let mut sites = vec![
            Site::new(0.2, "11"),
            Site::new(0.2, "11"),
            Site::new(0.2, "10"),
            Site::new(0.3, "01"),
        ];
        assert_eq!(drop_consecutive_duplicates(&mut sites), 1);
        assert_eq!(sites.len(), 3);
        assert_eq!(sites[1], Site::new(0.2, "10"));
    }

    #[test]
    fn test_non_adjacent_duplicates_survive() {
        let mut sites = vec![Site::new(0.2, "11"), Site::new(0.3, "01"), Site::new(0.2, "11")];
        assert_eq!(drop_consecutive_duplicates(&mut sites), 0);
    }

    #[test]
    fn test_draw_without_replacement() {
        let pop = create_test_population();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let drawn = draw_gametes(&mut rng, &pop, 4);
        let mut sorted = drawn.clone();
        sorted.sort_unstable();
        // Every gamete slot of both diploids appears exactly once.
        assert_eq!(sorted, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_draw_clamps_to_available() {
        let pop = create_test_population();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        assert_eq!(draw_gametes(&mut rng, &pop, 10).len(), 4);
    }

    #[test]
    fn test_separate_classes() {
        let pop = create_test_population();
        let sample = separate_sample(&pop, &[0, 1], &LocusBoundary::whole_genome(), false);
        assert_eq!(sample.neutral, vec![Site::new(0.1, "11"), Site::new(0.3, "01")]);
        assert_eq!(sample.selected, vec![Site::new(0.2, "11"), Site::new(1.5, "01")]);
    }

    #[test]
    fn test_remove_fixed_in_sample() {
        let pop = create_test_population();
        let sample = separate_sample(&pop, &[0, 1], &LocusBoundary::whole_genome(), true);
        assert_eq!(sample.neutral, vec![Site::new(0.3, "01")]);
        assert_eq!(sample.selected, vec![Site::new(1.5, "01")]);
    }

    #[test]
    fn test_locus_restricts_sites() {
        let pop = create_test_population();
        let sample = separate_sample(&pop, &[1], &LocusBoundary::new(1.0, 2.0), true);
        assert!(sample.neutral.is_empty());
        // A single-gamete sample has every carried site fixed in sample.
        assert!(sample.selected.is_empty());

        let sample = separate_sample(&pop, &[1, 0], &LocusBoundary::new(1.0, 2.0), true);
        assert_eq!(sample.selected, vec![Site::new(1.5, "10")]);
    }

    #[test]
    fn test_fixations_added_when_kept() {
        let pop = create_test_population().with_fixations(vec![
            Fixation::from_mutation(&Mutation::selected(0.2, 0.1, 1), 9),
            Fixation::from_mutation(&Mutation::neutral(0.05, 0), 4),
        ]);
        let mut sample = separate_sample(&pop, &[0, 1], &LocusBoundary::whole_genome(), false);
        assert_eq!(sample.neutral[0], Site::new(0.05, "11"));
        assert_eq!(
            sample.selected,
            vec![Site::new(0.2, "11"), Site::new(0.2, "11"), Site::new(1.5, "01")]
        );
        assert_eq!(drop_consecutive_duplicates(&mut sample.selected), 1);
        assert_eq!(sample.selected.len(), 2);
    }
}
