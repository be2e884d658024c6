use crate::errors::SamplerError;
use crate::population::PopulationSnapshot;
use crate::random::derive_rng;
use crate::sampling::{
    draw_gametes, drop_consecutive_duplicates, selected_details, separate_sample, LocusLayout,
    SampleDetail, SamplerConfig, SeparatedSample,
};
use crate::storage::{ms_block, GzAppender};
use rand::RngCore;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Output of one locus of one sampler invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleResult {
    pub sample: SeparatedSample,
    /// One entry per site of `sample.selected`, in the same order
    pub details: Vec<SampleDetail>,
}

/// Takes a sample of n gametes from a population every time it is invoked.
///
/// The sampler owns a generator derived from the caller's generator at
/// construction, so runs that construct and invoke samplers in the same
/// order produce identical samples and identical output files.
///
/// # Examples
///
/// ```
/// use fwdtrace_sim::population::{Diploid, Gamete, Mutation, Population};
/// use fwdtrace_sim::sampling::{Sampler, SamplerConfig};
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256PlusPlus;
///
/// let pop = Population::new(
///     vec![Mutation::selected(0.5, 0.01, 0)],
///     vec![Gamete::new(), Gamete::with_mutations(vec![], vec![0])],
///     vec![Diploid::new(0, 1), Diploid::new(0, 0)],
/// );
/// let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
/// let mut sampler = Sampler::new(SamplerConfig::new(4), &mut rng).unwrap();
/// sampler.sample(&pop, 1).unwrap();
/// assert_eq!(sampler.results().len(), 1);
/// ```
#[derive(Debug)]
pub struct Sampler {
    sample_size: usize,
    remove_fixed: bool,
    layout: LocusLayout,
    neutral_out: Option<GzAppender>,
    selected_out: Option<GzAppender>,
    rng: Xoshiro256PlusPlus,
    results: Vec<SampleResult>,
}

impl Sampler {
    /// Create a sampler, seeding its generator from one draw of `rng`.
    ///
    /// When `config.append` is false, each enabled output is truncated here,
    /// once; failing to open an output for truncation is an error.
    pub fn new<R: RngCore + ?Sized>(config: SamplerConfig, rng: &mut R) -> Result<Self, SamplerError> {
        config.validate()?;
        let rng = derive_rng(rng);
        let neutral_out = config.neutral_output().map(GzAppender::new);
        let selected_out = config.selected_output().map(GzAppender::new);

        if !config.append {
            for out in neutral_out.iter().chain(selected_out.iter()) {
                out.truncate()?;
            }
        }

        Ok(Self {
            sample_size: config.sample_size,
            remove_fixed: config.remove_fixed,
            layout: LocusLayout::from_boundaries(config.loci),
            neutral_out,
            selected_out,
            rng,
            results: Vec::new(),
        })
    }

    /// Sample the population as of `generation`.
    ///
    /// Each locus gets its own draw, so blocks of different loci in one
    /// invocation come from different gametes and are not linked. Selected
    /// blocks are cleaned of consecutive duplicates before they are written
    /// or annotated. Output
    /// already written for earlier invocations is never rolled back; if this
    /// call fails, nothing is added to [`results`](Self::results).
    pub fn sample<P>(&mut self, population: &P, generation: usize) -> Result<(), SamplerError>
    where
        P: PopulationSnapshot + ?Sized,
    {
        let mut samples = Vec::with_capacity(self.layout.num_loci());
        for locus in self.layout.boundaries() {
            let gametes = draw_gametes(&mut self.rng, population, self.sample_size);
            let mut sample = separate_sample(population, &gametes, locus, self.remove_fixed);
            let collapsed = drop_consecutive_duplicates(&mut sample.selected);
            if collapsed > 0 {
                warn!(generation, collapsed, "collapsed duplicated selected sites");
            }
            samples.push(sample);
        }

        if let Some(out) = &self.neutral_out {
            out.append(samples.iter().map(|s| ms_block(&s.neutral)))?;
        }
        if let Some(out) = &self.selected_out {
            out.append(samples.iter().map(|s| ms_block(&s.selected)))?;
        }

        let mut batch = Vec::with_capacity(samples.len());
        for (locus, sample) in samples.into_iter().enumerate() {
            let details = selected_details(&sample.selected, population, generation, locus)?;
            batch.push(SampleResult { sample, details });
        }
        debug!(
            generation,
            loci = batch.len(),
            neutral_sites = batch.iter().map(|r| r.sample.neutral.len()).sum::<usize>(),
            selected_sites = batch.iter().map(|r| r.sample.selected.len()).sum::<usize>(),
            "sampled population"
        );
        self.results.extend(batch);
        Ok(())
    }

    /// Everything sampled since construction, in invocation order
    /// (loci in layout order within an invocation).
    pub fn results(&self) -> &[SampleResult] {
        &self.results
    }

    /// Consume the sampler, returning its results.
    pub fn into_results(self) -> Vec<SampleResult> {
        self.results
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn layout(&self) -> &LocusLayout {
        &self.layout
    }

    /// Serialized state of the owned generator.
    pub fn rng_state_bytes(&self) -> Result<Vec<u8>, SamplerError> {
        Ok(bincode::serialize(&self.rng)?)
    }
}
