use crate::errors::{SamplerError, ValidationError};
use crate::sampling::LocusBoundary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Parameters for a [`Sampler`](crate::sampling::Sampler).
///
/// # Examples
///
/// ```
/// use fwdtrace_sim::sampling::SamplerConfig;
///
/// let config = SamplerConfig::new(20)
///     .with_selected_output("selected.gz")
///     .with_loci(vec![(0.0, 1.0), (1.0, 2.0)])
///     .truncate();
/// assert!(config.neutral_output().is_none());
/// assert!(!config.append);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Number of gametes drawn per locus and invocation
    pub sample_size: usize,
    /// Output for neutral-class blocks (disabled when unset or empty)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutral_output: Option<PathBuf>,
    /// Output for selected-class blocks (disabled when unset or empty)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_output: Option<PathBuf>,
    /// Drop sites carried by every sampled gamete; when false, the fixation
    /// table is added to the sample instead
    #[serde(default = "default_true")]
    pub remove_fixed: bool,
    /// Locus intervals; empty for a single-locus population
    #[serde(default)]
    pub loci: Vec<LocusBoundary>,
    /// Keep existing output content; when false, outputs are truncated once
    /// at construction
    #[serde(default = "default_true")]
    pub append: bool,
}

fn default_true() -> bool {
    true
}

impl SamplerConfig {
    /// Sample `sample_size` gametes, no outputs, fixed sites removed, append mode.
    pub fn new(sample_size: usize) -> Self {
        Self {
            sample_size,
            neutral_output: None,
            selected_output: None,
            remove_fixed: true,
            loci: Vec::new(),
            append: true,
        }
    }

    pub fn with_neutral_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.neutral_output = Some(path.into());
        self
    }

    pub fn with_selected_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.selected_output = Some(path.into());
        self
    }

    pub fn remove_fixed(mut self, remove_fixed: bool) -> Self {
        self.remove_fixed = remove_fixed;
        self
    }

    pub fn with_loci<B: Into<LocusBoundary>>(mut self, loci: Vec<B>) -> Self {
        self.loci = loci.into_iter().map(Into::into).collect();
        self
    }

    /// Truncate outputs once at construction instead of appending.
    pub fn truncate(mut self) -> Self {
        self.append = false;
        self
    }

    /// Neutral output path, if the stream is enabled.
    pub fn neutral_output(&self) -> Option<&Path> {
        enabled(&self.neutral_output)
    }

    /// Selected output path, if the stream is enabled.
    pub fn selected_output(&self) -> Option<&Path> {
        enabled(&self.selected_output)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sample_size == 0 {
            return Err(ValidationError::InvalidSampleSize);
        }
        self.loci.iter().try_for_each(LocusBoundary::validate)
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, SamplerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SamplerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SamplerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

fn enabled(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| !p.as_os_str().is_empty())
}
