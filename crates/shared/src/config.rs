use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand_pcg::Pcg64;

// Baseline study parameters
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_NUM_RUNS: u32 = 30;
pub const DEFAULT_CONFIGURATIONS: [(usize, f64); 3] = [(100, 0.1), (500, 0.02), (1000, 0.01)];
pub const HISTOGRAM_BINS: usize = 30;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("node count must be at least 1, got {0}")]
    NodeCount(usize),
    #[error("edge probability must lie in [0, 1], got {0}")]
    Probability(f64),
    #[error("expected N:P, got '{0}'")]
    Syntax(String),
    #[error("run count must be at least 1")]
    NoRuns,
    #[error("no configurations to study")]
    NoConfigurations,
}

/// One Erdős–Rényi parameterization: `n` labeled nodes, each possible edge
/// present with probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    n: usize,
    p: f64,
}

impl Configuration {
    pub fn new(n: usize, p: f64) -> Result<Self, ConfigError> {
        if n < 1 {
            return Err(ConfigError::NodeCount(n));
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Probability(p));
        }
        Ok(Self { n, p })
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Expected mean degree of G(n, p).
    pub fn expected_average_degree(&self) -> f64 {
        (self.n - 1) as f64 * self.p
    }
}

impl FromStr for Configuration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (n, p) = s
            .split_once(':')
            .ok_or_else(|| ConfigError::Syntax(s.to_string()))?;
        let n: usize = n
            .trim()
            .parse()
            .map_err(|_| ConfigError::Syntax(s.to_string()))?;
        let p: f64 = p
            .trim()
            .parse()
            .map_err(|_| ConfigError::Syntax(s.to_string()))?;
        Self::new(n, p)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.n, self.p)
    }
}

#[derive(Debug, Clone)]
pub struct StudyConfig {
    pub configurations: Vec<Configuration>,
    pub num_runs: u32,
    pub seed: u64,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            configurations: DEFAULT_CONFIGURATIONS
                .iter()
                .map(|&(n, p)| Configuration { n, p })
                .collect(),
            num_runs: DEFAULT_NUM_RUNS,
            seed: DEFAULT_SEED,
        }
    }
}

impl StudyConfig {
    pub fn new(
        configurations: Vec<Configuration>,
        num_runs: u32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let study = Self {
            configurations,
            num_runs,
            seed,
        };
        study.validate()?;
        Ok(study)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.configurations.is_empty() {
            return Err(ConfigError::NoConfigurations);
        }
        if self.num_runs == 0 {
            return Err(ConfigError::NoRuns);
        }
        Ok(())
    }

    /// The single generator every sample of the study draws from.
    pub fn rng(&self) -> Pcg64 {
        Pcg64::seed_from_u64(self.seed)
    }
}
