use crate::config::Configuration;
use crate::stats::mean;

#[derive(Debug, Clone)]
pub struct TrialMetrics {
    pub average_degree: f64,
    pub clustering: f64,
    pub path_length: f64,
    pub degrees: Vec<usize>,
    pub connected: bool,
    /// Node count of the component `path_length` was measured on.
    pub measured_nodes: usize,
}

#[derive(Debug, Clone)]
pub struct ConfigurationResult {
    /// 1-based position in the study.
    pub index: usize,
    pub config: Configuration,
    pub num_runs: usize,
    pub mean_average_degree: f64,
    pub mean_clustering: f64,
    pub mean_path_length: f64,
    pub degree_distribution: Vec<usize>,
    pub disconnected_trials: usize,
}

impl ConfigurationResult {
    pub fn from_trials(index: usize, config: Configuration, trials: Vec<TrialMetrics>) -> Self {
        let num_runs = trials.len();
        let average_degrees: Vec<f64> = trials.iter().map(|t| t.average_degree).collect();
        let clustering: Vec<f64> = trials.iter().map(|t| t.clustering).collect();
        let path_lengths: Vec<f64> = trials.iter().map(|t| t.path_length).collect();
        let disconnected_trials = trials.iter().filter(|t| !t.connected).count();

        let mut degree_distribution = Vec::with_capacity(config.n() * num_runs);
        for trial in trials {
            degree_distribution.extend(trial.degrees);
        }

        Self {
            index,
            config,
            num_runs,
            mean_average_degree: mean(&average_degrees),
            mean_clustering: mean(&clustering),
            mean_path_length: mean(&path_lengths),
            degree_distribution,
            disconnected_trials,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudyResult {
    pub configurations: Vec<ConfigurationResult>,
}

impl StudyResult {
    pub fn n_configurations(&self) -> usize {
        self.configurations.len()
    }

    pub fn total_trials(&self) -> usize {
        self.configurations.iter().map(|r| r.num_runs).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(degrees: Vec<usize>, clustering: f64, path_length: f64, connected: bool) -> TrialMetrics {
        let average_degree = degrees.iter().sum::<usize>() as f64 / degrees.len() as f64;
        let measured_nodes = degrees.len();
        TrialMetrics {
            average_degree,
            clustering,
            path_length,
            degrees,
            connected,
            measured_nodes,
        }
    }

    #[test]
    fn test_from_trials_aggregates() {
        let config = Configuration::new(3, 0.5).unwrap();
        let trials = vec![
            trial(vec![2, 2, 2], 1.0, 1.0, true),
            trial(vec![1, 0, 1], 0.0, 1.0, false),
        ];
        let result = ConfigurationResult::from_trials(1, config, trials);

        assert_eq!(result.index, 1);
        assert_eq!(result.num_runs, 2);
        assert!((result.mean_average_degree - (2.0 + 2.0 / 3.0) / 2.0).abs() < 1e-12);
        assert!((result.mean_clustering - 0.5).abs() < 1e-12);
        assert!((result.mean_path_length - 1.0).abs() < 1e-12);
        assert_eq!(result.degree_distribution, vec![2, 2, 2, 1, 0, 1]);
        assert_eq!(result.disconnected_trials, 1);
    }

    #[test]
    fn test_pool_length_is_n_times_runs() {
        let config = Configuration::new(4, 0.0).unwrap();
        let trials: Vec<TrialMetrics> = (0..5).map(|_| trial(vec![0; 4], 0.0, 0.0, false)).collect();
        let result = ConfigurationResult::from_trials(2, config, trials);
        assert_eq!(result.degree_distribution.len(), 4 * 5);

        let study = StudyResult {
            configurations: vec![result],
        };
        assert_eq!(study.n_configurations(), 1);
        assert_eq!(study.total_trials(), 5);
    }
}
