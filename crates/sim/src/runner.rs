use rand::Rng;
use rayon::ThreadPool;
use tracing::info;

use er_study_shared::config::{Configuration, StudyConfig};
use er_study_shared::result::{ConfigurationResult, StudyResult};

use crate::engine;

/// Emitted around each configuration so callers can stream a report.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    Started {
        index: usize,
        config: &'a Configuration,
    },
    Finished(&'a ConfigurationResult),
}

pub fn build_pool(n_workers: Option<usize>) -> anyhow::Result<ThreadPool> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8)))
        .build()?)
}

/// Run `num_runs` trials of one configuration, drawing every sample from `rng`
/// in order.
pub fn run_configuration<R: Rng + ?Sized>(
    index: usize,
    config: &Configuration,
    num_runs: u32,
    rng: &mut R,
) -> anyhow::Result<ConfigurationResult> {
    let trials = (0..num_runs)
        .map(|_| engine::run_trial(config, rng))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(ConfigurationResult::from_trials(index, *config, trials))
}

pub fn run_study_with<F>(
    study: &StudyConfig,
    n_workers: Option<usize>,
    mut observer: F,
) -> anyhow::Result<StudyResult>
where
    F: FnMut(Progress<'_>),
{
    study.validate()?;
    let pool = build_pool(n_workers)?;
    let mut rng = study.rng();

    let mut configurations = Vec::with_capacity(study.configurations.len());
    for (offset, config) in study.configurations.iter().enumerate() {
        let index = offset + 1;
        observer(Progress::Started { index, config });
        info!(index, n = config.n(), p = config.p(), runs = study.num_runs, "configuration started");

        let result = pool.install(|| run_configuration(index, config, study.num_runs, &mut rng))?;

        info!(
            index,
            mean_average_degree = result.mean_average_degree,
            mean_clustering = result.mean_clustering,
            mean_path_length = result.mean_path_length,
            disconnected_trials = result.disconnected_trials,
            "configuration finished"
        );
        observer(Progress::Finished(&result));
        configurations.push(result);
    }

    Ok(StudyResult { configurations })
}

pub fn run_study(study: &StudyConfig, n_workers: Option<usize>) -> anyhow::Result<StudyResult> {
    run_study_with(study, n_workers, |_| {})
}
