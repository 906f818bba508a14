use std::path::Path;

use tracing::info;

use er_study_shared::config::{Configuration, StudyConfig};
use er_study_sim::{plot, trial_stats};
use er_study_sim::runner::{self, Progress};

use crate::output;

pub fn run(
    configs: Vec<Configuration>,
    runs: u32,
    seed: u64,
    plot_path: Option<&Path>,
    workers: usize,
) -> anyhow::Result<()> {
    let configurations = if configs.is_empty() {
        StudyConfig::default().configurations
    } else {
        configs
    };
    let study = StudyConfig::new(configurations, runs, seed)?;
    let n_workers = if workers == 0 { None } else { Some(workers) };

    trial_stats::reset();
    let start = std::time::Instant::now();
    let result = runner::run_study_with(&study, n_workers, |event| match event {
        Progress::Started { index, config } => output::print_header(index, config),
        Progress::Finished(result) => output::print_summary(result),
    })?;
    info!(
        configurations = result.n_configurations(),
        trials = result.total_trials(),
        elapsed_s = start.elapsed().as_secs_f64(),
        "study complete"
    );

    if let Some(path) = plot_path {
        plot::render_degree_distributions(&result.configurations, path)?;
        info!(path = %path.display(), "degree distribution chart written");
    }

    output::print_trial_stats();
    Ok(())
}
