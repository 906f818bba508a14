use er_study_shared::config::Configuration;
use er_study_shared::result::{ConfigurationResult, TrialMetrics};
use er_study_shared::stats::round_to;

/// Shortest round-trip form, keeping a trailing `.0` on integral values.
/// Magnitudes below 1e-4 or from 1e16 up use scientific notation with a
/// signed, at least two-digit exponent (`1e-05`, `2.5e+16`).
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-4..1e16).contains(&magnitude) {
        return format!("{value:?}");
    }
    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => scientific,
    }
}

fn rounded(value: f64) -> String {
    format_value(round_to(value, 4))
}

pub fn format_header(index: usize, config: &Configuration) -> String {
    format!(
        "Configuration {}: n = {}, p = {}",
        index,
        config.n(),
        format_value(config.p())
    )
}

pub fn format_summary(result: &ConfigurationResult) -> Vec<String> {
    let runs = result.num_runs;
    vec![
        format!(
            "Average Degree (over {runs} runs): {}",
            rounded(result.mean_average_degree)
        ),
        format!(
            "Average Clustering Coefficient (over {runs} runs): {}",
            rounded(result.mean_clustering)
        ),
        format!(
            "Average Path Length (over {runs} runs): {}",
            rounded(result.mean_path_length)
        ),
    ]
}

pub fn print_header(index: usize, config: &Configuration) {
    println!("{}", format_header(index, config));
}

pub fn print_summary(result: &ConfigurationResult) {
    for line in format_summary(result) {
        println!("{line}");
    }
}

pub fn print_trial(config: &Configuration, seed: u64, trial: &TrialMetrics) {
    let edges = trial.degrees.iter().sum::<usize>() / 2;
    println!("\n========================================");
    println!("  Nodes:            {}", config.n());
    println!("  Probability:      {}", format_value(config.p()));
    println!("  Seed:             {seed}");
    println!("  Edges:            {edges}");
    println!("  Connected:        {}", trial.connected);
    println!("  Measured nodes:   {}", trial.measured_nodes);
    println!("  Avg degree:       {}", rounded(trial.average_degree));
    println!("  Clustering:       {}", rounded(trial.clustering));
    println!("  Avg path length:  {}", rounded(trial.path_length));
    println!("========================================");
}

pub fn print_trial_stats() {
    if let Some(stats) = er_study_sim::trial_stats::snapshot_if_enabled() {
        let trials = stats.trials.max(1);
        println!("\nTrial stats (ER_STUDY_TRIAL_STATS=1):");
        println!(
            "  Trials:      {} ({} disconnected, {:.1}%)",
            stats.trials,
            stats.disconnected_trials,
            100.0 * stats.disconnected_trials as f64 / trials as f64,
        );
        println!(
            "  Edges:       {} (avg {:.1}/trial)",
            stats.edges_sampled,
            stats.edges_sampled as f64 / trials as f64,
        );
        println!(
            "  BFS sources: {} (avg {:.1}/trial)",
            stats.bfs_sources,
            stats.bfs_sources as f64 / trials as f64,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use er_study_shared::config::StudyConfig;

    fn result_500() -> ConfigurationResult {
        ConfigurationResult {
            index: 2,
            config: Configuration::new(500, 0.02).unwrap(),
            num_runs: 30,
            mean_average_degree: 9.979_466_666,
            mean_clustering: 0.019_934_12,
            mean_path_length: 2.516_34,
            degree_distribution: vec![10; 500 * 30],
            disconnected_trials: 0,
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.1), "0.1");
        assert_eq!(format_value(0.02), "0.02");
        assert_eq!(format_value(9.0), "9.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!(format_value(1.0), "1.0");
    }

    #[test]
    fn test_format_value_scientific_range() {
        assert_eq!(format_value(1e-5), "1e-05");
        assert_eq!(format_value(2.5e-7), "2.5e-07");
        assert_eq!(format_value(1e-100), "1e-100");
        assert_eq!(format_value(1e16), "1e+16");
        assert_eq!(format_value(-3e-6), "-3e-06");
    }

    #[test]
    fn test_rounded() {
        assert_eq!(rounded(9.904_666), "9.9047");
        assert_eq!(rounded(0.099_996), "0.1");
        assert_eq!(rounded(2.516_34), "2.5163");
        assert_eq!(rounded(0.999_35), "0.9993");
        assert_eq!(rounded(0.567_85), "0.5678");
        assert_eq!(rounded(0.605_25), "0.6052");
    }

    #[test]
    fn test_header_line() {
        let config = Configuration::new(500, 0.02).unwrap();
        assert_eq!(format_header(2, &config), "Configuration 2: n = 500, p = 0.02");
        let config = Configuration::new(100, 0.1).unwrap();
        assert_eq!(format_header(1, &config), "Configuration 1: n = 100, p = 0.1");
    }

    #[test]
    fn test_summary_lines() {
        assert_eq!(
            format_summary(&result_500()),
            vec![
                "Average Degree (over 30 runs): 9.9795",
                "Average Clustering Coefficient (over 30 runs): 0.0199",
                "Average Path Length (over 30 runs): 2.5163",
            ]
        );
    }

    fn report(study: &StudyConfig) -> Vec<String> {
        let result = er_study_sim::runner::run_study(study, Some(2)).unwrap();
        let mut lines = Vec::new();
        for r in &result.configurations {
            lines.push(format_header(r.index, &r.config));
            lines.extend(format_summary(r));
        }
        lines
    }

    #[test]
    fn test_report_is_identical_across_runs() {
        let study = StudyConfig::new(
            vec![
                Configuration::new(60, 0.1).unwrap(),
                Configuration::new(90, 0.02).unwrap(),
            ],
            4,
            42,
        )
        .unwrap();
        let first = report(&study);
        assert_eq!(first.len(), 8);
        assert_eq!(first[0], "Configuration 1: n = 60, p = 0.1");
        assert_eq!(first[4], "Configuration 2: n = 90, p = 0.02");
        assert!(first[1].starts_with("Average Degree (over 4 runs): "));
        assert_eq!(first, report(&study));
    }
}
