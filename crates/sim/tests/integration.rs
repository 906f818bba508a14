use rand::SeedableRng;
use rand_pcg::Pcg64;

use er_study_shared::config::{Configuration, StudyConfig};
use er_study_sim::{engine, plot, runner};

fn study(configs: &[(usize, f64)], num_runs: u32, seed: u64) -> StudyConfig {
    let configurations = configs
        .iter()
        .map(|&(n, p)| Configuration::new(n, p).unwrap())
        .collect();
    StudyConfig::new(configurations, num_runs, seed).unwrap()
}

#[test]
fn test_pool_length_and_metric_ranges() {
    let study = study(&[(60, 0.1), (80, 0.03)], 6, 42);
    let result = runner::run_study(&study, Some(2)).unwrap();

    for r in &result.configurations {
        let n = r.config.n();
        assert_eq!(r.degree_distribution.len(), n * 6);
        assert!(r.mean_average_degree >= 0.0 && r.mean_average_degree <= (n - 1) as f64);
        assert!((0.0..=1.0).contains(&r.mean_clustering));
        assert!(r.mean_path_length.is_finite());
    }
}

#[test]
fn test_trial_metrics_bounds() {
    let config = Configuration::new(120, 0.05).unwrap();
    let mut rng = Pcg64::seed_from_u64(5);
    for _ in 0..10 {
        let trial = engine::run_trial(&config, &mut rng).unwrap();
        assert_eq!(trial.degrees.len(), 120);
        assert!(trial.average_degree >= 0.0 && trial.average_degree <= 119.0);
        assert!((0.0..=1.0).contains(&trial.clustering), "clustering {}", trial.clustering);
        if trial.measured_nodes >= 2 {
            assert!(trial.path_length >= 1.0, "path length {}", trial.path_length);
        }
    }
}

#[test]
fn test_deterministic_for_fixed_seed() {
    let study = study(&[(50, 0.1), (70, 0.05)], 4, 42);
    let a = runner::run_study(&study, Some(1)).unwrap();
    let b = runner::run_study(&study, Some(4)).unwrap();

    for (x, y) in a.configurations.iter().zip(&b.configurations) {
        assert_eq!(x.mean_average_degree.to_bits(), y.mean_average_degree.to_bits());
        assert_eq!(x.mean_clustering.to_bits(), y.mean_clustering.to_bits());
        assert_eq!(x.mean_path_length.to_bits(), y.mean_path_length.to_bits());
        assert_eq!(x.degree_distribution, y.degree_distribution);
    }
}

#[test]
fn test_seed_changes_samples() {
    let a = runner::run_study(&study(&[(50, 0.1)], 3, 1), Some(1)).unwrap();
    let b = runner::run_study(&study(&[(50, 0.1)], 3, 2), Some(1)).unwrap();
    assert_ne!(
        a.configurations[0].degree_distribution,
        b.configurations[0].degree_distribution
    );
}

#[test]
fn test_dense_configuration_matches_theory() {
    let study = study(&[(100, 0.1)], 30, 42);
    let result = runner::run_study(&study, None).unwrap();
    let r = &result.configurations[0];

    let expected_degree = r.config.expected_average_degree();
    assert!((expected_degree - 9.9).abs() < 1e-12);
    assert!(
        (r.mean_average_degree - expected_degree).abs() < 0.5,
        "degree {} vs expected {expected_degree}",
        r.mean_average_degree
    );
    // E[C] = p for G(n, p)
    assert!((r.mean_clustering - r.config.p()).abs() < 0.02, "clustering {}", r.mean_clustering);
    assert!(r.mean_path_length > 1.0);
}

#[test]
fn test_sparse_configuration_restricts_to_largest_component() {
    let study = study(&[(1000, 0.01)], 3, 42);
    let result = runner::run_study(&study, None).unwrap();
    let r = &result.configurations[0];

    assert_eq!(r.degree_distribution.len(), 3000);
    assert!(r.mean_path_length.is_finite());
    assert!(r.mean_path_length >= 1.0);
}

#[test]
fn test_zero_probability() {
    let study = study(&[(30, 0.0)], 5, 42);
    let result = runner::run_study(&study, Some(1)).unwrap();
    let r = &result.configurations[0];

    assert_eq!(r.mean_average_degree, 0.0);
    assert_eq!(r.mean_clustering, 0.0);
    assert_eq!(r.mean_path_length, 0.0);
    assert_eq!(r.disconnected_trials, 5);
    assert!(r.degree_distribution.iter().all(|&d| d == 0));
}

#[test]
fn test_plot_renders_study() {
    let study = study(&[(40, 0.1), (40, 0.2)], 3, 42);
    let result = runner::run_study(&study, Some(1)).unwrap();
    let svg = plot::render_svg_string(&result.configurations).unwrap();
    assert!(svg.contains(plot::TITLE));
    assert!(svg.contains("Config 2 (n=40, p=0.2)"));
}
