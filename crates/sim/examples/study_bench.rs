use er_study_shared::config::StudyConfig;
use er_study_sim::runner;
use std::time::Instant;

fn main() {
    let study = StudyConfig::default();

    for workers in [1usize, 2, 4, 8] {
        println!(
            "Running default study ({} configurations x {} runs) on {} workers...",
            study.configurations.len(),
            study.num_runs,
            workers
        );
        let start = Instant::now();
        let result = runner::run_study(&study, Some(workers)).unwrap();
        let elapsed = start.elapsed();

        println!("========================================");
        println!("  Trials:      {}", result.total_trials());
        println!("  Time:        {:.2}s", elapsed.as_secs_f64());
        println!(
            "  Per trial:   {:.1}ms",
            elapsed.as_secs_f64() * 1000.0 / result.total_trials() as f64
        );
        println!("========================================");
    }
}
