use rand::SeedableRng;
use rand_pcg::Pcg64;

use er_study_shared::config::Configuration;
use er_study_sim::engine;

use crate::output;

pub fn run(nodes: usize, probability: f64, seed: u64) -> anyhow::Result<()> {
    let config = Configuration::new(nodes, probability)?;
    let mut rng = Pcg64::seed_from_u64(seed);
    let trial = engine::run_trial(&config, &mut rng)?;
    output::print_trial(&config, seed, &trial);
    Ok(())
}
