pub mod engine;
pub mod histogram;
pub mod plot;
pub mod runner;
pub mod trial_stats; // opt-in run counters
