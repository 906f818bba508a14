use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

fn enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os("ER_STUDY_TRIAL_STATS").is_some())
}

#[derive(Debug, Clone, Copy)]
pub struct TrialStatsSnapshot {
    pub trials: u64,
    pub disconnected_trials: u64,
    pub edges_sampled: u64,
    pub bfs_sources: u64,
}

static TRIALS: AtomicU64 = AtomicU64::new(0);
static DISCONNECTED_TRIALS: AtomicU64 = AtomicU64::new(0);
static EDGES_SAMPLED: AtomicU64 = AtomicU64::new(0);
static BFS_SOURCES: AtomicU64 = AtomicU64::new(0);

pub fn reset() {
    TRIALS.store(0, Ordering::Relaxed);
    DISCONNECTED_TRIALS.store(0, Ordering::Relaxed);
    EDGES_SAMPLED.store(0, Ordering::Relaxed);
    BFS_SOURCES.store(0, Ordering::Relaxed);
}

pub fn snapshot_if_enabled() -> Option<TrialStatsSnapshot> {
    if !enabled() {
        return None;
    }
    Some(TrialStatsSnapshot {
        trials: TRIALS.load(Ordering::Relaxed),
        disconnected_trials: DISCONNECTED_TRIALS.load(Ordering::Relaxed),
        edges_sampled: EDGES_SAMPLED.load(Ordering::Relaxed),
        bfs_sources: BFS_SOURCES.load(Ordering::Relaxed),
    })
}

#[inline]
pub(crate) fn record_trial(edges: usize, connected: bool, bfs_sources: usize) {
    if enabled() {
        TRIALS.fetch_add(1, Ordering::Relaxed);
        EDGES_SAMPLED.fetch_add(edges as u64, Ordering::Relaxed);
        BFS_SOURCES.fetch_add(bfs_sources as u64, Ordering::Relaxed);
        if !connected {
            DISCONNECTED_TRIALS.fetch_add(1, Ordering::Relaxed);
        }
    }
}
