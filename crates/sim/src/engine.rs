use rand::Rng;
use tracing::debug;

use er_study_graph::components::{is_connected, largest_component};
use er_study_graph::erdos_renyi;
use er_study_shared::config::Configuration;
use er_study_shared::result::TrialMetrics;

use crate::trial_stats;

/// Sample one G(n, p) and measure it. The graph is dropped on return.
///
/// Path length is taken over the whole graph when it is connected and over
/// the subgraph induced by its largest component otherwise.
pub fn run_trial<R: Rng + ?Sized>(
    config: &Configuration,
    rng: &mut R,
) -> anyhow::Result<TrialMetrics> {
    let graph = erdos_renyi(config.n(), config.p(), rng)?;

    let degrees = graph.degrees();
    let average_degree = graph.average_degree();
    let clustering = graph.average_clustering();

    let components = graph.connected_components();
    let connected = is_connected(&components);
    let (path_length, measured_nodes) = if connected {
        (graph.average_shortest_path_length()?, graph.node_count())
    } else {
        let largest = largest_component(components);
        let core = graph.induced_subgraph(&largest)?;
        (core.average_shortest_path_length()?, core.node_count())
    };

    trial_stats::record_trial(graph.edge_count(), connected, measured_nodes);
    debug!(
        n = config.n(),
        p = config.p(),
        edges = graph.edge_count(),
        connected,
        measured_nodes,
        average_degree,
        clustering,
        path_length,
        "trial complete"
    );

    Ok(TrialMetrics {
        average_degree,
        clustering,
        path_length,
        degrees,
        connected,
        measured_nodes,
    })
}
