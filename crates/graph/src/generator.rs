use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

use crate::graph::{GraphError, SimpleGraph};

/// Sample G(n, p).
///
/// Pairs `(u, v)` with `u < v` are visited in lexicographic order and each
/// consumes exactly one Bernoulli draw from `rng`, so the sequence of draws
/// depends only on `n`. `p <= 0` and `p >= 1` short-circuit to the edgeless
/// and complete graphs without touching the generator.
pub fn erdos_renyi<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    rng: &mut R,
) -> Result<SimpleGraph, GraphError> {
    let coin = Bernoulli::new(p).map_err(|_| GraphError::InvalidProbability(p))?;
    if p <= 0.0 {
        return Ok(SimpleGraph::with_nodes(n));
    }
    if p >= 1.0 {
        return Ok(SimpleGraph::complete(n));
    }

    let mut graph = SimpleGraph::with_nodes(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if coin.sample(rng) {
                graph.push_edge(u, v);
            }
        }
    }
    Ok(graph)
}
