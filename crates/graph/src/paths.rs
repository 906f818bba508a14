use std::collections::VecDeque;

use rayon::prelude::*;

use crate::graph::{GraphError, SimpleGraph};

impl SimpleGraph {
    /// Mean hop distance over ordered pairs of distinct nodes.
    ///
    /// Sources run on the current rayon pool. Per-source sums are integers, so
    /// the result is independent of how the work is split.
    pub fn average_shortest_path_length(&self) -> Result<f64, GraphError> {
        let n = self.node_count();
        match n {
            0 => return Err(GraphError::EmptyGraph),
            1 => return Ok(0.0),
            _ => {}
        }

        let total: u64 = (0..n)
            .into_par_iter()
            .map(|source| {
                let (sum, reached) = distance_sum(self, source);
                if reached == n {
                    Ok(sum)
                } else {
                    Err(GraphError::Disconnected)
                }
            })
            .try_reduce(|| 0, |a, b| Ok(a + b))?;

        Ok(total as f64 / (n * (n - 1)) as f64)
    }
}

// BFS from `source`: (sum of distances, nodes reached including source).
fn distance_sum(graph: &SimpleGraph, source: usize) -> (u64, usize) {
    let n = graph.node_count();
    let mut dist = vec![usize::MAX; n];
    dist[source] = 0;
    let mut queue = VecDeque::with_capacity(n);
    queue.push_back(source);

    let mut sum = 0u64;
    let mut reached = 1usize;
    while let Some(u) = queue.pop_front() {
        let next = dist[u] + 1;
        for w in graph.neighbors(u) {
            if dist[w] == usize::MAX {
                dist[w] = next;
                sum += next as u64;
                reached += 1;
                queue.push_back(w);
            }
        }
    }
    (sum, reached)
}
