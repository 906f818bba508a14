use crate::graph::SimpleGraph;

impl SimpleGraph {
    /// Fraction of pairs of `v`'s neighbors that are themselves adjacent.
    /// Nodes with fewer than two neighbors score 0.
    pub fn local_clustering(&self, v: usize) -> f64 {
        let mut marks = vec![false; self.node_count()];
        local_clustering_marked(self, v, &mut marks)
    }

    /// Mean local clustering over every node; 0 for the empty graph.
    pub fn average_clustering(&self) -> f64 {
        let n = self.node_count();
        if n == 0 {
            return 0.0;
        }
        let mut marks = vec![false; n];
        let total: f64 = (0..n)
            .map(|v| local_clustering_marked(self, v, &mut marks))
            .sum();
        total / n as f64
    }
}

// `marks` must be all false on entry and is left all false on exit.
fn local_clustering_marked(graph: &SimpleGraph, v: usize, marks: &mut [bool]) -> f64 {
    let neighbors: Vec<usize> = graph.neighbors(v).collect();
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    for &u in &neighbors {
        marks[u] = true;
    }
    // Every edge between two neighbors is seen once from each end.
    let mut links = 0usize;
    for &u in &neighbors {
        links += graph.neighbors(u).filter(|&w| marks[w]).count();
    }
    for &u in &neighbors {
        marks[u] = false;
    }

    links as f64 / (k * (k - 1)) as f64
}
