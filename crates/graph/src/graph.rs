use petgraph::graph::{NodeIndex, UnGraph};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("edge probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("node {node} out of range for graph of {nodes} nodes")]
    NodeOutOfRange { node: usize, nodes: usize },
    #[error("self loop on node {0}")]
    SelfLoop(usize),
    #[error("duplicate edge ({0}, {1})")]
    DuplicateEdge(usize, usize),
    #[error("graph has no nodes")]
    EmptyGraph,
    #[error("graph is not connected")]
    Disconnected,
}

/// Simple undirected graph on nodes `0..n`: no self loops, no parallel edges.
#[derive(Debug, Clone, Default)]
pub struct SimpleGraph {
    inner: UnGraph<(), ()>,
}

impl SimpleGraph {
    pub fn with_nodes(n: usize) -> Self {
        let mut inner = UnGraph::with_capacity(n, 0);
        for _ in 0..n {
            inner.add_node(());
        }
        Self { inner }
    }

    /// Build the complete graph on `n` nodes.
    pub fn complete(n: usize) -> Self {
        let mut graph = Self::with_nodes(n);
        for u in 0..n {
            for v in (u + 1)..n {
                graph.push_edge(u, v);
            }
        }
        graph
    }

    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge(u, v));
        }
        self.push_edge(u, v);
        Ok(())
    }

    /// Add an edge the caller already knows to be new and valid.
    #[inline]
    pub(crate) fn push_edge(&mut self, u: usize, v: usize) {
        self.inner.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.inner
            .find_edge(NodeIndex::new(u), NodeIndex::new(v))
            .is_some()
    }

    #[inline]
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.inner.neighbors(NodeIndex::new(v)).map(|idx| idx.index())
    }

    /// Degree of every node, in node order.
    pub fn degrees(&self) -> Vec<usize> {
        self.inner
            .node_indices()
            .map(|idx| self.inner.neighbors(idx).count())
            .collect()
    }

    pub fn average_degree(&self) -> f64 {
        let n = self.node_count();
        if n == 0 {
            0.0
        } else {
            2.0 * self.edge_count() as f64 / n as f64
        }
    }

    /// Subgraph induced by `nodes`. Kept nodes are relabeled `0..k` in
    /// ascending order of their original index.
    pub fn induced_subgraph(&self, nodes: &[usize]) -> Result<SimpleGraph, GraphError> {
        let mut keep = vec![false; self.node_count()];
        for &v in nodes {
            self.check_node(v)?;
            keep[v] = true;
        }
        let inner = self
            .inner
            .filter_map(|idx, _| keep[idx.index()].then_some(()), |_, _| Some(()));
        Ok(Self { inner })
    }

    /// Access the underlying petgraph graph.
    pub fn inner(&self) -> &UnGraph<(), ()> {
        &self.inner
    }

    fn check_node(&self, v: usize) -> Result<(), GraphError> {
        if v < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: v,
                nodes: self.node_count(),
            })
        }
    }
}

#[cfg(test)]
pub(crate) fn from_edges(n: usize, edges: &[(usize, usize)]) -> SimpleGraph {
    let mut graph = SimpleGraph::with_nodes(n);
    for &(u, v) in edges {
        graph.add_edge(u, v).unwrap();
    }
    graph
}
