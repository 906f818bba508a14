use petgraph::graph::NodeIndex;
use petgraph::visit::Dfs;

use crate::graph::SimpleGraph;

impl SimpleGraph {
    /// Connected components, ordered by their lowest node index, each with its
    /// members sorted ascending.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let g = self.inner();
        let n = g.node_count();
        let mut components = Vec::new();
        if n == 0 {
            return components;
        }

        let mut dfs = Dfs::new(g, NodeIndex::new(0));
        let mut assigned = vec![false; n];
        for start in 0..n {
            if assigned[start] {
                continue;
            }
            dfs.move_to(NodeIndex::new(start));
            let mut members = Vec::new();
            while let Some(idx) = dfs.next(g) {
                assigned[idx.index()] = true;
                members.push(idx.index());
            }
            members.sort_unstable();
            components.push(members);
        }
        components
    }
}

/// True iff `components` holds exactly one component. A graph with no nodes
/// has no components and is not connected.
pub fn is_connected(components: &[Vec<usize>]) -> bool {
    components.len() == 1
}

/// The largest of `components`. Among components of equal size the first
/// listed wins, which for `SimpleGraph::connected_components` is the one
/// holding the lowest node index.
pub fn largest_component(components: Vec<Vec<usize>>) -> Vec<usize> {
    let mut best: Vec<usize> = Vec::new();
    for component in components {
        if component.len() > best.len() {
            best = component;
        }
    }
    best
}
