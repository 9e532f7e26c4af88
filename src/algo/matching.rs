/*!
# Bipartite Matching

This module answers matching questions on a [`WeightedBipartiteGraph`] via **flow reduction**:

- Build a network with a source, one node per left index, one node per right index, and a sink.
- Connect source → left and right → sink with unit capacities, plus one unit arc left → right per
  graph edge (weights play no role here).
- The maximum flow equals the maximum-cardinality matching; a **perfect matching** exists exactly
  if the flow reaches the partition size.

The network is built fresh for every query and discarded afterwards.
*/

use itertools::Itertools;

use super::*;

/// Builds the matching network for `edges` over partitions of size `partition_size`:
/// node `0` is the source, `1..=p` the left side, `p+1..=2p` the right side, `2p+1` the sink.
/// Also returns the forward arc of every input edge, in input order.
fn matching_network(
    partition_size: NumNodes,
    edges: &[WeightedEdge],
) -> (FlowNetwork, Vec<ArcIndex>) {
    let p = partition_size;
    let sink = 2 * p + 1;

    let mut network = FlowNetwork::new(2 * p + 2);
    for i in 0..p {
        network.add_edge(0, 1 + i, 1);
        network.add_edge(p + 1 + i, sink, 1);
    }

    let edge_arcs = edges
        .iter()
        .map(|e| network.add_edge(1 + e.source, p + 1 + e.destination, 1))
        .collect_vec();

    (network, edge_arcs)
}

/// Computes the maximum-cardinality matching size over an explicit edge slice.
///
/// Duplicate edges in the slice simply become parallel unit arcs and cannot inflate the result,
/// as the unit arcs into the sink bound the flow per right node.
pub fn maximum_matching_size(partition_size: NumNodes, edges: &[WeightedEdge]) -> NumNodes {
    if partition_size == 0 {
        return 0;
    }

    let (network, _) = matching_network(partition_size, edges);
    let mut solver = EdmondsKarp::new(network, 0, 2 * partition_size + 1);
    solver.max_flow() as NumNodes
}

/// A trait providing matching queries on weighted bipartite graphs.
pub trait Matching {
    /// Computes the size of a **maximum-cardinality matching**, in `0..=partition_size`
    fn maximum_matching_cardinality(&self) -> NumNodes;

    /// Computes a maximum-cardinality matching and returns its pairs `(left, right)`.
    /// The order of the pairs is unspecified.
    fn maximum_matching(&self) -> Vec<(Node, Node)>;

    /// Returns *true* if every node on both sides can be matched exactly once.
    /// Vacuously *true* for empty partitions.
    fn has_perfect_matching(&self) -> bool;
}

impl Matching for WeightedBipartiteGraph {
    fn maximum_matching_cardinality(&self) -> NumNodes {
        maximum_matching_size(self.partition_size(), self.edges())
    }

    fn maximum_matching(&self) -> Vec<(Node, Node)> {
        let p = self.partition_size();
        if p == 0 {
            return Vec::new();
        }

        let (network, edge_arcs) = matching_network(p, self.edges());
        let mut solver = EdmondsKarp::new(network, 0, 2 * p + 1);
        solver.max_flow();
        let network = solver.take();

        // an edge is matched exactly if its unit arc ended up saturated
        self.edges()
            .iter()
            .zip(edge_arcs)
            .filter(|&(_, a)| network.residual(a) == 0)
            .map(|(e, _)| (e.source, e.destination))
            .collect_vec()
    }

    fn has_perfect_matching(&self) -> bool {
        self.maximum_matching_cardinality() == self.partition_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_bipartite_graph_is_perfectly_matchable() {
        let mut graph = WeightedBipartiteGraph::new(3);
        let mut weight = 1.0;
        for i in 0..3 {
            for j in 0..3 {
                graph.add_edge(i, j, weight).unwrap();
                weight += 1.0;
            }
        }

        assert_eq!(graph.maximum_matching_cardinality(), 3);
        assert!(graph.has_perfect_matching());
    }

    #[test]
    fn contended_right_node_limits_the_matching() {
        // both left nodes only reach right node 0
        let graph =
            WeightedBipartiteGraph::from_edges(2, [(0u32, 0u32, 1.0), (1, 0, 2.0)]).unwrap();
        assert_eq!(graph.maximum_matching_cardinality(), 1);
        assert!(!graph.has_perfect_matching());
    }

    #[test]
    fn isolated_node_prevents_perfect_matching() {
        let graph = WeightedBipartiteGraph::from_edges(2, [(0u32, 0u32, 5.0)]).unwrap();
        assert_eq!(graph.maximum_matching_cardinality(), 1);
        assert!(!graph.has_perfect_matching());
    }

    #[test]
    fn empty_partitions_match_vacuously() {
        let graph = WeightedBipartiteGraph::new(0);
        assert_eq!(graph.maximum_matching_cardinality(), 0);
        assert!(graph.has_perfect_matching());
    }

    #[test]
    fn duplicate_edges_do_not_inflate_the_matching() {
        let graph =
            WeightedBipartiteGraph::from_edges(1, [(0u32, 0u32, 1.0), (0, 0, 2.0)]).unwrap();
        assert_eq!(graph.maximum_matching_cardinality(), 1);
    }

    #[test]
    fn matching_pairs_are_a_valid_matching() {
        let graph = WeightedBipartiteGraph::from_edges(
            3,
            [
                (0u32, 1u32, 1.0),
                (0, 2, 2.0),
                (1, 0, 3.0),
                (2, 1, 4.0),
                (2, 2, 5.0),
            ],
        )
        .unwrap();

        let matching = graph.maximum_matching();
        assert_eq!(matching.len() as NumNodes, graph.maximum_matching_cardinality());
        assert_eq!(matching.len(), 3);

        let lefts = matching.iter().map(|&(a, _)| a).collect_vec();
        let rights = matching.iter().map(|&(_, b)| b).collect_vec();
        assert!(lefts.iter().all_unique());
        assert!(rights.iter().all_unique());
    }

    #[test]
    fn matching_on_edge_slices() {
        let edges = [
            WeightedEdge::new(0, 0, 1.0),
            WeightedEdge::new(0, 1, 2.0),
            WeightedEdge::new(1, 1, 3.0),
        ];
        assert_eq!(maximum_matching_size(2, &edges), 2);
        assert_eq!(maximum_matching_size(2, &edges[..1]), 1);
        assert_eq!(maximum_matching_size(2, &[]), 0);
        assert_eq!(maximum_matching_size(0, &[]), 0);
    }
}
