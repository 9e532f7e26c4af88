/*!
# Weighted Bipartite Graphs

This module defines the owning representation of a **weighted bipartite graph** with two equally
sized partitions. Left and right nodes are indexed independently from `0` to `partition_size - 1`.

## Design

- The edge container is a **multiset**: structurally identical edges inserted twice are both
  retained. Callers may intentionally keep several weight hypotheses for the same endpoint pair.
- Alongside the edges, the graph mirrors every inserted weight in a flat list that algorithms use
  for candidate-value enumeration without touching the edge set.
- [`WeightedBipartiteGraph::filter_by_maximum`] returns a **new** graph and never mutates the
  receiver, so repeated filtering at different thresholds always starts from the original edge set.
*/

use crate::{edge::*, errors::*, node::*};

/// A weighted bipartite graph whose partitions both contain `partition_size` nodes.
///
/// Equal partition sizes are an invariant of this type: a perfect matching can only exist between
/// partitions of the same size, and all algorithms of this crate rely on it.
#[derive(Clone)]
pub struct WeightedBipartiteGraph {
    partition_size: NumNodes,
    edges: Vec<WeightedEdge>,
    weights: Vec<Weight>,
}

impl WeightedBipartiteGraph {
    /// Creates an edgeless graph with `partition_size` nodes on each side
    pub fn new(partition_size: NumNodes) -> Self {
        Self {
            partition_size,
            edges: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Creates a graph from a partition size and an iterator over edges.
    ///
    /// # Errors
    /// Returns the first error raised by [`Self::add_edge`], i.e. if any edge has an endpoint
    /// outside `[0, partition_size)` or a weight that is not a finite non-negative value.
    pub fn from_edges<I, E>(partition_size: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let mut graph = Self::new(partition_size);
        for edge in edges {
            let WeightedEdge {
                source,
                destination,
                weight,
            } = edge.into();
            graph.add_edge(source, destination, weight)?;
        }
        Ok(graph)
    }

    /// Returns the number of nodes on each side of the bipartition
    pub fn partition_size(&self) -> NumNodes {
        self.partition_size
    }

    /// Returns the number of edges, counting duplicates
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns *true* if the graph has no edges
    pub fn is_edgeless(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns all edges in insertion order
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Returns the weight multiset, one entry per inserted edge, in insertion order
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Inserts the edge `(source, destination)` with the given weight.
    /// Duplicates are always inserted, even if an identical edge is already present.
    ///
    /// # Errors
    /// - [`GraphError::InvalidNodeIndex`] if either endpoint is `>= partition_size`. Failing here
    ///   keeps malformed indices from surfacing later as an unrelated panic deep inside the flow
    ///   reduction.
    /// - [`GraphError::InvalidWeight`] if the weight is NaN, infinite, or negative.
    pub fn add_edge(&mut self, source: Node, destination: Node, weight: Weight) -> Result<()> {
        for node in [source, destination] {
            if node >= self.partition_size {
                return Err(GraphError::InvalidNodeIndex {
                    node,
                    partition_size: self.partition_size,
                });
            }
        }

        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { weight });
        }

        self.edges.push(WeightedEdge::new(source, destination, weight));
        self.weights.push(weight);
        Ok(())
    }

    /// Returns a new, independent graph with the same partition size containing exactly the edges
    /// of weight `<= max_weight` (inclusive). The receiver is left untouched.
    pub fn filter_by_maximum(&self, max_weight: Weight) -> Self {
        let edges: Vec<_> = self
            .edges
            .iter()
            .filter(|e| e.is_at_most(max_weight))
            .copied()
            .collect();
        let weights = edges.iter().map(|e| e.weight).collect();

        Self {
            partition_size: self.partition_size,
            edges,
            weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_rejects_out_of_range_indices() {
        let mut graph = WeightedBipartiteGraph::new(3);
        assert_eq!(
            graph.add_edge(3, 0, 1.0),
            Err(GraphError::InvalidNodeIndex {
                node: 3,
                partition_size: 3
            })
        );
        assert_eq!(
            graph.add_edge(0, 7, 1.0),
            Err(GraphError::InvalidNodeIndex {
                node: 7,
                partition_size: 3
            })
        );
        assert!(graph.is_edgeless());
    }

    #[test]
    fn add_edge_rejects_malformed_weights() {
        let mut graph = WeightedBipartiteGraph::new(2);
        for weight in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            assert!(matches!(
                graph.add_edge(0, 0, weight),
                Err(GraphError::InvalidWeight { .. })
            ));
        }
        assert!(graph.add_edge(0, 0, 0.0).is_ok());
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn duplicate_edges_are_retained() {
        let mut graph = WeightedBipartiteGraph::new(2);
        graph.add_edge(0, 1, 2.0).unwrap();
        graph.add_edge(0, 1, 2.0).unwrap();
        graph.add_edge(0, 1, 5.0).unwrap();

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.weights(), &[2.0, 2.0, 5.0]);
    }

    #[test]
    fn filter_is_inclusive_and_does_not_mutate() {
        let graph = WeightedBipartiteGraph::from_edges(
            2,
            [(0u32, 0u32, 1.0), (0, 1, 2.0), (1, 0, 3.0), (1, 1, 1.0)],
        )
        .unwrap();

        let filtered = graph.filter_by_maximum(2.0);
        assert_eq!(filtered.partition_size(), 2);
        assert_eq!(filtered.number_of_edges(), 3);
        assert!(filtered.edges().iter().all(|e| e.weight <= 2.0));

        // the original keeps its full edge set
        assert_eq!(graph.number_of_edges(), 4);
    }

    #[test]
    fn filter_is_idempotent() {
        let graph =
            WeightedBipartiteGraph::from_edges(3, [(0u32, 0u32, 1.0), (1, 2, 4.0), (2, 1, 2.5)])
                .unwrap();

        let once = graph.filter_by_maximum(2.5);
        let twice = once.filter_by_maximum(2.5);
        assert_eq!(once.edges(), twice.edges());
        assert_eq!(once.weights(), twice.weights());
    }

    #[test]
    fn from_edges_propagates_errors() {
        let result = WeightedBipartiteGraph::from_edges(2, [(0u32, 0u32, 1.0), (0, 2, 1.0)]);
        assert_eq!(
            result.err(),
            Some(GraphError::InvalidNodeIndex {
                node: 2,
                partition_size: 2
            })
        );
    }
}
