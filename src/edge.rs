use std::fmt::{Debug, Display};

use crate::node::Node;

/// Edge weights are arbitrary finite, non-negative reals.
/// [`WeightedBipartiteGraph::add_edge`](crate::graph::WeightedBipartiteGraph::add_edge)
/// rejects everything else, so all weights held by a graph are totally ordered.
pub type Weight = f64;

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

/// An edge of the bipartition: `source` indexes the left side, `destination` the right side.
/// Equality is by full value, so two edges between the same endpoint pair with different
/// weights are distinct.
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge {
    /// Index into the left partition
    pub source: Node,
    /// Index into the right partition
    pub destination: Node,
    /// Weight of the edge
    pub weight: Weight,
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.source, self.destination, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    /// Creates a new edge from the given endpoints and weight
    pub fn new(source: Node, destination: Node, weight: Weight) -> Self {
        WeightedEdge {
            source,
            destination,
            weight,
        }
    }

    /// Returns true if the edge survives a filter at `max_weight` (inclusive)
    pub fn is_at_most(&self, max_weight: Weight) -> bool {
        self.weight <= max_weight
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_boundary_is_inclusive() {
        let edge = WeightedEdge::new(0, 1, 2.5);
        assert!(edge.is_at_most(2.5));
        assert!(edge.is_at_most(3.0));
        assert!(!edge.is_at_most(2.0));
    }

    #[test]
    fn equality_is_by_full_value() {
        let a = WeightedEdge::new(0, 1, 2.0);
        let b = WeightedEdge::new(0, 1, 3.0);
        assert_ne!(a, b);
        assert_eq!(a, WeightedEdge::from((0, 1, 2.0)));
    }
}
