/*!
# Errors

All fallible operations of this crate fail at **graph construction time**: once a
[`WeightedBipartiteGraph`](crate::graph::WeightedBipartiteGraph) is built, every query on it is
infallible. In particular, "no perfect matching exists" is an expected outcome of a search and is
reported via `Option`/return values, never as an error.
*/

use thiserror::Error;

use crate::{
    edge::Weight,
    node::{Node, NumNodes},
};

/// Errors raised when building a weighted bipartite graph
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GraphError {
    /// An endpoint index does not fit the partition size
    #[error("node index {node} is out of range for partitions of size {partition_size}")]
    InvalidNodeIndex {
        /// The offending partition-local index
        node: Node,
        /// Size of both partitions
        partition_size: NumNodes,
    },

    /// An edge weight is NaN, infinite, or negative
    #[error("edge weight {weight} is not a finite non-negative value")]
    InvalidWeight {
        /// The offending weight
        weight: Weight,
    },
}

/// Result type of all fallible operations in this crate
pub type Result<T> = std::result::Result<T, GraphError>;
