/*!
`wbgraphs` is a library for **w**eighted **b**ipartite graphs centered on one question: what is
the smallest weight τ such that keeping only the edges of weight `<= τ` still admits a **perfect
matching**? This value is the *bottleneck matching threshold* of the graph.

# Representation

Both partitions of a graph have the same, fixed number of nodes. We represent nodes as `u32`
indices that are **local to their side**: an edge `(u, v, w)` connects left node `u` with right
node `v` at weight `w`. Edges form a multiset, so inserting the same `(u, v, w)` twice keeps both
copies.

# Design

The crate is built bottom-up from three layers:
- [`algo::FlowNetwork`] / [`algo::EdmondsKarp`] — a general-purpose max-flow solver over residual
  capacities, driven by BFS augmenting paths,
- [`algo::Matching`] — maximum-cardinality bipartite matching via the classic unit-capacity flow
  reduction,
- [`algo::BottleneckThreshold`] — a monotone binary search over the sorted distinct edge weights,
  using the matcher as its oracle.

Algorithms are provided as traits implemented on the graph itself, so they are usable without any
configuration step.

# Usage

```rust
use wbgraphs::{algo::*, prelude::*};

let mut g = WeightedBipartiteGraph::new(2);
g.add_edge(0, 0, 1.0).unwrap();
g.add_edge(0, 1, 2.0).unwrap();
g.add_edge(1, 0, 3.0).unwrap();
g.add_edge(1, 1, 1.0).unwrap();

assert!(g.has_perfect_matching());
assert_eq!(g.bottleneck_threshold(), Some(1.0));
```

In most use-cases, `use wbgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod errors;
pub mod graph;
pub mod node;

/// `wbgraphs::prelude` includes definitions for nodes, edges, errors, and the graph representation.
pub mod prelude {
    pub use super::{edge::*, errors::*, graph::*, node::*};
}
