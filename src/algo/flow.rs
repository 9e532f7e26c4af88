/*!
# Maximum Flow

This module provides a general-purpose **max-flow solver** for directed, integer-capacity networks
with a distinguished source and sink (Edmonds–Karp style).

## Core concepts
- The network stores **residual arcs**: every added edge contributes a forward arc carrying its
  capacity and a twin reverse arc of capacity zero. Pushing flow moves capacity between twins.
- An **augmenting path** is a source-sink path over arcs with positive residual capacity. BFS finds
  a shortest one, which yields the Edmonds–Karp polynomial bound.

## Implementations
- [`FlowNetwork`] is the residual network itself, a twin-arc arena with per-node arc lists.
- [`EdmondsKarp`] runs the augmentations. It is an iterator: each step performs one BFS and either
  pushes the bottleneck capacity along the discovered path (yielding the pushed amount) or ends the
  iteration. Exhausting it computes the maximum flow.

The bipartite reduction in [`matching`](super::matching) only ever uses unit capacities, but the
solver makes no such assumption.
*/

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::*;

/// Flow amounts and arc capacities
pub type Capacity = u64;

/// Index into the arc arena of a [`FlowNetwork`]
pub type ArcIndex = NumEdges;

/// Sentinel for "no predecessor arc" in BFS parent arrays
const NO_ARC: ArcIndex = ArcIndex::MAX;

/// A single residual arc. The twin of arc `i` is arc `i ^ 1`.
#[derive(Debug, Clone, Copy)]
struct Arc {
    to: Node,
    residual: Capacity,
}

/// A directed capacitated network storing residual arcs in twin pairs.
///
/// Per-node outgoing arc lists use inline small vectors since most nodes of the networks we build
/// have small degree.
#[derive(Clone)]
pub struct FlowNetwork {
    out_arcs: Vec<SmallVec<[ArcIndex; 4]>>,
    arcs: Vec<Arc>,
}

impl FlowNetwork {
    /// Creates a network with `n` nodes and no arcs
    pub fn new(n: NumNodes) -> Self {
        Self {
            out_arcs: vec![SmallVec::new(); n as usize],
            arcs: Vec::new(),
        }
    }

    /// Returns the number of nodes of the network
    pub fn number_of_nodes(&self) -> NumNodes {
        self.out_arcs.len() as NumNodes
    }

    /// Returns the number of residual arcs, i.e. twice the number of added edges
    pub fn number_of_arcs(&self) -> NumEdges {
        self.arcs.len() as NumEdges
    }

    /// Adds the directed edge `(from, to)` with the given capacity and returns the index of its
    /// forward arc. Parallel edges are allowed and kept as independent arc pairs.
    /// ** Panics if `from >= n || to >= n` **
    pub fn add_edge(&mut self, from: Node, to: Node, capacity: Capacity) -> ArcIndex {
        assert!(from < self.number_of_nodes() && to < self.number_of_nodes());

        let idx = self.arcs.len() as ArcIndex;
        self.arcs.push(Arc { to, residual: capacity });
        self.arcs.push(Arc {
            to: from,
            residual: 0,
        });
        self.out_arcs[from as usize].push(idx);
        self.out_arcs[to as usize].push(idx + 1);
        idx
    }

    /// Returns the remaining capacity of the given arc. For a forward arc this is
    /// `capacity - flow`, so a saturated unit arc reports `0`.
    /// ** Panics if `arc` is out of range **
    pub fn residual(&self, arc: ArcIndex) -> Capacity {
        self.arcs[arc as usize].residual
    }
}

/// Implementation of the Edmonds–Karp algorithm on a [`FlowNetwork`].
///
/// Internally reuses a predecessor-arc array across BFS rounds. The solver owns the network;
/// [`EdmondsKarp::take`] hands it back with the residual state of the computed flow, which callers
/// can inspect to recover the flow assignment (e.g. the matched pairs of a bipartite reduction).
pub struct EdmondsKarp {
    network: FlowNetwork,
    source: Node,
    sink: Node,
    predecessor_arc: Vec<ArcIndex>,
}

impl EdmondsKarp {
    /// Creates a new solver for the given network.
    /// ** Panics if `source == sink` or either index is out of range **
    pub fn new(network: FlowNetwork, source: Node, sink: Node) -> Self {
        assert!(source < network.number_of_nodes() && sink < network.number_of_nodes());
        assert_ne!(source, sink);

        let n = network.number_of_nodes() as usize;
        Self {
            network,
            source,
            sink,
            predecessor_arc: vec![NO_ARC; n],
        }
    }

    /// Performs BFS over positive-residual arcs to find an augmenting path.
    /// Updates the predecessor-arc array and returns whether the sink was reached.
    fn bfs(&mut self) -> bool {
        let mut visited = NodeBitSet::new(self.network.number_of_nodes());
        let mut queue = VecDeque::new();

        visited.set_bit(self.source);
        queue.push_back(self.source);

        while let Some(u) = queue.pop_front() {
            for &a in &self.network.out_arcs[u as usize] {
                let arc = self.network.arcs[a as usize];
                if arc.residual == 0 || visited.get_bit(arc.to) {
                    continue;
                }

                visited.set_bit(arc.to);
                self.predecessor_arc[arc.to as usize] = a;

                if arc.to == self.sink {
                    return true;
                }
                queue.push_back(arc.to);
            }
        }

        false
    }

    /// Exhausts all augmentations and returns the total flow from source to sink
    pub fn max_flow(&mut self) -> Capacity {
        self.sum()
    }

    /// Consumes the solver and returns the network including its residual state
    pub fn take(self) -> FlowNetwork {
        self.network
    }

    /// Walks the predecessor arcs from the sink back to the source, applying `apply` to every arc
    /// index on the path
    fn for_each_path_arc(&mut self, mut apply: impl FnMut(&mut FlowNetwork, ArcIndex)) {
        let mut v = self.sink;
        while v != self.source {
            let a = self.predecessor_arc[v as usize];
            // the twin arc points back to the tail of `a`
            v = self.network.arcs[(a ^ 1) as usize].to;
            apply(&mut self.network, a);
        }
    }
}

impl Iterator for EdmondsKarp {
    type Item = Capacity;

    /// Performs one augmentation: finds a shortest augmenting path and pushes its bottleneck
    /// capacity, returning the pushed amount. Returns `None` once no augmenting path exists.
    fn next(&mut self) -> Option<Self::Item> {
        if !self.bfs() {
            return None;
        }

        let mut bottleneck = Capacity::MAX;
        self.for_each_path_arc(|network, a| {
            bottleneck = bottleneck.min(network.arcs[a as usize].residual);
        });

        self.for_each_path_arc(|network, a| {
            network.arcs[a as usize].residual -= bottleneck;
            network.arcs[(a ^ 1) as usize].residual += bottleneck;
        });

        Some(bottleneck)
    }
}
