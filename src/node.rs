/*!
# Node Representation

We choose `Node = u32` as the partitions we deal with involve far less than `2^32` nodes per side.
This allows us to (1) save space by not using `usize` or `u64` and (2) allows directly manipulating
node values without abstracting over them.

Node indices are **partition-local**: an edge's source indexes the left side, its destination the
right side, and both ranges start at `0`.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes per partition!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
