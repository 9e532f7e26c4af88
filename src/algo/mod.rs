/*!
# Graph Algorithms

This module provides the **algorithms** built on top of the graph representation in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wbgraphs::algo::*;
```
and gain access to max-flow, matching, and threshold-search routines.
*/

mod flow;
mod matching;
mod threshold;

use crate::prelude::*;

pub use flow::*;
pub use matching::*;
pub use threshold::*;
