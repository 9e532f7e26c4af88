/*!
# Bottleneck Threshold Search

Finds the **bottleneck-matching threshold** of a weighted bipartite graph: the smallest weight τ
such that the subgraph of edges with weight `<= τ` still admits a perfect matching.

## Algorithm

The predicate "the graph restricted to weights `<= τ` has a perfect matching" is **monotone**
non-decreasing in τ, since raising the threshold only adds edges. This makes binary search over the
sorted distinct edge weights valid:

1. If even the unrestricted graph has no perfect matching, no threshold exists.
2. If the smallest weight already admits one, it is the answer.
3. Otherwise bisect between a known-invalid lower and a known-valid upper candidate index until
   they are adjacent.

Instead of materializing a filtered graph per probe, the search sorts a copy of the edge list by
weight once; every probe then operates on a prefix slice of it.
*/

use itertools::Itertools;

use super::*;

/// A trait providing the bottleneck-threshold search on weighted bipartite graphs.
pub trait BottleneckThreshold {
    /// Computes the smallest weight τ such that restricting the graph to edges of weight `<= τ`
    /// leaves a perfect matching. Returns `None` if no perfect matching exists at any threshold.
    ///
    /// Empty partitions admit a vacuous perfect matching without using any edge; the threshold is
    /// defined as `0.0` in that case.
    fn bottleneck_threshold(&self) -> Option<Weight>;
}

impl BottleneckThreshold for WeightedBipartiteGraph {
    fn bottleneck_threshold(&self) -> Option<Weight> {
        let p = self.partition_size();
        if p == 0 {
            return Some(0.0);
        }

        // one ascending sort up front; every probe below is a prefix slice
        let mut by_weight = self.edges().to_vec();
        by_weight.sort_unstable_by(|a, b| a.weight.total_cmp(&b.weight));

        // filtering only removes edges, so nothing can help if the full edge set fails
        if maximum_matching_size(p, &by_weight) < p {
            return None;
        }

        // duplicate weights collapse to a single candidate value
        let candidates = self
            .weights()
            .iter()
            .copied()
            .sorted_unstable_by(Weight::total_cmp)
            .dedup()
            .collect_vec();

        let admits = |max_weight: Weight| {
            let prefix = by_weight.partition_point(|e| e.is_at_most(max_weight));
            maximum_matching_size(p, &by_weight[..prefix]) == p
        };

        if admits(candidates[0]) {
            return Some(candidates[0]);
        }

        // candidates[invalid] admits no perfect matching, candidates[valid] does
        let mut invalid = 0;
        let mut valid = candidates.len() - 1;
        while valid - invalid > 1 {
            let mid = invalid + (valid - invalid) / 2;
            if admits(candidates[mid]) {
                valid = mid;
            } else {
                invalid = mid;
            }
        }

        Some(candidates[valid])
    }
}
