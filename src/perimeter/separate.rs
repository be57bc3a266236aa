// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use tracing::trace;

use crate::graph::{EdgeId, SegmentGraph};
use crate::numeric::Rational;
use crate::perimeter::Walk;

/// Offsets into a closed walk where the four unit sides begin.
///
/// Offsets are absolute positions in the walk repeated twice: the first lies
/// in `[0, n)` and the rest increase strictly below `first + n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideBreaks(pub [usize; 4]);

impl SideBreaks {
    pub fn rotation(&self) -> usize {
        self.0[0]
    }
}

/// Finds four break points splitting a closed length-4 walk into runs of
/// length exactly 1.
///
/// Tries rotation offsets `0, 1, ...` (at most `max_rotations`) and from each
/// hops three times to the nearest offset exactly one unit further on; the
/// fourth side is whatever closes back to the rotation start. Returns the
/// first rotation that works, or `None` if the walk cannot be cut into four
/// unit sides.
pub fn find_side_breaks(
    graph: &SegmentGraph,
    walk: &Walk,
    max_rotations: usize,
) -> Option<SideBreaks> {
    let n = walk.len();
    if n < 4 || walk.length != 4 {
        return None;
    }

    // prefix[k]: length of the first k edges of the walk traversed twice
    let mut prefix = Vec::with_capacity(2 * n + 1);
    prefix.push(Rational::zero());
    for k in 0..2 * n {
        let next = &prefix[k] + &graph.edge(walk.edges[k % n]).data.length;
        prefix.push(next);
    }

    let unit = Rational::one();
    'rotation: for start in 0..n.min(max_rotations) {
        let mut breaks = [start; 4];
        let mut current = start;
        for side in 1..4 {
            let hop = (current + 1..start + n).find(|&j| &prefix[j] - &prefix[current] == unit);
            let Some(next) = hop else {
                trace!(start, side, "rotation rejected");
                continue 'rotation;
            };
            breaks[side] = next;
            current = next;
        }
        return Some(SideBreaks(breaks));
    }
    None
}

/// Cuts the walk at `breaks` into four runs of edges, in walk order.
pub fn split_into_sides(walk: &Walk, breaks: &SideBreaks) -> [Vec<EdgeId>; 4] {
    let n = walk.len();
    let b = breaks.0;
    let ends = [b[1], b[2], b[3], b[0] + n];
    std::array::from_fn(|side| (b[side]..ends[side]).map(|k| walk.edges[k % n]).collect())
}

/// Separation followed by splitting.
pub fn separate(
    graph: &SegmentGraph,
    walk: &Walk,
    max_rotations: usize,
) -> Option<(SideBreaks, [Vec<EdgeId>; 4])> {
    let breaks = find_side_breaks(graph, walk, max_rotations)?;
    let sides = split_into_sides(walk, &breaks);
    Some((breaks, sides))
}
