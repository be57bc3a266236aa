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

use std::collections::VecDeque;

use crate::geometry::{Segment2, Vector2};
use crate::graph::NodeId;
use crate::numeric::Rational;
use crate::skeleton::SegmentId;

/// A maximal straight chain of skeleton segments.
///
/// `points[k]`/`nodes[k]` is the junction before `segments[k]`, so a family of
/// `L` segments has `L + 1` points, all on one line and strictly advancing.
#[derive(Debug, Clone)]
pub struct SegmentFamily {
    pub nodes: Vec<NodeId>,
    pub points: Vec<Vector2>,
    pub segments: Vec<SegmentId>,
}

impl SegmentFamily {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn subset(&self, start: usize, count: usize) -> FamilySubset<'_> {
        FamilySubset::new(self, start, count)
    }

    /// All `L(L+1)/2` contiguous sub-chains, shortest first.
    pub fn subsets(&self) -> impl Iterator<Item = FamilySubset<'_>> {
        let len = self.len();
        (1..=len).flat_map(move |count| (0..=len - count).map(move |start| self.subset(start, count)))
    }
}

/// A contiguous run `segments[start..start + count]` of a family.
#[derive(Debug, Clone)]
pub struct FamilySubset<'a> {
    pub family: &'a SegmentFamily,
    pub start: usize,
    pub count: usize,
    squared_length: Rational,
}

impl<'a> FamilySubset<'a> {
    fn new(family: &'a SegmentFamily, start: usize, count: usize) -> Self {
        let squared_length = family.points[start].squared_distance(&family.points[start + count]);
        Self {
            family,
            start,
            count,
            squared_length,
        }
    }

    pub fn begin(&self) -> &'a Vector2 {
        &self.family.points[self.start]
    }

    pub fn end(&self) -> &'a Vector2 {
        &self.family.points[self.start + self.count]
    }

    pub fn begin_node(&self) -> NodeId {
        self.family.nodes[self.start]
    }

    pub fn end_node(&self) -> NodeId {
        self.family.nodes[self.start + self.count]
    }

    /// The skeleton segments this run spans.
    pub fn insides(&self) -> &'a [SegmentId] {
        &self.family.segments[self.start..self.start + self.count]
    }

    pub fn squared_length(&self) -> &Rational {
        &self.squared_length
    }

    pub fn segment(&self) -> Segment2 {
        Segment2::new(self.begin(), self.end())
    }
}

/// Groups segments into maximal straight chains.
///
/// Seeds are taken in segment order; a chain grows at either end through the
/// lowest-numbered unused segment that continues in the same direction.
/// Every segment ends up in exactly one family.
pub fn build_families(points: &[Vector2], endpoints: &[(NodeId, NodeId)]) -> Vec<SegmentFamily> {
    let mut incident: Vec<Vec<SegmentId>> = vec![Vec::new(); points.len()];
    for (i, &(a, b)) in endpoints.iter().enumerate() {
        incident[a.0].push(SegmentId(i));
        if b != a {
            incident[b.0].push(SegmentId(i));
        }
    }

    let mut used = vec![false; endpoints.len()];
    let mut families = Vec::new();

    for seed in 0..endpoints.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;

        let (a, b) = endpoints[seed];
        let mut nodes: VecDeque<NodeId> = VecDeque::from([a, b]);
        let mut segments: VecDeque<SegmentId> = VecDeque::from([SegmentId(seed)]);

        // forward
        loop {
            let tip = nodes[nodes.len() - 1];
            let prev = nodes[nodes.len() - 2];
            let Some((seg, next)) = continuation(points, endpoints, &incident, &used, prev, tip)
            else {
                break;
            };
            used[seg.0] = true;
            nodes.push_back(next);
            segments.push_back(seg);
        }

        // backward
        loop {
            let Some((seg, next)) =
                continuation(points, endpoints, &incident, &used, nodes[1], nodes[0])
            else {
                break;
            };
            used[seg.0] = true;
            nodes.push_front(next);
            segments.push_front(seg);
        }

        let nodes: Vec<NodeId> = nodes.into_iter().collect();
        families.push(SegmentFamily {
            points: nodes.iter().map(|n| points[n.0].clone()).collect(),
            nodes,
            segments: segments.into_iter().collect(),
        });
    }

    families
}

/// Unused segment leaving `tip` straight on along `prev -> tip`, with the
/// node at its far end.
fn continuation(
    points: &[Vector2],
    endpoints: &[(NodeId, NodeId)],
    incident: &[Vec<SegmentId>],
    used: &[bool],
    prev: NodeId,
    tip: NodeId,
) -> Option<(SegmentId, NodeId)> {
    let line = Segment2::new(&points[prev.0], &points[tip.0]);
    let dir = line.to_vector();
    incident[tip.0].iter().find_map(|&seg| {
        if used[seg.0] {
            return None;
        }
        let (a, b) = endpoints[seg.0];
        let far = if a == tip { b } else { a };
        let step = &points[far.0] - &points[tip.0];
        (line.is_collinear_with(&points[far.0]) && dir.dot(&step).is_positive()).then_some((seg, far))
    })
}
