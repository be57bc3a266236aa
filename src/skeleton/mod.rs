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

pub mod family;

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, SolveError};
use crate::geometry::{Segment2, Vector2};
use crate::graph::NodeId;
use crate::io::Problem;

pub use family::{FamilySubset, SegmentFamily, build_families};

/// Index of a segment in the skeleton's ordered segment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId(pub usize);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// The ground truth a projection has to cover: every distinct segment
/// endpoint (as a node) and every skeleton segment, in input order.
///
/// Point `i` here is node `i` of the boundary graph built from it.
#[derive(Debug, Clone)]
pub struct Skeleton {
    points: Vec<Vector2>,
    segments: Vec<Segment2>,
    endpoints: Vec<(NodeId, NodeId)>,
    point_index: HashMap<Vector2, NodeId>,
    segment_index: HashMap<Segment2, SegmentId>,
    families: Vec<SegmentFamily>,
}

impl Skeleton {
    pub fn new(segments: Vec<Segment2>) -> Result<Self> {
        if segments.is_empty() {
            return Err(SolveError::EmptySkeleton);
        }

        let mut points = Vec::new();
        let mut point_index = HashMap::new();
        let mut endpoints = Vec::with_capacity(segments.len());
        let mut segment_index = HashMap::new();

        for (i, seg) in segments.iter().enumerate() {
            let a = intern(&mut points, &mut point_index, &seg.start);
            let b = intern(&mut points, &mut point_index, &seg.end);
            endpoints.push((a, b));
            segment_index.entry(seg.clone()).or_insert(SegmentId(i));
            segment_index.entry(seg.reversed()).or_insert(SegmentId(i));
        }

        let families = build_families(&points, &endpoints);

        Ok(Self {
            points,
            segments,
            endpoints,
            point_index,
            segment_index,
            families,
        })
    }

    pub fn from_problem(problem: &Problem) -> Result<Self> {
        Self::new(problem.segments.clone())
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    pub fn point(&self, id: NodeId) -> &Vector2 {
        &self.points[id.0]
    }

    pub fn node_count(&self) -> usize {
        self.points.len()
    }

    pub fn node_at(&self, location: &Vector2) -> Option<NodeId> {
        self.point_index.get(location).copied()
    }

    pub fn segments(&self) -> &[Segment2] {
        &self.segments
    }

    pub fn segment(&self, id: SegmentId) -> &Segment2 {
        &self.segments[id.0]
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segments_with_ids(&self) -> impl Iterator<Item = (SegmentId, &Segment2)> {
        self.segments.iter().enumerate().map(|(i, s)| (SegmentId(i), s))
    }

    /// Nodes at the segment's start and end.
    pub fn endpoints(&self, id: SegmentId) -> (NodeId, NodeId) {
        self.endpoints[id.0]
    }

    /// First skeleton segment with these endpoints, in either orientation.
    pub fn find_segment(&self, segment: &Segment2) -> Option<SegmentId> {
        self.segment_index.get(segment).copied()
    }

    pub fn families(&self) -> &[SegmentFamily] {
        &self.families
    }

    /// Every contiguous sub-chain of every family: family by family, shorter
    /// chains first, then by starting offset.
    pub fn subsets(&self) -> impl Iterator<Item = FamilySubset<'_>> {
        self.families.iter().flat_map(|family| family.subsets())
    }
}

fn intern(
    points: &mut Vec<Vector2>,
    index: &mut HashMap<Vector2, NodeId>,
    p: &Vector2,
) -> NodeId {
    if let Some(id) = index.get(p) {
        return *id;
    }
    let id = NodeId(points.len());
    points.push(p.clone());
    index.insert(p.clone(), id);
    id
}
