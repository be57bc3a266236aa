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

use crate::geometry::Vector2;
use crate::graph::NodeId;
use crate::skeleton::{FamilySubset, SegmentId, Skeleton};

/// One candidate image of an original node inside the unit square.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeProjection {
    pub node: NodeId,
    pub point: Vector2,
}

/// A straight edge of the unfolded square standing for one or more skeleton
/// segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeProjection {
    pub begin: NodeProjection,
    pub end: NodeProjection,
    pub segments: Vec<SegmentId>,
}

/// Atomic unit of progress: node images and edge coverings fixed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionStage {
    pub nodes: Vec<NodeProjection>,
    pub edges: Vec<EdgeProjection>,
}

impl ProjectionStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge(edge: EdgeProjection) -> Self {
        Self {
            nodes: Vec::new(),
            edges: vec![edge],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// A stack of stages over a skeleton.
///
/// The live projection is the union of all stages on the stack. Stages are
/// never edited after being pushed; popping removes exactly what the stage
/// added because every query rescans the stack.
#[derive(Debug, Clone)]
pub struct Projection<'s> {
    skeleton: &'s Skeleton,
    stages: Vec<ProjectionStage>,
}

impl<'s> Projection<'s> {
    pub fn new(skeleton: &'s Skeleton) -> Self {
        Self {
            skeleton,
            stages: Vec::new(),
        }
    }

    pub fn skeleton(&self) -> &'s Skeleton {
        self.skeleton
    }

    pub fn push_stage(&mut self, stage: ProjectionStage) {
        self.stages.push(stage);
    }

    pub fn pop_stage(&mut self) -> Option<ProjectionStage> {
        self.stages.pop()
    }

    /// Active stages, bottom first.
    pub fn stages(&self) -> &[ProjectionStage] {
        &self.stages
    }

    pub fn depth(&self) -> usize {
        self.stages.len()
    }

    pub fn node_projections(&self) -> impl Iterator<Item = &NodeProjection> {
        self.stages.iter().flat_map(|s| s.nodes.iter())
    }

    pub fn edge_projections(&self) -> impl Iterator<Item = &EdgeProjection> {
        self.stages.iter().flat_map(|s| s.edges.iter())
    }

    /// Candidate images of every node, indexed by node.
    pub fn node_function(&self) -> Vec<Vec<&NodeProjection>> {
        let mut map = vec![Vec::new(); self.skeleton.node_count()];
        for p in self.node_projections() {
            map[p.node.0].push(p);
        }
        map
    }

    /// Edges covering every skeleton segment, indexed by segment.
    pub fn edge_function(&self) -> Vec<Vec<&EdgeProjection>> {
        let mut map = vec![Vec::new(); self.skeleton.segment_count()];
        for e in self.edge_projections() {
            for s in &e.segments {
                map[s.0].push(e);
            }
        }
        map
    }

    pub fn current_state(&self) -> CurrentState<'_> {
        CurrentState {
            nodes: self.node_function(),
            segments: self.edge_function(),
        }
    }

    /// Candidate images of one node, bottom stage first.
    pub fn projections_of(&self, node: NodeId) -> impl Iterator<Item = &Vector2> {
        self.node_projections()
            .filter(move |p| p.node == node)
            .map(|p| &p.point)
    }

    /// Every node has an image and every segment is covered.
    pub fn is_complete(&self) -> bool {
        self.current_state().is_complete()
    }
}

/// Snapshot of the aggregate projection, as seen by the discovery passes.
#[derive(Debug, Clone)]
pub struct CurrentState<'p> {
    pub nodes: Vec<Vec<&'p NodeProjection>>,
    pub segments: Vec<Vec<&'p EdgeProjection>>,
}

impl<'p> CurrentState<'p> {
    pub fn candidates(&self, node: NodeId) -> &[&'p NodeProjection] {
        &self.nodes[node.0]
    }

    pub fn is_mapped(&self, node: NodeId) -> bool {
        !self.nodes[node.0].is_empty()
    }

    pub fn is_segment_covered(&self, segment: SegmentId) -> bool {
        !self.segments[segment.0].is_empty()
    }

    /// Every segment of the run already has a covering edge.
    pub fn is_covered(&self, subset: &FamilySubset<'_>) -> bool {
        subset.insides().iter().all(|&s| self.is_segment_covered(s))
    }

    pub fn mapped_nodes(&self) -> usize {
        self.nodes.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn covered_segments(&self) -> usize {
        self.segments.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.nodes.iter().all(|c| !c.is_empty()) && self.segments.iter().all(|c| !c.is_empty())
    }
}
