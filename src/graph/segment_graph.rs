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

use tracing::debug;

use crate::geometry::{Segment2, Vector2};
use crate::graph::{Graph, NodeId};
use crate::numeric::Rational;
use crate::skeleton::{SegmentId, Skeleton};

/// Node payload of the boundary graph: the original silhouette location.
#[derive(Debug, Clone)]
pub struct NodeInfo {
    pub location: Vector2,
}

/// Where a boundary-graph edge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOrigin {
    /// One orientation of a skeleton segment.
    Skeleton(SegmentId),
    /// Added afterwards by [`add_chord_edges`].
    Chord,
}

/// Edge payload: the oriented segment and its exact (rational) length.
#[derive(Debug, Clone)]
pub struct EdgeInfo {
    pub segment: Segment2,
    pub length: Rational,
    pub origin: EdgeOrigin,
}

pub type SegmentGraph = Graph<NodeInfo, EdgeInfo>;

/// Builds the boundary graph of a skeleton.
///
/// Every skeleton point becomes a node (same index as in the skeleton).
/// Segments whose squared length is a non-zero perfect square become two
/// directed edges, one per orientation; the rest are left out of the graph but
/// stay in the skeleton as coverage targets.
pub fn build_segment_graph(skeleton: &Skeleton) -> SegmentGraph {
    let mut graph = SegmentGraph::new();
    for p in skeleton.points() {
        graph.add_node(NodeInfo {
            location: p.clone(),
        });
    }

    let mut skipped = 0usize;
    for (id, seg) in skeleton.segments_with_ids() {
        let Some(length) = seg.exact_length().filter(|l| l.is_positive()) else {
            skipped += 1;
            continue;
        };
        let (a, b) = skeleton.endpoints(id);
        graph.connect(
            a,
            b,
            EdgeInfo {
                segment: seg.clone(),
                length: length.clone(),
                origin: EdgeOrigin::Skeleton(id),
            },
        );
        graph.connect(
            b,
            a,
            EdgeInfo {
                segment: seg.reversed(),
                length,
                origin: EdgeOrigin::Skeleton(id),
            },
        );
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped,
        "built segment graph"
    );
    graph
}

/// Connects already-known points by auxiliary chord segments.
///
/// Chords whose endpoints are not both graph nodes, or whose length is
/// irrational, are skipped. Returns the number of chords added; each one adds
/// an edge in both directions.
pub fn add_chord_edges(graph: &mut SegmentGraph, chords: &[Segment2]) -> usize {
    let mut added = 0;
    for chord in chords {
        let (Some(a), Some(b)) = (
            find_node(graph, &chord.start),
            find_node(graph, &chord.end),
        ) else {
            continue;
        };
        let Some(length) = chord.exact_length().filter(|l| l.is_positive()) else {
            continue;
        };
        graph.connect(
            a,
            b,
            EdgeInfo {
                segment: chord.clone(),
                length: length.clone(),
                origin: EdgeOrigin::Chord,
            },
        );
        graph.connect(
            b,
            a,
            EdgeInfo {
                segment: chord.reversed(),
                length,
                origin: EdgeOrigin::Chord,
            },
        );
        added += 1;
    }
    debug!(added, offered = chords.len(), "chord edges");
    added
}

fn find_node(graph: &SegmentGraph, location: &Vector2) -> Option<NodeId> {
    graph
        .nodes()
        .find(|(_, n)| n.data.location == *location)
        .map(|(id, _)| id)
}
