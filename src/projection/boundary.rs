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

use crate::error::PlacementError;
use crate::geometry::Vector2;
use crate::graph::{EdgeId, EdgeOrigin, SegmentGraph};
use crate::numeric::Rational;
use crate::projection::{EdgeProjection, NodeProjection, ProjectionStage};
use crate::skeleton::{SegmentId, Skeleton};

/// Square corners, index-aligned with [`SIDE_DIRECTIONS`].
pub fn square_corners() -> [Vector2; 4] {
    [
        Vector2::new(0, 0),
        Vector2::new(0, 1),
        Vector2::new(1, 1),
        Vector2::new(1, 0),
    ]
}

/// Unit direction of each side, walked from its corner.
pub const SIDE_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Lays the four side runs of a perimeter walk along the square's boundary.
///
/// Side `i` starts at corner `i` and heads along direction `i`; each edge's
/// source node lands at the distance walked so far. Every walk edge then
/// becomes an edge projection between consecutive placed nodes, covering the
/// skeleton segment the edge stands for.
///
/// A node the walk passes more than once gets one candidate image per visit:
/// a folded boundary brings several points of the square onto the same
/// silhouette point. Fails only if an edge's segment is not in the skeleton in
/// either orientation.
pub fn place_boundary(
    graph: &SegmentGraph,
    skeleton: &Skeleton,
    sides: &[Vec<EdgeId>; 4],
) -> Result<ProjectionStage, PlacementError> {
    let corners = square_corners();
    let mut stage = ProjectionStage::new();

    for (side, run) in sides.iter().enumerate() {
        let (dx, dy) = SIDE_DIRECTIONS[side];
        let direction = Vector2::new(dx, dy);
        let mut walked = Rational::zero();
        for &e in run {
            let edge = graph.edge(e);
            stage.nodes.push(NodeProjection {
                node: edge.from,
                point: &corners[side] + &direction.scale(&walked),
            });
            walked += &edge.data.length;
        }
    }

    let count = stage.nodes.len();
    let walk = sides.iter().flatten();
    for (k, &e) in walk.enumerate() {
        let segment = covered_segment(graph, skeleton, e)?;
        stage.edges.push(EdgeProjection {
            begin: stage.nodes[k].clone(),
            end: stage.nodes[(k + 1) % count].clone(),
            segments: vec![segment],
        });
    }

    Ok(stage)
}

fn covered_segment(
    graph: &SegmentGraph,
    skeleton: &Skeleton,
    e: EdgeId,
) -> Result<SegmentId, PlacementError> {
    let data = &graph.edge(e).data;
    match data.origin {
        EdgeOrigin::Skeleton(id) => Ok(id),
        EdgeOrigin::Chord => skeleton
            .find_segment(&data.segment)
            .ok_or_else(|| PlacementError::UnknownSegment(data.segment.clone())),
    }
}
