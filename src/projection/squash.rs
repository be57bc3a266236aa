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

use std::collections::BTreeMap;

use tracing::trace;

use crate::graph::NodeId;
use crate::kernel::triangulate_in_unit_square;
use crate::projection::counting::MixedRadix;
use crate::projection::{CurrentState, EdgeProjection, NodeProjection, Projection, ProjectionStage};
use crate::skeleton::{FamilySubset, Skeleton};

/// A family run with exactly one end already placed.
#[derive(Debug, Clone)]
pub struct Bridge<'a> {
    pub subset: FamilySubset<'a>,
    pub projected: NodeId,
    pub unprojected: NodeId,
}

/// Unplaced nodes reachable through at least two bridges, by node index.
pub fn collect_bridges<'a>(
    skeleton: &'a Skeleton,
    state: &CurrentState<'_>,
) -> BTreeMap<NodeId, Vec<Bridge<'a>>> {
    let mut store: BTreeMap<NodeId, Vec<Bridge<'a>>> = BTreeMap::new();
    for subset in skeleton.subsets() {
        let (begin, end) = (subset.begin_node(), subset.end_node());
        let (projected, unprojected) = match (state.is_mapped(begin), state.is_mapped(end)) {
            (true, false) => (begin, end),
            (false, true) => (end, begin),
            _ => continue,
        };
        store.entry(unprojected).or_default().push(Bridge {
            subset,
            projected,
            unprojected,
        });
    }
    store.retain(|_, bridges| bridges.len() >= 2);
    store
}

/// Every placement of `node` consistent with two of its bridges.
///
/// Walks all combinations of candidate images of the bridges' placed ends.
/// For each, the first two bridges anchored at different nodes pin the point
/// by circle intersection; surviving points must lie in the unit square and
/// match both distances exactly. Every bridge whose distance also matches
/// contributes a covering edge. Duplicate stages are dropped.
pub fn squash_stages(
    state: &CurrentState<'_>,
    node: NodeId,
    bridges: &[Bridge<'_>],
) -> Vec<ProjectionStage> {
    let Some((i, j)) = anchor_pair(bridges) else {
        return Vec::new();
    };

    let sizes = bridges
        .iter()
        .map(|b| state.candidates(b.projected).len())
        .collect();

    let mut stages: Vec<ProjectionStage> = Vec::new();
    for combo in MixedRadix::new(sizes) {
        let chosen: Vec<&NodeProjection> = bridges
            .iter()
            .zip(&combo)
            .map(|(b, &k)| state.candidates(b.projected)[k])
            .collect();

        let points = triangulate_in_unit_square(
            &chosen[i].point,
            bridges[i].subset.squared_length(),
            &chosen[j].point,
            bridges[j].subset.squared_length(),
        );

        for point in points {
            let image = NodeProjection { node, point };
            let edges = bridges
                .iter()
                .zip(&chosen)
                .filter(|(b, c)| {
                    image.point.squared_distance(&c.point) == *b.subset.squared_length()
                })
                .map(|(b, c)| EdgeProjection {
                    begin: image.clone(),
                    end: (*c).clone(),
                    segments: b.subset.insides().to_vec(),
                })
                .collect();
            let stage = ProjectionStage {
                nodes: vec![image],
                edges,
            };
            if !stages.contains(&stage) {
                stages.push(stage);
            }
        }
    }

    trace!(node = %node, bridges = bridges.len(), stages = stages.len(), "squash candidates");
    stages
}

/// Squash-point stages for every bridged node, lowest node index first.
pub fn find_squash_points(projection: &Projection<'_>) -> Vec<ProjectionStage> {
    let state = projection.current_state();
    collect_bridges(projection.skeleton(), &state)
        .iter()
        .flat_map(|(&node, bridges)| squash_stages(&state, node, bridges))
        .collect()
}

fn anchor_pair(bridges: &[Bridge<'_>]) -> Option<(usize, usize)> {
    (0..bridges.len()).find_map(|i| {
        (i + 1..bridges.len())
            .find(|&j| bridges[j].projected != bridges[i].projected)
            .map(|j| (i, j))
    })
}
