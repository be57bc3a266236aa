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

use crate::projection::{CurrentState, EdgeProjection, Projection, ProjectionStage};
use crate::skeleton::{FamilySubset, Skeleton};

/// Edges that can cover `subset` between already-placed images of its ends.
///
/// Yields nothing if the run is already fully covered or either end has no
/// image yet. Otherwise every pair `(begin image, end image)` whose squared
/// distance equals the run's squared length, begin-major.
pub fn subset_witnesses(
    subset: &FamilySubset<'_>,
    state: &CurrentState<'_>,
) -> Vec<EdgeProjection> {
    if state.is_covered(subset) {
        return Vec::new();
    }
    let (begin, end) = (subset.begin_node(), subset.end_node());
    if !state.is_mapped(begin) || !state.is_mapped(end) {
        return Vec::new();
    }

    let mut out = Vec::new();
    for s in state.candidates(begin) {
        for f in state.candidates(end) {
            if s.point.squared_distance(&f.point) != *subset.squared_length() {
                continue;
            }
            out.push(EdgeProjection {
                begin: (*s).clone(),
                end: (*f).clone(),
                segments: subset.insides().to_vec(),
            });
        }
    }
    out
}

/// First witness of [`subset_witnesses`], without building the rest.
pub fn try_insert_subset(
    subset: &FamilySubset<'_>,
    state: &CurrentState<'_>,
) -> Option<EdgeProjection> {
    if state.is_covered(subset) {
        return None;
    }
    let (begin, end) = (subset.begin_node(), subset.end_node());
    state.candidates(begin).iter().find_map(|s| {
        state.candidates(end).iter().find_map(|f| {
            let matches = s.point.squared_distance(&f.point) == *subset.squared_length();
            matches.then(|| EdgeProjection {
                begin: (*s).clone(),
                end: (*f).clone(),
                segments: subset.insides().to_vec(),
            })
        })
    })
}

/// All forced-edge stages, one edge each, in subset order.
///
/// The first element is what [`find_forced_edge`] returns; the rest are the
/// alternatives a backtracking caller tries next.
pub fn forced_edges(skeleton: &Skeleton, state: &CurrentState<'_>) -> Vec<ProjectionStage> {
    skeleton
        .subsets()
        .flat_map(|subset| subset_witnesses(&subset, state))
        .map(ProjectionStage::with_edge)
        .collect()
}

/// The first forced edge in subset order, as a one-edge stage.
pub fn find_forced_edge(projection: &Projection<'_>) -> Option<ProjectionStage> {
    let state = projection.current_state();
    let found = projection
        .skeleton()
        .subsets()
        .find_map(|subset| try_insert_subset(&subset, &state))
        .map(ProjectionStage::with_edge);
    if let Some(stage) = &found {
        trace!(segments = ?stage.edges[0].segments, "forced edge");
    }
    found
}
