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

//! Backtracking driver over perimeter candidates and projection stages.

use tracing::{debug, info_span, trace, warn};

use crate::config::SearchBudget;
use crate::error::{Result, SolveError};
use crate::geometry::{Segment2, Vector2};
use crate::graph::{NodeId, SegmentGraph, add_chord_edges, build_segment_graph};
use crate::io::Problem;
use crate::perimeter::{SideBreaks, Walk, perimeter_candidates, separate};
use crate::projection::{
    Projection, ProjectionStage, collect_bridges, find_forced_edge, place_boundary, squash_stages,
};
use crate::skeleton::Skeleton;

/// A complete projection together with the perimeter walk it grew from.
#[derive(Debug, Clone)]
pub struct Solution<'s> {
    pub walk: Walk,
    pub breaks: SideBreaks,
    pub projection: Projection<'s>,
}

impl Solution<'_> {
    pub fn is_complete(&self) -> bool {
        self.projection.is_complete()
    }

    pub fn projections_of(&self, node: NodeId) -> Vec<&Vector2> {
        self.projection.projections_of(node).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Solver {
    skeleton: Skeleton,
    graph: SegmentGraph,
    budget: SearchBudget,
}

impl Solver {
    pub fn new(skeleton: Skeleton, budget: SearchBudget) -> Self {
        let graph = build_segment_graph(&skeleton);
        Self {
            skeleton,
            graph,
            budget,
        }
    }

    pub fn from_problem(problem: &Problem, budget: SearchBudget) -> Result<Self> {
        Ok(Self::new(Skeleton::from_problem(problem)?, budget))
    }

    /// Adds chord edges to the boundary graph; see [`add_chord_edges`].
    pub fn add_chords(&mut self, chords: &[Segment2]) -> usize {
        add_chord_edges(&mut self.graph, chords)
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn graph(&self) -> &SegmentGraph {
        &self.graph
    }

    pub fn budget(&self) -> &SearchBudget {
        &self.budget
    }

    /// Ranked closed perimeter-4 walks from the first node that has any.
    ///
    /// Node 0 is tried first; later nodes only matter when it sits off every
    /// length-4 walk, such as an interior point with no rational segments.
    pub fn candidates(&self) -> Result<Vec<Walk>> {
        for anchor in self.graph.node_ids() {
            let walks = perimeter_candidates(&self.graph, anchor, &self.budget)?;
            if !walks.is_empty() {
                if anchor != NodeId(0) {
                    debug!(%anchor, "anchor moved off node 0");
                }
                return Ok(walks);
            }
        }
        Ok(Vec::new())
    }

    /// Separates `walk` and places it on the square's boundary.
    ///
    /// `None` when the walk cannot be cut into unit sides or its placement is
    /// rejected.
    pub fn boundary_projection(&self, walk: &Walk) -> Option<(SideBreaks, Projection<'_>)> {
        let (breaks, sides) = separate(&self.graph, walk, self.budget.max_rotations)?;
        match place_boundary(&self.graph, &self.skeleton, &sides) {
            Ok(stage) => {
                let mut projection = Projection::new(&self.skeleton);
                projection.push_stage(stage);
                Some((breaks, projection))
            }
            Err(err) => {
                debug!(%err, "boundary placement rejected");
                None
            }
        }
    }

    /// Searches for a complete projection.
    ///
    /// Candidates are tried in rank order, each with a fresh stage budget.
    /// Above each boundary stage the search is depth-first; see
    /// [`Solver::complete`].
    pub fn solve(&self) -> Result<Option<Solution<'_>>> {
        let candidates = self.candidates()?;
        debug!(candidates = candidates.len(), "perimeter candidates");

        for (rank, walk) in candidates.into_iter().enumerate() {
            if rank >= self.budget.max_candidates {
                debug!(limit = self.budget.max_candidates, "candidate budget spent");
                break;
            }
            let _span = info_span!("candidate", rank).entered();
            let Some((breaks, mut projection)) = self.boundary_projection(&walk) else {
                continue;
            };
            let mut pushes = 0;
            if self.complete(&mut projection, &mut pushes)? {
                debug!(rank, stages = projection.depth(), "solved");
                return Ok(Some(Solution {
                    walk,
                    breaks,
                    projection,
                }));
            }
        }
        Ok(None)
    }

    /// Grows `projection` until complete, backtracking over alternatives.
    ///
    /// A forced edge, when one exists, is pushed alone: sibling witnesses of
    /// the same run cover the same segments and add no image, so they cannot
    /// succeed where the first failed. Otherwise the branches are the squash
    /// stages of the lowest bridged node that has any. A dead end pops the
    /// latest stage and moves to its next sibling.
    ///
    /// Returns `false` with the projection restored to its entry state when
    /// every branch dead-ends. `pushes` counts every stage pushed.
    pub fn complete(&self, projection: &mut Projection<'_>, pushes: &mut usize) -> Result<bool> {
        if projection.is_complete() {
            return Ok(true);
        }

        let mut frames = vec![self.alternatives(projection).into_iter()];
        while let Some(frame) = frames.last_mut() {
            let Some(stage) = frame.next() else {
                frames.pop();
                if !frames.is_empty() {
                    projection.pop_stage();
                    trace!(depth = projection.depth(), "pop");
                }
                continue;
            };

            *pushes += 1;
            if *pushes > self.budget.max_stages {
                warn!(limit = self.budget.max_stages, "stage budget exhausted");
                return Err(SolveError::StageLimit {
                    limit: self.budget.max_stages,
                });
            }
            projection.push_stage(stage);
            trace!(depth = projection.depth(), "push");

            if projection.is_complete() {
                return Ok(true);
            }
            frames.push(self.alternatives(projection).into_iter());
        }
        Ok(false)
    }

    fn alternatives(&self, projection: &Projection<'_>) -> Vec<ProjectionStage> {
        if let Some(stage) = find_forced_edge(projection) {
            return vec![stage];
        }
        let state = projection.current_state();
        collect_bridges(&self.skeleton, &state)
            .iter()
            .map(|(&node, bridges)| squash_stages(&state, node, bridges))
            .find(|stages| !stages.is_empty())
            .unwrap_or_default()
    }
}
