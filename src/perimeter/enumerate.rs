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

use std::collections::HashSet;

use num_traits::ToPrimitive;
use tracing::{debug, trace};

use crate::config::SearchBudget;
use crate::error::{Result, SolveError};
use crate::graph::{EdgeId, NodeId, SegmentGraph};
use crate::numeric::Rational;

/// A walk in the segment graph with its exact total length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    pub edges: Vec<EdgeId>,
    pub length: Rational,
}

impl Walk {
    pub fn single(graph: &SegmentGraph, edge: EdgeId) -> Self {
        Self {
            edges: vec![edge],
            length: graph.edge(edge).data.length.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn first_edge(&self) -> Option<EdgeId> {
        self.edges.first().copied()
    }

    pub fn last_edge(&self) -> Option<EdgeId> {
        self.edges.last().copied()
    }

    /// Node the walk currently ends at.
    pub fn tip(&self, graph: &SegmentGraph) -> Option<NodeId> {
        self.last_edge().map(|e| graph.edge(e).to)
    }

    pub fn extended(&self, graph: &SegmentGraph, edge: EdgeId) -> Self {
        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.extend_from_slice(&self.edges);
        edges.push(edge);
        Self {
            edges,
            length: &self.length + &graph.edge(edge).data.length,
        }
    }

    /// First edge's source equals last edge's destination.
    pub fn is_closed(&self, graph: &SegmentGraph) -> bool {
        match (self.first_edge(), self.last_edge()) {
            (Some(first), Some(last)) => graph.edge(first).from == graph.edge(last).to,
            _ => false,
        }
    }

    /// Start node followed by the destination of every edge.
    pub fn node_sequence(&self, graph: &SegmentGraph) -> Vec<NodeId> {
        let Some(first) = self.first_edge() else {
            return Vec::new();
        };
        std::iter::once(graph.edge(first).from)
            .chain(self.edges.iter().map(|&e| graph.edge(e).to))
            .collect()
    }

    /// Number of distinct nodes touched.
    pub fn distinct_vertices(&self, graph: &SegmentGraph) -> usize {
        self.edges
            .iter()
            .flat_map(|&e| {
                let edge = graph.edge(e);
                [edge.from, edge.to]
            })
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Every walk from `anchor` whose exact length is 4.
///
/// Walks grow one edge per round; those still shorter than 4 stay in the
/// frontier, those at exactly 4 are collected, longer ones are dropped. Edge
/// lengths are positive, so the frontier empties after finitely many rounds.
pub fn enumerate_perimeter_walks(
    graph: &SegmentGraph,
    anchor: NodeId,
    budget: &SearchBudget,
) -> Result<Vec<Walk>> {
    let perimeter = Rational::from(4);
    let mut found = Vec::new();
    let mut frontier: Vec<Walk> = Vec::new();

    let mut admit = |walk: Walk, next: &mut Vec<Walk>| {
        if walk.length == perimeter {
            found.push(walk);
        } else if walk.length < perimeter {
            next.push(walk);
        }
    };

    for edge in graph.outgoing(anchor) {
        admit(Walk::single(graph, edge), &mut frontier);
    }

    let mut round = 1usize;
    while !frontier.is_empty() {
        if frontier.len() > budget.max_frontier {
            debug!(round, size = frontier.len(), "perimeter frontier over budget");
            return Err(SolveError::FrontierLimit {
                limit: budget.max_frontier,
            });
        }
        trace!(
            round,
            size = frontier.len(),
            avg_length = average_length(&frontier),
            "perimeter frontier"
        );

        let mut next = Vec::new();
        for walk in &frontier {
            let Some(tip) = walk.tip(graph) else {
                continue;
            };
            for edge in graph.outgoing(tip) {
                admit(walk.extended(graph, edge), &mut next);
            }
        }
        frontier = next;
        round += 1;
    }

    debug!(anchor = %anchor, rounds = round, walks = found.len(), "perimeter enumeration done");
    Ok(found)
}

/// Keeps closed walks only, richest (most distinct vertices) first.
///
/// The sort is stable, so equally rich walks keep enumeration order.
pub fn rank_candidates(graph: &SegmentGraph, walks: Vec<Walk>) -> Vec<Walk> {
    let mut closed: Vec<(usize, Walk)> = walks
        .into_iter()
        .filter(|w| w.is_closed(graph))
        .map(|w| (w.distinct_vertices(graph), w))
        .collect();
    closed.sort_by(|a, b| b.0.cmp(&a.0));
    closed.into_iter().map(|(_, w)| w).collect()
}

/// Ranked closed perimeter-4 walks from `anchor`.
pub fn perimeter_candidates(
    graph: &SegmentGraph,
    anchor: NodeId,
    budget: &SearchBudget,
) -> Result<Vec<Walk>> {
    let walks = enumerate_perimeter_walks(graph, anchor, budget)?;
    Ok(rank_candidates(graph, walks))
}

fn average_length(walks: &[Walk]) -> f64 {
    let total: f64 = walks.iter().filter_map(|w| w.length.to_f64()).sum();
    total / walks.len().max(1) as f64
}
