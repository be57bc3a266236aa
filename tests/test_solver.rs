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

use squarefold::geometry::{Segment2, Vector2};
use squarefold::graph::{NodeId, build_segment_graph};
use squarefold::io::Problem;
use squarefold::perimeter::separate;
use squarefold::projection::{
    EdgeProjection, NodeProjection, Projection, ProjectionStage, find_squash_points,
    place_boundary,
};
use squarefold::skeleton::{SegmentId, Skeleton};
use squarefold::{PlacementError, SearchBudget, Solution, SolveError, Solver};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn seg(s: &str) -> Segment2 {
    s.parse().unwrap()
}

fn pt(s: &str) -> Vector2 {
    s.parse().unwrap()
}

/// Boundary stage leaving the first `points` skeleton points where they are,
/// with the first `sides` segments covered by their own images.
fn identity_boundary(skeleton: &Skeleton, points: usize, sides: usize) -> ProjectionStage {
    let image = |node: NodeId| NodeProjection {
        node,
        point: skeleton.point(node).clone(),
    };
    let nodes = (0..points).map(|i| image(NodeId(i))).collect();
    let edges = (0..sides)
        .map(|i| {
            let (begin, end) = skeleton.endpoints(SegmentId(i));
            EdgeProjection {
                begin: image(begin),
                end: image(end),
                segments: vec![SegmentId(i)],
            }
        })
        .collect();
    ProjectionStage { nodes, edges }
}

/// Square with side midpoints, eight straight crossings between placed
/// points, and one segment nothing can ever reach.
fn square_with_crossings() -> Skeleton {
    Skeleton::new(vec![
        seg("0,0 1/2,0"),
        seg("1/2,0 1,0"),
        seg("1,0 1,1/2"),
        seg("1,1/2 1,1"),
        seg("1,1 1/2,1"),
        seg("1/2,1 0,1"),
        seg("0,1 0,1/2"),
        seg("0,1/2 0,0"),
        seg("1/2,0 1/2,1"),
        seg("0,1/2 1,1/2"),
        seg("1/2,0 1,1/2"),
        seg("1,1/2 1/2,1"),
        seg("1/2,1 0,1/2"),
        seg("0,1/2 1/2,0"),
        seg("0,0 1,1"),
        seg("1,0 0,1"),
        seg("5,5 6,5"),
    ])
    .unwrap()
}

/// Every edge image is as long as the original chord between its end nodes,
/// and every image lies in the unit square.
fn assert_lengths_preserved(solution: &Solution<'_>) {
    let skeleton = solution.projection.skeleton();
    for image in solution.projection.node_projections() {
        assert!(image.point.in_unit_square(), "{} outside", image.point);
    }
    for edge in solution.projection.edge_projections() {
        let original = skeleton
            .point(edge.begin.node)
            .squared_distance(skeleton.point(edge.end.node));
        assert_eq!(edge.begin.point.squared_distance(&edge.end.point), original);
    }
}

#[test]
fn test_square_with_midpoint_end_to_end() {
    init_tracing();
    let skeleton = Skeleton::new(vec![
        seg("0,0 1/2,0"),
        seg("1/2,0 1,0"),
        seg("1,0 1,1"),
        seg("1,1 0,1"),
        seg("0,1 0,0"),
    ])
    .unwrap();
    let solver = Solver::new(skeleton, SearchBudget::default());

    let candidates = solver.candidates().unwrap();
    let identity = candidates.iter().find_map(|walk| {
        let (breaks, projection) = solver.boundary_projection(walk)?;
        let exact = projection
            .node_projections()
            .all(|p| solver.skeleton().point(p.node) == &p.point);
        exact.then_some((walk.clone(), breaks, projection))
    });
    let (walk, breaks, projection) = identity.unwrap();
    assert_eq!(walk.len(), 5);
    assert_eq!(walk.distinct_vertices(solver.graph()), 5);
    assert_eq!(projection.depth(), 1);
    assert!(projection.is_complete());

    let sides = squarefold::perimeter::split_into_sides(&walk, &breaks);
    assert_eq!(sides.iter().filter(|s| s.len() == 2).count(), 1);

    let solution = solver.solve().unwrap().unwrap();
    assert!(solution.is_complete());
    assert_eq!(solution.projection.depth(), 1);
    assert_lengths_preserved(&solution);
}

#[test]
fn test_half_fold_from_problem_text() {
    init_tracing();
    let problem: Problem = "1\n4\n0,0\n1,0\n1,1/2\n0,1/2\n4\n0,0 1,0\n1,0 1,1/2\n1,1/2 0,1/2\n0,1/2 0,0\n"
        .parse()
        .unwrap();
    let solver = Solver::from_problem(&problem, SearchBudget::default()).unwrap();
    let solution = solver.solve().unwrap().unwrap();

    assert!(solution.is_complete());
    assert_lengths_preserved(&solution);

    // a perimeter of 3/2 only reaches length 4 by walking back over itself
    let folded = solver
        .skeleton()
        .points()
        .iter()
        .filter_map(|p| solver.skeleton().node_at(p))
        .any(|node| solution.projections_of(node).len() >= 2);
    assert!(folded);
}

#[test]
fn test_interior_point_needs_forced_edge_and_squash() {
    init_tracing();
    let skeleton = Skeleton::new(vec![
        seg("0,0 1,0"),
        seg("1,0 1,1"),
        seg("1,1 0,1"),
        seg("0,1 0,0"),
        seg("0,0 1/2,1/2"),
        seg("1/2,1/2 1,1"),
    ])
    .unwrap();
    let solver = Solver::new(skeleton, SearchBudget::default());
    let solution = solver.solve().unwrap().unwrap();

    assert!(solution.is_complete());
    assert_eq!(solution.projection.depth(), 3);
    let centre = solver.skeleton().node_at(&pt("1/2,1/2")).unwrap();
    assert_eq!(solution.projections_of(centre), vec![&pt("1/2,1/2")]);
    assert_lengths_preserved(&solution);
}

#[test]
fn test_unsolvable_instance_reports_none() {
    let skeleton = Skeleton::new(vec![
        seg("0,0 3/2,0"),
        seg("3/2,0 3/2,1/2"),
        seg("3/2,1/2 0,1/2"),
        seg("0,1/2 0,0"),
    ])
    .unwrap();
    let solver = Solver::new(skeleton, SearchBudget::default());
    assert!(solver.solve().unwrap().is_none());
}

#[test]
fn test_stage_budget_is_enforced() {
    let skeleton = Skeleton::new(vec![
        seg("0,0 1,0"),
        seg("1,0 1,1"),
        seg("1,1 0,1"),
        seg("0,1 0,0"),
        seg("0,0 1/2,1/2"),
        seg("1/2,1/2 1,1"),
    ])
    .unwrap();
    let solver = Solver::new(skeleton, SearchBudget::default().with_max_stages(1));
    assert!(matches!(
        solver.solve(),
        Err(SolveError::StageLimit { limit: 1 })
    ));
}

#[test]
fn test_empty_skeleton() {
    assert!(matches!(Skeleton::new(Vec::new()), Err(SolveError::EmptySkeleton)));
}

#[test]
fn test_chord_outside_skeleton_fails_placement() {
    let skeleton = Skeleton::new(vec![
        seg("1,0 1,1"),
        seg("1,1 0,1"),
        seg("0,1 0,0"),
    ])
    .unwrap();
    let mut graph = build_segment_graph(&skeleton);
    assert_eq!(
        squarefold::graph::add_chord_edges(&mut graph, &[seg("0,0 1,0")]),
        1
    );

    let walks = squarefold::perimeter::perimeter_candidates(
        &graph,
        skeleton.node_at(&pt("1,0")).unwrap(),
        &SearchBudget::default(),
    )
    .unwrap();
    let cycle = walks
        .iter()
        .find(|w| w.distinct_vertices(&graph) == 4)
        .unwrap();
    let (_, sides) = separate(&graph, cycle, usize::MAX).unwrap();
    let err = place_boundary(&graph, &skeleton, &sides).unwrap_err();
    assert!(matches!(err, PlacementError::UnknownSegment(ref s) if s.same_points(&seg("0,0 1,0"))));
}

#[test]
fn test_chords_can_stand_for_skeleton_segments() {
    let skeleton = Skeleton::new(vec![
        seg("0,0 1,0"),
        seg("1,0 1,1"),
        seg("1,1 0,1"),
        seg("0,1 0,0"),
    ])
    .unwrap();
    let mut solver = Solver::new(skeleton, SearchBudget::default());
    assert_eq!(solver.add_chords(&[seg("1,0 0,0")]), 1);
    let solution = solver.solve().unwrap().unwrap();
    assert!(solution.is_complete());
    assert_lengths_preserved(&solution);
}

#[test]
fn test_dead_end_pushes_grow_linearly() {
    init_tracing();
    let solver = Solver::new(square_with_crossings(), SearchBudget::unbounded());
    let mut projection = Projection::new(solver.skeleton());
    projection.push_stage(identity_boundary(solver.skeleton(), 8, 8));

    let mut pushes = 0;
    assert!(!solver.complete(&mut projection, &mut pushes).unwrap());
    // one forced edge per crossing, each tried once
    assert_eq!(pushes, 8);
    assert_eq!(projection.depth(), 1);
    assert_eq!(projection.current_state().covered_segments(), 8);
}

#[test]
fn test_unreachable_segment_reports_none_within_default_budget() {
    let solver = Solver::new(square_with_crossings(), SearchBudget::default());
    assert!(solver.solve().unwrap().is_none());
}

#[test]
fn test_backtracks_to_second_squash_point() {
    init_tracing();
    let skeleton = Skeleton::new(vec![
        seg("0,0 1,0"),
        seg("1,0 1,1"),
        seg("1,1 0,1"),
        seg("0,1 0,0"),
        seg("0,0 3/4,1/4"),
        seg("3/4,1/4 1,1"),
        seg("3/4,1/4 1,0"),
    ])
    .unwrap();
    let solver = Solver::new(skeleton, SearchBudget::default());
    let kite = solver.skeleton().node_at(&pt("3/4,1/4")).unwrap();
    let mut projection = Projection::new(solver.skeleton());
    projection.push_stage(identity_boundary(solver.skeleton(), 4, 4));

    // the mirror image comes first and cannot cover the short segment
    let squashes = find_squash_points(&projection);
    let points: Vec<&Vector2> = squashes.iter().map(|s| &s.nodes[0].point).collect();
    assert_eq!(points, vec![&pt("1/4,3/4"), &pt("3/4,1/4")]);
    assert_eq!(squashes[0].edges.len(), 2);
    assert_eq!(squashes[1].edges.len(), 3);

    let mut pushes = 0;
    assert!(solver.complete(&mut projection, &mut pushes).unwrap());
    assert_eq!(pushes, 2);
    assert_eq!(projection.depth(), 2);
    let images: Vec<&Vector2> = projection.projections_of(kite).collect();
    assert_eq!(images, vec![&pt("3/4,1/4")]);
    assert_eq!(projection.edge_projections().count(), 7);
}

#[test]
fn test_candidate_budget_of_zero_finds_nothing() {
    let skeleton = Skeleton::new(vec![
        seg("0,0 1,0"),
        seg("1,0 1,1"),
        seg("1,1 0,1"),
        seg("0,1 0,0"),
    ])
    .unwrap();
    let solver = Solver::new(skeleton.clone(), SearchBudget::default().with_max_candidates(0));
    assert!(solver.solve().unwrap().is_none());

    let solver = Solver::new(skeleton, SearchBudget::default());
    assert!(solver.solve().unwrap().is_some());
}

#[test]
fn test_anchor_moves_off_an_interior_first_point() {
    let skeleton = Skeleton::new(vec![
        seg("1/2,1/2 1,1"),
        seg("0,0 1/2,1/2"),
        seg("0,0 1,0"),
        seg("1,0 1,1"),
        seg("1,1 0,1"),
        seg("0,1 0,0"),
    ])
    .unwrap();
    let centre = skeleton.node_at(&pt("1/2,1/2")).unwrap();
    assert_eq!(centre, NodeId(0));

    let solver = Solver::new(skeleton, SearchBudget::default());
    assert_eq!(solver.graph().outgoing(centre).count(), 0);
    let candidates = solver.candidates().unwrap();
    assert!(!candidates.is_empty());
    assert!(candidates.iter().all(|w| w.node_sequence(solver.graph())[0] != centre));

    let solution = solver.solve().unwrap().unwrap();
    assert!(solution.is_complete());
    assert_eq!(solution.projections_of(centre), vec![&pt("1/2,1/2")]);
    assert_lengths_preserved(&solution);
}
