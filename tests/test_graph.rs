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
use squarefold::graph::{EdgeOrigin, Graph, NodeId, add_chord_edges, build_segment_graph};
use squarefold::numeric::Rational;
use squarefold::skeleton::{SegmentId, Skeleton};

fn seg(s: &str) -> Segment2 {
    s.parse().unwrap()
}

fn pt(s: &str) -> Vector2 {
    s.parse().unwrap()
}

fn square_with_midpoint() -> Skeleton {
    Skeleton::new(vec![
        seg("0,0 1/2,0"),
        seg("1/2,0 1,0"),
        seg("1,0 1,1"),
        seg("1,1 0,1"),
        seg("0,1 0,0"),
    ])
    .unwrap()
}

#[test]
fn test_generic_graph() {
    let mut g: Graph<&str, u32> = Graph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    let e0 = g.connect(a, b, 1);
    let e1 = g.connect(a, b, 2);
    let e2 = g.connect(b, a, 3);

    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.outgoing(a).collect::<Vec<_>>(), vec![e0, e1]);
    assert_eq!(g.outgoing(b).collect::<Vec<_>>(), vec![e2]);
    assert_eq!(g.edge(e2).from, b);
    assert_eq!(g.edge(e2).to, a);
    assert_eq!(g.edge(e1).data, 2);
    assert_eq!(g.node(b).data, "b");
}

#[test]
fn test_skeleton_points_keep_first_appearance_order() {
    let skeleton = square_with_midpoint();
    let expected: Vec<Vector2> = ["0,0", "1/2,0", "1,0", "1,1", "0,1"].iter().map(|s| pt(s)).collect();
    assert_eq!(skeleton.points(), expected.as_slice());
    assert_eq!(skeleton.node_at(&pt("1,1")), Some(NodeId(3)));
    assert_eq!(skeleton.node_at(&pt("1/3,0")), None);
    assert_eq!(skeleton.find_segment(&seg("0,0 0,1")), Some(SegmentId(4)));
    assert_eq!(skeleton.find_segment(&seg("0,0 1,1")), None);
}

#[test]
fn test_segment_graph_holds_both_orientations() {
    let skeleton = square_with_midpoint();
    let graph = build_segment_graph(&skeleton);

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 10);

    let from_origin: Vec<_> = graph.outgoing(NodeId(0)).collect();
    assert_eq!(from_origin.len(), 2);
    let first = graph.edge(from_origin[0]);
    assert_eq!(first.to, NodeId(1));
    assert_eq!(first.data.length, Rational::from_num_den(1, 2));
    assert_eq!(first.data.origin, EdgeOrigin::Skeleton(SegmentId(0)));

    for (_, edge) in graph.edges() {
        assert_eq!(edge.data.segment.start, graph.node(edge.from).data.location);
        assert_eq!(edge.data.segment.end, graph.node(edge.to).data.location);
    }
}

#[test]
fn test_irrational_segments_stay_out_of_graph() {
    let mut segments = square_with_midpoint().segments().to_vec();
    segments.push(seg("0,0 1,1"));
    let skeleton = Skeleton::new(segments).unwrap();
    let graph = build_segment_graph(&skeleton);

    assert_eq!(skeleton.segment_count(), 6);
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 10);
}

#[test]
fn test_chord_edges() {
    let skeleton = square_with_midpoint();
    let mut graph = build_segment_graph(&skeleton);

    let added = add_chord_edges(
        &mut graph,
        &[
            seg("0,0 1,0"),     // known endpoints, rational length
            seg("0,0 1,1"),     // irrational length
            seg("0,0 1/3,1/3"), // unknown endpoint
        ],
    );
    assert_eq!(added, 1);
    assert_eq!(graph.edge_count(), 12);

    let chords: Vec<_> = graph
        .edges()
        .filter(|(_, e)| e.data.origin == EdgeOrigin::Chord)
        .map(|(_, e)| (e.from, e.to))
        .collect();
    assert_eq!(chords, vec![(NodeId(0), NodeId(2)), (NodeId(2), NodeId(0))]);
}

#[test]
#[should_panic(expected = "unknown node")]
fn test_connect_rejects_unknown_source() {
    let mut graph: Graph<(), ()> = Graph::new();
    let a = graph.add_node(());
    graph.connect(NodeId(7), a, ());
}

#[test]
fn test_node_ids_follow_insertion() {
    let mut graph: Graph<u8, ()> = Graph::new();
    let a = graph.add_node(1);
    let b = graph.add_node(2);
    assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec![a, b]);
}
