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

//! Index-addressed directed multigraph.
//!
//! Nodes and edges live in growable arrays and are referred to by dense
//! `NodeId`/`EdgeId` indices; payloads are looked up by index. Parallel edges
//! and self-loops are allowed. Nothing is ever removed.

pub mod segment_graph;

use std::fmt;

pub use segment_graph::{EdgeInfo, EdgeOrigin, NodeInfo, SegmentGraph, add_chord_edges, build_segment_graph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Node<N> {
    pub data: N,
    outgoing: Vec<EdgeId>,
}

#[derive(Debug, Clone)]
pub struct Edge<E> {
    pub from: NodeId,
    pub to: NodeId,
    pub data: E,
}

#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<E>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, data: N) -> NodeId {
        self.nodes.push(Node {
            data,
            outgoing: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Adds a directed edge `from -> to`.
    ///
    /// # Panics
    /// If either endpoint is not a node of this graph.
    pub fn connect(&mut self, from: NodeId, to: NodeId, data: E) -> EdgeId {
        assert!(from.0 < self.nodes.len(), "unknown node {from}");
        assert!(to.0 < self.nodes.len(), "unknown node {to}");
        let id = EdgeId(self.edges.len());
        self.nodes[from.0].outgoing.push(id);
        self.edges.push(Edge { from, to, data });
        id
    }

    pub fn node(&self, id: NodeId) -> &Node<N> {
        &self.nodes[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge<E> {
        &self.edges[id.0]
    }

    /// Edges leaving `id`, in insertion order.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.nodes[id.0].outgoing.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<N>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }
}
