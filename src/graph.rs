/*
graph.rs

Copyright 2025 Hervé Quatremain

This file is part of Platoloop.

Platoloop is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Platoloop is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Platoloop. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Graphs the player traces cycles on.
//!
//! A [`Graph`] is an immutable, simple, undirected and connected graph whose vertexes are the
//! integers `0..num_vertexes`.
//! Graphs are built once with [`Graph::build`], which verifies the edge list and returns a
//! [`GraphError`] when the list is malformed.
//!
//! The [`catalog`] module provides the skeletons of the polyhedra the game is played on.
//! A malformed catalog entry is a programming error, so the catalog panics instead of returning
//! the error.

pub mod catalog;
pub mod edges;

use log::{Level, debug, log_enabled};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GraphError {
    /// The graph has no vertexes.
    Empty,

    /// An edge references a vertex outside of `0..num_vertexes`.
    VertexOutOfRange(usize, usize),

    /// An edge connects a vertex to itself.
    SelfLoop(usize),

    /// The same edge is listed twice.
    DuplicateEdge(usize, usize),

    /// The vertex cannot be reached from vertex 0.
    Disconnected(usize),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphError::Empty => write!(f, "the graph does not have any vertexes"),
            GraphError::VertexOutOfRange(v1, v2) => {
                write!(f, "edge {v1}-{v2} references an unknown vertex")
            }
            GraphError::SelfLoop(v) => write!(f, "vertex {v} is connected to itself"),
            GraphError::DuplicateEdge(v1, v2) => write!(f, "edge {v1}-{v2} is listed twice"),
            GraphError::Disconnected(v) => write!(f, "vertex {v} cannot be reached from vertex 0"),
        }
    }
}

impl Error for GraphError {}

/// Simple undirected graph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Graph {
    /// Number of vertexes. Vertex IDs go from `0` to `num_vertexes - 1`.
    num_vertexes: usize,

    /// Edges as unordered pairs, normalized so that the smaller vertex comes first.
    edge_list: Vec<(usize, usize)>,

    /// Adjacency lists.
    edges: edges::Edges,
}

impl Graph {
    /// Build a graph from its number of vertexes and its list of edges.
    ///
    /// # Errors
    ///
    /// The method returns an error when the graph is empty, when an edge is a loop, is listed
    /// twice, or references an unknown vertex, and when the graph is not connected.
    pub fn build(num_vertexes: usize, edge_list: &[(usize, usize)]) -> Result<Self, GraphError> {
        if num_vertexes == 0 {
            return Err(GraphError::Empty);
        }

        let mut edges: edges::Edges = edges::Edges::new(num_vertexes);
        let mut normalized: Vec<(usize, usize)> = Vec::with_capacity(edge_list.len());

        for &(v1, v2) in edge_list {
            if v1 >= num_vertexes || v2 >= num_vertexes {
                return Err(GraphError::VertexOutOfRange(v1, v2));
            }
            if v1 == v2 {
                return Err(GraphError::SelfLoop(v1));
            }
            if !edges.push(v1, v2) {
                return Err(GraphError::DuplicateEdge(v1, v2));
            }
            normalized.push((v1.min(v2), v1.max(v2)));
        }
        edges.sort();
        normalized.sort_unstable();

        let graph: Graph = Self {
            num_vertexes,
            edge_list: normalized,
            edges,
        };

        if let Some(v) = graph.reachable_from(0).iter().position(|reached| !reached) {
            return Err(GraphError::Disconnected(v));
        }

        if log_enabled!(Level::Debug) {
            debug!(
                "Number of vertexes = {}  Number of edges = {}",
                graph.num_vertexes,
                graph.edge_list.len()
            );
            graph.edges.debug();
        }
        Ok(graph)
    }

    /// Number of vertexes.
    pub fn num_vertexes(&self) -> usize {
        self.num_vertexes
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edge_list.len()
    }

    /// Return the edges as `(smaller, larger)` pairs, sorted.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edge_list
    }

    /// Whether the vertex ID belongs to the graph.
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.num_vertexes
    }

    /// Return the vertexes adjacent to the given vertex, in increasing order.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.edges.get_vertexes(vertex)
    }

    /// Whether two vertexes are connected by an edge.
    pub fn is_adjacent(&self, vertex1: usize, vertex2: usize) -> bool {
        self.edges.contains(vertex1, vertex2)
    }

    /// Number of edges incident to the vertex.
    pub fn degree(&self, vertex: usize) -> usize {
        self.edges.num_edges(vertex)
    }

    /// Whether every vertex can be reached from every other vertex.
    pub fn is_connected(&self) -> bool {
        self.reachable_from(0).iter().all(|reached| *reached)
    }

    /// Breadth-first traversal. Return, for each vertex, whether it is reachable from `start`.
    fn reachable_from(&self, start: usize) -> Vec<bool> {
        let mut reached: Vec<bool> = vec![false; self.num_vertexes];
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(self.num_vertexes);

        if start < self.num_vertexes {
            reached[start] = true;
            queue.push_back(start);
        }
        while let Some(v1) = queue.pop_front() {
            for &v2 in self.neighbors(v1) {
                if !reached[v2] {
                    reached[v2] = true;
                    queue.push_back(v2);
                }
            }
        }
        reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_normalizes_edges() {
        let graph = Graph::build(3, &[(2, 0), (1, 0), (1, 2)]).unwrap();
        assert_eq!(graph.edges(), &[(0, 1), (0, 2), (1, 2)]);
        assert_eq!(graph.neighbors(0), &[1, 2]);
        assert!(graph.is_adjacent(2, 0));
        assert_eq!(graph.degree(1), 2);
    }

    #[test]
    fn build_rejects_malformed_edge_lists() {
        assert_eq!(Graph::build(0, &[]), Err(GraphError::Empty));
        assert_eq!(
            Graph::build(2, &[(0, 2)]),
            Err(GraphError::VertexOutOfRange(0, 2))
        );
        assert_eq!(Graph::build(2, &[(1, 1)]), Err(GraphError::SelfLoop(1)));
        assert_eq!(
            Graph::build(2, &[(0, 1), (1, 0)]),
            Err(GraphError::DuplicateEdge(1, 0))
        );
        assert_eq!(
            Graph::build(4, &[(0, 1), (2, 3)]),
            Err(GraphError::Disconnected(2))
        );
    }

    #[test]
    fn single_vertex_is_connected() {
        let graph = Graph::build(1, &[]).unwrap();
        assert!(graph.is_connected());
        assert_eq!(graph.num_edges(), 0);
        assert!(!graph.contains_vertex(1));
    }
}
