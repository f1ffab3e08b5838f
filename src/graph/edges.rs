/*
edges.rs

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

//! Edges between vertexes in a graph.

use log::debug;
use serde::{Deserialize, Serialize};

/// Represent the edges of a graph as adjacency lists.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Edges {
    /// For each vertex, the list of the adjacent vertexes.
    ///
    /// The vector is indexed by the vertex ID. Every edge is stored in both directions.
    adjacent: Vec<Vec<usize>>,
}

impl Edges {
    /// Create the edge object for a graph with the given number of vertexes.
    pub fn new(num_vertexes: usize) -> Self {
        Self {
            adjacent: vec![Vec::new(); num_vertexes],
        }
    }

    /// Add the edge in both directions.
    ///
    /// Return `false` if the edge already exists. Both vertexes must be smaller than the
    /// number of vertexes given to [`Edges::new`].
    pub fn push(&mut self, vertex1: usize, vertex2: usize) -> bool {
        if self.adjacent[vertex1].contains(&vertex2) {
            return false;
        }
        self.adjacent[vertex1].push(vertex2);
        self.adjacent[vertex2].push(vertex1);
        true
    }

    /// Sort the adjacency lists so that listings are stable.
    pub fn sort(&mut self) {
        for a in &mut self.adjacent {
            a.sort_unstable();
        }
    }

    /// For the given vertex, return all the adjacent vertexes.
    pub fn get_vertexes(&self, vertex: usize) -> &[usize] {
        match self.adjacent.get(vertex) {
            Some(a) => a,
            None => &[],
        }
    }

    /// Whether an edge exists between the two vertexes.
    pub fn contains(&self, vertex1: usize, vertex2: usize) -> bool {
        self.get_vertexes(vertex1).contains(&vertex2)
    }

    /// Number of adjacent vertexes of the given vertex.
    pub fn num_edges(&self, vertex: usize) -> usize {
        self.get_vertexes(vertex).len()
    }

    /// Print the edges.
    pub fn debug(&self) {
        let mut s: String = String::new();

        for (v1, a) in self.adjacent.iter().enumerate() {
            s.clear();
            s.push_str(&format!("{v1:>3} -->"));
            for v2 in a {
                s.push_str(&format!(" {v2}"));
            }
            debug!("{s}");
        }
    }
}
