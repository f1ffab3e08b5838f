/*
path.rs

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

//! Path of a player in the graph.
//!
//! A [`Path`] is the ordered walk a player traced so far.
//! Its first vertex is the origin and its last vertex is the head.
//! No vertex appears twice, except when the head comes back to the origin after visiting all the
//! other vertexes: the path is then a Hamiltonian cycle and [`Path::is_complete`] returns `true`.
//!
//! Mutators validate the move first and leave the path untouched when they return an
//! [`InvalidMove`] error.

use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use crate::graph::Graph;

/// Reasons for refusing a move.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidMove {
    /// The vertex does not belong to the graph.
    UnknownVertex(usize),

    /// The vertex is not adjacent to the head of the path.
    NotAdjacent { head: usize, vertex: usize },

    /// The vertex is already in the path and does not close the cycle.
    AlreadyVisited(usize),

    /// Rewinding to a vertex that is not in the path.
    NotInPath(usize),

    /// The path is already a complete cycle.
    Completed,

    /// The path is too short to switch its ends.
    TooShort,

    /// The vertex belongs to the path of another player.
    Claimed { vertex: usize, owner: usize },
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidMove::UnknownVertex(v) => write!(f, "vertex {v} is not in the graph"),
            InvalidMove::NotAdjacent { head, vertex } => {
                write!(f, "vertex {vertex} is not adjacent to the head {head}")
            }
            InvalidMove::AlreadyVisited(v) => write!(f, "vertex {v} is already in the path"),
            InvalidMove::NotInPath(v) => write!(f, "vertex {v} is not in the path"),
            InvalidMove::Completed => write!(f, "the cycle is already complete"),
            InvalidMove::TooShort => write!(f, "the path is too short to switch its ends"),
            InvalidMove::Claimed { vertex, owner } => {
                write!(f, "vertex {vertex} belongs to player {owner}")
            }
        }
    }
}

impl Error for InvalidMove {}

/// Path object.
#[derive(Debug, Clone)]
pub struct Path {
    /// Graph the path is traced on.
    graph: Rc<Graph>,

    /// Path as an ordered list of vertexes.
    path: Vec<usize>,

    /// Stores the visited status of the vertex.
    /// Instead of looking for the vertex in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<usize>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create an empty [`Path`] object.
    pub fn new(graph: Rc<Graph>) -> Self {
        let num_vertexes: usize = graph.num_vertexes();
        Self {
            graph,
            path: Vec::with_capacity(num_vertexes + 1),
            visited: HashSet::with_capacity(num_vertexes),
        }
    }

    /// Create a [`Path`] object by stepping through the given vertexes in order.
    ///
    /// # Errors
    ///
    /// The method returns the error of the first refused step.
    pub fn from_vertexes(graph: Rc<Graph>, vertexes: &[usize]) -> Result<Self, InvalidMove> {
        let mut path: Path = Self::new(graph);
        for v in vertexes {
            path.step(*v)?;
        }
        Ok(path)
    }

    /// Return the graph the path is traced on.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Remove all the vertexes from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Get the number of entries in the path. A complete cycle has one more entry than the graph
    /// has vertexes.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no vertexes yet.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the vertex is in the path or not.
    pub fn contains(&self, vertex: usize) -> bool {
        self.visited.contains(&vertex)
    }

    /// Return the path as a slice.
    pub fn get(&self) -> &[usize] {
        &self.path
    }

    /// Return the position of the first occurrence of the given vertex in the path.
    pub fn position(&self, vertex: usize) -> Option<usize> {
        self.path.iter().position(|v| *v == vertex)
    }

    /// First vertex of the path.
    pub fn origin(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Last vertex of the path, from where the path grows.
    pub fn head(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Whether the vertex is the origin or the head of the path.
    pub fn is_end(&self, vertex: usize) -> bool {
        self.origin() == Some(vertex) || self.head() == Some(vertex)
    }

    /// Edges of the path, as pairs of consecutive vertexes.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.path.windows(2).map(|w| (w[0], w[1])).collect()
    }

    /// Vertexes strictly inside the path: all the entries except the first one and the last two.
    pub fn interior(&self) -> &[usize] {
        let l: usize = self.path.len();
        if l < 3 { &[] } else { &self.path[1..l - 2] }
    }

    /// Whether the vertex can be used as a pivot (see [`Path::interior`]).
    pub fn is_pivot(&self, vertex: usize) -> bool {
        self.interior().contains(&vertex)
    }

    /// Whether the path is a Hamiltonian cycle: every vertex once, then back to the origin.
    pub fn is_complete(&self) -> bool {
        let n: usize = self.graph.num_vertexes();
        n >= 3 && self.path.len() == n + 1 && self.path.first() == self.path.last()
    }

    /// Add a vertex to the path.
    fn push(&mut self, vertex: usize) {
        self.path.push(vertex);
        self.visited.insert(vertex);
    }

    /// Extend the path with the given vertex.
    ///
    /// The vertex must be adjacent to the head and not yet in the path. The only exception is
    /// the origin, which closes the cycle when all the other vertexes are in the path.
    /// The first vertex of an empty path can be any vertex of the graph.
    ///
    /// # Errors
    ///
    /// The method returns an error, and does not modify the path, if the move is not valid.
    pub fn step(&mut self, vertex: usize) -> Result<(), InvalidMove> {
        if !self.graph.contains_vertex(vertex) {
            return Err(InvalidMove::UnknownVertex(vertex));
        }
        let head: usize = match self.head() {
            Some(h) => h,
            None => {
                debug!("Path starts at vertex {vertex}");
                self.push(vertex);
                return Ok(());
            }
        };
        if self.is_complete() {
            return Err(InvalidMove::Completed);
        }
        if !self.graph.is_adjacent(head, vertex) {
            return Err(InvalidMove::NotAdjacent { head, vertex });
        }
        if self.contains(vertex) {
            if self.origin() == Some(vertex)
                && self.path.len() == self.graph.num_vertexes()
                && self.path.len() >= 3
            {
                // The visited set already holds the origin
                self.path.push(vertex);
                debug!("Cycle closed at vertex {vertex}");
                return Ok(());
            }
            return Err(InvalidMove::AlreadyVisited(vertex));
        }
        self.push(vertex);
        Ok(())
    }

    /// Truncate the path so that the given vertex becomes the head.
    ///
    /// Rewinding to the current head does nothing.
    ///
    /// # Errors
    ///
    /// The method returns [`InvalidMove::NotInPath`] if the vertex is not in the path.
    pub fn rewind(&mut self, vertex: usize) -> Result<(), InvalidMove> {
        let index: usize = self
            .position(vertex)
            .ok_or(InvalidMove::NotInPath(vertex))?;
        if self.head() == Some(vertex) {
            return Ok(());
        }
        debug!("Rewinding path from {} to {} vertexes", self.path.len(), index + 1);
        self.path.truncate(index + 1);
        self.visited = self.path.iter().copied().collect();
        Ok(())
    }

    /// Reverse the path so that the origin becomes the head and the head becomes the origin.
    ///
    /// # Errors
    ///
    /// The method returns [`InvalidMove::TooShort`] if the path has less than two entries.
    pub fn switch_head(&mut self) -> Result<(), InvalidMove> {
        if self.path.len() < 2 {
            return Err(InvalidMove::TooShort);
        }
        self.path.reverse();
        Ok(())
    }

    /// Step through all the given vertexes. Either all the steps succeed or the path is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// The method returns the error of the first refused step.
    pub fn extend(&mut self, vertexes: &[usize]) -> Result<(), InvalidMove> {
        let mut next: Path = self.clone();
        for v in vertexes {
            next.step(*v)?;
        }
        *self = next;
        Ok(())
    }

    /// Replace the path with the given vertexes, which must form a valid path.
    ///
    /// # Errors
    ///
    /// The method returns the error of the first refused step, and leaves the path unchanged.
    pub fn assign(&mut self, vertexes: &[usize]) -> Result<(), InvalidMove> {
        *self = Self::from_vertexes(Rc::clone(&self.graph), vertexes)?;
        Ok(())
    }
}
