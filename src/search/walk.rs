/*
walk.rs

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

//! Find a random route between two vertexes.
//!
//! The search is a depth-first search with an explicit stack.
//! At each vertex, the candidate neighbors are shuffled, so that two calls with the same
//! arguments can return different routes.
//! A vertex is visited at most once per call, which bounds the work by the size of the graph and
//! makes the search exhaustive: [`WalkError::NoSolution`] means that no route exists.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use crate::graph::Graph;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum WalkError {
    /// No route avoids the excluded vertexes.
    NoSolution,

    /// The vertex does not belong to the graph.
    UnknownVertex(usize),
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WalkError::NoSolution => write!(f, "no solution"),
            WalkError::UnknownVertex(v) => write!(f, "vertex {v} is not in the graph"),
        }
    }
}

impl Error for WalkError {}

/// Vertex on the search stack, with the neighbors that remain to be tried.
struct Frame {
    vertex: usize,
    candidates: Vec<usize>,
}

/// State of one search.
struct Search<'a> {
    graph: &'a Graph,
    start: usize,
    goal: usize,
    excluded: &'a HashSet<usize>,
    prune: bool,

    /// Visited marker, indexed by vertex.
    visited: Vec<bool>,
}

impl Search<'_> {
    /// Whether the route can go through the vertex.
    fn is_open(&self, vertex: usize) -> bool {
        if self.visited[vertex] {
            return false;
        }
        !(self.prune && vertex != self.start && vertex != self.goal && self.excluded.contains(&vertex))
    }

    /// Mark the vertex as visited and build its frame with the shuffled open neighbors.
    fn enter<R: Rng + ?Sized>(&mut self, vertex: usize, rng: &mut R) -> Frame {
        self.visited[vertex] = true;
        let mut candidates: Vec<usize> = self
            .graph
            .neighbors(vertex)
            .iter()
            .filter(|&v| self.is_open(*v))
            .copied()
            .collect();
        candidates.shuffle(rng);
        Frame { vertex, candidates }
    }
}

/// Return a random route from `start` to `goal`.
///
/// The route starts with `start`, ends with `goal`, follows the edges of the graph, and does not
/// repeat vertexes.
/// When `prune` is `true`, the route does not go through the `excluded` vertexes, except for
/// `start` and `goal` themselves.
/// When `start` and `goal` are the same vertex, the route is that single vertex.
///
/// # Errors
///
/// The function returns [`WalkError::NoSolution`] when no such route exists, and
/// [`WalkError::UnknownVertex`] when `start` or `goal` is not in the graph.
pub fn walk(
    graph: &Graph,
    start: usize,
    goal: usize,
    excluded: &HashSet<usize>,
    prune: bool,
) -> Result<Vec<usize>, WalkError> {
    walk_with_rng(graph, start, goal, excluded, prune, &mut rand::rng())
}

/// Same as [`walk`], but with the given random number generator.
pub fn walk_with_rng<R: Rng + ?Sized>(
    graph: &Graph,
    start: usize,
    goal: usize,
    excluded: &HashSet<usize>,
    prune: bool,
    rng: &mut R,
) -> Result<Vec<usize>, WalkError> {
    for v in [start, goal] {
        if !graph.contains_vertex(v) {
            return Err(WalkError::UnknownVertex(v));
        }
    }
    if start == goal {
        return Ok(vec![start]);
    }

    let mut search: Search = Search {
        graph,
        start,
        goal,
        excluded,
        prune,
        visited: vec![false; graph.num_vertexes()],
    };
    let mut stack: Vec<Frame> = Vec::with_capacity(graph.num_vertexes());
    let mut iteration: usize = 0;

    stack.push(search.enter(start, rng));
    while let Some(frame) = stack.last_mut() {
        iteration += 1;
        let next: usize = match frame.candidates.pop() {
            Some(v) => v,
            None => {
                debug!("    Back: no eligible neighbor for vertex {}", frame.vertex);
                stack.pop();
                continue;
            }
        };

        // The vertex may have been reached through another branch since the frame was built
        if !search.is_open(next) {
            continue;
        }
        if next == goal {
            let mut route: Vec<usize> = stack.iter().map(|f| f.vertex).collect();
            route.push(goal);
            debug!("Route {start} -> {goal} found after {iteration} iterations: {route:?}");
            return Ok(route);
        }
        stack.push(search.enter(next, rng));
    }

    debug!("No route {start} -> {goal} after {iteration} iterations");
    Err(WalkError::NoSolution)
}
