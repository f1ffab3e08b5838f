/*
cycle_walker.rs

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

//! Grow a random walk into a Hamiltonian cycle, one vertex at a time.
//!
//! A [`CycleWalker`] is a state machine driven by [`CycleWalker::advance`].
//! Each call extends the walk by one vertex chosen at random among the unvisited neighbors of the
//! head, and returns the new walk, so that the caller can display one step per frame.
//! The walker ends either with a closed cycle or stuck at a dead end.
//! It cannot be restarted in place: to try again, create a new walker, possibly from a prefix of
//! the previous walk with [`CycleWalker::from_prefix`].

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::rc::Rc;

use crate::graph::Graph;
use crate::path::{InvalidMove, Path};

/// Result of one [`CycleWalker::advance`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// The walk grew by one vertex. The new walk is provided.
    Step(Vec<usize>),

    /// The walk came back to its origin after visiting every vertex. The cycle is provided, with
    /// the origin at both ends.
    Closed(Vec<usize>),

    /// The head has no unvisited neighbor and the cycle cannot be closed.
    Stuck,
}

/// State of the walker.
#[derive(Debug, Copy, Clone, PartialEq)]
enum State {
    Walking,
    Closed,
    Stuck,
}

/// [`CycleWalker`] object.
#[derive(Debug, Clone)]
pub struct CycleWalker {
    /// Graph to walk on.
    graph: Rc<Graph>,

    /// Walk so far.
    walk: Vec<usize>,

    /// Visited marker, indexed by vertex.
    visited: Vec<bool>,

    state: State,

    /// Number of vertexes added by [`CycleWalker::advance`].
    extensions: usize,
}

impl CycleWalker {
    /// Create a walker that continues the given walk.
    ///
    /// An empty seed lets the walker choose a random starting vertex.
    ///
    /// # Errors
    ///
    /// The method returns an error if the seed is not a valid path in the graph.
    pub fn new(graph: Rc<Graph>, seed: &[usize]) -> Result<Self, InvalidMove> {
        let path: Path = Path::from_vertexes(Rc::clone(&graph), seed)?;
        Ok(Self::from_valid_walk(graph, path.get()))
    }

    /// Build the walker from a walk that is known to be valid.
    fn from_valid_walk(graph: Rc<Graph>, walk: &[usize]) -> Self {
        let n: usize = graph.num_vertexes();
        let mut visited: Vec<bool> = vec![false; n];
        for v in walk {
            visited[*v] = true;
        }
        let closed: bool = n >= 3 && walk.len() == n + 1 && walk.first() == walk.last();
        debug!("New walker seeded with {} vertexes", walk.len());
        Self {
            graph,
            walk: walk.to_vec(),
            visited,
            state: if closed { State::Closed } else { State::Walking },
            extensions: 0,
        }
    }

    /// Create a new walker that starts from the first `len` vertexes of this walker.
    ///
    /// `len` is clamped to the length of the current walk.
    pub fn from_prefix(&self, len: usize) -> Self {
        let l: usize = len.min(self.walk.len());
        Self::from_valid_walk(Rc::clone(&self.graph), &self.walk[..l])
    }

    /// Return the walk so far.
    pub fn walk(&self) -> &[usize] {
        &self.walk
    }

    /// Number of vertexes this walker added to its seed.
    pub fn extensions(&self) -> usize {
        self.extensions
    }

    /// Whether the walker reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.state != State::Walking
    }

    /// Add a vertex to the walk.
    fn push(&mut self, vertex: usize) {
        self.walk.push(vertex);
        self.visited[vertex] = true;
        self.extensions += 1;
    }

    /// Extend the walk by one vertex.
    ///
    /// Once the walker returned [`Advance::Closed`] or [`Advance::Stuck`], further calls return
    /// the same outcome without doing anything.
    pub fn advance(&mut self) -> Advance {
        self.advance_with_rng(&mut rand::rng())
    }

    /// Same as [`CycleWalker::advance`], but with the given random number generator.
    pub fn advance_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Advance {
        match self.state {
            State::Closed => return Advance::Closed(self.walk.clone()),
            State::Stuck => return Advance::Stuck,
            State::Walking => (),
        }

        let n: usize = self.graph.num_vertexes();
        let head: usize = match self.walk.last() {
            Some(v) => *v,
            None => {
                let start: usize = rng.random_range(0..n);
                debug!("Walker starts at vertex {start}");
                self.push(start);
                return Advance::Step(self.walk.clone());
            }
        };

        // Every vertex visited: close the cycle if the head is back next to the origin
        if self.walk.len() == n {
            let origin: usize = self.walk[0];
            if n >= 3 && self.graph.is_adjacent(head, origin) {
                self.walk.push(origin);
                self.extensions += 1;
                self.state = State::Closed;
                debug!("Walker closed the cycle {:?}", self.walk);
                return Advance::Closed(self.walk.clone());
            }
            debug!("Walker stuck: vertex {head} is not adjacent to the origin {origin}");
            self.state = State::Stuck;
            return Advance::Stuck;
        }

        let open: Vec<usize> = self
            .graph
            .neighbors(head)
            .iter()
            .filter(|&v| !self.visited[*v])
            .copied()
            .collect();
        match open.choose(rng) {
            Some(&next) => {
                self.push(next);
                Advance::Step(self.walk.clone())
            }
            None => {
                debug!(
                    "Walker stuck at vertex {head} after {} of {n} vertexes",
                    self.walk.len()
                );
                self.state = State::Stuck;
                Advance::Stuck
            }
        }
    }
}
