/*
players.rs

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

//! Manage the players and their paths.
//!
//! All the players share the same graph.
//! The vertexes that any player stepped on are claimed: other players cannot walk through them.
//! The set of claimed vertexes is always derived from the paths, so that it never goes out of
//! sync with them.

use log::debug;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use crate::graph::Graph;
use crate::path::{InvalidMove, Path};

/// A player and the path they traced.
#[derive(Debug, Clone)]
pub struct Player {
    /// Player identifier.
    id: usize,

    /// Path the player traced so far.
    pub path: Path,
}

impl Player {
    /// Create a [`Player`] object with an empty path.
    pub fn new(id: usize, graph: Rc<Graph>) -> Self {
        Self {
            id,
            path: Path::new(graph),
        }
    }

    /// Return the player identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Whether the player has not chosen their first vertex yet.
    pub fn is_new(&self) -> bool {
        self.path.is_empty()
    }
}

/// Set of the players sharing a graph.
#[derive(Debug, Clone)]
pub struct PlayerSet {
    /// Graph the players trace their paths on.
    graph: Rc<Graph>,

    /// Players indexed by their identifier. The order gives the turn order.
    players: BTreeMap<usize, Player>,

    /// Identifier for the next player.
    next_id: usize,

    /// Identifier of the player whose turn it is.
    current: usize,
}

impl PlayerSet {
    /// Create a [`PlayerSet`] object with one player, who gets the first turn.
    pub fn new(graph: Rc<Graph>) -> Self {
        let mut players: BTreeMap<usize, Player> = BTreeMap::new();
        players.insert(0, Player::new(0, Rc::clone(&graph)));
        Self {
            graph,
            players,
            next_id: 1,
            current: 0,
        }
    }

    /// Return the graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Register a new player and return their identifier.
    ///
    /// The new player waits for their turn.
    pub fn add_player(&mut self) -> usize {
        let id: usize = self.next_id;
        self.next_id += 1;
        self.players.insert(id, Player::new(id, Rc::clone(&self.graph)));
        debug!("Player {id} joined ({} players)", self.players.len());
        id
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the set has no players. Always `false`, the set keeps at least one player.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over the players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Return the player with the given identifier.
    pub fn get(&self, id: usize) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Return the player whose turn it is.
    pub fn current(&self) -> &Player {
        &self.players[&self.current]
    }

    /// Return the player whose turn it is, for updating their path.
    pub fn current_mut(&mut self) -> &mut Player {
        self.players
            .get_mut(&self.current)
            .expect("The current player is always registered")
    }

    /// Give the turn to the next player, round-robin, and return their identifier.
    pub fn advance_turn(&mut self) -> usize {
        self.current = match self.players.range(self.current + 1..).next() {
            Some((id, _)) => *id,
            None => *self.players.keys().next().unwrap_or(&self.current),
        };
        debug!("Turn to player {}", self.current);
        self.current
    }

    /// Return the vertexes in the path of any player.
    pub fn stepped(&self) -> HashSet<usize> {
        self.players
            .values()
            .flat_map(|p| p.path.get().iter().copied())
            .collect()
    }

    /// Return the identifier of the player whose path contains the vertex.
    pub fn owner_of(&self, vertex: usize) -> Option<usize> {
        self.players
            .values()
            .find(|p| p.path.contains(vertex))
            .map(|p| p.id)
    }

    /// Whether the current player completed a Hamiltonian cycle.
    pub fn found_solution(&self) -> bool {
        self.current().path.is_complete()
    }

    /// Extend the path of the current player with the vertex.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`Path::step`], the method returns [`InvalidMove::Claimed`]
    /// when the vertex is in the path of another player.
    pub fn step_current(&mut self, vertex: usize) -> Result<(), InvalidMove> {
        if let Some(owner) = self.owner_of(vertex) {
            if owner != self.current {
                return Err(InvalidMove::Claimed { vertex, owner });
            }
        }
        self.current_mut().path.step(vertex)
    }

    /// Clear the paths of all the players.
    pub fn reset(&mut self) {
        for player in self.players.values_mut() {
            player.path.clear();
        }
    }
}
