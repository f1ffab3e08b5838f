/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] ties a polyhedron, its players, and the self-playing search together.
//! The user interface forwards clicks on vertexes to [`Game::click`] and calls [`Game::tick`]
//! once per frame. When the animation is on, every tick extends the walk of the current player by
//! one vertex.

use log::{debug, info, warn};
use rand::Rng;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use crate::graph::Graph;
use crate::graph::catalog::Polyhedron;
use crate::path::InvalidMove;
use crate::players::PlayerSet;
use crate::search::cycle_walker::{Advance, CycleWalker};
use crate::search::walk::{self, WalkError};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GameError {
    /// The clicked vertex cannot be added to the path.
    Move(InvalidMove),

    /// No route leads to the clicked vertex.
    Walk(WalkError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Move(e) => write!(f, "invalid move: {e}"),
            GameError::Walk(e) => write!(f, "no route: {e}"),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            GameError::Walk(e) => Some(e),
        }
    }
}

impl From<InvalidMove> for GameError {
    fn from(e: InvalidMove) -> Self {
        GameError::Move(e)
    }
}

impl From<WalkError> for GameError {
    fn from(e: WalkError) -> Self {
        GameError::Walk(e)
    }
}

/// What a click did to the path of the current player.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// The path starts at the vertex.
    Started(usize),

    /// The vertex was added after the head.
    Stepped(usize),

    /// The path came back to its origin and is now a Hamiltonian cycle.
    Closed,

    /// The origin and the head were swapped.
    Switched,

    /// The path was truncated so that the vertex is the new head.
    Rewound(usize),

    /// A route from the head to the vertex was added. The route includes the former head.
    Routed(Vec<usize>),
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Polyhedron being played.
    kind: Polyhedron,

    /// Skeleton of the polyhedron.
    graph: Rc<Graph>,

    /// Players and their paths.
    pub players: PlayerSet,

    /// Self-playing search, created on the first animated frame.
    walker: Option<CycleWalker>,

    /// Whether the game plays on its own.
    animate: bool,

    /// Number of stuck walkers replaced since the game started.
    restarts: usize,

    /// Number of animated frames since the game started.
    frames: usize,
}

impl Game {
    /// Create a [`Game`] object for the given polyhedron, with one player.
    pub fn new(kind: Polyhedron) -> Self {
        let graph: Rc<Graph> = Rc::new(kind.graph());
        Self {
            kind,
            players: PlayerSet::new(Rc::clone(&graph)),
            graph,
            walker: None,
            animate: false,
            restarts: 0,
            frames: 0,
        }
    }

    /// Return the polyhedron being played.
    pub fn kind(&self) -> Polyhedron {
        self.kind
    }

    /// Return the graph being played.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Restart the game on the same polyhedron.
    pub fn reset(&mut self) {
        self.select(self.kind);
    }

    /// Restart the game on the given polyhedron.
    pub fn select(&mut self, kind: Polyhedron) {
        debug!("New game on the {kind}");
        *self = Self::new(kind);
    }

    /// Restart the game on the next polyhedron of the catalog.
    pub fn next_graph(&mut self) -> Polyhedron {
        self.select(self.kind.next());
        self.kind
    }

    /// Whether the game plays on its own.
    pub fn is_animating(&self) -> bool {
        self.animate
    }

    /// Start or stop playing on its own. Stopping discards the search in progress.
    ///
    /// The game does not play on its own while other players hold vertexes, because the
    /// search would need the whole graph to close the cycle.
    pub fn set_animate(&mut self, animate: bool) {
        if animate && self.others_claimed() {
            warn!("Other players hold vertexes: animation refused");
            self.animate = false;
        } else {
            self.animate = animate;
        }
        if !self.animate {
            self.walker = None;
        }
    }

    /// Whether a player other than the current one has a vertex in their path.
    fn others_claimed(&self) -> bool {
        let current: usize = self.players.current().id();
        self.players
            .players()
            .any(|p| p.id() != current && !p.is_new())
    }

    /// Toggle the animation and return the new status.
    pub fn toggle_animate(&mut self) -> bool {
        self.set_animate(!self.animate);
        self.animate
    }

    /// Whether the current player completed a Hamiltonian cycle.
    pub fn found_solution(&self) -> bool {
        self.players.found_solution()
    }

    /// Number of times the self-playing search got stuck and started again.
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Number of animated frames so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Process a click on the given vertex for the current player.
    ///
    /// - A new player starts their path on the vertex.
    /// - Clicking the origin when every vertex is in the path and the head is adjacent to the
    ///   origin closes the cycle.
    /// - Otherwise, clicking the origin of a path longer than two vertexes swaps the origin and
    ///   the head.
    /// - Clicking a vertex in the path rewinds the path to that vertex.
    /// - Clicking a vertex adjacent to the head extends the path.
    /// - Clicking any other vertex extends the path with a random route to it, avoiding the
    ///   vertexes that any player already stepped on.
    ///
    /// The click stops the animation.
    ///
    /// # Errors
    ///
    /// The method returns an error, and leaves the path unchanged, if the vertex is not in the
    /// graph, belongs to another player, or cannot be reached.
    pub fn click(&mut self, vertex: usize) -> Result<ClickOutcome, GameError> {
        self.set_animate(false);

        if !self.graph.contains_vertex(vertex) {
            return Err(InvalidMove::UnknownVertex(vertex).into());
        }
        let current: usize = self.players.current().id();
        if let Some(owner) = self.players.owner_of(vertex) {
            if owner != current {
                return Err(InvalidMove::Claimed { vertex, owner }.into());
            }
        }

        let player = self.players.current();
        if player.is_new() {
            self.players.step_current(vertex)?;
            return Ok(ClickOutcome::Started(vertex));
        }
        let path = &player.path;
        let closing: bool = path.len() == self.graph.num_vertexes()
            && path.head().is_some_and(|head| self.graph.is_adjacent(head, vertex));
        if path.origin() == Some(vertex) && closing {
            self.players.step_current(vertex)?;
            info!("Cycle closed by the player on the {}", self.kind);
            return Ok(ClickOutcome::Closed);
        }
        if path.origin() == Some(vertex) && path.len() > 2 {
            self.players.current_mut().path.switch_head()?;
            return Ok(ClickOutcome::Switched);
        }
        if path.contains(vertex) {
            self.players.current_mut().path.rewind(vertex)?;
            return Ok(ClickOutcome::Rewound(vertex));
        }
        match path.head() {
            Some(head) if self.graph.is_adjacent(head, vertex) => {
                self.players.step_current(vertex)?;
                Ok(ClickOutcome::Stepped(vertex))
            }
            Some(head) => self.route(head, vertex),
            None => Err(InvalidMove::NotInPath(vertex).into()),
        }
    }

    /// Extend the path of the current player with a random route from its head to the goal.
    fn route(&mut self, head: usize, goal: usize) -> Result<ClickOutcome, GameError> {
        let mut excluded = self.players.stepped();
        excluded.remove(&head);

        let route: Vec<usize> = match walk::walk(&self.graph, head, goal, &excluded, true) {
            Ok(r) => r,
            Err(e) => {
                info!("No route from {head} to {goal}: {e}");
                return Err(e.into());
            }
        };
        self.players.current_mut().path.extend(&route[1..])?;
        Ok(ClickOutcome::Routed(route))
    }

    /// Play one frame.
    ///
    /// When the animation is on, extend the walk of the current player by one vertex and return
    /// the outcome. When the walk closes the cycle, the animation stops.
    /// When the walk gets stuck, a new search starts from a random prefix of the stuck walk.
    pub fn tick(&mut self) -> Option<Advance> {
        self.tick_with_rng(&mut rand::rng())
    }

    /// Same as [`Game::tick`], but with the given random number generator.
    pub fn tick_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Advance> {
        if !self.animate {
            return None;
        }
        if self.walker.is_none() {
            if self.others_claimed() {
                warn!("Other players hold vertexes: animation stopped");
                self.set_animate(false);
                return None;
            }
            let seed: Vec<usize> = self.players.current().path.get().to_vec();
            match CycleWalker::new(Rc::clone(&self.graph), &seed) {
                Ok(w) => self.walker = Some(w),
                Err(e) => {
                    warn!("Cannot continue the path {seed:?}: {e}");
                    self.set_animate(false);
                    return None;
                }
            }
        }
        let walker: &mut CycleWalker = self.walker.as_mut()?;
        let outcome: Advance = walker.advance_with_rng(rng);
        self.frames += 1;

        match &outcome {
            Advance::Step(walk) => self.show_walk(walk),
            Advance::Closed(cycle) => {
                self.show_walk(cycle);
                info!(
                    "Cycle found on the {} after {} frames and {} restarts",
                    self.kind, self.frames, self.restarts
                );
                self.set_animate(false);
            }
            Advance::Stuck => {
                // Keep at least one vertex less than the stuck walk
                let len: usize = walker.walk().len();
                let keep: usize = if len > 0 { rng.random_range(0..len) } else { 0 };
                debug!("Walker stuck after {len} vertexes, restarting from {keep}");
                self.walker = Some(walker.from_prefix(keep));
                self.restarts += 1;
            }
        }
        Some(outcome)
    }

    /// Replace the path of the current player with the walk.
    fn show_walk(&mut self, walk: &[usize]) {
        if let Err(e) = self.players.current_mut().path.assign(walk) {
            warn!("Cannot display the walk {walk:?}: {e}");
            self.set_animate(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn click_follows_the_click_policy() {
        let mut game = Game::new(Polyhedron::Cube);
        assert_eq!(game.click(0), Ok(ClickOutcome::Started(0)));
        assert_eq!(game.click(1), Ok(ClickOutcome::Stepped(1)));
        assert_eq!(game.click(2), Ok(ClickOutcome::Stepped(2)));
        assert_eq!(game.click(0), Ok(ClickOutcome::Switched));
        assert_eq!(game.players.current().path.get(), &[2, 1, 0]);
        assert_eq!(game.click(1), Ok(ClickOutcome::Rewound(1)));
        assert_eq!(game.players.current().path.get(), &[2, 1]);
    }

    #[test]
    fn click_on_distant_vertex_routes_to_it() {
        let mut game = Game::new(Polyhedron::Dodecahedron);
        game.click(0).unwrap();
        game.click(1).unwrap();
        let outcome: ClickOutcome = game.click(12).unwrap();
        let route: Vec<usize> = match outcome {
            ClickOutcome::Routed(r) => r,
            other => panic!("Unexpected {other:?}"),
        };
        assert_eq!(route.first(), Some(&1));
        assert_eq!(route.last(), Some(&12));
        assert!(!route.contains(&0));
        let path = &game.players.current().path;
        assert_eq!(path.head(), Some(12));
        assert_eq!(path.len(), route.len() + 1);
    }

    #[test]
    fn unreachable_vertex_leaves_path_unchanged() {
        // Cube: the neighbors 1, 3, and 4 of the head 0 are all in the path
        let mut game = Game::new(Polyhedron::Cube);
        game.players
            .current_mut()
            .path
            .assign(&[2, 1, 7, 4, 5, 3, 0])
            .unwrap();
        assert_eq!(game.click(6), Err(GameError::Walk(WalkError::NoSolution)));
        assert_eq!(game.players.current().path.len(), 7);
    }

    #[test]
    fn click_refuses_other_players_vertexes() {
        let mut game = Game::new(Polyhedron::Cube);
        game.click(0).unwrap();
        game.players.add_player();
        game.players.advance_turn();
        assert_eq!(
            game.click(0),
            Err(GameError::Move(InvalidMove::Claimed {
                vertex: 0,
                owner: 0
            }))
        );
        assert_eq!(game.click(9), Err(GameError::Move(InvalidMove::UnknownVertex(9))));
    }

    #[test]
    fn clicking_the_origin_closes_a_full_path() {
        let mut game = Game::new(Polyhedron::Tetrahedron);
        for v in 0..4 {
            game.click(v).unwrap();
        }
        assert_eq!(game.click(0), Ok(ClickOutcome::Closed));
        assert_eq!(game.players.current().path.get(), &[0, 1, 2, 3, 0]);
        assert!(game.found_solution());
    }

    #[test]
    fn full_path_away_from_origin_switches_instead_of_closing() {
        // Octahedron: 0-1-2-4-3-5 visits every vertex, and 5 is not adjacent to 0
        let mut game = Game::new(Polyhedron::Octahedron);
        for v in [0, 1, 2, 4, 3, 5] {
            game.click(v).unwrap();
        }
        assert_eq!(game.click(0), Ok(ClickOutcome::Switched));
        assert_eq!(game.players.current().path.get(), &[5, 3, 4, 2, 1, 0]);
        assert!(!game.found_solution());
    }

    #[test]
    fn animation_refused_while_other_players_hold_vertexes() {
        let mut game = Game::new(Polyhedron::Cube);
        game.click(0).unwrap();
        game.players.add_player();
        game.players.advance_turn();
        game.set_animate(true);
        assert!(!game.is_animating());
        assert_eq!(game.tick(), None);
        assert!(!game.toggle_animate());

        // Once the other path is cleared, the game can play on its own again
        game.players.reset();
        assert!(game.toggle_animate());
        assert!(game.tick().is_some());
        assert_eq!(game.players.current().id(), 1);
        assert_eq!(game.players.current().path.len(), 1);
    }

    #[test]
    fn ticks_do_nothing_without_animation() {
        let mut game = Game::new(Polyhedron::Octahedron);
        assert_eq!(game.tick(), None);
        assert_eq!(game.frames(), 0);
        assert!(game.toggle_animate());
        assert!(!game.toggle_animate());
    }

    #[test]
    fn animation_finds_a_cycle() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::new(Polyhedron::Icosahedron);
        game.set_animate(true);
        while !game.found_solution() {
            assert!(game.tick_with_rng(&mut rng).is_some());
            assert!(game.frames() < 100_000);
        }
        assert!(!game.is_animating());
        assert_eq!(game.tick_with_rng(&mut rng), None);
    }

    #[test]
    fn click_stops_animation() {
        let mut game = Game::new(Polyhedron::Cube);
        game.set_animate(true);
        game.tick();
        let head: usize = game.players.current().path.head().unwrap();
        game.click(head).unwrap();
        assert!(!game.is_animating());
    }

    #[test]
    fn next_graph_cycles_and_resets() {
        let mut game = Game::new(Polyhedron::Cuboctahedron);
        game.click(3).unwrap();
        assert_eq!(game.next_graph(), Polyhedron::Tetrahedron);
        assert_eq!(game.graph().num_vertexes(), 4);
        assert!(game.players.current().is_new());
        game.click(1).unwrap();
        game.reset();
        assert_eq!(game.kind(), Polyhedron::Tetrahedron);
        assert!(game.players.stepped().is_empty());
    }
}
