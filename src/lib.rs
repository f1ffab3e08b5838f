/*
lib.rs

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

//! Trace Hamiltonian cycles on the skeletons of the Platonic solids.
//!
//! The player walks from vertex to vertex and wins by coming back to the starting vertex after
//! visiting every other vertex exactly once.
//!
//! * [`graph`] describes the polyhedra skeletons. [`graph::catalog::graph`] returns a skeleton
//!   from its name.
//! * [`path::Path`] is the walk of one player. It validates every move.
//! * [`players::PlayerSet`] groups the players sharing a graph, and the vertexes they claimed.
//! * [`search`] provides the random searches: [`search::walk::walk`] routes the head of a path
//!   to a distant vertex, and [`search::cycle_walker::CycleWalker`] plays the game on its own,
//!   one vertex per frame.
//! * [`game::Game`] is the game in progress, as seen by the user interface.
//!
//! Drawing the polyhedra is the job of the user interface and is not part of this crate.

pub mod config;
pub mod game;
pub mod graph;
pub mod path;
pub mod players;
pub mod search;
