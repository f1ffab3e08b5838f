/*
search.rs

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

//! Random searches over the graph.
//!
//! Two searches drive the automatic moves of the game:
//!
//! * [`walk::walk`] connects the head of a path to a vertex the player clicked, avoiding the
//!   vertexes already claimed.
//!   The search is exhaustive: it fails only when no such route exists.
//!
//! * [`cycle_walker::CycleWalker`] plays the game on its own.
//!   It grows a random self-avoiding walk one vertex per [`cycle_walker::CycleWalker::advance`]
//!   call, until it closes a Hamiltonian cycle or gets stuck.
//!   A stuck walker is discarded and replaced by a new one, usually seeded with part of the
//!   previous walk.
//!   There is no guarantee to find a cycle in bounded time.

pub mod cycle_walker;
pub mod walk;
