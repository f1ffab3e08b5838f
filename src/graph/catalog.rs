/*
catalog.rs

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

//! Catalog of the polyhedra skeletons.
//!
//! The game cycles through six graphs: the skeletons of the five Platonic solids, plus the
//! cuboctahedron.
//! Every graph is Hamiltonian, so a cycle through all the vertexes always exists.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use strum_macros::FromRepr;

use super::Graph;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum CatalogError {
    /// No graph has the given name.
    UnknownGraph(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::UnknownGraph(name) => write!(f, "unknown graph {name:?}"),
        }
    }
}

impl Error for CatalogError {}

/// Polyhedra available in the game.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(usize)]
pub enum Polyhedron {
    #[default]
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
    Cuboctahedron,
}

impl fmt::Display for Polyhedron {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Skeletons, as (smaller, larger) vertex pairs.

const TETRAHEDRON: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

#[rustfmt::skip]
const CUBE: [(usize, usize); 12] = [
    (0, 1), (0, 3), (0, 4),
    (1, 2), (1, 7),
    (2, 3), (2, 6),
    (3, 5),
    (4, 5), (4, 7),
    (5, 6),
    (6, 7),
];

// Complete graph on six vertexes minus the matching 0-5, 1-4, 2-3.
#[rustfmt::skip]
const OCTAHEDRON: [(usize, usize); 12] = [
    (0, 1), (0, 2), (0, 3), (0, 4),
    (1, 2), (1, 3), (1, 5),
    (2, 4), (2, 5),
    (3, 4), (3, 5),
    (4, 5),
];

// Outer ring 0..19 plus the chords of the LCF notation [10, 7, 4, -4, -7, 10, -4, 7, -7, 4]^2.
#[rustfmt::skip]
const DODECAHEDRON: [(usize, usize); 30] = [
    (0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 8), (8, 9), (9, 10),
    (10, 11), (11, 12), (12, 13), (13, 14), (14, 15), (15, 16), (16, 17), (17, 18), (18, 19),
    (0, 19),
    (0, 10), (1, 8), (2, 6), (3, 19), (4, 17), (5, 15), (7, 14), (9, 13), (11, 18), (12, 16),
];

// Vertex 6 on top of the ring 1-2-3-4-5, vertex 7 below the ring 0-8-9-10-11.
#[rustfmt::skip]
const ICOSAHEDRON: [(usize, usize); 30] = [
    (0, 1), (0, 5), (0, 7), (0, 8), (0, 11),
    (1, 2), (1, 5), (1, 6), (1, 8),
    (2, 3), (2, 6), (2, 8), (2, 9),
    (3, 4), (3, 6), (3, 9), (3, 10),
    (4, 5), (4, 6), (4, 10), (4, 11),
    (5, 6), (5, 11),
    (7, 8), (7, 9), (7, 10), (7, 11),
    (8, 9),
    (9, 10),
    (10, 11),
];

// Line graph of the cube: one vertex per cube edge, in the order of the CUBE array.
#[rustfmt::skip]
const CUBOCTAHEDRON: [(usize, usize); 24] = [
    (0, 1), (0, 2), (1, 2),
    (0, 3), (0, 4), (3, 4),
    (3, 5), (3, 6), (5, 6),
    (1, 5), (1, 7), (5, 7),
    (2, 8), (2, 9), (8, 9),
    (7, 8), (7, 10), (8, 10),
    (6, 10), (6, 11), (10, 11),
    (4, 9), (4, 11), (9, 11),
];

impl Polyhedron {
    /// All the polyhedra, in the order the game cycles through them.
    pub const ALL: [Polyhedron; 6] = [
        Polyhedron::Tetrahedron,
        Polyhedron::Cube,
        Polyhedron::Octahedron,
        Polyhedron::Dodecahedron,
        Polyhedron::Icosahedron,
        Polyhedron::Cuboctahedron,
    ];

    /// Name of the polyhedron, as accepted by [`graph`].
    pub fn name(&self) -> &'static str {
        match self {
            Polyhedron::Tetrahedron => "tetrahedron",
            Polyhedron::Cube => "cube",
            Polyhedron::Octahedron => "octahedron",
            Polyhedron::Dodecahedron => "dodecahedron",
            Polyhedron::Icosahedron => "icosahedron",
            Polyhedron::Cuboctahedron => "cuboctahedron",
        }
    }

    /// Next polyhedron in the cycle. After the last one, the cycle restarts from the first one.
    pub fn next(self) -> Self {
        Self::from_repr((self as usize + 1) % Self::ALL.len()).unwrap_or_default()
    }

    /// Number of vertexes of the skeleton.
    pub fn num_vertexes(&self) -> usize {
        match self {
            Polyhedron::Tetrahedron => 4,
            Polyhedron::Cube => 8,
            Polyhedron::Octahedron => 6,
            Polyhedron::Dodecahedron => 20,
            Polyhedron::Icosahedron => 12,
            Polyhedron::Cuboctahedron => 12,
        }
    }

    fn edge_list(&self) -> &'static [(usize, usize)] {
        match self {
            Polyhedron::Tetrahedron => &TETRAHEDRON,
            Polyhedron::Cube => &CUBE,
            Polyhedron::Octahedron => &OCTAHEDRON,
            Polyhedron::Dodecahedron => &DODECAHEDRON,
            Polyhedron::Icosahedron => &ICOSAHEDRON,
            Polyhedron::Cuboctahedron => &CUBOCTAHEDRON,
        }
    }

    /// Build the skeleton of the polyhedron.
    ///
    /// # Panics
    ///
    /// The method panics if the built-in edge list is malformed.
    pub fn graph(&self) -> Graph {
        match Graph::build(self.num_vertexes(), self.edge_list()) {
            Ok(graph) => graph,
            Err(msg) => panic!("Error: {self}: {msg}"),
        }
    }

    /// Retrieve a polyhedron from its name. The comparison ignores case.
    ///
    /// # Errors
    ///
    /// The method returns [`CatalogError::UnknownGraph`] when no polyhedron has that name.
    pub fn from_name(name: &str) -> Result<Self, CatalogError> {
        <Self as ValueEnum>::from_str(name.trim(), true)
            .map_err(|_| CatalogError::UnknownGraph(name.to_string()))
    }
}

/// Return the skeleton of the named polyhedron.
///
/// # Errors
///
/// The function returns [`CatalogError::UnknownGraph`] for an unrecognized name.
pub fn graph(name: &str) -> Result<Graph, CatalogError> {
    Polyhedron::from_name(name).map(|p| p.graph())
}

/// Names of the graphs in the catalog.
pub fn names() -> Vec<&'static str> {
    Polyhedron::ALL.iter().map(|p| p.name()).collect()
}
