/*
engine_integration_test.rs

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

//! Integration tests for the path engine and the random searches, through the public API.

use std::collections::HashSet;
use std::rc::Rc;

use platoloop::game::{ClickOutcome, Game};
use platoloop::graph::Graph;
use platoloop::graph::catalog::{self, CatalogError, Polyhedron};
use platoloop::path::{InvalidMove, Path};
use platoloop::players::PlayerSet;
use platoloop::search::cycle_walker::{Advance, CycleWalker};
use platoloop::search::walk::{self, WalkError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Check the properties of a completed cycle.
fn assert_hamiltonian_cycle(graph: &Graph, cycle: &[usize]) {
    let n: usize = graph.num_vertexes();
    assert_eq!(cycle.len(), n + 1, "{cycle:?}");
    assert_eq!(cycle[0], cycle[n], "{cycle:?}");
    let distinct: HashSet<usize> = cycle[..n].iter().copied().collect();
    assert_eq!(distinct, (0..n).collect::<HashSet<usize>>());
    for w in cycle.windows(2) {
        assert!(graph.is_adjacent(w[0], w[1]), "{cycle:?}");
    }
}

#[test]
fn catalog_lookup() {
    let graph: Graph = catalog::graph("dodecahedron").unwrap();
    assert_eq!(graph.num_vertexes(), 20);
    assert_eq!(
        catalog::graph("sphere"),
        Err(CatalogError::UnknownGraph("sphere".to_string()))
    );
}

#[test]
fn tetrahedron_scenario() {
    let graph: Rc<Graph> = Rc::new(catalog::graph("tetrahedron").unwrap());
    let mut path = Path::from_vertexes(graph, &[0]).unwrap();
    for (v, expected) in [
        (1, vec![0, 1]),
        (2, vec![0, 1, 2]),
        (3, vec![0, 1, 2, 3]),
        (0, vec![0, 1, 2, 3, 0]),
    ] {
        path.step(v).unwrap();
        assert_eq!(path.get(), expected.as_slice());
    }
    assert!(path.is_complete());
}

#[test]
fn step_succeeds_iff_adjacent_and_unused_or_closing() {
    let graph: Rc<Graph> = Rc::new(Polyhedron::Octahedron.graph());
    let mut path = Path::from_vertexes(Rc::clone(&graph), &[0, 1, 2]).unwrap();
    for v in 0..graph.num_vertexes() {
        let mut attempt: Path = path.clone();
        let expected: bool = graph.is_adjacent(2, v) && !path.contains(v);
        assert_eq!(attempt.step(v).is_ok(), expected, "vertex {v}");
        if !expected {
            assert_eq!(attempt, path);
        }
    }

    // 0-1-2-4-3-5 visits everything, and 5 is not adjacent to 0
    path.extend(&[4, 3, 5]).unwrap();
    assert_eq!(
        path.step(0),
        Err(InvalidMove::NotAdjacent { head: 5, vertex: 0 })
    );
    path.rewind(3).unwrap();
    path.switch_head().unwrap();
    assert_eq!(path.get(), &[3, 4, 2, 1, 0]);
    path.step(5).unwrap_err();
    assert_eq!(path.get(), &[3, 4, 2, 1, 0]);
}

#[test]
fn rewind_then_rewind_head_is_idempotent() {
    let graph: Rc<Graph> = Rc::new(Polyhedron::Icosahedron.graph());
    let mut path = Path::from_vertexes(graph, &[6, 1, 2, 3, 4]).unwrap();
    path.rewind(2).unwrap();
    let after: Vec<usize> = path.get().to_vec();
    let head: usize = path.head().unwrap();
    path.rewind(head).unwrap();
    assert_eq!(path.get(), after.as_slice());
    assert_eq!(path.rewind(11), Err(InvalidMove::NotInPath(11)));
    assert_eq!(path.get(), after.as_slice());
}

#[test]
fn switch_head_twice_restores_the_path() {
    let graph: Rc<Graph> = Rc::new(Polyhedron::Dodecahedron.graph());
    let mut path = Path::from_vertexes(graph, &[0, 1, 2, 3, 4, 5]).unwrap();
    let before: Path = path.clone();
    path.switch_head().unwrap();
    assert_ne!(path, before);
    path.switch_head().unwrap();
    assert_eq!(path, before);
}

#[test]
fn walk_avoids_other_players() {
    let graph: Rc<Graph> = Rc::new(Polyhedron::Cuboctahedron.graph());
    let mut players = PlayerSet::new(Rc::clone(&graph));
    players.add_player();
    for v in [0, 1, 2] {
        players.step_current(v).unwrap();
    }
    players.advance_turn();
    players.step_current(11).unwrap();

    let stepped: HashSet<usize> = players.stepped();
    let mut rng = StdRng::seed_from_u64(42);
    for goal in [3, 5, 7, 8] {
        let route: Vec<usize> =
            walk::walk_with_rng(&graph, 11, goal, &stepped, true, &mut rng).unwrap();
        assert_eq!(route.first(), Some(&11));
        assert_eq!(route.last(), Some(&goal));
        for v in &route[1..] {
            assert!(!stepped.contains(v), "{route:?}");
        }
        for w in route.windows(2) {
            assert!(graph.is_adjacent(w[0], w[1]));
        }
    }
}

#[test]
fn walk_without_route_returns_no_solution() {
    // Two squares sharing vertex 3
    let graph: Graph = Graph::build(
        7,
        &[(0, 1), (1, 3), (3, 2), (2, 0), (3, 4), (4, 5), (5, 6), (6, 3)],
    )
    .unwrap();
    let excluded: HashSet<usize> = [3].into_iter().collect();
    for _ in 0..20 {
        assert_eq!(
            walk::walk(&graph, 0, 5, &excluded, true),
            Err(WalkError::NoSolution)
        );
    }
}

#[test]
fn cycle_walker_closes_or_gets_stuck() {
    let mut rng = StdRng::seed_from_u64(2025);
    for p in Polyhedron::ALL {
        let graph: Rc<Graph> = Rc::new(p.graph());
        let n: usize = graph.num_vertexes();
        let mut walker = CycleWalker::new(Rc::clone(&graph), &[]).unwrap();
        let mut extensions: usize = 0;
        loop {
            match walker.advance_with_rng(&mut rng) {
                Advance::Step(_) => {
                    extensions += 1;
                    assert!(extensions <= n, "{p}");
                }
                Advance::Closed(cycle) => {
                    assert_hamiltonian_cycle(&graph, &cycle);
                    break;
                }
                Advance::Stuck => break,
            }
        }
    }
}

#[test]
fn self_playing_game_finds_cycles_on_every_polyhedron() {
    let mut rng = StdRng::seed_from_u64(8);
    for p in Polyhedron::ALL {
        let mut game = Game::new(p);
        game.set_animate(true);
        while !game.found_solution() {
            game.tick_with_rng(&mut rng).unwrap();
            assert!(game.frames() < 1_000_000, "{p}: no cycle found");
        }
        assert_hamiltonian_cycle(game.graph(), game.players.current().path.get());
    }
}

#[test]
fn animation_continues_the_player_path() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut game = Game::new(Polyhedron::Cube);
    game.click(0).unwrap();
    game.click(1).unwrap();
    game.set_animate(true);
    match game.tick_with_rng(&mut rng) {
        Some(Advance::Step(steps)) => {
            assert_eq!(&steps[..2], &[0, 1]);
            assert_eq!(steps.len(), 3);
        }
        outcome => panic!("Unexpected {outcome:?}"),
    }
}

#[test]
fn clicks_complete_a_cycle() {
    let mut game = Game::new(Polyhedron::Cube);
    for v in [0, 1, 2, 3, 5, 6, 7, 4] {
        game.click(v).unwrap();
    }
    assert!(!game.found_solution());
    assert_eq!(game.click(0), Ok(ClickOutcome::Closed));
    assert!(game.found_solution());
    assert_hamiltonian_cycle(game.graph(), game.players.current().path.get());
    assert_eq!(game.players.current().path.get(), &[0, 1, 2, 3, 5, 6, 7, 4, 0]);
}

#[test]
fn clicking_the_origin_too_early_switches_the_ends() {
    let mut game = Game::new(Polyhedron::Tetrahedron);
    for v in [0, 1, 2] {
        game.click(v).unwrap();
    }
    assert_eq!(game.click(0), Ok(ClickOutcome::Switched));
    assert_eq!(game.players.current().path.get(), &[2, 1, 0]);
    assert_eq!(game.click(3), Ok(ClickOutcome::Stepped(3)));
    assert_eq!(game.click(2), Ok(ClickOutcome::Closed));
    assert_eq!(game.players.current().path.get(), &[2, 1, 0, 3, 2]);
    assert!(game.found_solution());
}
