/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command line lets developers exercise the engine without a user interface: it lists the
//! polyhedra, lets the game play on its own until it finds Hamiltonian cycles, and routes a head
//! to a distant vertex.
//!
//! # Examples
//!
//! List the available polyhedra:
//!
//! ```
//! $ platoloop --ls
//! tetrahedron (4 vertexes, 6 edges)
//! cube (8 vertexes, 12 edges)
//! ...
//! ```
//!
//! Find two cycles on the tetrahedron:
//!
//! ```
//! $ platoloop -g tetrahedron -c 2
//! [2, 0, 1, 3, 2]
//! [1, 3, 0, 2, 1]
//! ```

use clap::Parser;
use log::debug;
use serde::Serialize;
use std::collections::HashSet;
use std::env;
use std::time::Instant;

use platoloop::config::{COPYRIGHT_NOTICE, DEFAULT_MAX_FRAMES};
use platoloop::game::Game;
use platoloop::graph::Graph;
use platoloop::graph::catalog::Polyhedron;
use platoloop::search::cycle_walker::Advance;
use platoloop::search::walk;

/// Trace Hamiltonian cycles on the skeletons of the Platonic solids.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the polyhedra
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Polyhedron to play on
    #[arg(value_enum, short, long)]
    graph: Option<Polyhedron>,

    /// Number of cycles to find
    #[arg(short, long, default_value_t = 1, requires = "graph")]
    count: usize,

    /// Maximum number of animation frames for each cycle
    #[arg(short, long, default_value_t = DEFAULT_MAX_FRAMES, requires = "graph")]
    max_frames: usize,

    /// Print every animation frame
    #[arg(short, long, default_value_t = false, requires = "graph")]
    frames: bool,

    /// Print a random route between two vertexes instead of looking for cycles
    #[arg(short, long, num_args = 2, value_names = ["FROM", "TO"], requires = "graph")]
    route: Option<Vec<usize>>,

    /// Print the results in JSON format
    #[arg(short, long, default_value_t = false, requires = "graph")]
    json: bool,

    /// Print some statistics after finding the cycles
    #[arg(short, long, default_value_t = false, requires = "graph")]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Result of one self-playing game.
#[derive(Serialize, Debug)]
struct CycleReport {
    /// Polyhedron.
    graph: Polyhedron,

    /// Hamiltonian cycle, or `None` if the frame budget ran out.
    cycle: Option<Vec<usize>>,

    /// Number of animation frames.
    frames: usize,

    /// Number of times the search got stuck and restarted.
    restarts: usize,

    /// Duration in seconds.
    duration: f32,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the polyhedra
    //
    if args.ls {
        for p in Polyhedron::ALL {
            let graph: Graph = p.graph();
            println!(
                "{p} ({} vertexes, {} edges)",
                graph.num_vertexes(),
                graph.num_edges()
            );
        }
        return 0;
    }

    let kind: Polyhedron = match args.graph {
        Some(p) => p,
        None => {
            eprintln!("Nothing to do. Use --ls to list the polyhedra, or --graph to play on one.");
            return 2;
        }
    };

    if let Some(ends) = &args.route {
        return print_route(kind, ends[0], ends[1], args.json);
    }

    //
    // Let the game play on its own
    //
    let mut reports: Vec<CycleReport> = Vec::with_capacity(args.count);
    for i in 0..args.count {
        debug!("Iteration {i}");
        let report: CycleReport = play(kind, args.max_frames, args.frames);

        if let Some(cycle) = &report.cycle {
            // Verify that the cycle visits every vertex once
            let n: usize = kind.num_vertexes();
            let distinct: HashSet<usize> = cycle.iter().copied().collect();
            if cycle.len() != n + 1 || distinct.len() != n || cycle.first() != cycle.last() {
                eprintln!("Invalid cycle: {cycle:?}");
                panic!("Bug: the self-playing search returned an invalid cycle");
            }
            if !args.json {
                println!("{cycle:?}");
            }
        } else if !args.json {
            eprintln!("No cycle found after {} frames", report.frames);
        }
        reports.push(report);
    }

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot serialize the results: {e}");
                return 1;
            }
        }
    }

    // Print some stats
    if args.summary && !reports.is_empty() {
        let count: usize = reports.len();
        let total: f32 = reports.iter().map(|r| r.duration).sum();
        let max: f32 = reports.iter().map(|r| r.duration).fold(0.0, f32::max);
        let frames: usize = reports.iter().map(|r| r.frames).sum();
        let restarts: usize = reports.iter().map(|r| r.restarts).sum();
        let errors: usize = reports.iter().filter(|r| r.cycle.is_none()).count();
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
    average frames = {}
  average restarts = {}
            errors = {}",
            total,
            total / count as f32,
            max,
            frames / count,
            restarts / count,
            errors
        );
    }

    if reports.iter().any(|r| r.cycle.is_none()) {
        1
    } else {
        0
    }
}

/// Run a self-playing game until it finds a cycle or exhausts the frame budget.
fn play(kind: Polyhedron, max_frames: usize, print_frames: bool) -> CycleReport {
    let start: Instant = Instant::now();
    let mut game: Game = Game::new(kind);

    game.set_animate(true);
    while !game.found_solution() && game.frames() < max_frames {
        match game.tick() {
            Some(Advance::Step(walk)) | Some(Advance::Closed(walk)) => {
                if print_frames {
                    println!("{walk:?}");
                }
            }
            Some(Advance::Stuck) => {
                if print_frames {
                    println!("stuck");
                }
            }
            None => break,
        }
    }

    CycleReport {
        graph: kind,
        cycle: if game.found_solution() {
            Some(game.players.current().path.get().to_vec())
        } else {
            None
        },
        frames: game.frames(),
        restarts: game.restarts(),
        duration: start.elapsed().as_secs_f32(),
    }
}

/// Print a random route between two vertexes, using every vertex of the graph.
fn print_route(kind: Polyhedron, from: usize, to: usize, json: bool) -> u8 {
    let graph: Graph = kind.graph();

    match walk::walk(&graph, from, to, &HashSet::new(), false) {
        Ok(route) => {
            if json {
                match serde_json::to_string(&route) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Cannot serialize the route: {e}");
                        return 1;
                    }
                }
            } else {
                println!("{route:?}");
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {kind}: {e}");
            1
        }
    }
}
