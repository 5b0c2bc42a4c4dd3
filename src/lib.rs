//! # twophase
//!
//! Solves the 3x3x3 Rubik's cube with
//! [Kociemba's two-phase algorithm](http://kociemba.org/cube.htm): phase 1
//! drives an arbitrary scramble into the subgroup
//! `H = <U, D, R2, L2, F2, B2>`, phase 2 finishes the solve using only H's
//! ten moves. Both phases run IDA* guided by precomputed pruning tables.
//!
//! ```
//! use std::time::Duration;
//! use twophase::facelet::FaceCube;
//! use twophase::cubie::CubieCube;
//!
//! let solved = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
//! let cube = CubieCube::try_from(&FaceCube::try_from(solved).unwrap()).unwrap();
//! let solution = twophase::solver::solve(&cube, 25, Duration::from_secs(5)).unwrap();
//! assert!(solution.is_empty());
//! ```

#[macro_use]
extern crate lazy_static;

/// Fixed enumerations and table sizes for the cube group.
pub mod constants;

/// Classic (non-symmetry-reduced) coordinate representation.
pub mod coord;

/// Cubie-level cube representation and group composition.
pub mod cubie;

/// The unified error type for every layer of the crate.
pub mod error;

/// Facelet-level (54-sticker) cube representation.
pub mod facelet;

/// The 18-move alphabet and the per-coordinate move tables.
pub mod moves;

/// Breadth-first pruning tables used to bound both search phases.
pub mod pruning;

/// Parsing/printing move lists and generating random scrambles.
pub mod scramble;

/// The two-phase IDA* solver.
pub mod solver;
