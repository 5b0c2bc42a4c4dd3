//! Cubie-level cube representation: corner/edge permutation and orientation,
//! their group composition, and the `verify()` legality check.

use crate::error::Error;
use crate::moves::{Move, ALL_BASIC_MOVE_CUBES};

/// The eight corner slots, fixed order used throughout the crate.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

pub const ALL_CORNERS: [Corner; 8] = [
    Corner::URF,
    Corner::UFL,
    Corner::ULB,
    Corner::UBR,
    Corner::DFR,
    Corner::DLF,
    Corner::DBL,
    Corner::DRB,
];

/// The twelve edge slots, fixed order used throughout the crate.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

pub const ALL_EDGES: [Edge; 12] = [
    Edge::UR,
    Edge::UF,
    Edge::UL,
    Edge::UB,
    Edge::DR,
    Edge::DF,
    Edge::DL,
    Edge::DB,
    Edge::FR,
    Edge::FL,
    Edge::BL,
    Edge::BR,
];

/// A cube state at the cubie level: which piece sits in each slot, and how
/// that piece is twisted/flipped relative to its home orientation.
///
/// `cp[i]` is the corner currently occupying slot `i`; `co[i]` is that
/// corner's orientation (0, 1 or 2). `ep`/`eo` are the edge analogues with
/// orientation in {0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubieCube {
    pub cp: [Corner; 8],
    pub co: [u8; 8],
    pub ep: [Edge; 12],
    pub eo: [u8; 12],
}

impl Default for CubieCube {
    fn default() -> Self {
        CubieCube {
            cp: ALL_CORNERS,
            co: [0; 8],
            ep: ALL_EDGES,
            eo: [0; 12],
        }
    }
}

impl CubieCube {
    /// Composes `self` with `other`, applying `other` after `self` (i.e.
    /// `self.multiply(other)` is the state reached by performing `other`'s
    /// moves on a cube already in state `self`).
    pub fn multiply(&self, other: &CubieCube) -> CubieCube {
        let mut result = *self;
        result.corner_multiply(other);
        result.edge_multiply(other);
        result
    }

    pub fn corner_multiply(&mut self, other: &CubieCube) {
        let mut cp = [Corner::URF; 8];
        let mut co = [0u8; 8];
        for i in 0..8 {
            let src = other.cp[i] as usize;
            cp[i] = self.cp[src];
            co[i] = (self.co[src] + other.co[i]) % 3;
        }
        self.cp = cp;
        self.co = co;
    }

    pub fn edge_multiply(&mut self, other: &CubieCube) {
        let mut ep = [Edge::UR; 12];
        let mut eo = [0u8; 12];
        for i in 0..12 {
            let src = other.ep[i] as usize;
            ep[i] = self.ep[src];
            eo[i] = (self.eo[src] + other.eo[i]) % 2;
        }
        self.ep = ep;
        self.eo = eo;
    }

    /// Applies a single quarter/half/counter turn by repeated composition
    /// with the basic clockwise-quarter-turn cubie for that move's face.
    pub fn apply_move(&mut self, m: Move) {
        let basic = &ALL_BASIC_MOVE_CUBES[m.face() as usize];
        for _ in 0..m.power() {
            self.corner_multiply(basic);
            self.edge_multiply(basic);
        }
    }

    pub fn apply_moves(&self, moves: &[Move]) -> CubieCube {
        let mut result = *self;
        for &m in moves {
            result.apply_move(m);
        }
        result
    }

    /// The inverse cube state: applying `self` then `self.inverse()` returns
    /// to the solved state.
    pub fn inverse(&self) -> CubieCube {
        let mut cp = [Corner::URF; 8];
        let mut co = [0u8; 8];
        for i in 0..8 {
            let dst = self.cp[i] as usize;
            cp[dst] = ALL_CORNERS[i];
            co[dst] = (3 - self.co[i]) % 3;
        }
        let mut ep = [Edge::UR; 12];
        let mut eo = [0u8; 12];
        for i in 0..12 {
            let dst = self.ep[i] as usize;
            ep[dst] = ALL_EDGES[i];
            eo[dst] = self.eo[i];
        }
        CubieCube { cp, co, ep, eo }
    }

    /// Permutation parity of the corners, 0 (even) or 1 (odd). This is the
    /// `parity` coordinate of [crate::coord]; a legal cube always has
    /// `corner_parity() == edge_parity()`.
    pub fn corner_parity(&self) -> u8 {
        permutation_parity(&self.cp.map(|c| c as u8))
    }

    pub fn edge_parity(&self) -> u8 {
        permutation_parity(&self.ep.map(|e| e as u8))
    }

    /// Checks that this state could arise from scrambling a solved cube.
    ///
    /// Returns the first violated invariant, checked in this order: edge
    /// permutation is a bijection, edge flips sum to an even number, corner
    /// permutation is a bijection, corner twists sum to a multiple of three,
    /// and finally that corner and edge permutation parity agree.
    pub fn verify(&self) -> Result<(), Error> {
        let mut seen_edges = [false; 12];
        for &e in &self.ep {
            let idx = e as usize;
            if seen_edges[idx] {
                return Err(Error::MissingEdge);
            }
            seen_edges[idx] = true;
        }

        let flip_sum: u32 = self.eo.iter().map(|&x| x as u32).sum();
        if flip_sum % 2 != 0 {
            return Err(Error::EdgeFlipParity);
        }

        let mut seen_corners = [false; 8];
        for &c in &self.cp {
            let idx = c as usize;
            if seen_corners[idx] {
                return Err(Error::MissingCorner);
            }
            seen_corners[idx] = true;
        }

        let twist_sum: u32 = self.co.iter().map(|&x| x as u32).sum();
        if twist_sum % 3 != 0 {
            return Err(Error::CornerTwistParity);
        }

        if self.corner_parity() != self.edge_parity() {
            return Err(Error::PermutationParity);
        }

        Ok(())
    }
}

/// Inversion-counting permutation parity, 0 (even) or 1 (odd).
fn permutation_parity(values: &[u8]) -> u8 {
    let n = values.len();
    let mut inversions = 0u32;
    for i in 0..n {
        for j in (i + 1)..n {
            if values[i] > values[j] {
                inversions += 1;
            }
        }
    }
    (inversions % 2) as u8
}
