//! The 18-move alphabet, the six basic quarter-turn cubies it is built from,
//! and the move tables that drive each coordinate's transition under a move.

use std::fmt;
use std::str::FromStr;

use self::Move::*;
use crate::coord;
use crate::cubie::Corner::*;
use crate::cubie::Edge::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::facelet::Color;

/// Layer moves: Up, Right, Front, Down, Left, Back, each clockwise (plain),
/// half-turn (2) or counter-clockwise (3) as seen facing that layer.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

impl Move {
    /// The face this move turns, as a value matching [Color]'s order.
    pub const fn face(&self) -> Color {
        match (*self as usize) / 3 {
            0 => Color::U,
            1 => Color::R,
            2 => Color::F,
            3 => Color::D,
            4 => Color::L,
            _ => Color::B,
        }
    }

    /// How many clockwise quarter turns this move applies: 1, 2 or 3.
    pub const fn power(&self) -> u8 {
        (*self as u8) % 3 + 1
    }

    /// The 0..18 index `3*face + (power - 1)`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(i: usize) -> Move {
        ALL_MOVES_BY_INDEX[i]
    }

    /// Whether this move belongs to the 10-move subgroup H used in phase 2.
    pub const fn is_phase2(&self) -> bool {
        matches!(self.face(), Color::U | Color::D) || self.power() == 2
    }
}

const ALL_MOVES_BY_INDEX: [Move; 18] = [
    U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3,
];

/// Move string as required by the solution output format: the face letter
/// repeated once per quarter turn (`U`, `UU`, `UUU`), no apostrophes or digits.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.face() {
            Color::U => 'U',
            Color::R => 'R',
            Color::F => 'F',
            Color::D => 'D',
            Color::L => 'L',
            Color::B => 'B',
        };
        for _ in 0..self.power() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Human-readable `U`, `U2`, `U'`-style notation, used by [crate::scramble]
/// and by tests/benches; distinct from the solution-string [fmt::Display].
pub fn to_wide_notation(m: Move) -> String {
    match m {
        U3 => "U'".into(), D3 => "D'".into(), R3 => "R'".into(),
        L3 => "L'".into(), F3 => "F'".into(), B3 => "B'".into(),
        other => format!("{other:?}"),
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(U), "U2" => Ok(U2), "U'" => Ok(U3),
            "R" => Ok(R), "R2" => Ok(R2), "R'" => Ok(R3),
            "F" => Ok(F), "F2" => Ok(F2), "F'" => Ok(F3),
            "D" => Ok(D), "D2" => Ok(D2), "D'" => Ok(D3),
            "L" => Ok(L), "L2" => Ok(L2), "L'" => Ok(L3),
            "B" => Ok(B), "B2" => Ok(B2), "B'" => Ok(B3),
            other => Err(Error::InvalidScramble(other.to_owned())),
        }
    }
}

/// The six basic clockwise-quarter-turn cubies, in U, R, F, D, L, B order.
/// Every move is reached by repeated composition with the entry for its face.
pub const ALL_BASIC_MOVE_CUBES: [CubieCube; 6] = [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE];

pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
    co: [2, 0, 0, 1, 1, 0, 0, 2],
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// One transition table per coordinate: `table[18*state + move.index()]` is
/// the coordinate reached from `state` by that move.
pub struct MoveTables {
    pub twist: Vec<u16>,
    pub flip: Vec<u16>,
    pub fr_to_br: Vec<u16>,
    pub urf_to_dlf: Vec<u16>,
    pub ur_to_df: Vec<u16>,
    pub ur_to_ul: Vec<u16>,
    pub ub_to_df: Vec<u16>,
    pub parity: [[u8; 18]; 2],
}

impl MoveTables {
    pub fn new() -> Self {
        MoveTables {
            twist: build_table(crate::constants::N_TWIST, CubieCube::get_twist, CubieCube::set_twist, true, false),
            flip: build_table(crate::constants::N_FLIP, CubieCube::get_flip, CubieCube::set_flip, false, true),
            fr_to_br: build_table(crate::constants::N_FRTOBR, CubieCube::get_fr_to_br, CubieCube::set_fr_to_br, false, true),
            urf_to_dlf: build_table(crate::constants::N_URFTODLF, CubieCube::get_urf_to_dlf, CubieCube::set_urf_to_dlf, true, false),
            ur_to_df: build_table(crate::constants::N_URTODF, CubieCube::get_ur_to_df, CubieCube::set_ur_to_df, false, true),
            ur_to_ul: build_table(crate::constants::N_URTOUL, CubieCube::get_ur_to_ul, CubieCube::set_ur_to_ul, false, true),
            ub_to_df: build_table(crate::constants::N_UBTODF, CubieCube::get_ub_to_df, CubieCube::set_ub_to_df, false, true),
            parity: build_parity_table(),
        }
    }
}

impl Default for MoveTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a move table for one coordinate by, for every representative
/// state, replaying the basic move cubie three times per face and reading
/// the coordinate back off. `use_corners`/`use_edges` pick which half of the
/// cube composition the coordinate depends on.
fn build_table(
    size: usize,
    get: fn(&CubieCube) -> u16,
    set: fn(&mut CubieCube, u16),
    use_corners: bool,
    use_edges: bool,
) -> Vec<u16> {
    let mut table = vec![0u16; size * 18];
    let mut a = CubieCube::default();
    for i in 0..size {
        set(&mut a, i as u16);
        for (face_idx, basic) in ALL_BASIC_MOVE_CUBES.iter().enumerate() {
            for power in 0..3 {
                if use_corners {
                    a.corner_multiply(basic);
                }
                if use_edges {
                    a.edge_multiply(basic);
                }
                table[18 * i + 3 * face_idx + power] = get(&a);
            }
            if use_corners {
                a.corner_multiply(basic);
            }
            if use_edges {
                a.edge_multiply(basic);
            }
        }
    }
    table
}

fn build_parity_table() -> [[u8; 18]; 2] {
    let mut table = [[0u8; 18]; 2];
    for (p, row) in table.iter_mut().enumerate() {
        for m in ALL_MOVES_BY_INDEX {
            row[m.index()] = if m.power() == 2 { p as u8 } else { 1 - p as u8 };
        }
    }
    table
}

// Re-exported so callers reach the coordinate-merge helper through this module too.
pub use coord::{merge_ur_to_ul_ub_to_df, EdgeMergeTable};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn twist_move_table_has_expected_shape() {
        let tables = MoveTables::new();
        assert_eq!(tables.twist.len(), crate::constants::N_TWIST * 18);
        assert_eq!(tables.twist[18 * 0 + Move::U.index()], 0);
    }

    #[test]
    fn four_repeats_of_a_move_is_identity_on_twist() {
        let tables = MoveTables::new();
        let mut state = 0u16;
        for _ in 0..4 {
            state = tables.twist[18 * state as usize + Move::R.index()];
        }
        assert_eq!(state, 0);
    }

    #[test]
    fn parity_toggles_on_quarter_turns_and_holds_on_half_turns() {
        let table = build_parity_table();
        assert_eq!(table[0][Move::U.index()], 1);
        assert_eq!(table[0][Move::U2.index()], 0);
        assert_eq!(table[1][Move::U.index()], 0);
    }
}
