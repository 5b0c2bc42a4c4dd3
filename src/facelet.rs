//! Facelet-level (54-sticker) cube representation and its reduction to and
//! from the cubie level.

use std::fmt;

use crate::cubie::{Corner, CubieCube, Edge, ALL_CORNERS, ALL_EDGES};
use crate::error::Error;

/// One of the six face colors, in the `URFDLB` letter alphabet used by both
/// face identity and sticker color (they share one namespace on a solved
/// cube, since each face's stickers are all that face's own color).
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    U,
    R,
    F,
    D,
    L,
    B,
}

pub const ALL_COLORS: [Color; 6] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];

impl Color {
    fn letter(self) -> char {
        match self {
            Color::U => 'U',
            Color::R => 'R',
            Color::F => 'F',
            Color::D => 'D',
            Color::L => 'L',
            Color::B => 'B',
        }
    }

    fn from_letter(c: char) -> Option<Color> {
        match c {
            'U' => Some(Color::U),
            'R' => Some(Color::R),
            'F' => Some(Color::F),
            'D' => Some(Color::D),
            'L' => Some(Color::L),
            'B' => Some(Color::B),
            _ => None,
        }
    }
}

/// Facelet indices for the three stickers of each corner slot, ordered so
/// that rotating the triple matches [CORNER_COLOR] at the piece's orientation.
const CORNER_FACELET: [[usize; 3]; 8] = [
    [8, 9, 20],
    [6, 18, 38],
    [0, 36, 47],
    [2, 45, 11],
    [29, 26, 15],
    [27, 17, 24],
    [33, 53, 42],
    [35, 44, 51],
];

/// The canonical color triple of each corner piece, in [CORNER_FACELET] order.
const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

/// Facelet indices for the two stickers of each edge slot.
const EDGE_FACELET: [[usize; 2]; 12] = [
    [5, 10],
    [7, 19],
    [3, 37],
    [1, 46],
    [32, 16],
    [28, 25],
    [30, 43],
    [34, 52],
    [23, 12],
    [21, 41],
    [50, 39],
    [48, 14],
];

/// The canonical color pair of each edge piece, in [EDGE_FACELET] order.
const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::R],
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::D, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];

const CENTER_FACELET: [usize; 6] = [4, 13, 22, 31, 40, 49];

/// A cube state as 54 facelet colors, in U(0..9) R(9..18) F(18..27) D(27..36)
/// L(36..45) B(45..54) order, each face read row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCube {
    pub f: [Color; 54],
}

impl Default for FaceCube {
    fn default() -> Self {
        let mut f = [Color::U; 54];
        for (face, &color) in ALL_COLORS.iter().enumerate() {
            for sticker in f.iter_mut().skip(face * 9).take(9) {
                *sticker = color;
            }
        }
        FaceCube { f }
    }
}

impl TryFrom<&str> for FaceCube {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 54 {
            return Err(Error::InvalidFaceletString);
        }
        let mut f = [Color::U; 54];
        for (i, &c) in chars.iter().enumerate() {
            f[i] = Color::from_letter(c).ok_or(Error::InvalidFaceletString)?;
        }
        for (face, &color) in ALL_COLORS.iter().enumerate() {
            if f[CENTER_FACELET[face]] != color {
                return Err(Error::InvalidFaceletString);
            }
        }
        Ok(FaceCube { f })
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.f {
            write!(out, "{}", color.letter())?;
        }
        Ok(())
    }
}

impl TryFrom<&CubieCube> for FaceCube {
    type Error = Error;

    fn try_from(cc: &CubieCube) -> Result<Self, Self::Error> {
        let mut face = FaceCube::default();
        for slot in 0..8 {
            let piece = cc.cp[slot] as usize;
            let ori = cc.co[slot] as usize;
            for k in 0..3 {
                face.f[CORNER_FACELET[slot][(ori + k) % 3]] = CORNER_COLOR[piece][k];
            }
        }
        for slot in 0..12 {
            let piece = cc.ep[slot] as usize;
            let ori = cc.eo[slot] as usize;
            for k in 0..2 {
                face.f[EDGE_FACELET[slot][(ori + k) % 2]] = EDGE_COLOR[piece][k];
            }
        }
        Ok(face)
    }
}

impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;

    /// Identifies each corner/edge piece from its sticker colors by matching
    /// every cyclic rotation of the slot's facelets against the canonical
    /// color table; the rotation that matches gives both the piece identity
    /// and its orientation.
    fn try_from(face: &FaceCube) -> Result<Self, Self::Error> {
        let mut cp = [Corner::URF; 8];
        let mut co = [0u8; 8];
        for slot in 0..8 {
            let idx = CORNER_FACELET[slot];
            let colors = [face.f[idx[0]], face.f[idx[1]], face.f[idx[2]]];
            let mut identified = false;
            for ori in 0..3 {
                let rotated = [colors[ori % 3], colors[(ori + 1) % 3], colors[(ori + 2) % 3]];
                if let Some(piece) = CORNER_COLOR.iter().position(|&c| c == rotated) {
                    cp[slot] = ALL_CORNERS[piece];
                    co[slot] = ori as u8;
                    identified = true;
                    break;
                }
            }
            if !identified {
                return Err(Error::InvalidFaceletValue);
            }
        }

        let mut ep = [Edge::UR; 12];
        let mut eo = [0u8; 12];
        for slot in 0..12 {
            let idx = EDGE_FACELET[slot];
            let c0 = face.f[idx[0]];
            let c1 = face.f[idx[1]];
            let mut identified = false;
            for (piece, &[a, b]) in EDGE_COLOR.iter().enumerate() {
                if c0 == a && c1 == b {
                    ep[slot] = ALL_EDGES[piece];
                    eo[slot] = 0;
                    identified = true;
                    break;
                }
                if c0 == b && c1 == a {
                    ep[slot] = ALL_EDGES[piece];
                    eo[slot] = 1;
                    identified = true;
                    break;
                }
            }
            if !identified {
                return Err(Error::InvalidFaceletValue);
            }
        }

        let cc = CubieCube { cp, co, ep, eo };
        cc.verify()?;
        Ok(cc)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solved_facelet_round_trips_through_cubie() {
        let face = FaceCube::default();
        let cc = CubieCube::try_from(&face).unwrap();
        assert_eq!(cc, CubieCube::default());
        let back = FaceCube::try_from(&cc).unwrap();
        assert_eq!(back, face);
    }

    #[test]
    fn scrambled_cube_round_trips_through_facelet() {
        use crate::moves::Move;
        let mut cc = CubieCube::default();
        for m in [Move::R, Move::U, Move::R3, Move::U3, Move::F2, Move::L] {
            cc.apply_move(m);
        }
        let face = FaceCube::try_from(&cc).unwrap();
        let back = CubieCube::try_from(&face).unwrap();
        assert_eq!(cc, back);
    }

    #[test]
    fn wrong_length_string_is_rejected() {
        assert!(FaceCube::try_from("short").is_err());
    }

    #[test]
    fn bad_center_layout_is_rejected() {
        let mut chars: Vec<char> = FaceCube::default().to_string().chars().collect();
        chars.swap(4, 31); // swap the U and D centers
        let s: String = chars.into_iter().collect();
        assert!(FaceCube::try_from(s.as_str()).is_err());
    }
}
