//! Fixed enumerations and table sizes for the 3x3x3 cube group.
//!
//! Corner and edge slots are ordered as in [crate::cubie]; colors and
//! facelets follow the face order U, R, F, D, L, B.

use crate::moves::Move;

/// Number of moves in the 18-move alphabet (6 faces x 3 powers).
pub const N_MOVE: usize = 18;

/// 3^7 possible corner orientations.
pub const N_TWIST: usize = 2187;
/// 2^11 possible edge orientations.
pub const N_FLIP: usize = 2048;
/// C(12, 4) positions of the four slice edges.
pub const N_SLICE: usize = 495;
/// C(12, 4) * 4! sorted positions of the four slice edges.
pub const N_FRTOBR: usize = 11880;
/// C(8, 6) * 6! permutations of the six non-DBL/DRB corners among all 8 corner slots.
pub const N_URFTODLF: usize = 20160;
/// C(8, 6) * 6!, valid only once the slice edges have left the U/D layer (phase 2).
pub const N_URTODF: usize = 20160;
/// C(12, 3) * 3! positions of UR, UF, UL among all 12 edge slots.
pub const N_URTOUL: usize = 1320;
/// C(12, 3) * 3! positions of UB, DR, DF among all 12 edge slots.
pub const N_UBTODF: usize = 1320;
/// Phase-2-reachable sub-range of [N_URTOUL] / [N_UBTODF] (both sets confined to the 8 U/D slots).
pub const N_URTOUL_PHASE2: usize = 336;
/// 8! permutations of the eight U/D edges, valid only in phase 2.
pub const N_UDEDGES: usize = 40320;
/// Permutation parity, 0 (even) or 1 (odd).
pub const N_PARITY: usize = 2;

/// Upper bound on search depth; the stack arrays are sized to this so the
/// lookahead that briefly overshoots the final solution length never overflows.
pub const MAX_STACK: usize = 40;
/// Phase 2 never needs more than this many moves once phase 1 has landed in H.
pub const MAX_PHASE2_DEPTH: usize = 10;

/// All 18 moves, indexed so that `ALL_MOVES[i] as usize == i`.
pub const ALL_MOVES: [Move; N_MOVE] = [
    Move::U,
    Move::U2,
    Move::U3,
    Move::R,
    Move::R2,
    Move::R3,
    Move::F,
    Move::F2,
    Move::F3,
    Move::D,
    Move::D2,
    Move::D3,
    Move::L,
    Move::L2,
    Move::L3,
    Move::B,
    Move::B2,
    Move::B3,
];

/// The 10 moves of the subgroup H = <U, D, R2, L2, F2, B2>, used exclusively
/// in phase 2. Built from [Move::is_phase2] so this list and that predicate
/// can't drift apart.
pub const PHASE2_MOVES: [Move; 10] = phase2_moves();

const fn phase2_moves() -> [Move; 10] {
    let mut result = [Move::U; 10];
    let mut i = 0;
    let mut j = 0;
    while i < ALL_MOVES.len() {
        if ALL_MOVES[i].is_phase2() {
            result[j] = ALL_MOVES[i];
            j += 1;
        }
        i += 1;
    }
    result
}

/// Binomial coefficients C(n, k) for n, k <= 12, built once and reused by the
/// combinatorial-number-system coordinate packers in [crate::coord].
pub fn binomial(n: usize, k: usize) -> usize {
    lazy_static! {
        static ref CNK: Vec<Vec<usize>> = {
            let n_max = 13;
            let mut c = vec![vec![0usize; n_max]; n_max];
            for row in c.iter_mut() {
                row[0] = 1;
            }
            for i in 1..n_max {
                for j in 1..n_max {
                    c[i][j] = c[i - 1][j - 1] + if j <= i - 1 { c[i - 1][j] } else { 0 };
                }
            }
            c
        };
    }
    if k >= CNK.len() || n >= CNK.len() {
        return 0;
    }
    if k > n {
        0
    } else {
        CNK[n][k]
    }
}
