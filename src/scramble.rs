//! Parsing/printing whitespace-separated move lists (`R U R' U' ...`) and
//! generating random scrambles for tests and benchmarks.

use std::str::FromStr;

use rand::Rng;

use crate::constants::ALL_MOVES;
use crate::error::Error;
use crate::moves::{to_wide_notation, Move};

pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

pub fn scramble_to_str(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|&m| to_wide_notation(m))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A random sequence of `len` moves with no move immediately followed by one
/// on the same face or its opposite, so it cannot cancel itself down.
pub fn random_scramble(len: usize) -> Vec<Move> {
    let mut rng = rand::thread_rng();
    let mut moves = Vec::with_capacity(len);
    let mut last_face = None;
    while moves.len() < len {
        let candidate = ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())];
        let face = candidate.face();
        if let Some(last) = last_face {
            if face as usize == last {
                continue;
            }
        }
        last_face = Some(face as usize);
        moves.push(candidate);
    }
    moves
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn scramble_from_str_parses_wide_notation() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str("R U R' U' F L' D' B2 R' U'").unwrap(), m);
    }

    #[test]
    fn scramble_to_str_reproduces_wide_notation() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_to_str(&m), "R U R' U' F L' D' B2 R' U'");
    }

    #[test]
    fn invalid_token_is_rejected() {
        assert!(scramble_from_str("R U X").is_err());
    }

    #[test]
    fn random_scramble_has_requested_length() {
        let moves = random_scramble(25);
        assert_eq!(moves.len(), 25);
    }
}
