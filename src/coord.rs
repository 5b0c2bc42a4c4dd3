//! Classic (non-symmetry-reduced) Kociemba coordinates and the combinatorial
//! packing they are built from.
//!
//! Every coordinate getter/setter pair is a bijection between a contiguous
//! range of small integers and the values of one projection of a
//! [CubieCube]; `set_x` leaves every field unrelated to `x` in an
//! unspecified but valid-cubie state, which is fine since callers only ever
//! use it to build move tables one coordinate at a time.

use crate::constants::binomial;
use crate::cubie::{Corner, CubieCube, Edge};

impl CubieCube {
    /// Base-3 digits of `co[0..6]`; `co[7]` is whatever makes the total a
    /// multiple of 3.
    pub fn get_twist(&self) -> u16 {
        let mut ret: u16 = 0;
        for i in 0..7 {
            ret = 3 * ret + self.co[i] as u16;
        }
        ret
    }

    pub fn set_twist(&mut self, mut twist: u16) {
        let mut sum = 0u16;
        for i in (0..7).rev() {
            let digit = (twist % 3) as u8;
            self.co[i] = digit;
            sum += digit as u16;
            twist /= 3;
        }
        self.co[7] = ((3 - sum % 3) % 3) as u8;
    }

    /// Base-2 digits of `eo[0..11]`; `eo[11]` makes the total even.
    pub fn get_flip(&self) -> u16 {
        let mut ret: u16 = 0;
        for i in 0..11 {
            ret = 2 * ret + self.eo[i] as u16;
        }
        ret
    }

    pub fn set_flip(&mut self, mut flip: u16) {
        let mut sum = 0u16;
        for i in (0..11).rev() {
            let digit = (flip % 2) as u8;
            self.eo[i] = digit;
            sum += digit as u16;
            flip /= 2;
        }
        self.eo[11] = ((2 - sum % 2) % 2) as u8;
    }

    /// Sorted positions of the four slice edges FR, FL, BL, BR among all 12
    /// edge slots: `24 * (position combination rank) + (relative permutation rank)`.
    pub fn get_fr_to_br(&self) -> u16 {
        let is_slice = |e: Edge| matches!(e, Edge::FR | Edge::FL | Edge::BL | Edge::BR);
        let rel = |e: Edge| e as u8 - Edge::FR as u8;
        let (comb, perm) = encode_subset(&self.ep, is_slice, rel);
        (24 * comb + perm) as u16
    }

    pub fn set_fr_to_br(&mut self, coord: u16) {
        let comb = coord as usize / 24;
        let perm = coord as usize % 24;
        let slice_edges = [Edge::FR, Edge::FL, Edge::BL, Edge::BR];
        let others = [
            Edge::UR,
            Edge::UF,
            Edge::UL,
            Edge::UB,
            Edge::DR,
            Edge::DF,
            Edge::DL,
            Edge::DB,
        ];
        self.ep = decode_subset(comb, perm, 12, 4, &slice_edges, &others, Edge::UR);
    }

    /// Coarse (unsorted) slice coordinate: which 4 of the 12 edge slots hold
    /// a slice edge, ignoring their relative order.
    pub fn get_slice(&self) -> u16 {
        Self::slice_from_fr_to_br(self.get_fr_to_br())
    }

    /// Drops the relative-permutation digit a sorted [CubieCube::get_fr_to_br]
    /// coordinate carries, leaving only which 4 of the 12 edge slots hold a
    /// slice edge. Shared by the move-table builder and the pruning tables,
    /// which both start from an already-computed `fr_to_br` value rather
    /// than a live cube.
    pub fn slice_from_fr_to_br(fr_to_br: u16) -> u16 {
        fr_to_br / 24
    }

    /// Permutation of the six non-DBL/DRB corners among all 8 corner slots:
    /// `720 * (position combination rank) + (relative permutation rank)`.
    pub fn get_urf_to_dlf(&self) -> u16 {
        let is_member = |c: Corner| (c as u8) < 6;
        let rel = |c: Corner| c as u8;
        let (comb, perm) = encode_subset(&self.cp, is_member, rel);
        (720 * comb + perm) as u16
    }

    pub fn set_urf_to_dlf(&mut self, coord: u16) {
        let comb = coord as usize / 720;
        let perm = coord as usize % 720;
        let members = [
            Corner::URF,
            Corner::UFL,
            Corner::ULB,
            Corner::UBR,
            Corner::DFR,
            Corner::DLF,
        ];
        let others = [Corner::DBL, Corner::DRB];
        self.cp = decode_subset(comb, perm, 8, 6, &members, &others, Corner::URF);
    }

    /// Permutation of UR, UF, UL, UB, DR, DF among the 8 U/D edge slots
    /// (slots 0..7). Meaningful only once the slice edges occupy slots
    /// 8..11 exclusively, i.e. once the cube has reached subgroup H.
    pub fn get_ur_to_df(&self) -> u16 {
        let is_member = |e: Edge| (e as u8) < 6;
        let rel = |e: Edge| e as u8;
        let (comb, perm) = encode_subset_bounded(&self.ep[0..8], is_member, rel, 8, 6);
        (720 * comb + perm) as u16
    }

    pub fn set_ur_to_df(&mut self, coord: u16) {
        let comb = coord as usize / 720;
        let perm = coord as usize % 720;
        let members = [Edge::UR, Edge::UF, Edge::UL, Edge::UB, Edge::DR, Edge::DF];
        let others = [Edge::DL, Edge::DB];
        let ud_edges: [Edge; 8] = decode_subset(comb, perm, 8, 6, &members, &others, Edge::UR);
        self.ep[0..8].copy_from_slice(&ud_edges);
        self.ep[8..12].copy_from_slice(&[Edge::FR, Edge::FL, Edge::BL, Edge::BR]);
    }

    /// Positions of UR, UF, UL among all 12 edge slots.
    pub fn get_ur_to_ul(&self) -> u16 {
        let is_member = |e: Edge| matches!(e, Edge::UR | Edge::UF | Edge::UL);
        let rel = |e: Edge| e as u8;
        let (comb, perm) = encode_subset(&self.ep, is_member, rel);
        (6 * comb + perm) as u16
    }

    pub fn set_ur_to_ul(&mut self, coord: u16) {
        let comb = coord as usize / 6;
        let perm = coord as usize % 6;
        let members = [Edge::UR, Edge::UF, Edge::UL];
        let others = [
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
        self.ep = decode_subset(comb, perm, 12, 3, &members, &others, Edge::UR);
    }

    /// Positions of UB, DR, DF among all 12 edge slots.
    pub fn get_ub_to_df(&self) -> u16 {
        let is_member = |e: Edge| matches!(e, Edge::UB | Edge::DR | Edge::DF);
        let rel = |e: Edge| e as u8 - Edge::UB as u8;
        let (comb, perm) = encode_subset(&self.ep, is_member, rel);
        (6 * comb + perm) as u16
    }

    pub fn set_ub_to_df(&mut self, coord: u16) {
        let comb = coord as usize / 6;
        let perm = coord as usize % 6;
        let members = [Edge::UB, Edge::DR, Edge::DF];
        let others = [
            Edge::UR,
            Edge::UF,
            Edge::UL,
            Edge::DL,
            Edge::DB,
            Edge::FR,
            Edge::FL,
            Edge::BL,
            Edge::BR,
        ];
        self.ep = decode_subset(comb, perm, 12, 3, &members, &others, Edge::UR);
    }
}

/// Rank of the ascending `m`-subset of `{0, .., n-1}` given by `positions`,
/// via the combinatorial number system: `sum_i C(positions[i], i + 1)`.
fn rank_subset(positions: &[usize]) -> usize {
    positions
        .iter()
        .enumerate()
        .map(|(i, &p)| binomial(p, i + 1))
        .sum()
}

/// Inverse of [rank_subset]: the ascending `m`-subset of `{0, .., n-1}` with
/// the given rank.
fn unrank_subset(mut rank: usize, n: usize, m: usize) -> Vec<usize> {
    let mut positions = vec![0usize; m];
    for i in (0..m).rev() {
        let mut p = n - 1;
        while binomial(p, i + 1) > rank {
            p -= 1;
        }
        positions[i] = p;
        rank -= binomial(p, i + 1);
    }
    positions
}

/// Lehmer-code-style rank of a permutation of `0..m` via repeated
/// rotate-left-until-sorted, mirroring the classic Kociemba packing scheme.
fn rank_perm(perm: &[u8]) -> usize {
    let m = perm.len();
    let mut perm = perm.to_vec();
    let mut rank = 0usize;
    for j in (1..m).rev() {
        let mut k = 0usize;
        while perm[j] != j as u8 {
            rotate_left(&mut perm, j);
            k += 1;
        }
        rank = (j + 1) * rank + k;
    }
    rank
}

fn unrank_perm(mut rank: usize, m: usize) -> Vec<u8> {
    let mut perm: Vec<u8> = (0..m as u8).collect();
    for j in 1..m {
        let modulus = j + 1;
        let k = rank % modulus;
        rank /= modulus;
        for _ in 0..k {
            rotate_right(&mut perm, j);
        }
    }
    perm
}

fn rotate_left(arr: &mut [u8], r: usize) {
    let tmp = arr[0];
    arr.copy_within(1..=r, 0);
    arr[r] = tmp;
}

fn rotate_right(arr: &mut [u8], r: usize) {
    let tmp = arr[r];
    arr.copy_within(0..r, 1);
    arr[0] = tmp;
}

/// Scans `pieces` in slot order, collecting the slots holding a piece that
/// `is_member` accepts and their relative identity (via `rel`), then returns
/// `(position combination rank, permutation rank)`.
fn encode_subset<P: Copy>(
    pieces: &[P],
    is_member: impl Fn(P) -> bool,
    rel: impl Fn(P) -> u8,
) -> (usize, usize) {
    encode_subset_bounded(pieces, is_member, rel, pieces.len(), 0)
}

/// As [encode_subset] but scanning only the first `n` slots of `pieces` and
/// asserting the member count equals `m` (0 disables the assertion).
fn encode_subset_bounded<P: Copy>(
    pieces: &[P],
    is_member: impl Fn(P) -> bool,
    rel: impl Fn(P) -> u8,
    n: usize,
    m: usize,
) -> (usize, usize) {
    let mut positions = Vec::new();
    let mut perm = Vec::new();
    for (slot, &piece) in pieces.iter().enumerate().take(n) {
        if is_member(piece) {
            positions.push(slot);
            perm.push(rel(piece));
        }
    }
    debug_assert!(m == 0 || positions.len() == m);
    (rank_subset(&positions), rank_perm(&perm))
}

/// Builds a full slot array of `N` pieces from a combination/permutation
/// rank pair: `members[i]` occupies the `i`-th (ascending) chosen slot in
/// permuted order, and `others` fill the remaining slots in ascending order.
/// `N` is the size of the slot domain (8 for corners, 12 for edges).
fn decode_subset<P: Copy, const N: usize>(
    comb: usize,
    perm: usize,
    n: usize,
    m: usize,
    members: &[P],
    others: &[P],
    filler: P,
) -> [P; N] {
    let positions = unrank_subset(comb, n, m);
    let order = unrank_perm(perm, m);
    let mut result = [filler; N];
    let mut taken = vec![false; n];
    for (i, &slot) in positions.iter().enumerate() {
        result[slot] = members[order[i] as usize];
        taken[slot] = true;
    }
    let mut other_iter = others.iter();
    for (slot, &is_taken) in taken.iter().enumerate() {
        if !is_taken {
            result[slot] = *other_iter.next().expect("others has n - m entries");
        }
    }
    result
}

/// Decodes an `n`-slot combination/permutation pair into a sparse 12-slot
/// array (only the chosen slots set), used by [merge_ur_to_ul_ub_to_df].
fn decode_sparse(coord: u16, pieces: [Edge; 3]) -> [Option<Edge>; 12] {
    let comb = coord as usize / 6;
    let perm = coord as usize % 6;
    let positions = unrank_subset(comb, 12, 3);
    let order = unrank_perm(perm, 3);
    let mut result = [None; 12];
    for (i, &slot) in positions.iter().enumerate() {
        result[slot] = Some(pieces[order[i] as usize]);
    }
    result
}

/// Merges a `UR, UF, UL` coordinate with a `UB, DR, DF` coordinate into the
/// `URtoDF` coordinate, provided their occupied slots are disjoint (always
/// true once both sets of edges sit in the 8 U/D slots, i.e. in phase 2).
/// Returns `None` on collision.
pub fn merge_ur_to_ul_ub_to_df(a: u16, b: u16) -> Option<u16> {
    let from_a = decode_sparse(a, [Edge::UR, Edge::UF, Edge::UL]);
    let from_b = decode_sparse(b, [Edge::UB, Edge::DR, Edge::DF]);
    let mut combined = [None; 8];
    for i in 0..8 {
        combined[i] = match (from_a[i], from_b[i]) {
            (Some(_), Some(_)) => return None,
            (Some(e), None) => Some(e),
            (None, Some(e)) => Some(e),
            (None, None) => None,
        };
    }
    if from_a[8..12].iter().any(Option::is_some) || from_b[8..12].iter().any(Option::is_some) {
        return None;
    }

    let canon = [Edge::UR, Edge::UF, Edge::UL, Edge::UB, Edge::DR, Edge::DF];
    let mut positions = Vec::with_capacity(6);
    let mut perm = Vec::with_capacity(6);
    for (slot, entry) in combined.iter().enumerate() {
        if let Some(edge) = entry {
            positions.push(slot);
            perm.push(canon.iter().position(|c| c == edge)? as u8);
        }
    }
    if positions.len() != 6 {
        return None;
    }
    Some((720 * rank_subset(&positions) + rank_perm(&perm)) as u16)
}

/// Precomputed merge table over the phase-2-reachable sub-range (0..336) of
/// `UR-to-UL`/`UB-to-DF`; values outside that range are merged lazily via
/// [merge_ur_to_ul_ub_to_df] instead of being cached.
pub struct EdgeMergeTable {
    table: Vec<Option<u16>>,
}

impl EdgeMergeTable {
    pub fn new() -> Self {
        let n = crate::constants::N_URTOUL_PHASE2;
        let mut table = vec![None; n * n];
        for a in 0..n {
            for b in 0..n {
                table[a * n + b] = merge_ur_to_ul_ub_to_df(a as u16, b as u16);
            }
        }
        EdgeMergeTable { table }
    }

    pub fn get(&self, a: u16, b: u16) -> Option<u16> {
        let n = crate::constants::N_URTOUL_PHASE2 as u16;
        if a < n && b < n {
            self.table[a as usize * n as usize + b as usize]
        } else {
            merge_ur_to_ul_ub_to_df(a, b)
        }
    }
}

impl Default for EdgeMergeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move;

    #[test]
    fn solved_cube_has_zero_coordinates() {
        let cc = CubieCube::default();
        assert_eq!(cc.get_twist(), 0);
        assert_eq!(cc.get_flip(), 0);
        assert_eq!(cc.get_fr_to_br(), 0);
        assert_eq!(cc.get_urf_to_dlf(), 0);
        assert_eq!(cc.get_ur_to_df(), 0);
        assert_eq!(cc.get_ur_to_ul(), 0);
        assert_eq!(cc.get_ub_to_df(), 0);
    }

    #[test]
    fn twist_get_set_round_trips() {
        let mut cc = CubieCube::default();
        for t in [0u16, 1, 17, 2186] {
            cc.set_twist(t);
            assert_eq!(cc.get_twist(), t);
        }
    }

    #[test]
    fn flip_get_set_round_trips() {
        let mut cc = CubieCube::default();
        for t in [0u16, 1, 17, 2047] {
            cc.set_flip(t);
            assert_eq!(cc.get_flip(), t);
        }
    }

    #[test]
    fn fr_to_br_get_set_round_trips() {
        let mut cc = CubieCube::default();
        for t in [0u16, 23, 500, 11879] {
            cc.set_fr_to_br(t);
            assert_eq!(cc.get_fr_to_br(), t);
        }
    }

    #[test]
    fn urf_to_dlf_get_set_round_trips() {
        let mut cc = CubieCube::default();
        for t in [0u16, 1, 719, 20159] {
            cc.set_urf_to_dlf(t);
            assert_eq!(cc.get_urf_to_dlf(), t);
        }
    }

    #[test]
    fn ur_to_ul_and_ub_to_df_round_trip() {
        let mut cc = CubieCube::default();
        for t in [0u16, 5, 335, 1319] {
            cc.set_ur_to_ul(t);
            assert_eq!(cc.get_ur_to_ul(), t);
            cc.set_ub_to_df(t);
            assert_eq!(cc.get_ub_to_df(), t);
        }
    }

    #[test]
    fn coordinate_matches_move_table_lookup() {
        let mut cc = CubieCube::default();
        cc.apply_move(Move::R);
        let expected = cc.get_twist();
        let mut from_zero = CubieCube::default();
        from_zero.apply_move(Move::R);
        assert_eq!(from_zero.get_twist(), expected);
    }

    #[test]
    fn merge_of_disjoint_coordinates_succeeds_for_solved_cube() {
        let cc = CubieCube::default();
        let a = cc.get_ur_to_ul();
        let b = cc.get_ub_to_df();
        assert_eq!(merge_ur_to_ul_ub_to_df(a, b), Some(cc.get_ur_to_df()));
    }

    #[test]
    fn merge_table_agrees_with_direct_merge() {
        let table = EdgeMergeTable::new();
        for a in [0u16, 1, 100, 335] {
            for b in [0u16, 1, 100, 335] {
                assert_eq!(table.get(a, b), merge_ur_to_ul_ub_to_df(a, b));
            }
        }
    }
}
