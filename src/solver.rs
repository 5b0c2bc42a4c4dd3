//! Two-phase IDA* search: drive an arbitrary cube into the subgroup
//! `H = <U, D, R2, L2, F2, B2>` (phase 1), then solve within `H` (phase 2).
//!
//! Both phases walk an explicit stack of coordinate tuples indexed by
//! search depth rather than threading state through recursion parameters,
//! so each depth's candidate move and resulting coordinates are always
//! available by index for the axis-conflict rule and for assembling the
//! final move list.

use std::time::{Duration, Instant};

use crate::constants::{MAX_PHASE2_DEPTH, MAX_STACK, PHASE2_MOVES};
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::{EdgeMergeTable, Move, MoveTables};
use crate::pruning::PruningTables;

/// The process-wide move and pruning tables, built once on first use.
pub struct Tables {
    pub moves: MoveTables,
    pub pruning: PruningTables,
    pub merge: EdgeMergeTable,
}

impl Tables {
    fn new() -> Self {
        let moves = MoveTables::new();
        let pruning = PruningTables::new(&moves);
        let merge = EdgeMergeTable::new();
        Tables { moves, pruning, merge }
    }
}

lazy_static! {
    static ref TABLES: Tables = Tables::new();
}

/// Solves `cube`, returning a move sequence of at most `max_depth` quarter
/// turns, or [Error::MaxDepthExceeded] / [Error::Timeout] if none is found
/// in time. `cube` is verified first, surfacing any of the five illegal-
/// state errors.
pub fn solve(cube: &CubieCube, max_depth: usize, timeout: Duration) -> Result<Vec<Move>, Error> {
    cube.verify()?;
    let mut search = Search::new(&TABLES, cube, max_depth, timeout);
    search.run()
}

struct Search<'a> {
    tables: &'a Tables,
    max_depth: usize,
    start: Instant,
    timeout: Duration,
    timed_out: bool,

    // Phase 1 stack, indexed by search depth 0..=n.
    axis: [u8; MAX_STACK],
    power: [u8; MAX_STACK],
    twist: [u16; MAX_STACK + 1],
    flip: [u16; MAX_STACK + 1],
    fr_to_br: [u16; MAX_STACK + 1],
    slice: [u16; MAX_STACK + 1],
    urf_to_dlf: [u16; MAX_STACK + 1],
    ur_to_ul: [u16; MAX_STACK + 1],
    ub_to_df: [u16; MAX_STACK + 1],
    parity: [u8; MAX_STACK + 1],

    // Phase 2 stack, rebuilt every time phase 1 hands off a candidate.
    phase1_len: usize,
    moves2: [Move; MAX_STACK],
    axis2: [u8; MAX_STACK],
    urf2: [u16; MAX_STACK + 1],
    ur_to_df2: [u16; MAX_STACK + 1],
    slice_sorted2: [u16; MAX_STACK + 1],
    parity2: [u8; MAX_STACK + 1],
}

impl<'a> Search<'a> {
    fn new(tables: &'a Tables, cube: &CubieCube, max_depth: usize, timeout: Duration) -> Self {
        let mut search = Search {
            tables,
            max_depth,
            start: Instant::now(),
            timeout,
            timed_out: false,
            axis: [0; MAX_STACK],
            power: [0; MAX_STACK],
            twist: [0; MAX_STACK + 1],
            flip: [0; MAX_STACK + 1],
            fr_to_br: [0; MAX_STACK + 1],
            slice: [0; MAX_STACK + 1],
            urf_to_dlf: [0; MAX_STACK + 1],
            ur_to_ul: [0; MAX_STACK + 1],
            ub_to_df: [0; MAX_STACK + 1],
            parity: [0; MAX_STACK + 1],
            phase1_len: 0,
            moves2: [Move::U; MAX_STACK],
            axis2: [0; MAX_STACK],
            urf2: [0; MAX_STACK + 1],
            ur_to_df2: [0; MAX_STACK + 1],
            slice_sorted2: [0; MAX_STACK + 1],
            parity2: [0; MAX_STACK + 1],
        };
        search.twist[0] = cube.get_twist();
        search.flip[0] = cube.get_flip();
        search.fr_to_br[0] = cube.get_fr_to_br();
        search.slice[0] = CubieCube::slice_from_fr_to_br(search.fr_to_br[0]);
        search.urf_to_dlf[0] = cube.get_urf_to_dlf();
        search.ur_to_ul[0] = cube.get_ur_to_ul();
        search.ub_to_df[0] = cube.get_ub_to_df();
        search.parity[0] = cube.corner_parity();
        search
    }

    fn run(&mut self) -> Result<Vec<Move>, Error> {
        let top = self.max_depth.min(MAX_STACK - 1);
        for depth1 in 0..=top {
            if let Some(solution) = self.phase1_node(0, depth1)? {
                return Ok(solution);
            }
            if self.timed_out {
                return Err(Error::Timeout);
            }
        }
        Err(Error::MaxDepthExceeded)
    }

    fn h1(&self, n: usize) -> u8 {
        self.tables
            .pruning
            .phase1_bound(self.twist[n], self.flip[n], self.slice[n])
    }

    fn h2(&self, n2: usize) -> u8 {
        self.tables.pruning.phase2_bound(
            self.urf2[n2],
            self.ur_to_df2[n2],
            self.slice_sorted2[n2],
            self.parity2[n2],
        )
    }

    fn conflicts(face: u8, prev: Option<u8>) -> bool {
        match prev {
            Some(p) => face == p || (p >= 3 && face == p - 3),
            None => false,
        }
    }

    fn check_timeout(&mut self) {
        if self.start.elapsed() >= self.timeout {
            self.timed_out = true;
        }
    }

    /// Explores phase 1 from depth `n` with `togo` moves left in the current
    /// iterative-deepening bound. Whenever the state is already in subgroup
    /// H and within the last 5 plies of the bound, a phase-2 attempt is
    /// spliced in; phase 1 keeps deepening regardless of whether it succeeds.
    fn phase1_node(&mut self, n: usize, togo: usize) -> Result<Option<Vec<Move>>, Error> {
        if self.timed_out {
            return Ok(None);
        }
        let h = self.h1(n);
        if h == 0 && togo <= 5 {
            if let Some(solution) = self.try_phase2(n)? {
                return Ok(Some(solution));
            }
        }
        if togo == 0 || h as usize > togo {
            return Ok(None);
        }
        let prev_axis = if n > 0 { Some(self.axis[n - 1]) } else { None };
        for face in 0..6u8 {
            if Self::conflicts(face, prev_axis) {
                continue;
            }
            for power in 0..3u8 {
                self.axis[n] = face;
                self.power[n] = power;
                self.apply_phase1_move(n, Move::from_index(3 * face as usize + power as usize));
                if let Some(solution) = self.phase1_node(n + 1, togo - 1)? {
                    return Ok(Some(solution));
                }
                if self.timed_out {
                    return Ok(None);
                }
            }
            self.check_timeout();
            if self.timed_out {
                return Ok(None);
            }
        }
        Ok(None)
    }

    fn apply_phase1_move(&mut self, n: usize, m: Move) {
        let i = m.index();
        let t = &self.tables.moves;
        self.twist[n + 1] = t.twist[18 * self.twist[n] as usize + i];
        self.flip[n + 1] = t.flip[18 * self.flip[n] as usize + i];
        self.fr_to_br[n + 1] = t.fr_to_br[18 * self.fr_to_br[n] as usize + i];
        self.slice[n + 1] = CubieCube::slice_from_fr_to_br(self.fr_to_br[n + 1]);
        self.urf_to_dlf[n + 1] = t.urf_to_dlf[18 * self.urf_to_dlf[n] as usize + i];
        self.ur_to_ul[n + 1] = t.ur_to_ul[18 * self.ur_to_ul[n] as usize + i];
        self.ub_to_df[n + 1] = t.ub_to_df[18 * self.ub_to_df[n] as usize + i];
        self.parity[n + 1] = t.parity[self.parity[n] as usize][i];
    }

    /// Reseeds the phase-2 coordinates from the phase-1 stack at depth `n`
    /// and runs phase 2's own iterative deepening over the remaining budget.
    fn try_phase2(&mut self, n: usize) -> Result<Option<Vec<Move>>, Error> {
        let slice_sorted = self.fr_to_br[n];
        if slice_sorted >= 24 {
            return Ok(None);
        }
        let ur_to_df = match self.tables.merge.get(self.ur_to_ul[n], self.ub_to_df[n]) {
            Some(v) => v,
            None => return Ok(None),
        };

        self.phase1_len = n;
        self.urf2[0] = self.urf_to_dlf[n];
        self.ur_to_df2[0] = ur_to_df;
        self.slice_sorted2[0] = slice_sorted;
        self.parity2[0] = self.parity[n];
        let prev_axis = if n > 0 { Some(self.axis[n - 1]) } else { None };

        let budget = self.max_depth.saturating_sub(n).min(MAX_PHASE2_DEPTH);
        for depth2 in 0..=budget {
            if let Some(solution) = self.phase2_node(0, depth2, prev_axis)? {
                return Ok(Some(solution));
            }
            if self.timed_out {
                return Ok(None);
            }
        }
        Ok(None)
    }

    fn phase2_node(
        &mut self,
        n2: usize,
        togo2: usize,
        prev_axis: Option<u8>,
    ) -> Result<Option<Vec<Move>>, Error> {
        if self.timed_out {
            return Ok(None);
        }
        let h = self.h2(n2);
        if togo2 == 0 {
            return Ok(if h == 0 {
                Some(self.assemble_solution(n2))
            } else {
                None
            });
        }
        if h as usize > togo2 {
            return Ok(None);
        }
        let prev = if n2 == 0 { prev_axis } else { Some(self.axis2[n2 - 1]) };
        for m in PHASE2_MOVES {
            let face = m.face() as u8;
            if Self::conflicts(face, prev) {
                continue;
            }
            self.axis2[n2] = face;
            self.apply_phase2_move(n2, m);
            if let Some(solution) = self.phase2_node(n2 + 1, togo2 - 1, prev_axis)? {
                return Ok(Some(solution));
            }
            if self.timed_out {
                return Ok(None);
            }
        }
        self.check_timeout();
        Ok(None)
    }

    fn apply_phase2_move(&mut self, n2: usize, m: Move) {
        let i = m.index();
        let t = &self.tables.moves;
        self.urf2[n2 + 1] = t.urf_to_dlf[18 * self.urf2[n2] as usize + i];
        self.ur_to_df2[n2 + 1] = t.ur_to_df[18 * self.ur_to_df2[n2] as usize + i];
        self.slice_sorted2[n2 + 1] = t.fr_to_br[18 * self.slice_sorted2[n2] as usize + i];
        self.parity2[n2 + 1] = t.parity[self.parity2[n2] as usize][i];
        self.moves2[n2] = m;
    }

    fn assemble_solution(&self, n2: usize) -> Vec<Move> {
        let mut result = Vec::with_capacity(self.phase1_len + n2);
        for i in 0..self.phase1_len {
            result.push(Move::from_index(3 * self.axis[i] as usize + self.power[i] as usize));
        }
        result.extend_from_slice(&self.moves2[0..n2]);
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solved_cube_solves_to_empty_sequence() {
        let solution = solve(&CubieCube::default(), 25, Duration::from_secs(5)).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn single_move_scramble_solves_in_one_move() {
        let mut cube = CubieCube::default();
        cube.apply_move(Move::R);
        let solution = solve(&cube, 25, Duration::from_secs(5)).unwrap();
        let check = cube.apply_moves(&solution);
        assert_eq!(check, CubieCube::default());
        assert!(solution.len() <= 3);
    }

    #[test]
    fn short_scramble_is_solved_and_restores_identity() {
        let mut cube = CubieCube::default();
        for m in [Move::R, Move::U, Move::R3, Move::U3, Move::F2, Move::L, Move::D2] {
            cube.apply_move(m);
        }
        let solution = solve(&cube, 25, Duration::from_secs(10)).unwrap();
        assert_eq!(cube.apply_moves(&solution), CubieCube::default());
    }

    #[test]
    fn zero_max_depth_fails_on_a_scrambled_cube() {
        let mut cube = CubieCube::default();
        cube.apply_move(Move::R);
        let result = solve(&cube, 0, Duration::from_secs(5));
        assert!(matches!(result, Err(Error::MaxDepthExceeded)));
    }

    #[test]
    fn illegal_cube_is_rejected_before_searching() {
        let mut cube = CubieCube::default();
        cube.co[0] = 1;
        let result = solve(&cube, 25, Duration::from_secs(5));
        assert!(matches!(result, Err(Error::CornerTwistParity)));
    }
}
