//! `solve <input> <output>`: reads a 54-sticker grid, solves it, and writes
//! the move string (or an `Error N` token) to the output file.

use std::collections::HashSet;
use std::fs;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use twophase::cubie::CubieCube;
use twophase::facelet::{Color, FaceCube};
use twophase::solver;

const MAX_DEPTH: usize = 25;
const TIMEOUT: Duration = Duration::from_secs(10);

/// Row, column range of each face's 3x3 block within the 9-line input grid.
const U_ROWS: (usize, usize) = (0, 3);
const MID_ROWS: (usize, usize) = (3, 6);
const D_ROWS: (usize, usize) = (6, 9);
const U_COLS: (usize, usize) = (3, 6);
const L_COLS: (usize, usize) = (0, 3);
const F_COLS: (usize, usize) = (3, 6);
const R_COLS: (usize, usize) = (6, 9);
const B_COLS: (usize, usize) = (9, 12);

#[derive(Parser)]
#[command(about = "Solves a 3x3x3 cube from a sticker grid file")]
struct Cli {
    input: String,
    output: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli.input, &cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input_path: &str, output_path: &str) -> Result<(), CliError> {
    let grid = fs::read_to_string(input_path)?;
    let line = match solve_grid(&grid) {
        Ok(moves) => moves,
        Err(code) => format!("Error {code}"),
    };
    fs::write(output_path, format!("{line}\n"))?;
    Ok(())
}

/// Parses the grid, relabels physical colors onto face letters, and solves.
/// Returns the solution string, or the `Error N` code to report.
fn solve_grid(grid: &str) -> Result<String, u32> {
    let facelets = parse_grid(grid).ok_or(1u32)?;
    let face_cube = FaceCube { f: facelets };
    let cube = CubieCube::try_from(&face_cube).map_err(|e| e.code().unwrap_or(1))?;
    let solution = solver::solve(&cube, MAX_DEPTH, TIMEOUT).map_err(|e| e.code().unwrap_or(1))?;
    Ok(solution.iter().map(|m| m.to_string()).collect())
}

/// Physical sticker color to face letter, fixed per the grid convention:
/// the scramble file is photographed with white on the front face.
fn color_for_char(c: char) -> Option<Color> {
    match c {
        'O' => Some(Color::U),
        'B' => Some(Color::R),
        'W' => Some(Color::F),
        'R' => Some(Color::D),
        'G' => Some(Color::L),
        'Y' => Some(Color::B),
        _ => None,
    }
}

fn parse_grid(grid: &str) -> Option<[Color; 54]> {
    let lines: Vec<&str> = grid.lines().collect();
    if lines.len() != 9 {
        return None;
    }
    let chars: Vec<Vec<char>> = lines.iter().map(|l| l.chars().collect()).collect();

    let mut raw = [' '; 54];
    let mut i = 0;
    for (rows, cols) in [
        (U_ROWS, U_COLS),
        (MID_ROWS, L_COLS),
        (MID_ROWS, F_COLS),
        (MID_ROWS, R_COLS),
        (MID_ROWS, B_COLS),
        (D_ROWS, U_COLS),
    ] {
        for row in rows.0..rows.1 {
            for col in cols.0..cols.1 {
                raw[i] = *chars.get(row)?.get(col)?;
                i += 1;
            }
        }
    }
    // `raw` is now laid out U, L, F, R, B, D; reorder into the U R F D L B
    // block order the rest of the crate expects.
    let mut ordered = [' '; 54];
    let src_blocks: [(usize, usize); 6] = [(0, 9), (27, 9), (18, 9), (45, 9), (9, 9), (36, 9)];
    let dst_blocks: [usize; 6] = [0, 9, 18, 27, 36, 45];
    for (dst, (src, len)) in dst_blocks.iter().zip(src_blocks.iter()) {
        ordered[*dst..*dst + len].copy_from_slice(&raw[*src..*src + len]);
    }

    let centers: HashSet<char> = [ordered[4], ordered[13], ordered[22], ordered[31], ordered[40], ordered[49]]
        .into_iter()
        .collect();
    if centers.len() != 6 || !centers.iter().all(|c| color_for_char(*c).is_some()) {
        return None;
    }

    let mut colors = [Color::U; 54];
    for (dst, &c) in colors.iter_mut().zip(ordered.iter()) {
        *dst = color_for_char(c)?;
    }
    Some(colors)
}

#[cfg(test)]
mod test {
    use super::*;

    const SOLVED_GRID: &str = concat!(
        "   OOO\n",
        "   OOO\n",
        "   OOO\n",
        "GGGWWWBBBYYY\n",
        "GGGWWWBBBYYY\n",
        "GGGWWWBBBYYY\n",
        "   RRR\n",
        "   RRR\n",
        "   RRR\n",
    );

    #[test]
    fn solved_grid_parses_to_solved_cube() {
        let facelets = parse_grid(SOLVED_GRID).unwrap();
        let face_cube = FaceCube { f: facelets };
        let cube = CubieCube::try_from(&face_cube).unwrap();
        assert_eq!(cube, CubieCube::default());
    }

    #[test]
    fn solved_grid_solves_to_empty_line() {
        assert_eq!(solve_grid(SOLVED_GRID).unwrap(), "");
    }

    #[test]
    fn wrong_line_count_is_rejected() {
        assert_eq!(parse_grid("OOO\nOOO\n"), None);
    }

    #[test]
    fn stray_character_is_rejected() {
        let bad = SOLVED_GRID.replacen('O', "X", 1);
        assert_eq!(parse_grid(&bad), None);
    }
}
