//! End-to-end tests that run the built `solve` binary against sticker-grid
//! files and check the written output, replaying solutions through the
//! library's own cubie-level composition (see `DESIGN.md`'s open-question
//! decision on the naive replay verifier).

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicU32, Ordering};

use twophase::cubie::CubieCube;
use twophase::facelet::{Color, FaceCube};
use twophase::moves::Move;
use twophase::scramble::random_scramble;

fn temp_path(tag: &str) -> PathBuf {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("twophase-cli-test-{tag}-{}-{n}.txt", std::process::id()))
}

/// Inverse of the CLI's physical-color relabeling, used only to construct
/// grid fixtures from a known cubie state.
fn char_for_color(c: Color) -> char {
    match c {
        Color::U => 'O',
        Color::R => 'B',
        Color::F => 'W',
        Color::D => 'R',
        Color::L => 'G',
        Color::B => 'Y',
    }
}

/// Renders a [FaceCube] back into the 9-line physical sticker grid the CLI
/// parses, using the same net layout `cli/src/main.rs` assumes.
fn face_cube_to_grid(fc: &FaceCube) -> String {
    let f = &fc.f;
    let block = |start: usize| -> Vec<char> { (0..9).map(|i| char_for_color(f[start + i])).collect() };
    let u = block(0);
    let r = block(9);
    let front = block(18);
    let d = block(27);
    let l = block(36);
    let b = block(45);

    let mut lines = Vec::with_capacity(9);
    for row in 0..3 {
        lines.push(format!("   {}{}{}", u[3 * row], u[3 * row + 1], u[3 * row + 2]));
    }
    for row in 0..3 {
        lines.push(format!(
            "{}{}{}{}{}{}{}{}{}{}{}{}",
            l[3 * row],
            l[3 * row + 1],
            l[3 * row + 2],
            front[3 * row],
            front[3 * row + 1],
            front[3 * row + 2],
            r[3 * row],
            r[3 * row + 1],
            r[3 * row + 2],
            b[3 * row],
            b[3 * row + 1],
            b[3 * row + 2],
        ));
    }
    for row in 0..3 {
        lines.push(format!("   {}{}{}", d[3 * row], d[3 * row + 1], d[3 * row + 2]));
    }
    lines.join("\n") + "\n"
}

/// Decodes the CLI's bare-letter solution string (`"RRR"` == `R'`) back
/// into moves.
fn decode_solution(s: &str) -> Vec<Move> {
    let mut moves = Vec::new();
    let chars: Vec<char> = s.trim().chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let letter = chars[i];
        let mut count = 1;
        while i + count < chars.len() && chars[i + count] == letter {
            count += 1;
        }
        let notation = match count {
            1 => letter.to_string(),
            2 => format!("{letter}2"),
            3 => format!("{letter}'"),
            _ => panic!("unexpected repeat count {count} for {letter}"),
        };
        moves.push(notation.parse().unwrap());
        i += count;
    }
    moves
}

fn run_solve(cube: &CubieCube) -> String {
    let fc = FaceCube::try_from(cube).unwrap();
    let grid = face_cube_to_grid(&fc);
    let input = temp_path("in");
    let output = temp_path("out");
    fs::write(&input, grid).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_solve"))
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let result = fs::read_to_string(&output).unwrap();
    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
    result
}

#[test]
fn solved_cube_produces_empty_solution() {
    let output = run_solve(&CubieCube::default());
    assert_eq!(output.trim(), "");
}

#[test]
fn single_quarter_turn_solves_in_few_moves() {
    let mut cube = CubieCube::default();
    cube.apply_move(Move::U);
    let output = run_solve(&cube);
    let moves = decode_solution(&output);
    assert!(moves.len() <= 3);
    assert_eq!(cube.apply_moves(&moves), CubieCube::default());
}

#[test]
fn order_six_sequence_is_fully_solved_on_replay() {
    let mut cube = CubieCube::default();
    for _ in 0..6 {
        cube.apply_move(Move::R);
        cube.apply_move(Move::U);
    }
    let output = run_solve(&cube);
    let moves = decode_solution(&output);
    assert_eq!(cube.apply_moves(&moves), CubieCube::default());
}

#[test]
fn depth_fifteen_scramble_solves_within_budget() {
    let mut cube = CubieCube::default();
    for m in [
        Move::R,
        Move::U,
        Move::F2,
        Move::D3,
        Move::L,
        Move::B,
        Move::R2,
        Move::U3,
        Move::F,
        Move::D,
        Move::L2,
        Move::B3,
        Move::R3,
        Move::U2,
        Move::F3,
    ] {
        cube.apply_move(m);
    }
    let output = run_solve(&cube);
    let moves = decode_solution(&output);
    assert!(moves.len() <= 25);
    assert_eq!(cube.apply_moves(&moves), CubieCube::default());
}

#[test]
fn random_scramble_solves_and_replays_to_solved() {
    let cube = CubieCube::default().apply_moves(&random_scramble(20));
    let output = run_solve(&cube);
    let moves = decode_solution(&output);
    assert!(moves.len() <= 25);
    assert_eq!(cube.apply_moves(&moves), CubieCube::default());
}

#[test]
fn malformed_grid_reports_error_token() {
    let input = temp_path("bad-in");
    let output = temp_path("bad-out");
    fs::write(&input, "not a valid grid\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_solve"))
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let result = fs::read_to_string(&output).unwrap();
    assert_eq!(result.trim(), "Error 1");
    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}
