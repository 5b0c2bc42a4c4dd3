use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use twophase::cubie::CubieCube;
use twophase::moves::{MoveTables, Move::*};
use twophase::pruning::PruningTables;
use twophase::scramble::random_scramble;
use twophase::solver;

fn cc_apply_moves() {
    let cc = CubieCube::default();
    let _ = cc.apply_moves(&[R, U, R3, U3]);
}

fn bench_moves(c: &mut Criterion) {
    c.bench_function("apply_moves", |b| b.iter(cc_apply_moves));
}

fn bench_table_construction(c: &mut Criterion) {
    c.bench_function("move+pruning table construction", |b| {
        b.iter(|| {
            let moves = MoveTables::new();
            PruningTables::new(&moves)
        })
    });
}

fn bench_solver(c: &mut Criterion) {
    let cube = CubieCube::default().apply_moves(&random_scramble(20));
    c.bench_function("solve random 20-move scramble", |b| {
        b.iter(|| solver::solve(&cube, 25, Duration::from_secs(10)).unwrap())
    });
}

criterion_group!(benches, bench_table_construction, bench_solver, bench_moves);
criterion_main!(benches);
