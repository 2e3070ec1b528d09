use criterion::{criterion_group, criterion_main, Criterion};
use maze_pathfinding::{
    pathing_grid::PathingGrid,
    solver::{
        astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, dijkstra::DijkstraSolver, GridSolver,
    },
    Position,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N_SCENARIOS: usize = 32;

/// A seeded random maze with a fixed wall density and a set of walkable start and end pairs.
fn random_maze(size: usize, density: f64) -> (PathingGrid, Vec<(Position, Position)>) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut grid = PathingGrid::new(size, size, false);
    for row in 0..size as i32 {
        for col in 0..size as i32 {
            grid.set(row, col, rng.gen_bool(density));
        }
    }
    grid.update();
    let random_point = |rng: &mut StdRng| {
        Position::new(rng.gen_range(0..size) as i32, rng.gen_range(0..size) as i32)
    };
    let mut scenarios = Vec::new();
    while scenarios.len() < N_SCENARIOS {
        let (start, end) = (random_point(&mut rng), random_point(&mut rng));
        if grid.can_move_to(start) && grid.can_move_to(end) {
            scenarios.push((start, end));
        }
    }
    (grid, scenarios)
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver: S) {
    for (size, density) in [(32, 0.2), (128, 0.3)] {
        let (grid, scenarios) = random_maze(size, density);
        let name = format!("{}, {size}x{size} maze, {density} walls", solver.algorithm());
        c.bench_function(name.as_str(), |b| {
            b.iter(|| {
                for (start, end) in &scenarios {
                    black_box(solver.solve(&grid, *start, *end));
                }
            })
        });
    }
}

fn bench_bfs(c: &mut Criterion) {
    bench_solver(c, BfsSolver);
}

fn bench_dfs(c: &mut Criterion) {
    bench_solver(c, DfsSolver);
}

fn bench_dijkstra(c: &mut Criterion) {
    bench_solver(c, DijkstraSolver);
}

fn bench_astar(c: &mut Criterion) {
    bench_solver(c, AstarSolver::new());
}

criterion_group!(benches, bench_bfs, bench_dfs, bench_dijkstra, bench_astar);
criterion_main!(benches);
