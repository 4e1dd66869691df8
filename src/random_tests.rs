use crate::SudokuGrid;
use crate::constraint;
use crate::solver::BacktrackingSolver;

use rand::Rng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

const ITERATIONS_PER_RUN: usize = 20;

/// Builds a full, valid grid with the given block dimensions from the cyclic
/// base pattern: each row is the first row shifted by the block width, with
/// an extra shift of one at every block boundary.
fn base_grid(block_width: usize, block_height: usize) -> SudokuGrid {
    let size = block_width * block_height;
    let mut grid = SudokuGrid::new(block_width, block_height).unwrap();

    for row in 0..size {
        for column in 0..size {
            let value =
                (row * block_width + row / block_height + column) % size + 1;
            grid.set_cell(column, row, value).unwrap();
        }
    }

    grid
}

/// Applies a random permutation of the digits 1 to `size` to every cell,
/// which turns one valid full grid into another valid full grid.
fn relabel(grid: &SudokuGrid, rng: &mut impl Rng) -> SudokuGrid {
    let size = grid.size();
    let mut permutation: Vec<usize> = (1..=size).collect();
    permutation.shuffle(rng);

    let mut relabeled =
        SudokuGrid::new(grid.block_width(), grid.block_height()).unwrap();

    for row in 0..size {
        for column in 0..size {
            if let Some(number) = grid.get_cell(column, row).unwrap() {
                relabeled.set_cell(column, row, permutation[number - 1])
                    .unwrap();
            }
        }
    }

    relabeled
}

fn blank_random_cells(grid: &mut SudokuGrid, count: usize,
        rng: &mut impl Rng) {
    let size = grid.size();
    let mut indices: Vec<usize> = (0..size * size).collect();
    indices.shuffle(rng);

    for &index in indices.iter().take(count) {
        grid.clear_cell(index % size, index / size).unwrap();
    }
}

/// Derives random puzzles from a known full grid and checks the enumeration
/// invariants: the original grid is among the solutions, and every solution
/// is full, satisfies all constraint groups, and extends the clues.
fn run_enumeration_test(block_width: usize, block_height: usize,
        removals: usize, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let full = base_grid(block_width, block_height);

    for _ in 0..ITERATIONS_PER_RUN {
        let solved = relabel(&full, &mut rng);
        assert!(constraint::check(&solved));

        let mut clue_grid = solved.clone();
        blank_random_cells(&mut clue_grid, removals, &mut rng);

        let solutions = BacktrackingSolver.enumerate(&clue_grid);

        assert!(solutions.contains(&solved),
            "known completion missing from solution set");

        for solution in &solutions {
            assert!(solution.is_full());
            assert!(constraint::check(solution));
            assert!(clue_grid.is_subset(solution).unwrap());
        }
    }
}

#[test]
fn enumeration_consistency_3x3() {
    run_enumeration_test(3, 3, 35, 0x5eed);
}

#[test]
fn enumeration_consistency_3x2() {
    run_enumeration_test(3, 2, 14, 0xca5e);
}

#[test]
fn enumeration_consistency_2x2() {
    run_enumeration_test(2, 2, 8, 0xb10c);
}
