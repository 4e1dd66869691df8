//! This module derives the all-different constraint groups from the grid
//! geometry, thus specifying the rules of the puzzle.
//!
//! A classic 9×9 puzzle has 27 groups: 9 rows, 9 columns, and 9 blocks. The
//! builders here are parameterized by the grid's block dimensions, so the
//! same code covers smaller boxed grids (e.g. 4×4 with 2×2 blocks), which are
//! used extensively in tests.

use crate::SudokuGrid;
use crate::domain::CandidateSet;

/// A group of cells which must hold pairwise-distinct values, represented by
/// an ordered vector of their flat (row-major) indices. Each group of a grid
/// with side length `size` contains exactly `size` cells.
pub type Group = Vec<usize>;

/// Builds the row groups of the given grid, one per row, in top-to-bottom
/// order. Cells within a group are ordered left-to-right.
pub fn row_groups(grid: &SudokuGrid) -> Vec<Group> {
    let size = grid.size();
    let mut groups = Vec::with_capacity(size);

    for row in 0..size {
        let mut group = Group::with_capacity(size);

        for column in 0..size {
            group.push(crate::index(column, row, size));
        }

        groups.push(group);
    }

    groups
}

/// Builds the column groups of the given grid, one per column, in
/// left-to-right order. Cells within a group are ordered top-to-bottom.
pub fn column_groups(grid: &SudokuGrid) -> Vec<Group> {
    let size = grid.size();
    let mut groups = Vec::with_capacity(size);

    for column in 0..size {
        let mut group = Group::with_capacity(size);

        for row in 0..size {
            group.push(crate::index(column, row, size));
        }

        groups.push(group);
    }

    groups
}

/// Builds the block groups of the given grid, in row-major order of the
/// blocks. For the classic 9×9 grid, block `b` covers the 3×3 subgrid whose
/// top-left cell is at row `3 · (b / 3)` and column `3 · (b % 3)`; for other
/// block dimensions the same row-major enumeration applies. Cells within a
/// group are ordered row-major.
pub fn block_groups(grid: &SudokuGrid) -> Vec<Group> {
    let block_width = grid.block_width();
    let block_height = grid.block_height();
    let size = grid.size();
    let mut groups = Vec::with_capacity(size);

    for block_row in 0..block_width {
        for block_column in 0..block_height {
            let top = block_row * block_height;
            let left = block_column * block_width;
            let mut group = Group::with_capacity(size);

            for row in top..(top + block_height) {
                for column in left..(left + block_width) {
                    group.push(crate::index(column, row, size));
                }
            }

            groups.push(group);
        }
    }

    groups
}

/// Builds all constraint groups of the given grid: rows, then columns, then
/// blocks. This is a deterministic, pure function of the grid's dimensions,
/// with no failure modes, since dimension validity is already enforced when
/// the grid is constructed.
pub fn all_groups(grid: &SudokuGrid) -> Vec<Group> {
    let mut groups = row_groups(grid);
    groups.append(&mut column_groups(grid));
    groups.append(&mut block_groups(grid));
    groups
}

/// Checks whether the filled cells of the given group hold pairwise-distinct
/// values. Empty cells are ignored, so a partially filled group without
/// duplicates passes.
pub fn check_group(grid: &SudokuGrid, group: &[usize]) -> bool {
    let mut seen = CandidateSet::empty(grid.size()).unwrap();

    for &index in group {
        if let Some(number) = grid.cells()[index] {
            if !seen.insert(number).unwrap() {
                return false;
            }
        }
    }

    true
}

/// Checks whether the given grid satisfies every constraint group, that is,
/// no row, column, or block contains a duplicate among its filled cells.
pub fn check(grid: &SudokuGrid) -> bool {
    all_groups(grid).iter().all(|group| check_group(grid, group))
}
