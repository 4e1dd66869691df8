// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

//! This crate implements a finite-domain constraint engine for
//! Latin-square-with-boxes puzzles, i.e. classic Sudoku and its smaller or
//! larger boxed relatives. It supports the following key features:
//!
//! * Ingesting the flat clue sequences produced by an external recognition
//! step, as well as parsing and printing grid codes
//! * Checking validity of grids according to the row, column, and block
//! all-different rules
//! * Enumerating *every* solution of a puzzle via constraint propagation and
//! backtracking search, so a caller can distinguish unsolvable, uniquely
//! solvable, and ambiguous inputs
//!
//! Enumerating all solutions rather than stopping at the first is the point:
//! a puzzle read from a noisy source (such as OCR on a photographed grid)
//! that ends up with several solutions was probably misread, and the caller
//! can only detect that if the engine reports the full set.
//!
//! Note in this introduction we will mostly be using 4x4 grids due to their
//! simpler nature. These are divided in 4 2x2 blocks, each with the digits 1
//! to 4, just like each row and column.
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! ```
//! use sudoku_csp::SudokuGrid;
//!
//! let grid =
//!     SudokuGrid::parse("2x2;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! assert_eq!(Some(2), grid.get_cell(0, 0).unwrap());
//! assert_eq!(None, grid.get_cell(1, 0).unwrap());
//! ```
//!
//! # Ingesting clue sequences
//!
//! A recognition front-end does not produce grid codes but a flat, row-major
//! sequence with one entry per cell: a digit where it recognized one, and
//! nothing where the cell looked blank. [SudokuGrid::from_clues] validates
//! and converts such a sequence, and [SudokuGrid::to_flat] converts a
//! completed grid back into flat digits.
//!
//! ```
//! use sudoku_csp::SudokuGrid;
//!
//! let mut clues = vec![None; 16];
//! clues[0] = Some(1);
//! clues[5] = Some(2);
//!
//! let grid = SudokuGrid::from_clues(2, 2, &clues).unwrap();
//! assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
//! assert_eq!(Some(2), grid.get_cell(1, 1).unwrap());
//! assert_eq!(2, grid.count_clues());
//! ```
//!
//! # Solving
//!
//! The [solver] module contains a [Solver](solver::Solver) trait and the
//! [BacktrackingSolver](solver::BacktrackingSolver), which enumerates every
//! solution of a grid.
//!
//! ```
//! use sudoku_csp::SudokuGrid;
//! use sudoku_csp::solver::{BacktrackingSolver, Solution, Solver};
//!
//! let grid = SudokuGrid::parse("2x2; , , ,4, ,4,3, , ,3, , , , ,1, ")
//!     .unwrap();
//! let solution = BacktrackingSolver.solve(&grid);
//!
//! let expected_grid =
//!     SudokuGrid::parse("2x2;3,1,2,4,2,4,3,1,1,3,4,2,4,2,1,3").unwrap();
//! assert_eq!(Solution::Unique(expected_grid), solution);
//! ```
//!
//! If the input admits no completion at all, the result is
//! `Solution::Impossible`, which is a normal outcome, not an error. If it
//! admits
//! several, the result is `Solution::Ambiguous` carrying all of them in the
//! order the search discovered them.

pub mod constraint;
pub mod domain;
pub mod error;
pub mod solver;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

fn parse_dimensions(code: &str) -> Result<(usize, usize), SudokuParseError> {
    let parts: Vec<&str> = code.split('x').collect();

    if parts.len() != 2 {
        return Err(SudokuParseError::MalformedDimensions);
    }

    Ok((parts[0].parse()?, parts[1].parse()?))
}

/// A grid of cells organized into blocks of a given width and height in a way
/// that makes the entire grid a square. Consequently, the number of blocks in
/// a row is equal to the block height and vice versa. Each cell may or may
/// not be occupied by a number.
///
/// In ordinary Sudoku, the block width and height are both 3. Other
/// dimensions are permitted, which is mostly useful for exercising the solver
/// on smaller grids.
///
/// A `SudokuGrid` plays two roles: a partially filled grid carries the clues
/// of a puzzle, and a full grid represents one solution. Serialization with
/// [serde](https://serde.rs/) goes through the grid code defined by
/// [SudokuGrid::parse].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct SudokuGrid {
    block_width: usize,
    block_height: usize,
    size: usize,
    cells: Vec<Option<usize>>
}

impl SudokuGrid {

    /// Creates a new, empty grid where the blocks have the given dimensions.
    /// The total width and height of the grid will be equal to the product of
    /// `block_width` and `block_height`.
    ///
    /// # Arguments
    ///
    /// * `block_width`: The horizontal dimension of one sub-block of the
    /// grid. To ensure a square grid, this is also the number of blocks that
    /// compose the grid vertically. For an ordinary Sudoku grid, this is 3.
    /// Must be greater than 0.
    /// * `block_height`: The vertical dimension of one sub-block of the grid.
    /// To ensure a square grid, this is also the number of blocks that
    /// compose the grid horizontally. For an ordinary Sudoku grid, this is 3.
    /// Must be greater than 0.
    ///
    /// # Errors
    ///
    /// If `block_width` or `block_height` is invalid (zero), or if their
    /// product exceeds the capacity of a cell's
    /// [CandidateSet](domain::CandidateSet).
    pub fn new(block_width: usize, block_height: usize)
            -> SudokuResult<SudokuGrid> {
        if block_width == 0 || block_height == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let size = block_width * block_height;

        if size > domain::MAX_SIZE {
            return Err(SudokuError::InvalidDimensions);
        }

        let cells = vec![None; size * size];

        Ok(SudokuGrid {
            block_width,
            block_height,
            size,
            cells
        })
    }

    /// Parses a code encoding a grid. The code has to be of the format
    /// `<block_width>x<block_height>;<cells>` where `<cells>` is a
    /// comma-separated list of entries, which are either empty or a number.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting. The number of
    /// entries must match the amount of cells in a grid with the given
    /// dimensions, i.e. it must be `(block_width · block_height)²`.
    ///
    /// As an example, the code `2x2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` parses
    /// to a 4×4 grid with 2×2 blocks whose first row contains a 1 in the
    /// first and a 2 in the third cell.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(SudokuParseError::WrongNumberOfParts);
        }

        let (block_width, block_height) = parse_dimensions(parts[0])?;

        if let Ok(mut grid) = SudokuGrid::new(block_width, block_height) {
            let size = grid.size();
            let numbers: Vec<&str> = parts[1].split(',').collect();

            if numbers.len() != size * size {
                return Err(SudokuParseError::WrongNumberOfCells);
            }

            for (i, number_str) in numbers.iter().enumerate() {
                let number_str = number_str.trim();

                if number_str.is_empty() {
                    continue;
                }

                let number = number_str.parse::<usize>()?;

                if number == 0 || number > size {
                    return Err(SudokuParseError::InvalidNumber);
                }

                grid.cells[i] = Some(number);
            }

            Ok(grid)
        }
        else {
            Err(SudokuParseError::InvalidDimensions)
        }
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_csp::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new(3, 2).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{}x{};", self.block_width, self.block_height);
        let cells = self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Creates a grid from a flat clue sequence, as produced by an external
    /// recognition step. The sequence must contain one entry per cell in
    /// row-major order (row 0 column 0 first): `Some(digit)` where a clue is
    /// known and `None` where the cell is blank.
    ///
    /// # Arguments
    ///
    /// * `block_width`: The horizontal dimension of one sub-block of the
    /// grid. Must be greater than 0.
    /// * `block_height`: The vertical dimension of one sub-block of the grid.
    /// Must be greater than 0.
    /// * `clues`: The flat clue sequence. Must contain exactly
    /// `(block_width · block_height)²` entries, and every present clue must
    /// be in the range `[1, block_width · block_height]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDimensions` If `block_width` or `block_height`
    /// is zero or the resulting grid is too large.
    /// * `SudokuError::InvalidClueCount` If the length of `clues` does not
    /// match the number of cells.
    /// * `SudokuError::InvalidClueValue` If a present clue is zero or greater
    /// than the grid size.
    pub fn from_clues(block_width: usize, block_height: usize,
            clues: &[Option<usize>]) -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::new(block_width, block_height)?;
        let size = grid.size();

        if clues.len() != size * size {
            return Err(SudokuError::InvalidClueCount);
        }

        for (i, &clue) in clues.iter().enumerate() {
            if let Some(number) = clue {
                if number == 0 || number > size {
                    return Err(SudokuError::InvalidClueValue);
                }

                grid.cells[i] = Some(number);
            }
        }

        Ok(grid)
    }

    /// Converts a full grid into the flat, row-major digit sequence which
    /// mirrors the clue format consumed by [SudokuGrid::from_clues]. This is
    /// how a solution is handed back to the caller.
    ///
    /// # Errors
    ///
    /// If any cell of this grid is empty. In that case,
    /// `SudokuError::GridNotFull` is returned.
    pub fn to_flat(&self) -> SudokuResult<Vec<usize>> {
        self.cells.iter()
            .map(|c| c.ok_or(SudokuError::GridNotFull))
            .collect()
    }

    /// Gets the width (number of columns) of one sub-block of the grid. To
    /// ensure a square grid, this is also the number of blocks that compose
    /// the grid vertically.
    pub fn block_width(&self) -> usize {
        self.block_width
    }

    /// Gets the height (number of rows) of one sub-block of the grid. To
    /// ensure a square grid, this is also the number of blocks that compose
    /// the grid horizontally.
    pub fn block_height(&self) -> usize {
        self.block_height
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        let size = self.size();

        if column >= size || row >= size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            let index = index(column, row, size);
            Ok(self.cells[index])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > size {
            return Err(SudokuError::InvalidNumber);
        }

        let index = index(column, row, size);
        self.cells[index] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        let index = index(column, row, size);
        self.cells[index] = None;
        Ok(())
    }

    fn verify_dimensions(&self, other: &SudokuGrid) -> SudokuResult<()> {
        if self.block_width != other.block_width ||
                self.block_height != other.block_height {
            Err(SudokuError::InvalidDimensions)
        }
        else {
            Ok(())
        }
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be filled
    /// in `other` with the same number. If this condition is met, `true` is
    /// returned, and `false` otherwise. In particular, the clues of a puzzle
    /// are a subset of each of its solutions.
    ///
    /// # Errors
    ///
    /// If the dimensions of this and the `other` grid are not the same. In
    /// that case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_subset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        self.verify_dimensions(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            }))
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the dimensions of this and the `other` grid are not the same. In
    /// that case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_superset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        other.is_subset(self)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}


#[cfg(test)]
mod random_tests;
