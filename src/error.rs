//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing grid codes, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the dimensions specified for a created grid are
    /// invalid. This is the case if they are less than 1 or if the resulting
    /// side length exceeds the candidate set capacity.
    InvalidDimensions,

    /// Indicates that a flat clue sequence handed to
    /// [SudokuGrid::from_clues](crate::SudokuGrid::from_clues) does not
    /// contain exactly one entry per cell of the grid.
    InvalidClueCount,

    /// Indicates that a clue in a flat clue sequence is outside the range of
    /// valid values for the grid, that is, less than 1 or greater than the
    /// size.
    InvalidClueValue,

    /// Indicates that some number is invalid for the size of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds,

    /// Indicates that a grid which was expected to be completely filled, such
    /// as a grid converted to flat digits, still contains an empty cell.
    GridNotFull
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidDimensions =>
                write!(f, "invalid grid dimensions"),
            SudokuError::InvalidClueCount =>
                write!(f, "clue sequence length does not match the grid"),
            SudokuError::InvalidClueValue =>
                write!(f, "clue value outside the valid range"),
            SudokuError::InvalidNumber =>
                write!(f, "number outside the valid range"),
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates outside the grid"),
            SudokuError::GridNotFull =>
                write!(f, "grid contains an empty cell")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`
/// code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: dimensions and
    /// cells (separated by ';'), so if the code does not contain exactly one
    /// semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas) does
    /// not equal the number deduced from the dimensions.
    WrongNumberOfCells,

    /// Indicates that the dimensions have the wrong format. They should be of
    /// the form `<block_width>x<block_height>`, so if the amount of 'x's in
    /// the dimension string is not exactly one, this error will be raised.
    MalformedDimensions,

    /// Indicates that the provided dimensions are invalid (i.e. at least one
    /// is zero).
    InvalidDimensions,

    /// Indicates that one of the numbers (dimension or cell content) could not
    /// be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more than
    /// the grid size).
    InvalidNumber
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfParts =>
                write!(f, "code does not consist of dimensions and cells"),
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "number of cells does not match the dimensions"),
            SudokuParseError::MalformedDimensions =>
                write!(f, "dimensions are not of the form <width>x<height>"),
            SudokuParseError::InvalidDimensions =>
                write!(f, "dimensions are invalid"),
            SudokuParseError::NumberFormatError =>
                write!(f, "number could not be parsed"),
            SudokuParseError::InvalidNumber =>
                write!(f, "cell contains a number outside the valid range")
        }
    }
}

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
