use thiserror::Error;

use crate::constants::{ALL_COORDS, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};
use crate::types::{Coord, PieceId};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("point ({row}, {col}) is off the board")]
    OutOfBounds { row: i16, col: i16 },
}

/// The 10x9 grid. Cells hold arena ids, never pieces themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<PieceId>; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    pub const fn in_bounds(row: i16, col: i16) -> bool {
        row >= 0 && row < BOARD_ROWS as i16 && col >= 0 && col < BOARD_COLS as i16
    }

    pub fn coord(row: i16, col: i16) -> Result<Coord, BoardError> {
        if !Self::in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Coord::new_unchecked(row as u8, col as u8))
    }

    pub fn get(&self, coord: Coord) -> Option<PieceId> {
        self.cells[coord.index()]
    }

    /// Overwrites a cell and hands back whatever was there.
    pub fn put(&mut self, coord: Coord, occupant: Option<PieceId>) -> Option<PieceId> {
        std::mem::replace(&mut self.cells[coord.index()], occupant)
    }

    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Coord, PieceId)> + '_ {
        ALL_COORDS
            .iter()
            .filter_map(|&coord| self.get(coord).map(|id| (coord, id)))
    }
}
