//! Coordinate notation: file letter `a`..`i` followed by rank number `1`..`10`.

use std::fmt;

use thiserror::Error;

use crate::constants::BOARD_ROWS;
use crate::types::Coord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty coordinate")]
    Empty,
    #[error("column '{0}' is not a file letter a-i")]
    BadColumn(char),
    #[error("row '{0}' is not a rank number 1-10")]
    BadRow(String),
}

pub fn parse_coord(input: &str) -> Result<Coord, NotationError> {
    let input = input.trim();
    let mut chars = input.chars();
    let file = chars.next().ok_or(NotationError::Empty)?;
    let col = match file.to_ascii_lowercase() {
        letter @ 'a'..='i' => letter as u8 - b'a',
        _ => return Err(NotationError::BadColumn(file)),
    };

    let rank = chars.as_str();
    let row = rank
        .parse::<u8>()
        .ok()
        .filter(|number| (1..=BOARD_ROWS).contains(number))
        .ok_or_else(|| NotationError::BadRow(rank.to_string()))?;

    Ok(Coord::new_unchecked(row - 1, col))
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }
}
