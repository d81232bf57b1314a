use std::fmt;

use arrayvec::ArrayVec;

use crate::constants::{BOARD_COLS, BOARD_ROWS};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red = 0,
    Black = 1,
}

impl Side {
    pub const ALL: [Self; 2] = [Self::Red, Self::Black];

    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_code(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Black => 'b',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "red" | "r" => Some(Self::Red),
            "black" | "b" => Some(Self::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    General = 0,
    Advisor = 1,
    Elephant = 2,
    Horse = 3,
    Chariot = 4,
    Cannon = 5,
    Soldier = 6,
}

impl PieceKind {
    pub const ALL: [Self; 7] = [
        Self::General,
        Self::Advisor,
        Self::Elephant,
        Self::Horse,
        Self::Chariot,
        Self::Cannon,
        Self::Soldier,
    ];

    /// Two-letter tag used by the text board.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::General => "Ge",
            Self::Advisor => "Ad",
            Self::Elephant => "El",
            Self::Horse => "Ho",
            Self::Chariot => "Ch",
            Self::Cannon => "Ca",
            Self::Soldier => "So",
        }
    }

    pub const fn hanzi(self, side: Side) -> char {
        match (side, self) {
            (Side::Red, Self::General) => '帥',
            (Side::Red, Self::Advisor) => '仕',
            (Side::Red, Self::Elephant) => '相',
            (Side::Red, Self::Horse) => '傌',
            (Side::Red, Self::Chariot) => '俥',
            (Side::Red, Self::Cannon) => '炮',
            (Side::Red, Self::Soldier) => '兵',
            (Side::Black, Self::General) => '將',
            (Side::Black, Self::Advisor) => '士',
            (Side::Black, Self::Elephant) => '象',
            (Side::Black, Self::Horse) => '馬',
            (Side::Black, Self::Chariot) => '車',
            (Side::Black, Self::Cannon) => '砲',
            (Side::Black, Self::Soldier) => '卒',
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Advisor => "advisor",
            Self::Elephant => "elephant",
            Self::Horse => "horse",
            Self::Chariot => "chariot",
            Self::Cannon => "cannon",
            Self::Soldier => "soldier",
        }
    }
}

/// A board point. Row 0 is Red's back rank, column 0 is the `a` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_ROWS && col < BOARD_COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    pub const fn index(self) -> usize {
        self.row as usize * BOARD_COLS as usize + self.col as usize
    }

    /// Shifts by a signed delta, returning `None` when the result leaves the board.
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    /// `None` once the piece has been captured.
    pub coord: Option<Coord>,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side, coord: Coord) -> Self {
        Self {
            kind,
            side,
            coord: Some(coord),
        }
    }

    pub const fn is_captured(&self) -> bool {
        self.coord.is_none()
    }
}

/// One entry of a setup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub kind: PieceKind,
    pub side: Side,
    pub coord: Coord,
}

impl Placement {
    pub const fn new(kind: PieceKind, side: Side, coord: Coord) -> Self {
        Self { kind, side, coord }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    InProgress,
    RedWon,
    BlackWon,
}

impl GameState {
    pub const fn won_by(side: Side) -> Self {
        match side {
            Side::Red => Self::RedWon,
            Side::Black => Self::BlackWon,
        }
    }

    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "UNFINISHED",
            Self::RedWon => "RED_WON",
            Self::BlackWon => "BLACK_WON",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destinations of a single piece. A chariot or cannon on an open board reaches at most 17 points.
pub type CoordList = ArrayVec<Coord, 17>;
