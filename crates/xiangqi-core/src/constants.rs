use arrayvec::ArrayVec;

use crate::types::{Coord, PieceKind, Placement, Side};

pub const BOARD_ROWS: u8 = 10;
pub const BOARD_COLS: u8 = 9;
pub const BOARD_CELLS: usize = BOARD_ROWS as usize * BOARD_COLS as usize;

pub const PALACE_COLS: (u8, u8) = (3, 5);

/// Last row on Red's side of the river; Black's side starts one row above.
pub const RED_RIVER_ROW: u8 = 4;
pub const BLACK_RIVER_ROW: u8 = 5;

pub const ADVISOR_POINTS: [[(u8, u8); 5]; 2] = [
    [(0, 3), (0, 5), (1, 4), (2, 3), (2, 5)],
    [(7, 3), (7, 5), (8, 4), (9, 3), (9, 5)],
];

pub const ELEPHANT_POINTS: [[(u8, u8); 7]; 2] = [
    [(0, 2), (0, 6), (2, 0), (2, 4), (2, 8), (4, 2), (4, 6)],
    [(5, 2), (5, 6), (7, 0), (7, 4), (7, 8), (9, 2), (9, 6)],
];

pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const ALL_COORDS: [Coord; BOARD_CELLS] = {
    let mut coords = [Coord::new_unchecked(0, 0); BOARD_CELLS];
    let mut idx = 0;
    while idx < BOARD_CELLS {
        let row = (idx / BOARD_COLS as usize) as u8;
        let col = (idx % BOARD_COLS as usize) as u8;
        coords[idx] = Coord::new_unchecked(row, col);
        idx += 1;
    }
    coords
};

/// Red's home layout as (kind, row, col). Black mirrors it across the river.
const HOME_LAYOUT: [(PieceKind, u8, u8); 16] = [
    (PieceKind::General, 0, 4),
    (PieceKind::Advisor, 0, 3),
    (PieceKind::Advisor, 0, 5),
    (PieceKind::Elephant, 0, 2),
    (PieceKind::Elephant, 0, 6),
    (PieceKind::Horse, 0, 1),
    (PieceKind::Horse, 0, 7),
    (PieceKind::Chariot, 0, 0),
    (PieceKind::Chariot, 0, 8),
    (PieceKind::Cannon, 2, 1),
    (PieceKind::Cannon, 2, 7),
    (PieceKind::Soldier, 3, 0),
    (PieceKind::Soldier, 3, 2),
    (PieceKind::Soldier, 3, 4),
    (PieceKind::Soldier, 3, 6),
    (PieceKind::Soldier, 3, 8),
];

pub type SetupTable = ArrayVec<Placement, 32>;

/// The opening placement table, Red first.
pub fn standard_setup() -> SetupTable {
    let mut table = SetupTable::new();
    for side in Side::ALL {
        for (kind, row, col) in HOME_LAYOUT {
            let row = match side {
                Side::Red => row,
                Side::Black => BOARD_ROWS - 1 - row,
            };
            table.push(Placement::new(kind, side, Coord::new_unchecked(row, col)));
        }
    }
    table
}

pub const fn in_palace(side: Side, coord: Coord) -> bool {
    let rows_ok = match side {
        Side::Red => coord.row() <= 2,
        Side::Black => coord.row() >= 7,
    };
    rows_ok && coord.col() >= PALACE_COLS.0 && coord.col() <= PALACE_COLS.1
}

pub const fn has_crossed_river(side: Side, coord: Coord) -> bool {
    match side {
        Side::Red => coord.row() >= BLACK_RIVER_ROW,
        Side::Black => coord.row() <= RED_RIVER_ROW,
    }
}

/// Whether `coord` belongs to the fixed destination set of a piece of this kind and side.
pub fn in_domain(kind: PieceKind, side: Side, coord: Coord) -> bool {
    let point = (coord.row(), coord.col());
    match kind {
        PieceKind::General => in_palace(side, coord),
        PieceKind::Advisor => ADVISOR_POINTS[side.index()].contains(&point),
        PieceKind::Elephant => ELEPHANT_POINTS[side.index()].contains(&point),
        PieceKind::Horse | PieceKind::Chariot | PieceKind::Cannon | PieceKind::Soldier => true,
    }
}
