pub mod board;
pub mod constants;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod position;
mod render;
pub mod types;

pub use board::{Board, BoardError};
pub use constants::{standard_setup, ALL_COORDS, BOARD_COLS, BOARD_ROWS};
pub use game::{MoveError, XiangqiGame};
pub use movegen::candidate_moves;
pub use notation::{parse_coord, NotationError};
pub use position::{Position, SetupError};
pub use types::{Coord, CoordList, GameState, Piece, PieceId, PieceKind, Placement, Side};
