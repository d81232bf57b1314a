use std::fmt::{self, Display, Formatter};

use crate::constants::{BOARD_COLS, BOARD_ROWS};
use crate::game::XiangqiGame;
use crate::position::Position;
use crate::types::Coord;

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_ROWS).rev() {
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..BOARD_COLS {
                match self.occupant(Coord::new_unchecked(row, col)) {
                    Some(piece) => write!(f, "[{}{}]", piece.side.to_code(), piece.kind.tag())?,
                    None => write!(f, "[   ]")?,
                }
            }
            writeln!(f)?;
        }

        write!(f, "   ")?;
        for col in 0..BOARD_COLS {
            write!(f, "  {}  ", (b'a' + col) as char)?;
        }
        Ok(())
    }
}

impl Display for XiangqiGame {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.position())?;
        let state = self.get_game_state();
        if state.is_terminal() {
            write!(f, "{state}")
        } else {
            let check = if self.is_in_check(self.turn()) {
                " (in check)"
            } else {
                ""
            };
            write!(f, "{state} - {} to move{check}", self.turn())
        }
    }
}
