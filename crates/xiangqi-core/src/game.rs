use log::{debug, info, trace};
use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::notation::{parse_coord, NotationError};
use crate::position::{Position, SetupError};
use crate::types::{Coord, CoordList, GameState, Piece, Placement, Side};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("bad coordinate: {0}")]
    Notation(#[from] NotationError),
    #[error(transparent)]
    OffBoard(#[from] BoardError),
    #[error("no piece on {0}")]
    EmptySource(Coord),
    #[error("piece on {from} belongs to {owner}, but it is {turn}'s turn")]
    WrongTurn { from: Coord, owner: Side, turn: Side },
    #[error("{0} is occupied by the mover's own piece")]
    OwnPieceAtDestination(Coord),
    #[error("the piece on {from} cannot reach {to}")]
    Unreachable { from: Coord, to: Coord },
    #[error("moving {from} to {to} leaves the {side} general in check")]
    LeavesGeneralInCheck { from: Coord, to: Coord, side: Side },
}

impl Position {
    /// Whether `side`'s general is attacked, or the two generals face each
    /// other on an open column.
    ///
    /// The face-off clause holds for either side whenever it occurs, no
    /// matter which side is asked about.
    pub fn is_in_check(&self, side: Side) -> bool {
        let general = self.general(side);
        let attacked = self
            .roster(side.opponent())
            .iter()
            .any(|&id| self.valid_moves(id).contains(&general));

        attacked || self.generals_facing()
    }

    pub fn generals_facing(&self) -> bool {
        let red = self.general(Side::Red);
        let black = self.general(Side::Black);
        if red.col() != black.col() {
            return false;
        }

        let (low, high) = if red.row() <= black.row() {
            (red.row(), black.row())
        } else {
            (black.row(), red.row())
        };
        (low + 1..high).all(|row| self.board().is_empty(Coord::new_unchecked(row, red.col())))
    }
}

/// Re-checks a caller-supplied coordinate against the board range.
fn on_board(coord: Coord) -> Result<Coord, BoardError> {
    Board::coord(coord.row().into(), coord.col().into())
}

/// One game of xiangqi: a position, the side to move and the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XiangqiGame {
    position: Position,
    turn: Side,
    state: GameState,
}

impl Default for XiangqiGame {
    fn default() -> Self {
        Self::new()
    }
}

impl XiangqiGame {
    pub fn new() -> Self {
        Self {
            position: Position::standard(),
            turn: Side::Red,
            state: GameState::InProgress,
        }
    }

    pub fn from_placements(placements: &[Placement], turn: Side) -> Result<Self, SetupError> {
        Ok(Self {
            position: Position::from_placements(placements)?,
            turn,
            state: GameState::InProgress,
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn get_game_state(&self) -> GameState {
        self.state
    }

    pub fn is_in_check(&self, side: Side) -> bool {
        self.position.is_in_check(side)
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.position.occupant(on_board(coord).ok()?)
    }

    /// Legal destinations for the piece on `from`; empty unless it belongs to the side to move.
    pub fn legal_moves_from(&mut self, from: Coord) -> CoordList {
        if self.state.is_terminal() || on_board(from).is_err() {
            return CoordList::new();
        }
        match self.position.id_at(from) {
            Some(id) if self.position.piece(id).side == self.turn => {
                self.position.legal_moves_for(id)
            }
            _ => CoordList::new(),
        }
    }

    /// Every legal (from, to) pair for the side to move.
    pub fn legal_moves(&mut self) -> Vec<(Coord, Coord)> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        self.position.legal_moves(self.turn)
    }

    /// Plays a move given in coordinate notation, e.g. `make_move("b1", "c3")`.
    ///
    /// Returns `false` and leaves the game untouched when the move is rejected
    /// for any reason.
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        let result = parse_coord(from)
            .and_then(|from| parse_coord(to).map(|to| (from, to)))
            .map_err(MoveError::from)
            .and_then(|(from, to)| self.play(from, to));

        match result {
            Ok(()) => true,
            Err(err) => {
                debug!("rejected {from} -> {to}: {err}");
                false
            }
        }
    }

    pub fn play(&mut self, from: Coord, to: Coord) -> Result<(), MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let from = on_board(from)?;
        let to = on_board(to)?;

        let id = self
            .position
            .id_at(from)
            .ok_or(MoveError::EmptySource(from))?;
        let mover = *self.position.piece(id);
        if mover.side != self.turn {
            return Err(MoveError::WrongTurn {
                from,
                owner: mover.side,
                turn: self.turn,
            });
        }

        if self.position.side_at(to) == Some(mover.side) {
            return Err(MoveError::OwnPieceAtDestination(to));
        }
        if !self.position.valid_moves(id).contains(&to) {
            return Err(MoveError::Unreachable { from, to });
        }
        if !self.position.test_move(id, to) {
            return Err(MoveError::LeavesGeneralInCheck {
                from,
                to,
                side: mover.side,
            });
        }

        let captured = self.position.commit(id, to);
        trace!(
            "{} {} {from} -> {to}{}",
            mover.side,
            mover.kind.name(),
            if captured.is_some() { " (capture)" } else { "" }
        );

        let opponent = self.turn.opponent();
        if !self.position.has_legal_move(opponent) {
            self.state = GameState::won_by(self.turn);
            info!("{opponent} has no legal reply; {}", self.state);
            return Ok(());
        }

        self.turn = opponent;
        Ok(())
    }
}
