use thiserror::Error;

use crate::board::Board;
use crate::constants::standard_setup;
use crate::movegen::candidate_moves;
use crate::types::{Coord, CoordList, Piece, PieceId, PieceKind, Placement, Side};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("two pieces placed on {0}")]
    Occupied(Coord),
    #[error("{0} has no general")]
    MissingGeneral(Side),
    #[error("{0} has more than one general")]
    DuplicateGeneral(Side),
}

/// Board, piece arena, side rosters and the general-location cache.
///
/// Pieces live in `pieces` for the whole game and are addressed by
/// [`PieceId`]; the board and the rosters only ever store ids. A captured
/// piece stays in the arena with `coord == None` and leaves its roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    pieces: Vec<Piece>,
    rosters: [Vec<PieceId>; 2],
    generals: [Coord; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CapturedPiece {
    id: PieceId,
    /// Roster index the piece was removed from.
    slot: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MoveUndo {
    id: PieceId,
    from: Coord,
    to: Coord,
    captured: Option<CapturedPiece>,
    generals: [Coord; 2],
}

impl MoveUndo {
    pub(crate) fn captured(&self) -> Option<PieceId> {
        self.captured.map(|c| c.id)
    }
}

impl Position {
    pub fn standard() -> Self {
        Self::from_placements(&standard_setup()).expect("standard setup must be valid")
    }

    pub fn from_placements(placements: &[Placement]) -> Result<Self, SetupError> {
        let mut board = Board::empty();
        let mut pieces = Vec::with_capacity(placements.len());
        let mut rosters: [Vec<PieceId>; 2] = [Vec::new(), Vec::new()];
        let mut generals: [Option<Coord>; 2] = [None, None];

        for placement in placements {
            if !board.is_empty(placement.coord) {
                return Err(SetupError::Occupied(placement.coord));
            }
            let side = placement.side;
            if placement.kind == PieceKind::General {
                if generals[side.index()].is_some() {
                    return Err(SetupError::DuplicateGeneral(side));
                }
                generals[side.index()] = Some(placement.coord);
            }

            // at most 90 placements survive the occupancy check
            let id = PieceId(pieces.len() as u8);
            pieces.push(Piece::new(placement.kind, side, placement.coord));
            board.put(placement.coord, Some(id));
            rosters[side.index()].push(id);
        }

        let red = generals[0].ok_or(SetupError::MissingGeneral(Side::Red))?;
        let black = generals[1].ok_or(SetupError::MissingGeneral(Side::Black))?;

        Ok(Self {
            board,
            pieces,
            rosters,
            generals: [red, black],
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn roster(&self, side: Side) -> &[PieceId] {
        &self.rosters[side.index()]
    }

    /// Cached location of `side`'s general.
    pub fn general(&self, side: Side) -> Coord {
        self.generals[side.index()]
    }

    pub fn id_at(&self, coord: Coord) -> Option<PieceId> {
        self.board.get(coord)
    }

    pub fn occupant(&self, coord: Coord) -> Option<&Piece> {
        self.board.get(coord).map(|id| self.piece(id))
    }

    pub fn side_at(&self, coord: Coord) -> Option<Side> {
        self.occupant(coord).map(|piece| piece.side)
    }

    /// Pseudo-legal destinations that are not held by the piece's own side.
    pub fn valid_moves(&self, id: PieceId) -> CoordList {
        let piece = self.piece(id);
        let mut moves = candidate_moves(self, piece);
        moves.retain(|to| self.side_at(*to) != Some(piece.side));
        moves
    }

    /// Plays `id` to `to` hypothetically, capturing whatever stands there,
    /// and reports whether the mover's general is safe afterwards.
    ///
    /// The position is restored exactly before returning, on every path.
    pub fn test_move(&mut self, id: PieceId, to: Coord) -> bool {
        let side = self.piece(id).side;
        let Some(undo) = self.apply(id, to) else {
            return false;
        };
        let safe = !self.is_in_check(side);
        self.undo(undo);
        safe
    }

    /// Destinations of `id` that survive the self-check test.
    pub fn legal_moves_for(&mut self, id: PieceId) -> CoordList {
        let mut moves = self.valid_moves(id);
        moves.retain(|to| self.test_move(id, *to));
        moves
    }

    pub fn legal_moves(&mut self, side: Side) -> Vec<(Coord, Coord)> {
        let roster = self.rosters[side.index()].clone();
        let mut moves = Vec::new();
        for id in roster {
            let Some(from) = self.piece(id).coord else {
                continue;
            };
            for to in self.legal_moves_for(id) {
                moves.push((from, to));
            }
        }
        moves
    }

    /// Whether any piece of `side` has at least one legal move.
    pub fn has_legal_move(&mut self, side: Side) -> bool {
        let roster = self.rosters[side.index()].clone();
        for id in roster {
            for to in self.valid_moves(id) {
                if self.test_move(id, to) {
                    return true;
                }
            }
        }
        false
    }

    /// Relocates `id` to `to` for good and returns the captured piece, if any.
    pub(crate) fn commit(&mut self, id: PieceId, to: Coord) -> Option<PieceId> {
        self.apply(id, to).and_then(|undo| undo.captured())
    }

    pub(crate) fn apply(&mut self, id: PieceId, to: Coord) -> Option<MoveUndo> {
        let piece = *self.piece(id);
        let from = piece.coord?;
        let generals = self.generals;

        let captured = match self.board.get(to) {
            Some(other) if other != id => Some(self.remove_from_play(other)),
            _ => None,
        };

        self.board.put(from, None);
        self.board.put(to, Some(id));
        self.pieces[id.index()].coord = Some(to);
        if piece.kind == PieceKind::General {
            self.generals[piece.side.index()] = to;
        }

        Some(MoveUndo {
            id,
            from,
            to,
            captured,
            generals,
        })
    }

    pub(crate) fn undo(&mut self, undo: MoveUndo) {
        self.board.put(undo.to, None);
        self.board.put(undo.from, Some(undo.id));
        self.pieces[undo.id.index()].coord = Some(undo.from);

        if let Some(captured) = undo.captured {
            self.board.put(undo.to, Some(captured.id));
            self.pieces[captured.id.index()].coord = Some(undo.to);
            if let Some(slot) = captured.slot {
                let side = self.pieces[captured.id.index()].side;
                self.rosters[side.index()].insert(slot, captured.id);
            }
        }

        self.generals = undo.generals;
    }

    fn remove_from_play(&mut self, id: PieceId) -> CapturedPiece {
        let side = self.pieces[id.index()].side;
        let roster = &mut self.rosters[side.index()];
        let slot = roster.iter().position(|&other| other == id);
        if let Some(slot) = slot {
            roster.remove(slot);
        }
        self.pieces[id.index()].coord = None;
        CapturedPiece { id, slot }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}
