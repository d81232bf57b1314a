//! Pseudo-legal destinations per piece kind.
//!
//! Every generator here accounts for blocking (horse leg, elephant eye,
//! sliding stops, cannon screens) and for the kind's destination domain, but
//! not for same-side occupancy or self-check; [`Position::valid_moves`] and
//! [`Position::test_move`] apply those.

use crate::constants::{has_crossed_river, in_domain, DIAGONAL, ORTHOGONAL};
use crate::position::Position;
use crate::types::{Coord, CoordList, Piece, PieceKind, Side};

pub fn candidate_moves(position: &Position, piece: &Piece) -> CoordList {
    let Some(origin) = piece.coord else {
        return CoordList::new();
    };

    let mut out = CoordList::new();
    match piece.kind {
        PieceKind::General => general_moves(origin, piece.side, &mut out),
        PieceKind::Advisor => advisor_moves(origin, piece.side, &mut out),
        PieceKind::Elephant => elephant_moves(position, origin, piece.side, &mut out),
        PieceKind::Horse => horse_moves(position, origin, &mut out),
        PieceKind::Chariot => chariot_moves(position, origin, piece.side, &mut out),
        PieceKind::Cannon => cannon_moves(position, origin, piece.side, &mut out),
        PieceKind::Soldier => soldier_moves(origin, piece.side, &mut out),
    }
    out
}

fn general_moves(origin: Coord, side: Side, out: &mut CoordList) {
    for (dr, dc) in ORTHOGONAL {
        if let Some(to) = origin.offset(dr, dc) {
            if in_domain(PieceKind::General, side, to) {
                out.push(to);
            }
        }
    }
}

fn advisor_moves(origin: Coord, side: Side, out: &mut CoordList) {
    for (dr, dc) in DIAGONAL {
        if let Some(to) = origin.offset(dr, dc) {
            if in_domain(PieceKind::Advisor, side, to) {
                out.push(to);
            }
        }
    }
}

fn elephant_moves(position: &Position, origin: Coord, side: Side, out: &mut CoordList) {
    for (dr, dc) in DIAGONAL {
        let Some(eye) = origin.offset(dr, dc) else {
            continue;
        };
        if !position.board().is_empty(eye) {
            continue;
        }
        if let Some(to) = origin.offset(dr * 2, dc * 2) {
            if in_domain(PieceKind::Elephant, side, to) {
                out.push(to);
            }
        }
    }
}

fn horse_moves(position: &Position, origin: Coord, out: &mut CoordList) {
    for (dr, dc) in ORTHOGONAL {
        let Some(leg) = origin.offset(dr, dc) else {
            continue;
        };
        if !position.board().is_empty(leg) {
            continue;
        }
        let landings = if dr != 0 {
            [(dr * 2, 1), (dr * 2, -1)]
        } else {
            [(1, dc * 2), (-1, dc * 2)]
        };
        for (lr, lc) in landings {
            if let Some(to) = origin.offset(lr, lc) {
                out.push(to);
            }
        }
    }
}

fn chariot_moves(position: &Position, origin: Coord, side: Side, out: &mut CoordList) {
    for (dr, dc) in ORTHOGONAL {
        let mut cursor = origin.offset(dr, dc);
        while let Some(to) = cursor {
            match position.side_at(to) {
                None => out.push(to),
                Some(owner) => {
                    if owner != side {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to.offset(dr, dc);
        }
    }
}

fn cannon_moves(position: &Position, origin: Coord, side: Side, out: &mut CoordList) {
    for (dr, dc) in ORTHOGONAL {
        let mut cursor = origin.offset(dr, dc);
        // quiet slide up to the screen
        while let Some(to) = cursor {
            if !position.board().is_empty(to) {
                break;
            }
            out.push(to);
            cursor = to.offset(dr, dc);
        }

        let Some(screen) = cursor else {
            continue;
        };
        let mut cursor = screen.offset(dr, dc);
        while let Some(to) = cursor {
            if let Some(owner) = position.side_at(to) {
                if owner != side {
                    out.push(to);
                }
                break;
            }
            cursor = to.offset(dr, dc);
        }
    }
}

fn soldier_moves(origin: Coord, side: Side, out: &mut CoordList) {
    let forward = match side {
        Side::Red => 1,
        Side::Black => -1,
    };
    if let Some(to) = origin.offset(forward, 0) {
        out.push(to);
    }
    if has_crossed_river(side, origin) {
        for dc in [-1, 1] {
            if let Some(to) = origin.offset(0, dc) {
                out.push(to);
            }
        }
    }
}
