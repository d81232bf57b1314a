use serde::Deserialize;
use xiangqi_core::{
    parse_coord, BoardError, Coord, GameState, MoveError, PieceKind, Placement, Side,
    XiangqiGame,
};

use PieceKind::*;
use Side::*;

fn sq(notation: &str) -> Coord {
    parse_coord(notation).expect("valid coordinate")
}

fn game(pieces: &[(PieceKind, Side, &str)], turn: Side) -> XiangqiGame {
    let placements: Vec<Placement> = pieces
        .iter()
        .map(|&(kind, side, at)| Placement::new(kind, side, sq(at)))
        .collect();
    XiangqiGame::from_placements(&placements, turn).expect("valid setup")
}

fn assert_rejected(game: &mut XiangqiGame, from: &str, to: &str, expected: MoveError) {
    let before = game.clone();
    assert_eq!(game.play(sq(from), sq(to)), Err(expected));
    assert_eq!(*game, before);
    assert!(!game.make_move(from, to));
    assert_eq!(*game, before);
}

#[derive(Debug, Deserialize)]
struct ReplayMove {
    from: String,
    to: String,
    accepted: bool,
}

#[derive(Debug, Deserialize)]
struct ReplayPiece {
    square: String,
    side: String,
    kind: String,
}

#[derive(Debug, Deserialize)]
struct ReplayGame {
    moves: Vec<ReplayMove>,
    state: String,
    turn: String,
    red_in_check: bool,
    black_in_check: bool,
    pieces: Vec<ReplayPiece>,
}

#[test]
fn first_horse_move_hands_turn_to_black() {
    let mut game = XiangqiGame::new();
    assert!(game.make_move("b1", "c3"));
    assert_eq!(game.get_game_state(), GameState::InProgress);
    assert_eq!(game.turn(), Black);
    assert!(game.piece_at(sq("b1")).is_none());

    let horse = game.piece_at(sq("c3")).expect("horse landed");
    assert_eq!((horse.kind, horse.side), (Horse, Red));
}

#[test]
fn notation_is_trimmed_and_case_insensitive() {
    let mut game = XiangqiGame::new();
    assert!(game.make_move(" H3 ", "e3"));
    assert_eq!(game.turn(), Black);
    assert!(game.make_move("H10", "G8"));
    assert_eq!(game.turn(), Red);
}

#[test]
fn malformed_squares_are_rejected() {
    let mut game = XiangqiGame::new();
    let before = game.clone();
    for (from, to) in [("", "a1"), ("j1", "a2"), ("a11", "a10"), ("a0", "a1"), ("b1", "c")] {
        assert!(!game.make_move(from, to), "{from} -> {to}");
    }
    assert_eq!(game, before);
}

#[test]
fn each_rejection_reports_its_reason() {
    let mut game = XiangqiGame::new();
    assert_rejected(&mut game, "e5", "e6", MoveError::EmptySource(sq("e5")));
    assert_rejected(
        &mut game,
        "b10",
        "c8",
        MoveError::WrongTurn {
            from: sq("b10"),
            owner: Black,
            turn: Red,
        },
    );
    assert_rejected(&mut game, "a1", "a4", MoveError::OwnPieceAtDestination(sq("a4")));
    assert_rejected(
        &mut game,
        "b1",
        "b3",
        MoveError::Unreachable {
            from: sq("b1"),
            to: sq("b3"),
        },
    );
    assert_rejected(
        &mut game,
        "h3",
        "h9",
        MoveError::Unreachable {
            from: sq("h3"),
            to: sq("h9"),
        },
    );
    assert_eq!(game.turn(), Red);
}

#[test]
fn off_board_coordinates_are_rejected_without_panicking() {
    let mut game = XiangqiGame::new();
    let before = game.clone();

    assert_eq!(
        game.play(Coord::new_unchecked(0, 1), Coord::new_unchecked(12, 0)),
        Err(MoveError::OffBoard(BoardError::OutOfBounds { row: 12, col: 0 }))
    );
    assert_eq!(
        game.play(Coord::new_unchecked(11, 0), sq("a10")),
        Err(MoveError::OffBoard(BoardError::OutOfBounds { row: 11, col: 0 }))
    );
    assert!(game.play(Coord::new_unchecked(0, 9), sq("a1")).is_err());
    assert_eq!(game, before);

    assert!(game.piece_at(Coord::new_unchecked(10, 0)).is_none());
    assert!(game.legal_moves_from(Coord::new_unchecked(3, 12)).is_empty());
    assert_eq!(game, before);
}

#[test]
fn moves_exposing_the_general_are_rejected() {
    let mut game = game(
        &[
            (General, Red, "e1"),
            (General, Black, "d10"),
            (Chariot, Red, "e2"),
            (Chariot, Black, "e8"),
        ],
        Red,
    );
    assert_rejected(
        &mut game,
        "e2",
        "d2",
        MoveError::LeavesGeneralInCheck {
            from: sq("e2"),
            to: sq("d2"),
            side: Red,
        },
    );
    assert!(game.make_move("e2", "e8"));
    assert_eq!(game.turn(), Black);
    assert!(!game.is_in_check(Red));
}

#[test]
fn general_may_not_face_the_other_general() {
    let mut game = game(&[(General, Red, "d1"), (General, Black, "e10")], Red);
    assert_rejected(
        &mut game,
        "d1",
        "e1",
        MoveError::LeavesGeneralInCheck {
            from: sq("d1"),
            to: sq("e1"),
            side: Red,
        },
    );
    assert_eq!(game.legal_moves_from(sq("d1")).as_slice(), &[sq("d2")]);
}

#[test]
fn legal_moves_only_for_the_side_to_move() {
    let mut game = XiangqiGame::new();
    assert_eq!(game.legal_moves().len(), 44);
    assert!(game.legal_moves_from(sq("b10")).is_empty());
    assert!(game.legal_moves_from(sq("e5")).is_empty());

    let mut horse: Vec<Coord> = game.legal_moves_from(sq("b1")).into_iter().collect();
    horse.sort();
    assert_eq!(horse, vec![sq("a3"), sq("c3")]);
}

#[test]
fn checkmate_ends_the_game_for_the_mover() {
    let mut game = game(
        &[
            (General, Red, "d1"),
            (General, Black, "e10"),
            (Chariot, Red, "a9"),
            (Chariot, Red, "b8"),
        ],
        Red,
    );
    assert!(game.make_move("b8", "b10"));
    assert_eq!(game.get_game_state(), GameState::RedWon);
    assert_eq!(game.get_game_state().as_str(), "RED_WON");
    assert!(game.is_in_check(Black));
    assert_eq!(game.turn(), Red);

    assert_rejected(&mut game, "a9", "a8", MoveError::GameOver);
    assert_rejected(&mut game, "e10", "e9", MoveError::GameOver);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn black_can_deliver_mate_too() {
    let mut game = game(
        &[
            (General, Red, "d1"),
            (General, Black, "f10"),
            (Chariot, Black, "h2"),
            (Chariot, Black, "i3"),
        ],
        Black,
    );
    assert!(game.make_move("i3", "i1"));
    assert_eq!(game.get_game_state(), GameState::BlackWon);
    assert!(game.is_in_check(Red));
    assert_eq!(game.turn(), Black);
}

#[test]
fn leaving_the_opponent_without_moves_wins_even_without_check() {
    let mut game = game(
        &[
            (General, Red, "d1"),
            (General, Black, "e10"),
            (Chariot, Red, "d2"),
            (Chariot, Red, "f2"),
            (Chariot, Red, "a8"),
        ],
        Red,
    );
    assert!(game.make_move("a8", "a9"));
    assert!(!game.is_in_check(Black));
    assert_eq!(game.get_game_state(), GameState::RedWon);
}

#[test]
fn capture_removes_the_piece_from_play() {
    let mut game = XiangqiGame::new();
    assert!(game.make_move("h3", "h10"));
    assert_eq!(game.turn(), Black);
    assert_eq!(game.position().roster(Black).len(), 15);
    let cannon = game.piece_at(sq("h10")).expect("cannon landed");
    assert_eq!((cannon.kind, cannon.side), (Cannon, Red));
    assert_eq!(
        game.position().pieces().iter().filter(|p| p.is_captured()).count(),
        1
    );
}

#[test]
fn replayed_game_matches_recorded_outcome() {
    let fixture_path = format!(
        "{}/tests/fixtures/replay_game.json",
        env!("CARGO_MANIFEST_DIR")
    );
    let fixture = std::fs::read_to_string(&fixture_path).expect("read fixture");
    let replay: ReplayGame = serde_json::from_str(&fixture).expect("parse fixture");

    let mut game = XiangqiGame::new();
    for (i, step) in replay.moves.iter().enumerate() {
        let before = game.clone();
        let accepted = game.make_move(&step.from, &step.to);
        assert_eq!(
            accepted, step.accepted,
            "[{i}] {} -> {}",
            step.from, step.to
        );
        if !accepted {
            assert_eq!(game, before, "[{i}] rejected move changed the game");
        }

        let position = game.position();
        for (coord, id) in position.board().occupied() {
            assert_eq!(position.piece(id).coord, Some(coord), "[{i}]");
        }
        for side in Side::ALL {
            let general = position.occupant(position.general(side)).expect("general");
            assert_eq!((general.kind, general.side), (General, side), "[{i}]");
        }
    }

    assert_eq!(game.get_game_state().as_str(), replay.state);
    assert_eq!(game.turn(), Side::from_name(&replay.turn).expect("side"));
    assert_eq!(game.is_in_check(Red), replay.red_in_check);
    assert_eq!(game.is_in_check(Black), replay.black_in_check);

    let mut actual: Vec<(Coord, Side, PieceKind)> = game
        .position()
        .board()
        .occupied()
        .map(|(coord, id)| {
            let piece = game.position().piece(id);
            (coord, piece.side, piece.kind)
        })
        .collect();
    actual.sort_by_key(|&(coord, _, _)| coord);

    let mut expected: Vec<(Coord, Side, PieceKind)> = replay
        .pieces
        .iter()
        .map(|p| {
            (
                sq(&p.square),
                Side::from_name(&p.side).expect("side"),
                PieceKind::from_tag(&p.kind).expect("kind"),
            )
        })
        .collect();
    expected.sort_by_key(|&(coord, _, _)| coord);

    assert_eq!(actual, expected);
    println!("{game}");
}
