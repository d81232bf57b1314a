use wasm_bindgen::prelude::*;

use serde::Serialize;
use xiangqi_core::{parse_coord, Coord, Side, XiangqiGame};

/// Initialize panic hook for readable error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Serializable piece representation for JS consumers.
#[derive(Serialize)]
struct JsPiece {
    square: String,
    side: &'static str,
    kind: &'static str,
    tag: &'static str,
    hanzi: char,
}

#[derive(Serialize)]
struct JsMove {
    from: String,
    to: String,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn square(notation: &str) -> Result<Coord, JsError> {
    parse_coord(notation).map_err(|e| JsError::new(&e.to_string()))
}

fn side(name: &str) -> Result<Side, JsError> {
    Side::from_name(&name.to_ascii_lowercase())
        .ok_or_else(|| JsError::new("invalid side: expected \"red\" or \"black\""))
}

#[wasm_bindgen]
pub struct XiangqiEngine {
    game: XiangqiGame,
}

impl Default for XiangqiEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl XiangqiEngine {
    /// Create a game in the standard opening position, red to move.
    #[wasm_bindgen(constructor)]
    pub fn new() -> XiangqiEngine {
        Self {
            game: XiangqiGame::new(),
        }
    }

    /// Make a move given two squares like "b1" and "c3". Returns false if rejected.
    #[wasm_bindgen(js_name = "makeMove")]
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        self.game.make_move(from, to)
    }

    /// Like `makeMove`, but throws with the rejection reason.
    pub fn play(&mut self, from: &str, to: &str) -> Result<(), JsError> {
        let from = square(from)?;
        let to = square(to)?;
        self.game
            .play(from, to)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// "UNFINISHED", "RED_WON" or "BLACK_WON".
    #[wasm_bindgen(js_name = "gameState")]
    pub fn game_state(&self) -> String {
        self.game.get_game_state().as_str().to_string()
    }

    /// "red" or "black".
    pub fn turn(&self) -> String {
        self.game.turn().name().to_string()
    }

    #[wasm_bindgen(js_name = "isInCheck")]
    pub fn is_in_check(&self, side_name: &str) -> Result<bool, JsError> {
        Ok(self.game.is_in_check(side(side_name)?))
    }

    /// Every piece on the board as `{ square, side, kind, tag, hanzi }`.
    pub fn board(&self) -> Result<JsValue, JsError> {
        let position = self.game.position();
        let pieces: Vec<JsPiece> = position
            .board()
            .occupied()
            .map(|(coord, id)| {
                let piece = position.piece(id);
                JsPiece {
                    square: coord.to_string(),
                    side: piece.side.name(),
                    kind: piece.kind.name(),
                    tag: piece.kind.tag(),
                    hanzi: piece.kind.hanzi(piece.side),
                }
            })
            .collect();
        to_js(&pieces)
    }

    /// Legal destinations of the piece on `from`, as square strings.
    #[wasm_bindgen(js_name = "legalMovesFrom")]
    pub fn legal_moves_from(&mut self, from: &str) -> Result<JsValue, JsError> {
        let from = square(from)?;
        let targets: Vec<String> = self
            .game
            .legal_moves_from(from)
            .iter()
            .map(Coord::to_string)
            .collect();
        to_js(&targets)
    }

    /// All legal moves for the side to move as `{ from, to }` objects.
    #[wasm_bindgen(js_name = "legalMoves")]
    pub fn legal_moves(&mut self) -> Result<JsValue, JsError> {
        let moves: Vec<JsMove> = self
            .game
            .legal_moves()
            .into_iter()
            .map(|(from, to)| JsMove {
                from: from.to_string(),
                to: to.to_string(),
            })
            .collect();
        to_js(&moves)
    }

    /// Text diagram of the board followed by the game status.
    pub fn render(&self) -> String {
        self.game.to_string()
    }
}
