use cozy_chess::*;

use crate::error::{MoveRejection, PositionError};
use crate::position::{canonicalize_move, decanonicalize_move, hand_move_back, is_capture, queen_promotion};
use crate::status::status_text;
use crate::turn::{MoveFacts, Transition, TurnState};

/// A game of two-move chess: the rules engine position, its history and the
/// bonus sequence bookkeeping layered on top.
#[derive(Debug, Clone)]
pub struct TwoMoveGame {
    init_pos: Board,
    stack: Vec<(Move, Board)>,
    turn: TurnState
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Engine encoding; castling is king-onto-rook.
    pub mv: Move,
    /// Squares as the board UI reported them.
    pub notation: String,
    pub capture: bool,
    /// `None` when the move ended the game.
    pub transition: Option<Transition>,
    pub status: String
}

impl Default for TwoMoveGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TwoMoveGame {
    pub fn new() -> Self {
        Self::with_position(Board::default())
    }

    pub fn with_position(init_pos: Board) -> Self {
        Self {
            init_pos,
            stack: Vec::new(),
            turn: TurnState::rest()
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let board = Board::from_fen(fen, false)
            .map_err(|_| PositionError::InvalidFen(fen.to_owned()))?;
        Ok(Self::with_position(board))
    }

    pub fn init_pos(&self) -> &Board {
        &self.init_pos
    }

    pub fn history(&self) -> &[(Move, Board)] {
        &self.stack
    }

    pub fn board(&self) -> &Board {
        self.stack.last().map_or(&self.init_pos, |(_, b)| b)
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn fen(&self) -> String {
        format!("{}", self.board())
    }

    pub fn status(&self) -> GameStatus {
        let board = self.board();
        let status = board.status();
        if status != GameStatus::Ongoing {
            return status;
        }
        if insufficient_material(board) {
            return GameStatus::Drawn;
        }
        let repetitions = std::iter::once(&self.init_pos)
            .chain(self.stack.iter().map(|(_, b)| b))
            .filter(|b| b.same_position(board))
            .count();
        if repetitions >= 3 {
            return GameStatus::Drawn;
        }
        GameStatus::Ongoing
    }

    pub fn winner(&self) -> Option<Color> {
        match self.status() {
            GameStatus::Won => Some(!self.board().side_to_move()),
            _ => None
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    pub fn status_text(&self) -> String {
        status_text(self.board(), self.status(), &self.turn)
    }

    /// Whether the piece on `square` may be picked up.
    pub fn can_pick_up(&self, square: Square) -> bool {
        if self.is_over() {
            return false;
        }
        let board = self.board();
        match board.color_on(square) {
            Some(color) => color == board.side_to_move() && self.turn.allows(color),
            None => false
        }
    }

    /// Plays the piece dropped from `from` onto `to`. On rejection nothing changes.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveReport, MoveRejection> {
        if self.is_over() {
            return Err(MoveRejection::GameOver);
        }
        let board = self.board();
        let mover = board.side_to_move();
        match board.color_on(from) {
            None => return Err(MoveRejection::NoPiece(from)),
            Some(color) if color != mover || !self.turn.allows(color) => {
                return Err(MoveRejection::NotYourPiece(from));
            }
            Some(_) => {}
        }
        let promotion = queen_promotion(board, from, to);
        let mv = canonicalize_move(board, Move { from, to, promotion });
        let capture = is_capture(board, mv);
        let notation = format!("{}", decanonicalize_move(board, mv));
        let mut child = board.clone();
        if child.try_play(mv).is_err() {
            return Err(MoveRejection::Illegal { from, to });
        }

        let transition = self.on_move_accepted(&mut child, mover, capture);
        self.stack.push((mv, child));
        let transition = if self.is_over() {
            log::info!("game over: {}", self.status_text());
            self.turn = TurnState::rest();
            None
        } else {
            transition
        };
        Ok(MoveReport {
            mv,
            notation,
            capture,
            transition,
            status: self.status_text()
        })
    }

    fn on_move_accepted(&mut self, child: &mut Board, mover: Color, capture: bool) -> Option<Transition> {
        if child.status() != GameStatus::Ongoing {
            return None;
        }
        let facts = MoveFacts {
            mover,
            capture,
            gives_check: !child.checkers().is_empty()
        };
        let (mut turn, mut transition) = self.turn.after_move(facts);
        if let Transition::Continue { player } = transition {
            // Checking moves already ended the sequence; any position the engine
            // still refuses to build forfeits the second move.
            match hand_move_back(child, player) {
                Ok(board) => *child = board,
                Err(e) => {
                    log::warn!("cannot hand the move back to {:?}: {}", player, e);
                    (turn, transition) = turn.forfeit_sequence(mover);
                }
            }
        }
        log::debug!("{:?} moved, capture: {}, {:?} -> {:?}", mover, capture, self.turn, turn);
        self.turn = turn;
        Some(transition)
    }

    pub fn reset(&mut self) {
        log::info!("resetting game");
        self.stack.clear();
        self.turn = TurnState::rest();
    }
}

fn insufficient_material(board: &Board) -> bool {
    let others = board.occupied() ^ board.pieces(Piece::King);
    let bishops = board.pieces(Piece::Bishop);
    match others.len() {
        0 => true,
        1 => !(others & (board.pieces(Piece::Knight) | bishops)).is_empty(),
        // Bishops that all stand on one square colour can never mate.
        _ => others == bishops
            && ((bishops & BitBoard::DARK_SQUARES).is_empty()
                || (bishops & BitBoard::LIGHT_SQUARES).is_empty())
    }
}
