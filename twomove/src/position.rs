use cozy_chess::*;

use crate::error::PositionError;

/// Gives the move back to `player` after they moved, dropping any en passant
/// target their move created. The opponent never gets a turn to use it.
pub fn hand_move_back(board: &Board, player: Color) -> Result<Board, PositionError> {
    let mut builder = BoardBuilder::from_board(board);
    if let Some(file) = board.en_passant() {
        log::debug!("clearing en passant target on file {:?}", file);
    }
    builder.side_to_move = player;
    builder.en_passant = None;
    builder.build().map_err(|_| PositionError::Rejected)
}

/// `mv` must be legal on `board`.
pub fn is_capture(board: &Board, mv: Move) -> bool {
    if board.colors(!board.side_to_move()).has(mv.to) {
        return true;
    }
    // A pawn changing files onto an empty square is taking en passant.
    board.piece_on(mv.from) == Some(Piece::Pawn) && mv.from.file() != mv.to.file()
}

pub fn queen_promotion(board: &Board, from: Square, to: Square) -> Option<Piece> {
    if board.piece_on(from) != Some(Piece::Pawn) {
        return None;
    }
    let last_rank = match board.color_on(from)? {
        Color::White => Rank::Eighth,
        Color::Black => Rank::First
    };
    if to.rank() == last_rank {
        Some(Piece::Queen)
    } else {
        None
    }
}

/// King-onto-rook castling back to the two-file king step a board UI reports.
/// Other moves pass through unchanged.
pub fn decanonicalize_move(board: &Board, mut mv: Move) -> Move {
    let castles = board.piece_on(mv.from) == Some(Piece::King)
        && board.color_on(mv.to) == Some(board.side_to_move());
    if castles {
        let king_file = if mv.to.file() as usize > mv.from.file() as usize { File::G } else { File::C };
        mv.to = Square::new(king_file, mv.to.rank());
    }
    mv
}

/// Two-file king step from the e-file to the engine's king-onto-rook encoding.
pub fn canonicalize_move(board: &Board, mut mv: Move) -> Move {
    let king_step = board.piece_on(mv.from) == Some(Piece::King)
        && mv.from.file() == File::E
        && matches!(mv.to.file(), File::C | File::G);
    if king_step {
        let rook_file = match mv.to.file() {
            File::C => File::A,
            _ => File::H
        };
        mv.to = Square::new(rook_file, mv.to.rank());
    }
    mv
}
