use cozy_chess::Square;
use thiserror::Error;

/// Why a dropped piece snaps back to its source square.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("game is over")]
    GameOver,
    #[error("no piece on {0}")]
    NoPiece(Square),
    #[error("piece on {0} cannot move now")]
    NotYourPiece(Square),
    #[error("illegal move {from}{to}")]
    Illegal {
        from: Square,
        to: Square
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid fen {0:?}")]
    InvalidFen(String),
    #[error("rules engine rejected the position")]
    Rejected
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("invalid square {0:?}")]
    InvalidSquare(String),
    #[error("unknown command {0:?}")]
    Unknown(String)
}
