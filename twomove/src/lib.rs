pub mod error;
pub mod game;
pub mod position;
pub mod session;
pub mod status;
pub mod turn;

pub use error::{CommandParseError, MoveRejection, PositionError};
pub use game::{MoveReport, TwoMoveGame};
pub use session::{Command, SessionEvent};
pub use turn::{MoveFacts, Transition, TurnPhase, TurnState};
