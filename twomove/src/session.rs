use std::str::FromStr;

use cozy_chess::*;
use futures_core::Stream;
use futures_util::StreamExt;

use crate::error::{CommandParseError, MoveRejection};
use crate::game::{MoveReport, TwoMoveGame};

/// Input from the board UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PickUp(Square),
    Drop {
        from: Square,
        to: Square
    },
    Reset,
    Status,
    Quit
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    PickUp {
        square: Square,
        allowed: bool
    },
    Moved {
        report: MoveReport,
        board: Board
    },
    SnapBack {
        from: Square,
        to: Square,
        reason: MoveRejection
    },
    Reset {
        board: Board,
        status: String
    },
    Status {
        board: Board,
        status: String
    },
    GameOver {
        winner: Option<Color>
    }
}

fn parse_square(s: &str) -> Result<Square, CommandParseError> {
    s.parse().map_err(|_| CommandParseError::InvalidSquare(s.to_owned()))
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(CommandParseError::Empty),
            ["reset"] => Ok(Self::Reset),
            ["status"] | ["board"] => Ok(Self::Status),
            ["quit"] | ["exit"] => Ok(Self::Quit),
            ["pick", square] => Ok(Self::PickUp(parse_square(square)?)),
            [from, to] => Ok(Self::Drop {
                from: parse_square(from)?,
                to: parse_square(to)?
            }),
            [mv] if mv.len() == 4 && mv.is_char_boundary(2) => Ok(Self::Drop {
                from: parse_square(&mv[..2])?,
                to: parse_square(&mv[2..])?
            }),
            _ => Err(CommandParseError::Unknown(s.clone()))
        }
    }
}

/// Drives `game` with UI commands, one at a time, until the commands run out
/// or [`Command::Quit`] arrives.
pub fn run<S>(mut game: TwoMoveGame, commands: S) -> impl Stream<Item = SessionEvent>
where
    S: Stream<Item = Command>
{
    async_stream::stream! {
        futures_util::pin_mut!(commands);
        while let Some(command) = commands.next().await {
            match command {
                Command::PickUp(square) => {
                    let allowed = game.can_pick_up(square);
                    yield SessionEvent::PickUp { square, allowed };
                }
                Command::Drop { from, to } => match game.try_move(from, to) {
                    Ok(report) => {
                        let board = game.board().clone();
                        yield SessionEvent::Moved { report, board };
                        if game.is_over() {
                            yield SessionEvent::GameOver { winner: game.winner() };
                        }
                    }
                    Err(reason) => {
                        log::debug!("snapback {}{}: {}", from, to, reason);
                        yield SessionEvent::SnapBack { from, to, reason };
                    }
                },
                Command::Reset => {
                    game.reset();
                    let board = game.board().clone();
                    yield SessionEvent::Reset { board, status: game.status_text() };
                }
                Command::Status => {
                    let board = game.board().clone();
                    yield SessionEvent::Status { board, status: game.status_text() };
                }
                Command::Quit => break
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("e2e4".parse::<Command>(), Ok(Command::Drop { from: Square::E2, to: Square::E4 }));
        assert_eq!(" E2 E4 ".parse::<Command>(), Ok(Command::Drop { from: Square::E2, to: Square::E4 }));
        assert_eq!("pick g1".parse::<Command>(), Ok(Command::PickUp(Square::G1)));
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("board".parse::<Command>(), Ok(Command::Status));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("".parse::<Command>(), Err(CommandParseError::Empty));
        assert_eq!("e2e9".parse::<Command>(), Err(CommandParseError::InvalidSquare("e9".to_owned())));
        assert_eq!("resign now".parse::<Command>(), Err(CommandParseError::InvalidSquare("resign".to_owned())));
        assert_eq!("castle".parse::<Command>(), Err(CommandParseError::Unknown("castle".to_owned())));
    }
}
