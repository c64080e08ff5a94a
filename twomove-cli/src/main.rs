use std::path::PathBuf;

use clap::Parser;
use futures_util::{Stream, StreamExt};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use twomove::session::{self, SessionEvent};
use twomove::status::color_name;
use twomove::{Command, CommandParseError, PositionError, TwoMoveGame};

mod config;
mod render;

use config::{ConfigError, TwoMoveCliConfig};
use render::render_board;

fn clap_parse_level(s: &str) -> Result<log::LevelFilter, String> {
    s.parse().map_err(|e| format!("{}", e))
}

/// Two-move chess in the terminal: a capture gives the opponent two moves in a row.
#[derive(Debug, Parser)]
struct TwoMoveCliArgs {
    /// JSON config file.
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Starting position, overrides the config file.
    #[clap(long)]
    fen: Option<String>,
    #[clap(long, default_value = "warn", value_parser = clap_parse_level)]
    log_level: log::LevelFilter
}

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Position(#[from] PositionError)
}

fn stdin_commands() -> impl Stream<Item = Command> {
    async_stream::stream! {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => match line.parse::<Command>() {
                    Ok(command) => {
                        yield command;
                    }
                    Err(CommandParseError::Empty) => {}
                    Err(e) => eprintln!("{}", e),
                },
                Ok(None) => break,
                Err(e) => {
                    log::error!("failed to read stdin: {}", e);
                    break;
                }
            }
        }
    }
}

fn print_position(board: &cozy_chess::Board, status: &str, config: &TwoMoveCliConfig) {
    let flip = config.flip_board && board.side_to_move() == cozy_chess::Color::Black;
    print!("{}", render_board(board, config.unicode_pieces, flip));
    println!("{}", status);
}

async fn run(args: TwoMoveCliArgs) -> Result<(), CliError> {
    let config = TwoMoveCliConfig::load(args.config.as_deref())?;
    let game = match args.fen.as_ref().or(config.start_fen.as_ref()) {
        Some(fen) => TwoMoveGame::from_fen(fen)?,
        None => TwoMoveGame::new()
    };
    print_position(game.board(), &game.status_text(), &config);

    let events = session::run(game, stdin_commands());
    futures_util::pin_mut!(events);
    while let Some(event) = events.next().await {
        match event {
            SessionEvent::PickUp { square, allowed } => {
                if allowed {
                    println!("{} can move", square);
                } else {
                    println!("{} cannot move", square);
                }
            }
            SessionEvent::Moved { report, board } => {
                println!("{}", report.notation);
                print_position(&board, &report.status, &config);
            }
            SessionEvent::SnapBack { reason, .. } => println!("snapback: {}", reason),
            SessionEvent::Reset { board, status } | SessionEvent::Status { board, status } => {
                print_position(&board, &status, &config);
            }
            SessionEvent::GameOver { winner } => match winner {
                Some(winner) => println!("winner: {}", color_name(winner)),
                None => println!("draw")
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = TwoMoveCliArgs::parse();
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
