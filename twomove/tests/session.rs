use cozy_chess::{Color, Square};
use futures_util::StreamExt;
use pretty_assertions::assert_eq;

use twomove::session;
use twomove::{Command, MoveRejection, SessionEvent, TwoMoveGame};

async fn run_session(game: TwoMoveGame, commands: Vec<Command>) -> Vec<SessionEvent> {
    session::run(game, futures_util::stream::iter(commands)).collect().await
}

fn status_of(event: &SessionEvent) -> Option<&str> {
    match event {
        SessionEvent::Moved { report, .. } => Some(&report.status),
        SessionEvent::Reset { status, .. } | SessionEvent::Status { status, .. } => Some(status),
        _ => None
    }
}

#[tokio::test]
async fn drives_game_from_commands() {
    let commands = vec![
        Command::PickUp(Square::E7),
        Command::Drop { from: Square::E2, to: Square::E4 },
        Command::Drop { from: Square::E2, to: Square::E4 },
        Command::Status,
        Command::Reset,
        Command::Quit,
        Command::Status,
    ];
    let events = run_session(TwoMoveGame::new(), commands).await;
    assert_eq!(events.len(), 5);

    assert!(matches!(events[0], SessionEvent::PickUp { square: Square::E7, allowed: false }));
    assert_eq!(status_of(&events[1]), Some("Black to move."));
    match &events[2] {
        SessionEvent::SnapBack { reason, .. } => assert_eq!(*reason, MoveRejection::NoPiece(Square::E2)),
        other => panic!("expected snapback, got {:?}", other)
    }
    assert_eq!(status_of(&events[3]), Some("Black to move."));
    assert_eq!(status_of(&events[4]), Some("White to move."));
    if let SessionEvent::Reset { board, .. } = &events[4] {
        assert_eq!(board.side_to_move(), Color::White);
    }
}

#[tokio::test]
async fn reports_game_over() {
    let game = TwoMoveGame::from_fen("r5k1/5ppp/2p5/8/3N4/8/5PPP/6K1 w - - 0 1").unwrap();
    let commands = vec![
        Command::Drop { from: Square::D4, to: Square::C6 },
        Command::Drop { from: Square::A8, to: Square::A1 },
        Command::PickUp(Square::G1),
    ];
    let events = run_session(game, commands).await;
    assert_eq!(events.len(), 4);
    assert_eq!(status_of(&events[0]), Some("Black to move (1 of 2 moves)."));
    assert_eq!(status_of(&events[1]), Some("Game over, White is in checkmate."));
    assert!(matches!(events[2], SessionEvent::GameOver { winner: Some(Color::Black) }));
    assert!(matches!(events[3], SessionEvent::PickUp { allowed: false, .. }));
}
