use cozy_chess::*;

use crate::turn::{TurnPhase, TurnState};

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black"
    }
}

/// The status line shown under the board.
///
/// `status` is passed separately from `board` since draws by repetition are
/// only known to the game history.
pub fn status_text(board: &Board, status: GameStatus, turn: &TurnState) -> String {
    let to_move = color_name(board.side_to_move());
    match status {
        GameStatus::Won => return format!("Game over, {} is in checkmate.", to_move),
        GameStatus::Drawn => return "Game over, drawn position.".to_owned(),
        GameStatus::Ongoing => {}
    }
    let mut text = match turn.phase() {
        TurnPhase::InBonusSequence { player, move_number } => {
            format!("{} to move ({} of 2 moves)", color_name(player), move_number)
        }
        TurnPhase::Idle => format!("{} to move", to_move)
    };
    if !board.checkers().is_empty() {
        text.push_str(&format!(", {} is in check", to_move));
    }
    text.push('.');
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::turn::MoveFacts;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen, false).unwrap()
    }

    fn black_bonus() -> TurnState {
        let facts = MoveFacts { mover: Color::White, capture: true, gives_check: false };
        TurnState::rest().after_move(facts).0
    }

    #[test]
    fn idle_status() {
        let b = Board::default();
        assert_eq!(status_text(&b, GameStatus::Ongoing, &TurnState::rest()), "White to move.");
    }

    #[test]
    fn bonus_status_counts_moves() {
        let b = board("rnbqkbnr/ppp1pppp/8/3P4/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 2");
        let turn = black_bonus();
        assert_eq!(status_text(&b, GameStatus::Ongoing, &turn), "Black to move (1 of 2 moves).");
        let facts = MoveFacts { mover: Color::Black, capture: false, gives_check: false };
        let (turn, _) = turn.after_move(facts);
        assert_eq!(status_text(&b, GameStatus::Ongoing, &turn), "Black to move (2 of 2 moves).");
    }

    #[test]
    fn check_names_side_to_move() {
        let b = board("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert_eq!(
            status_text(&b, GameStatus::Ongoing, &TurnState::rest()),
            "White to move, White is in check."
        );
    }

    #[test]
    fn terminal_status_ignores_turn_state() {
        let mate = board("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(mate.status(), GameStatus::Won);
        assert_eq!(status_text(&mate, mate.status(), &black_bonus()), "Game over, Black is in checkmate.");
        assert_eq!(status_text(&mate, GameStatus::Drawn, &black_bonus()), "Game over, drawn position.");
    }

    #[test]
    fn bonus_counter_and_check_combine() {
        let b = board("4k3/8/8/8/8/8/4R3/6K1 b - - 0 1");
        assert_eq!(
            status_text(&b, GameStatus::Ongoing, &black_bonus()),
            "Black to move (1 of 2 moves), Black is in check."
        );
    }

    #[test]
    fn derivation_is_pure() {
        let b = board("4k3/8/8/8/8/8/4R3/6K1 b - - 0 1");
        let turn = black_bonus();
        let first = status_text(&b, GameStatus::Ongoing, &turn);
        let second = status_text(&b, GameStatus::Ongoing, &turn);
        assert_eq!(first, second);
    }
}
