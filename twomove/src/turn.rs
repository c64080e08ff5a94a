use cozy_chess::Color;

/// Bookkeeping for bonus two-move sequences.
///
/// Created at rest, advanced once per accepted move by [`TurnState::after_move`],
/// and reset to rest on game reset or game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnState {
    on_bonus_move: bool,
    moves_made: u8,
    bonus_pending: bool,
    bonus_player: Option<Color>
}

/// What the turn controller needs to know about a move the rules engine accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveFacts {
    pub mover: Color,
    pub capture: bool,
    /// The move left the opponent in check.
    pub gives_check: bool
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `player` owes a second move; the engine's side to move has to be handed back.
    Continue {
        player: Color
    },
    /// The engine's own alternation stands.
    Pass {
        next: Color
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    InBonusSequence {
        player: Color,
        /// 1 or 2.
        move_number: u8
    }
}

impl TurnState {
    pub fn rest() -> Self {
        Self::default()
    }

    pub fn on_bonus_move(&self) -> bool {
        self.on_bonus_move
    }

    pub fn moves_made(&self) -> u8 {
        self.moves_made
    }

    pub fn bonus_pending(&self) -> bool {
        self.bonus_pending
    }

    pub fn bonus_player(&self) -> Option<Color> {
        self.bonus_player
    }

    pub fn phase(&self) -> TurnPhase {
        match self.bonus_player {
            Some(player) => TurnPhase::InBonusSequence {
                player,
                move_number: self.moves_made + 1
            },
            None => TurnPhase::Idle
        }
    }

    /// Whether `color` may move, ignoring what the engine thinks.
    pub fn allows(&self, color: Color) -> bool {
        self.bonus_player.map_or(true, |player| player == color)
    }

    pub fn after_move(mut self, facts: MoveFacts) -> (Self, Transition) {
        debug_assert!(self.bonus_player.map_or(true, |p| p == facts.mover));
        self.moves_made += 1;
        if facts.capture {
            self.bonus_pending = true;
        }
        if let Some(player) = self.bonus_player {
            // A checked opponent has to answer, so a checking first move ends the sequence.
            if self.moves_made < 2 && !facts.gives_check {
                return (self, Transition::Continue { player });
            }
        }
        self.finish_sequence(facts.mover)
    }

    /// Ends the current sequence early, e.g. when the engine refuses to hand
    /// the move back to the bonus player.
    pub fn forfeit_sequence(self, mover: Color) -> (Self, Transition) {
        self.finish_sequence(mover)
    }

    fn finish_sequence(mut self, mover: Color) -> (Self, Transition) {
        let next = !mover;
        self.on_bonus_move = false;
        self.moves_made = 0;
        self.bonus_player = None;
        if self.bonus_pending {
            self.bonus_pending = false;
            self.on_bonus_move = true;
            self.bonus_player = Some(next);
        }
        (self, Transition::Pass { next })
    }
}
