use super::board::{Board, empty_board, is_valid_move};
use super::bot_controller::calculate_move;
use super::session_rng::SessionRng;
use super::types::{Difficulty, Mark, Outcome, ScoreTally, Turn};
use super::win_detector::evaluate;

/// One human-vs-computer game session. The human always plays X and
/// moves first; the computer plays O. Illegal inputs are silent no-ops
/// rather than errors, matching what a UI-driven game loop needs.
pub struct GameSession {
    board: Board,
    turn: Turn,
    outcome: Outcome,
    tally: ScoreTally,
    difficulty: Difficulty,
    moves_played: u32,
    rng: SessionRng,
}

/// Owned copy of everything a host can observe. Taken after each
/// mutating call, so a host re-renders by diffing snapshots instead of
/// registering callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: Board,
    pub turn: Turn,
    pub outcome: Outcome,
    pub tally: ScoreTally,
    pub difficulty: Difficulty,
    pub moves_played: u32,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, SessionRng::from_random())
    }

    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, SessionRng::new(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: SessionRng) -> Self {
        Self {
            board: empty_board(),
            turn: Turn::Player,
            outcome: Outcome::InProgress,
            tally: ScoreTally::default(),
            difficulty,
            moves_played: 0,
            rng,
        }
    }

    /// Places the player's mark. Returns false without touching any
    /// state when the game is over, it is not the player's turn, or the
    /// cell is occupied or out of range.
    pub fn place_player_move(&mut self, index: usize) -> bool {
        if self.outcome.is_terminal()
            || self.turn != Turn::Player
            || !is_valid_move(&self.board, index)
        {
            return false;
        }

        self.board[index] = Mark::X;
        self.moves_played += 1;
        self.after_placement();
        true
    }

    /// Selects and places the computer's move at the current difficulty.
    /// Returns the cell played, or None when it is not the computer's
    /// turn or the game is over.
    pub fn compute_computer_move(&mut self) -> Option<usize> {
        if self.outcome.is_terminal() || self.turn != Turn::Computer {
            return None;
        }

        let index = calculate_move(self.difficulty, &self.board, Mark::O, &mut self.rng);
        self.board[index] = Mark::O;
        self.moves_played += 1;
        self.after_placement();
        Some(index)
    }

    fn after_placement(&mut self) {
        let outcome = evaluate(&self.board);
        if outcome.is_terminal() {
            self.outcome = outcome;
            self.tally.record(outcome);
        } else {
            self.switch_turn();
        }
    }

    fn switch_turn(&mut self) {
        self.turn = match self.turn {
            Turn::Player => Turn::Computer,
            Turn::Computer => Turn::Player,
        };
    }

    /// Starts the next game on the same board buffer. Scores persist
    /// across games within a session.
    pub fn reset(&mut self) {
        self.board = empty_board();
        self.turn = Turn::Player;
        self.outcome = Outcome::InProgress;
        self.moves_played = 0;
    }

    /// Clears the score counters. Never called by the session itself.
    pub fn reset_tally(&mut self) {
        self.tally = ScoreTally::default();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board,
            turn: self.turn,
            outcome: self.outcome,
            tally: self.tally,
            difficulty: self.difficulty,
            moves_played: self.moves_played,
        }
    }
}
