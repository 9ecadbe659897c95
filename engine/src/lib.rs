mod board;
mod bot_controller;
pub mod logger;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::{
    BOARD_CELLS, Board, WIN_LINES, empty_board, get_available_moves, is_board_full, is_valid_move,
};
pub use bot_controller::calculate_move;
pub use session::{GameSession, SessionSnapshot};
pub use session_rng::SessionRng;
pub use types::{Difficulty, Mark, Outcome, ScoreTally, Turn};
pub use win_detector::{check_win, check_win_with_line, evaluate};
