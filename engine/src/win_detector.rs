use super::board::{Board, WIN_LINES, is_board_full};
use super::types::{Mark, Outcome};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// Returns the winning mark together with the completed line, so a host
/// can highlight it. The first matching line in `WIN_LINES` order wins.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            return Some((mark, line));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return match winner {
            Mark::X => Outcome::PlayerWin,
            Mark::O => Outcome::ComputerWin,
            Mark::Empty => unreachable!(),
        };
    }

    if is_board_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
