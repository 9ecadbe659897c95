use super::board::{BOARD_CELLS, Board, get_available_moves};
use super::session_rng::SessionRng;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

/// Picks the computer's next move. The returned index always references
/// an empty cell. Callers must check the game is still in progress
/// first; invoking this on a full board is a contract violation.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> usize {
    let available_moves = get_available_moves(board);
    assert!(
        !available_moves.is_empty(),
        "calculate_move called on a full board"
    );

    match difficulty {
        Difficulty::Easy => calculate_random_move(&available_moves, rng),
        Difficulty::Medium => calculate_heuristic_move(board, bot_mark, &available_moves, rng),
        Difficulty::Hard => calculate_minimax_move(board, bot_mark, &available_moves),
    }
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> usize {
    available_moves[rng.random_range(0..available_moves.len())]
}

/// Win if possible, block the opponent's win otherwise, else play
/// randomly. Both rules take the first qualifying cell in scan order.
fn calculate_heuristic_move(
    board: &Board,
    bot_mark: Mark,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> usize {
    let opponent_mark = bot_mark.opponent().unwrap();
    let mut scratch = *board;

    if let Some(index) = find_winning_move(&mut scratch, bot_mark, available_moves) {
        return index;
    }

    if let Some(index) = find_winning_move(&mut scratch, opponent_mark, available_moves) {
        return index;
    }

    calculate_random_move(available_moves, rng)
}

fn find_winning_move(board: &mut Board, mark: Mark, available_moves: &[usize]) -> Option<usize> {
    for &index in available_moves {
        board[index] = mark;
        let winner = check_win(board);
        board[index] = Mark::Empty;

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}

/// Full-depth minimax over the remaining cells. The board is small
/// enough that no pruning or depth limit is needed; the worst case is
/// the first reply, about 9! leaf positions.
fn calculate_minimax_move(board: &Board, bot_mark: Mark, available_moves: &[usize]) -> usize {
    let mut scratch = *board;

    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    for &index in available_moves {
        scratch[index] = bot_mark;
        let score = minimax(&mut scratch, false, bot_mark);
        scratch[index] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = index;
        }
    }

    best_move
}

/// Terminal scores are +1 / -1 / 0 regardless of depth, so the search
/// does not prefer a faster win over a slower one. Ties break toward
/// the lowest index on both sides.
fn minimax(board: &mut Board, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark { 1 } else { -1 };
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..BOARD_CELLS {
            if board[index] != Mark::Empty {
                continue;
            }
            board[index] = bot_mark;
            let eval = minimax(board, false, bot_mark);
            board[index] = Mark::Empty;
            max_eval = max_eval.max(eval);
        }
        if max_eval == i32::MIN { 0 } else { max_eval }
    } else {
        let opponent_mark = bot_mark.opponent().unwrap();
        let mut min_eval = i32::MAX;
        for index in 0..BOARD_CELLS {
            if board[index] != Mark::Empty {
                continue;
            }
            board[index] = opponent_mark;
            let eval = minimax(board, true, bot_mark);
            board[index] = Mark::Empty;
            min_eval = min_eval.min(eval);
        }
        if min_eval == i32::MAX { 0 } else { min_eval }
    }
}
