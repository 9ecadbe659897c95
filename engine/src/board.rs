use super::types::Mark;

pub const BOARD_CELLS: usize = 9;

/// Rows, columns, then diagonals. Win detection scans in this order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub type Board = [Mark; BOARD_CELLS];

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_CELLS]
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    let mut moves = Vec::new();
    for (index, &cell) in board.iter().enumerate() {
        if cell == Mark::Empty {
            moves.push(index);
        }
    }
    moves
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    index < BOARD_CELLS && board[index] == Mark::Empty
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_moves_in_scan_order() {
        let mut board = empty_board();
        board[0] = Mark::X;
        board[4] = Mark::O;
        assert_eq!(get_available_moves(&board), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_is_valid_move() {
        let mut board = empty_board();
        board[3] = Mark::X;
        assert!(is_valid_move(&board, 0));
        assert!(!is_valid_move(&board, 3));
        assert!(!is_valid_move(&board, 9));
    }

    #[test]
    fn test_is_board_full() {
        let mut board = [Mark::X; BOARD_CELLS];
        assert!(is_board_full(&board));
        board[8] = Mark::Empty;
        assert!(!is_board_full(&board));
    }
}
