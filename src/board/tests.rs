use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.to_index(3), 5);
    assert_eq!(pos.to_index(4), 6);

    let pos2 = Pos::from_index(5, 3);
    assert_eq!(pos2, Pos::new(1, 2));
}

#[test]
fn test_pos_interior() {
    assert!(Pos::new(1, 1).is_interior(3));
    assert!(!Pos::new(0, 1).is_interior(3));
    assert!(!Pos::new(1, 2).is_interior(3));
    assert!(Pos::new(2, 2).is_interior(4));
    assert!(!Pos::new(0, 0).is_interior(1));
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(1, 1).offset(-1, 1, 3), Some(Pos::new(0, 2)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0, 3), None);
    assert_eq!(Pos::new(2, 2).offset(0, 1, 3), None);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 15) < Pos::new(1, 0));
}

#[test]
fn test_board_size_limits() {
    assert!(Board::new(0).is_none());
    assert!(Board::new(MAX_BOARD_SIZE + 1).is_none());
    assert_eq!(Board::new(1).map(|b| b.size()), Some(1));
    assert_eq!(Board::new(MAX_BOARD_SIZE).map(|b| b.size()), Some(16));
}

#[test]
fn test_board_place_and_get() {
    let mut board = Board::new(3).unwrap();
    board.place(Pos::new(1, 1), Mark::X);
    board.place(Pos::new(0, 2), Mark::O);

    assert_eq!(board.get(Pos::new(1, 1)), Mark::X);
    assert_eq!(board.get(Pos::new(0, 2)), Mark::O);
    assert_eq!(board.get(Pos::new(2, 2)), Mark::Empty);
    assert_eq!(board.mark_count(), 2);
    assert!(!board.is_empty(Pos::new(1, 1)));
    assert!(!board.is_empty(Pos::new(5, 5)), "off-board is never placeable");
}

#[test]
fn test_board_empty_positions_row_major() {
    let mut board = Board::new(2).unwrap();
    board.place(Pos::new(0, 1), Mark::X);
    let empties: Vec<Pos> = board.empty_positions().collect();
    assert_eq!(empties, vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1)]);
}

#[test]
fn test_board_positions_of_large_board() {
    let mut board = Board::new(16).unwrap();
    board.place(Pos::new(15, 15), Mark::O);
    board.place(Pos::new(4, 0), Mark::O);
    let found: Vec<Pos> = board.positions_of(Mark::O).collect();
    assert_eq!(found, vec![Pos::new(4, 0), Pos::new(15, 15)]);
    assert!(board.marks(Mark::Empty).is_none());
}

#[test]
fn test_board_full() {
    let mut board = Board::new(2).unwrap();
    for (i, pos) in [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().enumerate() {
        let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
        board.place(Pos::new(pos.0, pos.1), mark);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_positions().count(), 0);
}

#[test]
fn test_board_display() {
    let mut board = Board::new(3).unwrap();
    board.place(Pos::new(1, 1), Mark::X);
    assert_eq!(board.to_string(), "_ _ _ \n_ X _ \n_ _ _ ");
}
