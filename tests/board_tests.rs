use squares::{Board, BoardError, Color};

#[test]
fn test_place_and_get() {
    let mut board = Board::new(5);
    assert_eq!(board.get(2, 3).unwrap(), None);

    board.place(2, 3, Color::White).unwrap();
    assert_eq!(board.get(2, 3).unwrap(), Some(Color::White));
    assert_eq!(board.move_count(), 1);

    board.place(2, 4, Color::Black).unwrap();
    assert_eq!(board.get(2, 4).unwrap(), Some(Color::Black));
    assert_eq!(board.move_count(), 2);
}

#[test]
fn test_occupied_cell_rejected() {
    let mut board = Board::new(5);
    board.place(1, 1, Color::White).unwrap();

    let err = board.place(1, 1, Color::Black).unwrap_err();
    assert_eq!(err, BoardError::Occupied { x: 1, y: 1 });
    assert_eq!(err.to_string(), "Cell is not empty");

    // the stone is untouched
    assert_eq!(board.get(1, 1).unwrap(), Some(Color::White));
    assert_eq!(board.move_count(), 1);
}

#[test]
fn test_out_of_bounds() {
    let mut board = Board::new(5);
    let err = board.place(5, 0, Color::White).unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds { x: 5, y: 0 });
    assert_eq!(err.to_string(), "Invalid position");
    assert_eq!(
        board.get(0, 5).unwrap_err(),
        BoardError::OutOfBounds { x: 0, y: 5 }
    );
}

#[test]
fn test_tilted_square_detected() {
    let mut board = Board::new(3);
    for &(x, y) in &[(0, 1), (1, 0), (1, 2)] {
        board.place(x, y, Color::White).unwrap();
        assert!(!board.has_square(Color::White));
    }
    board.place(2, 1, Color::White).unwrap();
    assert!(board.has_square(Color::White));
    assert!(!board.has_square(Color::Black));
}

#[test]
fn test_wide_tilted_square_detected() {
    // edge vector (1, 2)
    let mut board = Board::new(5);
    for &(x, y) in &[(0, 2), (1, 4), (2, 1), (3, 3)] {
        board.place(x, y, Color::Black).unwrap();
    }
    assert!(board.has_square(Color::Black));
}

#[test]
fn test_axis_aligned_square_not_detected() {
    let mut board = Board::new(5);
    for &(x, y) in &[(0, 0), (0, 2), (2, 0), (2, 2)] {
        board.place(x, y, Color::White).unwrap();
    }
    assert!(!board.has_square(Color::White));

    let mut board = Board::new(5);
    for &(x, y) in &[(0, 0), (0, 1), (1, 0), (1, 1)] {
        board.place(x, y, Color::White).unwrap();
    }
    assert!(!board.has_square(Color::White));
}

#[test]
fn test_mixed_colors_do_not_form_square() {
    let mut board = Board::new(3);
    for &(x, y) in &[(0, 1), (1, 0), (1, 2)] {
        board.place(x, y, Color::White).unwrap();
    }
    board.place(2, 1, Color::Black).unwrap();
    assert!(!board.has_square(Color::White));
    assert!(!board.has_square(Color::Black));
}

#[test]
fn test_full_board_without_square() {
    let mut board = Board::new(3);
    let white = [(0, 1), (1, 0), (1, 2), (0, 0), (2, 2)];
    let black = [(2, 1), (0, 2), (2, 0), (1, 1)];
    for &(x, y) in &white {
        board.place(x, y, Color::White).unwrap();
    }
    for &(x, y) in &black {
        board.place(x, y, Color::Black).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.move_count(), 9);
    assert!(!board.has_square(Color::White));
    assert!(!board.has_square(Color::Black));
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new(3);
    board.place(0, 0, Color::White).unwrap();
    board.place(0, 1, Color::Black).unwrap();

    let empty: Vec<_> = board.empty_cells().collect();
    assert_eq!(empty.len(), 7);
    assert_eq!(empty[0], (0, 2));
    assert_eq!(empty[1], (1, 0));
}

#[test]
fn test_display_rendering() {
    let mut board = Board::new(3);
    board.place(0, 0, Color::White).unwrap();
    board.place(1, 2, Color::Black).unwrap();
    let rendered = board.to_string();
    assert_eq!(rendered, "  0 1 2 \n0 W . . \n1 . . B \n2 . . . \n");
}
