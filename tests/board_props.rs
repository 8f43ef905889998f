use proptest::prelude::*;
use squares::{Board, BoardError, Color};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn distinct_placements_all_land(
        size in 3usize..=8,
        cells in prop::collection::hash_set((0usize..8, 0usize..8), 0..20)
    ) {
        let cells: Vec<_> = cells
            .into_iter()
            .filter(|&(x, y)| x < size && y < size)
            .collect();
        let mut board = Board::new(size);
        for (i, &(x, y)) in cells.iter().enumerate() {
            let color = if i % 2 == 0 { Color::White } else { Color::Black };
            board.place(x, y, color).unwrap();
        }
        prop_assert_eq!(board.move_count(), cells.len());
    }

    #[test]
    fn duplicate_placement_rejected_and_state_unchanged(
        size in 3usize..=8,
        x in 0usize..8,
        y in 0usize..8
    ) {
        prop_assume!(x < size && y < size);
        let mut board = Board::new(size);
        board.place(x, y, Color::White).unwrap();
        let before = board.clone();

        let err = board.place(x, y, Color::Black).unwrap_err();
        prop_assert_eq!(err, BoardError::Occupied { x, y });
        prop_assert_eq!(&board, &before);
    }
}
