use broadside::{GameError, Gameboard, Orientation, Ship, BOARD_SIZE};
use proptest::prelude::*;

fn orientations() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn footprint(row: i32, col: i32, len: usize, orientation: Orientation) -> Vec<(i32, i32)> {
    (0..len as i32)
        .map(|i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Placement succeeds exactly when the footprint stays on the board,
    /// and a failed placement leaves the board unchanged.
    #[test]
    fn placement_succeeds_iff_in_bounds(
        row in -2..12i32,
        col in -2..12i32,
        len in 1..=5usize,
        orientation in orientations(),
    ) {
        let mut board = Gameboard::new();
        let before = board.clone();
        let fits = match orientation {
            Orientation::Horizontal => {
                row >= 0 && row < BOARD_SIZE && col >= 0 && col + len as i32 <= BOARD_SIZE
            }
            Orientation::Vertical => {
                col >= 0 && col < BOARD_SIZE && row >= 0 && row + len as i32 <= BOARD_SIZE
            }
        };
        let result = board.place_ship(Ship::new(len), row, col, orientation);
        prop_assert_eq!(result.is_ok(), fits);
        if result.is_err() {
            prop_assert_eq!(board, before);
        }
    }

    /// A placed ship covers exactly its footprint, segment indices in order.
    #[test]
    fn placement_footprint_is_exact(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        len in 1..=5usize,
        orientation in orientations(),
    ) {
        let mut board = Gameboard::new();
        let ship = Ship::new(len);
        prop_assume!(board.is_valid_placement(&ship, row, col, orientation));
        board.place_ship(ship, row, col, orientation).unwrap();

        let mut covered = 0;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if let Some(cell) = board.cell(r, c) {
                    covered += 1;
                    let expected = match orientation {
                        Orientation::Horizontal => (row, col + cell.segment as i32),
                        Orientation::Vertical => (row + cell.segment as i32, col),
                    };
                    prop_assert_eq!((r, c), expected);
                }
            }
        }
        prop_assert_eq!(covered, len);
    }

    /// A second in-bounds placement succeeds exactly when the two
    /// footprints are disjoint, and a rejected one changes nothing.
    #[test]
    fn second_placement_succeeds_iff_disjoint(
        r1 in 0..BOARD_SIZE, c1 in 0..BOARD_SIZE, len1 in 1..=5usize, o1 in orientations(),
        r2 in 0..BOARD_SIZE, c2 in 0..BOARD_SIZE, len2 in 1..=5usize, o2 in orientations(),
    ) {
        let mut board = Gameboard::new();
        let first = Ship::new(len1);
        let second = Ship::new(len2);
        prop_assume!(board.is_valid_placement(&first, r1, c1, o1));
        board.place_ship(first, r1, c1, o1).unwrap();

        let in_bounds = match o2 {
            Orientation::Horizontal => c2 + len2 as i32 <= BOARD_SIZE,
            Orientation::Vertical => r2 + len2 as i32 <= BOARD_SIZE,
        };
        prop_assume!(in_bounds);

        let taken = footprint(r1, c1, len1, o1);
        let disjoint = footprint(r2, c2, len2, o2)
            .iter()
            .all(|p| !taken.contains(p));

        let before = board.clone();
        match board.place_ship(second, r2, c2, o2) {
            Ok(_) => prop_assert!(disjoint),
            Err(err) => {
                prop_assert_eq!(err, GameError::ShipOverlap);
                prop_assert!(!disjoint);
                prop_assert_eq!(board, before);
            }
        }
    }

    /// Hits accumulate; the ship is sunk exactly when they reach its length.
    #[test]
    fn sunk_iff_hits_reach_length(len in 1..=5usize, hits in 0..8usize) {
        let mut ship = Ship::new(len);
        for _ in 0..hits {
            ship.hit();
        }
        prop_assert_eq!(ship.hits(), hits);
        prop_assert_eq!(ship.is_sunk(), hits >= len);
    }

    /// Out-of-bounds attacks never touch the history.
    #[test]
    fn oob_attacks_leave_no_trace(row in -5..15i32, col in -5..15i32) {
        prop_assume!(!((0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col)));
        let mut board = Gameboard::new();
        prop_assert_eq!(
            board.receive_attack(row, col),
            Err(GameError::OutOfBounds { row, col })
        );
        prop_assert!(board.attacks().is_empty());
    }
}
