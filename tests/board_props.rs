use proptest::prelude::*;
use reversi_rules::{Board, BoardError, Cell, Coordinate};

/// Random position: every square independently empty, dark or light.
fn any_board() -> impl Strategy<Value = Board> {
    (any::<u64>(), any::<u64>())
        .prop_map(|(dark, light)| Board::from_bitboards(dark, light & !dark).unwrap())
}

fn any_side() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Dark), Just(Cell::Light)]
}

fn any_square() -> impl Strategy<Value = Coordinate> {
    (0..64usize).prop_map(|index| Coordinate::from_index(index).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every cell is exactly one of the three states.
    #[test]
    fn counts_cover_the_board(board in any_board()) {
        let total = board.occupancy_count(Cell::Dark) as usize
            + board.occupancy_count(Cell::Light) as usize
            + board.occupancy_count(Cell::Empty) as usize;
        prop_assert_eq!(total, 64);
        let empties = board.occupancy_count(Cell::Empty) as usize;
        prop_assert_eq!(board.squares_of(Cell::Empty).len(), empties);
    }

    /// Not-applicable only for empty squares, a set (possibly empty) otherwise.
    #[test]
    fn moves_from_signals_only_on_empty(board in any_board(), at in any_square()) {
        prop_assert_eq!(board.moves_from(at).is_none(), board.cell(at) == Cell::Empty);
    }

    /// Discovery from the side's pieces agrees with flip resolution at the landing square.
    #[test]
    fn discovery_agrees_with_flip_resolution(board in any_board(), side in any_side()) {
        let legal = board.legal_moves(side);
        for at in Coordinate::all() {
            prop_assert_eq!(legal.contains(&at), board.is_legal_move(at, side), "at {}", at);
        }
    }

    #[test]
    fn queries_do_not_mutate(board in any_board(), side in any_side()) {
        let before = board;
        let first = board.legal_moves(side);
        prop_assert_eq!(&first, &board.legal_moves(side));
        prop_assert_eq!(board.occupancy_count(side), before.occupancy_count(side));
        prop_assert_eq!(board, before);
    }

    /// A legal move gains captures + 1 for the mover and fills one empty square.
    #[test]
    fn legal_move_updates_counts(
        board in any_board(),
        side in any_side(),
        pick in any::<prop::sample::Index>(),
    ) {
        let legal: Vec<_> = board.legal_moves(side).into_iter().collect();
        prop_assume!(!legal.is_empty());
        let mv = legal[pick.index(legal.len())];

        let mut after = board;
        let flips = after.execute_move(mv, side).unwrap();
        let captured = flips.len() as u8;

        prop_assert!(captured > 0);
        let opp = side.opposite();
        prop_assert!(flips.iter().all(|&c| board.cell(c) == opp && after.cell(c) == side));
        prop_assert_eq!(after.cell(mv), side);
        prop_assert_eq!(after.occupancy_count(side), board.occupancy_count(side) + captured + 1);
        prop_assert_eq!(after.occupancy_count(opp), board.occupancy_count(opp) - captured);
        prop_assert_eq!(after.occupancy_count(Cell::Empty), board.occupancy_count(Cell::Empty) - 1);
    }

    /// Rejected moves leave the position exactly as it was.
    #[test]
    fn rejected_move_is_a_no_op(board in any_board(), side in any_side(), at in any_square()) {
        prop_assume!(!board.is_legal_move(at, side));
        let mut after = board;

        let result = after.execute_move(at, side);

        let rejected = matches!(
            result,
            Err(BoardError::Occupied(_)) | Err(BoardError::IllegalMove { .. })
        );
        prop_assert!(rejected);
        prop_assert_eq!(after, board);
    }

    /// Walks from edge and corner squares stay on the board.
    #[test]
    fn edge_origins_stay_in_bounds(board in any_board(), edge in 0..8usize, side in 0..4usize) {
        let (x, y) = match side {
            0 => (edge, 0),
            1 => (edge, 7),
            2 => (0, edge),
            _ => (7, edge),
        };
        let origin = Coordinate::new(x, y).unwrap();
        if let Some(moves) = board.moves_from(origin) {
            let on_board = |m: &Coordinate| m.x() < 8 && m.y() < 8;
            prop_assert!(moves.iter().all(|m| on_board(m) && board.cell(*m) == Cell::Empty));
        }
        for mover in [Cell::Dark, Cell::Light] {
            prop_assert!(board.flips_for(origin, mover).iter().all(|c| c.x() < 8 && c.y() < 8));
        }
    }
}

#[test]
fn scripted_game_reaches_expected_position() {
    let mut board = Board::new();
    let mut side = Cell::Dark;
    for mv in ["f4", "f5", "e6"] {
        let at: Coordinate = mv.parse().unwrap();
        board.execute_move(at, side).unwrap();
        side = side.opposite();
    }

    assert_eq!(board.occupancy_count(Cell::Dark), 5);
    assert_eq!(board.occupancy_count(Cell::Light), 2);
    assert_eq!(board.occupancy_count(Cell::Empty), 57);
    assert_eq!(board.cell("e5".parse().unwrap()), Cell::Dark);
}
