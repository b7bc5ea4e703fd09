use battlegrid::{Cell, Coordinate, Direction, Gameboard, Ship};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Right),
        Just(Direction::Down),
        Just(Direction::Left),
    ]
}

fn cells(board: &Gameboard) -> Vec<(Coordinate, Cell)> {
    board.rows().flatten().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sunk_after_exactly_length_hits(len in 1i64..64, extra in 0usize..8) {
        let mut ship = Ship::new(len).unwrap();
        for _ in 0..len {
            prop_assert!(!ship.is_sunk());
            ship.hit();
        }
        prop_assert!(ship.is_sunk());
        for _ in 0..extra {
            ship.hit();
        }
        prop_assert!(ship.is_sunk());
        prop_assert_eq!(ship.hit_count(), len as usize);
    }

    #[test]
    fn placement_is_all_or_nothing(
        placements in prop::collection::vec((1usize..=5, -2i32..10, -2i32..10, direction()), 1..12),
    ) {
        let mut board = Gameboard::new();
        for (len, x, y, dir) in placements {
            let ship = match board.get_unplaced_ship(len) {
                Some(ship) => ship,
                None => continue,
            };
            let before = cells(&board);
            match board.place_ship(ship, Coordinate::new(x, y), dir) {
                Ok(()) => {
                    let placement = board.ship(ship).unwrap().placement().unwrap().to_vec();
                    prop_assert_eq!(placement.len(), len);
                    let (dx, dy) = dir.delta();
                    for (i, c) in placement.iter().enumerate() {
                        prop_assert_eq!(*c, Coordinate::new(x + dx * i as i32, y + dy * i as i32));
                        prop_assert_eq!(board.cell(*c), Some(Cell::Occupied(ship)));
                    }
                    let changed = cells(&board)
                        .iter()
                        .zip(&before)
                        .filter(|(a, b)| a != b)
                        .count();
                    prop_assert_eq!(changed, len);
                    prop_assert!(board.placed_ships().any(|s| s.id() == ship));
                    prop_assert!(board.unplaced_ships().all(|s| s.id() != ship));
                }
                Err(_) => {
                    prop_assert_eq!(cells(&board), before);
                    prop_assert_eq!(board.get_unplaced_ship(len), Some(ship));
                }
            }
        }
        prop_assert_eq!(board.placed_ships().count() + board.unplaced_ships().count(), 5);
    }

    #[test]
    fn hit_cells_match_hit_counts(
        placements in prop::collection::vec((0i32..8, 0i32..8, direction()), 5),
        attacks in prop::collection::vec((0i32..8, 0i32..8), 0..80),
    ) {
        let mut board = Gameboard::new();
        for (len, (x, y, dir)) in (1..=5).zip(placements) {
            let ship = board.get_unplaced_ship(len).unwrap();
            let _ = board.place_ship(ship, Coordinate::new(x, y), dir);
        }
        for (x, y) in attacks {
            let coord = Coordinate::new(x, y);
            let was_attacked = board.cell(coord).unwrap().attacked();
            prop_assert_eq!(board.receive_attack(coord).is_err(), was_attacked);
        }
        let all_cells = cells(&board);
        for ship in board.placed_ships() {
            let hits = all_cells
                .iter()
                .filter(|(_, cell)| *cell == Cell::Hit(ship.id()))
                .count();
            prop_assert_eq!(ship.hit_count(), hits);
        }
        let all_sunk = board.placed_ships().all(|ship| ship.is_sunk());
        prop_assert_eq!(board.all_ships_sunk(), all_sunk);
        prop_assert_eq!(
            board.is_game_over(),
            all_sunk && board.placed_ships().next().is_some()
        );
    }
}
