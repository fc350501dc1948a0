//! Grid state: bounds, placement, and lookup errors

use tui_match3::core::{Board, BoardError, Palette, SimpleRng};
use tui_match3::types::{Coord, PieceColor::*};

#[test]
fn in_bounds_matches_dimensions_exactly() {
    let board = Board::new(4, 3).unwrap();
    for y in -2..6 {
        for x in -2..7 {
            let expected = (0..4).contains(&x) && (0..3).contains(&y);
            assert_eq!(board.in_bounds(x, y), expected, "({x}, {y})");
            assert_eq!(board.piece_at(x, y).is_ok(), expected, "({x}, {y})");
        }
    }
}

#[test]
fn piece_at_out_of_bounds_names_the_cell() {
    let board = Board::new(2, 2).unwrap();
    assert_eq!(
        board.piece_at(2, 0).unwrap_err(),
        BoardError::OutOfBounds { x: 2, y: 0 }
    );
    assert_eq!(
        board.piece_at(0, -1).unwrap_err(),
        BoardError::OutOfBounds { x: 0, y: -1 }
    );
}

#[test]
fn empty_board_has_no_pieces() {
    let board = Board::new(3, 3).unwrap();
    assert!(matches!(board.piece_at(1, 1), Ok(None)));
    assert!(!board.is_full());
}

#[test]
fn non_positive_dimensions_are_rejected() {
    for (w, h) in [(0, 3), (3, 0), (-1, 4)] {
        assert_eq!(
            Board::new(w, h).unwrap_err(),
            BoardError::InvalidDimension {
                width: w,
                height: h
            }
        );
    }
}

#[test]
fn place_piece_off_board_stamps_position_only() {
    let mut board = Board::new(2, 2).unwrap();
    let id = board.spawn_piece(Red, 0, 0);

    assert!(!board.place_piece(id, 5, 5));
    assert_eq!(board.piece(id).unwrap().position(), Coord::new(5, 5));
    // The old cell still references it; placement never clears.
    assert_eq!(board.piece_id_at(0, 0).unwrap(), Some(id));

    assert!(board.place_piece(id, 1, 1));
    assert_eq!(board.piece_id_at(1, 1).unwrap(), Some(id));
    assert_eq!(board.piece(id).unwrap().position(), Coord::new(1, 1));
}

#[test]
fn take_piece_empties_the_cell() {
    let mut board = Board::from_rows(&[[Red, Blue]]).unwrap();
    let id = board.take_piece(0, 0).unwrap();
    assert!(id.is_some());
    assert!(matches!(board.piece_at(0, 0), Ok(None)));
    assert!(board.take_piece(3, 0).is_err());
}

#[test]
fn tiles_know_their_coordinates() {
    let board = Board::new(3, 2).unwrap();
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(board.tile_at(x, y).unwrap().coord(), Coord::new(x, y));
        }
    }
    assert_eq!(board.tiles().len(), 6);
}

#[test]
fn corner_has_two_neighbors() {
    let board = Board::new(3, 3).unwrap();
    assert_eq!(board.neighbors(Coord::new(0, 0)).len(), 2);
    assert_eq!(board.neighbors(Coord::new(1, 1)).len(), 4);
    assert_eq!(board.neighbors(Coord::new(2, 1)).len(), 3);
}

#[test]
fn random_fill_is_seeded_and_complete() {
    let palette = Palette::new(&[Red, Blue, Green]).unwrap();

    let mut a = Board::new(5, 5).unwrap();
    let mut b = Board::new(5, 5).unwrap();
    assert_eq!(a.fill_random(&palette, &mut SimpleRng::new(9)), 25);
    b.fill_random(&palette, &mut SimpleRng::new(9));

    assert!(a.is_full());
    assert_eq!(a, b);
    assert!(a
        .pieces()
        .iter()
        .all(|p| palette.colors().contains(&p.color())));

    // A second fill has nothing left to do.
    assert_eq!(a.fill_random(&palette, &mut SimpleRng::new(9)), 0);
}
