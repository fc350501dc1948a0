//! Match detection: directional scans, axis unions, and the highlight pass

use tui_match3::core::{scan_direction, Board, MatchEngine};
use tui_match3::types::{Coord, PieceColor::*};

#[test]
fn three_by_three_bottom_red_row_is_the_only_match() {
    let board = Board::from_rows(&[
        [Red, Red, Red],
        [Blue, Green, Yellow],
        [Cyan, Teal, Indigo],
    ])
    .unwrap();
    let map = MatchEngine::default().highlights(&board);

    assert_eq!(map.matched_count(), 3);
    for x in 0..3 {
        assert_eq!(map.get(x, 0), Some(Red));
        assert!(!map.is_matched(x, 1));
        assert!(!map.is_matched(x, 2));
    }
}

#[test]
fn scan_stops_at_first_mismatch() {
    // Run of 4 reds, then blue, then red again.
    let board = Board::from_rows(&[[Red, Red, Red, Red, Blue, Red]]).unwrap();
    let run = scan_direction(&board, Coord::new(0, 0), (1, 0), 2).unwrap();
    assert_eq!(run.len(), 4);

    let run = scan_direction(&board, Coord::new(2, 0), (-1, 0), 2).unwrap();
    assert_eq!(run.len(), 3);

    // Below the minimum.
    assert!(scan_direction(&board, Coord::new(3, 0), (1, 0), 2).is_none());
    assert_eq!(
        scan_direction(&board, Coord::new(3, 0), (1, 0), 1)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn scan_clamps_direction_and_starts_with_seed() {
    let board = Board::from_rows(&[[Red, Red, Red]]).unwrap();
    let seed = board.piece_id_at(0, 0).unwrap().unwrap();
    let run = scan_direction(&board, Coord::new(0, 0), (7, 0), 3).unwrap();
    assert_eq!(run.len(), 3);
    assert_eq!(run[0], seed);
}

#[test]
fn scan_from_outside_or_empty_cell_is_none() {
    let mut board = Board::from_rows(&[[Red, Red, Red]]).unwrap();
    assert!(scan_direction(&board, Coord::new(-1, 0), (1, 0), 1).is_none());
    board.take_piece(1, 0).unwrap();
    assert!(scan_direction(&board, Coord::new(1, 0), (1, 0), 1).is_none());
    // An empty cell mid-run stops the scan.
    assert!(scan_direction(&board, Coord::new(0, 0), (1, 0), 2).is_none());
}

#[test]
fn seed_in_the_middle_joins_both_halves() {
    let board = Board::from_rows(&[[Blue, Red, Red, Red, Blue]]).unwrap();
    let engine = MatchEngine::default();
    assert_eq!(engine.horizontal_match(&board, Coord::new(2, 0)).len(), 3);
    assert_eq!(engine.horizontal_match(&board, Coord::new(1, 0)).len(), 3);
    assert!(engine.horizontal_match(&board, Coord::new(0, 0)).is_empty());
}

#[test]
fn pair_is_not_a_match() {
    let board = Board::from_rows(&[[Red, Red, Blue]]).unwrap();
    let engine = MatchEngine::default();
    assert!(engine.match_at(&board, Coord::new(0, 0)).is_empty());
    assert_eq!(engine.highlights(&board).matched_count(), 0);
}

#[test]
fn cross_counts_shared_center_once() {
    let board = Board::from_rows(&[
        [Blue, Red, Blue],
        [Red, Red, Red],
        [Blue, Red, Blue],
    ])
    .unwrap();
    let engine = MatchEngine::default();
    let center = engine.match_at(&board, Coord::new(1, 1));
    assert_eq!(center.len(), 5);
    assert_eq!(engine.vertical_match(&board, Coord::new(1, 1)).len(), 3);
    assert_eq!(engine.highlights(&board).matched_count(), 5);
}

#[test]
fn vertical_run_is_highlighted() {
    let board = Board::from_rows(&[[Green, Blue], [Green, Red], [Green, Blue]]).unwrap();
    let map = MatchEngine::default().highlights(&board);
    assert_eq!(
        map.matched_cells(),
        vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
    );
}

#[test]
fn wild_matches_only_wild() {
    let board = Board::from_rows(&[[Wild, Wild, Wild, Red, Wild]]).unwrap();
    let map = MatchEngine::default().highlights(&board);
    assert_eq!(map.matched_count(), 3);
    assert_eq!(map.get(0, 0), Some(Wild));
    assert!(!map.is_matched(4, 0));
}

#[test]
fn highlight_pass_is_idempotent() {
    let board = Board::from_rows(&[
        [Red, Red, Red, Blue],
        [Blue, Green, Red, Blue],
        [Yellow, Green, Red, Blue],
    ])
    .unwrap();
    let engine = MatchEngine::default();
    let first = engine.highlights(&board);
    let second = engine.highlights(&board);
    assert_eq!(first, second);
    assert_eq!(first.matched_count(), 8);
}

#[test]
fn custom_minimum_length() {
    let board = Board::from_rows(&[[Red, Red, Red, Blue]]).unwrap();
    assert_eq!(MatchEngine::new(4).highlights(&board).matched_count(), 0);
    assert_eq!(MatchEngine::new(2).highlights(&board).matched_count(), 3);
}
