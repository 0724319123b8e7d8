//! End-to-end properties of the backtracking search and the dimension sweep

use squarepack::algorithm::{SearchOutcome, SizeSet, Sweep, search, verify, verify_all};
use squarepack::spatial::{Board, Cell};

fn sizes(list: &[usize]) -> SizeSet {
    SizeSet::new(list.to_vec()).map_or_else(|_| unreachable!("test size sets are valid"), |set| set)
}

#[test]
fn test_search_is_deterministic() {
    let allowed = sizes(&[2, 3]);
    let first = search(6, 7, &allowed);
    let second = search(6, 7, &allowed);
    assert!(first.is_tiled());
    assert_eq!(first, second);
}

#[test]
fn test_witness_covers_every_cell() {
    let Some(tiling) = search(6, 7, &sizes(&[2, 3])).tiling() else {
        unreachable!("6x7 is tileable with sizes 2 and 3");
    };
    for row in 0..tiling.rows() {
        for col in 0..tiling.cols() {
            assert!(
                tiling.get(row, col).is_some_and(|cell| !cell.is_empty()),
                "cell ({row}, {col}) left empty"
            );
        }
    }
}

#[test]
fn test_witness_round_trips_through_verification() {
    let allowed = sizes(&[2, 3]);
    let Some(tiling) = search(6, 7, &allowed).tiling() else {
        unreachable!("6x7 is tileable with sizes 2 and 3");
    };
    let max_size = verify(&tiling, &allowed);
    assert!(max_size.as_ref().is_ok_and(|&size| allowed.contains(size)));
}

#[test]
fn test_known_positive_5x5() {
    let allowed = sizes(&[2, 3]);
    let Some(tiling) = search(5, 5, &allowed).tiling() else {
        unreachable!("5x5 must be tileable with sizes 2 and 3");
    };
    assert_eq!(verify(&tiling, &allowed).ok(), Some(3));
}

#[test]
fn test_odd_area_board_exhausts_with_even_squares() {
    assert_eq!(search(3, 3, &sizes(&[2])), SearchOutcome::Exhausted);
}

#[test]
fn test_size_order_breaks_ties() {
    let small_first = search(6, 6, &sizes(&[2, 3]));
    let large_first = search(6, 6, &sizes(&[3, 2]));
    assert!(small_first.is_tiled());
    assert!(large_first.is_tiled());
    // Both orders solve 6x6, but the first placement at (0, 0) differs
    assert_ne!(small_first, large_first);
}

#[test]
fn test_fits_agrees_with_full_footprint_scan() {
    // A board filled in row-major order, as the search maintains it
    let mut board = Board::new(5, 6);
    board.place(0, 0, 2, 1);
    board.place(0, 2, 3, 2);
    board.place(0, 5, 1, 3);

    let naive_fits = |b: &Board, row: usize, col: usize, size: usize| {
        (row..row + size).all(|r| (col..col + size).all(|c| b.get(r, c).is_some_and(Cell::is_empty)))
    };

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            for size in 1..=4 {
                assert_eq!(
                    board.fits(row, col, size),
                    naive_fits(&board, row, col, size),
                    "disagreement at ({row}, {col}) size {size}"
                );
            }
        }
    }
}

#[test]
fn test_sweep_witnesses_all_verify() {
    let allowed = sizes(&[2, 3]);
    let mut sweep = Sweep::new(6, 6, allowed.clone());
    let mut searched_solved = 0;
    while let Some(step) = sweep.step() {
        if step.solved && !step.mirrored {
            searched_solved += 1;
        }
    }
    assert_eq!(sweep.tilings().len(), searched_solved);
    assert!(verify_all(sweep.tilings(), &allowed).is_ok_and(|size| size <= 3));
}
