//! End-to-end tests of the boundary API.

use gridwright_engine as engine;
use serde_json::json;

const PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const SOLUTION: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

/// Parses the human-readable fixture format into a byte board.
fn board(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch {
            '_' => 0,
            '1'..='9' => ch.to_digit(10).and_then(|v| u8::try_from(v).ok()).unwrap(),
            _ => panic!("bad fixture character {ch:?}"),
        })
        .collect()
}

#[test]
fn generation_is_deterministic_per_seed() {
    for difficulty in 1..=9 {
        let a = engine::generate_puzzle_with_seed(difficulty, 1234);
        let b = engine::generate_puzzle_with_seed(difficulty, 1234);
        assert_eq!(a, b);
    }
}

#[test]
fn generated_puzzle_is_valid_unique_and_solvable() {
    let puzzle = engine::generate_puzzle_with_seed(3, 42);

    let report = engine::validate_board(&puzzle).unwrap();
    assert!(report.invalid_cells.is_empty());
    assert!(!report.is_complete);

    assert!(engine::check_unique_solution(&puzzle).unwrap());

    let solved = engine::solve_puzzle(&puzzle).unwrap();
    let solved_report = engine::validate_board(&solved).unwrap();
    assert!(solved_report.is_complete);

    // The solution must extend the puzzle, not rewrite it.
    for (given, cell) in puzzle.iter().zip(&solved) {
        if *given != 0 {
            assert_eq!(given, cell);
        }
    }
}

#[test]
fn sparse_and_byte_generation_agree() {
    let bytes = engine::generate_puzzle_with_seed(2, 7);
    let sparse = engine::create_game_with_seed(2, 7);
    assert_eq!(sparse.len(), 81);
    for (byte, cell) in bytes.iter().zip(&sparse) {
        match cell {
            None => assert_eq!(*byte, 0),
            Some(digit) => assert_eq!(byte, digit),
        }
    }

    let report = engine::validate_board_sparse(&sparse).unwrap();
    assert!(report.invalid_cells.is_empty());
}

#[test]
fn custom_generation_respects_clue_range() {
    let puzzle = engine::generate_custom_puzzle(3, 32, 40, true, 9);
    let clues = puzzle.iter().filter(|&&cell| cell != 0).count();
    assert!((32..=40).contains(&clues), "got {clues} clues");
    assert!(engine::check_unique_solution(&puzzle).unwrap());
}

#[test]
fn custom_generation_clamps_out_of_range_bounds() {
    // 0 and 81 clamp to 17 and 50; the result must land inside that range.
    let puzzle = engine::generate_custom_puzzle(5, 0, 81, false, 21);
    let clues = puzzle.iter().filter(|&&cell| cell != 0).count();
    assert!((17..=50).contains(&clues), "got {clues} clues");
}

#[test]
fn validation_flags_both_cells_of_a_row_duplicate() {
    let mut cells = vec![0; 81];
    cells[0] = 5;
    cells[8] = 5;
    let report = engine::validate_board(&cells).unwrap();
    assert_eq!(report.invalid_cells, vec![0, 8]);
    assert!(!report.is_complete);
}

#[test]
fn solved_board_validates_as_complete() {
    let report = engine::validate_board(&board(SOLUTION)).unwrap();
    assert!(report.invalid_cells.is_empty());
    assert!(report.is_complete);
}

#[test]
fn solve_is_idempotent_on_solved_boards() {
    let solution = board(SOLUTION);
    assert_eq!(engine::solve_puzzle(&solution).unwrap(), solution);
}

#[test]
fn solve_returns_input_for_unsolvable_board() {
    // Row 0 holds 1-8; the 9 in cell (8, 1) leaves cell (8, 0) without a
    // candidate, with no duplicate anywhere.
    let mut cells = vec![0; 81];
    for (index, cell) in cells.iter_mut().take(8).enumerate() {
        *cell = u8::try_from(index).unwrap() + 1;
    }
    cells[17] = 9;

    assert!(
        engine::validate_board(&cells)
            .unwrap()
            .invalid_cells
            .is_empty()
    );
    assert_eq!(engine::solve_puzzle(&cells).unwrap(), cells);
    assert!(!engine::check_unique_solution(&cells).unwrap());
    assert_eq!(engine::reveal_hint(&cells).unwrap(), None);
}

#[test]
fn removing_an_unavoidable_set_breaks_uniqueness() {
    // The four cleared cells form a 1/3 rectangle across two rows, two
    // columns, and two boxes, so exactly two completions exist.
    let mut cells = board(SOLUTION);
    for index in [32, 35, 41, 44] {
        cells[index] = 0;
    }
    assert!(!engine::check_unique_solution(&cells).unwrap());

    let solved = engine::solve_puzzle(&cells).unwrap();
    assert!(engine::validate_board(&solved).unwrap().is_complete);
}

#[test]
fn analysis_reports_easy_for_a_singles_puzzle() {
    let report = engine::analyze_puzzle_difficulty(&board(PUZZLE)).unwrap();
    assert_eq!(report.difficulty, "easy");
    assert!(report.solved_by_techniques);
    assert_eq!(report.clue_count, 30);
    assert_eq!(report.steps, 51);
    assert!(report.techniques.iter().any(|name| name == "Naked Single"));
}

#[test]
fn analysis_of_empty_board_is_well_formed() {
    let report = engine::analyze_puzzle_difficulty(&[0; 81]).unwrap();
    assert_eq!(report.difficulty, "expert");
    assert!(!report.solved_by_techniques);
    assert_eq!(report.steps, 0);
    assert!(report.techniques.is_empty());
}

#[test]
fn technique_solve_traces_every_placement() {
    let trace = engine::solve_with_techniques(&board(PUZZLE)).unwrap();
    assert!(trace.solved);
    assert_eq!(trace.steps.len(), 51);
    assert!(engine::validate_board(&trace.board).unwrap().is_complete);
    for step in &trace.steps {
        assert!(!step.technique.is_empty());
    }
}

#[test]
fn technique_solve_of_conflicting_board_returns_input() {
    let mut cells = vec![0; 81];
    cells[0] = 7;
    cells[1] = 7;
    let trace = engine::solve_with_techniques(&cells).unwrap();
    assert!(!trace.solved);
    assert!(trace.steps.is_empty());
    assert_eq!(trace.board, cells);
}

#[test]
fn hint_fills_the_last_empty_cell() {
    let mut cells = board(SOLUTION);
    cells[40] = 0;

    let hint = engine::get_hint(&cells).unwrap().unwrap();
    assert_eq!(hint.cell, 40);
    assert_eq!(hint.number, 5);
    assert_eq!(hint.technique, "Naked Single");

    let reveal = engine::reveal_hint(&cells).unwrap().unwrap();
    assert_eq!(reveal.cell, 40);
    assert_eq!(reveal.number, 5);
    assert_eq!(reveal.technique, "Reveal");
}

#[test]
fn hint_matches_the_unique_solution() {
    let puzzle = engine::generate_puzzle_with_seed(2, 11);
    let solution = engine::solve_puzzle(&puzzle).unwrap();
    let hint = engine::get_hint(&puzzle).unwrap().unwrap();
    assert_eq!(puzzle[hint.cell], 0);
    assert_eq!(solution[hint.cell], hint.number);
}

#[test]
fn no_hint_for_complete_conflicting_or_empty_boards() {
    assert_eq!(engine::get_hint(&board(SOLUTION)).unwrap(), None);
    assert_eq!(engine::reveal_hint(&board(SOLUTION)).unwrap(), None);

    let mut conflicting = vec![0; 81];
    conflicting[0] = 4;
    conflicting[9] = 4;
    assert_eq!(engine::get_hint(&conflicting).unwrap(), None);

    // An empty board gives every cell nine candidates; no technique applies.
    assert_eq!(engine::get_hint(&[0; 81]).unwrap(), None);
}

#[test]
fn reveal_picks_the_first_empty_cell() {
    let mut cells = board(SOLUTION);
    cells[3] = 0;
    cells[60] = 0;
    let hint = engine::reveal_hint(&cells).unwrap().unwrap();
    assert_eq!(hint.cell, 3);
    assert_eq!(hint.number, 6);
}

#[test]
fn malformed_boards_are_rejected() {
    assert!(engine::validate_board(&[0; 80]).is_err());
    assert!(engine::solve_puzzle(&[0; 82]).is_err());
    assert!(engine::check_unique_solution(&[10; 81]).is_err());
    assert!(engine::analyze_puzzle_difficulty(&[255; 81]).is_err());
    assert!(engine::get_hint(&[0; 5]).is_err());
    assert!(engine::validate_board_sparse(&[Some(12); 81]).is_err());
}

#[test]
fn reports_serialize_with_stable_field_names() {
    let mut cells = board(SOLUTION);
    cells[40] = 0;

    let hint = engine::get_hint(&cells).unwrap().unwrap();
    assert_eq!(
        serde_json::to_value(&hint).unwrap(),
        json!({ "cell": 40, "number": 5, "technique": "Naked Single" })
    );

    let report = engine::validate_board(&cells).unwrap();
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({ "invalid_cells": [], "is_complete": false })
    );

    let trace = engine::solve_with_techniques(&cells).unwrap();
    let value = serde_json::to_value(&trace).unwrap();
    assert_eq!(value["solved"], json!(true));
    assert_eq!(
        value["steps"][0]["action"],
        json!({ "kind": "place", "cell": 40, "number": 5 })
    );
}
