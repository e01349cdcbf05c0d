use std::collections::HashSet;

use console_battleship::{parse_coordinate, Coordinate, GRID_SIZE};
use proptest::prelude::*;

/// Every token the validator should accept.
fn accepted_tokens() -> HashSet<String> {
    let mut tokens = HashSet::new();
    for col in 0..GRID_SIZE {
        let letter = (b'A' + col as u8) as char;
        for row in 1..=GRID_SIZE {
            tokens.insert(format!("{}{}", letter, row));
            if row < 10 {
                tokens.insert(format!("{}0{}", letter, row));
            }
        }
    }
    tokens
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn grammar_tokens_map_to_documented_indices(col in 0..GRID_SIZE, row in 0..GRID_SIZE) {
        let token = format!("{}{}", (b'A' + col as u8) as char, row + 1);
        prop_assert_eq!(parse_coordinate(&token), Ok(Coordinate::new(row, col)));
        prop_assert_eq!(Coordinate::new(row, col).to_string(), token);
    }

    #[test]
    fn only_grammar_tokens_are_accepted(token in "[A-Lab0-9 x-]{0,4}") {
        let accepted = accepted_tokens();
        prop_assert_eq!(parse_coordinate(&token).is_ok(), accepted.contains(&token));
    }

    #[test]
    fn arbitrary_text_never_panics(token in "\\PC{0,6}") {
        if let Ok(coord) = parse_coordinate(&token) {
            prop_assert!(coord.row < GRID_SIZE && coord.col < GRID_SIZE);
        }
    }
}
