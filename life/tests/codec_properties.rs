//! Property-based tests for the board file format.

use life::{Board, BoardCodec, FormatError, LifeConfig, LifeError};
use proptest::prelude::*;

/// Strategy for rectangular boards up to 24x24
fn arbitrary_board() -> impl Strategy<Value = Board> {
    (1usize..24, 1usize..24)
        .prop_flat_map(|(height, width)| prop::collection::vec(prop::collection::vec(any::<bool>(), width), height))
        .prop_map(|rows| Board::from_rows(rows).expect("strategy builds rectangular rows"))
}

/// Strategy for a single board line made of spaces and arbitrary non-space characters
fn arbitrary_line(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just(' '), Just('#'), Just('x'), Just('0')], len)
        .prop_map(|chars| chars.into_iter().collect())
}

fn codec() -> BoardCodec {
    BoardCodec::new(&LifeConfig::default())
}

proptest! {
    #[test]
    fn prop_serialize_parse_roundtrip(board in arbitrary_board()) {
        let codec = codec();
        let text = codec.serialize(&board);

        prop_assert!(!text.ends_with('\n'));
        prop_assert_eq!(codec.parse(&text).expect("serialized board parses"), board);
    }

    #[test]
    fn prop_serialized_lines_match_width(board in arbitrary_board()) {
        let text = codec().serialize(&board);

        prop_assert_eq!(text.split('\n').count(), board.height());
        prop_assert!(text.split('\n').all(|line| line.chars().count() == board.width()));
    }

    #[test]
    fn prop_single_line_always_parses(line in (1usize..80).prop_flat_map(arbitrary_line)) {
        let board = codec().parse(&line).expect("single line is valid");

        prop_assert_eq!(board.height(), 1);
        prop_assert_eq!(board.width(), line.chars().count());
        let live = line.chars().filter(|&c| c != ' ').count();
        prop_assert_eq!(board.live_count(), live);
    }

    #[test]
    fn prop_ragged_rows_are_rejected(
        (first, second) in (1usize..40, 1usize..40).prop_filter("lengths differ", |(a, b)| a != b),
        rows_before in 0usize..5,
    ) {
        let mut lines = vec!["#".repeat(first); rows_before + 1];
        lines.push("#".repeat(second));
        let text = lines.join("\n");

        let result = codec().parse(&text);
        let is_ragged = matches!(
            result,
            Err(LifeError::InvalidFormat(FormatError::RaggedRow { line, expected, found }))
                if line == rows_before + 2 && expected == first && found == second
        );
        prop_assert!(is_ragged);
    }

    #[test]
    fn prop_liveness_not_character_identity_survives(board in arbitrary_board()) {
        let config = LifeConfig { live_marker: '@', ..LifeConfig::default() };
        let text = BoardCodec::new(&config).serialize(&board);

        // Re-read with a codec using a different marker
        prop_assert_eq!(codec().parse(&text).expect("parses"), board);
    }
}
