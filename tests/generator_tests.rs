use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_wordsearch::core::{BoardGenerator, GenerateError, GeneratorConfig};
use tui_wordsearch::types::{Orientation, DEFAULT_WORDS};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn generator(rows: u8, cols: u8) -> BoardGenerator {
    BoardGenerator::new(GeneratorConfig {
        rows,
        cols,
        ..GeneratorConfig::default()
    })
}

#[test]
fn default_word_list_fits_default_grid() {
    let mut rng = StdRng::seed_from_u64(7);
    let generated = BoardGenerator::default()
        .generate(&words(&DEFAULT_WORDS), &mut rng)
        .unwrap();

    assert_eq!(generated.placements.len(), DEFAULT_WORDS.len());
    assert_eq!(generated.words[0], "CARIENT");
    for placement in &generated.placements {
        assert_eq!(generated.board.spell(&placement.cells()), placement.word);
    }
}

#[test]
fn same_seed_same_board() {
    let list = words(&["FUEL", "OIL", "BIKE"]);
    let a = generator(8, 8)
        .generate(&list, &mut StdRng::seed_from_u64(42))
        .unwrap();
    let b = generator(8, 8)
        .generate(&list, &mut StdRng::seed_from_u64(42))
        .unwrap();
    assert_eq!(a.board, b.board);
    assert_eq!(a.placements, b.placements);
}

#[test]
fn word_longer_than_both_sides_is_rejected_up_front() {
    let err = generator(4, 6)
        .generate(&words(&["OIL", "MILEAGE"]), &mut StdRng::seed_from_u64(1))
        .unwrap_err();
    assert_eq!(
        err,
        GenerateError::WordTooLong {
            word: "MILEAGE".into(),
            len: 7,
            rows: 4,
            cols: 6,
        }
    );
}

#[test]
fn word_fitting_one_side_only_is_placed_along_it() {
    let generated = generator(3, 9)
        .generate(&words(&["JOURNEY"]), &mut StdRng::seed_from_u64(3))
        .unwrap();
    assert_eq!(generated.placements[0].orientation, Orientation::Horizontal);
}

#[test]
fn configuration_errors() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        generator(10, 10).generate(&[], &mut rng).unwrap_err(),
        GenerateError::NoWords
    );
    assert!(matches!(
        generator(0, 10).generate(&words(&["OIL"]), &mut rng),
        Err(GenerateError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        generator(10, 10).generate(&words(&["OIL", "oil"]), &mut rng),
        Err(GenerateError::DuplicateWord { .. })
    ));
    assert!(matches!(
        generator(10, 10).generate(&words(&["TYRE-2"]), &mut rng),
        Err(GenerateError::InvalidWord { .. })
    ));
}

#[test]
fn crowded_grid_gives_up_instead_of_hanging() {
    // Two 3-letter words with different letters can never share a 1x3 grid.
    let gen = BoardGenerator::new(GeneratorConfig {
        rows: 1,
        cols: 3,
        max_attempts: 50,
        longest_first: true,
    });
    let err = gen
        .generate(&words(&["ABC", "XYZ"]), &mut StdRng::seed_from_u64(9))
        .unwrap_err();
    assert_eq!(
        err,
        GenerateError::PlacementExhausted {
            word: "XYZ".into(),
            attempts: 50,
        }
    );
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[A-Z]{2,5}", 1..=4)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_boards_hold_every_word(
        rows in 8u8..=12,
        cols in 8u8..=12,
        list in word_list(),
        seed in any::<u64>(),
    ) {
        let generated = generator(rows, cols)
            .generate(&list, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let board = &generated.board;

        prop_assert_eq!(board.rows(), rows);
        prop_assert_eq!(board.cols(), cols);
        prop_assert!(board.cells().iter().all(|c| c.letter.is_ascii_uppercase()));
        prop_assert!(board.cells().iter().all(|c| !c.pressed && !c.highlighted && !c.correct));

        // Each placement is an in-bounds straight run that still spells its word,
        // so no later word overwrote one of its letters.
        prop_assert_eq!(generated.placements.len(), list.len());
        for placement in &generated.placements {
            let cells = placement.cells();
            prop_assert!(cells.iter().all(|&pos| board.contains(pos)));
            let contiguous = cells.windows(2).all(|w| match placement.orientation {
                Orientation::Horizontal => w[1].row == w[0].row && w[1].col == w[0].col + 1,
                Orientation::Vertical => w[1].col == w[0].col && w[1].row == w[0].row + 1,
            });
            prop_assert!(contiguous);
            prop_assert_eq!(board.spell(&cells), placement.word.clone());
        }
    }

    #[test]
    fn placement_order_is_longest_first(list in word_list(), seed in any::<u64>()) {
        let generated = generator(10, 10)
            .generate(&list, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert!(generated.words.windows(2).all(|w| w[0].len() >= w[1].len()));

        let mut sorted_in = list.clone();
        sorted_in.sort();
        let mut sorted_out = generated.words.clone();
        sorted_out.sort();
        prop_assert_eq!(sorted_in, sorted_out);
    }
}
