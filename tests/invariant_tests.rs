//! Property tests for engine invariants.
//!
//! Random games (computer-driven placements mixed with exchanges and
//! passes) must conserve the 100-tile population and respect rack capacity
//! at every step; the external square coordinates must stay an exact
//! parse/format inverse.

use std::sync::Arc;

use proptest::prelude::*;

use wordboard::{
    choose_move, Difficulty, Game, GamePhase, GameRng, LetterHistogram, PlayerKind, SquareId,
    WordList, RACK_CAPACITY,
};

fn small_dictionary() -> Arc<WordList> {
    Arc::new(WordList::new([
        "AA", "AB", "AD", "AE", "AG", "AH", "AI", "AL", "AM", "AN", "AR", "AS", "AT", "AX",
        "BA", "BE", "BI", "BO", "BY", "DE", "DO", "ED", "EH", "EL", "EM", "EN", "ER", "ES",
        "ET", "EX", "FA", "GO", "HA", "HE", "HI", "HO", "ID", "IF", "IN", "IS", "IT", "LA",
        "LO", "MA", "ME", "MI", "MO", "MY", "NO", "ON", "OR", "OX", "PA", "PE", "PI", "RE",
        "SO", "TA", "TI", "TO", "UP", "US", "UT", "WE", "YE", "YO",
    ]))
}

fn started_game(seed: u64) -> Game {
    let mut game = Game::new(small_dictionary(), seed);
    game.add_player("Ada", PlayerKind::Computer(Difficulty::HARD))
        .unwrap();
    game.add_player("Ben", PlayerKind::Computer(Difficulty::HARD))
        .unwrap();
    game.start_game().unwrap();
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// No tile is ever created or destroyed, whatever the move mix.
    #[test]
    fn prop_tiles_conserved_across_random_games(seed in any::<u64>(), steps in 1usize..40) {
        let mut game = started_game(seed);
        let mut rng = GameRng::new(seed.wrapping_add(1));
        let profile = Difficulty::HARD.with_min_acceptable_score(1);

        for step in 0..steps {
            if game.phase() != GamePhase::Play {
                break;
            }
            let log_before = game.move_log().len();

            if step % 3 == 2 {
                // Exchange two tiles when possible, otherwise pass.
                let current = game.current_player();
                let selected: Vec<_> = game
                    .player(current)
                    .unwrap()
                    .rack()
                    .tiles()
                    .iter()
                    .take(2)
                    .map(|tile| tile.id())
                    .collect();
                if selected.len() == 2 && game.bag_len() >= 2 {
                    game.change_tiles(&selected).unwrap();
                } else {
                    game.pass().unwrap();
                }
            } else {
                let mv = choose_move(&game, &profile, &mut rng, None);
                game.execute_move(mv).unwrap();
            }

            prop_assert_eq!(game.total_tile_count(), 100);
            prop_assert_eq!(game.move_log().len(), log_before + 1);
            for player in game.players() {
                prop_assert!(player.rack().len() <= RACK_CAPACITY);
            }
        }
    }

    /// Formatting a parsed id reproduces the input exactly.
    #[test]
    fn prop_square_id_parse_format_inverse(s in "[A-O](1[0-5]|[1-9])") {
        let id: SquareId = s.parse().unwrap();
        prop_assert_eq!(id.to_string(), s);
    }

    /// Strictness: anything the parser accepts must round-trip, so no two
    /// distinct spellings name the same square.
    #[test]
    fn prop_square_id_accepts_only_canonical(s in "\\PC{0,4}") {
        if let Ok(id) = s.parse::<SquareId>() {
            prop_assert_eq!(id.to_string(), s);
        }
    }

    /// A word always fits within a letter pool extending its own letters.
    #[test]
    fn prop_histogram_superset_fits(word in "[A-Z]{1,7}", extra in "[A-Z]{0,3}") {
        let needed = LetterHistogram::from_word(&word);
        let available = LetterHistogram::from_word(&format!("{word}{extra}"));
        prop_assert!(needed.fits_within(&available));
    }
}
