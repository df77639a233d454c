// Copyright (C) 2026 Andy Kurnia.

use rand::prelude::*;
use tilebot::{alphabet, board_layout, dawg, display, error::Returns, game_state, return_error};

fn fmt_word(alphabet: &alphabet::Alphabet<'_>, word: &[u8]) -> String {
    word.iter().filter_map(|&t| alphabet.from_board(t)).collect()
}

// Plays one game of the engine against itself and prints the moves.
// Usage: auto <word-list-file> [seed]
fn main() -> Returns<()> {
    let mut args = std::env::args().skip(1);
    let word_list_path = match args.next() {
        Some(path) => path,
        None => {
            return_error!("usage: auto <word-list-file> [seed]".to_string());
        }
    };
    let mut rng: Box<dyn RngCore> = match args.next() {
        Some(seed) => Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(seed.parse()?)),
        None => Box::new(rand_chacha::ChaCha20Rng::from_os_rng()),
    };

    let contents = std::fs::read_to_string(&word_list_path)?;
    let words: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let skipped = words
        .iter()
        .filter(|entry| alphabet::parse_word(entry).is_none())
        .count();
    if skipped > 0 {
        println!("ignoring {skipped} unusable entries from {word_list_path}");
    }
    let dawg = dawg::Dawg::from_words(words.iter().copied());
    if dawg.is_empty() {
        return_error!(format!("{word_list_path} contains no usable words"));
    }
    println!("{} automaton nodes from {} entries", dawg.len(), words.len());

    let alphabet = &alphabet::ENGLISH_ALPHABET;
    let mut game = game_state::GameState::new(
        alphabet,
        &dawg,
        &board_layout::COMMON_BOARD_LAYOUT,
        &mut rng,
    );

    println!("\nplaying self");
    let mut player = 0;
    let mut zero_turns = 0;
    while zero_turns < 4 {
        display::print_board(alphabet, &game.board);
        println!(
            "player 1: {}, player 2: {}, turn: player {}",
            game.players[0].score,
            game.players[1].score,
            player + 1
        );
        println!("rack: {}", alphabet.fmt_rack(&game.players[player].rack));
        match game.best_move(player)? {
            Some(outcome) => {
                zero_turns = 0;
                println!(
                    "plays {} {} at ({},{}) for {} points, draws {}",
                    fmt_word(alphabet, &outcome.place.word),
                    if outcome.place.down { "down" } else { "across" },
                    outcome.place.row,
                    outcome.place.col,
                    outcome.place.score,
                    alphabet.fmt_rack(&outcome.drawn),
                );
                if game.players[player].rack.is_empty() {
                    println!("player {} has gone out", player + 1);
                    break;
                }
            }
            None => {
                zero_turns += 1;
                if game.bag.is_empty() {
                    println!("no move, passes");
                } else {
                    let rack = game.players[player].rack.clone();
                    let outcome = game.exchange(player, &rack, &mut rng)?;
                    println!(
                        "no move, exchanges {} tiles",
                        outcome.returned.len()
                    );
                }
            }
        }
        player ^= 1;
    }

    display::print_board(alphabet, &game.board);
    let (s0, s1) = (game.players[0].score, game.players[1].score);
    println!("final: player 1: {s0}, player 2: {s1}");
    match s0.cmp(&s1) {
        std::cmp::Ordering::Greater => println!("player 1 wins"),
        std::cmp::Ordering::Less => println!("player 2 wins"),
        std::cmp::Ordering::Equal => println!("drawn game"),
    }
    Ok(())
}
