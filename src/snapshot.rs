// Copyright (C) 2026 Andy Kurnia.

use super::{
    alphabet::{self, Alphabet},
    bag::Bag,
    board::{self, Board},
    board_layout::BoardLayout,
    dawg::Dawg,
    error::Returns,
    game_state::{GamePlayer, GameState, RACK_SIZE},
};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

// Everything needed to reconstruct a game. Board tiles are signed:
// positive is the letter itself, negative is a blank standing in for
// that letter, zero is empty. Premiums and cross-check state are not
// persisted; both are derived from tile positions on restore. The bag
// is a per-tile tally since its order is reshuffled anyway.
#[derive(Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board_tiles: Vec<Vec<i8>>,
    pub racks: [Vec<u8>; 2],
    pub scores: [i16; 2],
    pub bag: Vec<u8>,
    pub words_played: Vec<String>,
}

pub fn snapshot(game: &GameState<'_>) -> GameSnapshot {
    debug_assert!(!game.board.is_transposed());
    debug_assert!(game.board.queues_are_empty());
    let board_tiles = (0..board::SIZE)
        .map(|row| {
            (0..board::SIZE)
                .map(|col| {
                    let tile = game.board.letter_at(row, col);
                    if tile & 0x80 == 0 {
                        tile as i8
                    } else {
                        -((tile & 0x7f) as i8)
                    }
                })
                .collect()
        })
        .collect();
    let words_played = game
        .board
        .words_played()
        .iter()
        .map(|word| game.alphabet.fmt_rack(word))
        .collect();
    GameSnapshot {
        board_tiles,
        racks: [
            game.players[0].rack.clone(),
            game.players[1].rack.clone(),
        ],
        scores: [game.players[0].score, game.players[1].score],
        bag: game.bag.tally(game.alphabet.len()),
        words_played,
    }
}

pub fn restore<'a>(
    alphabet: &'a Alphabet<'a>,
    dawg: &'a Dawg,
    layout: &BoardLayout<'_>,
    snap: &GameSnapshot,
    rng: &mut dyn RngCore,
) -> Returns<GameState<'a>> {
    if snap.board_tiles.len() != board::SIZE as usize
        || snap.board_tiles.iter().any(|row| row.len() != board::SIZE as usize)
    {
        return_error!(format!("board is not {0}x{0}", board::SIZE));
    }
    if snap.bag.len() != alphabet.len() as usize {
        return_error!(format!("bag tally has {} entries", snap.bag.len()));
    }
    // every tile must be accounted for within the game's fixed set
    let mut counts = vec![0u16; alphabet.len() as usize];
    for (tile, &n) in snap.bag.iter().enumerate() {
        counts[tile] += n as u16;
    }
    for rack in &snap.racks {
        if rack.len() > RACK_SIZE {
            return_error!(format!("rack has {} tiles", rack.len()));
        }
        for &tile in rack {
            if tile >= alphabet.len() {
                return_error!(format!("invalid rack tile {tile}"));
            }
            counts[tile as usize] += 1;
        }
    }
    for row in &snap.board_tiles {
        for &signed in row {
            if signed == 0 {
                continue;
            }
            let letter = signed.unsigned_abs();
            if letter == 0 || letter >= alphabet.len() {
                return_error!(format!("invalid board tile {signed}"));
            }
            // a blank on the board is a blank from the set
            counts[if signed < 0 { 0 } else { letter as usize }] += 1;
        }
    }
    for (tile, &count) in counts.iter().enumerate() {
        if count > alphabet.freq(tile as u8) as u16 {
            return_error!(format!(
                "{} tiles of {} exceed the set's {}",
                count,
                alphabet.from_rack(tile as u8).unwrap_or("?"),
                alphabet.freq(tile as u8)
            ));
        }
    }

    let mut board_obj = Board::new(layout);
    for (r, row) in snap.board_tiles.iter().enumerate() {
        for (c, &signed) in row.iter().enumerate() {
            if signed != 0 {
                let tile = if signed > 0 {
                    signed as u8
                } else {
                    signed.unsigned_abs() | 0x80
                };
                board_obj.place(r as i8, c as i8, tile)?;
            }
        }
    }
    board_obj.recompute_cross_checks(dawg, alphabet);
    for entry in &snap.words_played {
        match alphabet::parse_word(entry) {
            Some(word) => board_obj.push_word(&word),
            None => {
                return_error!(format!("unparseable played word {entry:?}"));
            }
        }
    }
    let mut bag = Bag::from_tally(&snap.bag);
    bag.shuffle(rng);
    Ok(GameState {
        alphabet,
        dawg,
        board: board_obj,
        players: [
            GamePlayer {
                score: snap.scores[0],
                rack: snap.racks[0].clone(),
            },
            GamePlayer {
                score: snap.scores[1],
                rack: snap.racks[1].clone(),
            },
        ],
        bag,
    })
}
