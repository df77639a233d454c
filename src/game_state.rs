// Copyright (C) 2026 Andy Kurnia.

use super::{
    alphabet::Alphabet,
    bag::Bag,
    board::{self, Board},
    board_layout::BoardLayout,
    dawg::Dawg,
    error::Returns,
    movegen::{self, Place},
    play_scorer,
};
use rand::prelude::*;

pub const RACK_SIZE: usize = 7;

pub struct GamePlayer {
    pub score: i16,
    pub rack: Vec<u8>,
}

// One game: a board, two racks, and a shared bag. The dictionary and
// alphabet are borrowed read-only and may serve many games at once.
// Each operation owns the whole state for its duration; callers that
// need concurrent access to one game must serialize around it.
pub struct GameState<'a> {
    pub alphabet: &'a Alphabet<'a>,
    pub dawg: &'a Dawg,
    pub board: Board,
    pub players: [GamePlayer; 2],
    pub bag: Bag,
}

pub struct MoveOutcome {
    pub place: Place,
    // rack tiles consumed, blanks reported as the blank
    pub used: Box<[u8]>,
    pub drawn: Box<[u8]>,
}

pub struct ExchangeOutcome {
    pub returned: Box<[u8]>,
    pub drawn: Box<[u8]>,
}

fn rack_remove(rack: &mut Vec<u8>, tile: u8) -> bool {
    if let Some(pos) = rack.iter().position(|&t| t == tile) {
        rack.swap_remove(pos);
        true
    } else {
        false
    }
}

impl<'a> GameState<'a> {
    pub fn new(
        alphabet: &'a Alphabet<'a>,
        dawg: &'a Dawg,
        layout: &BoardLayout<'_>,
        rng: &mut dyn RngCore,
    ) -> GameState<'a> {
        let mut bag = Bag::new(alphabet);
        bag.shuffle(rng);
        let mut players = [
            GamePlayer {
                score: 0,
                rack: Vec::with_capacity(RACK_SIZE),
            },
            GamePlayer {
                score: 0,
                rack: Vec::with_capacity(RACK_SIZE),
            },
        ];
        for player in &mut players {
            bag.replenish(&mut player.rack, RACK_SIZE);
        }
        GameState {
            alphabet,
            dawg,
            board: Board::new(layout),
            players,
            bag,
        }
    }

    // Searches for the best placement for the player's rack, commits
    // it, updates the score, and refills the rack. Ok(None) when no
    // legal move exists; the caller decides whether to exchange or
    // pass.
    pub fn best_move(&mut self, player: usize) -> Returns<Option<MoveOutcome>> {
        let rack = &self.players[player].rack;
        let place = match movegen::best_place(&mut self.board, self.dawg, self.alphabet, rack) {
            Some(place) => place,
            None => return Ok(None),
        };
        let used = self.commit_place(&place)?;
        let p = &mut self.players[player];
        p.score += place.score;
        for &tile in &used {
            rack_remove(&mut p.rack, tile);
        }
        let drawn = self.bag.replenish(&mut p.rack, RACK_SIZE);
        debug_assert!(self.board.queues_are_empty());
        debug_assert!(!self.board.is_transposed());
        Ok(Some(MoveOutcome { place, used, drawn }))
    }

    // Places a caller-chosen word, for plays decided outside the
    // engine. The word must fit on the board, be in the lexicon, and
    // not already be on the board. Tiles the board already provides are
    // not taken from the rack; rack tiles the player does not actually
    // hold are tolerated and simply not removed.
    pub fn play_word(
        &mut self,
        player: usize,
        down: bool,
        row: i8,
        col: i8,
        word: &[u8],
    ) -> Returns<MoveOutcome> {
        if word.len() < 2 {
            return_error!(format!("word of length {} cannot be played", word.len()));
        }
        let (r, c) = if down { (col, row) } else { (row, col) };
        if !(0..board::SIZE).contains(&r)
            || !(0..board::SIZE).contains(&c)
            || c + word.len() as i8 > board::SIZE
        {
            return_error!(format!("word does not fit at ({row},{col})"));
        }
        let letters: Vec<u8> = word.iter().map(|&t| t & 0x7f).collect();
        if !self.dawg.is_word(&letters) {
            return_error!(format!(
                "{} is not a word",
                self.alphabet.fmt_rack(&letters)
            ));
        }
        if self.board.contains_word(&letters) {
            return_error!(format!(
                "{} is already on the board",
                self.alphabet.fmt_rack(&letters)
            ));
        }
        // score against the pre-commit board, in the play's orientation
        if down {
            self.board.transpose();
        }
        let score = play_scorer::score_place(&self.board, self.alphabet, r, c, word);
        if down {
            self.board.transpose();
        }
        let place = Place {
            down,
            row,
            col,
            word: word.into(),
            score,
        };
        let used = self.commit_place(&place)?;
        let p = &mut self.players[player];
        p.score += place.score;
        for &tile in &used {
            rack_remove(&mut p.rack, tile);
        }
        let drawn = self.bag.replenish(&mut p.rack, RACK_SIZE);
        Ok(MoveOutcome { place, used, drawn })
    }

    // Commits in natural or transposed orientation as the play
    // demands, restoring the natural orientation even when the commit
    // conflicts. Returns the rack tiles the play consumed.
    fn commit_place(&mut self, place: &Place) -> Returns<Box<[u8]>> {
        let (r, c) = if place.down {
            (place.col, place.row)
        } else {
            (place.row, place.col)
        };
        if place.down {
            self.board.transpose();
        }
        let result = self.board.commit_word(self.dawg, self.alphabet, r, c, &place.word);
        if place.down {
            self.board.transpose();
        }
        let placed = result?;
        Ok(placed
            .iter()
            .map(|&pc| {
                let tile = place.word[(pc - c) as usize];
                if tile & 0x80 == 0 { tile } else { 0 }
            })
            .collect())
    }

    // Returns the given tiles to the bag and draws replacements. The
    // rack is refilled before the returned tiles go back, so a player
    // can never immediately redraw what they gave up.
    pub fn exchange(
        &mut self,
        player: usize,
        tiles: &[u8],
        rng: &mut dyn RngCore,
    ) -> Returns<ExchangeOutcome> {
        let p = &mut self.players[player];
        let mut returned = Vec::with_capacity(tiles.len());
        for &tile in tiles {
            if rack_remove(&mut p.rack, tile) {
                returned.push(tile);
            }
        }
        let drawn = self.bag.replenish(&mut p.rack, RACK_SIZE);
        self.bag.put_back(rng, &returned);
        Ok(ExchangeOutcome {
            returned: returned.into_boxed_slice(),
            drawn,
        })
    }
}
