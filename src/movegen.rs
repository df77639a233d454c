// Copyright (C) 2026 Andy Kurnia.

use super::{
    alphabet::Alphabet,
    board::{self, Board},
    dawg::Dawg,
    play_scorer,
};

// A placement in natural board coordinates. For a down play the word
// starts at (row, col) and runs toward higher rows. Tiles carry the
// 0x80 flag where a blank supplied the letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Place {
    pub down: bool,
    pub row: i8,
    pub col: i8,
    pub word: Box<[u8]>,
    pub score: i16,
}

// Per-pass search state. The board is transposed between passes, so
// the search itself only ever builds words along a row; `down` tags
// which pass this is so record() can map coordinates back.
struct Env<'a> {
    board: &'a Board,
    dawg: &'a Dawg,
    alphabet: &'a Alphabet<'a>,
    rack_tally: [u8; 27],
    rack_len: u8,
    word_buffer: Vec<u8>,
    num_played: u8,
    row: i8,
    anchor_col: i8,
    down: bool,
    best: Option<Place>,
}

impl Env<'_> {
    fn is_anchor(&self, row: i8, col: i8) -> bool {
        self.board.letter_at(row, col) == 0
            && (self.board.letter_at(row - 1, col) != 0
                || self.board.letter_at(row + 1, col) != 0
                || self.board.letter_at(row, col - 1) != 0
                || self.board.letter_at(row, col + 1) != 0)
    }

    fn run(&mut self) {
        for row in 0..board::SIZE {
            self.row = row;
            for col in 0..board::SIZE {
                if !self.is_anchor(row, col) {
                    continue;
                }
                self.anchor_col = col;
                if self.board.letter_at(row, col - 1) != 0 {
                    self.seed_from_left_run();
                } else {
                    let limit = self.left_limit();
                    self.left_part(0, limit);
                }
            }
        }
    }

    // The anchor sits just right of tiles already on the board: walk
    // that run through the automaton and extend from the anchor. A run
    // that is no prefix of any word (a stub of a perpendicular play)
    // offers nothing.
    fn seed_from_left_run(&mut self) {
        let row = self.row;
        let mut start = self.anchor_col - 1;
        while self.board.letter_at(row, start - 1) != 0 {
            start -= 1;
        }
        let mut p = 0u32;
        for c in start..self.anchor_col {
            p = self.dawg.seek(p, self.board.letter_at(row, c));
            if p == 0 {
                return;
            }
        }
        for c in start..self.anchor_col {
            self.word_buffer.push(self.board.letter_at(row, c));
        }
        self.extend_right(p, self.anchor_col);
        self.word_buffer.clear();
    }

    // How far left a prefix may reach: over empty squares that are not
    // themselves anchors and not fully blocked, and never using more
    // than all-but-one of the rack.
    fn left_limit(&self) -> u8 {
        let row = self.row;
        let mut limit = 0u8;
        let mut c = self.anchor_col - 1;
        while c >= 0
            && self.board.letter_at(row, c) == 0
            && !self.is_anchor(row, c)
            && self.board.legal_letters(row, c) != 0
        {
            limit += 1;
            c -= 1;
        }
        limit.min(self.rack_len - 1)
    }

    // Builds prefixes left of the anchor out of rack tiles, completing
    // each through extend_right. Prefix squares have no perpendicular
    // neighbors (anchors are excluded from the free run), so only the
    // automaton constrains them.
    fn left_part(&mut self, p: u32, limit: u8) {
        self.extend_right(p, self.anchor_col);
        if limit > 0 {
            for letter in 1..=26u8 {
                let q = self.dawg.seek(p, letter);
                if q == 0 {
                    continue;
                }
                if self.rack_tally[letter as usize] > 0 {
                    self.rack_tally[letter as usize] -= 1;
                    self.num_played += 1;
                    self.word_buffer.push(letter);
                    self.left_part(q, limit - 1);
                    self.word_buffer.pop();
                    self.num_played -= 1;
                    self.rack_tally[letter as usize] += 1;
                }
                if self.rack_tally[0] > 0 {
                    self.rack_tally[0] -= 1;
                    self.num_played += 1;
                    self.word_buffer.push(letter | 0x80);
                    self.left_part(q, limit - 1);
                    self.word_buffer.pop();
                    self.num_played -= 1;
                    self.rack_tally[0] += 1;
                }
            }
        }
    }

    fn extend_right(&mut self, p: u32, col: i8) {
        let tile = self.board.letter_at(self.row, col);
        if tile == 0 {
            if col > self.anchor_col
                && self.num_played > 0
                && self.word_buffer.len() >= 2
                && self.dawg.accepts(p)
            {
                self.record(col);
            }
            // hemmed in above and below, this square can never take a
            // tile that the pair constraints could vouch for
            if self.board.letter_at(self.row - 1, col) != 0
                && self.board.letter_at(self.row + 1, col) != 0
            {
                return;
            }
            let bits = self.board.legal_letters(self.row, col);
            if bits == 0 {
                return;
            }
            for letter in 1..=26u8 {
                if bits & (1 << letter) == 0 {
                    continue;
                }
                let q = self.dawg.seek(p, letter);
                if q == 0 {
                    continue;
                }
                if self.rack_tally[letter as usize] > 0 {
                    self.rack_tally[letter as usize] -= 1;
                    self.num_played += 1;
                    self.word_buffer.push(letter);
                    self.extend_right(q, col + 1);
                    self.word_buffer.pop();
                    self.num_played -= 1;
                    self.rack_tally[letter as usize] += 1;
                }
                if self.rack_tally[0] > 0 {
                    self.rack_tally[0] -= 1;
                    self.num_played += 1;
                    self.word_buffer.push(letter | 0x80);
                    self.extend_right(q, col + 1);
                    self.word_buffer.pop();
                    self.num_played -= 1;
                    self.rack_tally[0] += 1;
                }
            }
        } else {
            let q = self.dawg.seek(p, tile);
            if q != 0 {
                self.word_buffer.push(tile);
                self.extend_right(q, col + 1);
                self.word_buffer.pop();
            }
        }
    }

    // The word in the buffer ends just before end_col. Re-playing a
    // word already on the board scores nothing and is skipped. Only a
    // strictly better score displaces the incumbent, so the earliest
    // find wins ties.
    fn record(&mut self, end_col: i8) {
        if self.board.contains_word(&self.word_buffer) {
            return;
        }
        let start_col = end_col - self.word_buffer.len() as i8;
        let score = play_scorer::score_place(
            self.board,
            self.alphabet,
            self.row,
            start_col,
            &self.word_buffer,
        );
        if self.best.as_ref().map_or(true, |b| score > b.score) {
            let word = self.word_buffer.as_slice().into();
            self.best = Some(if self.down {
                Place {
                    down: true,
                    row: start_col,
                    col: self.row,
                    word,
                    score,
                }
            } else {
                Place {
                    down: false,
                    row: self.row,
                    col: start_col,
                    word,
                    score,
                }
            });
        }
    }
}

fn new_env<'a>(
    board: &'a Board,
    dawg: &'a Dawg,
    alphabet: &'a Alphabet<'a>,
    rack_tally: [u8; 27],
    rack_len: u8,
    down: bool,
    best: Option<Place>,
) -> Env<'a> {
    Env {
        board,
        dawg,
        alphabet,
        rack_tally,
        rack_len,
        word_buffer: Vec::with_capacity(board::SIZE as usize),
        num_played: 0,
        row: 0,
        anchor_col: 0,
        down,
        best,
    }
}

// Finds the highest-scoring legal placement for the rack, or None when
// nothing can be played. The board is transposed and restored in
// place; it comes back in its natural orientation. On an empty board
// the only anchor is the star and a horizontal play suffices, any word
// through the center being reachable by symmetry.
pub fn best_place(
    board: &mut Board,
    dawg: &Dawg,
    alphabet: &Alphabet<'_>,
    rack: &[u8],
) -> Option<Place> {
    if rack.is_empty() {
        return None;
    }
    let mut rack_tally = [0u8; 27];
    for &tile in rack {
        rack_tally[tile as usize] += 1;
    }
    let rack_len = rack.len() as u8;
    if board.is_empty_board() {
        let mut env = new_env(board, dawg, alphabet, rack_tally, rack_len, false, None);
        env.row = board.star_row();
        env.anchor_col = board.star_col();
        let limit = (rack_len - 1).min(board.star_col() as u8);
        env.left_part(0, limit);
        return env.best;
    }
    let mut env = new_env(board, dawg, alphabet, rack_tally, rack_len, false, None);
    env.run();
    let best = env.best;
    board.transpose();
    let mut env = new_env(board, dawg, alphabet, rack_tally, rack_len, true, best);
    env.run();
    let best = env.best;
    board.transpose();
    best
}
