// Copyright (C) 2026 Andy Kurnia.

use super::{alphabet::Alphabet, board_layout::BoardLayout, board_layout::Premium, dawg::Dawg, error::OccupiedConflict};

pub const SIZE: i8 = 15;
const GRID: i8 = 16;

// Letters 1..=26, so bit 0 stays clear.
pub const FULL_CROSS_BITS: u32 = 0x7fff_ffe;

static NO_PREMIUM: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 1,
};

// cross_checks and cross_sums are indexed by orientation: slot 0 is
// consulted when the board is in its natural orientation, slot 1 when
// transposed. An occupied square's bitsets are both zero.
#[derive(Clone)]
pub struct Square {
    pub tile: u8,
    pub premium: Premium,
    pub cross_checks: [u32; 2],
    pub cross_sums: [i16; 2],
}

struct PendingCheck {
    row: i8,
    col: i8,
    adjoining: u8,
}

// The grid is 16x16: row 15 and col 15 are permanently-empty sentinels
// with zero bitsets, so searches fall off the edge without bounds
// checks in the inner loops.
pub struct Board {
    squares: Vec<Square>,
    transposed: bool,
    words_played: Vec<Box<[u8]>>,
    above_queue: Vec<PendingCheck>,
    below_queue: Vec<PendingCheck>,
    star_row: i8,
    star_col: i8,
}

#[inline(always)]
fn idx(row: i8, col: i8) -> usize {
    row as usize * GRID as usize + col as usize
}

#[inline(always)]
fn on_board(row: i8, col: i8) -> bool {
    (0..SIZE).contains(&row) && (0..SIZE).contains(&col)
}

impl Board {
    pub fn new(layout: &BoardLayout<'_>) -> Board {
        debug_assert_eq!(layout.rows(), SIZE);
        debug_assert_eq!(layout.cols(), SIZE);
        let mut squares = Vec::with_capacity(GRID as usize * GRID as usize);
        for row in 0..GRID {
            for col in 0..GRID {
                let playable = on_board(row, col);
                squares.push(Square {
                    tile: 0,
                    premium: if playable {
                        layout.premium_at(row, col)
                    } else {
                        NO_PREMIUM
                    },
                    cross_checks: if playable {
                        [FULL_CROSS_BITS; 2]
                    } else {
                        [0; 2]
                    },
                    cross_sums: [0; 2],
                });
            }
        }
        Board {
            squares,
            transposed: false,
            words_played: Vec::new(),
            above_queue: Vec::new(),
            below_queue: Vec::new(),
            star_row: layout.star_row(),
            star_col: layout.star_col(),
        }
    }

    #[inline(always)]
    pub fn square(&self, row: i8, col: i8) -> &Square {
        &self.squares[idx(row, col)]
    }

    #[inline(always)]
    fn square_mut(&mut self, row: i8, col: i8) -> &mut Square {
        &mut self.squares[idx(row, col)]
    }

    // 0 for empty and for anywhere off the 16x16 grid.
    #[inline(always)]
    pub fn letter_at(&self, row: i8, col: i8) -> u8 {
        if (0..GRID).contains(&row) && (0..GRID).contains(&col) {
            self.squares[idx(row, col)].tile
        } else {
            0
        }
    }

    #[inline(always)]
    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    #[inline(always)]
    pub fn orient(&self) -> usize {
        self.transposed as usize
    }

    #[inline(always)]
    pub fn legal_letters(&self, row: i8, col: i8) -> u32 {
        self.square(row, col).cross_checks[self.orient()]
    }

    #[inline(always)]
    pub fn cross_sum(&self, row: i8, col: i8) -> i16 {
        self.square(row, col).cross_sums[self.orient()]
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        self.star_row
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        self.star_col
    }

    pub fn is_empty_board(&self) -> bool {
        self.squares.iter().all(|sq| sq.tile == 0)
    }

    // Swaps rows and columns in place. Each square carries both of its
    // orientation slots along, so nothing else needs fixing up.
    pub fn transpose(&mut self) {
        debug_assert!(self.queues_are_empty());
        for row in 0..GRID {
            for col in row + 1..GRID {
                self.squares.swap(idx(row, col), idx(col, row));
            }
        }
        self.transposed = !self.transposed;
    }

    pub fn queues_are_empty(&self) -> bool {
        self.above_queue.is_empty() && self.below_queue.is_empty()
    }

    // Sets the square's letter. Ok(true) if the tile was newly placed,
    // Ok(false) if the same letter was already there (a no-op). A
    // different letter is a conflict. Placement spends the square's
    // premium and blanks out its bitsets.
    pub fn place(&mut self, row: i8, col: i8, tile: u8) -> Result<bool, OccupiedConflict> {
        debug_assert!(on_board(row, col));
        debug_assert_ne!(tile & 0x7f, 0);
        let sq = self.square_mut(row, col);
        if sq.tile != 0 {
            if sq.tile & 0x7f == tile & 0x7f {
                Ok(false)
            } else {
                Err(OccupiedConflict {
                    row,
                    col,
                    existing: sq.tile,
                    placed: tile,
                })
            }
        } else {
            sq.tile = tile;
            sq.premium = NO_PREMIUM;
            sq.cross_checks = [0; 2];
            Ok(true)
        }
    }

    // Places a word leftmost-first along the current orientation's row.
    // Returns the columns that actually received a new tile. On a
    // conflict every square touched by this call is restored, premiums
    // and bitsets included.
    fn place_word(&mut self, row: i8, col: i8, word: &[u8]) -> Result<Vec<i8>, OccupiedConflict> {
        debug_assert!(on_board(row, col) && col + word.len() as i8 <= SIZE);
        let mut placed = Vec::with_capacity(word.len());
        let mut saved = Vec::with_capacity(word.len());
        for (i, &tile) in word.iter().enumerate() {
            let c = col + i as i8;
            let before = self.square(row, c).clone();
            match self.place(row, c, tile) {
                Ok(true) => {
                    placed.push(c);
                    saved.push((c, before));
                }
                Ok(false) => {}
                Err(conflict) => {
                    for (sc, sq) in saved {
                        *self.square_mut(row, sc) = sq;
                    }
                    return Err(conflict);
                }
            }
        }
        Ok(placed)
    }

    // Commits a whole word along the current orientation's row: places
    // the tiles, queues perpendicular-constraint updates for each new
    // tile, caps both ends of the word against the other orientation,
    // drains the queues, and records the word as played.
    pub fn commit_word(
        &mut self,
        dawg: &Dawg,
        alphabet: &Alphabet<'_>,
        row: i8,
        col: i8,
        word: &[u8],
    ) -> Result<Box<[i8]>, OccupiedConflict> {
        let placed = self.place_word(row, col, word)?;
        for &c in &placed {
            let adjoining = word[(c - col) as usize];
            if row > 0 {
                self.above_queue.push(PendingCheck {
                    row: row - 1,
                    col: c,
                    adjoining,
                });
            }
            if row + 1 < SIZE {
                self.below_queue.push(PendingCheck {
                    row: row + 1,
                    col: c,
                    adjoining,
                });
            }
        }
        // A tile landing just past either end of this word would form a
        // perpendicular word longer than the maintainer can validate.
        let cap_slot = 1 - self.orient();
        self.zero_checks(row, col - 1, cap_slot);
        self.zero_checks(row, col + word.len() as i8, cap_slot);
        self.update_cross_checks(dawg, alphabet);
        self.words_played
            .push(word.iter().map(|&t| t & 0x7f).collect());
        Ok(placed.into_boxed_slice())
    }

    #[inline(always)]
    fn zero_checks(&mut self, row: i8, col: i8, slot: usize) {
        if on_board(row, col) {
            self.square_mut(row, col).cross_checks[slot] = 0;
        }
    }

    // Drains the pending queues. Empty squares accumulate the adjoining
    // letter's value into the active cross-sum and keep only the
    // letters whose two-letter perpendicular word is valid; occupied
    // squares instead hard-invalidate the squares capping the run, two
    // out on both sides, so nothing ever stacks a third deep.
    pub fn update_cross_checks(&mut self, dawg: &Dawg, alphabet: &Alphabet<'_>) {
        let o = self.orient();
        while let Some(pc) = self.above_queue.pop() {
            if self.square(pc.row, pc.col).tile != 0 {
                self.zero_checks(pc.row - 1, pc.col, o);
                self.zero_checks(pc.row + 2, pc.col, o);
            } else {
                let adj = pc.adjoining & 0x7f;
                let sq = self.square_mut(pc.row, pc.col);
                sq.cross_sums[o] += alphabet.score(pc.adjoining) as i16;
                sq.cross_checks[o] = prune_pairs(dawg, sq.cross_checks[o], |letter| [letter, adj]);
            }
        }
        while let Some(pc) = self.below_queue.pop() {
            if self.square(pc.row, pc.col).tile != 0 {
                self.zero_checks(pc.row - 2, pc.col, o);
                self.zero_checks(pc.row + 1, pc.col, o);
            } else {
                let adj = pc.adjoining & 0x7f;
                let sq = self.square_mut(pc.row, pc.col);
                sq.cross_sums[o] += alphabet.score(pc.adjoining) as i16;
                sq.cross_checks[o] = prune_pairs(dawg, sq.cross_checks[o], |letter| [adj, letter]);
            }
        }
    }

    // Rebuilds every square's bitsets and cross-sums from the tiles
    // alone. Used after reloading a board from a snapshot, where only
    // tile positions are persisted. Must be called in the natural
    // orientation so the slot indices line up.
    pub fn recompute_cross_checks(&mut self, dawg: &Dawg, alphabet: &Alphabet<'_>) {
        debug_assert!(!self.transposed);
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.square(row, col).tile != 0 {
                    let sq = self.square_mut(row, col);
                    sq.cross_checks = [0; 2];
                    sq.cross_sums = [0; 2];
                    continue;
                }
                let (checks0, sum0) = self.derive_square(dawg, alphabet, row, col, 1, 0);
                let (checks1, sum1) = self.derive_square(dawg, alphabet, row, col, 0, 1);
                let sq = self.square_mut(row, col);
                sq.cross_checks = [checks0, checks1];
                sq.cross_sums = [sum0, sum1];
            }
        }
    }

    // One orientation slot for one empty square: follow the occupied
    // runs on both sides along (dr,dc). No neighbors keeps the full
    // bitset; a single adjoining tile prunes by pair validity; any
    // longer combined run blocks the square outright.
    fn derive_square(
        &self,
        dawg: &Dawg,
        alphabet: &Alphabet<'_>,
        row: i8,
        col: i8,
        dr: i8,
        dc: i8,
    ) -> (u32, i16) {
        let mut before = 0;
        let mut sum = 0i16;
        let mut r = row - dr;
        let mut c = col - dc;
        while self.letter_at(r, c) != 0 {
            sum += alphabet.score(self.letter_at(r, c)) as i16;
            before += 1;
            r -= dr;
            c -= dc;
        }
        let mut after = 0;
        r = row + dr;
        c = col + dc;
        while self.letter_at(r, c) != 0 {
            sum += alphabet.score(self.letter_at(r, c)) as i16;
            after += 1;
            r += dr;
            c += dc;
        }
        let checks = match before + after {
            0 => FULL_CROSS_BITS,
            1 => {
                if before == 1 {
                    let adj = self.letter_at(row - dr, col - dc) & 0x7f;
                    prune_pairs(dawg, FULL_CROSS_BITS, |letter| [adj, letter])
                } else {
                    let adj = self.letter_at(row + dr, col + dc) & 0x7f;
                    prune_pairs(dawg, FULL_CROSS_BITS, |letter| [letter, adj])
                }
            }
            _ => 0,
        };
        (checks, sum)
    }

    pub fn contains_word(&self, word: &[u8]) -> bool {
        self.words_played
            .iter()
            .any(|w| w.len() == word.len() && w.iter().zip(word).all(|(&a, &b)| a == b & 0x7f))
    }

    pub fn words_played(&self) -> &[Box<[u8]>] {
        &self.words_played
    }

    // Snapshot restore records words without replaying the moves.
    pub fn push_word(&mut self, word: &[u8]) {
        self.words_played.push(word.iter().map(|&t| t & 0x7f).collect());
    }
}

fn prune_pairs(dawg: &Dawg, bits: u32, pair: impl Fn(u8) -> [u8; 2]) -> u32 {
    let mut kept = 0u32;
    let mut remaining = bits;
    while remaining != 0 {
        let letter = remaining.trailing_zeros() as u8;
        remaining &= remaining - 1;
        if dawg.is_word(&pair(letter)) {
            kept |= 1 << letter;
        }
    }
    kept
}
