// Copyright (C) 2026 Andy Kurnia.

// Tile numbering: 0 is the blank, 1..=26 are A..Z. On the board, the
// high bit (0x80) marks a blank standing in for that letter.

pub struct Tile<'a> {
    label: &'a str,
    blank_label: &'a str,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile<'a>],
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn get(&self, idx: u8) -> &'a Tile<'a> {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    #[inline(always)]
    pub fn from_board(&self, idx: u8) -> Option<&'a str> {
        let c = idx & 0x7f;
        if c == 0 || c >= self.len() {
            None
        } else if idx & 0x80 == 0 {
            Some(self.get(c).label)
        } else {
            Some(self.get(c).blank_label)
        }
    }

    #[inline(always)]
    pub fn from_rack(&self, idx: u8) -> Option<&'a str> {
        if idx >= self.len() {
            None
        } else {
            Some(self.get(idx).label)
        }
    }

    // A blank scores as the blank no matter which letter it shows.
    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        if idx & 0x80 == 0 {
            self.get(idx).score
        } else {
            self.get(0).score
        }
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        rack.iter()
            .filter_map(|&tile| self.from_rack(tile))
            .collect()
    }
}

// 'A'..='Z' to 1..=26, '?' to the blank.
pub fn tile_from_char(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A' + 1),
        '?' => Some(0),
        _ => None,
    }
}

// Word-list entries are uppercase A-Z only; anything else rejects the
// whole entry (the caller skips it rather than aborting the build).
pub fn parse_word(s: &str) -> Option<Vec<u8>> {
    if s.is_empty() {
        return None;
    }
    let mut v = Vec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'A'..='Z' => v.push(c as u8 - b'A' + 1),
            _ => return None,
        }
    }
    Some(v)
}

pub fn parse_rack(s: &str) -> Option<Vec<u8>> {
    s.chars().map(tile_from_char).collect()
}

macro_rules! tile {
    ($label:expr, $blank_label:expr, $freq:expr, $score:expr) => {
        Tile {
            label: $label,
            blank_label: $blank_label,
            freq: $freq,
            score: $score,
        }
    };
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        tile!("?", "?", 2, 0),
        tile!("A", "a", 9, 1),
        tile!("B", "b", 2, 3),
        tile!("C", "c", 2, 3),
        tile!("D", "d", 4, 2),
        tile!("E", "e", 12, 1),
        tile!("F", "f", 2, 4),
        tile!("G", "g", 3, 2),
        tile!("H", "h", 2, 4),
        tile!("I", "i", 9, 1),
        tile!("J", "j", 1, 8),
        tile!("K", "k", 1, 5),
        tile!("L", "l", 4, 1),
        tile!("M", "m", 2, 3),
        tile!("N", "n", 6, 1),
        tile!("O", "o", 8, 1),
        tile!("P", "p", 2, 3),
        tile!("Q", "q", 1, 10),
        tile!("R", "r", 6, 1),
        tile!("S", "s", 4, 1),
        tile!("T", "t", 6, 1),
        tile!("U", "u", 4, 1),
        tile!("V", "v", 2, 4),
        tile!("W", "w", 2, 4),
        tile!("X", "x", 1, 8),
        tile!("Y", "y", 2, 4),
        tile!("Z", "z", 1, 10),
    ],
});
