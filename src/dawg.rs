// Copyright (C) 2026 Andy Kurnia.

use super::alphabet;

// Prefix automaton over A-Z. Nodes live in one flat arena and refer to
// children by index; the root is node 0 and can never be anyone's
// child, so 0 doubles as "no child". Built once, read-only afterwards,
// safe to share across concurrent searches.

const NO_CHILD: u32 = 0;

#[derive(Clone)]
struct Node {
    children: [u32; 26],
    accepts: bool,
}

impl Node {
    fn new() -> Node {
        Node {
            children: [NO_CHILD; 26],
            accepts: false,
        }
    }
}

pub struct Dawg(Vec<Node>);

impl Dawg {
    // Entries that fail to parse (non-letter characters, empty lines)
    // are skipped per entry. An empty input yields an empty automaton.
    pub fn from_words<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Dawg {
        let mut dawg = Dawg(vec![Node::new()]);
        for s in words {
            if let Some(word) = alphabet::parse_word(s) {
                dawg.insert(&word);
            }
        }
        dawg
    }

    fn insert(&mut self, word: &[u8]) {
        let mut p = 0u32;
        for &tile in word {
            let slot = (tile - 1) as usize;
            let next = self.0[p as usize].children[slot];
            p = if next != NO_CHILD {
                next
            } else {
                let q = self.0.len() as u32;
                self.0.push(Node::new());
                self.0[p as usize].children[slot] = q;
                q
            };
        }
        self.0[p as usize].accepts = true;
    }

    // One step down. Accepts board tiles directly (blank flag masked);
    // returns 0 when there is no matching child.
    #[inline(always)]
    pub fn seek(&self, p: u32, tile: u8) -> u32 {
        self.0[p as usize].children[((tile & 0x7f) - 1) as usize]
    }

    #[inline(always)]
    pub fn accepts(&self, p: u32) -> bool {
        self.0[p as usize].accepts
    }

    fn walk(&self, word: &[u8]) -> u32 {
        let mut p = 0u32;
        for &tile in word {
            p = self.seek(p, tile);
            if p == NO_CHILD {
                return NO_CHILD;
            }
        }
        p
    }

    pub fn is_prefix(&self, word: &[u8]) -> bool {
        word.is_empty() || self.walk(word) != NO_CHILD
    }

    pub fn is_word(&self, word: &[u8]) -> bool {
        let p = self.walk(word);
        p != NO_CHILD && self.accepts(p)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::parse_word;

    fn build(words: &[&str]) -> Dawg {
        Dawg::from_words(words.iter().copied())
    }

    #[test]
    fn words_and_their_prefixes() {
        let dawg = build(&["CAT", "CATS", "AT"]);
        for w in ["CAT", "CATS", "AT"] {
            let word = parse_word(w).unwrap();
            assert!(dawg.is_word(&word), "{w} should be a word");
            for n in 1..=word.len() {
                assert!(dawg.is_prefix(&word[..n]), "{w}[..{n}] should be a prefix");
            }
        }
    }

    #[test]
    fn non_words() {
        let dawg = build(&["CAT", "CATS", "AT"]);
        assert!(!dawg.is_word(&parse_word("C").unwrap()));
        assert!(!dawg.is_word(&parse_word("CA").unwrap()));
        assert!(!dawg.is_word(&parse_word("A").unwrap()));
        assert!(!dawg.is_word(&parse_word("DOG").unwrap()));
        assert!(!dawg.is_prefix(&parse_word("DOG").unwrap()));
        assert!(!dawg.is_prefix(&parse_word("CATSS").unwrap()));
    }

    #[test]
    fn empty_input_builds_empty_automaton() {
        let dawg = build(&[]);
        assert!(dawg.is_empty());
        assert!(!dawg.is_word(&parse_word("CAT").unwrap()));
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let dawg = build(&["CAT", "CAT'S", "", "dog", "AT"]);
        assert!(dawg.is_word(&parse_word("CAT").unwrap()));
        assert!(dawg.is_word(&parse_word("AT").unwrap()));
        assert!(!dawg.is_word(&parse_word("CATS").unwrap()));
        assert!(!dawg.is_word(&parse_word("DOG").unwrap()));
    }

    #[test]
    fn seek_masks_blank_flag() {
        let dawg = build(&["AT"]);
        let p = dawg.seek(0, 1 | 0x80);
        assert_ne!(p, 0);
        assert!(dawg.accepts(dawg.seek(p, 20)));
    }
}
