// Copyright (C) 2026 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(
            (0..alphabet.len())
                .map(|tile| alphabet.freq(tile) as usize)
                .sum(),
        );
        for tile in 0..alphabet.len() {
            for _ in 0..alphabet.freq(tile) {
                bag.push(tile);
            }
        }
        Bag(bag)
    }

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Draws until the rack reaches rack_size or the bag runs dry, and
    // reports what was drawn.
    pub fn replenish(&mut self, rack: &mut Vec<u8>, rack_size: usize) -> Box<[u8]> {
        let n = std::cmp::min(rack_size.saturating_sub(rack.len()), self.0.len());
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(tile) = self.pop() {
                rack.push(tile);
                drawn.push(tile);
            }
        }
        drawn.into_boxed_slice()
    }

    // Each returned tile lands at a random position, so the existing
    // draw order stays unbiased.
    pub fn put_back(&mut self, rng: &mut dyn RngCore, tiles: &[u8]) {
        for &tile in tiles {
            self.0.insert(rng.random_range(0..=self.0.len()), tile);
        }
    }

    pub fn tally(&self, alphabet_len: u8) -> Vec<u8> {
        let mut counts = vec![0u8; alphabet_len as usize];
        for &tile in &self.0 {
            counts[tile as usize] += 1;
        }
        counts
    }

    // Order within the bag is meaningless until the next shuffle.
    pub fn from_tally(tally: &[u8]) -> Bag {
        let mut bag = Vec::with_capacity(tally.iter().map(|&n| n as usize).sum());
        for (tile, &n) in tally.iter().enumerate() {
            for _ in 0..n {
                bag.push(tile as u8);
            }
        }
        Bag(bag)
    }
}

impl Clone for Bag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}
