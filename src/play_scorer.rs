// Copyright (C) 2026 Andy Kurnia.

use super::{alphabet::Alphabet, board::Board, game_state::RACK_SIZE};

// Scores a word laid along the current orientation's row, before it is
// committed. Squares the word would newly cover contribute their letter
// value through the square's multipliers plus any perpendicular
// cross-sum already accumulated there; squares holding earlier tiles
// contribute the plain value (their premiums were spent when played).
// Cross-sums are added outside the word multiplier. Using the whole
// rack earns the 50-point bonus.
pub fn score_place(
    board: &Board,
    alphabet: &Alphabet<'_>,
    row: i8,
    col: i8,
    word: &[u8],
) -> i16 {
    let o = board.orient();
    let mut main = 0i16;
    let mut cross = 0i16;
    let mut word_multiplier = 1i16;
    let mut num_played = 0;
    for (i, &tile) in word.iter().enumerate() {
        let sq = board.square(row, col + i as i8);
        if sq.tile == 0 {
            num_played += 1;
            main += alphabet.score(tile) as i16 * sq.premium.letter_multiplier as i16;
            word_multiplier *= sq.premium.word_multiplier as i16;
            cross += sq.cross_sums[o];
        } else {
            main += alphabet.score(sq.tile) as i16;
        }
    }
    let mut score = main * word_multiplier + cross;
    if num_played >= RACK_SIZE {
        score += 50;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{parse_word, ENGLISH_ALPHABET};
    use crate::board_layout::COMMON_BOARD_LAYOUT;
    use crate::dawg::Dawg;

    fn dict(words: &[&str]) -> Dawg {
        Dawg::from_words(words.iter().copied())
    }

    #[test]
    fn first_word_through_the_star_doubles() {
        let board = Board::new(&COMMON_BOARD_LAYOUT);
        let word = parse_word("CATS").unwrap();
        // C3 A1 T1 S1 on plain squares, star doubles the word
        assert_eq!(score_place(&board, &ENGLISH_ALPHABET, 7, 7, &word), 12);
    }

    #[test]
    fn existing_tiles_score_plain() {
        let dawg = dict(&["CAT", "CATS"]);
        let mut board = Board::new(&COMMON_BOARD_LAYOUT);
        board
            .commit_word(&dawg, &ENGLISH_ALPHABET, 8, 8, &parse_word("CAT").unwrap())
            .unwrap();
        // appending S re-walks CAT plain: 3+1+1+1, no multipliers left
        let word = parse_word("CATS").unwrap();
        assert_eq!(score_place(&board, &ENGLISH_ALPHABET, 8, 8, &word), 6);
    }

    #[test]
    fn premiums_only_fire_on_new_tiles() {
        let board = Board::new(&COMMON_BOARD_LAYOUT);
        let word = parse_word("CAT").unwrap();
        // (0,3) is double-letter: landing the A there gives 3 + 2 + 1
        assert_eq!(score_place(&board, &ENGLISH_ALPHABET, 0, 2, &word), 6);
        // shifted left, the T takes the double letter instead
        assert_eq!(score_place(&board, &ENGLISH_ALPHABET, 0, 1, &word), 6);
        // from the corner, (0,0) triples the whole word
        assert_eq!(score_place(&board, &ENGLISH_ALPHABET, 0, 0, &word), 15);
    }

    #[test]
    fn cross_sums_are_added_unmultiplied() {
        let dawg = dict(&["CAT", "AT", "TA"]);
        let mut board = Board::new(&COMMON_BOARD_LAYOUT);
        board
            .commit_word(&dawg, &ENGLISH_ALPHABET, 7, 6, &parse_word("CAT").unwrap())
            .unwrap();
        // a horizontal TA directly above the played AT closes two
        // vertical pairs, each worth its cross-sum of 1
        let word = parse_word("TA").unwrap();
        // T1 at (6,7) + A1 doubled on the (6,8) letter square, + 1 + 1
        assert_eq!(score_place(&board, &ENGLISH_ALPHABET, 6, 7, &word), 5);
    }

    #[test]
    fn full_rack_earns_the_bonus() {
        let board = Board::new(&COMMON_BOARD_LAYOUT);
        let word = parse_word("AAAAAAA").unwrap();
        // seven A's across the star: 7 doubled, plus 50
        assert_eq!(score_place(&board, &ENGLISH_ALPHABET, 7, 4, &word), 64);
        // six tiles is not a full rack
        let six = parse_word("AAAAAA").unwrap();
        assert_eq!(score_place(&board, &ENGLISH_ALPHABET, 7, 4, &six), 12);
    }

    #[test]
    fn blanks_carry_no_value() {
        let board = Board::new(&COMMON_BOARD_LAYOUT);
        // QI with the Q on a blank, through the star
        let word = [17 | 0x80, 9];
        assert_eq!(score_place(&board, &ENGLISH_ALPHABET, 7, 7, &word), 2);
    }
}
