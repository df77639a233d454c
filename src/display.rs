// Copyright (C) 2026 Andy Kurnia.

use super::{alphabet, board};

#[inline(always)]
pub fn empty_label(board: &board::Board, row: i8, col: i8) -> &'static str {
    if row == board.star_row() && col == board.star_col() {
        return "*";
    }
    let premium = board.square(row, col).premium;
    match premium.word_multiplier {
        3 => "=",
        2 => "-",
        _ => match premium.letter_multiplier {
            3 => "\"",
            2 => "\'",
            _ => " ",
        },
    }
}

#[inline(always)]
pub fn board_label<'a>(
    alphabet: &'a alphabet::Alphabet<'a>,
    board: &board::Board,
    row: i8,
    col: i8,
) -> &'a str {
    alphabet
        .from_board(board.letter_at(row, col))
        .unwrap_or_else(|| empty_label(board, row, col))
}

pub fn print_board<'a>(alphabet: &'a alphabet::Alphabet<'a>, board: &board::Board) {
    print!("  ");
    for c in 0..board::SIZE {
        print!(" {}", ((c as u8) + 0x61) as char);
    }
    println!();
    print!("  +");
    for _ in 1..board::SIZE {
        print!("--");
    }
    println!("-+");
    for r in 0..board::SIZE {
        print!("{:2}|", r + 1);
        for c in 0..board::SIZE {
            if c > 0 {
                print!(" ")
            }
            print!("{}", board_label(alphabet, board, r, c));
        }
        println!("|{}", r + 1);
    }
    print!("  +");
    for _ in 1..board::SIZE {
        print!("--");
    }
    println!("-+");
    print!("  ");
    for c in 0..board::SIZE {
        print!(" {}", ((c as u8) + 0x61) as char);
    }
    println!();
}
