// Copyright (C) 2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board;
pub mod board_layout;
pub mod dawg;
pub mod display;
pub mod game_state;
pub mod movegen;
pub mod play_scorer;
pub mod snapshot;
