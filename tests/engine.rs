// Copyright (C) 2026 Andy Kurnia.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tilebot::{
    alphabet::{parse_rack, parse_word, ENGLISH_ALPHABET},
    board_layout::COMMON_BOARD_LAYOUT,
    dawg::Dawg,
    game_state::GameState,
    snapshot,
};

const WORDS: &[&str] = &[
    "AA", "AB", "AD", "AE", "AG", "AH", "AI", "AL", "AM", "AN", "AR", "AS", "AT", "AX", "AY",
    "BA", "BE", "BI", "BO", "BY", "DE", "DO", "ED", "EF", "EH", "EL", "EM", "EN", "ER", "ES",
    "ET", "EX", "FA", "GO", "HA", "HE", "HI", "HM", "HO", "ID", "IF", "IN", "IS", "IT", "JO",
    "KA", "LA", "LI", "LO", "MA", "ME", "MI", "MM", "MO", "MU", "MY", "NA", "NE", "NO", "NU",
    "OD", "OE", "OF", "OH", "OI", "OM", "ON", "OP", "OR", "OS", "OW", "OX", "OY", "PA", "PE",
    "PI", "QI", "RE", "SH", "SI", "SO", "TA", "TI", "TO", "UH", "UM", "UN", "UP", "US", "UT",
    "WE", "WO", "XI", "XU", "YA", "YE", "YO", "ZA", "ART", "ATE", "CAT", "CATS", "DOG", "DOGS",
    "EAT", "GAME", "GAMES", "PLAY", "PLAYS", "RAT", "RATE", "RATS", "STAR", "TAR", "TEA",
    "TILE", "TILES", "WORD", "WORDS",
];

fn engine_dict() -> Dawg {
    Dawg::from_words(WORDS.iter().copied())
}

fn play_out(seed: u64, max_turns: usize) -> (i16, i16, Vec<String>) {
    let dawg = engine_dict();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut game = GameState::new(&ENGLISH_ALPHABET, &dawg, &COMMON_BOARD_LAYOUT, &mut rng);
    let mut player = 0;
    let mut passes = 0;
    for _ in 0..max_turns {
        if passes >= 2 {
            break;
        }
        match game.best_move(player).unwrap() {
            Some(_) => passes = 0,
            None => passes += 1, // pass rather than exchange, to stay scripted
        }
        if game.players[player].rack.is_empty() {
            break;
        }
        player ^= 1;
    }
    let words = game
        .board
        .words_played()
        .iter()
        .map(|w| ENGLISH_ALPHABET.fmt_rack(w))
        .collect();
    (game.players[0].score, game.players[1].score, words)
}

#[test]
fn self_play_is_reproducible_per_seed() {
    let a = play_out(123, 40);
    let b = play_out(123, 40);
    assert_eq!(a, b);
    assert!(!a.2.is_empty(), "seeded game should produce at least one word");
    for word in &a.2 {
        assert!(
            WORDS.contains(&word.as_str()),
            "{word} is not in the lexicon"
        );
    }
}

#[test]
fn no_tiles_are_created_or_destroyed() {
    let dawg = engine_dict();
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    let mut game = GameState::new(&ENGLISH_ALPHABET, &dawg, &COMMON_BOARD_LAYOUT, &mut rng);
    let mut player = 0;
    for _ in 0..12 {
        if game.best_move(player).unwrap().is_none() {
            game.exchange(player, &game.players[player].rack.clone(), &mut rng)
                .unwrap();
        }
        player ^= 1;
    }
    let mut counts = vec![0u16; ENGLISH_ALPHABET.len() as usize];
    for row in 0..15 {
        for col in 0..15 {
            let tile = game.board.letter_at(row, col);
            if tile != 0 {
                counts[if tile & 0x80 != 0 { 0 } else { tile as usize }] += 1;
            }
        }
    }
    for p in &game.players {
        for &tile in &p.rack {
            counts[tile as usize] += 1;
        }
    }
    for (tile, &n) in game.bag.tally(ENGLISH_ALPHABET.len()).iter().enumerate() {
        counts[tile] += n as u16;
    }
    for (tile, &count) in counts.iter().enumerate() {
        assert_eq!(
            count,
            ENGLISH_ALPHABET.freq(tile as u8) as u16,
            "tile {tile} count drifted"
        );
    }
}

#[test]
fn scripted_opening_and_reply() {
    let dawg = engine_dict();
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let mut game = GameState::new(&ENGLISH_ALPHABET, &dawg, &COMMON_BOARD_LAYOUT, &mut rng);

    game.players[0].rack = parse_rack("CATJQVV").unwrap();
    let first = game.best_move(0).unwrap().unwrap();
    assert_eq!(&*first.place.word, &*parse_word("CAT").unwrap());
    assert!(!first.place.down);
    assert_eq!(first.place.score, 10);
    assert_eq!(game.players[0].score, 10);

    // the reply hooks onto the opening word
    game.players[1].rack = parse_rack("SVWWFFY").unwrap();
    let reply = game.best_move(1).unwrap().unwrap();
    assert!(reply.place.score > 0);
    assert_eq!(game.players[1].score, reply.place.score);
    assert!(game.board.words_played().len() >= 2);
}

#[test]
fn snapshot_restore_agrees_on_the_next_move() {
    let dawg = engine_dict();
    let mut rng = ChaCha20Rng::seed_from_u64(31);
    let mut game = GameState::new(&ENGLISH_ALPHABET, &dawg, &COMMON_BOARD_LAYOUT, &mut rng);
    let mut player = 0;
    for _ in 0..6 {
        game.best_move(player).unwrap();
        player ^= 1;
    }

    let snap = snapshot::snapshot(&game);
    let json = serde_json::to_string(&snap).unwrap();
    let decoded: snapshot::GameSnapshot = serde_json::from_str(&json).unwrap();
    let mut restored = snapshot::restore(
        &ENGLISH_ALPHABET,
        &dawg,
        &COMMON_BOARD_LAYOUT,
        &decoded,
        &mut ChaCha20Rng::seed_from_u64(99),
    )
    .unwrap();

    // the search is a pure function of board and rack, so both games
    // must pick the same next placement
    let original_next = game.best_move(player).unwrap();
    let restored_next = restored.best_move(player).unwrap();
    match (original_next, restored_next) {
        (Some(a), Some(b)) => assert_eq!(a.place, b.place),
        (None, None) => {}
        (a, b) => panic!(
            "one side moved and the other did not: {:?} vs {:?}",
            a.map(|o| o.place),
            b.map(|o| o.place)
        ),
    }
    assert_eq!(game.players[player].score, restored.players[player].score);
}
