// Copyright (C) 2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// A placement landed on a square that already holds a different tile.
// The board rolls back every tile placed in the same batch before
// returning this, so the caller sees an unchanged board.
pub struct OccupiedConflict {
    pub row: i8,
    pub col: i8,
    pub existing: u8,
    pub placed: u8,
}

impl std::fmt::Display for OccupiedConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "square ({},{}) holds tile {} but tile {} was placed",
            self.row, self.col, self.existing, self.placed
        )
    }
}

impl std::fmt::Debug for OccupiedConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for OccupiedConflict {}
