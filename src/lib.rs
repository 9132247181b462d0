#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod apply;
pub mod board;
pub mod board_display;
pub mod castling_right;
pub mod color;
pub mod coord;
pub mod error;
pub mod game;
pub mod legality;
pub mod movegen;
pub mod piece;
pub mod record;

#[cfg(test)]
mod fuzz;

/// Square from its algebraic name, resolved at compile time: `coord!("e4")`.
#[macro_export]
macro_rules! coord {
    ($square:literal) => {{
        const COORD: $crate::coord::Coord = $crate::coord::Coord::from_notation($square);
        COORD
    }};
}
