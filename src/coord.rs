use std::{
    fmt::{self, Display, Formatter},
    ops::Mul,
    str::FromStr,
};

use thiserror::Error;

use crate::color::Color;

pub const BOARD_SIZE: u8 = 8;

/// Returns true iff `(x, y)` names a square of the board.
pub fn is_inside(x: i32, y: i32) -> bool {
    (0..i32::from(BOARD_SIZE)).contains(&x) && (0..i32::from(BOARD_SIZE)).contains(&y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseCoordError {
    #[error("expected 2 characters, found none instead")]
    Empty,
    #[error("expected 2 characters, found 1 instead")]
    YNotProvided,
    #[error("`{0}` is not a letter from a to h")]
    InvalidX(char),
    #[error("`{0}` is not a number from 1 to 8")]
    InvalidY(char),
    #[error("unexpected `{0}`, only 2 characters are expected")]
    UnexpectedSymbol(char),
}

/// A square of the board. Row 0 is rank 8, column 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    // row first so that the derived ordering is row-major
    y: u8,
    x: u8,
}
impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE);
        debug_assert!(y < BOARD_SIZE);
        Coord { y, x }
    }
    pub fn new_checked(x: i32, y: i32) -> Option<Self> {
        if is_inside(x, y) {
            Some(Coord::new(x.try_into().ok()?, y.try_into().ok()?))
        } else {
            None
        }
    }
    /// Compile-time lookup used by [`coord!`](crate::coord!). Panics on anything that is not
    /// a square name.
    pub const fn from_notation(notation: &str) -> Self {
        let bytes = notation.as_bytes();
        assert!(bytes.len() == 2, "a square is written with 2 characters");
        let x = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            _ => panic!("file must be a letter from a to h"),
        };
        let y = match bytes[1] {
            b @ b'1'..=b'8' => b'8' - b,
            _ => panic!("rank must be a number from 1 to 8"),
        };
        Coord::new(x, y)
    }
    pub fn from_chars(x: char, y: char) -> Result<Self, ParseCoordError> {
        let x = match x {
            'a'..='h' => x as u8 - b'a',
            _ => return Err(ParseCoordError::InvalidX(x)),
        };
        let y = match y {
            '1'..='8' => b'8' - y as u8,
            _ => return Err(ParseCoordError::InvalidY(y)),
        };
        Ok(Coord::new(x, y))
    }
    pub fn x(self) -> u8 {
        self.x
    }
    pub fn y(self) -> u8 {
        self.y
    }
    /// Every square in row-major order, rank 8 first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Coord::new_checked(
            i32::from(self.x) + i32::from(movement.x),
            i32::from(self.y) + i32::from(movement.y),
        )
    }
    /// Squares along `direction`, starting one step away and ending at the edge of the board.
    pub fn ray(self, direction: Vector) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        (1..).map_while(move |distance| self.move_by(direction * distance))
    }
    pub fn with_x(self, x: u8) -> Self {
        Coord::new(x, self.y)
    }
    pub fn square_color(self) -> Color {
        if (self.x + self.y) % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let x = (self.x + b'a') as char;
        let y = BOARD_SIZE - self.y;
        write!(f, "{x}{y}")?;
        Ok(())
    }
}
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut characters = s.chars();
        let x = characters.next().ok_or(ParseCoordError::Empty)?;
        let y = characters.next().ok_or(ParseCoordError::YNotProvided)?;
        let coord = Coord::from_chars(x, y)?;
        if let Some(c) = characters.next() {
            return Err(ParseCoordError::UnexpectedSymbol(c));
        }
        Ok(coord)
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i8,
    pub y: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { x: 0, y: 0 };

    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector { x: -1, y: -2 },
        Vector { x: 1, y: -2 },
        Vector { x: -1, y: 2 },
        Vector { x: 1, y: 2 },
        Vector { x: -2, y: -1 },
        Vector { x: 2, y: -1 },
        Vector { x: -2, y: 1 },
        Vector { x: 2, y: 1 },
    ];
    pub const KING_MOVES: [Self; 8] = [
        Vector { x: -1, y: -1 },
        Vector { x: 0, y: -1 },
        Vector { x: 1, y: -1 },
        Vector { x: -1, y: 0 },
        Vector { x: 1, y: 0 },
        Vector { x: -1, y: 1 },
        Vector { x: 0, y: 1 },
        Vector { x: 1, y: 1 },
    ];
    pub const ROOK_DIRECTIONS: [Self; 4] = [
        Vector { x: -1, y: 0 },
        Vector { x: 1, y: 0 },
        Vector { x: 0, y: -1 },
        Vector { x: 0, y: 1 },
    ];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Vector { x: -1, y: -1 },
        Vector { x: 1, y: -1 },
        Vector { x: -1, y: 1 },
        Vector { x: 1, y: 1 },
    ];
    pub const QUEEN_DIRECTIONS: [Self; 8] = Vector::KING_MOVES;

    pub fn pawn_single_move(color: Color) -> Self {
        Vector {
            x: 0,
            y: color.forward_sign(),
        }
    }
    pub fn pawn_attacks(color: Color) -> [Self; 2] {
        [-1, 1].map(|x| Vector {
            x,
            y: color.forward_sign(),
        })
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
