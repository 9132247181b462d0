use std::fmt::{self, Display, Formatter};

use crate::{color::Color, coord::Coord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}
impl CastleSide {
    pub const ALL: [Self; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    pub fn rook_origin_x(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }
    pub fn king_destination_x(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }
    /// The square the king crosses, which is also where the rook lands.
    pub fn rook_destination_x(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }
    pub fn from_rook_origin_x(x: u8) -> Option<Self> {
        match x {
            7 => Some(CastleSide::Kingside),
            0 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}
impl Display for CastleSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::Kingside => write!(f, "kingside")?,
            CastleSide::Queenside => write!(f, "queenside")?,
        }
        Ok(())
    }
}

/// Castling rights for both players, one bit per rook origin file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRight {
    white: u8,
    black: u8,
}
impl CastlingRight {
    pub fn none() -> Self {
        CastlingRight { white: 0, black: 0 }
    }
    pub fn all() -> Self {
        let mut castling_right = CastlingRight::none();
        for color in Color::ALL {
            for side in CastleSide::ALL {
                castling_right.add(color, side);
            }
        }
        castling_right
    }
    fn byte(self, color: Color) -> u8 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
    fn byte_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
    pub fn get(self, color: Color, side: CastleSide) -> bool {
        (self.byte(color) >> side.rook_origin_x()) & 0b_1 == 1
    }
    pub fn add(&mut self, color: Color, side: CastleSide) {
        *self.byte_mut(color) |= 0b_1 << side.rook_origin_x();
    }
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        *self.byte_mut(color) &= !(0b_1 << side.rook_origin_x());
    }
    pub fn clear(&mut self, color: Color) {
        *self.byte_mut(color) = 0;
    }
    /// Drops the right tied to a rook that leaves, or is captured on, `position`.
    pub fn remove_for_rook_at(&mut self, color: Color, position: Coord) {
        if position.y() != color.home_rank() {
            return;
        }
        if let Some(side) = CastleSide::from_rook_origin_x(position.x()) {
            self.remove(color, side);
        }
    }
}
impl Default for CastlingRight {
    fn default() -> Self {
        CastlingRight::all()
    }
}
impl Display for CastlingRight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut written = false;
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if self.get(color, side) {
                    let c = match side {
                        CastleSide::Kingside => 'k',
                        CastleSide::Queenside => 'q',
                    };
                    let c = match color {
                        Color::White => c.to_ascii_uppercase(),
                        Color::Black => c,
                    };
                    written = true;
                    write!(f, "{c}")?;
                }
            }
        }
        if !written {
            write!(f, "-")?;
        }
        Ok(())
    }
}
