use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{
    board::Board,
    color::Color,
    coord::Coord,
    error::ParseMoveError,
    movegen::{CandidateMove, PieceSelector, Special},
    piece::PieceKind,
};

/// A move chosen from the generated candidates, ready to be validated and applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub color: Color,
    pub origin: Coord,
    pub destination: Coord,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub special: Option<Special>,
}
impl MoveRecord {
    pub fn from_candidate(
        board: &Board,
        selector: PieceSelector,
        candidate: &CandidateMove,
        promotion: Option<PieceKind>,
    ) -> Self {
        MoveRecord {
            color: selector.color,
            origin: selector.origin,
            destination: candidate.destination,
            piece: selector.kind,
            captured: candidate
                .capture_at
                .and_then(|position| board[position])
                .map(|piece| piece.kind),
            promotion,
            special: candidate.special,
        }
    }
    /// Where the captured piece stands, if anything is captured.
    pub fn capture_at(self) -> Option<Coord> {
        match (self.special, self.captured) {
            (Some(Special::EnPassant), _) => Some(Coord::new(self.destination.x(), self.origin.y())),
            (_, Some(_)) => Some(self.destination),
            (_, None) => None,
        }
    }
    pub fn squares(self) -> MoveSquares {
        MoveSquares {
            origin: self.origin,
            destination: self.destination,
            promotion: self.promotion,
        }
    }
}
impl Display for MoveRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.squares())?;
        Ok(())
    }
}

/// A move typed as two squares and an optional promotion symbol, such as `e7e8q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveSquares {
    pub origin: Coord,
    pub destination: Coord,
    pub promotion: Option<PieceKind>,
}
impl Display for MoveSquares {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.lowercase())?;
        }
        Ok(())
    }
}
impl FromStr for MoveSquares {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let origin = s.get(0..2).ok_or(ParseMoveError::InvalidChar)?.parse()?;
        let destination = s.get(2..4).ok_or(ParseMoveError::InvalidChar)?.parse()?;
        let rest = s.get(4..).ok_or(ParseMoveError::InvalidChar)?;
        let promotion = if rest.is_empty() {
            None
        } else {
            Some(rest.parse()?)
        };
        Ok(MoveSquares {
            origin,
            destination,
            promotion,
        })
    }
}
