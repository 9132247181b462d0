use std::{
    fmt::{self, Display, Formatter},
    ops::{Index, IndexMut},
};

use crate::{
    color::Color,
    coord::Coord,
    piece::{Piece, PieceKind},
};

/// The 8×8 grid. The board holds placement only. Side to move, castling rights and
/// en passant state belong to [`Game`](crate::game::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    board: [[Option<Piece>; 8]; 8],
}
impl Board {
    pub fn empty() -> Self {
        Board::default()
    }
    pub fn starting_position() -> Self {
        let back_rank = |color: Color| {
            PieceKind::STARTING_CONFIGURATION.map(|kind| Some(Piece::new(color, kind)))
        };
        let pawns = |color: Color| [Some(Piece::new(color, PieceKind::Pawn)); 8];
        Board {
            board: [
                back_rank(Color::Black),
                pawns(Color::Black),
                [None; 8],
                [None; 8],
                [None; 8],
                [None; 8],
                pawns(Color::White),
                back_rank(Color::White),
            ],
        }
    }
    /// Builds a board from `(square, piece)` pairs. Later pairs overwrite earlier ones.
    pub fn from_pieces(pieces: impl IntoIterator<Item = (Coord, Piece)>) -> Self {
        let mut board = Board::empty();
        for (position, piece) in pieces {
            board[position] = Some(piece);
        }
        board
    }
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|position| self[position].map(|piece| (position, piece)))
    }
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
    pub fn king_of(&self, color: Color) -> Option<Coord> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(position, _)| position)
    }
    pub fn is_empty_at(&self, position: Coord) -> bool {
        self[position].is_none()
    }
    /// The occupant of `position` when it belongs to the other side.
    pub fn enemy_at(&self, position: Coord, color: Color) -> Option<Piece> {
        self[position].filter(|piece| piece.color != color)
    }
}
impl Index<Coord> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.board[index.y() as usize][index.x() as usize]
    }
}
impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        &mut self.board[index.y() as usize][index.x() as usize]
    }
}
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            for cell in row {
                write!(f, "{}", cell.map_or('.', Piece::symbol))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
