use thiserror::Error;

use crate::{
    castling_right::CastleSide,
    color::Color,
    coord::{Coord, ParseCoordError},
    piece::{ParsePieceKindError, Piece, PieceKind},
};

/// The selected origin does not hold the piece the selector names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("expected {expected} on {origin}, found {}", describe(.found))]
pub struct InvalidSelection {
    pub origin: Coord,
    pub expected: Piece,
    pub found: Option<Piece>,
}

fn describe(found: &Option<Piece>) -> String {
    found.map_or_else(|| "nothing".to_string(), |piece| piece.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IllegalMove {
    #[error("it is not {0}'s turn")]
    NotYourTurn(Color),
    #[error("there is no piece on {0}")]
    NoPiece(Coord),
    #[error(transparent)]
    WrongPiece(#[from] InvalidSelection),
    #[error("{origin}{destination} is not a move of the piece on {origin}")]
    NotACandidate { origin: Coord, destination: Coord },
    #[error("moving to {0} requires a promotion piece")]
    MissingPromotion(Coord),
    #[error("moving to {0} does not promote")]
    UnexpectedPromotion(Coord),
    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),
    #[error("move claims to capture {claimed:?} but would capture {actual:?}")]
    CaptureMismatch {
        claimed: Option<PieceKind>,
        actual: Option<PieceKind>,
    },
    #[error("cannot castle {0} out of or through check")]
    CastlingThroughCheck(CastleSide),
    #[error("move leaves the king in check")]
    LeavesKingInCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseMoveError {
    #[error("provided string contains invalid character")]
    InvalidChar,
    #[error(transparent)]
    ParseCoordError(#[from] ParseCoordError),
    #[error(transparent)]
    ParsePieceKindError(#[from] ParsePieceKindError),
}
