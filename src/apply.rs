//! Board transitions for a validated [`MoveRecord`] and their exact inverse.

use log::debug;

use crate::{
    board::Board,
    coord::Coord,
    error::IllegalMove,
    legality::validate,
    movegen::{MoveContext, Special},
    piece::{Piece, PieceKind},
    record::MoveRecord,
};

/// What [`undo`] needs to put the board back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Undo {
    pub record: MoveRecord,
    pub captured: Option<(Coord, Piece)>,
}

/// Moves the piece and removes whatever it captures. Other squares are untouched.
fn relocate(board: &mut Board, record: MoveRecord) -> Undo {
    let captured = record
        .capture_at()
        .and_then(|position| board[position].take().map(|piece| (position, piece)));
    board[record.destination] = board[record.origin].take();
    Undo { record, captured }
}
fn pawn_move(board: &mut Board, record: MoveRecord) -> Undo {
    let undo = relocate(board, record);
    if let Some(promotion) = record.promotion {
        board[record.destination] = Some(Piece::new(record.color, promotion));
    }
    undo
}
fn king_move(board: &mut Board, record: MoveRecord) -> Undo {
    let undo = relocate(board, record);
    if let Some(Special::Castle(side)) = record.special {
        let rook_origin = record.origin.with_x(side.rook_origin_x());
        let rook_destination = record.origin.with_x(side.rook_destination_x());
        board[rook_destination] = board[rook_origin].take();
    }
    undo
}
/// Applies a `record` that already passed [`validate`] on this board.
pub(crate) fn apply_unchecked(board: &mut Board, record: MoveRecord) -> Undo {
    debug!("{} {} plays {record}", record.color, record.piece);
    match record.piece {
        PieceKind::Pawn => pawn_move(board, record),
        PieceKind::King => king_move(board, record),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            relocate(board, record)
        }
    }
}
/// Validates `record` against `board` and `context`, then applies it. A rejected record
/// leaves the board untouched.
pub fn apply(
    board: &mut Board,
    context: &MoveContext,
    record: MoveRecord,
) -> Result<Undo, IllegalMove> {
    validate(board, context, &record)?;
    Ok(apply_unchecked(board, record))
}
pub fn undo(board: &mut Board, undo: &Undo) {
    let record = undo.record;
    debug!("undo {record}");
    if let Some(Special::Castle(side)) = record.special {
        let rook_origin = record.origin.with_x(side.rook_origin_x());
        let rook_destination = record.origin.with_x(side.rook_destination_x());
        board[rook_origin] = board[rook_destination].take();
    }
    board[record.destination] = None;
    board[record.origin] = Some(Piece::new(record.color, record.piece));
    if let Some((position, piece)) = undo.captured {
        board[position] = Some(piece);
    }
}
