use log::debug;

use crate::{
    apply::apply_unchecked,
    board::Board,
    color::Color,
    coord::{Coord, Vector},
    error::IllegalMove,
    movegen::{CandidateMove, MoveContext, PieceSelector, Special, generate, moves_by_piece_in},
    piece::PieceKind,
    record::MoveRecord,
};

fn square_contains(board: &Board, position: Coord, color: Color, pieces: &[PieceKind]) -> bool {
    board[position].is_some_and(|piece| piece.color == color && pieces.contains(&piece.kind))
}
fn ray_contains(
    board: &Board,
    position: Coord,
    direction: Vector,
    color: Color,
    pieces: &[PieceKind],
) -> bool {
    position
        .ray(direction)
        .find_map(|position| board[position])
        .is_some_and(|piece| piece.color == color && pieces.contains(&piece.kind))
}
/// Whether any piece of `color` attacks `position`.
pub fn is_attacked_by(board: &Board, position: Coord, color: Color) -> bool {
    let steps = |moves: &[Vector], kind: PieceKind| {
        moves
            .iter()
            .filter_map(|movement| position.move_by(*movement))
            .any(|position| square_contains(board, position, color, &[kind]))
    };
    // a pawn of `color` attacks from where an enemy pawn on `position` would capture
    steps(&Vector::pawn_attacks(!color), PieceKind::Pawn)
        || steps(&Vector::KNIGHT_MOVES, PieceKind::Knight)
        || steps(&Vector::KING_MOVES, PieceKind::King)
        || Vector::BISHOP_DIRECTIONS.iter().any(|direction| {
            ray_contains(
                board,
                position,
                *direction,
                color,
                &[PieceKind::Bishop, PieceKind::Queen],
            )
        })
        || Vector::ROOK_DIRECTIONS.iter().any(|direction| {
            ray_contains(
                board,
                position,
                *direction,
                color,
                &[PieceKind::Rook, PieceKind::Queen],
            )
        })
}
/// A side without a king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_of(color)
        .is_some_and(|king| is_attacked_by(board, king, !color))
}
/// Checks that need the position after the move: castling through check and self-check.
fn check_king_safety(
    board: &Board,
    record: MoveRecord,
    candidate: &CandidateMove,
) -> Result<(), IllegalMove> {
    if let Some(Special::Castle(side)) = candidate.special {
        let crossed = record.origin.with_x(side.rook_destination_x());
        if is_attacked_by(board, record.origin, !record.color)
            || is_attacked_by(board, crossed, !record.color)
        {
            return Err(IllegalMove::CastlingThroughCheck(side));
        }
    }
    let mut scratch = *board;
    apply_unchecked(&mut scratch, record);
    if is_in_check(&scratch, record.color) {
        return Err(IllegalMove::LeavesKingInCheck);
    }
    Ok(())
}
/// Verifies that `record` is a legal move on `board`.
pub fn validate(
    board: &Board,
    context: &MoveContext,
    record: &MoveRecord,
) -> Result<(), IllegalMove> {
    if board.is_empty_at(record.origin) {
        return Err(IllegalMove::NoPiece(record.origin));
    }
    let selector = PieceSelector::new(record.color, record.piece, record.origin);
    let candidate = moves_by_piece_in(board, selector, context)?
        .into_iter()
        .find(|candidate| {
            candidate.destination == record.destination && candidate.special == record.special
        })
        .ok_or(IllegalMove::NotACandidate {
            origin: record.origin,
            destination: record.destination,
        })?;
    match (candidate.promotes, record.promotion) {
        (true, None) => return Err(IllegalMove::MissingPromotion(record.destination)),
        (false, Some(_)) => return Err(IllegalMove::UnexpectedPromotion(record.destination)),
        (true, Some(kind)) if !PieceKind::PROMOTION_CHOICES.contains(&kind) => {
            return Err(IllegalMove::InvalidPromotion(kind));
        }
        _ => (),
    }
    let actual = candidate
        .capture_at
        .and_then(|position| board[position])
        .map(|piece| piece.kind);
    if actual != record.captured {
        return Err(IllegalMove::CaptureMismatch {
            claimed: record.captured,
            actual,
        });
    }
    check_king_safety(board, *record, &candidate).inspect_err(|err| debug!("{record}: {err}"))
}
/// Every legal move of `color`, with promotions expanded into each choice.
pub fn legal_moves(board: &Board, context: &MoveContext, color: Color) -> Vec<MoveRecord> {
    let mut moves = Vec::new();
    for (origin, piece) in board.pieces_of(color) {
        let selector = PieceSelector::new(color, piece.kind, origin);
        for candidate in generate(board, selector, context) {
            let promotions = if candidate.promotes {
                PieceKind::PROMOTION_CHOICES.map(Some).to_vec()
            } else {
                vec![None]
            };
            for promotion in promotions {
                let record = MoveRecord::from_candidate(board, selector, &candidate, promotion);
                if check_king_safety(board, record, &candidate).is_ok() {
                    moves.push(record);
                }
            }
        }
    }
    moves
}
