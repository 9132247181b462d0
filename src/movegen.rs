//! Pseudo-legal move generation.
//!
//! Moves produced here respect piece geometry, blocking and capture rules only. Whether a
//! move leaves the mover's king in check is decided by [`crate::legality`].

use log::trace;
use rustc_hash::FxHashMap;

use crate::{
    board::Board,
    castling_right::{CastleSide, CastlingRight},
    color::Color,
    coord::{Coord, Vector},
    error::InvalidSelection,
    piece::{Piece, PieceKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Capture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
    DoublePush,
    EnPassant,
    Castle(CastleSide),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub destination: Coord,
    /// Square of the captured piece. Differs from `destination` only for en passant.
    pub capture_at: Option<Coord>,
    pub kind: MoveKind,
    /// The captured piece is a king. Classification only; a legal game never produces it.
    pub captures_king: bool,
    /// The pawn reaches its last rank and must be replaced.
    pub promotes: bool,
    pub special: Option<Special>,
}
impl CandidateMove {
    fn normal(destination: Coord) -> Self {
        CandidateMove {
            destination,
            capture_at: None,
            kind: MoveKind::Normal,
            captures_king: false,
            promotes: false,
            special: None,
        }
    }
    fn capture(destination: Coord, capture_at: Coord, captured: Piece) -> Self {
        CandidateMove {
            destination,
            capture_at: Some(capture_at),
            kind: MoveKind::Capture,
            captures_king: captured.kind == PieceKind::King,
            promotes: false,
            special: None,
        }
    }
    fn with_special(self, special: Special) -> Self {
        CandidateMove {
            special: Some(special),
            ..self
        }
    }
    pub fn is_capture(self) -> bool {
        self.kind == MoveKind::Capture
    }
}

/// Which piece to enumerate moves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSelector {
    pub color: Color,
    pub kind: PieceKind,
    pub origin: Coord,
}
impl PieceSelector {
    pub fn new(color: Color, kind: PieceKind, origin: Coord) -> Self {
        PieceSelector {
            color,
            kind,
            origin,
        }
    }
    /// Selector for whatever stands on `origin`.
    pub fn on(board: &Board, origin: Coord) -> Option<Self> {
        board[origin].map(|piece| PieceSelector::new(piece.color, piece.kind, origin))
    }
    pub fn piece(self) -> Piece {
        Piece::new(self.color, self.kind)
    }
}

/// State outside the board that special moves depend on. Supplied by the game driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveContext {
    pub castling: CastlingRight,
    /// Square passed over by a pawn double push on the previous ply.
    pub en_passant_target: Option<Coord>,
}
impl MoveContext {
    /// No castling rights and no en passant: plain geometry.
    pub fn none() -> Self {
        MoveContext {
            castling: CastlingRight::none(),
            en_passant_target: None,
        }
    }
}
impl Default for MoveContext {
    fn default() -> Self {
        MoveContext {
            castling: CastlingRight::all(),
            en_passant_target: None,
        }
    }
}

/// Normal move onto an empty square, capture onto an enemy, nothing onto an own piece.
fn classify(board: &Board, color: Color, destination: Coord) -> Option<CandidateMove> {
    match board[destination] {
        None => Some(CandidateMove::normal(destination)),
        Some(piece) if piece.color != color => {
            Some(CandidateMove::capture(destination, destination, piece))
        }
        Some(_) => None,
    }
}
fn step_moves<'a>(
    board: &'a Board,
    color: Color,
    origin: Coord,
    moves: &'a [Vector],
) -> impl Iterator<Item = CandidateMove> + 'a {
    moves
        .iter()
        .filter_map(move |movement| origin.move_by(*movement))
        .filter_map(move |destination| classify(board, color, destination))
}
fn directional_moves(
    board: &Board,
    color: Color,
    origin: Coord,
    direction: Vector,
) -> impl Iterator<Item = CandidateMove> + '_ {
    let mut resume = true;
    origin.ray(direction).map_while(move |destination| {
        if !resume {
            return None;
        }
        resume = board.is_empty_at(destination);
        classify(board, color, destination)
    })
}
fn all_directional_moves<'a>(
    board: &'a Board,
    color: Color,
    origin: Coord,
    directions: &'a [Vector],
) -> impl Iterator<Item = CandidateMove> + 'a {
    directions
        .iter()
        .flat_map(move |direction| directional_moves(board, color, origin, *direction))
}
fn pawn_moves(
    board: &Board,
    color: Color,
    origin: Coord,
    context: &MoveContext,
) -> Vec<CandidateMove> {
    let forward = Vector::pawn_single_move(color);
    let mut moves = Vec::with_capacity(4);
    if let Some(single) = origin
        .move_by(forward)
        .filter(|position| board.is_empty_at(*position))
    {
        moves.push(CandidateMove::normal(single));
        if origin.y() == color.pawn_home_rank() {
            if let Some(double) = single
                .move_by(forward)
                .filter(|position| board.is_empty_at(*position))
            {
                moves.push(CandidateMove::normal(double).with_special(Special::DoublePush));
            }
        }
    }
    for destination in Vector::pawn_attacks(color)
        .into_iter()
        .filter_map(|attack| origin.move_by(attack))
    {
        if let Some(captured) = board.enemy_at(destination, color) {
            moves.push(CandidateMove::capture(destination, destination, captured));
        } else if context.en_passant_target == Some(destination) {
            // the pawn that double pushed stands beside us, on the destination file
            let passed = Coord::new(destination.x(), origin.y());
            let enemy_pawn = Piece::new(!color, PieceKind::Pawn);
            if board[passed] == Some(enemy_pawn) {
                moves.push(
                    CandidateMove::capture(destination, passed, enemy_pawn)
                        .with_special(Special::EnPassant),
                );
            }
        }
    }
    for movement in &mut moves {
        movement.promotes = movement.destination.y() == color.promotion_rank();
    }
    moves
}
fn castling_moves(
    board: &Board,
    color: Color,
    origin: Coord,
    castling: CastlingRight,
) -> impl Iterator<Item = CandidateMove> + '_ {
    let in_place = origin == Coord::new(4, color.home_rank());
    CastleSide::ALL
        .into_iter()
        .filter(move |side| in_place && castling.get(color, *side))
        .filter(move |side| {
            let rook = origin.with_x(side.rook_origin_x());
            let (start, end) = if rook.x() < origin.x() {
                (rook.x(), origin.x())
            } else {
                (origin.x(), rook.x())
            };
            board[rook] == Some(Piece::new(color, PieceKind::Rook))
                && (start + 1..end).all(|x| board.is_empty_at(origin.with_x(x)))
        })
        .map(move |side| {
            CandidateMove::normal(origin.with_x(side.king_destination_x()))
                .with_special(Special::Castle(side))
        })
}
/// Dispatch without checking the selector against the board.
pub(crate) fn generate(
    board: &Board,
    selector: PieceSelector,
    context: &MoveContext,
) -> Vec<CandidateMove> {
    let PieceSelector {
        color,
        kind,
        origin,
    } = selector;
    let moves: Vec<_> = match kind {
        PieceKind::Pawn => pawn_moves(board, color, origin, context),
        PieceKind::Knight => step_moves(board, color, origin, &Vector::KNIGHT_MOVES).collect(),
        PieceKind::Bishop => {
            all_directional_moves(board, color, origin, &Vector::BISHOP_DIRECTIONS).collect()
        }
        PieceKind::Rook => {
            all_directional_moves(board, color, origin, &Vector::ROOK_DIRECTIONS).collect()
        }
        PieceKind::Queen => {
            all_directional_moves(board, color, origin, &Vector::QUEEN_DIRECTIONS).collect()
        }
        PieceKind::King => step_moves(board, color, origin, &Vector::KING_MOVES)
            .chain(castling_moves(board, color, origin, context.castling))
            .collect(),
    };
    trace!("{} on {origin}: {} candidates", selector.piece(), moves.len());
    moves
}
/// Candidate moves of the selected piece, ignoring castling and en passant.
pub fn moves_by_piece(
    board: &Board,
    selector: PieceSelector,
) -> Result<Vec<CandidateMove>, InvalidSelection> {
    moves_by_piece_in(board, selector, &MoveContext::none())
}
/// Candidate moves of the selected piece, with special moves allowed by `context`.
///
/// Moves come out in direction-table order and, along a ray, nearest first. Castling
/// follows the king's step moves, kingside first.
pub fn moves_by_piece_in(
    board: &Board,
    selector: PieceSelector,
    context: &MoveContext,
) -> Result<Vec<CandidateMove>, InvalidSelection> {
    let found = board[selector.origin];
    if found != Some(selector.piece()) {
        return Err(InvalidSelection {
            origin: selector.origin,
            expected: selector.piece(),
            found,
        });
    }
    Ok(generate(board, selector, context))
}
pub fn all_moves_by_color(board: &Board, color: Color) -> FxHashMap<Coord, Vec<CandidateMove>> {
    all_moves_by_color_in(board, color, &MoveContext::none())
}
/// Candidate moves of every piece of `color`, keyed by origin. Pieces without moves are
/// left out.
pub fn all_moves_by_color_in(
    board: &Board,
    color: Color,
    context: &MoveContext,
) -> FxHashMap<Coord, Vec<CandidateMove>> {
    board
        .pieces_of(color)
        .filter_map(|(origin, piece)| {
            let moves = generate(board, PieceSelector::new(color, piece.kind, origin), context);
            (!moves.is_empty()).then_some((origin, moves))
        })
        .collect()
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        castling_right::{CastleSide, CastlingRight},
        color::Color,
        coord,
        coord::{Coord, Vector},
        error::InvalidSelection,
        movegen::{
            CandidateMove, MoveContext, MoveKind, PieceSelector, Special, all_moves_by_color,
            all_moves_by_color_in, moves_by_piece, moves_by_piece_in,
        },
        piece::{Piece, PieceKind},
    };

    const WHITE_ROOK: Piece = Piece {
        color: Color::White,
        kind: PieceKind::Rook,
    };

    fn lone(kind: PieceKind, origin: Coord) -> Vec<CandidateMove> {
        let board = Board::from_pieces([(origin, Piece::new(Color::White, kind))]);
        moves_by_piece(&board, PieceSelector::new(Color::White, kind, origin)).unwrap()
    }
    fn destinations(moves: &[CandidateMove]) -> Vec<Coord> {
        moves.iter().map(|movement| movement.destination).collect()
    }

    #[test]
    fn rook_in_the_middle() {
        let moves = lone(PieceKind::Rook, coord!("d5"));
        assert_eq!(moves.len(), 14);
        assert_eq!(
            destinations(&moves),
            [
                coord!("c5"),
                coord!("b5"),
                coord!("a5"),
                coord!("e5"),
                coord!("f5"),
                coord!("g5"),
                coord!("h5"),
                coord!("d6"),
                coord!("d7"),
                coord!("d8"),
                coord!("d4"),
                coord!("d3"),
                coord!("d2"),
                coord!("d1"),
            ]
        );
        assert!(moves.iter().all(|movement| movement.kind == MoveKind::Normal));
    }
    #[test]
    fn ray_stops_at_first_piece() {
        let board = Board::from_pieces([
            (coord!("d5"), WHITE_ROOK),
            (coord!("d7"), Piece::new(Color::White, PieceKind::Pawn)),
            (coord!("f5"), Piece::new(Color::Black, PieceKind::Pawn)),
            (coord!("g5"), Piece::new(Color::Black, PieceKind::Queen)),
        ]);
        let moves = moves_by_piece(
            &board,
            PieceSelector::new(Color::White, PieceKind::Rook, coord!("d5")),
        )
        .unwrap();
        assert_eq!(
            destinations(&moves),
            [
                coord!("c5"),
                coord!("b5"),
                coord!("a5"),
                coord!("e5"),
                coord!("f5"),
                coord!("d6"),
                coord!("d4"),
                coord!("d3"),
                coord!("d2"),
                coord!("d1"),
            ]
        );
        let capture = moves[4];
        assert_eq!(capture.kind, MoveKind::Capture);
        assert_eq!(capture.capture_at, Some(coord!("f5")));
        assert!(!capture.captures_king);
        assert_eq!(
            moves.iter().filter(|movement| movement.is_capture()).count(),
            1
        );
    }
    #[test]
    fn king_capture_is_flagged() {
        let board = Board::from_pieces([
            (coord!("a1"), WHITE_ROOK),
            (coord!("a6"), Piece::new(Color::Black, PieceKind::King)),
        ]);
        let moves = moves_by_piece(
            &board,
            PieceSelector::new(Color::White, PieceKind::Rook, coord!("a1")),
        )
        .unwrap();
        let capture: Vec<_> = moves.iter().filter(|movement| movement.is_capture()).collect();
        assert_eq!(capture.len(), 1);
        assert!(capture[0].captures_king);
        assert_eq!(capture[0].capture_at, Some(coord!("a6")));
    }
    #[test]
    fn stepping_and_pawn_captures_flag_only_kings() {
        let captures = |board: &Board, kind: PieceKind, origin: Coord| -> Vec<(Coord, bool)> {
            moves_by_piece(board, PieceSelector::new(Color::White, kind, origin))
                .unwrap()
                .into_iter()
                .filter(|movement| movement.is_capture())
                .map(|movement| (movement.destination, movement.captures_king))
                .collect()
        };
        let black = |kind: PieceKind| Piece::new(Color::Black, kind);
        let white = |kind: PieceKind| Piece::new(Color::White, kind);

        let board = Board::from_pieces([
            (coord!("d5"), white(PieceKind::Knight)),
            (coord!("c7"), black(PieceKind::King)),
            (coord!("e7"), black(PieceKind::Rook)),
        ]);
        assert_eq!(
            captures(&board, PieceKind::Knight, coord!("d5")),
            [(coord!("c7"), true), (coord!("e7"), false)]
        );

        let board = Board::from_pieces([
            (coord!("d4"), white(PieceKind::King)),
            (coord!("c5"), black(PieceKind::Knight)),
            (coord!("e5"), black(PieceKind::King)),
        ]);
        assert_eq!(
            captures(&board, PieceKind::King, coord!("d4")),
            [(coord!("c5"), false), (coord!("e5"), true)]
        );

        let board = Board::from_pieces([
            (coord!("e4"), white(PieceKind::Pawn)),
            (coord!("d5"), black(PieceKind::King)),
            (coord!("f5"), black(PieceKind::Pawn)),
        ]);
        assert_eq!(
            captures(&board, PieceKind::Pawn, coord!("e4")),
            [(coord!("d5"), true), (coord!("f5"), false)]
        );
    }
    #[test]
    fn knight_counts() {
        let moves = lone(PieceKind::Knight, coord!("d5"));
        assert_eq!(
            destinations(&moves),
            [
                coord!("c7"),
                coord!("e7"),
                coord!("c3"),
                coord!("e3"),
                coord!("b6"),
                coord!("f6"),
                coord!("b4"),
                coord!("f4"),
            ]
        );
        let corner = lone(PieceKind::Knight, coord!("a8"));
        assert_eq!(destinations(&corner), [coord!("b6"), coord!("c7")]);
    }
    #[test]
    fn knight_jumps_over_and_skips_own_pieces() {
        let mut board = Board::starting_position();
        board[coord!("a3")] = Some(Piece::new(Color::White, PieceKind::Bishop));
        let moves = moves_by_piece(
            &board,
            PieceSelector::new(Color::White, PieceKind::Knight, coord!("b1")),
        )
        .unwrap();
        assert_eq!(destinations(&moves), [coord!("c3")]);
    }
    #[test]
    fn pawn_pushes() {
        let moves = lone(PieceKind::Pawn, coord!("e2"));
        assert_eq!(destinations(&moves), [coord!("e3"), coord!("e4")]);
        assert_eq!(moves[0].special, None);
        assert_eq!(moves[1].special, Some(Special::DoublePush));

        let moves = lone(PieceKind::Pawn, coord!("e3"));
        assert_eq!(destinations(&moves), [coord!("e4")]);
    }
    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = Board::from_pieces([
            (coord!("e7"), Piece::new(Color::Black, PieceKind::Pawn)),
            (coord!("e6"), Piece::new(Color::White, PieceKind::Knight)),
        ]);
        let moves = moves_by_piece(
            &board,
            PieceSelector::new(Color::Black, PieceKind::Pawn, coord!("e7")),
        )
        .unwrap();
        assert!(moves.is_empty());
    }
    #[test]
    fn pawn_captures_only_enemies() {
        let board = Board::from_pieces([
            (coord!("e4"), Piece::new(Color::White, PieceKind::Pawn)),
            (coord!("d5"), Piece::new(Color::Black, PieceKind::Knight)),
            (coord!("f5"), Piece::new(Color::White, PieceKind::Knight)),
            (coord!("e5"), Piece::new(Color::Black, PieceKind::Pawn)),
        ]);
        let moves = moves_by_piece(
            &board,
            PieceSelector::new(Color::White, PieceKind::Pawn, coord!("e4")),
        )
        .unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].destination, coord!("d5"));
        assert_eq!(moves[0].kind, MoveKind::Capture);
    }
    #[test]
    fn pawn_promotion_is_flagged() {
        let board = Board::from_pieces([
            (coord!("b7"), Piece::new(Color::White, PieceKind::Pawn)),
            (coord!("a8"), Piece::new(Color::Black, PieceKind::Rook)),
            (coord!("b6"), Piece::new(Color::Black, PieceKind::Pawn)),
        ]);
        let moves = moves_by_piece(
            &board,
            PieceSelector::new(Color::White, PieceKind::Pawn, coord!("b7")),
        )
        .unwrap();
        assert_eq!(destinations(&moves), [coord!("b8"), coord!("a8")]);
        assert!(moves.iter().all(|movement| movement.promotes));

        let moves = moves_by_piece(
            &board,
            PieceSelector::new(Color::Black, PieceKind::Pawn, coord!("b6")),
        )
        .unwrap();
        assert_eq!(destinations(&moves), [coord!("b5")]);
        assert!(!moves[0].promotes);
    }
    #[test]
    fn en_passant_needs_context() {
        let board = Board::from_pieces([
            (coord!("e5"), Piece::new(Color::White, PieceKind::Pawn)),
            (coord!("d5"), Piece::new(Color::Black, PieceKind::Pawn)),
        ]);
        let selector = PieceSelector::new(Color::White, PieceKind::Pawn, coord!("e5"));
        assert_eq!(
            destinations(&moves_by_piece(&board, selector).unwrap()),
            [coord!("e6")]
        );
        let context = MoveContext {
            castling: CastlingRight::none(),
            en_passant_target: Some(coord!("d6")),
        };
        let moves = moves_by_piece_in(&board, selector, &context).unwrap();
        assert_eq!(destinations(&moves), [coord!("e6"), coord!("d6")]);
        assert_eq!(moves[1].capture_at, Some(coord!("d5")));
        assert_eq!(moves[1].special, Some(Special::EnPassant));
        assert_eq!(moves[1].kind, MoveKind::Capture);
    }
    #[test]
    fn en_passant_target_for_another_file_is_ignored() {
        let board = Board::from_pieces([
            (coord!("e5"), Piece::new(Color::White, PieceKind::Pawn)),
            (coord!("d5"), Piece::new(Color::Black, PieceKind::Pawn)),
        ]);
        let context = MoveContext {
            castling: CastlingRight::none(),
            en_passant_target: Some(coord!("f6")),
        };
        let moves = moves_by_piece_in(
            &board,
            PieceSelector::new(Color::White, PieceKind::Pawn, coord!("e5")),
            &context,
        )
        .unwrap();
        assert_eq!(destinations(&moves), [coord!("e6")]);
    }
    #[test]
    fn castling_needs_rights_and_empty_squares() {
        let mut board = Board::from_pieces([
            (coord!("e1"), Piece::new(Color::White, PieceKind::King)),
            (coord!("a1"), WHITE_ROOK),
            (coord!("h1"), WHITE_ROOK),
        ]);
        let selector = PieceSelector::new(Color::White, PieceKind::King, coord!("e1"));
        assert_eq!(moves_by_piece(&board, selector).unwrap().len(), 5);

        let context = MoveContext::default();
        let moves = moves_by_piece_in(&board, selector, &context).unwrap();
        let castles: Vec<_> = moves.iter().filter_map(|movement| movement.special).collect();
        assert_eq!(
            castles,
            [
                Special::Castle(CastleSide::Kingside),
                Special::Castle(CastleSide::Queenside)
            ]
        );
        assert_eq!(moves[5].destination, coord!("g1"));
        assert_eq!(moves[6].destination, coord!("c1"));
        assert_eq!(moves[5].kind, MoveKind::Normal);

        board[coord!("b1")] = Some(Piece::new(Color::White, PieceKind::Knight));
        let moves = moves_by_piece_in(&board, selector, &context).unwrap();
        assert_eq!(
            moves.iter().filter_map(|movement| movement.special).collect::<Vec<_>>(),
            [Special::Castle(CastleSide::Kingside)]
        );

        let mut castling = CastlingRight::all();
        castling.remove(Color::White, CastleSide::Kingside);
        let context = MoveContext {
            castling,
            en_passant_target: None,
        };
        let moves = moves_by_piece_in(&board, selector, &context).unwrap();
        assert!(moves.iter().all(|movement| movement.special.is_none()));
    }
    #[test]
    fn king_never_moves_like_a_knight() {
        let moves = lone(PieceKind::King, coord!("d5"));
        assert_eq!(moves.len(), 8);
        let origin = coord!("d5");
        for movement in moves {
            let dx = i32::from(movement.destination.x()) - i32::from(origin.x());
            let dy = i32::from(movement.destination.y()) - i32::from(origin.y());
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!(
                !Vector::KNIGHT_MOVES
                    .iter()
                    .any(|knight| i32::from(knight.x) == dx && i32::from(knight.y) == dy)
            );
        }
    }
    #[test]
    fn queen_rays_are_not_truncated() {
        let moves = lone(PieceKind::Queen, coord!("d5"));
        assert_eq!(moves.len(), 27);
        assert!(moves.iter().any(|movement| movement.destination == coord!("h1")));
        assert!(moves.iter().any(|movement| movement.destination == coord!("a8")));
        assert!(moves.iter().any(|movement| movement.destination == coord!("d1")));
        assert_eq!(lone(PieceKind::Bishop, coord!("d5")).len(), 13);
    }
    #[test]
    fn selection_must_match_board() {
        let board = Board::starting_position();
        let selector = PieceSelector::new(Color::White, PieceKind::Queen, coord!("e1"));
        assert_eq!(
            moves_by_piece(&board, selector),
            Err(InvalidSelection {
                origin: coord!("e1"),
                expected: Piece::new(Color::White, PieceKind::Queen),
                found: Some(Piece::new(Color::White, PieceKind::King)),
            })
        );
        let selector = PieceSelector::new(Color::White, PieceKind::Pawn, coord!("e4"));
        assert!(moves_by_piece(&board, selector).is_err());
        let selector = PieceSelector::new(Color::Black, PieceKind::Pawn, coord!("e2"));
        assert!(moves_by_piece(&board, selector).is_err());
    }
    #[test]
    fn opening_move_counts() {
        let board = Board::starting_position();
        for color in Color::ALL {
            let moves = all_moves_by_color(&board, color);
            assert_eq!(moves.len(), 10);
            assert_eq!(moves.values().map(Vec::len).sum::<usize>(), 20);
            for (origin, moves) in &moves {
                let kind = board[*origin].unwrap().kind;
                let expected = match kind {
                    PieceKind::Pawn | PieceKind::Knight => 2,
                    _ => 0,
                };
                assert_eq!(moves.len(), expected, "{kind} on {origin}");
            }
            // the rights are there but every path is blocked
            let moves = all_moves_by_color_in(&board, color, &MoveContext::default());
            assert_eq!(moves.values().map(Vec::len).sum::<usize>(), 20);
        }
    }
    #[test]
    fn generation_does_not_touch_the_board() {
        let board = Board::starting_position();
        let copy = board;
        let _ = all_moves_by_color_in(&board, Color::White, &MoveContext::default());
        assert_eq!(board, copy);
    }
}
