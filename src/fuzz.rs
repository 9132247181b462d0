//! Random games cross-checked against the `chess` crate.

use chess::{ChessMove, File, MoveGen, Rank, Square};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

use crate::{
    board_display::BoardDisplay,
    coord::Coord,
    game::Game,
    piece::PieceKind,
    record::{MoveRecord, MoveSquares},
};

const GAMES: usize = 40;
const MAX_PLIES: usize = 300;

impl From<chess::Piece> for PieceKind {
    fn from(value: chess::Piece) -> Self {
        match value {
            chess::Piece::Pawn => PieceKind::Pawn,
            chess::Piece::Knight => PieceKind::Knight,
            chess::Piece::Bishop => PieceKind::Bishop,
            chess::Piece::Rook => PieceKind::Rook,
            chess::Piece::Queen => PieceKind::Queen,
            chess::Piece::King => PieceKind::King,
        }
    }
}
impl From<PieceKind> for chess::Piece {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::Pawn => chess::Piece::Pawn,
            PieceKind::Knight => chess::Piece::Knight,
            PieceKind::Bishop => chess::Piece::Bishop,
            PieceKind::Rook => chess::Piece::Rook,
            PieceKind::Queen => chess::Piece::Queen,
            PieceKind::King => chess::Piece::King,
        }
    }
}
impl From<Square> for Coord {
    fn from(value: Square) -> Self {
        Coord::new(
            value.get_file().to_index().try_into().unwrap(),
            (7 - value.get_rank().to_index()).try_into().unwrap(),
        )
    }
}
impl From<Coord> for Square {
    fn from(value: Coord) -> Self {
        Square::make_square(
            Rank::from_index(7 - usize::from(value.y())),
            File::from_index(usize::from(value.x())),
        )
    }
}
impl From<ChessMove> for MoveSquares {
    fn from(value: ChessMove) -> Self {
        MoveSquares {
            origin: value.get_source().into(),
            destination: value.get_dest().into(),
            promotion: value.get_promotion().map(Into::into),
        }
    }
}
impl From<MoveSquares> for ChessMove {
    fn from(value: MoveSquares) -> Self {
        ChessMove::new(
            value.origin.into(),
            value.destination.into(),
            value.promotion.map(Into::into),
        )
    }
}
#[test]
fn square_conversion() {
    for position in Coord::all() {
        assert_eq!(Coord::from(Square::from(position)), position);
        assert_eq!(Square::from(position).to_string(), position.to_string());
    }
}
#[test]
fn random_games_match_reference() {
    let mut rng = SmallRng::seed_from_u64(0x0c4e_55ed);
    for _ in 0..GAMES {
        let mut game = Game::new();
        let mut reference = chess::Board::default();
        for _ in 0..MAX_PLIES {
            let moves: FxHashSet<_> = game
                .legal_moves()
                .into_iter()
                .map(MoveRecord::squares)
                .collect();
            let expected: FxHashSet<MoveSquares> =
                MoveGen::new_legal(&reference).map(Into::into).collect();
            if let Some(movement) = moves.difference(&expected).next() {
                panic!(
                    "found {movement} but it's not a legal move\n{}\n{reference}",
                    BoardDisplay::new(game.board()),
                );
            }
            if let Some(movement) = expected.difference(&moves).next() {
                panic!(
                    "{movement} not found\n{}\n{reference}",
                    BoardDisplay::new(game.board()),
                );
            }
            assert_eq!(game.is_check(), *reference.checkers() != chess::EMPTY);
            if moves.is_empty() {
                assert!(game.status().is_some());
                break;
            }
            let moves: Box<[_]> = moves.into_iter().collect();
            let movement = moves[rng.random_range(0..moves.len())];
            let before = game.clone();
            game.play_squares(movement).unwrap();
            reference = reference.make_move_new(movement.into());

            let mut undone = game.clone();
            undone.undo();
            assert_eq!(undone, before);
        }
    }
}
