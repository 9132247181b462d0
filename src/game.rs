use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::{
    apply::{self, Undo},
    board::Board,
    castling_right::CastlingRight,
    color::Color,
    coord::{Coord, Vector},
    error::IllegalMove,
    legality::{is_in_check, legal_moves},
    movegen::{CandidateMove, MoveContext, PieceSelector, Special, moves_by_piece_in},
    piece::PieceKind,
    record::{MoveRecord, MoveSquares},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndState {
    Win(Color),
    Draw,
}
impl Display for EndState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EndState::Win(color) => write!(f, "checkmate, {color} wins")?,
            EndState::Draw => write!(f, "stalemate, draw")?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Ply {
    undo: Undo,
    context: MoveContext,
}

/// A game in progress: the board plus everything outside it that move rules depend on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    current_player: Color,
    context: MoveContext,
    history: Vec<Ply>,
}
impl Game {
    pub fn new() -> Self {
        Game::from_parts(
            Board::starting_position(),
            Color::White,
            CastlingRight::all(),
            None,
        )
    }
    pub fn from_parts(
        board: Board,
        current_player: Color,
        castling: CastlingRight,
        en_passant_target: Option<Coord>,
    ) -> Self {
        Game {
            board,
            current_player,
            context: MoveContext {
                castling,
                en_passant_target,
            },
            history: Vec::new(),
        }
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn current_player(&self) -> Color {
        self.current_player
    }
    pub fn context(&self) -> MoveContext {
        self.context
    }
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().map(|ply| ply.undo.record)
    }
    pub fn moves_for(&self, selector: PieceSelector) -> Result<Vec<CandidateMove>, IllegalMove> {
        if selector.color != self.current_player {
            return Err(IllegalMove::NotYourTurn(selector.color));
        }
        Ok(moves_by_piece_in(&self.board, selector, &self.context)?)
    }
    pub fn legal_moves(&self) -> Vec<MoveRecord> {
        legal_moves(&self.board, &self.context, self.current_player)
    }
    pub fn is_check(&self) -> bool {
        is_in_check(&self.board, self.current_player)
    }
    /// `None` while the player to move has a legal move.
    pub fn status(&self) -> Option<EndState> {
        if !self.legal_moves().is_empty() {
            return None;
        }
        if self.is_check() {
            Some(EndState::Win(!self.current_player))
        } else {
            Some(EndState::Draw)
        }
    }
    /// Validates and applies `record`. On error nothing changes.
    pub fn play(&mut self, record: MoveRecord) -> Result<(), IllegalMove> {
        if record.color != self.current_player {
            return Err(IllegalMove::NotYourTurn(record.color));
        }
        let context = self.context;
        let undo = apply::apply(&mut self.board, &context, record)?;
        self.update_context(record);
        self.history.push(Ply { undo, context });
        self.current_player = !self.current_player;
        Ok(())
    }
    pub fn play_squares(&mut self, squares: MoveSquares) -> Result<MoveRecord, IllegalMove> {
        let piece = self.board[squares.origin].ok_or(IllegalMove::NoPiece(squares.origin))?;
        let selector = PieceSelector::new(piece.color, piece.kind, squares.origin);
        let candidate = self
            .moves_for(selector)?
            .into_iter()
            .find(|candidate| candidate.destination == squares.destination)
            .ok_or(IllegalMove::NotACandidate {
                origin: squares.origin,
                destination: squares.destination,
            })?;
        let record =
            MoveRecord::from_candidate(&self.board, selector, &candidate, squares.promotion);
        self.play(record)?;
        Ok(record)
    }
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let ply = self.history.pop()?;
        apply::undo(&mut self.board, &ply.undo);
        self.context = ply.context;
        self.current_player = !self.current_player;
        Some(ply.undo.record)
    }
    fn update_context(&mut self, record: MoveRecord) {
        let castling = &mut self.context.castling;
        let before = *castling;
        match record.piece {
            PieceKind::King => castling.clear(record.color),
            PieceKind::Rook => castling.remove_for_rook_at(record.color, record.origin),
            _ => (),
        }
        if record.captured == Some(PieceKind::Rook) {
            castling.remove_for_rook_at(!record.color, record.destination);
        }
        if *castling != before {
            debug!("castling rights {before} -> {castling}");
        }
        self.context.en_passant_target = match record.special {
            Some(Special::DoublePush) => record
                .origin
                .move_by(Vector::pawn_single_move(record.color)),
            _ => None,
        };
    }
}
impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
