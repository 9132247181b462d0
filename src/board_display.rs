use std::fmt::{self, Display, Formatter};

use crate::{
    board::Board,
    color::Color,
    coord::{BOARD_SIZE, Coord},
    piece::Piece,
};

const WHITE: &str = "\x1b[30;107m";
const BLACK: &str = "\x1b[30;47m";
const HIGHLIGHTED: &str = "\x1b[30;103m";
const RESET: &str = "\x1b[0m";

/// Terminal rendering of a board with an info column on the right.
pub struct BoardDisplay<'a> {
    pub board: &'a Board,
    pub view: Color,
    pub show_coordinates: bool,
    pub highlighted: &'a [Coord],
    pub info: &'a str,
}
impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        BoardDisplay {
            board,
            view: Color::White,
            show_coordinates: true,
            highlighted: &[],
            info: "",
        }
    }
    fn oriented(&self, i: u8) -> u8 {
        match self.view {
            Color::White => i,
            Color::Black => BOARD_SIZE - 1 - i,
        }
    }
}
impl Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines = self.info.lines().fuse();
        for y in 0..BOARD_SIZE {
            let y = self.oriented(y);
            for x in 0..BOARD_SIZE {
                let position = Coord::new(self.oriented(x), y);
                let color = if self.highlighted.contains(&position) {
                    HIGHLIGHTED
                } else {
                    match position.square_color() {
                        Color::White => WHITE,
                        Color::Black => BLACK,
                    }
                };
                let figurine = self.board[position].map_or(' ', Piece::figurine);
                write!(f, "{color}{figurine} {RESET}")?;
            }
            if self.show_coordinates {
                write!(f, "{}", BOARD_SIZE - y)?;
            }
            if let Some(line) = lines.next() {
                write!(f, " {line}")?;
            }
            writeln!(f)?;
        }
        if self.show_coordinates {
            match self.view {
                Color::White => write!(f, "a b c d e f g h")?,
                Color::Black => write!(f, "h g f e d c b a")?,
            }
            if let Some(line) = lines.next() {
                write!(f, "   {line}")?;
            }
            writeln!(f)?;
        }
        for line in lines {
            writeln!(f, "                  {line}")?;
        }
        Ok(())
    }
}
