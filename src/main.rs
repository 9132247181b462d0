#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::{
    fmt::Write as _,
    io::{self, Write as _, stdin, stdout},
};

use clap::Parser;
use log::info;
use raycaster::{
    board_display::BoardDisplay, color::Color, coord::Coord, game::Game, record::MoveSquares,
};

/// Play chess against yourself in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Side shown at the bottom of the board
    #[arg(long, default_value_t = Color::White)]
    view: Color,

    /// Hide file and rank labels
    #[arg(long)]
    no_coordinates: bool,
}

fn print_help() {
    println!("flip           - flip the board");
    println!("reset          - reset to starting position");
    println!("undo           - take back the last move");
    println!("exit           - exit the game");
    println!("e2             - view valid moves");
    println!("e2e4           - play the move");
    println!("e7e8q          - move and promote");
    println!("e1g1           - perform castling");
}

fn status(game: &Game) -> String {
    let mut info = String::new();
    if let Some(end_state) = game.status() {
        writeln!(&mut info, "{end_state}").unwrap();
    } else {
        writeln!(&mut info, "{} plays", game.current_player()).unwrap();
        if game.is_check() {
            writeln!(&mut info, "check").unwrap();
        }
    }
    if let Some(record) = game.last_move() {
        writeln!(&mut info, "last move {record}").unwrap();
    }
    info
}

/// Destinations of the piece on `position`, if it belongs to the player to move.
fn destinations(game: &Game, position: Coord) -> Vec<Coord> {
    game.legal_moves()
        .into_iter()
        .filter(|record| record.origin == position)
        .map(|record| record.destination)
        .collect()
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format_timestamp(None)
    .init();

    let mut game = Game::new();
    let mut view = args.view;
    let mut highlighted = Vec::new();
    let mut info = status(&game);
    info.push_str("type `help` for instructions\n");
    loop {
        print!(
            "{}",
            BoardDisplay {
                board: game.board(),
                view,
                show_coordinates: !args.no_coordinates,
                highlighted: &highlighted,
                info: &info,
            },
        );
        let mut input = String::new();
        loop {
            print!("> ");
            stdout().flush()?;
            input.clear();
            if stdin().read_line(&mut input)? == 0 {
                return Ok(());
            }
            let input = input.trim();
            match input {
                "help" => {
                    print_help();
                    continue;
                }
                "exit" => return Ok(()),
                "flip" => view = !view,
                "reset" => {
                    game = Game::new();
                    highlighted.clear();
                    info!("new game");
                }
                "undo" => match game.undo() {
                    Some(record) => {
                        highlighted.clear();
                        highlighted.extend([record.origin, record.destination]);
                    }
                    None => {
                        eprintln!("Error: nothing to undo");
                        continue;
                    }
                },
                _ => {
                    if let Ok(position) = input.parse() {
                        highlighted = destinations(&game, position);
                    } else {
                        let squares: MoveSquares = match input.parse() {
                            Ok(squares) => squares,
                            Err(err) => {
                                eprintln!("Error: {err}");
                                continue;
                            }
                        };
                        if let Err(err) = game.play_squares(squares) {
                            eprintln!("Error: {err}");
                            continue;
                        }
                        highlighted.clear();
                        highlighted.extend([squares.origin, squares.destination]);
                    }
                }
            }
            break;
        }
        info = status(&game);
    }
}
