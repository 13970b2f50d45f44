use std::io::{self, BufRead, Write};

use log::info;

use super::BoardMarks;
use crate::BoardDisplay;
use crate::fen::STARTING_FEN;
use crate::movegen::{PieceMoves, generate_all, generate_moves};
use crate::position::{Board, Coord};

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// What the terminal should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the board with the given marks, then print the message.
    Redraw { marks: BoardMarks, message: String },
    /// Print a message without redrawing.
    Message(String),
    Quit,
}

/// Interactive session state: the loaded board.
#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Board,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Executes one command line.
    ///
    /// A FEN that fails to decode leaves the current board untouched.
    pub fn execute(&mut self, input: &str) -> Outcome {
        let input = input.trim();
        let (command, rest) = input.split_once(' ').unwrap_or((input, ""));
        let rest = rest.trim();

        match command {
            "" => Outcome::Message(String::new()),
            "load" => {
                if rest.is_empty() {
                    return Outcome::Message("Usage: load <fen> | load startpos".into());
                }
                let fen = if rest == "startpos" { STARTING_FEN } else { rest };
                match Board::from_fen(fen) {
                    Ok(board) => {
                        info!("loaded position: {fen}");
                        self.board = board;
                        Outcome::Redraw {
                            marks: BoardMarks::new(),
                            message: "Position loaded from FEN".into(),
                        }
                    }
                    Err(e) => Outcome::Message(format!("Invalid FEN: {e}")),
                }
            }
            "m" => {
                if rest.is_empty() {
                    return Outcome::Message("Usage: m <square>".into());
                }
                match rest.parse::<Coord>() {
                    Ok(from) => self.show_moves(from),
                    Err(e) => Outcome::Message(format!("Invalid square: {e}")),
                }
            }
            "a" => match generate_all(&self.board) {
                Ok(all) => Outcome::Message(format_all(&all)),
                Err(e) => Outcome::Message(format!("Move generation failed: {e}")),
            },
            "p" => Outcome::Redraw {
                marks: BoardMarks::new(),
                message: String::new(),
            },
            "q" => Outcome::Quit,
            _ => Outcome::Message("Unknown command".into()),
        }
    }

    fn show_moves(&self, from: Coord) -> Outcome {
        let piece = self.board.get(from);
        if piece.is_empty() {
            return Outcome::Message(format!("No piece on {from}"));
        }
        let mut destinations = Vec::new();
        if let Err(e) = generate_moves(&self.board, from, piece, &mut destinations) {
            return Outcome::Message(format!("Move generation failed: {e}"));
        }
        let moves = PieceMoves {
            from,
            piece,
            destinations,
        };
        Outcome::Redraw {
            marks: BoardMarks::for_piece(&self.board, &moves),
            message: format_piece(&moves),
        }
    }
}

/// One line per piece: `e2: e3 e4`.
fn format_piece(moves: &PieceMoves) -> String {
    let targets: Vec<String> = moves.destinations.iter().map(ToString::to_string).collect();
    format!("{}: {}", moves.from, targets.join(" "))
}

fn format_all(all: &[PieceMoves]) -> String {
    let total: usize = all.iter().map(|pm| pm.destinations.len()).sum();
    let mut lines: Vec<String> = all
        .iter()
        .filter(|pm| !pm.destinations.is_empty())
        .map(format_piece)
        .collect();
    lines.push(format!("{total} pseudo-legal moves"));
    lines.join("\n")
}

/// Runs an interactive terminal session on stdin/stdout.
pub fn run_interactive_terminal<D: BoardDisplay>(display: &mut D, board: Board) {
    let mut session = Session::new(board);

    redraw(display, &session, &BoardMarks::new());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let input = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
            None => break,
        };

        match session.execute(&input) {
            Outcome::Redraw { marks, message } => {
                redraw(display, &session, &marks);
                if !message.is_empty() {
                    println!("\n{message}");
                }
            }
            Outcome::Message(message) => println!("{message}"),
            Outcome::Quit => break,
        }
    }
}

/// Draws the complete interface: help text and board.
fn redraw<D: BoardDisplay>(display: &mut D, session: &Session, marks: &BoardMarks) {
    clear_screen();
    println!("♟️  Mailbox Chess");
    println!();
    println!("Commands: load <fen> | m <square> | a (all moves) | p (refresh) | q (quit)");
    println!();
    if let Err(e) = display.show(session.board(), marks) {
        eprintln!("Failed to draw board: {}", e);
    }
    println!("{:?} to move", session.board().to_move());
}
