use mailbox_chess::position::Board;
use mailbox_chess::visualization::{TerminalDisplay, run_interactive_terminal};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let board = match std::env::args().nth(1) {
        Some(fen) => match Board::from_fen(&fen) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("Invalid FEN '{fen}': {e}");
                std::process::exit(2);
            }
        },
        None => Board::new(),
    };

    log::info!("Mailbox Chess - terminal");
    run_interactive_terminal(&mut TerminalDisplay::new(), board);
}
