mod display;
mod marks;
mod terminal;

pub use display::{DisplayError, TerminalDisplay, glyph, render_board};
pub use marks::{BoardMarks, SquareMark};
pub use terminal::{Outcome, Session, run_interactive_terminal};
