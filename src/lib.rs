pub mod fen;
pub mod movegen;
pub mod position;
pub mod visualization;

/// Trait for showing a board to the user.
///
/// Abstracts over the rendering target so the interactive loop can drive
/// a terminal or any other surface.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the board with the given highlights.
    ///
    /// Implementations map [`visualization::SquareMark`] variants to
    /// target-specific output (terminal colours, etc.).
    fn show(
        &mut self,
        board: &position::Board,
        marks: &visualization::BoardMarks,
    ) -> Result<(), Self::Error>;
}
