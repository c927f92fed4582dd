//! Error handling for the shanks library.
//!
//! Every fallible operation in the crate returns [`Result`], carrying one of
//! the [`Error`] variants below. Nothing is retried or swallowed: rendering
//! either yields a complete string or fails.

use thiserror::Error;

/// Errors that can happen when building or rendering a progress bar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A non-empty color code that is not part of the known color set.
    ///
    /// Returned by palette construction and propagated through
    /// [`RenderSettings`](crate::RenderSettings), the
    /// [`ProgressBarBuilder`](crate::ProgressBarBuilder) and `colorize`.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Arithmetic outside the domain of the render math.
    ///
    /// This covers a zero-width range (`high == low`), a non-finite progress
    /// value and a negative fill count.
    #[error("Domain error: {0}")]
    Domain(String),

    /// A bar must be at least one segment long.
    #[error("Invalid bar length: {0}")]
    InvalidBarLength(usize),

    /// The live-redraw output could not provide a line.
    #[error("Output error: {0}")]
    Output(String),
}

/// Result type alias for operations that can fail with a shanks error.
pub type Result<T> = std::result::Result<T, Error>;
