//! Dynamic module re-rendering a bar in place on a terminal.
//!
//! # Overview
//!
//! The dynamic module is organized into two components:
//!
//! - `line` - The redrawable line abstraction and its `indicatif` backend
//! - `dynamic_bar` - A bar bound to one line
//!
//! # Examples
//!
//! ```rust
//! use shanks::dynamic::TerminalOutput;
//! use shanks::ProgressBar;
//!
//! # fn main() -> shanks::Result<()> {
//! let mut bar = ProgressBar::builder()
//!     .high(50.0)
//!     .line_output(TerminalOutput::hidden())
//!     .build()?;
//!
//! bar.scope(|dynamic| {
//!     for step in 0..=50 {
//!         dynamic.render(step as f64)?;
//!     }
//!     Ok(())
//! })?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod dynamic_bar;
pub(crate) mod line;

pub use dynamic_bar::DynamicBar;
pub use line::{LineHandle, LineOutput, Target, TerminalOutput};
