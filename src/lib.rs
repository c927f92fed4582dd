//! Shanks is a crate aiming at providing a simple way to render textual
//! progress bars such as `[####      ]`, optionally colorized per segment
//! and optionally redrawn in place on a terminal line.
//!
//! # Quick Start
//!
//! ```rust
//! use shanks::{ProgressBar, Result};
//!
//! # fn main() -> Result<()> {
//! let bar = ProgressBar::builder().high(50.0).build()?;
//! assert_eq!(bar.render(10.0)?, "[##        ]");
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! The shanks crate is organized into several modules:
//!
//! - [`bar`] - The `ProgressBar`, its builder and configuration
//! - [`color`] - Known color codes and the per-segment `Palette`
//! - [`dynamic`] - Live redraw of a bar on one terminal line
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`settings`] - Segment inputs and `RenderSettings`

pub mod bar;
pub mod color;
pub mod dynamic;
pub mod error;
pub mod settings;

pub use bar::{ProgressBar, ProgressBarBuilder, ProgressBarConfig};
pub use color::{Color, ColorSet, Palette, Slot};
pub use dynamic::{DynamicBar, LineHandle, LineOutput, TerminalOutput};
pub use error::{Error, Result};
pub use settings::{ColoredStr, Colorize, RenderSettings, Segment, SlotColors};
