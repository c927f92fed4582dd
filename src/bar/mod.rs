//! Bar module containing the progress bar, its builder and configuration.
//!
//! # Overview
//!
//! The bar module is organized into three components:
//!
//! - `progress_bar` - Core ProgressBar struct with the render math
//! - `builder` - ProgressBarBuilder for flexible configuration
//! - `config` - Configuration structure and defaults
//!
//! # Examples
//!
//! ## Colorizing
//!
//! ```rust
//! use shanks::color::{fore, style};
//! use shanks::{Colorize, ProgressBar};
//!
//! # fn main() -> shanks::Result<()> {
//! let mut bar = ProgressBar::builder().high(50.0).build()?;
//! bar.colorize(Colorize::slots().fill(fore::GREEN))?;
//!
//! let expected = format!("[{}##{}        ]", fore::GREEN, style::RESET_ALL);
//! assert_eq!(bar.render(10.0)?, expected);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod progress_bar;

pub use builder::ProgressBarBuilder;
pub use config::ProgressBarConfig;
pub use progress_bar::ProgressBar;
