//! Color module containing the known color set and the bar palette.
//!
//! # Overview
//!
//! The color module is organized into two components:
//!
//! - `set` - The injectable set of known color codes and the reset code
//! - `palette` - Per-segment colors of a bar
//!
//! # Examples
//!
//! ## Custom Color Set
//!
//! ```rust
//! use shanks::color::{ColorSet, Palette};
//!
//! let set = ColorSet::new(["<green>", "<red>"], "<reset>");
//! let palette = Palette::with_color_set(&set, None, None, Some("<green>"), None).unwrap();
//! assert!(!palette.is_empty());
//! ```

pub(crate) mod palette;
pub(crate) mod set;

pub use palette::{Palette, Slot};
pub use set::{back, fore, style, Color, ColorSet};
