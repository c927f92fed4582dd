//! Settings module containing segment inputs and render settings.
//!
//! # Overview
//!
//! The settings module is organized into three components:
//!
//! - `segment` - The plain, tuple and wrapper forms of a segment input
//! - `render_settings` - Segment texts, bar length and palette of a bar
//! - `colorize` - Requests to recolor a palette after construction
//!
//! # Examples
//!
//! ## Colors Attached to Segments
//!
//! ```rust
//! use shanks::color::{fore, Slot};
//! use shanks::{ColoredStr, RenderSettings};
//!
//! let settings = RenderSettings::new(
//!     ("<", fore::CYAN),
//!     ">",
//!     ColoredStr::new("=", fore::GREEN),
//!     "-",
//!     10,
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.prefix(), "<");
//! assert_eq!(settings.fill(), "=");
//! assert_eq!(settings.palette().get(Slot::Prefix).unwrap().as_str(), fore::CYAN);
//! ```

pub(crate) mod colorize;
pub(crate) mod render_settings;
pub(crate) mod segment;

pub use colorize::{Colorize, SlotColors};
pub use render_settings::RenderSettings;
pub use segment::{ColoredStr, Segment};
