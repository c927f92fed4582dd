//! Builder pattern implementation for creating ProgressBar instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use shanks::ProgressBar;
//!
//! # fn main() -> shanks::Result<()> {
//! let bar = ProgressBar::builder()
//!     .high(50.0)
//!     .prefix("/")
//!     .postfix("/")
//!     .fill("|")
//!     .build()?;
//!
//! assert_eq!(bar.render(20.0)?, "/||||      /");
//! # Ok(())
//! # }
//! ```
//!
//! ## Colored Segments
//!
//! ```rust
//! use shanks::color::fore;
//! use shanks::{ColoredStr, ProgressBar};
//!
//! # fn main() -> shanks::Result<()> {
//! let tuple = ProgressBar::builder().fill(("|", fore::GREEN)).build()?;
//! let wrapped = ProgressBar::builder()
//!     .fill(ColoredStr::new("|", fore::GREEN))
//!     .build()?;
//!
//! assert_eq!(tuple.render(40.0)?, wrapped.render(40.0)?);
//! # Ok(())
//! # }
//! ```

use super::config::ProgressBarConfig;
use super::progress_bar::ProgressBar;
use crate::color::{ColorSet, Palette};
use crate::dynamic::LineOutput;
use crate::error::Result;
use crate::settings::{RenderSettings, Segment};

use std::sync::Arc;

/// A builder used to create a [`ProgressBar`].
#[derive(Debug, Default)]
pub struct ProgressBarBuilder {
    config: ProgressBarConfig,
}

impl ProgressBarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProgressBarBuilder::default()
    }

    /// Set the lowest value of the range.
    pub fn low(mut self, low: f64) -> Self {
        self.config.low = low;
        self
    }

    /// Set the highest value of the range.
    pub fn high(mut self, high: f64) -> Self {
        self.config.high = high;
        self
    }

    /// Set the text before the bar.
    pub fn prefix(mut self, prefix: impl Into<Segment>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Set the text after the bar.
    pub fn postfix(mut self, postfix: impl Into<Segment>) -> Self {
        self.config.postfix = postfix.into();
        self
    }

    /// Set the text of a filled segment.
    pub fn fill(mut self, fill: impl Into<Segment>) -> Self {
        self.config.fill = fill.into();
        self
    }

    /// Set the text of an empty segment.
    pub fn empty(mut self, empty: impl Into<Segment>) -> Self {
        self.config.empty = empty.into();
        self
    }

    /// Set the number of segments.
    pub fn bar_len(mut self, bar_len: usize) -> Self {
        self.config.bar_len = bar_len;
        self
    }

    /// Use an explicit palette instead of the colors attached to segments.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = Some(palette);
        self
    }

    /// Use complete render settings.
    ///
    /// The segment, bar length and palette options are then ignored. The
    /// range is still taken from [`low`](Self::low) and [`high`](Self::high).
    pub fn render_settings(mut self, render_settings: RenderSettings) -> Self {
        self.config.render_settings = Some(render_settings);
        self
    }

    /// Validate colors against `color_set` instead of the ANSI set.
    pub fn color_set(mut self, color_set: ColorSet) -> Self {
        self.config.color_set = color_set;
        self
    }

    /// Set where live rendering draws its lines.
    pub fn line_output<O>(mut self, line_output: O) -> Self
    where
        O: LineOutput + 'static,
    {
        self.config.line_output = Arc::new(line_output);
        self
    }

    /// Create the [`ProgressBar`] with the specified options.
    pub fn build(self) -> Result<ProgressBar> {
        ProgressBar::from_config(self.config)
    }
}
