//! Core progress bar implementation with the render math.
//!
//! # Examples
//!
//! ```rust
//! use shanks::ProgressBar;
//!
//! # fn main() -> shanks::Result<()> {
//! let mut bar = ProgressBar::builder().high(50.0).build()?;
//! assert_eq!(bar.render(10.0)?, "[##        ]");
//!
//! bar.render_settings_mut().set_fill("|");
//! assert_eq!(bar.render(30.0)?, "[||||||    ]");
//! # Ok(())
//! # }
//! ```

use super::builder::ProgressBarBuilder;
use super::config::ProgressBarConfig;
use crate::color::{Color, Slot};
use crate::dynamic::{DynamicBar, LineOutput, TerminalOutput};
use crate::error::{Error, Result};
use crate::settings::{Colorize, RenderSettings};

use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// A textual progress bar over the range `[low, high]`.
///
/// The bar owns its [`RenderSettings`]; changes made to them through
/// [`render_settings_mut`](Self::render_settings_mut) or
/// [`colorize`](Self::colorize) apply to every later render.
#[derive(Clone)]
pub struct ProgressBar {
    low: f64,
    high: f64,
    render_settings: RenderSettings,
    line_output: Arc<dyn LineOutput>,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("low", &self.low)
            .field("high", &self.high)
            .field("render_settings", &self.render_settings)
            .finish()
    }
}

impl ProgressBar {
    /// A `[##        ]` style bar over `0..100` with ten segments.
    pub fn new() -> Self {
        Self {
            low: 0.0,
            high: 100.0,
            render_settings: RenderSettings::default(),
            line_output: Arc::new(TerminalOutput::default()),
        }
    }

    /// Creates a [`ProgressBarBuilder`].
    pub fn builder() -> ProgressBarBuilder {
        ProgressBarBuilder::new()
    }

    pub(crate) fn from_config(config: ProgressBarConfig) -> Result<Self> {
        let render_settings = match config.render_settings {
            Some(render_settings) => render_settings,
            None => RenderSettings::with_color_set(
                config.color_set,
                config.prefix,
                config.postfix,
                config.fill,
                config.empty,
                config.bar_len,
                config.palette,
            )?,
        };

        debug!(low = config.low, high = config.high, "Created progress bar");

        Ok(Self {
            low: config.low,
            high: config.high,
            render_settings,
            line_output: config.line_output,
        })
    }

    /// Lowest value of the range.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Highest value of the range.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Settings used by [`render`](Self::render).
    pub fn render_settings(&self) -> &RenderSettings {
        &self.render_settings
    }

    /// Mutable access to the settings used by [`render`](Self::render).
    pub fn render_settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.render_settings
    }

    /// Recolor the bar. See [`RenderSettings::colorize`].
    pub fn colorize(&mut self, request: impl Into<Colorize>) -> Result<()> {
        self.render_settings.colorize(request)
    }

    /// Remove the colors of `slots`. See [`RenderSettings::reset_color`].
    pub fn reset_color(&mut self, slots: &[Slot]) {
        self.render_settings.reset_color(slots);
    }

    /// Render `progress` with the bar's own settings.
    pub fn render(&self, progress: f64) -> Result<String> {
        self.render_with(progress, &self.render_settings)
    }

    /// Render `progress` with `render_settings` instead of the bar's own.
    ///
    /// Only the fill and empty segments are colored; the prefix and postfix
    /// are written as plain text.
    pub fn render_with(&self, progress: f64, render_settings: &RenderSettings) -> Result<String> {
        let bar = self.render_bar(progress, render_settings)?;

        let mut result = String::with_capacity(
            render_settings.prefix().len() + bar.len() + render_settings.postfix().len(),
        );
        result.push_str(render_settings.prefix());
        result.push_str(&bar);
        result.push_str(render_settings.postfix());

        Ok(result)
    }

    /// Render the fill and empty segments without prefix and postfix.
    pub fn render_bar(&self, progress: f64, render_settings: &RenderSettings) -> Result<String> {
        let (fill_count, empty_count) = self.segment_counts(progress, render_settings.bar_len())?;
        trace!(progress, fill_count, empty_count, "Rendering bar");

        let palette = render_settings.palette();
        let reset = render_settings.color_set().reset();

        let mut bar = String::new();
        push_segment(
            &mut bar,
            palette.get(Slot::Fill),
            render_settings.fill(),
            fill_count,
            reset,
        );
        push_segment(
            &mut bar,
            palette.get(Slot::Empty),
            render_settings.empty(),
            empty_count,
            reset,
        );

        Ok(bar)
    }

    /// Number of filled and empty segments for `progress`.
    ///
    /// The ratio is `progress / (high - low)`: progress is not offset by
    /// `low`. The fill count is floored and capped at `bar_len`.
    ///
    /// Fails with [`Error::Domain`] when `high == low`, when the ratio is
    /// not finite, or when the fill count would be negative.
    pub fn segment_counts(&self, progress: f64, bar_len: usize) -> Result<(usize, usize)> {
        if !progress.is_finite() {
            return Err(Error::Domain(format!(
                "progress must be finite, got {progress}"
            )));
        }

        let range = self.high - self.low;
        if range == 0.0 {
            return Err(Error::Domain(format!(
                "division by zero: high and low are both {}",
                self.high
            )));
        }

        let ratio = progress / range;
        if !ratio.is_finite() {
            return Err(Error::Domain(format!(
                "ratio of {progress} over range {range} is not finite"
            )));
        }

        let raw_fill = (bar_len as f64 * ratio).floor();
        if raw_fill < 0.0 {
            return Err(Error::Domain(format!(
                "negative fill count {raw_fill} for progress {progress}"
            )));
        }

        let fill_count = if raw_fill > bar_len as f64 {
            bar_len
        } else {
            raw_fill as usize
        };

        Ok((fill_count, bar_len - fill_count))
    }

    /// Return a fresh live-redraw handle bound to this bar.
    pub fn get_controller(&self) -> Result<DynamicBar<&ProgressBar>> {
        let line = self.line_output.acquire()?;
        debug!("Acquired dynamic bar line");
        Ok(DynamicBar::new(self, line))
    }

    /// Acquire a live-redraw handle holding the bar exclusively.
    ///
    /// The bar stays borrowed until the handle is finished or dropped, so a
    /// second scoped handle cannot be opened while one is live. The handle
    /// gives mutable access to the bar between renders.
    pub fn enter(&mut self) -> Result<DynamicBar<&mut ProgressBar>> {
        let line = self.line_output.acquire()?;
        debug!("Entered dynamic bar scope");
        Ok(DynamicBar::new(self, line))
    }

    /// Run `f` with a live-redraw handle, then force the final redraw.
    ///
    /// The line is released whether `f` succeeds or fails.
    pub fn scope<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut DynamicBar<&mut ProgressBar>) -> Result<T>,
    {
        let mut dynamic = self.enter()?;
        let result = f(&mut dynamic);
        dynamic.finish();
        result
    }
}

/// Append a repeated segment, wrapped in its color and a reset when colored.
fn push_segment(bar: &mut String, color: Option<&Color>, text: &str, count: usize, reset: &str) {
    if let Some(color) = color {
        bar.push_str(color.as_str());
    }

    bar.push_str(&text.repeat(count));

    // Uncolored segments emit no reset code.
    if color.is_some() {
        bar.push_str(reset);
    }
}
