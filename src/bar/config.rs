//! Configuration structure and defaults for a progress bar.
//!
//! [`ProgressBarConfig`] is filled in by the
//! [`ProgressBarBuilder`](super::ProgressBarBuilder) and consumed when the
//! bar is built. Its defaults describe a ten segment `[##        ]` style
//! bar over the range `0..100`, without color, redrawing on stdout.

use crate::color::{ColorSet, Palette};
use crate::dynamic::{LineOutput, TerminalOutput};
use crate::settings::{RenderSettings, Segment};

use std::sync::Arc;

/// Configuration structure for a progress bar.
#[derive(Clone)]
pub struct ProgressBarConfig {
    /// Lowest value of the range.
    pub low: f64,
    /// Highest value of the range.
    pub high: f64,
    /// Text before the bar, optionally colored.
    pub prefix: Segment,
    /// Text after the bar, optionally colored.
    pub postfix: Segment,
    /// Text of a filled segment, optionally colored.
    pub fill: Segment,
    /// Text of an empty segment, optionally colored.
    pub empty: Segment,
    /// Number of segments.
    pub bar_len: usize,
    /// Explicit palette, winning over colors attached to segments.
    pub palette: Option<Palette>,
    /// Complete settings, winning over every segment and palette option.
    pub render_settings: Option<RenderSettings>,
    /// Known colors used to validate the segment colors and the palette.
    pub color_set: ColorSet,
    /// Source of redrawable lines for live rendering.
    pub line_output: Arc<dyn LineOutput>,
}

impl std::fmt::Debug for ProgressBarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBarConfig")
            .field("low", &self.low)
            .field("high", &self.high)
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("fill", &self.fill)
            .field("empty", &self.empty)
            .field("bar_len", &self.bar_len)
            .field("palette", &self.palette)
            .field("render_settings", &self.render_settings)
            .field("color_set", &self.color_set.len())
            .field("line_output", &"dyn LineOutput")
            .finish()
    }
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 100.0,
            prefix: "[".into(),
            postfix: "]".into(),
            fill: "#".into(),
            empty: " ".into(),
            bar_len: 10,
            palette: None,
            render_settings: None,
            color_set: ColorSet::ansi(),
            line_output: Arc::new(TerminalOutput::default()),
        }
    }
}
