//! Segment texts, bar length and palette used by a render.
//!
//! # Examples
//!
//! ```rust
//! use shanks::color::{fore, Slot};
//! use shanks::{Colorize, RenderSettings};
//!
//! # fn main() -> shanks::Result<()> {
//! let mut settings = RenderSettings::new("[", "]", ("=", fore::GREEN), " ", 20, None)?;
//! assert_eq!(settings.fill(), "=");
//! assert!(settings.palette().get(Slot::Fill).is_some());
//!
//! settings.colorize(Colorize::slots().empty(fore::RED))?;
//! assert!(settings.palette().get(Slot::Fill).is_some());
//! assert!(settings.palette().get(Slot::Empty).is_some());
//! # Ok(())
//! # }
//! ```

use super::colorize::Colorize;
use super::segment::Segment;
use crate::color::{ColorSet, Palette, Slot};
use crate::error::{Error, Result};

use tracing::{debug, trace};

/// Render settings for [`ProgressBar::render`](crate::ProgressBar::render).
///
/// Text fields never carry color: colors given alongside segment text are
/// moved into the palette at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    prefix: String,
    postfix: String,
    fill: String,
    empty: String,
    bar_len: usize,
    palette: Palette,
    color_set: ColorSet,
}

impl Default for RenderSettings {
    /// `[`, `]`, `#` and a space, ten segments, no color.
    fn default() -> Self {
        Self {
            prefix: "[".to_string(),
            postfix: "]".to_string(),
            fill: "#".to_string(),
            empty: " ".to_string(),
            bar_len: 10,
            palette: Palette::default(),
            color_set: ColorSet::ansi(),
        }
    }
}

impl RenderSettings {
    /// Create settings validated against the ANSI color set.
    ///
    /// When `palette` is `None` the palette is built from the colors
    /// attached to the segments. An explicit palette is used as-is, but the
    /// segment texts are still stripped of their colors.
    pub fn new(
        prefix: impl Into<Segment>,
        postfix: impl Into<Segment>,
        fill: impl Into<Segment>,
        empty: impl Into<Segment>,
        bar_len: usize,
        palette: Option<Palette>,
    ) -> Result<Self> {
        Self::with_color_set(
            ColorSet::ansi(),
            prefix,
            postfix,
            fill,
            empty,
            bar_len,
            palette,
        )
    }

    /// Create settings validated against `color_set`.
    pub fn with_color_set(
        color_set: ColorSet,
        prefix: impl Into<Segment>,
        postfix: impl Into<Segment>,
        fill: impl Into<Segment>,
        empty: impl Into<Segment>,
        bar_len: usize,
        palette: Option<Palette>,
    ) -> Result<Self> {
        check_bar_len(bar_len)?;

        let (prefix, prefix_color) = prefix.into().into_parts();
        let (postfix, postfix_color) = postfix.into().into_parts();
        let (fill, fill_color) = fill.into().into_parts();
        let (empty, empty_color) = empty.into().into_parts();

        // Embedded colors are validated even when an explicit palette wins.
        let embedded = Palette::with_color_set(
            &color_set,
            Some(prefix_color.as_str()),
            Some(postfix_color.as_str()),
            Some(fill_color.as_str()),
            Some(empty_color.as_str()),
        )?;

        let palette = match palette {
            Some(palette) => {
                palette.validate(&color_set)?;
                if !embedded.is_empty() {
                    debug!("Explicit palette overrides colors embedded in segments");
                }
                palette
            }
            None => embedded,
        };

        trace!(%prefix, %postfix, %fill, %empty, bar_len, "Created render settings");

        Ok(Self {
            prefix,
            postfix,
            fill,
            empty,
            bar_len,
            palette,
            color_set,
        })
    }

    /// Text written before the bar.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text written after the bar.
    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    /// Text repeated for each filled segment.
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Text repeated for each empty segment.
    pub fn empty(&self) -> &str {
        &self.empty
    }

    /// Number of segments in the bar.
    pub fn bar_len(&self) -> usize {
        self.bar_len
    }

    /// Current palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Color set the palette is validated against.
    pub fn color_set(&self) -> &ColorSet {
        &self.color_set
    }

    /// Replace the prefix text.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Replace the postfix text.
    pub fn set_postfix(&mut self, postfix: impl Into<String>) {
        self.postfix = postfix.into();
    }

    /// Replace the fill text.
    pub fn set_fill(&mut self, fill: impl Into<String>) {
        self.fill = fill.into();
    }

    /// Replace the empty text.
    pub fn set_empty(&mut self, empty: impl Into<String>) {
        self.empty = empty.into();
    }

    /// Change the number of segments.
    pub fn set_bar_len(&mut self, bar_len: usize) -> Result<()> {
        check_bar_len(bar_len)?;
        self.bar_len = bar_len;
        Ok(())
    }

    /// Recolor the palette.
    ///
    /// Without `reset`, slots that receive no color keep their current one.
    /// With `reset`, every slot is cleared before the new colors apply. On
    /// error the palette is left untouched.
    pub fn colorize(&mut self, request: impl Into<Colorize>) -> Result<()> {
        let request = request.into();
        let reset = request.is_reset();
        let incoming = request.into_palette(&self.color_set)?;

        let mut palette = if reset {
            Palette::default()
        } else {
            self.palette.clone()
        };

        for (slot, color) in incoming.iter() {
            if let Some(color) = color {
                palette.set(slot, Some(color.clone()));
            }
        }

        debug!(reset, "Colorized render settings");
        self.palette = palette;
        Ok(())
    }

    /// Remove the colors of `slots`.
    pub fn reset_color(&mut self, slots: &[Slot]) {
        for slot in slots {
            self.palette.clear(*slot);
        }
    }

    /// Remove every color.
    pub fn reset_all_colors(&mut self) {
        self.reset_color(&Slot::ALL);
    }
}

fn check_bar_len(bar_len: usize) -> Result<()> {
    if bar_len == 0 {
        return Err(Error::InvalidBarLength(bar_len));
    }
    Ok(())
}
