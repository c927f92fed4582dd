//! Recoloring requests for [`RenderSettings::colorize`].
//!
//! [`RenderSettings::colorize`]: crate::RenderSettings::colorize

use crate::color::{ColorSet, Palette};
use crate::error::Result;

/// A request to recolor some or all slots of a palette.
///
/// There are two ways to build one: hand over a whole replacement
/// [`Palette`] with [`Colorize::palette`], or name individual slot colors
/// with [`Colorize::slots`], which returns a [`SlotColors`] builder.
///
/// By default only the slots that receive a non-empty color change and the
/// others keep their current color. With `reset` set, every slot is cleared
/// first.
///
/// ```rust
/// use shanks::color::fore;
/// use shanks::Colorize;
///
/// let request = Colorize::slots().fill(fore::GREEN).empty(fore::RED);
/// let reset_everything = Colorize::slots().fill(fore::BLUE).reset(true);
/// ```
#[derive(Debug, Clone)]
pub struct Colorize {
    source: Source,
    reset: bool,
}

#[derive(Debug, Clone)]
enum Source {
    Palette(Palette),
    Slots(SlotColors),
}

impl Colorize {
    /// Recolor from individual slot colors.
    pub fn slots() -> SlotColors {
        SlotColors::default()
    }

    /// Recolor from a whole palette.
    pub fn palette(palette: Palette) -> Self {
        Self {
            source: Source::Palette(palette),
            reset: false,
        }
    }

    /// Clear every slot before applying the new colors.
    pub fn reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    pub(crate) fn is_reset(&self) -> bool {
        self.reset
    }

    /// Validate the requested colors against `set` into a palette.
    pub(crate) fn into_palette(self, set: &ColorSet) -> Result<Palette> {
        match self.source {
            Source::Palette(palette) => {
                palette.validate(set)?;
                Ok(palette)
            }
            Source::Slots(slots) => Palette::with_color_set(
                set,
                slots.prefix.as_deref(),
                slots.postfix.as_deref(),
                slots.fill.as_deref(),
                slots.empty.as_deref(),
            ),
        }
    }
}

impl From<Palette> for Colorize {
    fn from(palette: Palette) -> Self {
        Colorize::palette(palette)
    }
}

/// Individual slot colors for a [`Colorize`] request.
#[derive(Debug, Clone, Default)]
pub struct SlotColors {
    prefix: Option<String>,
    postfix: Option<String>,
    fill: Option<String>,
    empty: Option<String>,
    reset: bool,
}

impl SlotColors {
    /// Set the prefix color.
    pub fn prefix(mut self, color: impl Into<String>) -> Self {
        self.prefix = Some(color.into());
        self
    }

    /// Set the postfix color.
    pub fn postfix(mut self, color: impl Into<String>) -> Self {
        self.postfix = Some(color.into());
        self
    }

    /// Set the fill color.
    pub fn fill(mut self, color: impl Into<String>) -> Self {
        self.fill = Some(color.into());
        self
    }

    /// Set the empty color.
    pub fn empty(mut self, color: impl Into<String>) -> Self {
        self.empty = Some(color.into());
        self
    }

    /// Clear every slot before applying the new colors.
    pub fn reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }
}

impl From<SlotColors> for Colorize {
    fn from(slots: SlotColors) -> Self {
        let reset = slots.reset;
        Colorize {
            source: Source::Slots(slots),
            reset,
        }
    }
}
