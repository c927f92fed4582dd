//! Per-segment colors of a progress bar.
//!
//! A [`Palette`] holds one optional [`Color`] for each of the four
//! [`Slot`]s of a bar. Slots are always visited in the same order
//! (prefix, postfix, fill, empty), which keeps colorize and reset logic
//! deterministic.
//!
//! # Examples
//!
//! ```rust
//! use shanks::color::{fore, Palette, Slot};
//!
//! let palette = Palette::new(None, None, Some(fore::GREEN), Some("")).unwrap();
//! assert_eq!(palette.get(Slot::Fill).map(|c| c.as_str()), Some(fore::GREEN));
//! assert!(palette.get(Slot::Empty).is_none());
//!
//! assert!(Palette::new(Some("not a color"), None, None, None).is_err());
//! ```

use super::set::{Color, ColorSet};
use crate::error::Result;

use std::fmt;

/// One of the four colorable parts of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Prefix,
    Postfix,
    Fill,
    Empty,
}

impl Slot {
    /// Every slot, in iteration order.
    pub const ALL: [Slot; 4] = [Slot::Prefix, Slot::Postfix, Slot::Fill, Slot::Empty];

    /// Lowercase slot name.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Prefix => "prefix",
            Slot::Postfix => "postfix",
            Slot::Fill => "fill",
            Slot::Empty => "empty",
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::Prefix => 0,
            Slot::Postfix => 1,
            Slot::Fill => 2,
            Slot::Empty => 3,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors for the prefix, postfix, fill and empty segments.
///
/// The default palette has no color at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: [Option<Color>; 4],
}

impl Palette {
    /// Create a palette validated against the ANSI color set.
    ///
    /// Each argument is either absent, `""` (no color) or a known code.
    pub fn new(
        prefix: Option<&str>,
        postfix: Option<&str>,
        fill: Option<&str>,
        empty: Option<&str>,
    ) -> Result<Self> {
        Self::with_color_set(&ColorSet::ansi(), prefix, postfix, fill, empty)
    }

    /// Create a palette validated against `set`.
    pub fn with_color_set(
        set: &ColorSet,
        prefix: Option<&str>,
        postfix: Option<&str>,
        fill: Option<&str>,
        empty: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            colors: [
                set.parse_opt(prefix)?,
                set.parse_opt(postfix)?,
                set.parse_opt(fill)?,
                set.parse_opt(empty)?,
            ],
        })
    }

    /// Color of `slot`, if any.
    pub fn get(&self, slot: Slot) -> Option<&Color> {
        self.colors[slot.index()].as_ref()
    }

    /// Replace the color of `slot`.
    pub fn set(&mut self, slot: Slot, color: Option<Color>) {
        self.colors[slot.index()] = color;
    }

    /// Remove the color of `slot`.
    pub fn clear(&mut self, slot: Slot) {
        self.set(slot, None);
    }

    /// Return `true` if no slot has a color.
    pub fn is_empty(&self) -> bool {
        self.colors.iter().all(Option::is_none)
    }

    /// Check that every color of the palette is a member of `set`.
    ///
    /// A palette built against one set can be handed to settings using
    /// another; its colors must then be known to both.
    pub fn validate(&self, set: &ColorSet) -> Result<()> {
        for color in self.colors.iter().flatten() {
            set.parse(color.as_str())?;
        }
        Ok(())
    }

    /// Iterate over `(slot, color)` pairs in [`Slot::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Option<&Color>)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}
