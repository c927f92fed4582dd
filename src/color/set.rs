//! The closed set of color codes a palette may hold.
//!
//! A [`ColorSet`] answers two questions for the rest of the crate: is a
//! candidate code a known color, and which code resets all styling. The
//! default set is the standard ANSI one, but any set of codes can be
//! injected so that rendering is not tied to a single styling library.
//!
//! # Examples
//!
//! ```rust
//! use shanks::color::{fore, ColorSet};
//!
//! let set = ColorSet::ansi();
//! assert!(set.contains(fore::GREEN));
//! assert!(!set.contains("green"));
//! assert_eq!(set.parse("").unwrap(), None);
//! assert!(set.parse("green").is_err());
//! ```

use crate::error::{Error, Result};

use std::collections::BTreeSet;
use std::fmt;

/// Foreground color codes.
pub mod fore {
    pub const BLACK: &str = "\x1b[30m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";
    pub const RESET: &str = "\x1b[39m";
    pub const LIGHTBLACK: &str = "\x1b[90m";
    pub const LIGHTRED: &str = "\x1b[91m";
    pub const LIGHTGREEN: &str = "\x1b[92m";
    pub const LIGHTYELLOW: &str = "\x1b[93m";
    pub const LIGHTBLUE: &str = "\x1b[94m";
    pub const LIGHTMAGENTA: &str = "\x1b[95m";
    pub const LIGHTCYAN: &str = "\x1b[96m";
    pub const LIGHTWHITE: &str = "\x1b[97m";

    pub(crate) const ALL: [&str; 17] = [
        BLACK,
        RED,
        GREEN,
        YELLOW,
        BLUE,
        MAGENTA,
        CYAN,
        WHITE,
        RESET,
        LIGHTBLACK,
        LIGHTRED,
        LIGHTGREEN,
        LIGHTYELLOW,
        LIGHTBLUE,
        LIGHTMAGENTA,
        LIGHTCYAN,
        LIGHTWHITE,
    ];
}

/// Background color codes.
pub mod back {
    pub const BLACK: &str = "\x1b[40m";
    pub const RED: &str = "\x1b[41m";
    pub const GREEN: &str = "\x1b[42m";
    pub const YELLOW: &str = "\x1b[43m";
    pub const BLUE: &str = "\x1b[44m";
    pub const MAGENTA: &str = "\x1b[45m";
    pub const CYAN: &str = "\x1b[46m";
    pub const WHITE: &str = "\x1b[47m";
    pub const RESET: &str = "\x1b[49m";
    pub const LIGHTBLACK: &str = "\x1b[100m";
    pub const LIGHTRED: &str = "\x1b[101m";
    pub const LIGHTGREEN: &str = "\x1b[102m";
    pub const LIGHTYELLOW: &str = "\x1b[103m";
    pub const LIGHTBLUE: &str = "\x1b[104m";
    pub const LIGHTMAGENTA: &str = "\x1b[105m";
    pub const LIGHTCYAN: &str = "\x1b[106m";
    pub const LIGHTWHITE: &str = "\x1b[107m";

    pub(crate) const ALL: [&str; 17] = [
        BLACK,
        RED,
        GREEN,
        YELLOW,
        BLUE,
        MAGENTA,
        CYAN,
        WHITE,
        RESET,
        LIGHTBLACK,
        LIGHTRED,
        LIGHTGREEN,
        LIGHTYELLOW,
        LIGHTBLUE,
        LIGHTMAGENTA,
        LIGHTCYAN,
        LIGHTWHITE,
    ];
}

/// Style codes.
pub mod style {
    /// Reset every color and style attribute.
    pub const RESET_ALL: &str = "\x1b[0m";
}

/// A validated color code.
///
/// A `Color` can only be obtained through [`ColorSet::parse`], so every
/// value held by a [`Palette`](crate::Palette) is a member of the set it was
/// validated against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// The raw code, ready to be written to a terminal.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A closed set of known color codes plus the code that resets styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSet {
    /// Known color codes.
    codes: BTreeSet<String>,
    /// Code emitted after a colored segment.
    reset: String,
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::ansi()
    }
}

impl ColorSet {
    /// Create a set from arbitrary codes and a reset code.
    ///
    /// The empty string is never stored as a member: it always means
    /// "no color".
    pub fn new<I, S>(codes: I, reset: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(Into::into)
                .filter(|code: &String| !code.is_empty())
                .collect(),
            reset: reset.into(),
        }
    }

    /// The standard ANSI foreground and background colors.
    pub fn ansi() -> Self {
        Self::new(
            fore::ALL.iter().chain(back::ALL.iter()).copied(),
            style::RESET_ALL,
        )
    }

    /// Return `true` if `code` is a known color.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// The code that resets all styling.
    pub fn reset(&self) -> &str {
        &self.reset
    }

    /// Number of known color codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Return `true` if the set knows no color at all.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Validate a candidate code.
    ///
    /// `""` means "no color" and yields `Ok(None)`. A known code yields
    /// `Ok(Some(color))`, anything else fails with [`Error::InvalidColor`].
    pub fn parse(&self, code: &str) -> Result<Option<Color>> {
        if code.is_empty() {
            return Ok(None);
        }

        if !self.contains(code) {
            return Err(Error::InvalidColor(code.to_string()));
        }

        Ok(Some(Color(code.to_string())))
    }

    /// Validate an optional candidate code, `None` meaning "no color".
    pub fn parse_opt(&self, code: Option<&str>) -> Result<Option<Color>> {
        match code {
            Some(code) => self.parse(code),
            None => Ok(None),
        }
    }
}
