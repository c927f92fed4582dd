//! Segment inputs: plain text or text with an attached color.
//!
//! A bar segment can be given in three interchangeable shapes, all of which
//! convert into a [`Segment`]:
//!
//! ```rust
//! use shanks::color::fore;
//! use shanks::{ColoredStr, Segment};
//!
//! let plain: Segment = "|".into();
//! let pair: Segment = ("|", fore::GREEN).into();
//! let wrapped: Segment = ColoredStr::new("|", fore::GREEN).into();
//!
//! assert_eq!(plain.into_parts(), ("|".to_string(), String::new()));
//! assert_eq!(pair.into_parts(), wrapped.into_parts());
//! ```

/// Text paired with a color code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredStr {
    pub text: String,
    pub color: String,
}

impl ColoredStr {
    /// Create a new [`ColoredStr`].
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}

/// A segment specification, resolved once into `(text, color)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text without color.
    Plain(String),
    /// A `(text, color)` tuple.
    Pair(String, String),
    /// A [`ColoredStr`] wrapper.
    Wrapped(ColoredStr),
}

impl Segment {
    /// Split into plain text and color code, `""` meaning no color.
    pub fn into_parts(self) -> (String, String) {
        match self {
            Segment::Plain(text) => (text, String::new()),
            Segment::Pair(text, color) => (text, color),
            Segment::Wrapped(ColoredStr { text, color }) => (text, color),
        }
    }
}

impl From<&str> for Segment {
    fn from(text: &str) -> Self {
        Segment::Plain(text.to_string())
    }
}

impl From<String> for Segment {
    fn from(text: String) -> Self {
        Segment::Plain(text)
    }
}

impl From<char> for Segment {
    fn from(c: char) -> Self {
        Segment::Plain(c.to_string())
    }
}

impl<T, C> From<(T, C)> for Segment
where
    T: Into<String>,
    C: Into<String>,
{
    fn from((text, color): (T, C)) -> Self {
        Segment::Pair(text.into(), color.into())
    }
}

impl From<ColoredStr> for Segment {
    fn from(colored: ColoredStr) -> Self {
        Segment::Wrapped(colored)
    }
}
