//! Redrawable terminal lines.
//!
//! The live-redraw feature only needs three things from a terminal: a way
//! to acquire a line, a way to replace its content, and a way to flush and
//! give it up. [`LineOutput`] and [`LineHandle`] describe exactly that, and
//! [`TerminalOutput`] implements them on top of `indicatif`.

use crate::error::{Error, Result};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::trace;

/// Template showing nothing but the line content.
const LINE_TEMPLATE: &str = "{msg}";

/// Source of redrawable lines.
pub trait LineOutput: Send + Sync {
    /// Acquire a fresh line.
    fn acquire(&self) -> Result<Box<dyn LineHandle>>;
}

/// One redrawable line.
pub trait LineHandle: Send {
    /// Replace the content of the line. The new content need not be drawn
    /// immediately.
    fn set(&mut self, text: &str);

    /// Flush pending content and give up the line.
    ///
    /// With `forced`, the last content is drawn even if a redraw is not due.
    fn release(&mut self, forced: bool);
}

/// Where a [`TerminalOutput`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
    Hidden,
}

/// [`LineOutput`] drawing message-only `indicatif` bars.
#[derive(Debug, Clone, Default)]
pub struct TerminalOutput {
    target: Target,
}

impl TerminalOutput {
    /// Draw to `target`.
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    /// Draw nowhere.
    pub fn hidden() -> Self {
        Self::new(Target::Hidden)
    }

    /// Drawing target.
    pub fn target(&self) -> Target {
        self.target
    }

    fn draw_target(&self) -> ProgressDrawTarget {
        match self.target {
            Target::Stdout => ProgressDrawTarget::stdout(),
            Target::Stderr => ProgressDrawTarget::stderr(),
            Target::Hidden => ProgressDrawTarget::hidden(),
        }
    }
}

impl LineOutput for TerminalOutput {
    fn acquire(&self) -> Result<Box<dyn LineHandle>> {
        let style = ProgressStyle::with_template(LINE_TEMPLATE)
            .map_err(|e| Error::Output(e.to_string()))?;
        let bar = ProgressBar::with_draw_target(None, self.draw_target()).with_style(style);

        trace!(draw_target = ?self.target, "Acquired terminal line");
        Ok(Box::new(TerminalLine { bar }))
    }
}

/// A line backed by an `indicatif` progress bar.
struct TerminalLine {
    bar: ProgressBar,
}

impl LineHandle for TerminalLine {
    fn set(&mut self, text: &str) {
        self.bar.set_message(text.to_string());
    }

    fn release(&mut self, forced: bool) {
        if forced {
            self.bar.finish();
        } else {
            self.bar.abandon();
        }
    }
}
