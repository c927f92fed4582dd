//! A progress bar bound to a redrawable terminal line.

use super::line::LineHandle;
use crate::bar::ProgressBar;
use crate::error::Result;
use crate::settings::{Colorize, RenderSettings};

use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use tracing::debug;

/// Live view of a [`ProgressBar`] on one terminal line.
///
/// [`ProgressBar::get_controller`] hands out a `DynamicBar<&ProgressBar>`;
/// [`ProgressBar::enter`] and [`ProgressBar::scope`] hand out a
/// `DynamicBar<&mut ProgressBar>`, through which the bar can be recolored or
/// its settings changed between renders.
///
/// The line is released exactly once: with a forced redraw on
/// [`finish`](DynamicBar::finish) or drop, or without one on
/// [`abandon`](DynamicBar::abandon).
pub struct DynamicBar<B> {
    bar: B,
    line: Box<dyn LineHandle>,
    released: bool,
}

impl<B: Borrow<ProgressBar>> DynamicBar<B> {
    pub(crate) fn new(bar: B, line: Box<dyn LineHandle>) -> Self {
        Self {
            bar,
            line,
            released: false,
        }
    }

    /// Render `progress` and show it on the line.
    pub fn render(&mut self, progress: f64) -> Result<()> {
        let text = self.bar.borrow().render(progress)?;
        self.line.set(&text);
        Ok(())
    }

    /// Show `text` on the line instead of a rendered bar.
    pub fn replace(&mut self, text: &str) {
        self.line.set(text);
    }

    /// The bar this handle renders.
    pub fn bar(&self) -> &ProgressBar {
        self.bar.borrow()
    }

    /// Force a final redraw and release the line.
    pub fn finish(mut self) {
        self.release(true);
    }

    /// Release the line without forcing a final redraw.
    pub fn abandon(mut self) {
        self.release(false);
    }
}

impl<B: BorrowMut<ProgressBar>> DynamicBar<B> {
    /// Mutable access to the bar; changes apply to the next render.
    pub fn bar_mut(&mut self) -> &mut ProgressBar {
        self.bar.borrow_mut()
    }

    /// Recolor the bar. See [`RenderSettings::colorize`].
    pub fn colorize(&mut self, request: impl Into<Colorize>) -> Result<()> {
        self.bar_mut().colorize(request)
    }

    /// Mutable access to the settings used by the next render.
    pub fn render_settings_mut(&mut self) -> &mut RenderSettings {
        self.bar_mut().render_settings_mut()
    }
}

impl<B> DynamicBar<B> {
    fn release(&mut self, forced: bool) {
        if self.released {
            return;
        }
        self.line.release(forced);
        self.released = true;
        debug!(forced, "Released dynamic bar line");
    }
}

impl<B> Drop for DynamicBar<B> {
    fn drop(&mut self) {
        self.release(true);
    }
}

impl<B: Borrow<ProgressBar>> fmt::Debug for DynamicBar<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicBar")
            .field("bar", self.bar.borrow())
            .field("released", &self.released)
            .finish()
    }
}
