use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use shanks::color::{fore, Palette, Slot};
use shanks::{Error, LineHandle, LineOutput, ProgressBar, RenderSettings, Result};

// Common test constants
pub const UNKNOWN_COLOR: &str = "not-a-color";
pub const TEST_BAR_LEN: usize = 10;

// === Bar Creation Helpers ===

/// Creates a `[##        ]` style bar over `0..high`
pub fn create_test_bar(high: f64) -> ProgressBar {
    ProgressBar::builder()
        .high(high)
        .build()
        .expect("Failed to create test bar")
}

/// Creates a bar drawing into the given recording output
pub fn create_recorded_bar(output: &RecordingOutput) -> ProgressBar {
    ProgressBar::builder()
        .high(50.0)
        .line_output(output.clone())
        .build()
        .expect("Failed to create recorded bar")
}

/// Creates uncolored default-looking settings
pub fn create_plain_settings(bar_len: usize) -> RenderSettings {
    RenderSettings::new("[", "]", "#", " ", bar_len, None).expect("Failed to create settings")
}

/// Creates a palette coloring only the fill and empty segments
pub fn create_fill_empty_palette() -> Palette {
    Palette::new(None, None, Some(fore::GREEN), Some(fore::RED)).expect("Failed to create palette")
}

// === Assertion Helpers ===

/// Asserts that the color code of `slot` equals `expected`
pub fn assert_slot_color(palette: &Palette, slot: Slot, expected: Option<&str>) {
    assert_eq!(
        palette.get(slot).map(|c| c.as_str()),
        expected,
        "Unexpected color for slot {}",
        slot
    );
}

/// Asserts that a result failed with an invalid color error
pub fn assert_invalid_color<T: std::fmt::Debug>(result: Result<T>) {
    match result {
        Err(Error::InvalidColor(code)) => assert_eq!(code, UNKNOWN_COLOR),
        other => panic!("Expected InvalidColor, got {:?}", other),
    }
}

/// Asserts that a result failed with a domain error
pub fn assert_domain_error<T: std::fmt::Debug>(result: Result<T>) {
    assert!(
        matches!(result, Err(Error::Domain(_))),
        "Expected Domain error, got {:?}",
        result
    );
}

/// Visible width of a rendered bar, ignoring color codes
pub fn visible_width(rendered: &str) -> usize {
    console::measure_text_width(rendered)
}

// === Line Output Helpers ===

/// What happened to a recorded line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Acquire(usize),
    Set(usize, String),
    Release(usize, bool),
}

/// A line output recording every call in memory
#[derive(Clone, Default)]
pub struct RecordingOutput {
    events: Arc<Mutex<Vec<LineEvent>>>,
    next_id: Arc<AtomicUsize>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far
    pub fn events(&self) -> Vec<LineEvent> {
        self.events.lock().expect("Poisoned event log").clone()
    }

    /// Number of releases recorded for line `id`
    pub fn release_count(&self, id: usize) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, LineEvent::Release(line, _) if *line == id))
            .count()
    }

    /// Last text set on line `id`
    pub fn last_text(&self, id: usize) -> Option<String> {
        self.events().into_iter().rev().find_map(|e| match e {
            LineEvent::Set(line, text) if line == id => Some(text),
            _ => None,
        })
    }
}

impl LineOutput for RecordingOutput {
    fn acquire(&self) -> Result<Box<dyn LineHandle>> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.events
            .lock()
            .expect("Poisoned event log")
            .push(LineEvent::Acquire(id));
        Ok(Box::new(RecordingLine {
            id,
            events: self.events.clone(),
        }))
    }
}

struct RecordingLine {
    id: usize,
    events: Arc<Mutex<Vec<LineEvent>>>,
}

impl LineHandle for RecordingLine {
    fn set(&mut self, text: &str) {
        self.events
            .lock()
            .expect("Poisoned event log")
            .push(LineEvent::Set(self.id, text.to_string()));
    }

    fn release(&mut self, forced: bool) {
        self.events
            .lock()
            .expect("Poisoned event log")
            .push(LineEvent::Release(self.id, forced));
    }
}

/// A line output that never provides a line
pub struct FailingOutput;

impl LineOutput for FailingOutput {
    fn acquire(&self) -> Result<Box<dyn LineHandle>> {
        Err(Error::Output("no terminal".to_string()))
    }
}
