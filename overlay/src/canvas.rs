//! Drawing surface abstraction
//!
//! The host's graphics layer measures and paints text; the overlay only
//! needs these three primitives. [`RecordingCanvas`] accumulates draw
//! commands instead of painting, for hosts that batch their draws and for
//! tests.

use showbuff_core::Vec2;
use showbuff_types::Rgba;

/// Text measurement at a given text scale
pub trait TextMeasure {
    /// Pixel extent of `text` when drawn at `scale`
    fn measure_text(&mut self, text: &str, scale: f32) -> Vec2;
}

/// Paint primitives provided by the host
pub trait Canvas: TextMeasure {
    /// Draw `text` with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Rgba, scale: f32);

    /// Fill the rectangle spanned by `min` and `max`
    fn draw_box(&mut self, min: Vec2, max: Vec2, color: Rgba);
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording canvas
// ─────────────────────────────────────────────────────────────────────────────

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Text {
        text: String,
        pos: Vec2,
        color: Rgba,
        scale: f32,
    },
    Box {
        min: Vec2,
        max: Vec2,
        color: Rgba,
    },
}

const DEFAULT_GLYPH_WIDTH: f32 = 8.0;
const DEFAULT_GLYPH_HEIGHT: f32 = 16.0;

/// Canvas that records draw calls and measures text with fixed glyph metrics
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCmd>,
    glyph_width: f32,
    glyph_height: f32,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::with_metrics(DEFAULT_GLYPH_WIDTH, DEFAULT_GLYPH_HEIGHT)
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monospace metrics at scale 1.0
    pub fn with_metrics(glyph_width: f32, glyph_height: f32) -> Self {
        Self {
            commands: Vec::new(),
            glyph_width,
            glyph_height,
        }
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Take the recorded commands, leaving the canvas empty
    pub fn take_commands(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    /// Only the text commands, in draw order
    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, pos, .. } => Some((text.as_str(), *pos)),
            DrawCmd::Box { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl TextMeasure for RecordingCanvas {
    fn measure_text(&mut self, text: &str, scale: f32) -> Vec2 {
        let chars = text.chars().count() as f32;
        Vec2::new(
            chars * self.glyph_width * scale,
            self.glyph_height * scale,
        )
    }
}

impl Canvas for RecordingCanvas {
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Rgba, scale: f32) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
            color,
            scale,
        });
    }

    fn draw_box(&mut self, min: Vec2, max: Vec2, color: Rgba) {
        self.commands.push(DrawCmd::Box { min, max, color });
    }
}
