//! Overlay configuration types
//!
//! These are the records the host persists and the settings surface edits:
//! one [`OverlaySettings`] holding the global toggles plus the ordered list of
//! [`BuffRule`]s. Every field has a serde default so partially written files
//! still load.

use serde::{Deserialize, Serialize};

/// RGBA color, one byte per channel
pub type Rgba = [u8; 4];

// ─────────────────────────────────────────────────────────────────────────────
// Bounds (shared by the settings UI sliders and sanitization)
// ─────────────────────────────────────────────────────────────────────────────

pub const OFFSET_MIN: i32 = -1500;
pub const OFFSET_MAX: i32 = 1500;
pub const MIN_STACKS_MIN: i32 = 0;
pub const MIN_STACKS_MAX: i32 = 100;
pub const FONT_SCALE_MIN: f32 = 0.5;
pub const FONT_SCALE_MAX: f32 = 4.0;
pub const FONT_SCALE_DEFAULT: f32 = 1.0;
pub const HEIGHT_OFFSET_DEFAULT: f32 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Buff rules
// ─────────────────────────────────────────────────────────────────────────────

/// Where a matched indicator is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorMode {
    /// Stacked above the character; offsets are relative to the head position
    #[default]
    Head,
    /// Fixed screen coordinates; offsets are the literal position
    Absolute,
}

/// A user-authored display rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuffRule {
    /// Case-insensitive substring matched against live buff names
    pub name_pattern: String,

    /// Text shown on screen
    pub display_label: String,

    /// Exclusive threshold: the rule shows only when the match count exceeds it
    pub min_stacks: i32,

    pub color: Rgba,

    pub anchor: AnchorMode,

    /// Head mode: offset from the head cursor. Absolute mode: screen position.
    pub offset_x: i32,
    pub offset_y: i32,

    /// Show the label without the count
    pub hide_count: bool,

    /// Whether the rule participates in matching
    pub visible: bool,
}

impl Default for BuffRule {
    fn default() -> Self {
        Self {
            name_pattern: String::new(),
            display_label: String::new(),
            min_stacks: 0,
            color: [255, 255, 255, 255],
            anchor: AnchorMode::Head,
            offset_x: 0,
            offset_y: 0,
            hide_count: false,
            visible: true,
        }
    }
}

impl BuffRule {
    /// Create a visible rule with default styling
    pub fn new(name_pattern: impl Into<String>, display_label: impl Into<String>) -> Self {
        Self {
            name_pattern: name_pattern.into(),
            display_label: display_label.into(),
            ..Self::default()
        }
    }

    /// A blank pattern never matches anything
    pub fn has_blank_pattern(&self) -> bool {
        self.name_pattern.trim().is_empty()
    }

    /// Whether the matcher should consider this rule at all
    pub fn is_active(&self) -> bool {
        self.visible && !self.has_blank_pattern()
    }

    /// Clamp numeric fields into the ranges the settings surface allows
    pub fn sanitize(&mut self) {
        self.min_stacks = self.min_stacks.clamp(MIN_STACKS_MIN, MIN_STACKS_MAX);
        self.offset_x = self.offset_x.clamp(OFFSET_MIN, OFFSET_MAX);
        self.offset_y = self.offset_y.clamp(OFFSET_MIN, OFFSET_MAX);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Global settings
// ─────────────────────────────────────────────────────────────────────────────

/// UI language for labels and classification tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Russian,
}

/// Top-level plugin settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub enabled: bool,
    pub show_in_hideout: bool,

    /// Stop refreshing the discovery list
    pub freeze_list: bool,
    pub show_discovery_window: bool,

    /// Text scale multiplier, also scales the head-stack line height
    pub font_scale: f32,

    /// Pixels the head anchor is raised above the projected character position
    pub height_offset: f32,

    pub show_background: bool,
    pub background_color: Rgba,

    pub language: Language,

    /// Ordered display rules (order matters for editing only)
    #[serde(rename = "rule")]
    pub rules: Vec<BuffRule>,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_in_hideout: false,
            freeze_list: false,
            show_discovery_window: false,
            font_scale: FONT_SCALE_DEFAULT,
            height_offset: HEIGHT_OFFSET_DEFAULT,
            show_background: true,
            background_color: [0, 0, 0, 180],
            language: Language::English,
            rules: Vec::new(),
        }
    }
}

impl OverlaySettings {
    /// Clamp global and per-rule values into their allowed ranges
    pub fn sanitize(&mut self) {
        if !self.font_scale.is_finite() {
            self.font_scale = FONT_SCALE_DEFAULT;
        }
        self.font_scale = self.font_scale.clamp(FONT_SCALE_MIN, FONT_SCALE_MAX);
        if !self.height_offset.is_finite() {
            self.height_offset = HEIGHT_OFFSET_DEFAULT;
        }
        for rule in &mut self.rules {
            rule.sanitize();
        }
    }
}
