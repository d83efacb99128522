//! Indicator layout
//!
//! Head-anchored indicators stack downward from the head position, one line
//! per indicator; absolute indicators sit at their configured screen
//! coordinates. Every indicator is centered on its anchor point.

use showbuff_core::{RenderableItem, Vec2};
use showbuff_types::{OverlaySettings, Rgba};

use crate::canvas::{Canvas, TextMeasure};

/// Head-stack line height at font scale 1.0
pub const BASE_LINE_HEIGHT: f32 = 20.0;

const BACKGROUND_PAD_X: f32 = 5.0;
const BACKGROUND_PAD_Y: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub font_scale: f32,
    /// Background box color, `None` to draw text only
    pub background: Option<Rgba>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_scale: 1.0,
            background: None,
        }
    }
}

impl LayoutConfig {
    pub fn from_settings(settings: &OverlaySettings) -> Self {
        Self {
            font_scale: settings.font_scale,
            background: settings
                .show_background
                .then_some(settings.background_color),
        }
    }

    pub fn line_height(&self) -> f32 {
        BASE_LINE_HEIGHT * self.font_scale
    }
}

/// Filled rectangle behind an indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    pub min: Vec2,
    pub max: Vec2,
    pub color: Rgba,
}

/// A positioned indicator
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    /// Top-left corner of the text
    pub position: Vec2,
    pub size: Vec2,
    pub color: Rgba,
    pub background: Option<Background>,
}

impl PlacedText {
    /// Center point the text was laid out around
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.position.x + self.size.x / 2.0,
            self.position.y + self.size.y / 2.0,
        )
    }
}

/// Position every item.
///
/// Head-anchored items come first, then absolute ones; within each group the
/// match order is kept. The head cursor starts at `head.y` and advances one
/// line after each head-anchored item.
pub fn layout<M: TextMeasure + ?Sized>(
    head: Vec2,
    items: &[RenderableItem],
    config: &LayoutConfig,
    measure: &mut M,
) -> Vec<PlacedText> {
    let (head_items, absolute_items): (Vec<&RenderableItem>, Vec<&RenderableItem>) =
        items.iter().partition(|item| item.is_head_anchored());

    let mut placed = Vec::with_capacity(items.len());
    let mut cursor_y = head.y;

    for item in head_items.into_iter().chain(absolute_items) {
        let anchor = if item.is_head_anchored() {
            Vec2::new(
                head.x + item.offset_x as f32,
                cursor_y + item.offset_y as f32,
            )
        } else {
            Vec2::new(item.offset_x as f32, item.offset_y as f32)
        };

        let text = item.text();
        let size = measure.measure_text(&text, config.font_scale);
        let position = Vec2::new(anchor.x - size.x / 2.0, anchor.y - size.y / 2.0);

        let background = config.background.map(|color| Background {
            min: Vec2::new(position.x - BACKGROUND_PAD_X, position.y - BACKGROUND_PAD_Y),
            max: Vec2::new(
                position.x + size.x + BACKGROUND_PAD_X,
                position.y + size.y + BACKGROUND_PAD_Y,
            ),
            color,
        });

        placed.push(PlacedText {
            text,
            position,
            size,
            color: item.color,
            background,
        });

        if item.is_head_anchored() {
            cursor_y += config.line_height();
        }
    }

    placed
}

/// Draw laid-out indicators, each background before its text
pub fn paint<C: Canvas + ?Sized>(placed: &[PlacedText], font_scale: f32, canvas: &mut C) {
    for item in placed {
        if let Some(bg) = &item.background {
            canvas.draw_box(bg.min, bg.max, bg.color);
        }
        canvas.draw_text(&item.text, item.position, item.color, font_scale);
    }
}
