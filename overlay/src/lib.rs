//! ShowBuff overlay plugin
//!
//! Lays out the matched buff indicators and drives them from the host's
//! render callback. The host supplies the player, the camera projection and
//! a [`Canvas`] to paint on.

pub mod canvas;
pub mod layout;
pub mod plugin;

#[cfg(test)]
mod plugin_tests;

pub use canvas::{Canvas, DrawCmd, RecordingCanvas, TextMeasure};
pub use layout::{LayoutConfig, PlacedText, layout, paint};
pub use plugin::{Plugin, ShowBuffPlugin, TickContext, TickOutcome};
