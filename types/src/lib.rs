//! Shared configuration types for the ShowBuff overlay.
//!
//! Kept free of host and rendering dependencies so the settings surface,
//! the core matcher and the CLI all agree on one serialized format.

pub mod config;
pub mod formatting;
pub mod i18n;

pub use config::{AnchorMode, BuffRule, Language, OverlaySettings, Rgba};
pub use i18n::Text;
