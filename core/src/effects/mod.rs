//! Buff matching system
//!
//! This module provides:
//! - **Instances**: Buffs read from the player each tick
//! - **Matcher**: Qualifies configured rules against the live buffs
//! - **Snapshot**: Deduplicated discovery list with change detection and freeze
//! - **Classifier / Discovery**: Harmful/beneficial tagging, search and sort
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 BuffRule (user settings, TOML)                   │
//! │  "Count buffs containing 'frenzy_charge', show if > 0, red"     │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                 Vec<EffectInstance> (host, per tick)
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 RenderableItem (per tick)                        │
//! │  "Frenzy: 3, red, above head, +0/+0"                            │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                      Overlay layout
//! ```

mod classifier;
mod discovery;
mod instance;
mod matcher;
mod snapshot;

#[cfg(test)]
mod matcher_tests;

pub use classifier::{EffectClass, classify, is_beneficial_ground, is_harmful};
pub use discovery::{DiscoveryQuery, DiscoveryRow, SortMode};
pub use instance::EffectInstance;
pub use matcher::{RenderableItem, count_matching, match_rules};
pub use snapshot::{SnapshotCache, SnapshotEntry};
