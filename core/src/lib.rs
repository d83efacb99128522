pub mod config;
pub mod effects;
pub mod host;
pub mod rules;
pub mod throttle;

// Re-exports for convenience
pub use effects::{
    DiscoveryQuery, DiscoveryRow, EffectClass, EffectInstance, RenderableItem, SnapshotCache,
    SortMode, classify, match_rules,
};
pub use host::{HostError, PlayerSource, Projector, Vec2, Vec3};
pub use rules::{RuleEditor, RuleStore};
pub use throttle::LogThrottle;
