use serde::{Deserialize, Serialize};

/// A status effect currently active on the player, as read from the host
///
/// This is a read-only snapshot; the host owns the underlying memory and
/// hands a fresh list over every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectInstance {
    /// Internal identifier (e.g. "player_aura_resists")
    pub name: String,

    /// Human readable name shown in the game UI
    #[serde(default)]
    pub display_label: String,

    #[serde(default)]
    pub stack_count: u32,

    /// Definition type tag. `None` when the host could not resolve the
    /// effect's definition; such effects are still matched but never listed
    /// in the discovery snapshot.
    #[serde(default)]
    pub definition_type: Option<i32>,
}

impl EffectInstance {
    pub fn new(name: impl Into<String>, display_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_label: display_label.into(),
            stack_count: 0,
            definition_type: Some(0),
        }
    }

    pub fn with_stacks(mut self, stacks: u32) -> Self {
        self.stack_count = stacks;
        self
    }

    pub fn with_definition_type(mut self, definition_type: Option<i32>) -> Self {
        self.definition_type = definition_type;
        self
    }

    /// Lowercased name used for all substring comparisons
    pub fn name_lower(&self) -> String {
        self.name.to_lowercase()
    }
}
