//! Rule store and editor
//!
//! Rules are edited by index from an immediate-mode settings UI that iterates
//! the list while the user clicks add/remove buttons. Edits are queued on a
//! [`RuleEditor`] during the pass and applied once it finishes, so indices
//! stay valid while iterating.

use showbuff_types::BuffRule;
use tracing::debug;

/// Ordered list of display rules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleStore {
    rules: Vec<BuffRule>,
}

impl RuleStore {
    pub fn new(rules: Vec<BuffRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[BuffRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BuffRule> {
        self.rules.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut BuffRule> {
        self.rules.get_mut(index)
    }

    pub fn into_rules(self) -> Vec<BuffRule> {
        self.rules
    }

    /// Append a rule with an empty pattern and a numbered placeholder label
    pub fn add_blank(&mut self) -> usize {
        let label = format!("Buff{}", self.rules.len() + 1);
        self.rules.push(BuffRule {
            display_label: label,
            ..BuffRule::default()
        });
        self.rules.len() - 1
    }

    /// Add a visible rule for a detected buff, unless a rule already uses
    /// exactly that name as its pattern. Returns `true` if added.
    pub fn add_from_buff(&mut self, name: &str, display_label: &str) -> bool {
        if self.contains_pattern(name) {
            return false;
        }
        debug!(name, "Adding rule from detected buff");
        self.rules.push(BuffRule::new(name, display_label));
        true
    }

    pub fn contains_pattern(&self, pattern: &str) -> bool {
        self.rules.iter().any(|r| r.name_pattern == pattern)
    }

    /// Remove the rule at `index`, shifting later rules down
    pub fn remove_at(&mut self, index: usize) -> Option<BuffRule> {
        (index < self.rules.len()).then(|| self.rules.remove(index))
    }

    /// Apply the edits queued during a UI pass
    pub fn apply(&mut self, editor: RuleEditor) {
        let RuleEditor {
            mut removals,
            additions,
        } = editor;

        removals.sort_unstable();
        removals.dedup();
        for index in removals.into_iter().rev() {
            self.remove_at(index);
        }
        for addition in additions {
            match addition {
                Addition::Blank => {
                    self.add_blank();
                }
                Addition::FromBuff { name, display_label } => {
                    self.add_from_buff(&name, &display_label);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Addition {
    Blank,
    FromBuff { name: String, display_label: String },
}

/// Edits collected while iterating the rule list
#[derive(Debug, Clone, Default)]
pub struct RuleEditor {
    removals: Vec<usize>,
    additions: Vec<Addition>,
}

impl RuleEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices refer to positions before any queued edit is applied
    pub fn remove(&mut self, index: usize) {
        self.removals.push(index);
    }

    pub fn add_blank(&mut self) {
        self.additions.push(Addition::Blank);
    }

    pub fn add_from_buff(&mut self, name: impl Into<String>, display_label: impl Into<String>) {
        self.additions.push(Addition::FromBuff {
            name: name.into(),
            display_label: display_label.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.additions.is_empty()
    }
}
