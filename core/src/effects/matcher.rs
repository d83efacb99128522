//! Rule matching
//!
//! Turns the live buff list plus the configured rules into the indicators
//! that should be on screen this tick. A rule's count is the number of live
//! buffs whose name contains the rule's pattern, so one rule can aggregate a
//! whole family of related buffs (`"fire"` counts every fire variant).

use showbuff_types::formatting::format_indicator;
use showbuff_types::{AnchorMode, BuffRule, Rgba};

use super::EffectInstance;

/// A qualifying rule, ready for layout. Rebuilt every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableItem {
    pub label: String,
    pub count: usize,
    pub color: Rgba,
    pub anchor: AnchorMode,
    pub offset_x: i32,
    pub offset_y: i32,
    pub hide_count: bool,
}

impl RenderableItem {
    fn from_rule(rule: &BuffRule, count: usize) -> Self {
        Self {
            label: rule.display_label.clone(),
            count,
            color: rule.color,
            anchor: rule.anchor,
            offset_x: rule.offset_x,
            offset_y: rule.offset_y,
            hide_count: rule.hide_count,
        }
    }

    /// Text drawn on screen
    pub fn text(&self) -> String {
        format_indicator(&self.label, self.count, self.hide_count)
    }

    pub fn is_head_anchored(&self) -> bool {
        self.anchor == AnchorMode::Head
    }
}

/// Lowercased names of live buffs, computed once per tick
struct LiveNames(Vec<String>);

impl LiveNames {
    fn new(live: &[EffectInstance]) -> Self {
        Self(
            live.iter()
                .filter(|e| !e.name.is_empty())
                .map(EffectInstance::name_lower)
                .collect(),
        )
    }

    fn count_containing(&self, needle: &str) -> usize {
        self.0.iter().filter(|name| name.contains(needle)).count()
    }
}

/// Count live buffs whose name contains `pattern`, ignoring case.
///
/// A blank pattern counts nothing.
pub fn count_matching(live: &[EffectInstance], pattern: &str) -> usize {
    if pattern.trim().is_empty() {
        return 0;
    }
    LiveNames::new(live).count_containing(&pattern.to_lowercase())
}

/// Evaluate every rule against the live buffs.
///
/// Hidden rules and rules with a blank pattern are skipped. A rule qualifies
/// only when its count is strictly greater than `min_stacks`. Output order
/// follows rule order.
pub fn match_rules(live: &[EffectInstance], rules: &[BuffRule]) -> Vec<RenderableItem> {
    let names = LiveNames::new(live);

    rules
        .iter()
        .filter(|rule| rule.is_active())
        .filter_map(|rule| {
            let count = names.count_containing(&rule.name_pattern.to_lowercase());
            (count as i64 > i64::from(rule.min_stacks))
                .then(|| RenderableItem::from_rule(rule, count))
        })
        .collect()
}
