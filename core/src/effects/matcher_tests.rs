//! Tests for rule matching
//!
//! Covers qualification, the exclusive threshold and substring aggregation.

use showbuff_types::{AnchorMode, BuffRule};

use super::instance::EffectInstance;
use super::matcher::{RenderableItem, count_matching, match_rules};

fn buff(name: &str) -> EffectInstance {
    EffectInstance::new(name, name)
}

fn rule(pattern: &str, label: &str, min_stacks: i32) -> BuffRule {
    BuffRule {
        min_stacks,
        ..BuffRule::new(pattern, label)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Qualification
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_single_presence_qualifies_with_zero_threshold() {
    let items = match_rules(&[buff("poison_dot")], &[rule("poison", "Poison", 0)]);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].count, 1);
    assert_eq!(items[0].text(), "Poison: 1");
}

#[test]
fn test_threshold_is_exclusive() {
    let rules = [rule("poison", "Poison", 0)];
    assert!(match_rules(&[], &rules).is_empty());
    assert_eq!(match_rules(&[buff("poison")], &rules).len(), 1);

    let rules = [rule("charge", "Charges", 2)];
    let two = [buff("frenzy_charge"), buff("power_charge")];
    assert!(match_rules(&two, &rules).is_empty());

    let three = [buff("frenzy_charge"), buff("power_charge"), buff("endurance_charge")];
    let items = match_rules(&three, &rules);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].count, 3);
}

#[test]
fn test_hidden_and_blank_rules_never_match() {
    let mut hidden = rule("poison", "Hidden", -1);
    hidden.visible = false;
    let blank = rule("   ", "Blank", -1);
    let empty = rule("", "Empty", -1);

    let live = [buff("poison"), buff("anything")];
    assert!(match_rules(&live, &[hidden, blank, empty]).is_empty());
}

#[test]
fn test_negative_threshold_shows_label_without_count() {
    let items = match_rules(&[], &[rule("aura", "Aura missing?", -1)]);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].count, 0);
    assert_eq!(items[0].text(), "Aura missing?");
}

// ─────────────────────────────────────────────────────────────────────────────
// Substring semantics
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_case_insensitive_substring() {
    assert_eq!(count_matching(&[buff("Ground_Fire_Aura")], "fire"), 1);
    assert_eq!(count_matching(&[buff("ground_fire_aura")], "FIRE"), 1);
    assert_eq!(count_matching(&[buff("ground_fire_aura")], "ice"), 0);
}

#[test]
fn test_pattern_aggregates_buff_family() {
    let live = [
        buff("fire_shield"),
        buff("ground_fire"),
        buff("ice_shield"),
        buff(""),
    ];
    assert_eq!(count_matching(&live, "fire"), 2);
    assert_eq!(count_matching(&live, "shield"), 2);
    assert_eq!(count_matching(&live, ""), 0);
}

#[test]
fn test_repeated_instances_each_count() {
    let live = [buff("bleeding"), buff("bleeding"), buff("bleeding")];
    let items = match_rules(&live, &[rule("bleed", "Bleed", 0)]);
    assert_eq!(items[0].count, 3);
}

// ─────────────────────────────────────────────────────────────────────────────
// Output shape
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_items_follow_rule_order_and_carry_style() {
    let mut absolute = rule("shock", "Shocked", 0);
    absolute.anchor = AnchorMode::Absolute;
    absolute.offset_x = 960;
    absolute.offset_y = 300;
    absolute.color = [255, 255, 0, 255];

    let mut aura = rule("aura_resists", "Purity", 0);
    aura.hide_count = true;

    let live = [buff("player_aura_resists"), buff("shocked")];
    let items = match_rules(&live, &[absolute, aura]);

    assert_eq!(
        items,
        vec![
            RenderableItem {
                label: "Shocked".to_string(),
                count: 1,
                color: [255, 255, 0, 255],
                anchor: AnchorMode::Absolute,
                offset_x: 960,
                offset_y: 300,
                hide_count: false,
            },
            RenderableItem {
                label: "Purity".to_string(),
                count: 1,
                color: [255, 255, 255, 255],
                anchor: AnchorMode::Head,
                offset_x: 0,
                offset_y: 0,
                hide_count: true,
            },
        ]
    );
    assert_eq!(items[1].text(), "Purity");
}

#[test]
fn test_match_is_idempotent() {
    let live = vec![buff("poison"), buff("Ground_Fire"), buff("poison")];
    let rules = vec![rule("poison", "P", 0), rule("fire", "F", 0), rule("x", "X", 5)];
    let live_before = live.clone();
    let rules_before = rules.clone();

    let first = match_rules(&live, &rules);
    let second = match_rules(&live, &rules);

    assert_eq!(first, second);
    assert_eq!(live, live_before);
    assert_eq!(rules, rules_before);
}
