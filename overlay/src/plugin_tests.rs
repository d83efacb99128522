//! Tests for the plugin tick
//!
//! Drives full ticks against a fake player and projector and inspects what
//! landed on a recording canvas.

use showbuff_core::{EffectInstance, HostError, PlayerSource, Projector, RuleEditor, Vec2, Vec3};
use showbuff_types::{AnchorMode, BuffRule, OverlaySettings};

use crate::canvas::{DrawCmd, RecordingCanvas};
use crate::plugin::{Plugin, ShowBuffPlugin, TickContext, TickOutcome};

struct FakePlayer {
    valid: bool,
    position: Vec3,
    buffs: Result<Vec<EffectInstance>, &'static str>,
}

impl FakePlayer {
    fn with_buffs(names: &[&str]) -> Self {
        Self {
            valid: true,
            position: Vec3::new(100.0, 200.0, 0.0),
            buffs: Ok(names.iter().map(|n| EffectInstance::new(*n, *n)).collect()),
        }
    }
}

impl PlayerSource for FakePlayer {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn world_position(&self) -> Vec3 {
        self.position
    }

    fn buffs(&self) -> Result<Vec<EffectInstance>, HostError> {
        self.buffs.clone().map_err(|_| HostError::MissingComponent("Buffs"))
    }
}

/// Maps every visible point to a fixed screen position
struct FixedProjector(Vec2);

impl Projector for FixedProjector {
    fn world_to_screen(&self, _pos: Vec3) -> Vec2 {
        self.0
    }
}

fn settings(rules: Vec<BuffRule>) -> OverlaySettings {
    OverlaySettings {
        height_offset: 50.0,
        show_background: false,
        rules,
        ..Default::default()
    }
}

fn tick(
    plugin: &mut ShowBuffPlugin,
    player: Option<&FakePlayer>,
    projector: &FixedProjector,
    canvas: &mut RecordingCanvas,
    in_hideout: bool,
) -> TickOutcome {
    let mut ctx = TickContext {
        player: player.map(|p| p as &dyn PlayerSource),
        projector,
        canvas,
        in_hideout,
    };
    plugin.on_tick(&mut ctx)
}

fn screen() -> FixedProjector {
    FixedProjector(Vec2::new(960.0, 540.0))
}

// ─────────────────────────────────────────────────────────────────────────────
// Drawing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_tick_draws_matched_rules_above_head() {
    let mut plugin = ShowBuffPlugin::new(settings(vec![
        BuffRule::new("charge", "Charges"),
        BuffRule::new("missing", "Never"),
    ]));
    let player = FakePlayer::with_buffs(&["frenzy_charge", "power_charge", "onslaught"]);
    let mut canvas = RecordingCanvas::with_metrics(10.0, 20.0);

    let outcome = tick(&mut plugin, Some(&player), &screen(), &mut canvas, false);

    assert_eq!(outcome, TickOutcome::Drawn(1));
    let texts: Vec<_> = canvas.texts().collect();
    // "Charges: 2" is 100x20, centered on (960, 540 - 50)
    assert_eq!(texts, vec![("Charges: 2", Vec2::new(910.0, 480.0))]);
}

#[test]
fn test_background_drawn_before_text() {
    let mut config = settings(vec![BuffRule::new("onslaught", "Fast")]);
    config.show_background = true;
    let mut plugin = ShowBuffPlugin::new(config);
    let player = FakePlayer::with_buffs(&["onslaught"]);
    let mut canvas = RecordingCanvas::new();

    tick(&mut plugin, Some(&player), &screen(), &mut canvas, false);

    assert_eq!(canvas.commands().len(), 2);
    assert!(matches!(canvas.commands()[0], DrawCmd::Box { .. }));
    assert!(matches!(canvas.commands()[1], DrawCmd::Text { .. }));
}

#[test]
fn test_absolute_rule_ignores_character_position() {
    let mut rule = BuffRule::new("shocked", "SHOCK");
    rule.anchor = AnchorMode::Absolute;
    rule.offset_x = 200;
    rule.offset_y = 100;
    rule.hide_count = true;
    let mut plugin = ShowBuffPlugin::new(settings(vec![rule]));
    let player = FakePlayer::with_buffs(&["shocked"]);
    let mut canvas = RecordingCanvas::with_metrics(10.0, 20.0);

    tick(&mut plugin, Some(&player), &screen(), &mut canvas, false);

    let texts: Vec<_> = canvas.texts().collect();
    assert_eq!(texts, vec![("SHOCK", Vec2::new(175.0, 90.0))]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Skipped ticks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_disabled_and_hideout() {
    let player = FakePlayer::with_buffs(&["onslaught"]);
    let mut canvas = RecordingCanvas::new();

    let mut config = settings(vec![BuffRule::new("onslaught", "Fast")]);
    config.enabled = false;
    let mut plugin = ShowBuffPlugin::new(config.clone());
    assert_eq!(
        tick(&mut plugin, Some(&player), &screen(), &mut canvas, false),
        TickOutcome::Disabled
    );

    config.enabled = true;
    let mut plugin = ShowBuffPlugin::new(config.clone());
    assert_eq!(
        tick(&mut plugin, Some(&player), &screen(), &mut canvas, true),
        TickOutcome::SuppressedInHideout
    );

    config.show_in_hideout = true;
    let mut plugin = ShowBuffPlugin::new(config);
    assert_eq!(
        tick(&mut plugin, Some(&player), &screen(), &mut canvas, true),
        TickOutcome::Drawn(1)
    );
}

#[test]
fn test_missing_or_invalid_player() {
    let mut plugin = ShowBuffPlugin::new(settings(vec![BuffRule::new("a", "A")]));
    let mut canvas = RecordingCanvas::new();

    assert_eq!(
        tick(&mut plugin, None, &screen(), &mut canvas, false),
        TickOutcome::NoPlayer
    );

    let mut player = FakePlayer::with_buffs(&["a"]);
    player.valid = false;
    assert_eq!(
        tick(&mut plugin, Some(&player), &screen(), &mut canvas, false),
        TickOutcome::NoPlayer
    );
    assert!(canvas.commands().is_empty());
    assert!(plugin.snapshot().is_empty());
}

#[test]
fn test_degenerate_positions_draw_nothing() {
    let mut plugin = ShowBuffPlugin::new(settings(vec![BuffRule::new("a", "A")]));
    let mut canvas = RecordingCanvas::new();

    let mut player = FakePlayer::with_buffs(&["a"]);
    player.position = Vec3::ZERO;
    assert_eq!(
        tick(&mut plugin, Some(&player), &screen(), &mut canvas, false),
        TickOutcome::Offscreen
    );

    let player = FakePlayer::with_buffs(&["a"]);
    let offscreen = FixedProjector(Vec2::ZERO);
    assert_eq!(
        tick(&mut plugin, Some(&player), &offscreen, &mut canvas, false),
        TickOutcome::Offscreen
    );
    assert!(canvas.commands().is_empty());
}

#[test]
fn test_missing_buff_component_degrades_to_nothing() {
    let mut plugin = ShowBuffPlugin::new(settings(vec![BuffRule::new("rage", "Rage")]));
    let mut canvas = RecordingCanvas::new();

    let player = FakePlayer::with_buffs(&["rage", "onslaught"]);
    tick(&mut plugin, Some(&player), &screen(), &mut canvas, false);
    let before = plugin.snapshot().entries().to_vec();
    assert_eq!(before.len(), 2);

    let broken = FakePlayer {
        buffs: Err("no component"),
        ..FakePlayer::with_buffs(&[])
    };
    canvas.clear();
    assert_eq!(
        tick(&mut plugin, Some(&broken), &screen(), &mut canvas, false),
        TickOutcome::BuffsUnavailable
    );
    assert!(canvas.commands().is_empty());
    assert_eq!(plugin.snapshot().entries(), before.as_slice());

    // An explicit refresh against the broken player leaves the list alone too
    plugin.refresh_snapshot(Some(&broken));
    assert_eq!(plugin.snapshot().entries(), before.as_slice());
}

// ─────────────────────────────────────────────────────────────────────────────
// Discovery snapshot
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_snapshot_follows_live_buffs_until_frozen() {
    let mut plugin = ShowBuffPlugin::new(settings(vec![BuffRule::new("rage", "Rage")]));
    let mut canvas = RecordingCanvas::new();

    let player = FakePlayer::with_buffs(&["rage", "onslaught"]);
    tick(&mut plugin, Some(&player), &screen(), &mut canvas, false);
    assert_eq!(plugin.snapshot().len(), 2);

    plugin.set_freeze_list(true);
    let player = FakePlayer::with_buffs(&["rage", "ground_caustic"]);
    canvas.clear();
    let outcome = tick(&mut plugin, Some(&player), &screen(), &mut canvas, false);

    // Overlay still follows live buffs while the discovery list stays put
    assert_eq!(outcome, TickOutcome::Drawn(1));
    let names: Vec<_> = plugin.snapshot().entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["rage", "onslaught"]);

    plugin.set_freeze_list(false);
    tick(&mut plugin, Some(&player), &screen(), &mut canvas, false);
    let names: Vec<_> = plugin.snapshot().entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["ground_caustic", "rage"]);
}

#[test]
fn test_init_populates_snapshot_and_rows_add_rules() {
    let mut config = settings(Vec::new());
    config.show_discovery_window = true;
    let mut plugin = ShowBuffPlugin::new(config);
    let player = FakePlayer::with_buffs(&["player_aura_resists", "ground_caustic"]);

    assert!(plugin.on_init(Some(&player)));
    assert_eq!(plugin.name(), "ShowBuff");

    let rows = plugin.discovery_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "ground_caustic");

    assert!(plugin.add_rule_for(&rows[1]));
    assert!(!plugin.add_rule_for(&rows[1]));
    assert_eq!(plugin.settings().rules.len(), 1);
    assert_eq!(plugin.settings().rules[0].name_pattern, "player_aura_resists");
}

#[test]
fn test_rule_edits_apply_after_pass() {
    let mut plugin = ShowBuffPlugin::new(settings(vec![
        BuffRule::new("a", "A"),
        BuffRule::new("b", "B"),
    ]));

    let mut editor = RuleEditor::new();
    for (i, rule) in plugin.settings().rules.iter().enumerate() {
        if rule.name_pattern == "a" {
            editor.remove(i);
        }
    }
    editor.add_blank();
    plugin.apply_rule_edits(editor);

    let labels: Vec<_> = plugin
        .settings()
        .rules
        .iter()
        .map(|r| r.display_label.as_str())
        .collect();
    assert_eq!(labels, vec!["B", "Buff2"]);
}

#[test]
fn test_discovery_rows_follow_window_toggle() {
    let mut plugin = ShowBuffPlugin::new(settings(Vec::new()));
    let player = FakePlayer::with_buffs(&["rage"]);
    plugin.on_init(Some(&player));

    assert_eq!(plugin.snapshot().len(), 1);
    assert!(plugin.discovery_rows().is_empty());

    plugin.settings_mut().show_discovery_window = true;
    assert_eq!(plugin.discovery_rows().len(), 1);
}
