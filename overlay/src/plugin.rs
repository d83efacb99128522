//! Host plugin lifecycle
//!
//! The host calls [`Plugin::on_init`] once after loading and
//! [`Plugin::on_tick`] every render frame. A tick reads the player's buffs,
//! keeps the discovery snapshot current, matches rules and paints the
//! indicators. Every failure along the way degrades to drawing nothing.

use showbuff_core::{
    DiscoveryQuery, DiscoveryRow, EffectInstance, LogThrottle, PlayerSource, Projector,
    RuleEditor, RuleStore, SnapshotCache, Vec2, match_rules,
};
use showbuff_types::OverlaySettings;
use tracing::{debug, info, warn};

use crate::canvas::Canvas;
use crate::layout::{LayoutConfig, layout, paint};

/// Everything the host hands over for one frame
pub struct TickContext<'a> {
    /// Local player, `None` while loading
    pub player: Option<&'a dyn PlayerSource>,
    pub projector: &'a dyn Projector,
    pub canvas: &'a mut dyn Canvas,
    pub in_hideout: bool,
}

/// What a tick ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Disabled,
    SuppressedInHideout,
    NoPlayer,
    /// The player's buff list could not be read; nothing was touched
    BuffsUnavailable,
    /// Player position or its projection was degenerate
    Offscreen,
    /// Number of indicators drawn
    Drawn(usize),
}

/// Trait implemented by host-loadable plugins
pub trait Plugin {
    fn name(&self) -> &str;

    /// Called once after the host loads the plugin.
    /// Returns `false` if the plugin could not start.
    fn on_init(&mut self, player: Option<&dyn PlayerSource>) -> bool;

    /// Called every render frame
    fn on_tick(&mut self, ctx: &mut TickContext<'_>) -> TickOutcome;
}

/// Buff indicator overlay
#[derive(Debug, Default)]
pub struct ShowBuffPlugin {
    settings: OverlaySettings,
    snapshot: SnapshotCache,
    discovery: DiscoveryQuery,
    throttle: LogThrottle,
}

impl ShowBuffPlugin {
    pub fn new(mut settings: OverlaySettings) -> Self {
        settings.sanitize();
        let mut snapshot = SnapshotCache::new();
        snapshot.set_frozen(settings.freeze_list);
        Self {
            settings,
            snapshot,
            discovery: DiscoveryQuery::default(),
            throttle: LogThrottle::default(),
        }
    }

    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    /// Mutable settings for the host's settings surface. Freeze changes
    /// take effect on the next tick.
    pub fn settings_mut(&mut self) -> &mut OverlaySettings {
        &mut self.settings
    }

    pub fn snapshot(&self) -> &SnapshotCache {
        &self.snapshot
    }

    pub fn set_freeze_list(&mut self, frozen: bool) {
        self.settings.freeze_list = frozen;
        self.snapshot.set_frozen(frozen);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Discovery panel
    // ─────────────────────────────────────────────────────────────────────────

    pub fn discovery_query(&self) -> &DiscoveryQuery {
        &self.discovery
    }

    pub fn discovery_query_mut(&mut self) -> &mut DiscoveryQuery {
        &mut self.discovery
    }

    /// Rows for the discovery window with the current search and sort.
    /// Empty while the window is switched off in settings.
    pub fn discovery_rows(&self) -> Vec<DiscoveryRow> {
        if !self.settings.show_discovery_window {
            return Vec::new();
        }
        self.discovery.rows(self.snapshot.entries())
    }

    /// The discovery window's refresh button. Still a no-op while frozen.
    pub fn refresh_snapshot(&mut self, player: Option<&dyn PlayerSource>) {
        let Some(player) = player.filter(|p| p.is_valid()) else {
            return;
        };
        let Some(buffs) = self.read_buffs(player) else {
            return;
        };
        self.snapshot.set_frozen(self.settings.freeze_list);
        self.snapshot.refresh(&buffs);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rule editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply the rule edits queued during a settings UI pass
    pub fn apply_rule_edits(&mut self, editor: RuleEditor) {
        if editor.is_empty() {
            return;
        }
        let mut store = RuleStore::new(std::mem::take(&mut self.settings.rules));
        store.apply(editor);
        self.settings.rules = store.into_rules();
    }

    /// The "+" button next to a discovery row
    pub fn add_rule_for(&mut self, row: &DiscoveryRow) -> bool {
        let mut store = RuleStore::new(std::mem::take(&mut self.settings.rules));
        let added = store.add_from_buff(&row.name, &row.display_label);
        self.settings.rules = store.into_rules();
        added
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tick
    // ─────────────────────────────────────────────────────────────────────────

    /// `None` when the host could not provide the buff list
    fn read_buffs(&mut self, player: &dyn PlayerSource) -> Option<Vec<EffectInstance>> {
        match player.buffs() {
            Ok(buffs) => Some(buffs),
            Err(e) => {
                if self.throttle.allow("read_buffs") {
                    warn!(error = %e, "Failed to read player buffs");
                }
                None
            }
        }
    }
}

impl Plugin for ShowBuffPlugin {
    fn name(&self) -> &str {
        "ShowBuff"
    }

    fn on_init(&mut self, player: Option<&dyn PlayerSource>) -> bool {
        self.refresh_snapshot(player);
        info!(
            rules = self.settings.rules.len(),
            detected = self.snapshot.len(),
            "ShowBuff initialised"
        );
        true
    }

    fn on_tick(&mut self, ctx: &mut TickContext<'_>) -> TickOutcome {
        if !self.settings.enabled {
            return TickOutcome::Disabled;
        }
        if ctx.in_hideout && !self.settings.show_in_hideout {
            return TickOutcome::SuppressedInHideout;
        }

        let Some(player) = ctx.player.filter(|p| p.is_valid()) else {
            if self.throttle.allow("no_player") {
                debug!("No valid player, skipping tick");
            }
            return TickOutcome::NoPlayer;
        };

        let Some(buffs) = self.read_buffs(player) else {
            return TickOutcome::BuffsUnavailable;
        };

        self.snapshot.set_frozen(self.settings.freeze_list);
        self.snapshot.observe(&buffs);

        let world = player.world_position();
        if world.is_origin() {
            return TickOutcome::Offscreen;
        }
        let screen = ctx.projector.world_to_screen(world);
        if screen.is_origin() {
            return TickOutcome::Offscreen;
        }
        let head = Vec2::new(screen.x, screen.y - self.settings.height_offset);

        let items = match_rules(&buffs, &self.settings.rules);
        if items.is_empty() {
            return TickOutcome::Drawn(0);
        }

        let config = LayoutConfig::from_settings(&self.settings);
        let placed = layout(head, &items, &config, &mut *ctx.canvas);
        paint(&placed, config.font_scale, &mut *ctx.canvas);

        TickOutcome::Drawn(placed.len())
    }
}
