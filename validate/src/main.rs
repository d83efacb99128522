//! showbuff-validate: offline checks for ShowBuff settings
//!
//! Lints a settings file, replays a captured buff list through the matcher
//! and layout, or classifies buff names, without a running game host.

mod lint;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use showbuff_core::config::{default_settings_path, load_settings};
use showbuff_core::{DiscoveryQuery, EffectInstance, RenderableItem, SnapshotCache, SortMode, Vec2};
use showbuff_core::{classify, match_rules};
use showbuff_overlay::{LayoutConfig, RecordingCanvas, layout};
use showbuff_types::formatting::format_rgba_hex;
use showbuff_types::{Language, OverlaySettings};
use tracing_subscriber::filter::EnvFilter;

use lint::{Severity, lint_rules};

#[derive(Parser)]
#[command(version, about = "Validate and simulate ShowBuff settings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lint the rules in a settings file
    Check {
        /// Settings file (defaults to the user config location)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },

    /// Run a captured buff list through the matcher
    Simulate {
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// TOML file with `[[effect]]` entries
        #[arg(short, long)]
        effects: PathBuf,

        /// Projected head position as `X,Y`; prints indicator positions
        #[arg(long, value_parser = parse_point)]
        head: Option<Vec2>,

        /// Discovery list search filter
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, value_enum, default_value_t = SortArg::Name)]
        sort: SortArg,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Classify buff names as harmful, beneficial ground or neutral
    Classify {
        names: Vec<String>,

        #[arg(long)]
        russian: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Name,
    Stacks,
    Type,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortMode::Name,
            SortArg::Stacks => SortMode::Stacks,
            SortArg::Type => SortMode::Type,
        }
    }
}

/// Captured buff list
#[derive(Debug, Default, Deserialize)]
struct EffectsFile {
    #[serde(default, rename = "effect")]
    effects: Vec<EffectInstance>,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    indicators: Vec<IndicatorReport>,
    discovery: Vec<showbuff_core::DiscoveryRow>,
}

#[derive(Debug, Serialize)]
struct IndicatorReport {
    text: String,
    count: usize,
    color: String,
    anchor: String,
    /// Top-left draw position, only with `--head`
    position: Option<(f32, f32)>,
}

/// Initialize logging, writing to SHOWBUFF_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("SHOWBUFF_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check { settings } => run_check(settings),
        Command::Simulate {
            settings,
            effects,
            head,
            search,
            sort,
            json,
        } => run_simulate(settings, &effects, head, search, sort.into(), json),
        Command::Classify { names, russian } => {
            run_classify(&names, russian);
            Ok(true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {:?}", s))?;
    let x = x.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok(Vec2::new(x, y))
}

fn resolve_settings(path: Option<PathBuf>) -> Result<OverlaySettings, String> {
    let path = path
        .or_else(default_settings_path)
        .ok_or("no settings path given and no user config directory found")?;
    tracing::info!(path = ?path, "Loading settings");
    load_settings(&path).map_err(|e| e.to_string())
}

fn load_effects(path: &Path) -> Result<Vec<EffectInstance>, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("{:?}: {}", path, e))?;
    let file: EffectsFile = toml::from_str(&text).map_err(|e| format!("{:?}: {}", path, e))?;
    Ok(file.effects)
}

/// Returns `Ok(false)` when any error-level finding is reported
fn run_check(settings: Option<PathBuf>) -> Result<bool, String> {
    let settings = resolve_settings(settings)?;
    let findings = lint_rules(&settings.rules);

    for finding in &findings {
        let rule = &settings.rules[finding.rule];
        println!(
            "{}: rule #{} ({:?}): {}",
            finding.severity, finding.rule, rule.display_label, finding.message
        );
    }

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    println!(
        "{} rules, {} errors, {} warnings",
        settings.rules.len(),
        errors,
        findings.len() - errors
    );
    Ok(errors == 0)
}

fn run_simulate(
    settings: Option<PathBuf>,
    effects: &Path,
    head: Option<Vec2>,
    search: String,
    sort: SortMode,
    json: bool,
) -> Result<bool, String> {
    let settings = resolve_settings(settings)?;
    let live = load_effects(effects)?;

    let items = match_rules(&live, &settings.rules);
    let positions = match head {
        Some(head) => layout_positions(head, &items, &settings),
        None => vec![None; items.len()],
    };

    let indicators = items
        .iter()
        .zip(positions)
        .map(|(item, position)| IndicatorReport {
            text: item.text(),
            count: item.count,
            color: format_rgba_hex(item.color),
            anchor: format!("{:?}", item.anchor).to_lowercase(),
            position,
        })
        .collect();

    let mut snapshot = SnapshotCache::new();
    snapshot.refresh(&live);
    let discovery = DiscoveryQuery { search, sort }.rows(snapshot.entries());

    let report = SimulationReport {
        indicators,
        discovery,
    };

    if json {
        let text = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{}", text);
    } else {
        print_report(&report, settings.language);
    }
    Ok(true)
}

/// Top-left draw position of each item, indexed like `items`
fn layout_positions(
    head: Vec2,
    items: &[RenderableItem],
    settings: &OverlaySettings,
) -> Vec<Option<(f32, f32)>> {
    let mut canvas = RecordingCanvas::new();
    let placed = layout(head, items, &LayoutConfig::from_settings(settings), &mut canvas);

    // Layout emits head-anchored items first, then absolute ones
    let order = (0..items.len())
        .filter(|&i| items[i].is_head_anchored())
        .chain((0..items.len()).filter(|&i| !items[i].is_head_anchored()));

    let mut positions = vec![None; items.len()];
    for (i, p) in order.zip(&placed) {
        positions[i] = Some((p.position.x, p.position.y));
    }
    positions
}

fn print_report(report: &SimulationReport, language: Language) {
    println!("Indicators ({}):", report.indicators.len());
    for indicator in &report.indicators {
        match indicator.position {
            Some((x, y)) => println!(
                "  {:<30} {} {:<8} at ({:.1}, {:.1})",
                indicator.text, indicator.color, indicator.anchor, x, y
            ),
            None => println!(
                "  {:<30} {} {}",
                indicator.text, indicator.color, indicator.anchor
            ),
        }
    }

    println!("Detected buffs ({}):", report.discovery.len());
    for row in &report.discovery {
        let tag = row.class.tag(language).unwrap_or("");
        println!(
            "  {:<40} {:<30} stacks={:<3} type={:<3} {}",
            row.name, row.display_label, row.stack_count, row.definition_type, tag
        );
    }
}

fn run_classify(names: &[String], russian: bool) {
    let language = if russian {
        Language::Russian
    } else {
        Language::English
    };
    for name in names {
        let class = classify(name);
        println!("{:<40} {:?} {}", name, class, class.tag(language).unwrap_or(""));
    }
}
