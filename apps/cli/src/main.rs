#![deny(warnings)]

//! Headless driver: opens (or starts) a save, lets the autopilot play a
//! number of days and prints a summary.

mod autopilot;

use anyhow::{Context, Result};
use brew_core::GameConfig;
use brew_runtime::{GameController, TracingSink};
use persistence::FileStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    seed: Option<u64>,
    days: u32,
    save_dir: Option<String>,
    reset: bool,
    json: bool,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => args.config = it.next(),
            "--seed" => args.seed = it.next().and_then(|s| s.parse().ok()),
            "--days" => args.days = it.next().and_then(|s| s.parse().ok()).unwrap_or(0),
            "--save-dir" => args.save_dir = it.next(),
            "--reset" => args.reset = true,
            "--json" => args.json = true,
            _ => {}
        }
    }
    args
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            serde_yaml::from_str(&text).with_context(|| format!("parsing config {path}"))?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.rng_seed = seed;
    }
    if let Some(dir) = &args.save_dir {
        cfg.save_dir = dir.clone();
    }
    Ok(cfg)
}

/// `RUST_LOG` directives if present and well-formed, otherwise `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    // Logging setup
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let args = parse_args();
    let cfg = load_config(&args)?;
    info!(
        seed = cfg.rng_seed,
        dir = %cfg.save_dir,
        slot = %cfg.save_slot,
        days = args.days,
        "starting CLI"
    );

    let store = FileStore::new(&cfg.save_dir);
    let mut game = GameController::open(&cfg, store, TracingSink)?;
    if args.reset {
        game.reset()?;
    }
    info!(opening = ?game.opening(), day = game.state().days_passed, "game ready");

    let start_gold = game.state().gold;
    let mut total = autopilot::DayReport::default();
    for _ in 0..args.days {
        total.add(autopilot::play_day(&mut game)?);
    }

    let s = game.state();
    if args.json {
        println!("{}", serde_json::to_string_pretty(s)?);
    }
    println!(
        "Game OK | day: {} | gold: {} ({:+}) | plots: {}/{} | npcs: {} | potions held: {}",
        s.days_passed,
        s.gold,
        s.gold - start_gold,
        s.garden.unlocked,
        s.garden.total_plots(),
        s.npcs.len(),
        s.inventory.potions.total_units()
    );
    println!(
        "KPI | days: {} | harvested: {} | crafted: {} | sold: {} | earned: {} | task rewards: {}",
        args.days, total.harvested, total.crafted, total.sold, total.earned, total.rewards
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn enabled_under(directives: Option<&str>, level: Level) -> bool {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(log_filter(directives))
            .finish();
        tracing::subscriber::with_default(subscriber, || match level {
            Level::DEBUG => tracing::enabled!(Level::DEBUG),
            _ => tracing::enabled!(Level::INFO),
        })
    }

    #[test]
    fn logging_defaults_to_info() {
        assert!(enabled_under(None, Level::INFO));
        assert!(!enabled_under(None, Level::DEBUG));
    }

    #[test]
    fn rust_log_directives_are_honored() {
        assert!(enabled_under(Some("debug"), Level::DEBUG));
        assert!(!enabled_under(Some("warn"), Level::INFO));
    }

    #[test]
    fn bundled_config_parses() {
        let cfg: GameConfig = serde_yaml::from_str(include_str!("../brew.yaml")).unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let args = Args {
            seed: Some(9),
            save_dir: Some("/tmp/brews".into()),
            ..Args::default()
        };
        let cfg = load_config(&args).unwrap();
        assert_eq!(cfg.rng_seed, 9);
        assert_eq!(cfg.save_dir, "/tmp/brews");
        assert_eq!(cfg.save_slot, "potionGameSave");
    }
}
