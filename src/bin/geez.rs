// Geez CLI
// Interactive terminal input and batch transliteration for Ge'ez script

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use geez_core::{
    transliterate_text, Echo, InputMode, KeyPolicy, Session, Settings, TransliterationEngine,
};

#[path = "../terminal/mod.rs"]
mod terminal;

/// Latin-to-Ge'ez phonetic input
#[derive(Parser, Debug)]
#[command(name = "geez")]
#[command(version)]
#[command(about = "Type Ge'ez script with Latin phonetic keys", long_about = None)]
struct Args {
    /// TOML settings file (default: ~/.config/geez/settings.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Input mode to start in: tigrinya, amharic or latin
    #[arg(short, long, value_name = "MODE")]
    mode: Option<InputMode>,

    /// Inactivity window before a held match is committed
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Longest combination the engine buffers
    #[arg(long, value_name = "N")]
    max_combo: Option<usize>,

    /// Also feed ' : . to the engine when the table uses them
    #[arg(long)]
    extended_keys: bool,

    /// Composition display: preedit or raw
    #[arg(long, value_name = "ECHO")]
    echo: Option<Echo>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Validate settings and exit
    #[arg(long)]
    check_config: bool,

    /// Print the mapping table and exit
    #[arg(long)]
    list_mappings: bool,

    /// Transliterate TEXT as if typed, print the result and exit
    #[arg(short, long, value_name = "TEXT")]
    transliterate: Option<String>,

    /// Simulated delay between keys for --transliterate
    #[arg(long, value_name = "MS", default_value_t = 50)]
    key_interval_ms: u64,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match args.config {
        Some(ref path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load_default().context("Failed to load default settings")?,
    };

    if let Some(timeout) = args.timeout_ms {
        settings.set_sequence_timeout_ms(timeout);
    }
    if let Some(max) = args.max_combo {
        settings.set_max_combo_length(max);
    }
    if args.extended_keys {
        settings.set_key_policy(KeyPolicy::Extended);
    }
    if let Some(mode) = args.mode {
        settings.set_default_mode(mode);
    }
    if let Some(echo) = args.echo {
        settings.set_echo(echo);
    }
    Ok(settings)
}

fn build_session(settings: &Settings) -> Result<Session> {
    let table = Arc::new(settings.build_table()?);
    let config = settings.engine_config()?;
    log::debug!(
        "Engine: {} mappings, timeout {:?}, max combo {}, keys {}",
        table.len(),
        config.sequence_timeout,
        config.max_combo_length,
        config.key_policy
    );
    let engine = TransliterationEngine::new(table, config)?;
    Ok(Session::new(engine, settings.default_mode())
        .with_echo(settings.echo())
        .with_replay_after_flush(settings.replay_after_flush()))
}

/// Clear `running` on SIGINT or SIGTERM
fn install_signal_handler(running: Arc<AtomicBool>) {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    std::thread::spawn(move || {
        if let Ok(mut signals) = Signals::new([SIGINT, SIGTERM]) {
            if let Some(signal) = signals.forever().next() {
                log::info!("Received signal {}, shutting down", signal);
                running.store(false, Ordering::SeqCst);
            }
        }
    });
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = load_settings(&args)?;
    if let Some(path) = settings.source_path() {
        log::info!("Loaded settings from {}", path.display());
    }

    if args.check_config {
        let session = build_session(&settings)?;
        println!(
            "Configuration is valid ({} mappings)",
            session.engine().table().len()
        );
        return Ok(());
    }

    if args.list_mappings {
        let table = settings.build_table()?;
        for (sequence, grapheme) in table.entries() {
            println!("{}\t{}", sequence, grapheme);
        }
        return Ok(());
    }

    let mut session = build_session(&settings)?;

    if let Some(ref text) = args.transliterate {
        let out = transliterate_text(
            &mut session,
            text,
            Instant::now(),
            Duration::from_millis(args.key_interval_ms),
        );
        println!("{}", out);
        return Ok(());
    }

    let running = Arc::new(AtomicBool::new(true));
    install_signal_handler(running.clone());

    let lines = terminal::run(session, running).context("Terminal session failed")?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["geez", "--config", "/tmp/test.toml"]);

        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
        assert_eq!(args.mode, None);
        assert_eq!(args.timeout_ms, None);
        assert!(!args.extended_keys);
        assert!(!args.verbose);
        assert!(!args.check_config);
        assert!(!args.list_mappings);
        assert_eq!(args.key_interval_ms, 50);
    }

    #[test]
    fn test_args_with_options() {
        let args = Args::parse_from([
            "geez",
            "--mode",
            "amharic",
            "--timeout-ms",
            "400",
            "--max-combo",
            "5",
            "--extended-keys",
            "--echo",
            "raw",
            "-t",
            "selam",
        ]);

        assert_eq!(args.mode, Some(InputMode::Amharic));
        assert_eq!(args.timeout_ms, Some(400));
        assert_eq!(args.max_combo, Some(5));
        assert!(args.extended_keys);
        assert_eq!(args.echo, Some(Echo::Raw));
        assert_eq!(args.transliterate.as_deref(), Some("selam"));
    }

    #[test]
    fn test_args_reject_unknown_mode() {
        assert!(Args::try_parse_from(["geez", "--mode", "klingon"]).is_err());
    }

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[engine]\nsequence_timeout_ms = 400\n").unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let args = Args::parse_from([
            "geez",
            "--config",
            path_arg.as_str(),
            "--max-combo",
            "6",
            "--mode",
            "latin",
        ]);
        let settings = load_settings(&args).unwrap();
        let config = settings.engine_config().unwrap();
        assert_eq!(config.sequence_timeout, Duration::from_millis(400));
        assert_eq!(config.max_combo_length, 6);
        assert_eq!(settings.default_mode(), InputMode::Latin);
    }

    #[test]
    fn test_zero_timeout_override_fails_session() {
        let mut settings = Settings::new();
        settings.set_sequence_timeout_ms(0);
        assert!(build_session(&settings).is_err());
    }

    #[test]
    fn test_batch_transliteration() {
        let mut session = build_session(&Settings::new()).unwrap();
        let out = transliterate_text(
            &mut session,
            "selam",
            Instant::now(),
            Duration::from_millis(50),
        );
        assert_eq!(out, "ሴላመ");
    }
}
