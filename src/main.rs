use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use kana_remap::{
    Mode,
    app::App,
    config::{self, Config},
    util::tracing::init_tracing,
};

const TOGGLE_COMMAND: &str = ":toggle";

/// Reads lines of keys from stdin and prints what a kana keyboard would have typed.
///
/// A line containing only `:toggle` switches between kana and Latin mode.
#[derive(Debug, Parser)]
#[command(name = "kana-remap", version)]
struct Cli {
    /// Start in Latin mode regardless of the config.
    #[arg(long)]
    latin: bool,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    let cfg = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        Config::default()
    });

    let mut app = App::from_config(&cfg);
    if cli.latin {
        app.mode_switch().set(Mode::Latin);
    }

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line == TOGGLE_COMMAND {
            let mode = app.toggle_mode();
            writeln!(out, "[{}]", mode.indicator())?;
            continue;
        }

        app.type_keys(&line);
        writeln!(out, "{}", app.commit())?;
    }

    Ok(())
}
