use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use program_core::{seed, AdminSession, ProgramStore};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;
mod repl;

use config::{OutputFormat, Settings};

#[derive(Parser, Debug)]
#[command(about = "Terminal admin screen for bug bounty programs")]
struct Args {
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Emit one JSON event per command instead of tables.
    #[arg(long)]
    json: bool,
    /// Start with an empty program table.
    #[arg(long)]
    no_seed: bool,
    /// Read commands from a file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = config::load_settings(&args.config)?;
    if args.json {
        settings.output = OutputFormat::Json;
    }
    if args.no_seed {
        settings.seed_demo_programs = false;
    }

    init_tracing(&settings.log_filter);
    let mut session = build_session(&settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script '{}'", path.display()))?;
            repl::run(&mut session, BufReader::new(file), &mut out, settings.output, false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            repl::run(&mut session, stdin.lock(), &mut out, settings.output, interactive)
        }
    }
}

fn init_tracing(configured: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref(), configured))
        .with_writer(io::stderr)
        .init();
}

/// `RUST_LOG` wins over the configured filter; an unparsable filter falls
/// through to the next one and finally to `warn`.
fn log_filter(env: Option<&str>, configured: &str) -> EnvFilter {
    env.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn build_session(settings: &Settings) -> AdminSession {
    let programs = if settings.seed_demo_programs {
        ProgramStore::with_programs(seed::demo_programs())
    } else {
        ProgramStore::new()
    };
    tracing::info!(
        programs = programs.len(),
        output = ?settings.output,
        "admin console session started"
    );
    AdminSession::new(programs, settings.subscription.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_overrides_configured_filter() {
        assert_eq!(log_filter(Some("debug"), "info").to_string(), "debug");
        assert_eq!(log_filter(None, "info").to_string(), "info");
        assert_eq!(log_filter(Some(" "), "info").to_string(), "info");
        assert_eq!(log_filter(Some("admin_console=loud"), "info").to_string(), "info");
        assert_eq!(log_filter(None, "admin_console=loud").to_string(), "warn");
    }
}
