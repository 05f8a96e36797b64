use std::{fs, io, path::Path, str::FromStr};

use anyhow::Context;
use program_core::SubscriptionSummary;
use shared::domain::parse_start_date;

pub const DEFAULT_CONFIG_PATH: &str = "admin_console.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("table") {
            Ok(Self::Table)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(format!("unknown output format '{s}'"))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub seed_demo_programs: bool,
    pub log_filter: String,
    pub output: OutputFormat,
    pub subscription: SubscriptionSummary,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_demo_programs: true,
            log_filter: "warn".into(),
            output: OutputFormat::Table,
            subscription: SubscriptionSummary::default(),
        }
    }
}

const KEYS: [&str; 9] = [
    "seed_demo_programs",
    "log_filter",
    "output",
    "subscription_name",
    "subscription_ends_on",
    "currency",
    "available",
    "consumed",
    "total_balance",
];

/// Defaults, then the TOML file at `path` (if present), then `APP__*`
/// environment variables.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file_overrides(&mut settings, &raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

pub(crate) fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let table: toml::Table = toml::from_str(raw)?;
    for (key, value) in &table {
        let value = match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        apply_value(settings, key, &value);
    }
    Ok(())
}

pub(crate) fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    for key in KEYS {
        if let Some(value) = lookup(&format!("APP__{}", key.to_ascii_uppercase())) {
            apply_value(settings, key, &value);
        }
    }
}

/// Unknown keys and unparsable values leave the current setting in place.
fn apply_value(settings: &mut Settings, key: &str, value: &str) {
    let value = value.trim();
    match key {
        "seed_demo_programs" => {
            if let Ok(parsed) = value.parse::<bool>() {
                settings.seed_demo_programs = parsed;
            }
        }
        "log_filter" => {
            if !value.is_empty() {
                settings.log_filter = value.to_string();
            }
        }
        "output" => {
            if let Ok(parsed) = value.parse() {
                settings.output = parsed;
            }
        }
        "subscription_name" => settings.subscription.name = value.to_string(),
        "subscription_ends_on" => {
            if let Ok(parsed) = parse_start_date(value) {
                settings.subscription.ends_on = parsed;
            }
        }
        "currency" => settings.subscription.currency = value.to_string(),
        "available" => {
            if let Ok(parsed) = value.parse() {
                settings.subscription.available = parsed;
            }
        }
        "consumed" => {
            if let Ok(parsed) = value.parse() {
                settings.subscription.consumed = parsed;
            }
        }
        "total_balance" => {
            if let Ok(parsed) = value.parse() {
                settings.subscription.total_balance = parsed;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
