//! Process configuration for the terminal game

use std::path::PathBuf;

pub const DEFAULT_BANK_PATH: &str = "imposter_bank.json";

/// Settings read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the editable content bank is persisted
    pub bank_path: PathBuf,
    /// Fixed seed for reproducible rounds; OS entropy when unset
    pub seed: Option<u64>,
    /// Whether to build the AI content generator
    pub ai_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bank_path: PathBuf::from(DEFAULT_BANK_PATH),
            seed: None,
            ai_enabled: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bank_path = std::env::var("IMPOSTER_BANK_PATH")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BANK_PATH));

        let seed = std::env::var("IMPOSTER_SEED").ok().and_then(|v| {
            let parsed = v.trim().parse().ok();
            if parsed.is_none() {
                tracing::warn!("Ignoring IMPOSTER_SEED={:?}: not a u64", v);
            }
            parsed
        });

        let ai_enabled = std::env::var("IMPOSTER_AI")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        tracing::info!(
            bank_path = %bank_path.display(),
            seeded = seed.is_some(),
            ai_enabled,
            "Configuration loaded"
        );

        Self {
            bank_path,
            seed,
            ai_enabled,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
