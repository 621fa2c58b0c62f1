use tracing::warn;

use crate::domain::SelectionPolicy;
use crate::provider::ProviderConfig;

const POLICY_VAR: &str = "YT_DOWNLOADER_POLICY";
const PROGRAM_VAR: &str = "YT_DOWNLOADER_YTDLP";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Policy of the view built before the first render
    pub startup_policy: SelectionPolicy,
    pub provider: ProviderConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(POLICY_VAR) {
            match parse_policy(&value) {
                Some(policy) => config.startup_policy = policy,
                None => warn!(
                    "Ignoring {}={:?}, expected \"video\" or \"audio\"",
                    POLICY_VAR, value
                ),
            }
        }

        if let Some(program) = lookup(PROGRAM_VAR).filter(|p| !p.trim().is_empty()) {
            config.provider.program = program;
        }

        config
    }
}

fn parse_policy(value: &str) -> Option<SelectionPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "video" => Some(SelectionPolicy::HighestResolutionVideo),
        "audio" => Some(SelectionPolicy::AudioOnly),
        _ => None,
    }
}
