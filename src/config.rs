use std::env;

/// Executable used when neither the flag nor the environment names one
pub const DEFAULT_GCLOUD: &str = "gcloud";

/// Environment variable consulted when `--gcloud` is not given
pub const GCLOUD_ENV: &str = "GCSWITCH_GCLOUD";

/// Settings resolved once at startup and threaded into the runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gcloud: String,
}

impl Config {
    /// Resolve the gcloud executable: flag, then `GCSWITCH_GCLOUD`, then `gcloud`
    pub fn resolve(gcloud_flag: Option<&str>) -> Self {
        Self::resolve_with(gcloud_flag, env::var(GCLOUD_ENV).ok())
    }

    fn resolve_with(gcloud_flag: Option<&str>, from_env: Option<String>) -> Self {
        let gcloud = gcloud_flag
            .map(str::to_string)
            .or(from_env)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GCLOUD.to_string());
        Self { gcloud }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gcloud: DEFAULT_GCLOUD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env() {
        let c = Config::resolve_with(Some("/opt/gcloud"), Some("/usr/bin/gcloud".into()));
        assert_eq!(c.gcloud, "/opt/gcloud");
    }

    #[test]
    fn env_used_without_flag() {
        let c = Config::resolve_with(None, Some("/usr/bin/gcloud".into()));
        assert_eq!(c.gcloud, "/usr/bin/gcloud");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(Config::resolve_with(None, None), Config::default());
        assert_eq!(Config::resolve_with(None, Some("  ".into())).gcloud, "gcloud");
    }
}
