use std::env;
use std::time::Duration;

#[cfg(windows)]
const DEFAULT_PATH: &str = "C:\\";
#[cfg(not(windows))]
const DEFAULT_PATH: &str = "/";

/// Binary configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub path: String,
    pub timeout: Duration,
    pub pretty: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            path: lookup("VOLSTAT_PATH").unwrap_or_else(|| DEFAULT_PATH.to_string()),
            timeout: Duration::from_secs(
                lookup("VOLSTAT_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            pretty: lookup("VOLSTAT_PRETTY")
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
            log_level: lookup("VOLSTAT_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Replace the configured path with a command line argument, if given
    pub fn with_path_arg(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.path = path;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]);
        assert_eq!(config.path, DEFAULT_PATH);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.pretty);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("VOLSTAT_PATH", "/srv"),
            ("VOLSTAT_TIMEOUT_SECS", "30"),
            ("VOLSTAT_PRETTY", "false"),
            ("VOLSTAT_LOG_LEVEL", "debug"),
        ]);
        assert_eq!(config.path, "/srv");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.pretty);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = load(&[("VOLSTAT_TIMEOUT_SECS", "soon"), ("VOLSTAT_PRETTY", "yes")]);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.pretty);
    }

    #[test]
    fn test_path_arg_wins() {
        let config = load(&[("VOLSTAT_PATH", "/srv")]).with_path_arg(Some("/home".to_string()));
        assert_eq!(config.path, "/home");

        let config = load(&[("VOLSTAT_PATH", "/srv")]).with_path_arg(None);
        assert_eq!(config.path, "/srv");
    }
}
