use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Load `KEY=value` pairs from `.env` in the working directory.
///
/// Variables already present in the environment win. Must be called before
/// the async runtime starts any threads.
pub fn load_dotenv() {
    load_dotenv_from(Path::new(".env"));
}

/// Load `KEY=value` pairs from `path` if it exists.
pub fn load_dotenv_from(path: &Path) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };

    for (key, value) in content.lines().filter_map(parse_dotenv_line) {
        if std::env::var(key).is_err() {
            // SAFETY: called during startup before other threads read the environment
            unsafe { std::env::set_var(key, value) };
        }
    }
}

/// Split one `.env` line into key and value.
///
/// Blank lines and `#` comments yield `None`. Values may contain spaces and
/// may be wrapped in single or double quotes.
fn parse_dotenv_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let value = value.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|quote| value.strip_prefix(*quote)?.strip_suffix(*quote))
        .unwrap_or(value);
    Some((key, unquoted))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub bridge: BridgeConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub name: String,
    /// Used for valve items that do not carry their own default duration.
    pub default_valve_duration_secs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub enabled: bool,
    pub interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bridge: BridgeConfig {
                name: "HomeKit Bridge".to_string(),
                default_valve_duration_secs: 300,
            },
            simulation: SimulationConfig {
                enabled: true,
                interval_secs: 10,
            },
        }
    }
}

impl Config {
    /// Defaults overridden by `BRIDGE_NAME`, `DEFAULT_VALVE_DURATION_SECS`,
    /// `SIMULATION_ENABLED` and `SIMULATION_INTERVAL_SECS`.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("BRIDGE_NAME") {
            config.bridge.name = name;
        }
        if let Ok(duration) = std::env::var("DEFAULT_VALVE_DURATION_SECS")
            && let Ok(d) = duration.parse()
        {
            config.bridge.default_valve_duration_secs = d;
        }

        if let Ok(enabled) = std::env::var("SIMULATION_ENABLED")
            && let Ok(e) = enabled.parse()
        {
            config.simulation.enabled = e;
        }
        if let Ok(interval) = std::env::var("SIMULATION_INTERVAL_SECS")
            && let Ok(i) = interval.parse()
        {
            config.simulation.interval_secs = i;
        }

        config
    }

    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    #[test]
    fn test_parse_dotenv_line() {
        assert_eq!(parse_dotenv_line("BRIDGE_NAME=Attic"), Some(("BRIDGE_NAME", "Attic")));
        assert_eq!(
            parse_dotenv_line("  BRIDGE_NAME = Living Room  "),
            Some(("BRIDGE_NAME", "Living Room"))
        );
        assert_eq!(
            parse_dotenv_line("BRIDGE_NAME=\"Quoted Name\""),
            Some(("BRIDGE_NAME", "Quoted Name"))
        );
        assert_eq!(parse_dotenv_line("EMPTY="), Some(("EMPTY", "")));
        assert_eq!(parse_dotenv_line("# comment"), None);
        assert_eq!(parse_dotenv_line(""), None);
        assert_eq!(parse_dotenv_line("NO_EQUALS"), None);
        assert_eq!(parse_dotenv_line("=value"), None);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bridge.name, "HomeKit Bridge");
        assert_eq!(config.bridge.default_valve_duration_secs, 300);
        assert!(config.simulation.enabled);
        assert_eq!(config.simulation.interval_secs, 10);
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir().join(format!("bridge-config-{}.json", std::process::id()));
        let mut expected = Config::default();
        expected.bridge.name = "Garden".to_string();
        expected.simulation.enabled = false;
        fs::write(&path, serde_json::to_string(&expected).unwrap()).unwrap();

        let loaded = Config::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_load_errors() {
        let missing = std::env::temp_dir().join("bridge-config-does-not-exist.json");
        assert!(matches!(Config::load(&missing), Err(BridgeError::IoError(_))));

        let path = std::env::temp_dir().join(format!("bridge-config-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let result = Config::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(BridgeError::SerdeJsonError(_))));
    }
}
