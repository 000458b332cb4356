use serde::Deserialize;

use crate::node::ONLINE_WINDOW_S;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("parse view config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("presence.online_window_s must be > 0 (got {0})")]
    OnlineWindow(i64),
}

/// How node views are rendered for presentation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeViewConfig {
    #[serde(default)]
    pub display: DisplayCfg,
    #[serde(default)]
    pub presence: PresenceCfg,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayCfg {
    /// Render temperatures in Fahrenheit instead of Celsius.
    #[serde(default)]
    pub fahrenheit: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PresenceCfg {
    /// Seconds since last heard before a node shows as offline.
    #[serde(default = "default_online_window_s")]
    pub online_window_s: i64,
}

impl Default for PresenceCfg {
    fn default() -> Self {
        Self { online_window_s: default_online_window_s() }
    }
}

fn default_online_window_s() -> i64 {
    ONLINE_WINDOW_S
}

impl NodeViewConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: NodeViewConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.presence.online_window_s <= 0 {
            return Err(ConfigError::OnlineWindow(self.presence.online_window_s));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = NodeViewConfig::from_toml_str("").unwrap();
        assert!(!cfg.display.fahrenheit);
        assert_eq!(cfg.presence.online_window_s, 900);
    }

    #[test]
    fn tables_override_defaults() {
        let cfg = NodeViewConfig::from_toml_str(
            "[display]\nfahrenheit = true\n[presence]\nonline_window_s = 300\n",
        )
        .unwrap();
        assert!(cfg.display.fahrenheit);
        assert_eq!(cfg.presence.online_window_s, 300);
    }

    #[test]
    fn zero_window_rejected() {
        let err = NodeViewConfig::from_toml_str("[presence]\nonline_window_s = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::OnlineWindow(0)));
    }

    #[test]
    fn bad_toml_rejected() {
        let err = NodeViewConfig::from_toml_str("[display\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
