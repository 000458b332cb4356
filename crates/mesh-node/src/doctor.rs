use anyhow::Result;

use crate::config::NodeViewConfig;

pub fn check_view_config(cfg: &NodeViewConfig) -> Result<()> {
    cfg.validate()?;
    // Anything beyond a day hides real outages.
    anyhow::ensure!(
        cfg.presence.online_window_s <= 24 * 3600,
        "presence.online_window_s should be at most 86400"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes() {
        assert!(check_view_config(&NodeViewConfig::default()).is_ok());
    }

    #[test]
    fn huge_window_flagged() {
        let mut cfg = NodeViewConfig::default();
        cfg.presence.online_window_s = 7 * 24 * 3600;
        assert!(check_view_config(&cfg).is_err());
    }

    #[test]
    fn negative_window_flagged() {
        let mut cfg = NodeViewConfig::default();
        cfg.presence.online_window_s = -1;
        assert!(check_view_config(&cfg).is_err());
    }
}
