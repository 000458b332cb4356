use std::fmt;

use mesh_proto::HardwareModel;
use serde::{Deserialize, Serialize};

/// User-facing identity a node announces about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub long_name: String,
    pub short_name: String,
    pub hw_model: HardwareModel,
    #[serde(default)]
    pub is_licensed: bool,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        long_name: impl Into<String>,
        short_name: impl Into<String>,
        hw_model: HardwareModel,
    ) -> Self {
        Self {
            id: id.into(),
            long_name: long_name.into(),
            short_name: short_name.into(),
            hw_model,
            is_licensed: false,
        }
    }

    /// Pretty hardware model name, or `None` when the model is unset.
    pub fn hw_model_string(&self) -> Option<String> {
        match self.hw_model {
            HardwareModel::Unset => None,
            model => Some(pretty_model_name(model.name())),
        }
    }
}

/// `TLORA_V2_1_1p6` -> `tlora-v2-1-1.6`
///
/// Only a lowercase `p` in the symbolic name marks a decimal point; it is
/// substituted before lowercasing so `PPR` or `PORTDUINO` keep their letters.
pub fn pretty_model_name(name: &str) -> String {
    name.replace('_', "-").replace('p', ".").to_lowercase()
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Identity(id={}, long_name={}, short_name={}, hw_model={}, is_licensed={})",
            self.id,
            self.long_name,
            self.short_name,
            self.hw_model_string().as_deref().unwrap_or("unset"),
            self.is_licensed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_model_has_no_string() {
        let ident = Identity::new("!0000abcd", "Base Camp", "BC", HardwareModel::Unset);
        assert_eq!(ident.hw_model_string(), None);
    }

    #[test]
    fn underscores_become_hyphens() {
        assert_eq!(pretty_model_name("RAK_4631"), "rak-4631");
        assert_eq!(pretty_model_name("LILYGO_TBEAM_S3_CORE"), "lilygo-tbeam-s3-core");
    }

    #[test]
    fn every_lowercase_p_becomes_a_dot() {
        assert_eq!(pretty_model_name("TLORA_V2_1_1p6"), "tlora-v2-1-1.6");
        assert_eq!(pretty_model_name("Xp1p2"), "x.1.2");

        let ident = Identity::new("!1", "a", "b", HardwareModel::Tbeam0p7);
        assert_eq!(ident.hw_model_string().as_deref(), Some("tbeam0.7"));
    }

    #[test]
    fn uppercase_p_is_kept() {
        let ident = Identity::new("!1", "a", "b", HardwareModel::Ppr);
        assert_eq!(ident.hw_model_string().as_deref(), Some("ppr"));
        let ident = Identity::new("!1", "a", "b", HardwareModel::Rak4631);
        assert_eq!(ident.hw_model_string().as_deref(), Some("rak4631"));
    }

    #[test]
    fn display_uses_pretty_model() {
        let ident = Identity::new("!1", "Long", "L", HardwareModel::TEcho);
        let s = ident.to_string();
        assert!(s.contains("hw_model=t-echo"), "{s}");
        assert!(s.contains("is_licensed=false"), "{s}");
    }
}
