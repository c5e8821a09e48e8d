//! Module settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CARRIER_IDS_KEY: &str = "SHIPRATE_CARRIER_IDS";
pub const DEFAULT_MODULE_NAME: &str = "shiprate";

/// Where the module keeps its state and how it identifies itself to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSettings {
    /// Configuration key holding the JSON list of created carrier ids.
    pub carrier_ids_key: String,
    /// Name stamped on carriers this module creates.
    pub module_name: String,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            carrier_ids_key: DEFAULT_CARRIER_IDS_KEY.to_string(),
            module_name: DEFAULT_MODULE_NAME.to_string(),
        }
    }
}

impl ModuleSettings {
    /// Read settings from `SHIPRATE_CARRIER_IDS_KEY` / `SHIPRATE_MODULE_NAME`,
    /// falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            carrier_ids_key: non_empty(&lookup, "SHIPRATE_CARRIER_IDS_KEY")
                .unwrap_or(defaults.carrier_ids_key),
            module_name: non_empty(&lookup, "SHIPRATE_MODULE_NAME")
                .unwrap_or(defaults.module_name),
        }
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    let value = lookup(name)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        tracing::warn!(variable = name, "empty setting ignored; using default");
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let settings = ModuleSettings::from_lookup(|_| None);
        assert_eq!(settings, ModuleSettings::default());
        assert_eq!(settings.carrier_ids_key, "SHIPRATE_CARRIER_IDS");
    }

    #[test]
    fn variables_override_defaults() {
        let settings = ModuleSettings::from_lookup(|name| match name {
            "SHIPRATE_CARRIER_IDS_KEY" => Some("ENI_CARRIERS_IDS".to_string()),
            "SHIPRATE_MODULE_NAME" => Some(" enicarriers ".to_string()),
            _ => None,
        });
        assert_eq!(settings.carrier_ids_key, "ENI_CARRIERS_IDS");
        assert_eq!(settings.module_name, "enicarriers");
    }

    #[test]
    fn blank_variables_fall_back_to_defaults() {
        let settings = ModuleSettings::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(settings, ModuleSettings::default());
    }

    #[test]
    fn partial_json_uses_defaults_for_missing_fields() {
        let settings: ModuleSettings =
            serde_json::from_str(r#"{"module_name":"custom"}"#).unwrap();
        assert_eq!(settings.module_name, "custom");
        assert_eq!(settings.carrier_ids_key, DEFAULT_CARRIER_IDS_KEY);
    }
}
