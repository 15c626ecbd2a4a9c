use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::types::FieldKind;
use crate::errors::SettingsError;

/// Environment override for the remote API base URL.
pub const API_URL_ENV: &str = "TAGTRACK_API_URL";

const CONFIG_DIR: &str = "tagtrack";
const CONFIG_FILE: &str = "config.json";

/// Client configuration. Every field has a default so a partial (or absent)
/// config file still yields a usable setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the remote tracking API.
    pub api_base_url: String,
    /// chrono pattern used for every date prompt and validation.
    pub date_format: String,
    /// Ordered set of process fields filters may match on. Platforms without
    /// window metadata get a reduced default, but the file may override it.
    pub field_options: Vec<FieldKind>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".into(),
            date_format: "%Y-%m-%d".into(),
            field_options: FieldKind::platform_default(),
        }
    }
}

impl Settings {
    /// Loads settings from the user config file, falling back to defaults
    /// when the file is absent. `TAGTRACK_API_URL` wins over both.
    pub fn load() -> Result<Self, SettingsError> {
        let mut settings = match Self::config_file() {
            Some(path) if path.exists() => {
                let data = fs::read_to_string(&path)?;
                serde_json::from_str(&data)?
            }
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                settings.api_base_url = url;
            }
        }

        Ok(settings)
    }

    fn config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_missing_fields_with_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"api_base_url":"http://box:9000"}"#).unwrap();
        assert_eq!(settings.api_base_url, "http://box:9000");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.field_options, FieldKind::platform_default());
    }

    #[test]
    fn field_options_round_trip_as_names() {
        let settings = Settings {
            field_options: vec![FieldKind::Name, FieldKind::Path],
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains(r#""field_options":["Name","Path"]"#));
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.field_options, settings.field_options);
    }
}
