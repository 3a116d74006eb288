//! Router configuration, read from the `[router]` table of a TOML file.
//!
//! ```toml
//! [router]
//! owner_report_protocol = "gnc-ownerreport"
//! disabled_url_types = ["gncInvoice"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::OWNER_REPORT_PROTOCOL;

/// Which business URL types get registered, and under what protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default = "default_owner_report_protocol")]
    pub owner_report_protocol: String,
    /// URL type ids (e.g. `gncInvoice`, `owner-report`) left unregistered.
    #[serde(default)]
    pub disabled_url_types: Vec<String>,
}

fn default_owner_report_protocol() -> String {
    OWNER_REPORT_PROTOCOL.to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            owner_report_protocol: default_owner_report_protocol(),
            disabled_url_types: Vec::new(),
        }
    }
}

/// On-disk layout: the router settings live under `[router]`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    router: RouterConfig,
}

impl RouterConfig {
    /// Parses the contents of a config file.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<ConfigFile>(contents).map(|file| file.router)
    }

    /// Loads configuration from `path`.
    /// Falls back to the defaults when the file is missing or unreadable.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No router config at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded router config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse router config {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read router config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn is_disabled(&self, url_type: &str) -> bool {
        self.disabled_url_types.iter().any(|t| t == url_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_register_everything() {
        let config = RouterConfig::default();
        assert_eq!(config.owner_report_protocol, "gnc-ownerreport");
        assert!(!config.is_disabled("gncCustomer"));
    }

    #[test]
    fn parses_router_table() {
        let config = RouterConfig::from_toml_str(
            r#"
            [router]
            owner_report_protocol = "owner-report-v2"
            disabled_url_types = ["gncInvoice", "gncJob"]
            "#,
        )
        .unwrap();
        assert_eq!(config.owner_report_protocol, "owner-report-v2");
        assert!(config.is_disabled("gncInvoice"));
        assert!(config.is_disabled("gncJob"));
        assert!(!config.is_disabled("gncVendor"));
    }

    #[test]
    fn missing_table_yields_defaults() {
        let config = RouterConfig::from_toml_str("").unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn missing_fields_yield_defaults() {
        let config = RouterConfig::from_toml_str("[router]\n").unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn wrong_field_type_is_an_error() {
        assert!(RouterConfig::from_toml_str("[router]\ndisabled_url_types = 3\n").is_err());
    }
}
