//! Host authentication configuration
//!
//! Guardsmith reads the target project's auth configuration from
//! `config/auth.toml`, a TOML mirror of Laravel's `config/auth.php`:
//!
//! ```toml
//! [guards.web]
//! driver = "session"
//! provider = "users"
//!
//! [providers.users]
//! driver = "eloquent"
//! model = 'App\Models\User'
//!
//! [passwords.users]
//! provider = "users"
//! ```
//!
//! The parsed [`AuthConfig`] is passed explicitly into the resolver and the
//! scaffolder; nothing in the core reads ambient state.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GuardsmithError, GuardsmithResult};

/// A named guard entry (`auth.guards.{name}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    #[serde(default)]
    pub driver: Option<String>,

    /// Name of the user provider backing this guard
    pub provider: String,
}

/// A named user-provider entry (`auth.providers.{name}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub driver: Option<String>,

    /// Fully-qualified model identifier, e.g. `App\Models\User`.
    ///
    /// Absent for non-Eloquent providers; guardsmith only supports
    /// model-backed providers and rejects guards without one.
    #[serde(default)]
    pub model: Option<String>,
}

/// A named password-broker entry (`auth.passwords.{name}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerConfig {
    pub provider: String,

    #[serde(default)]
    pub table: Option<String>,
}

/// Parsed authentication configuration of the target project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub guards: HashMap<String, GuardConfig>,

    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    #[serde(default)]
    pub passwords: HashMap<String, BrokerConfig>,
}

impl AuthConfig {
    /// Load auth configuration from a TOML file
    pub fn load(path: &Path) -> GuardsmithResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| GuardsmithError::InvalidAuthConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| GuardsmithError::InvalidAuthConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Lookup `auth.guards.{name}`
    pub fn guard(&self, name: &str) -> Option<&GuardConfig> {
        self.guards.get(name)
    }

    /// Lookup `auth.passwords.{name}`
    pub fn broker(&self, name: &str) -> Option<&BrokerConfig> {
        self.passwords.get(name)
    }

    /// Lookup `auth.providers.{name}.model`
    pub fn provider_model(&self, name: &str) -> Option<&str> {
        self.providers.get(name).and_then(|p| p.model.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[guards.web]
driver = "session"
provider = "users"

[guards.admin]
driver = "session"
provider = "admins"

[providers.users]
driver = "eloquent"
model = 'App\Models\User'

[providers.admins]
driver = "eloquent"
model = 'App\Models\Admin'

[providers.tokens]
driver = "database"

[passwords.users]
provider = "users"
"#;

    #[test]
    fn test_parse_full_config() {
        let config: AuthConfig = toml::from_str(SAMPLE).unwrap();

        assert_eq!(config.guard("web").unwrap().provider, "users");
        assert_eq!(config.guard("admin").unwrap().provider, "admins");
        assert!(config.guard("api").is_none());

        assert_eq!(config.provider_model("users"), Some("App\\Models\\User"));
        assert_eq!(config.provider_model("admins"), Some("App\\Models\\Admin"));

        assert!(config.broker("users").is_some());
        assert!(config.broker("admins").is_none());
    }

    #[test]
    fn test_provider_without_model() {
        let config: AuthConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.provider_model("tokens"), None);
        assert_eq!(config.provider_model("missing"), None);
    }

    #[test]
    fn test_empty_config_parses() {
        let config: AuthConfig = toml::from_str("").unwrap();
        assert!(config.guards.is_empty());
        assert!(config.passwords.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_invalid_config() {
        let err = AuthConfig::load(Path::new("/nonexistent/auth.toml")).unwrap_err();
        assert!(matches!(
            err,
            GuardsmithError::InvalidAuthConfig { .. }
        ));
    }
}
