//! Configuration for jwt-principal

use ::config::{Config, Environment};
use serde::Deserialize;

/// Prefix for environment overrides, e.g. `JWT_PRINCIPAL_MAIL_ATTRIBUTE`
pub const ENV_PREFIX: &str = "JWT_PRINCIPAL";

/// Directory attribute that carries the mail address by default
pub const DEFAULT_MAIL_ATTRIBUTE: &str = "mail";

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrincipalConfig {
    /// Attribute of the user principal written from and read into the `mail` claim
    #[serde(default = "default_mail_attribute")]
    pub mail_attribute: String,
}

fn default_mail_attribute() -> String {
    DEFAULT_MAIL_ATTRIBUTE.to_string()
}

impl PrincipalConfig {
    /// Load configuration from environment
    pub fn from_env() -> crate::Result<Self> {
        let settings = Config::builder()
            .set_default("mail_attribute", DEFAULT_MAIL_ATTRIBUTE)?
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let mut config: Self = settings.try_deserialize()?;
        // Directory attribute keys are stored lower-case
        config.mail_attribute = config.mail_attribute.to_lowercase();

        tracing::debug!(mail_attribute = %config.mail_attribute, "Loaded principal configuration");
        Ok(config)
    }
}

impl Default for PrincipalConfig {
    fn default() -> Self {
        Self {
            mail_attribute: default_mail_attribute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_config_default() {
        let config = PrincipalConfig::default();
        assert_eq!(config.mail_attribute, "mail");
    }

    #[test]
    fn test_principal_config_deserialize_missing_field() {
        let config: PrincipalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PrincipalConfig::default());
    }
}
