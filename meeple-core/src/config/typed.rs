use super::{ConfigError, MeepleConfig};

/// A strongly-typed configuration section read from a key prefix.
///
/// ```ignore
/// let server: ServerConfig = config.section()?;
/// ```
pub trait ConfigSection: Sized {
    /// The configuration key prefix (e.g., `"app.server"`).
    fn prefix() -> &'static str;

    fn from_config(config: &MeepleConfig) -> Result<Self, ConfigError>;

    /// Absolute key for a property of this section.
    fn key(property: &str) -> String {
        format!("{}.{property}", Self::prefix())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind (default `0.0.0.0:9090`).
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:9090".to_string(),
        }
    }
}

impl ConfigSection for ServerConfig {
    fn prefix() -> &'static str {
        "app.server"
    }

    fn from_config(config: &MeepleConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            addr: config.get_or(&Self::key("addr"), defaults.addr)?,
        })
    }
}
