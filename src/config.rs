//! Configuration for the FANUC hardware interface
//!
//! Loads configuration from TOML file with minimal parameters needed
//! to reach the controller's state socket.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub robot: RobotConfig,
    pub logging: LoggingConfig,
}

/// Robot controller endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RobotConfig {
    /// Controller IPv4 address in text form
    pub host: String,
    /// TCP port of the state-reporting socket
    pub state_port: u16,
    /// Joints on the arm (the supported controller reports 6)
    pub joint_count: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl RobotConfig {
    /// State-socket endpoint as `host:port` text
    pub fn state_addr(&self) -> String {
        format!("{}:{}", self.host, self.state_port)
    }
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Default configuration for a FANUC controller on its factory address
    ///
    /// Suitable for testing and development. Production deployments
    /// should use a proper TOML configuration file.
    pub fn fanuc_defaults() -> Self {
        Self {
            robot: RobotConfig {
                host: "192.168.1.100".to_string(),
                state_port: 59002,
                joint_count: 6,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::fanuc_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::fanuc_defaults();
        assert_eq!(config.robot.host, "192.168.1.100");
        assert_eq!(config.robot.state_port, 59002);
        assert_eq!(config.robot.joint_count, 6);
        assert_eq!(config.robot.state_addr(), "192.168.1.100:59002");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_serialization() {
        let config = AppConfig::fanuc_defaults();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        // Should contain all sections
        assert!(toml_string.contains("[robot]"));
        assert!(toml_string.contains("[logging]"));

        // Should contain key values
        assert!(toml_string.contains("host = \"192.168.1.100\""));
        assert!(toml_string.contains("state_port = 59002"));
        assert!(toml_string.contains("joint_count = 6"));
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_content = r#"
[robot]
host = "10.0.0.42"
state_port = 60015
joint_count = 6

[logging]
level = "debug"
"#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.robot.host, "10.0.0.42");
        assert_eq!(config.robot.state_port, 60015);
        assert_eq!(config.logging.level, "debug");
    }
}
