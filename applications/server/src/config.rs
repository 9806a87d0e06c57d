/// Server configuration
use crate::error::{Result, ServerError};
use chirp_core::PasswordPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_signup")]
    pub signup: SignupSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Backing file for the user collection
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignupSettings {
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,

    /// Upper password bound; absent means unbounded
    #[serde(default)]
    pub password_max_length: Option<usize>,
}

impl SignupSettings {
    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min: self.password_min_length,
            max: self.password_max_length,
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit path must exist; the default `config.toml` is only read
    /// when present. `CHIRP_`-prefixed environment variables override file
    /// values either way.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match config_path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("config.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CHIRP")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.signup.password_min_length == 0 {
            return Err(ServerError::Config(
                "signup.password_min_length must be at least 1".to_string(),
            ));
        }

        if let Some(max) = self.signup.password_max_length {
            if max < self.signup.password_min_length {
                return Err(ServerError::Config(format!(
                    "signup.password_max_length ({max}) is below password_min_length ({})",
                    self.signup.password_min_length
                )));
            }
        }

        if self.storage.users_file.as_os_str().is_empty() {
            return Err(ServerError::Config(
                "storage.users_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        users_file: default_users_file(),
    }
}

fn default_users_file() -> PathBuf {
    PathBuf::from("./data/users.json")
}

fn default_signup() -> SignupSettings {
    SignupSettings {
        password_min_length: default_password_min_length(),
        password_max_length: None,
    }
}

fn default_password_min_length() -> usize {
    8
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            signup: default_signup(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.signup.password_policy(), PasswordPolicy::default());
    }

    #[test]
    fn inverted_password_bounds_are_rejected() {
        let mut config = ServerConfig::default();
        config.signup.password_min_length = 12;
        config.signup.password_max_length = Some(8);
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_minimum_password_length_is_rejected() {
        let mut config = ServerConfig::default();
        config.signup.password_min_length = 0;
        assert!(config.validate().is_err());
    }
}
