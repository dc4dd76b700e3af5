use dotenvy::dotenv;
use std::env;
use thiserror::Error;

/// Country codes exposed by `/countries` and `/all`.
pub const ALLOWED_COUNTRIES: [&str; 6] = ["IN", "CA", "AU", "SG", "GB", "US"];

pub const DEFAULT_PORT: u16 = 4000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub allowed_countries: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        Ok(Self::new(parse_port(env::var("PORT").ok())?))
    }

    pub fn new(server_port: u16) -> Self {
        Self {
            server_port,
            allowed_countries: ALLOWED_COUNTRIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 4000);
    }

    #[test]
    fn port_override_is_parsed() {
        assert_eq!(parse_port(Some("8080".to_string())).unwrap(), 8080);
        assert_eq!(parse_port(Some(" 9000 ".to_string())).unwrap(), 9000);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(matches!(
            parse_port(Some("eighty".to_string())),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(parse_port(Some("70000".to_string())).is_err());
    }

    #[test]
    fn allow_list_is_fixed() {
        let config = Config::default();
        assert_eq!(
            config.allowed_countries,
            vec!["IN", "CA", "AU", "SG", "GB", "US"]
        );
        assert_eq!(config.bind_address(), "0.0.0.0:4000");
    }
}
