//! Settings read from the environment.

use anyhow::Context;
use std::fmt;
use std::net::SocketAddr;

use super::DEFAULT_BUFFER_SIZE;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Account registered at startup so the API can be used without a separate setup step.
#[derive(Clone, PartialEq)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `HOST`, default `0.0.0.0`.
    pub host: String,
    /// `PORT`, default `8080`.
    pub port: u16,
    /// `ACTOR_BUFFER_SIZE`, default 32.
    pub actor_buffer_size: usize,
    /// Present when both `ADMIN_USERNAME` and `ADMIN_PASSWORD` are set.
    pub admin: Option<AdminAccount>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let actor_buffer_size = match lookup("ACTOR_BUFFER_SIZE") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .with_context(|| {
                    format!("ACTOR_BUFFER_SIZE must be a positive integer, got {raw:?}")
                })?,
            None => DEFAULT_BUFFER_SIZE,
        };

        let admin = match (lookup("ADMIN_USERNAME"), lookup("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminAccount { username, password }),
            (None, None) => None,
            _ => anyhow::bail!("ADMIN_USERNAME and ADMIN_PASSWORD must be set together"),
        };

        Ok(Self {
            host,
            port,
            actor_buffer_size,
            admin,
        })
    }

    pub fn bind_address(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.actor_buffer_size, 32);
        assert!(config.admin.is_none());
        assert_eq!(config.bind_address().unwrap().port(), 8080);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("ACTOR_BUFFER_SIZE", "4"),
            ("ADMIN_USERNAME", "admin"),
            ("ADMIN_PASSWORD", "pw"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.actor_buffer_size, 4);
        assert_eq!(config.admin.as_ref().map(|a| a.username.as_str()), Some("admin"));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(Config::from_lookup(lookup(&[("PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup(&[("ACTOR_BUFFER_SIZE", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("ADMIN_USERNAME", "admin")])).is_err());
    }

    #[test]
    fn test_admin_password_is_not_logged() {
        let admin = AdminAccount {
            username: "admin".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{admin:?}").contains("hunter2"));
    }
}
