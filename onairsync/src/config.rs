//! Environment configuration for the sync daemon
//!
//! All connection parameters are required. Startup fails fast with a
//! single error naming every missing variable, so a misconfigured
//! deployment is fixed in one round trip.

use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

/// Schedule publisher endpoint URL
pub const ENV_SCHEDULE_ENDPOINT: &str = "SCHEDULE_ENDPOINT";
/// Poll interval in milliseconds (positive integer)
pub const ENV_POLL_INTERVAL: &str = "POLL_INTERVAL";
/// Streaming server base URL
pub const ENV_ICECAST_URL: &str = "ICECAST_URL";
/// Admin username
pub const ENV_ICECAST_ADMIN: &str = "ICECAST_ADMIN";
/// Admin password
pub const ENV_ICECAST_PASSWORD: &str = "ICECAST_PASSWORD";
/// Target mount point
pub const ENV_ICECAST_MOUNT: &str = "ICECAST_MOUNT";
/// Optional path of the persisted schedule document
pub const ENV_SCHEDULE_FILE: &str = "SCHEDULE_FILE";

/// Default path of the persisted schedule document
pub const DEFAULT_SCHEDULE_FILE: &str = "current_schedule.json";

/// Runtime configuration of the sync daemon
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Schedule publisher endpoint (GET)
    pub schedule_endpoint: String,
    /// Interval between reconciliation cycles
    pub poll_interval: Duration,
    /// Streaming server base URL
    pub server_url: String,
    /// Admin username
    pub admin_user: String,
    /// Admin password
    pub admin_password: String,
    /// Target mount point
    pub mount: String,
    /// Path of the persisted last-known-good document
    pub schedule_file: PathBuf,
}

impl SyncConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary lookup.
    ///
    /// Every required variable is probed before returning, so a single
    /// [`ConfigError::Missing`] reports the complete list of absent
    /// names. Empty and whitespace-only values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |name: &'static str| -> String {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => value,
                _ => {
                    missing.push(name.to_string());
                    String::new()
                }
            }
        };

        let schedule_endpoint = require(ENV_SCHEDULE_ENDPOINT);
        let poll_interval_raw = require(ENV_POLL_INTERVAL);
        let server_url = require(ENV_ICECAST_URL);
        let admin_user = require(ENV_ICECAST_ADMIN);
        let admin_password = require(ENV_ICECAST_PASSWORD);
        let mount = require(ENV_ICECAST_MOUNT);

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let millis: u64 = poll_interval_raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name: ENV_POLL_INTERVAL,
            reason: format!("expected milliseconds as a positive integer, got '{poll_interval_raw}'"),
        })?;
        if millis == 0 {
            return Err(ConfigError::Invalid {
                name: ENV_POLL_INTERVAL,
                reason: "poll interval must be positive".to_string(),
            });
        }

        let schedule_file = lookup(ENV_SCHEDULE_FILE)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEDULE_FILE));

        Ok(Self {
            schedule_endpoint,
            poll_interval: Duration::from_millis(millis),
            server_url,
            admin_user,
            admin_password,
            mount,
            schedule_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (ENV_SCHEDULE_ENDPOINT, "http://publisher/api/schedule"),
            (ENV_POLL_INTERVAL, "60000"),
            (ENV_ICECAST_URL, "http://localhost:8000"),
            (ENV_ICECAST_ADMIN, "admin"),
            (ENV_ICECAST_PASSWORD, "hackme"),
            (ENV_ICECAST_MOUNT, "/stream"),
        ])
    }

    fn from_map(env: &HashMap<&'static str, &'static str>) -> Result<SyncConfig, ConfigError> {
        SyncConfig::from_lookup(|name| env.get(name).map(|value| value.to_string()))
    }

    #[test]
    fn loads_complete_configuration() {
        let config = from_map(&full_env()).unwrap();

        assert_eq!(config.schedule_endpoint, "http://publisher/api/schedule");
        assert_eq!(config.poll_interval, Duration::from_millis(60000));
        assert_eq!(config.mount, "/stream");
        assert_eq!(config.schedule_file, PathBuf::from(DEFAULT_SCHEDULE_FILE));
    }

    #[test]
    fn reports_every_missing_variable() {
        let err = SyncConfig::from_lookup(|_| None).unwrap_err();

        let names = match err {
            ConfigError::Missing(names) => names,
            other => panic!("expected Missing, got {other:?}"),
        };
        assert_eq!(
            names,
            vec![
                ENV_SCHEDULE_ENDPOINT,
                ENV_POLL_INTERVAL,
                ENV_ICECAST_URL,
                ENV_ICECAST_ADMIN,
                ENV_ICECAST_PASSWORD,
                ENV_ICECAST_MOUNT,
            ]
        );
    }

    #[test]
    fn reports_partial_missing_set() {
        let mut env = full_env();
        env.remove(ENV_ICECAST_PASSWORD);
        env.insert(ENV_ICECAST_MOUNT, "   ");

        let err = from_map(&env).unwrap_err();
        let names = match err {
            ConfigError::Missing(names) => names,
            other => panic!("expected Missing, got {other:?}"),
        };
        assert_eq!(names, vec![ENV_ICECAST_PASSWORD, ENV_ICECAST_MOUNT]);
    }

    #[test]
    fn rejects_non_numeric_poll_interval() {
        let mut env = full_env();
        env.insert(ENV_POLL_INTERVAL, "soon");

        let err = from_map(&env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: ENV_POLL_INTERVAL,
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_poll_interval() {
        let mut env = full_env();
        env.insert(ENV_POLL_INTERVAL, "0");

        let err = from_map(&env).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn schedule_file_is_overridable() {
        let mut env = full_env();
        env.insert(ENV_SCHEDULE_FILE, "/var/lib/onair/schedule.json");

        let config = from_map(&env).unwrap();
        assert_eq!(
            config.schedule_file,
            PathBuf::from("/var/lib/onair/schedule.json")
        );
    }

    #[test]
    fn missing_error_message_names_variables() {
        let err = SyncConfig::from_lookup(|_| None).unwrap_err();
        let message = err.to_string();

        assert!(message.contains(ENV_SCHEDULE_ENDPOINT));
        assert!(message.contains(ENV_ICECAST_MOUNT));
    }
}
