//! Server configuration.

use crate::error::{ServerError, ServerResult};
use std::fmt::{Debug, Display};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Environment variable for the listen address.
pub const ENV_BIND: &str = "WORDVOTE_BIND";
/// Environment variable for the dictionary file.
pub const ENV_DICTIONARY: &str = "WORDVOTE_DICTIONARY";
/// Environment variable for the pending queue directory.
pub const ENV_QUEUE_DIR: &str = "WORDVOTE_QUEUE_DIR";
/// Environment variable toggling fsync on publish.
pub const ENV_SYNC_WRITES: &str = "WORDVOTE_SYNC_WRITES";
/// Environment variable selecting the scanning dictionary.
pub const ENV_SCAN_DICTIONARY: &str = "WORDVOTE_SCAN_DICTIONARY";

/// Configuration for the submission server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Newline-delimited word list.
    pub dictionary_path: PathBuf,
    /// Directory receiving pending submissions.
    pub queue_dir: PathBuf,
    /// Whether to fsync records and the queue directory on publish.
    pub sync_writes: bool,
    /// Whether to scan the dictionary file per lookup instead of loading it.
    pub scan_dictionary: bool,
    /// Whether to create the queue directory if it is missing.
    pub create_queue_dir: bool,
}

impl ServerConfig {
    /// Creates a configuration with default paths bound to `bind_addr`.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            dictionary_path: PathBuf::from("words-alpha.txt"),
            queue_dir: PathBuf::from("pending"),
            sync_writes: true,
            scan_dictionary: false,
            create_queue_dir: true,
        }
    }

    /// Loads configuration from `WORDVOTE_*` environment variables.
    ///
    /// Unset variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if a variable is set but unparsable.
    pub fn from_env() -> ServerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if a value is present but unparsable.
    pub fn from_lookup<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            bind_addr: try_load(&lookup, ENV_BIND, defaults.bind_addr)?,
            dictionary_path: try_load(&lookup, ENV_DICTIONARY, defaults.dictionary_path)?,
            queue_dir: try_load(&lookup, ENV_QUEUE_DIR, defaults.queue_dir)?,
            sync_writes: try_load(&lookup, ENV_SYNC_WRITES, defaults.sync_writes)?,
            scan_dictionary: try_load(&lookup, ENV_SCAN_DICTIONARY, defaults.scan_dictionary)?,
            create_queue_dir: defaults.create_queue_dir,
        })
    }

    /// Sets the bind address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Sets the dictionary file.
    pub fn with_dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = path.into();
        self
    }

    /// Sets the pending queue directory.
    pub fn with_queue_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.queue_dir = path.into();
        self
    }

    /// Sets whether publication fsyncs.
    pub fn with_sync_writes(mut self, sync_writes: bool) -> Self {
        self.sync_writes = sync_writes;
        self
    }

    /// Sets whether the dictionary is scanned per lookup.
    pub fn with_scan_dictionary(mut self, scan: bool) -> Self {
        self.scan_dictionary = scan;
        self
    }

    /// Sets whether a missing queue directory is created.
    pub fn with_create_queue_dir(mut self, create: bool) -> Self {
        self.create_queue_dir = create;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 8080)))
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> ServerResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Debug,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ServerError::config(key, e.to_string())),
        None => {
            info!("{key} not set, using default: {default:?}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.dictionary_path, PathBuf::from("words-alpha.txt"));
        assert_eq!(config.queue_dir, PathBuf::from("pending"));
        assert!(config.sync_writes);
        assert!(!config.scan_dictionary);
    }

    #[test]
    fn config_builder() {
        let config = ServerConfig::new("0.0.0.0:9000".parse().unwrap())
            .with_dictionary("/srv/words.txt")
            .with_queue_dir("/srv/pending")
            .with_sync_writes(false)
            .with_scan_dictionary(true)
            .with_create_queue_dir(false);

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.dictionary_path, PathBuf::from("/srv/words.txt"));
        assert_eq!(config.queue_dir, PathBuf::from("/srv/pending"));
        assert!(!config.sync_writes);
        assert!(config.scan_dictionary);
        assert!(!config.create_queue_dir);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn environment_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (ENV_BIND, "0.0.0.0:1111"),
            (ENV_DICTIONARY, "dict.txt"),
            (ENV_QUEUE_DIR, "/var/spool/votes"),
            (ENV_SYNC_WRITES, " false "),
            (ENV_SCAN_DICTIONARY, "true"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:1111".parse().unwrap());
        assert_eq!(config.dictionary_path, PathBuf::from("dict.txt"));
        assert_eq!(config.queue_dir, PathBuf::from("/var/spool/votes"));
        assert!(!config.sync_writes);
        assert!(config.scan_dictionary);
    }

    #[test]
    fn unparsable_value_is_error() {
        let result = ServerConfig::from_lookup(lookup_from(&[(ENV_BIND, "not-an-address")]));
        assert!(matches!(
            result,
            Err(ServerError::Config { ref key, .. }) if key == ENV_BIND
        ));

        let result = ServerConfig::from_lookup(lookup_from(&[(ENV_SYNC_WRITES, "yes")]));
        assert!(matches!(result, Err(ServerError::Config { .. })));
    }
}
