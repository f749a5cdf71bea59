use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Read-only key/value configuration lookup.
///
/// The gate asks for the allow-list on every request, so implementations
/// backed by reloadable storage take effect without rebuilding the gate.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Reads configuration from environment variables.
///
/// `cors.allowed.list` is looked up as `CORS_ALLOWED_LIST`, or
/// `APP_CORS_ALLOWED_LIST` with the prefix `APP`.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    prefix: Option<String>,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    pub fn variable_name(&self, key: &str) -> String {
        let name: String = key
            .chars()
            .map(|ch| match ch {
                '.' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        match &self.prefix {
            Some(prefix) if !prefix.is_empty() => {
                format!("{}_{name}", prefix.to_ascii_uppercase())
            }
            _ => name,
        }
    }
}

impl ConfigSource for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(self.variable_name(key)).ok()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
