//! Key/value configuration lookup
//!
//! Services that need a single configuration value depend on
//! [`ConfigurationSource`] rather than on the full [`MailroomConfig`].

use super::schema::MailroomConfig;
use std::collections::HashMap;

/// Key under which the data store selector is looked up
pub const DATA_STORE_TYPE_KEY: &str = "DataStoreType";

/// String lookup by key
pub trait ConfigurationSource {
    /// Returns the value for `key`, or `None` if the key is not configured
    fn get_string(&self, key: &str) -> Option<String>;
}

impl ConfigurationSource for MailroomConfig {
    fn get_string(&self, key: &str) -> Option<String> {
        match key {
            DATA_STORE_TYPE_KEY => self.data_store.data_store_type.clone(),
            "LogLevel" => Some(self.application.log_level.clone()),
            _ => None,
        }
    }
}

impl ConfigurationSource for HashMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
