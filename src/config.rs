//! Environment-derived settings.
//!
//! Three strings drive the whole run. They are read verbatim: no format
//! validation, no defaulting beyond the empty string for an unset variable.
//! An unusable value surfaces later as a fetch or database error.

use std::env;

/// URL of the price snapshot endpoint.
pub const API_URL_VAR: &str = "CRYPTOURL";
/// MongoDB connection string.
pub const MONGO_URL_VAR: &str = "MONGODBURL";
/// Logical database name within that deployment.
pub const MONGO_DB_VAR: &str = "MONGODBNAME";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub mongo_url: String,
    pub mongo_db: String,
}

impl Settings {
    /// Read the three variables from the process environment. Never fails.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var(API_URL_VAR).unwrap_or_default(),
            mongo_url: env::var(MONGO_URL_VAR).unwrap_or_default(),
            mongo_db: env::var(MONGO_DB_VAR).unwrap_or_default(),
        }
    }
}
