// Copyright 2019 TiKV Project Authors. Licensed under Apache-2.0.

use serde_derive::{Deserialize, Serialize};

/// Controls how messages are decoded.
///
/// By default unknown fields are kept and re-emitted on encode. The nesting depth of embedded
/// messages and skipped groups is always bounded by `recursion_limit`.
///
/// ```rust
/// # use mpp_processor::Config;
/// let config = Config::new().with_recursion_limit(32).discard_unknown_fields(true);
/// assert_eq!(config.recursion_limit(), 32);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub(crate) recursion_limit: u32,
    pub(crate) discard_unknown_fields: bool,
}

const DEFAULT_RECURSION_LIMIT: u32 = 100;

impl Default for Config {
    fn default() -> Self {
        Config {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            discard_unknown_fields: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the maximum nesting depth of embedded messages and skipped groups.
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Skip unknown fields without keeping their bytes.
    pub fn discard_unknown_fields(mut self, discard: bool) -> Self {
        self.discard_unknown_fields = discard;
        self
    }

    pub fn recursion_limit(&self) -> u32 {
        self.recursion_limit
    }

    pub fn discards_unknown_fields(&self) -> bool {
        self.discard_unknown_fields
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.recursion_limit(), 100);
        assert!(!config.discards_unknown_fields());
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_config_serde() {
        let config: Config =
            serde_json::from_str(r#"{"recursion-limit": 8, "discard-unknown-fields": true}"#)
                .unwrap();
        assert_eq!(
            config,
            Config::new().with_recursion_limit(8).discard_unknown_fields(true)
        );

        // Missing keys fall back to the defaults.
        let config: Config = serde_json::from_str(r#"{"recursion-limit": 8}"#).unwrap();
        assert!(!config.discards_unknown_fields());

        let json = serde_json::to_string(&Config::default()).unwrap();
        assert_eq!(
            json,
            r#"{"recursion-limit":100,"discard-unknown-fields":false}"#
        );
    }
}
