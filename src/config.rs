//! Index configuration.
//!
//! Configuration can be built in code with the `with_*` methods or loaded
//! from JSON (always available) and TOML (with the `toml` feature):
//!
//! ```toml
//! default_limit = 32
//! envelope_pruning = true
//! ```
use crate::error::{PathboxError, Result};

/// Settings for a [`PathIndex`](crate::PathIndex).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Result limit used by `query_along_path_default`
    #[serde(default = "Config::default_limit")]
    pub default_limit: usize,

    /// Prune candidates with the path's bounding box before walking the path
    #[serde(default = "Config::default_envelope_pruning")]
    pub envelope_pruning: bool,
}

impl Config {
    const fn default_limit() -> usize {
        16
    }

    const fn default_envelope_pruning() -> bool {
        true
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "Default limit must be greater than zero");

        if limit > 100_000 {
            log::warn!(
                "Default limit of {} is very large; every query may sort and return that many hits",
                limit
            );
        }

        self.default_limit = limit;
        self
    }

    pub fn with_envelope_pruning(mut self, enabled: bool) -> Self {
        self.envelope_pruning = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(PathboxError::Config(
                "default_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| PathboxError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PathboxError::Config(e.to_string()))
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| PathboxError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PathboxError::Config(e.to_string()))
    }

    /// Load a configuration file, picking the format from its extension.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_toml(&contents),
            other => Err(PathboxError::Config(format!(
                "unsupported config format {:?} for {}",
                other,
                path.display()
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_limit: Self::default_limit(),
            envelope_pruning: Self::default_envelope_pruning(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_limit, 16);
        assert!(config.envelope_pruning);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = Config::from_json(r#"{"default_limit": 4}"#).unwrap();
        assert_eq!(config.default_limit, 4);
        assert!(config.envelope_pruning);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(Config::from_json(r#"{"default_limit": 0}"#).is_err());
        assert!(Config::from_json(r#"{"unknown": true}"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::default()
            .with_default_limit(8)
            .with_envelope_pruning(false);
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml() {
        let config = Config::from_toml("default_limit = 3\nenvelope_pruning = false\n").unwrap();
        assert_eq!(config.default_limit, 3);
        assert!(!config.envelope_pruning);
        assert!(Config::from_toml("default_limit = 0").is_err());

        let toml = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&toml).unwrap(), config);
    }

    #[test]
    #[should_panic(expected = "Default limit must be greater than zero")]
    fn test_zero_limit_panics() {
        let _ = Config::default().with_default_limit(0);
    }
}
