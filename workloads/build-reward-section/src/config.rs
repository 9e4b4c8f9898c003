//! Workload configuration.

use base_errors::LogFormat;

use crate::error::SectionError;

/// Configuration for the section workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionConfig {
    /// Base path or URL the bundled assets are served from.
    pub asset_base: String,
    /// Format of reported error lines.
    pub log_format: LogFormat,
    /// `max-age` of the page response, in seconds.
    pub cache_max_age: u32,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            asset_base: "/assets".to_string(),
            log_format: LogFormat::Json,
            cache_max_age: 3600,
        }
    }
}

impl SectionConfig {
    /// Set the asset base.
    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = base.into();
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Set the cache max-age.
    pub fn with_cache_max_age(mut self, seconds: u32) -> Self {
        self.cache_max_age = seconds;
        self
    }

    /// Build from `key=value` pairs (e.g. Spin variables), starting from
    /// defaults. Unknown keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, SectionError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();

        for (key, value) in pairs {
            match key {
                "asset_base" => {
                    let value = value.trim();
                    if value.is_empty() {
                        return Err(SectionError::InvalidConfig {
                            key: key.to_string(),
                            reason: "must not be empty".to_string(),
                        });
                    }
                    config.asset_base = value.to_string();
                }
                "log_format" => {
                    config.log_format = value.parse::<LogFormat>().map_err(|reason| {
                        SectionError::InvalidConfig {
                            key: key.to_string(),
                            reason,
                        }
                    })?;
                }
                "cache_max_age" => {
                    config.cache_max_age = value.trim().parse::<u32>().map_err(|e| {
                        SectionError::InvalidConfig {
                            key: key.to_string(),
                            reason: e.to_string(),
                        }
                    })?;
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// `cache-control` header value for the page.
    pub fn cache_control(&self) -> String {
        format!(
            "public, max-age={}, stale-while-revalidate=300",
            self.cache_max_age
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SectionConfig::default();
        assert_eq!(config.asset_base, "/assets");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.cache_control(),
            "public, max-age=3600, stale-while-revalidate=300"
        );
    }

    #[test]
    fn test_config_builder() {
        let config = SectionConfig::default()
            .with_asset_base("https://cdn.example.com")
            .with_log_format(LogFormat::Human)
            .with_cache_max_age(60);

        assert_eq!(config.asset_base, "https://cdn.example.com");
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.cache_max_age, 60);
    }

    #[test]
    fn test_from_pairs() {
        let config = SectionConfig::from_pairs([
            ("asset_base", "/static"),
            ("log_format", "human"),
            ("cache_max_age", "120"),
            ("unrelated", "x"),
        ])
        .unwrap();

        assert_eq!(config.asset_base, "/static");
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.cache_max_age, 120);
    }

    #[test]
    fn test_from_pairs_rejects_empty_asset_base() {
        let err = SectionConfig::from_pairs([("asset_base", "  ")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'asset_base': must not be empty"
        );
    }

    #[test]
    fn test_from_pairs_rejects_bad_values() {
        assert!(SectionConfig::from_pairs([("cache_max_age", "soon")]).is_err());
        assert!(SectionConfig::from_pairs([("log_format", "xml")]).is_err());
    }
}
