//! Module: config
//! Responsibility: endpoint-independent settings for filtering, paging, and responses.
//! Does not own: per-endpoint allow-lists or search fields (see `resource`).
//! Boundary: parsed once at startup and shared read-only by every view.

use crate::db::filter::MalformedQueryPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ScaffoldConfig
///
/// Global settings. Field names are snake_case; the upper-case setting
/// names (`ALLOW_ALL_DEEP_PARAMS`, ...) are accepted as aliases.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Skip the allow-list check for every caller.
    #[serde(alias = "ALLOW_ALL_DEEP_PARAMS")]
    pub allow_all_deep_params: bool,

    /// `true` degrades rejected clauses to match-everything, `false` to match-nothing.
    #[serde(alias = "ALLOW_MALFORMED_QUERY")]
    pub allow_malformed_query: bool,

    #[serde(alias = "REST_DEEP_DEFAULT_DISTINCT")]
    pub default_distinct: bool,

    /// Upper bound on leaf clauses in one compound expression.
    #[serde(alias = "MAX_COMPLEX_CLAUSES")]
    pub max_complex_clauses: usize,

    #[serde(alias = "SEARCH_PARAM")]
    pub search_param: String,

    #[serde(alias = "ORDERING_PARAM")]
    pub ordering_param: String,

    #[serde(alias = "PAGE_SIZE")]
    pub page_size: usize,

    #[serde(alias = "PAGE_SIZE_QUERY_PARAM")]
    pub page_size_query_param: Option<String>,

    #[serde(alias = "MAX_PAGE_SIZE")]
    pub max_page_size: Option<usize>,

    /// App label prefixed to bare permission codenames.
    #[serde(alias = "DEFAULT_PERMISSION_APP")]
    pub default_permission_app: String,

    /// Log debug application errors.
    #[serde(alias = "API_DEBUG")]
    pub api_debug: bool,
}

impl ScaffoldConfig {
    /// Parse and validate settings from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_complex_clauses == 0 {
            return Err(ConfigError::Validation(
                "max_complex_clauses must be at least 1".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Validation(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.max_page_size == Some(0) {
            return Err(ConfigError::Validation(
                "max_page_size must be at least 1 when set".to_string(),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub const fn malformed_query_policy(&self) -> MalformedQueryPolicy {
        MalformedQueryPolicy::from_allow_malformed(self.allow_malformed_query)
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            allow_all_deep_params: false,
            allow_malformed_query: true,
            default_distinct: false,
            max_complex_clauses: 256,
            search_param: "search".to_string(),
            ordering_param: "ordering".to_string(),
            page_size: 10,
            page_size_query_param: Some("page_size".to_string()),
            max_page_size: None,
            default_permission_app: "core".to_string(),
            api_debug: false,
        }
    }
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ScaffoldConfig::from_toml_str("").expect("empty config parses");

        assert_eq!(config, ScaffoldConfig::default());
        assert_eq!(
            config.malformed_query_policy(),
            MalformedQueryPolicy::Permissive
        );
    }

    #[test]
    fn upper_case_setting_names_are_accepted() {
        let config = ScaffoldConfig::from_toml_str(
            r#"
ALLOW_ALL_DEEP_PARAMS = true
ALLOW_MALFORMED_QUERY = false
REST_DEEP_DEFAULT_DISTINCT = true
max_page_size = 50
"#,
        )
        .expect("config parses");

        assert!(config.allow_all_deep_params);
        assert!(config.default_distinct);
        assert_eq!(config.max_page_size, Some(50));
        assert_eq!(config.malformed_query_policy(), MalformedQueryPolicy::Strict);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err =
            ScaffoldConfig::from_toml_str("allow_everything = true").expect_err("unknown key");

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_limits_fail_validation() {
        let err = ScaffoldConfig::from_toml_str("max_complex_clauses = 0").expect_err("zero cap");

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn toml_output_parses_back() {
        let config = ScaffoldConfig {
            max_page_size: Some(25),
            ..ScaffoldConfig::default()
        };
        let rendered = config.to_toml_string().expect("serialize");

        assert_eq!(ScaffoldConfig::from_toml_str(&rendered).expect("reparse"), config);
    }
}
