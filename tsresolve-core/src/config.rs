//! Generator configuration.
//!
//! The configuration is a plain immutable value handed to every component
//! that reads it. It deserializes from the same camelCase JSON document
//! accepted by resolver code generators, for example:
//!
//! ```json
//! {
//!   "generateInternalResolversIfNeeded": { "__isTypeOf": true },
//!   "scalars": { "Date": "string", "Upload": { "input": "File", "output": "never" } },
//!   "contextType": "Context"
//! }
//! ```

use crate::error::{ConfigError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default type used for custom scalars without an override.
pub const DEFAULT_SCALAR_TYPE: &str = "any";
/// Default resolver context type.
pub const DEFAULT_CONTEXT_TYPE: &str = "any";
/// Default shape of root operation types.
pub const DEFAULT_ROOT_VALUE_TYPE: &str = "{}";
/// Default body of the `ResolverTypeWrapper<T>` helper.
pub const DEFAULT_RESOLVER_TYPE_WRAPPER_SIGNATURE: &str = "Promise<T> | T";
/// Default body of the `Maybe<T>` helper.
pub const DEFAULT_MAYBE_VALUE: &str = "T | null";

/// Configuration of a resolver types generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodegenConfig {
    /// Controls which internal resolvers are emitted.
    pub generate_internal_resolvers_if_needed: InternalResolversConfig,
    /// Custom scalar representations, keyed by scalar name.
    pub scalars: IndexMap<String, ScalarOverride>,
    /// Representation of custom scalars without an override.
    pub default_scalar_type: String,
    /// Default value of the `ContextType` parameter of every contract.
    pub context_type: String,
    /// Shape of root operation types in both type tables.
    pub root_value_type: String,
    /// Body of the emitted `ResolverTypeWrapper<T>` helper.
    pub resolver_type_wrapper_signature: String,
    /// Body of the emitted `Maybe<T>` helper.
    pub maybe_value: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            generate_internal_resolvers_if_needed: InternalResolversConfig::default(),
            scalars: IndexMap::new(),
            default_scalar_type: DEFAULT_SCALAR_TYPE.to_string(),
            context_type: DEFAULT_CONTEXT_TYPE.to_string(),
            root_value_type: DEFAULT_ROOT_VALUE_TYPE.to_string(),
            resolver_type_wrapper_signature: DEFAULT_RESOLVER_TYPE_WRAPPER_SIGNATURE.to_string(),
            maybe_value: DEFAULT_MAYBE_VALUE.to_string(),
        }
    }
}

impl CodegenConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    /// Returns `ConfigError` if the document is malformed, holds a value of
    /// the wrong type (a non-boolean `__isTypeOf` for instance), or fails
    /// [`CodegenConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks that every textual option holds a usable type expression.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first empty option.
    pub fn validate(&self) -> Result<()> {
        let options = [
            ("defaultScalarType", &self.default_scalar_type),
            ("contextType", &self.context_type),
            ("rootValueType", &self.root_value_type),
            (
                "resolverTypeWrapperSignature",
                &self.resolver_type_wrapper_signature,
            ),
            ("maybeValue", &self.maybe_value),
        ];

        for (option, value) in options {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid_value(option, "must not be empty"));
            }
        }

        for (name, value) in &self.scalars {
            let empty = match value {
                ScalarOverride::Uniform(ts_type) => ts_type.trim().is_empty(),
                ScalarOverride::Split { input, output } => {
                    input.trim().is_empty() || output.trim().is_empty()
                }
            };
            if empty {
                return Err(ConfigError::invalid_value(
                    format!("scalars.{name}"),
                    "scalar representation must not be empty",
                ));
            }
        }

        Ok(())
    }

    /// Returns true if type-identity predicates are limited to union members.
    #[must_use]
    pub const fn is_type_of_only_if_needed(&self) -> bool {
        self.generate_internal_resolvers_if_needed.is_type_of
    }

    /// Sets the `generateInternalResolversIfNeeded.__isTypeOf` flag.
    #[must_use]
    pub fn with_is_type_of_if_needed(mut self, enabled: bool) -> Self {
        self.generate_internal_resolvers_if_needed.is_type_of = enabled;
        self
    }

    /// Adds or replaces a scalar override.
    #[must_use]
    pub fn with_scalar(mut self, name: impl Into<String>, value: ScalarOverride) -> Self {
        self.scalars.insert(name.into(), value);
        self
    }

    /// Sets the type used for custom scalars without an override.
    #[must_use]
    pub fn with_default_scalar_type(mut self, ts_type: impl Into<String>) -> Self {
        self.default_scalar_type = ts_type.into();
        self
    }

    /// Sets the default resolver context type.
    #[must_use]
    pub fn with_context_type(mut self, ts_type: impl Into<String>) -> Self {
        self.context_type = ts_type.into();
        self
    }

    /// Sets the shape of root operation types.
    #[must_use]
    pub fn with_root_value_type(mut self, ts_type: impl Into<String>) -> Self {
        self.root_value_type = ts_type.into();
        self
    }
}

/// Options of the `generateInternalResolversIfNeeded` group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternalResolversConfig {
    /// When true, `__isTypeOf` is only emitted for union members.
    #[serde(rename = "__isTypeOf")]
    pub is_type_of: bool,
}

/// Representation override for one scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarOverride {
    /// Same type for input and output.
    Uniform(String),
    /// Distinct input and output types.
    Split {
        /// Input type.
        input: String,
        /// Output type.
        output: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CodegenConfig::default();

        assert!(!config.is_type_of_only_if_needed());
        assert!(config.scalars.is_empty());
        assert_eq!(config.default_scalar_type, "any");
        assert_eq!(config.context_type, "any");
        assert_eq!(config.root_value_type, "{}");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_empty_json_uses_defaults() {
        let config = CodegenConfig::from_json("{}").expect("Failed to parse");
        assert_eq!(config, CodegenConfig::default());
    }

    #[test]
    fn test_from_json_is_type_of_flag() {
        let config = CodegenConfig::from_json(
            r#"{ "generateInternalResolversIfNeeded": { "__isTypeOf": true } }"#,
        )
        .expect("Failed to parse");
        assert!(config.is_type_of_only_if_needed());

        let config =
            CodegenConfig::from_json(r#"{ "generateInternalResolversIfNeeded": {} }"#)
                .expect("Failed to parse");
        assert!(!config.is_type_of_only_if_needed());
    }

    #[test]
    fn test_from_json_rejects_non_boolean_flag() {
        let result = CodegenConfig::from_json(
            r#"{ "generateInternalResolversIfNeeded": { "__isTypeOf": "yes" } }"#,
        );
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_json_scalars() {
        let config = CodegenConfig::from_json(
            r#"{
                "scalars": {
                    "Date": "string",
                    "Upload": { "input": "File", "output": "never" }
                },
                "contextType": "MyContext"
            }"#,
        )
        .expect("Failed to parse");

        assert_eq!(
            config.scalars.get("Date"),
            Some(&ScalarOverride::Uniform("string".to_string()))
        );
        assert_eq!(
            config.scalars.get("Upload"),
            Some(&ScalarOverride::Split {
                input: "File".to_string(),
                output: "never".to_string(),
            })
        );
        assert_eq!(config.context_type, "MyContext");
        let keys: Vec<_> = config.scalars.keys().cloned().collect();
        assert_eq!(keys, vec!["Date".to_string(), "Upload".to_string()]);
    }

    #[test]
    fn test_validate_rejects_empty_option() {
        let config = CodegenConfig::default().with_context_type("  ");
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref option, .. }) if option == "contextType"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_scalar() {
        let config =
            CodegenConfig::default().with_scalar("Date", ScalarOverride::Uniform(String::new()));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_methods() {
        let config = CodegenConfig::default()
            .with_is_type_of_if_needed(true)
            .with_root_value_type("RootValue")
            .with_default_scalar_type("unknown");

        assert!(config.is_type_of_only_if_needed());
        assert_eq!(config.root_value_type, "RootValue");
        assert_eq!(config.default_scalar_type, "unknown");
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(br#"{ "rootValueType": "Root" }"#)
            .expect("Failed to write config");

        let config = CodegenConfig::from_path(file.path()).expect("Failed to load");
        assert_eq!(config.root_value_type, "Root");
    }

    #[test]
    fn test_from_missing_path() {
        let result = CodegenConfig::from_path(Path::new("/nonexistent/tsresolve.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
