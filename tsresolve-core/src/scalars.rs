//! Scalar representations.
//!
//! Maps GraphQL scalar names to the TypeScript types used for their input
//! and output values, covering the five built-in scalars and any custom
//! scalar declared by the schema.

use crate::config::{CodegenConfig, ScalarOverride};
use indexmap::IndexMap;

/// Name of the emitted scalar lookup type.
pub const SCALARS_TYPE: &str = "Scalars";

/// GraphQL built-in scalar enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinScalar {
    /// Opaque identifier, serialized as a string.
    Id,
    /// UTF-8 character sequence.
    String,
    /// `true` or `false`.
    Boolean,
    /// Signed 32-bit integer.
    Int,
    /// Double-precision floating point.
    Float,
}

impl BuiltinScalar {
    /// All built-in scalars in their canonical emission order.
    pub const ALL: [Self; 5] = [
        Self::Id,
        Self::String,
        Self::Boolean,
        Self::Int,
        Self::Float,
    ];

    /// Returns the GraphQL name of the scalar.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::Float => "Float",
        }
    }

    /// Returns the TypeScript type carrying the scalar's values.
    #[must_use]
    pub const fn ts_type(&self) -> &'static str {
        match self {
            Self::Id | Self::String => "string",
            Self::Boolean => "boolean",
            Self::Int | Self::Float => "number",
        }
    }

    /// Parses a built-in scalar from its GraphQL name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ID" => Some(Self::Id),
            "String" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "Int" => Some(Self::Int),
            "Float" => Some(Self::Float),
            _ => None,
        }
    }

    /// Returns true if every schema carries this scalar, referenced or not.
    ///
    /// The introspection types use `String` and `Boolean`, so both always
    /// belong to a schema's type map.
    #[must_use]
    pub const fn is_always_present(&self) -> bool {
        matches!(self, Self::String | Self::Boolean)
    }
}

/// Input and output representation of one scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScalarRepr {
    /// Type accepted when the scalar appears in an argument or input field.
    pub input: String,
    /// Type produced when the scalar is returned from a field.
    pub output: String,
}

impl ScalarRepr {
    /// Creates a representation with distinct input and output types.
    #[must_use]
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Creates a representation using the same type in both directions.
    #[must_use]
    pub fn uniform(ts_type: impl Into<String>) -> Self {
        let ts_type = ts_type.into();
        Self {
            input: ts_type.clone(),
            output: ts_type,
        }
    }
}

impl From<&ScalarOverride> for ScalarRepr {
    fn from(value: &ScalarOverride) -> Self {
        match value {
            ScalarOverride::Uniform(ts_type) => Self::uniform(ts_type.as_str()),
            ScalarOverride::Split { input, output } => Self::new(input.as_str(), output.as_str()),
        }
    }
}

/// Resolves scalar names to their representations.
#[derive(Debug, Clone)]
pub struct ScalarTable {
    overrides: IndexMap<String, ScalarRepr>,
    default_repr: ScalarRepr,
}

impl ScalarTable {
    /// Creates a scalar table from the generator configuration.
    #[must_use]
    pub fn new(config: &CodegenConfig) -> Self {
        let overrides = config
            .scalars
            .iter()
            .map(|(name, value)| (name.clone(), ScalarRepr::from(value)))
            .collect();

        Self {
            overrides,
            default_repr: ScalarRepr::uniform(config.default_scalar_type.as_str()),
        }
    }

    /// Returns the representation of the named scalar.
    ///
    /// Configured overrides win over built-in defaults; unknown custom
    /// scalars fall back to the configured default scalar type.
    #[must_use]
    pub fn resolve(&self, name: &str) -> ScalarRepr {
        if let Some(repr) = self.overrides.get(name) {
            return repr.clone();
        }

        match BuiltinScalar::from_name(name) {
            Some(builtin) => ScalarRepr::uniform(builtin.ts_type()),
            None => self.default_repr.clone(),
        }
    }

    /// Returns the storage-facing reference to a scalar's output type.
    #[must_use]
    pub fn output_ref(name: &str) -> String {
        format!("{SCALARS_TYPE}['{name}']['output']")
    }

    /// Returns the reference to a scalar's input type.
    #[must_use]
    pub fn input_ref(name: &str) -> String {
        format!("{SCALARS_TYPE}['{name}']['input']")
    }
}

impl Default for ScalarTable {
    fn default() -> Self {
        Self::new(&CodegenConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scalar_from_name() {
        assert_eq!(BuiltinScalar::from_name("ID"), Some(BuiltinScalar::Id));
        assert_eq!(
            BuiltinScalar::from_name("Boolean"),
            Some(BuiltinScalar::Boolean)
        );
        assert_eq!(BuiltinScalar::from_name("Date"), None);
        assert_eq!(BuiltinScalar::from_name("id"), None);
    }

    #[test]
    fn test_builtin_scalar_ts_type() {
        assert_eq!(BuiltinScalar::Id.ts_type(), "string");
        assert_eq!(BuiltinScalar::String.ts_type(), "string");
        assert_eq!(BuiltinScalar::Boolean.ts_type(), "boolean");
        assert_eq!(BuiltinScalar::Int.ts_type(), "number");
        assert_eq!(BuiltinScalar::Float.ts_type(), "number");
    }

    #[test]
    fn test_builtin_names_round_trip_through_all() {
        for scalar in BuiltinScalar::ALL {
            assert_eq!(BuiltinScalar::from_name(scalar.name()), Some(scalar));
        }
    }

    #[test]
    fn test_always_present() {
        assert!(BuiltinScalar::String.is_always_present());
        assert!(BuiltinScalar::Boolean.is_always_present());
        assert!(!BuiltinScalar::Id.is_always_present());
        assert!(!BuiltinScalar::Int.is_always_present());
    }

    #[test]
    fn test_resolve_builtin_and_custom() {
        let table = ScalarTable::default();

        assert_eq!(table.resolve("Int"), ScalarRepr::uniform("number"));
        assert_eq!(table.resolve("Date"), ScalarRepr::uniform("any"));
    }

    #[test]
    fn test_resolve_with_overrides() {
        let config = CodegenConfig::default()
            .with_scalar("Date", ScalarOverride::Uniform("Date".to_string()))
            .with_scalar(
                "ID",
                ScalarOverride::Split {
                    input: "string | number".to_string(),
                    output: "string".to_string(),
                },
            )
            .with_default_scalar_type("unknown");
        let table = ScalarTable::new(&config);

        assert_eq!(table.resolve("Date"), ScalarRepr::uniform("Date"));
        assert_eq!(
            table.resolve("ID"),
            ScalarRepr::new("string | number", "string")
        );
        assert_eq!(table.resolve("JSON"), ScalarRepr::uniform("unknown"));
    }

    #[test]
    fn test_scalar_refs() {
        assert_eq!(ScalarTable::output_ref("ID"), "Scalars['ID']['output']");
        assert_eq!(ScalarTable::input_ref("Date"), "Scalars['Date']['input']");
    }
}
