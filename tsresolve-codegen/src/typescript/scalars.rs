//! `Scalars` table generation.

use super::ast::{Declaration, ObjectType, Property, TsType};
use tsresolve_core::scalars::SCALARS_TYPE;
use tsresolve_core::{BuiltinScalar, CodegenConfig, ScalarTable};
use tsresolve_schema::SchemaIr;

/// Generator for the `Scalars` type.
pub struct ScalarsGenerator<'a> {
    ir: &'a SchemaIr,
    table: ScalarTable,
}

impl<'a> ScalarsGenerator<'a> {
    /// Creates a new scalars generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &CodegenConfig) -> Self {
        Self {
            ir,
            table: ScalarTable::new(config),
        }
    }

    /// Generates the `Scalars` declaration.
    ///
    /// All five built-in scalars are listed, whether or not the schema uses
    /// them, followed by the schema's custom scalars in type order.
    #[must_use]
    pub fn generate(&self) -> Declaration {
        let names = BuiltinScalar::ALL
            .into_iter()
            .map(|scalar| scalar.name())
            .chain(self.ir.custom_scalars());

        let body: ObjectType = names
            .map(|name| {
                let repr = self.table.resolve(name);
                Property::new(
                    name,
                    TsType::raw(format!(
                        "{{ input: {}; output: {}; }}",
                        repr.input, repr.output
                    )),
                )
            })
            .collect();

        Declaration::type_alias(SCALARS_TYPE, Vec::new(), TsType::Object(body))
            .description(Some("All built-in and custom scalars, mapped to their actual values"))
    }
}
