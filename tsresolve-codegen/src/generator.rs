//! Main code generator.

use crate::error::CodegenError;
use crate::resolvers::contracts::resolvers_aggregate;
use crate::resolvers::{
    ContractBuilder, ResolverContract, ScalarContract, TypeTables, UnionMappings, signatures,
};
use crate::typescript::{Document, EnumGenerator, ScalarsGenerator, Section, TypeGenerator};
use tsresolve_core::CodegenConfig;
use tsresolve_schema::{NamedType, SchemaIr};

/// Everything derived from one schema, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverDescriptors {
    /// Union variant mappings.
    pub unions: UnionMappings,
    /// `ResolversTypes` and `ResolversParentTypes`.
    pub tables: TypeTables,
    /// Object, interface and union contracts, in type order.
    pub contracts: Vec<ResolverContract>,
    /// Custom scalar configuration interfaces, in type order.
    pub scalars: Vec<ScalarContract>,
}

impl ResolverDescriptors {
    /// Gets the contract of a type by name.
    #[must_use]
    pub fn contract(&self, type_name: &str) -> Option<&ResolverContract> {
        self.contracts
            .iter()
            .find(|contract| contract.type_name == type_name)
    }
}

/// Code generator for TypeScript resolver types.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    config: &'a CodegenConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    ///
    /// # Arguments
    /// * `ir` - Schema intermediate representation
    /// * `config` - Generator configuration
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a CodegenConfig) -> Self {
        Self { ir, config }
    }

    /// Derives all resolver descriptors.
    ///
    /// # Errors
    /// Returns `CodegenError` if the configuration is invalid, a type
    /// reference does not resolve, or a union has no members. Nothing is
    /// derived in that case.
    pub fn build(&self) -> Result<ResolverDescriptors, CodegenError> {
        self.config.validate()?;
        self.check_references()?;

        let unions = UnionMappings::from_ir(self.ir)?;
        tracing::debug!("Mapped {} unions", unions.len());

        let tables = TypeTables::from_ir(self.ir, self.config);
        tracing::debug!("Built resolver type tables with {} entries", tables.len());

        let builder = ContractBuilder::new(self.ir, self.config, &unions);
        let contracts = builder.build();
        let scalars = builder.build_scalars();
        tracing::debug!(
            "Built {} resolver contracts ({} with __isTypeOf) and {} scalar configs",
            contracts.len(),
            contracts.iter().filter(|contract| contract.is_type_of).count(),
            scalars.len()
        );

        Ok(ResolverDescriptors {
            unions,
            tables,
            contracts,
            scalars,
        })
    }

    /// Builds the complete document.
    ///
    /// # Errors
    /// Returns `CodegenError` if [`Generator::build`] fails.
    pub fn document(&self) -> Result<Document, CodegenError> {
        let descriptors = self.build()?;
        let mut document = Document::new();

        let mut import = Section::new();
        import.push(signatures::import(!descriptors.scalars.is_empty()));
        document.push_section(import);

        document.push_section(signatures::type_helpers(self.config));

        let mut base_types = Section::new();
        base_types.push(ScalarsGenerator::new(self.ir, self.config).generate());
        base_types.extend(EnumGenerator::new(self.ir).generate());
        base_types.extend(TypeGenerator::new(self.ir).generate());
        document.push_section(base_types);

        document.push_section(signatures::resolver_helpers(self.config));

        let mut tables = Section::new();
        tables.extend(descriptors.unions.to_declaration());
        tables.push(descriptors.tables.resolvers_types());
        tables.push(descriptors.tables.resolvers_parent_types());
        document.push_section(tables);

        let mut contracts = Section::new();
        for contract in &descriptors.contracts {
            contracts.push(contract.to_declaration(self.config));
        }
        contracts.extend(descriptors.scalars.iter().map(ScalarContract::to_declaration));
        contracts.push(resolvers_aggregate(self.ir, self.config));
        document.push_section(contracts);

        Ok(document)
    }

    /// Generates the complete TypeScript document.
    ///
    /// # Returns
    /// Generated TypeScript source as a string.
    ///
    /// # Errors
    /// Returns `CodegenError` if [`Generator::build`] fails.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let output = self.document()?.to_string();
        tracing::info!(
            "Generated resolver types for {} schema types ({} bytes)",
            self.ir.types.len(),
            output.len()
        );
        Ok(output)
    }

    /// Checks that every type the graph references is part of it.
    fn check_references(&self) -> Result<(), CodegenError> {
        for resolved in self.ir.types.values() {
            let Some(definition) = resolved.definition() else {
                continue;
            };
            for interface in definition.implements() {
                self.ensure_known(interface, &resolved.name)?;
            }
            if let NamedType::InputObject(input) = definition {
                for field in &input.fields {
                    self.ensure_known(
                        field.ty.named_type(),
                        &format!("{}.{}", resolved.name, field.name),
                    )?;
                }
            }
            for field in resolved.fields() {
                let coordinate = format!("{}.{}", resolved.name, field.name);
                self.ensure_known(field.ty.named_type(), &coordinate)?;
                for argument in &field.arguments {
                    self.ensure_known(
                        argument.ty.named_type(),
                        &format!("{coordinate}.{}", argument.name),
                    )?;
                }
            }
            for member in resolved.members() {
                self.ensure_known(member, &resolved.name)?;
            }
        }
        Ok(())
    }

    fn ensure_known(&self, name: &str, referenced_by: &str) -> Result<(), CodegenError> {
        if self.ir.get_type(name).is_some() {
            Ok(())
        } else {
            Err(CodegenError::unknown_type(name, referenced_by))
        }
    }
}
