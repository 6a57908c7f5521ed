//! TypeScript base type generation.
//!
//! These declarations describe the schema's own types (scalars, enums,
//! object shapes, unions, inputs and field argument types). The resolver
//! tables and contracts reference them by name.

pub mod ast;
pub mod enums;
pub mod scalars;
pub mod types;

pub use ast::{
    Declaration, DeclarationKind, Document, ObjectType, Property, Section, TsType, TypeParam,
};
pub use enums::EnumGenerator;
pub use scalars::ScalarsGenerator;
pub use types::TypeGenerator;

use tsresolve_core::ScalarTable;
use tsresolve_core::wrapper::{INPUT_MAYBE, MAYBE, wrap_layers};
use tsresolve_schema::{SchemaIr, TypeKind, TypeRef};

/// Position a type reference appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Object or interface field.
    Output,
    /// Field argument or input object field.
    Input,
}

/// Renders a type reference as its base TypeScript shape.
///
/// Scalars resolve through the `Scalars` table; every other named type is
/// referenced by name.
#[must_use]
pub fn shape_type(ir: &SchemaIr, ty: &TypeRef, position: Position) -> TsType {
    let named = ty.named_type();
    let is_scalar = ir
        .get_type(named)
        .is_some_and(|resolved| resolved.kind == TypeKind::Scalar);

    let (inner, nullable_wrapper) = match position {
        Position::Output if is_scalar => (ScalarTable::output_ref(named), MAYBE),
        Position::Input if is_scalar => (ScalarTable::input_ref(named), INPUT_MAYBE),
        Position::Output => (named.to_string(), MAYBE),
        Position::Input => (named.to_string(), INPUT_MAYBE),
    };

    TsType::raw(wrap_layers(&inner, &ty.layers(), nullable_wrapper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsresolve_schema::parse_schema;

    #[test]
    fn test_shape_type_positions() {
        let schema =
            parse_schema("type Query { posts(first: Int): [Post!]! } type Post { id: ID! }")
                .expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema);

        let posts = TypeRef::non_null(TypeRef::list(TypeRef::named_non_null("Post")));
        assert_eq!(shape_type(&ir, &posts, Position::Output).to_string(), "Array<Post>");

        let first = TypeRef::named("Int");
        assert_eq!(
            shape_type(&ir, &first, Position::Input).to_string(),
            "InputMaybe<Scalars['Int']['input']>"
        );
        assert_eq!(
            shape_type(&ir, &TypeRef::named("ID"), Position::Output).to_string(),
            "Maybe<Scalars['ID']['output']>"
        );
    }
}
