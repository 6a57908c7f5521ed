//! Minimal TypeScript declaration AST.
//!
//! Only the constructs the generated document needs: type references,
//! indexed access, string literals, unions and object literals, wrapped in
//! exported declarations. Every node renders through `Display`.

use std::fmt;

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Named type with optional generic arguments: `Foo<A, B>`.
    Reference {
        /// Referenced type name.
        name: String,
        /// Generic arguments.
        params: Vec<TsType>,
    },
    /// Indexed access: `Foo['key']`.
    Index {
        /// Indexed type.
        target: Box<TsType>,
        /// Property key.
        key: String,
    },
    /// Single-quoted string literal type.
    Literal(String),
    /// Union of types: `A | B`.
    Union(Vec<TsType>),
    /// Object literal type.
    Object(ObjectType),
    /// Type text emitted verbatim.
    Raw(String),
}

impl TsType {
    /// Creates a reference to a named type without generic arguments.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Reference {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Creates a generic reference: `name<params>`.
    #[must_use]
    pub fn generic(name: impl Into<String>, params: Vec<TsType>) -> Self {
        Self::Reference {
            name: name.into(),
            params,
        }
    }

    /// Creates an indexed access on this type.
    #[must_use]
    pub fn index(self, key: impl Into<String>) -> Self {
        Self::Index {
            target: Box::new(self),
            key: key.into(),
        }
    }

    /// Creates a string literal type.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Creates verbatim type text.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference { name, params } => {
                f.write_str(name)?;
                if !params.is_empty() {
                    f.write_str("<")?;
                    write_separated(f, params, ", ")?;
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::Index { target, key } => write!(f, "{target}['{key}']"),
            Self::Literal(value) => write!(f, "'{value}'"),
            Self::Union(members) => write_separated(f, members, " | "),
            Self::Object(object) => object.fmt(f),
            Self::Raw(text) => f.write_str(text),
        }
    }
}

fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// A property of an object literal type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    key: String,
    value: TsType,
    optional: bool,
    description: Option<String>,
}

impl Property {
    /// Creates a required property.
    pub fn new(key: impl Into<String>, value: TsType) -> Self {
        Self {
            key: key.into(),
            value,
            optional: false,
            description: None,
        }
    }

    /// Marks the property optional (`key?: T`).
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Marks the property optional when `optional` is true.
    #[must_use]
    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Attaches a doc comment.
    #[must_use]
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    /// Returns the property key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the property type.
    #[must_use]
    pub fn value(&self) -> &TsType {
        &self.value
    }

    /// Returns true for optional properties.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = if self.optional { "?" } else { "" };
        write!(f, "{}{optional}: {}", self.key, self.value)
    }
}

/// An object literal type, rendered one property per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectType {
    properties: Vec<Property>,
}

impl ObjectType {
    /// Creates an empty object type.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property.
    pub fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Appends a property, builder style.
    #[must_use]
    pub fn property(mut self, property: Property) -> Self {
        self.push_property(property);
        self
    }

    /// Returns the properties in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

impl FromIterator<Property> for ObjectType {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.properties.is_empty() {
            return f.write_str("{}");
        }

        f.write_str("{\n")?;
        for property in &self.properties {
            if let Some(description) = &property.description {
                writeln!(f, "  {}", DocComment(description))?;
            }
            writeln!(f, "  {property};")?;
        }
        f.write_str("}")
    }
}

/// A generic type parameter: `Name extends Constraint = Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParam {
    name: String,
    constraint: Option<TsType>,
    default: Option<TsType>,
}

impl TypeParam {
    /// Creates an unconstrained parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
            default: None,
        }
    }

    /// Sets the `extends` constraint.
    #[must_use]
    pub fn extends(mut self, constraint: TsType) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Sets the default type.
    #[must_use]
    pub fn default_to(mut self, default: TsType) -> Self {
        self.default = Some(default);
        self
    }
}

impl fmt::Display for TypeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(constraint) = &self.constraint {
            write!(f, " extends {constraint}")?;
        }
        if let Some(default) = &self.default {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}

struct TypeParams<'a>(&'a [TypeParam]);

impl fmt::Display for TypeParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        write_separated(f, self.0, ", ")?;
        f.write_str(">")
    }
}

struct DocComment<'a>(&'a str);

impl fmt::Display for DocComment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.trim().replace("*/", "*\\/");
        if text.contains('\n') {
            f.write_str("/**\n")?;
            for line in text.lines() {
                writeln!(f, " * {}", line.trim_end())?;
            }
            f.write_str(" */")
        } else {
            write!(f, "/** {text} */")
        }
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    kind: DeclarationKind,
    description: Option<String>,
}

/// The declaration forms emitted by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `import { a, b } from 'module';`
    Import {
        /// Imported names.
        names: Vec<String>,
        /// Module specifier.
        module: String,
    },
    /// `export type Name<Params> = Body;`
    TypeAlias {
        /// Alias name.
        name: String,
        /// Generic parameters.
        params: Vec<TypeParam>,
        /// Aliased type.
        body: TsType,
    },
    /// `export enum Name { Member = 'VALUE' }`
    Enum {
        /// Enum name.
        name: String,
        /// Member name and string value pairs.
        members: Vec<(String, String)>,
    },
    /// `export interface Name extends Base { ... }`
    Interface {
        /// Interface name.
        name: String,
        /// Generic parameters.
        params: Vec<TypeParam>,
        /// Extended type.
        extends: Option<TsType>,
        /// Interface body.
        body: ObjectType,
    },
    /// Declaration text emitted verbatim.
    Verbatim(String),
}

impl Declaration {
    /// Creates a type alias declaration.
    pub fn type_alias(name: impl Into<String>, params: Vec<TypeParam>, body: TsType) -> Self {
        DeclarationKind::TypeAlias {
            name: name.into(),
            params,
            body,
        }
        .into()
    }

    /// Creates a verbatim declaration.
    pub fn verbatim(text: impl Into<String>) -> Self {
        DeclarationKind::Verbatim(text.into()).into()
    }

    /// Attaches a doc comment.
    #[must_use]
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    /// Returns the declared name, if the declaration has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            DeclarationKind::TypeAlias { name, .. }
            | DeclarationKind::Enum { name, .. }
            | DeclarationKind::Interface { name, .. } => Some(name),
            DeclarationKind::Import { .. } | DeclarationKind::Verbatim(_) => None,
        }
    }

    /// Returns the declaration form.
    #[must_use]
    pub fn kind(&self) -> &DeclarationKind {
        &self.kind
    }
}

impl From<DeclarationKind> for Declaration {
    fn from(kind: DeclarationKind) -> Self {
        Self {
            kind,
            description: None,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(description) = &self.description {
            writeln!(f, "{}", DocComment(description))?;
        }

        match &self.kind {
            DeclarationKind::Import { names, module } => {
                write!(f, "import {{ {} }} from '{module}';", names.join(", "))
            }
            DeclarationKind::TypeAlias { name, params, body } => {
                write!(f, "export type {name}{} = {body};", TypeParams(params))
            }
            DeclarationKind::Enum { name, members } => {
                writeln!(f, "export enum {name} {{")?;
                for (i, (member, value)) in members.iter().enumerate() {
                    let separator = if i + 1 < members.len() { "," } else { "" };
                    writeln!(f, "  {member} = '{value}'{separator}")?;
                }
                f.write_str("}")
            }
            DeclarationKind::Interface {
                name,
                params,
                extends,
                body,
            } => {
                write!(f, "export interface {name}{}", TypeParams(params))?;
                if let Some(extends) = extends {
                    write!(f, " extends {extends}")?;
                }
                write!(f, " {body}")
            }
            DeclarationKind::Verbatim(text) => f.write_str(text),
        }
    }
}

/// A group of declarations rendered together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    declarations: Vec<Declaration>,
    compact: bool,
}

impl Section {
    /// Creates a section whose declarations are separated by blank lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a section whose declarations are placed on consecutive lines.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            declarations: Vec::new(),
            compact: true,
        }
    }

    /// Appends a declaration.
    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Returns true if the section has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Returns the declarations in order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

impl Extend<Declaration> for Section {
    fn extend<I: IntoIterator<Item = Declaration>>(&mut self, iter: I) {
        self.declarations.extend(iter);
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.compact { "\n" } else { "\n\n" };
        write_separated(f, &self.declarations, separator)
    }
}

/// A complete generated document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section; empty sections are dropped.
    pub fn push_section(&mut self, section: Section) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }

    /// Finds a declaration by name across all sections.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.sections
            .iter()
            .flat_map(Section::declarations)
            .find(|declaration| declaration.name() == Some(name))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.sections, "\n\n")?;
        if !self.sections.is_empty() {
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn test_generic_reference_and_index() {
        let ty = TsType::generic(
            "ResolverTypeWrapper",
            vec![TsType::ident("Scalars").index("ID").index("output")],
        );
        expect!["ResolverTypeWrapper<Scalars['ID']['output']>"].assert_eq(&ty.to_string());
    }

    #[test]
    fn test_union_of_literals() {
        let ty = TsType::Union(vec![TsType::literal("A"), TsType::literal("B")]);
        expect!["'A' | 'B'"].assert_eq(&ty.to_string());
    }

    #[test]
    fn test_empty_object() {
        expect!["{}"].assert_eq(&ObjectType::new().to_string());
    }

    #[test]
    fn test_type_alias_with_object_body() {
        let body = ObjectType::new()
            .property(Property::new("__typename", TsType::literal("User")).optional())
            .property(
                Property::new("id", TsType::ident("Scalars").index("ID").index("output"))
                    .description(Some("Unique id")),
            );
        let declaration = Declaration::type_alias("User", Vec::new(), TsType::Object(body));

        expect![[r#"
            export type User = {
              __typename?: 'User';
              /** Unique id */
              id: Scalars['ID']['output'];
            };"#]]
        .assert_eq(&declaration.to_string());
    }

    #[test]
    fn test_type_params() {
        let declaration = Declaration::type_alias(
            "UserResolvers",
            vec![
                TypeParam::new("ContextType").default_to(TsType::raw("any")),
                TypeParam::new("ParentType")
                    .extends(TsType::ident("ResolversParentTypes").index("User"))
                    .default_to(TsType::ident("ResolversParentTypes").index("User")),
            ],
            TsType::Object(ObjectType::new()),
        );

        expect!["export type UserResolvers<ContextType = any, ParentType extends ResolversParentTypes['User'] = ResolversParentTypes['User']> = {};"]
            .assert_eq(&declaration.to_string());
    }

    #[test]
    fn test_enum_declaration() {
        let declaration: Declaration = DeclarationKind::Enum {
            name: "Role".to_string(),
            members: vec![
                ("Admin".to_string(), "ADMIN".to_string()),
                ("User".to_string(), "USER".to_string()),
            ],
        }
        .into();

        expect![[r#"
            export enum Role {
              Admin = 'ADMIN',
              User = 'USER'
            }"#]]
        .assert_eq(&declaration.to_string());
    }

    #[test]
    fn test_interface_declaration() {
        let declaration: Declaration = DeclarationKind::Interface {
            name: "DateScalarConfig".to_string(),
            params: Vec::new(),
            extends: Some(TsType::generic(
                "GraphQLScalarTypeConfig",
                vec![TsType::ident("ResolversTypes").index("Date"), TsType::raw("any")],
            )),
            body: ObjectType::new().property(Property::new("name", TsType::literal("Date"))),
        }
        .into();

        expect![[r#"
            export interface DateScalarConfig extends GraphQLScalarTypeConfig<ResolversTypes['Date'], any> {
              name: 'Date';
            }"#]]
        .assert_eq(&declaration.to_string());
    }

    #[test]
    fn test_import_and_multiline_description() {
        let declaration: Declaration = DeclarationKind::Import {
            names: vec!["GraphQLResolveInfo".to_string()],
            module: "graphql".to_string(),
        }
        .into();
        let declaration = declaration.description(Some("first\nsecond"));

        expect![[r#"
            /**
             * first
             * second
             */
            import { GraphQLResolveInfo } from 'graphql';"#]]
        .assert_eq(&declaration.to_string());
    }

    #[test]
    fn test_document_sections() {
        let mut helpers = Section::compact();
        helpers.push(Declaration::verbatim("export type Maybe<T> = T | null;"));
        helpers.push(Declaration::verbatim("export type InputMaybe<T> = Maybe<T>;"));

        let mut types = Section::new();
        types.push(Declaration::type_alias("A", Vec::new(), TsType::raw("{}")));
        types.push(Declaration::type_alias("B", Vec::new(), TsType::raw("{}")));

        let mut document = Document::new();
        document.push_section(helpers);
        document.push_section(Section::new());
        document.push_section(types);

        expect![[r#"
            export type Maybe<T> = T | null;
            export type InputMaybe<T> = Maybe<T>;

            export type A = {};

            export type B = {};
        "#]]
        .assert_eq(&document.to_string());
        assert!(document.find("B").is_some());
        assert!(document.find("Maybe").is_none());
    }
}
