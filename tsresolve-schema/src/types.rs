//! Schema type definitions.
//!
//! This module contains the data structures representing a GraphQL schema
//! graph: named types, their fields and arguments, and type references.
//! A [`Schema`] is built once, either from SDL or programmatically, and is
//! only read afterwards.

use std::collections::HashMap;
use std::fmt;
use tsresolve_core::WrapperLayer;

/// Default name of the query root type.
pub const DEFAULT_QUERY_TYPE: &str = "Query";
/// Default name of the mutation root type.
pub const DEFAULT_MUTATION_TYPE: &str = "Mutation";
/// Default name of the subscription root type.
pub const DEFAULT_SUBSCRIPTION_TYPE: &str = "Subscription";

/// Complete GraphQL schema graph.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Named type definitions in declaration order.
    pub types: Vec<NamedType>,
    /// Query root type declared by a `schema` definition.
    pub query_type: Option<String>,
    /// Mutation root type declared by a `schema` definition.
    pub mutation_type: Option<String>,
    /// Subscription root type declared by a `schema` definition.
    pub subscription_type: Option<String>,
    /// Type lookup map (built while types are added).
    type_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type definition to the schema.
    pub fn add_type(&mut self, named_type: impl Into<NamedType>) {
        let named_type = named_type.into();
        let name = named_type.name().to_string();
        let index = self.types.len();
        self.types.push(named_type);
        self.type_map.insert(name, index);
    }

    /// Adds a type definition, returning the schema for chaining.
    #[must_use]
    pub fn with_type(mut self, named_type: impl Into<NamedType>) -> Self {
        self.add_type(named_type);
        self
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&NamedType> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Looks up a type by name for modification.
    pub fn get_type_mut(&mut self, name: &str) -> Option<&mut NamedType> {
        self.type_map.get(name).map(|&idx| &mut self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Builds the type lookup map from the types vector.
    pub fn build_type_map(&mut self) {
        self.type_map.clear();
        for (idx, named_type) in self.types.iter().enumerate() {
            self.type_map.insert(named_type.name().to_string(), idx);
        }
    }

    /// Iterates over object type definitions in declaration order.
    pub fn objects(&self) -> impl Iterator<Item = &ObjectDef> {
        self.types.iter().filter_map(|t| match t {
            NamedType::Object(object) => Some(object),
            _ => None,
        })
    }

    /// Iterates over union type definitions in declaration order.
    pub fn unions(&self) -> impl Iterator<Item = &UnionDef> {
        self.types.iter().filter_map(|t| match t {
            NamedType::Union(union) => Some(union),
            _ => None,
        })
    }

    /// Returns the effective query root type name.
    ///
    /// An explicit `schema { query: ... }` wins; otherwise an object type
    /// named `Query` is the root.
    #[must_use]
    pub fn query_type_name(&self) -> Option<&str> {
        self.root_type_name(self.query_type.as_deref(), DEFAULT_QUERY_TYPE)
    }

    /// Returns the effective mutation root type name.
    #[must_use]
    pub fn mutation_type_name(&self) -> Option<&str> {
        self.root_type_name(self.mutation_type.as_deref(), DEFAULT_MUTATION_TYPE)
    }

    /// Returns the effective subscription root type name.
    #[must_use]
    pub fn subscription_type_name(&self) -> Option<&str> {
        self.root_type_name(self.subscription_type.as_deref(), DEFAULT_SUBSCRIPTION_TYPE)
    }

    fn root_type_name<'a>(
        &'a self,
        declared: Option<&'a str>,
        default: &'a str,
    ) -> Option<&'a str> {
        if self.has_schema_definition() {
            return declared;
        }
        matches!(self.get_type(default), Some(NamedType::Object(_))).then_some(default)
    }

    /// Returns true if the schema declares its root types explicitly.
    #[must_use]
    pub fn has_schema_definition(&self) -> bool {
        self.query_type.is_some()
            || self.mutation_type.is_some()
            || self.subscription_type.is_some()
    }
}

/// Kind of a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Object type with fields.
    Object,
    /// Interface type with fields.
    Interface,
    /// Union of object types.
    Union,
    /// Scalar type.
    Scalar,
    /// Enum type.
    Enum,
    /// Input object type.
    InputObject,
}

impl TypeKind {
    /// Returns the lowercase kind name used in messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Scalar => "scalar",
            Self::Enum => "enum",
            Self::InputObject => "input object",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named type definition variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamedType {
    /// Object type definition.
    Object(ObjectDef),
    /// Interface type definition.
    Interface(InterfaceDef),
    /// Union type definition.
    Union(UnionDef),
    /// Custom scalar definition.
    Scalar(ScalarDef),
    /// Enum type definition.
    Enum(EnumDef),
    /// Input object type definition.
    InputObject(InputObjectDef),
}

impl NamedType {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Object(o) => &o.name,
            Self::Interface(i) => &i.name,
            Self::Union(u) => &u.name,
            Self::Scalar(s) => &s.name,
            Self::Enum(e) => &e.name,
            Self::InputObject(i) => &i.name,
        }
    }

    /// Returns the description of the type.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Object(o) => o.description.as_deref(),
            Self::Interface(i) => i.description.as_deref(),
            Self::Union(u) => u.description.as_deref(),
            Self::Scalar(s) => s.description.as_deref(),
            Self::Enum(e) => e.description.as_deref(),
            Self::InputObject(i) => i.description.as_deref(),
        }
    }

    /// Returns the kind of the type.
    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Object(_) => TypeKind::Object,
            Self::Interface(_) => TypeKind::Interface,
            Self::Union(_) => TypeKind::Union,
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// Returns the output fields of an object or interface type.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        match self {
            Self::Object(o) => &o.fields,
            Self::Interface(i) => &i.fields,
            _ => &[],
        }
    }

    /// Returns the interfaces implemented by an object or interface type.
    #[must_use]
    pub fn implements(&self) -> &[String] {
        match self {
            Self::Object(o) => &o.implements,
            Self::Interface(i) => &i.implements,
            _ => &[],
        }
    }
}

impl From<ObjectDef> for NamedType {
    fn from(value: ObjectDef) -> Self {
        Self::Object(value)
    }
}

impl From<InterfaceDef> for NamedType {
    fn from(value: InterfaceDef) -> Self {
        Self::Interface(value)
    }
}

impl From<UnionDef> for NamedType {
    fn from(value: UnionDef) -> Self {
        Self::Union(value)
    }
}

impl From<ScalarDef> for NamedType {
    fn from(value: ScalarDef) -> Self {
        Self::Scalar(value)
    }
}

impl From<EnumDef> for NamedType {
    fn from(value: EnumDef) -> Self {
        Self::Enum(value)
    }
}

impl From<InputObjectDef> for NamedType {
    fn from(value: InputObjectDef) -> Self {
        Self::InputObject(value)
    }
}

/// Object type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDef {
    /// Type name.
    pub name: String,
    /// Type description.
    pub description: Option<String>,
    /// Implemented interfaces.
    pub implements: Vec<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl ObjectDef {
    /// Creates an object type without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            implements: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Declares an implemented interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }
}

/// Interface type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDef {
    /// Type name.
    pub name: String,
    /// Type description.
    pub description: Option<String>,
    /// Implemented interfaces.
    pub implements: Vec<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl InterfaceDef {
    /// Creates an interface type without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            implements: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// Union type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionDef {
    /// Type name.
    pub name: String,
    /// Type description.
    pub description: Option<String>,
    /// Member type names as declared, repeats included.
    pub members: Vec<String>,
}

impl UnionDef {
    /// Creates a union from its declared members.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Custom scalar definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarDef {
    /// Scalar name.
    pub name: String,
    /// Scalar description.
    pub description: Option<String>,
}

impl ScalarDef {
    /// Creates a custom scalar.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Enum description.
    pub description: Option<String>,
    /// Values in declaration order.
    pub values: Vec<EnumValueDef>,
}

impl EnumDef {
    /// Creates an enum from its value names.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            values: values
                .into_iter()
                .map(|value| EnumValueDef {
                    name: value.into(),
                    description: None,
                })
                .collect(),
        }
    }
}

/// Enum value definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDef {
    /// Value name.
    pub name: String,
    /// Value description.
    pub description: Option<String>,
}

/// Input object type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectDef {
    /// Type name.
    pub name: String,
    /// Type description.
    pub description: Option<String>,
    /// Input fields in declaration order.
    pub fields: Vec<InputValueDef>,
}

impl InputObjectDef {
    /// Creates an input object without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Appends an input field.
    #[must_use]
    pub fn field(mut self, field: InputValueDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// Output field definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field description.
    pub description: Option<String>,
    /// Result type.
    pub ty: TypeRef,
    /// Arguments in declaration order.
    pub arguments: Vec<InputValueDef>,
}

impl FieldDef {
    /// Creates a field without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            arguments: Vec::new(),
        }
    }

    /// Appends an argument.
    #[must_use]
    pub fn argument(mut self, argument: InputValueDef) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Returns the names of arguments a caller must always provide.
    pub fn required_arguments(&self) -> impl Iterator<Item = &str> {
        self.arguments
            .iter()
            .filter(|arg| arg.is_required())
            .map(|arg| arg.name.as_str())
    }
}

/// Argument or input field definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValueDef {
    /// Value name.
    pub name: String,
    /// Value description.
    pub description: Option<String>,
    /// Value type.
    pub ty: TypeRef,
    /// Whether a default value is declared.
    pub has_default: bool,
}

impl InputValueDef {
    /// Creates an input value without a default.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            has_default: false,
        }
    }

    /// Marks the value as having a declared default.
    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Returns true if the value is non-null and has no default.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null() && !self.has_default
    }
}

/// Reference to a type, possibly wrapped in list and non-null modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Reference to a named type.
    Named(String),
    /// List of the inner type.
    List(Box<TypeRef>),
    /// Non-null inner type.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a nullable named reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a non-null named reference.
    #[must_use]
    pub fn named_non_null(name: impl Into<String>) -> Self {
        Self::non_null(Self::named(name))
    }

    /// Wraps a reference in a list.
    #[must_use]
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps a reference in a non-null modifier.
    #[must_use]
    pub fn non_null(inner: TypeRef) -> Self {
        match inner {
            Self::NonNull(_) => inner,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Returns the innermost named type.
    #[must_use]
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }

    /// Returns true if the outermost modifier is non-null.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Returns the list and nullability layers, outermost first.
    #[must_use]
    pub fn layers(&self) -> Vec<WrapperLayer> {
        let mut layers = Vec::new();
        let mut current = self;
        let mut non_null = false;

        loop {
            match current {
                Self::NonNull(inner) => {
                    non_null = true;
                    current = inner;
                }
                Self::List(inner) => {
                    if !non_null {
                        layers.push(WrapperLayer::Nullable);
                    }
                    layers.push(WrapperLayer::List);
                    non_null = false;
                    current = inner;
                }
                Self::Named(_) => {
                    if !non_null {
                        layers.push(WrapperLayer::Nullable);
                    }
                    return layers;
                }
            }
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
