mod error;

use std::collections::HashMap;
use std::fmt::{Display, Formatter as FmtFormatter, Result as FmtResult};

use graphql_parser::schema::{
    self as input, Definition, Field, InputValue, ParseError, SchemaDefinition, TypeDefinition,
};
use tracing::{debug, instrument};

pub use error::TypeGraphError;

use crate::{
    options::OperationKind,
    utils::ast::{TypeHelpers, BUILTIN_SCALARS},
};

pub type SchemaDocument = input::Document<'static, String>;

pub fn parse_schema_document(sdl: &str) -> Result<SchemaDocument, ParseError> {
    graphql_parser::parse_schema::<String>(sdl).map(|document| document.into_static())
}

/// Stable identity of a named type inside one [`TypeGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(usize);

impl TypeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for TypeId {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> FmtResult {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    fn of(definition: &TypeDefinition<'static, String>) -> Self {
        match definition {
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Interface(_) => TypeKind::Interface,
            TypeDefinition::Union(_) => TypeKind::Union,
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::InputObject(_) => TypeKind::InputObject,
        }
    }
}

/// Where a field edge was declared.
#[derive(Debug, Clone, Copy)]
pub enum FieldSource<'d> {
    Output(&'d Field<'static, String>),
    Input(&'d InputValue<'static, String>),
}

impl<'d> FieldSource<'d> {
    pub fn name(&self) -> &'d str {
        match *self {
            FieldSource::Output(field) => field.name.as_str(),
            FieldSource::Input(value) => value.name.as_str(),
        }
    }
}

/// A field of an object, interface or input object with its references resolved.
#[derive(Debug, Clone)]
pub struct FieldEdge<'d> {
    pub source: FieldSource<'d>,
    pub type_id: TypeId,
    /// Argument types, in declaration order.
    pub arguments: Vec<TypeId>,
}

#[derive(Debug, Clone)]
pub struct NamedType<'d> {
    pub name: &'d str,
    pub kind: TypeKind,
    /// `None` for the built-in scalars, which have no textual body.
    pub definition: Option<&'d TypeDefinition<'static, String>>,
    pub fields: Vec<FieldEdge<'d>>,
    pub members: Vec<TypeId>,
    pub interfaces: Vec<TypeId>,
}

impl<'d> NamedType<'d> {
    fn builtin(name: &'static str) -> Self {
        Self {
            name,
            kind: TypeKind::Scalar,
            definition: None,
            fields: vec![],
            members: vec![],
            interfaces: vec![],
        }
    }

    fn declared(name: &'d str, definition: &'d TypeDefinition<'static, String>) -> Self {
        Self {
            name,
            kind: TypeKind::of(definition),
            definition: Some(definition),
            fields: vec![],
            members: vec![],
            interfaces: vec![],
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.definition.is_none()
    }

    pub fn field(&self, name: &str) -> Option<&FieldEdge<'d>> {
        self.fields.iter().find(|edge| edge.source.name() == name)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct RootTypes {
    query: Option<TypeId>,
    mutation: Option<TypeId>,
    subscription: Option<TypeId>,
}

impl RootTypes {
    fn get(&self, kind: OperationKind) -> Option<TypeId> {
        match kind {
            OperationKind::Query => self.query,
            OperationKind::Mutation => self.mutation,
            OperationKind::Subscription => self.subscription,
        }
    }

    fn set(&mut self, kind: OperationKind, type_id: TypeId) {
        match kind {
            OperationKind::Query => self.query = Some(type_id),
            OperationKind::Mutation => self.mutation = Some(type_id),
            OperationKind::Subscription => self.subscription = Some(type_id),
        }
    }
}

const OPERATION_KINDS: [OperationKind; 3] = [
    OperationKind::Query,
    OperationKind::Mutation,
    OperationKind::Subscription,
];

/// Read-only arena of the named types declared in a schema document.
///
/// Built-in scalars are seeded first and exist exactly once, whether or not
/// the document redeclares them. Every type reference is resolved to a
/// [`TypeId`] at build time, so traversals never look names up.
#[derive(Debug)]
pub struct TypeGraph<'d> {
    types: Vec<NamedType<'d>>,
    index: HashMap<&'d str, TypeId>,
    roots: RootTypes,
}

impl<'d> TypeGraph<'d> {
    #[instrument(level = "debug", skip_all, name = "build_type_graph")]
    pub fn new(document: &'d SchemaDocument) -> Result<Self, TypeGraphError> {
        let mut graph = Self {
            types: Vec::with_capacity(BUILTIN_SCALARS.len() + document.definitions.len()),
            index: HashMap::new(),
            roots: RootTypes::default(),
        };

        for name in BUILTIN_SCALARS {
            graph.insert(NamedType::builtin(name));
        }

        let mut schema_definition: Option<&'d SchemaDefinition<'static, String>> = None;

        for definition in &document.definitions {
            match definition {
                Definition::TypeDefinition(type_def) => graph.declare(type_def)?,
                Definition::SchemaDefinition(schema_def) => {
                    if schema_definition.replace(schema_def).is_some() {
                        return Err(TypeGraphError::DuplicateSchemaDefinition);
                    }
                }
                Definition::TypeExtension(_) => {
                    debug!("ignoring type extension, extensions are not merged");
                }
                Definition::DirectiveDefinition(_) => {}
            }
        }

        graph.link()?;
        graph.roots = graph.resolve_roots(schema_definition)?;

        debug!(types = graph.types.len(), "type graph built");

        Ok(graph)
    }

    fn insert(&mut self, named_type: NamedType<'d>) -> TypeId {
        let type_id = TypeId(self.types.len());
        self.index.insert(named_type.name, type_id);
        self.types.push(named_type);
        type_id
    }

    fn declare(
        &mut self,
        type_def: &'d TypeDefinition<'static, String>,
    ) -> Result<(), TypeGraphError> {
        let name = type_definition_name(type_def);

        if let Some(existing) = self.type_id(name) {
            // `scalar String` and friends fold into the seeded built-in
            let redeclares_builtin = self.get(existing).is_builtin()
                && matches!(type_def, TypeDefinition::Scalar(_));

            if redeclares_builtin {
                return Ok(());
            }

            return Err(TypeGraphError::DuplicateType(name.to_string()));
        }

        self.insert(NamedType::declared(name, type_def));

        Ok(())
    }

    fn link(&mut self) -> Result<(), TypeGraphError> {
        for position in 0..self.types.len() {
            let Some(definition) = self.types[position].definition else {
                continue;
            };
            let owner = self.types[position].name;

            let (fields, members, interfaces) = match definition {
                TypeDefinition::Object(object) => (
                    self.output_edges(owner, &object.fields)?,
                    vec![],
                    self.resolve_names(owner, &object.implements_interfaces)?,
                ),
                TypeDefinition::Interface(interface) => (
                    self.output_edges(owner, &interface.fields)?,
                    vec![],
                    self.resolve_names(owner, &interface.implements_interfaces)?,
                ),
                TypeDefinition::InputObject(input_object) => (
                    self.input_edges(owner, &input_object.fields)?,
                    vec![],
                    vec![],
                ),
                TypeDefinition::Union(union) => {
                    (vec![], self.resolve_names(owner, &union.types)?, vec![])
                }
                TypeDefinition::Scalar(_) | TypeDefinition::Enum(_) => (vec![], vec![], vec![]),
            };

            let named_type = &mut self.types[position];
            named_type.fields = fields;
            named_type.members = members;
            named_type.interfaces = interfaces;
        }

        Ok(())
    }

    fn output_edges(
        &self,
        owner: &str,
        fields: &'d [Field<'static, String>],
    ) -> Result<Vec<FieldEdge<'d>>, TypeGraphError> {
        fields
            .iter()
            .map(|field| -> Result<FieldEdge<'d>, TypeGraphError> {
                let referenced_by = format!("{}.{}", owner, field.name);
                let arguments = field
                    .arguments
                    .iter()
                    .map(|argument| {
                        self.resolve(
                            argument.value_type.inner_type(),
                            || format!("{}({}:)", referenced_by, argument.name),
                        )
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let type_id = self.resolve(field.field_type.inner_type(), || referenced_by)?;

                Ok(FieldEdge {
                    source: FieldSource::Output(field),
                    type_id,
                    arguments,
                })
            })
            .collect()
    }

    fn input_edges(
        &self,
        owner: &str,
        fields: &'d [InputValue<'static, String>],
    ) -> Result<Vec<FieldEdge<'d>>, TypeGraphError> {
        fields
            .iter()
            .map(|field| -> Result<FieldEdge<'d>, TypeGraphError> {
                let type_id = self.resolve(field.value_type.inner_type(), || {
                    format!("{}.{}", owner, field.name)
                })?;

                Ok(FieldEdge {
                    source: FieldSource::Input(field),
                    type_id,
                    arguments: vec![],
                })
            })
            .collect()
    }

    fn resolve_names(&self, owner: &str, names: &[String]) -> Result<Vec<TypeId>, TypeGraphError> {
        names
            .iter()
            .map(|name| self.resolve(name, || owner.to_string()))
            .collect()
    }

    fn resolve<F>(&self, type_name: &str, referenced_by: F) -> Result<TypeId, TypeGraphError>
    where
        F: FnOnce() -> String,
    {
        self.type_id(type_name)
            .ok_or_else(|| TypeGraphError::UnknownType {
                type_name: type_name.to_string(),
                referenced_by: referenced_by(),
            })
    }

    fn resolve_roots(
        &self,
        schema_definition: Option<&SchemaDefinition<'static, String>>,
    ) -> Result<RootTypes, TypeGraphError> {
        let mut roots = RootTypes::default();

        match schema_definition {
            Some(schema_def) => {
                for kind in OPERATION_KINDS {
                    let declared = match kind {
                        OperationKind::Query => schema_def.query.as_ref(),
                        OperationKind::Mutation => schema_def.mutation.as_ref(),
                        OperationKind::Subscription => schema_def.subscription.as_ref(),
                    };

                    if let Some(name) = declared {
                        let type_id = self
                            .type_id(name)
                            .ok_or_else(|| TypeGraphError::MissingRootType(kind, name.clone()))?;

                        if self.get(type_id).kind != TypeKind::Object {
                            return Err(TypeGraphError::InvalidRootType(kind, name.clone()));
                        }

                        roots.set(kind, type_id);
                    }
                }
            }
            None => {
                for kind in OPERATION_KINDS {
                    if let Some(type_id) = self
                        .type_id(kind.root_type_name())
                        .filter(|type_id| self.get(*type_id).kind == TypeKind::Object)
                    {
                        roots.set(kind, type_id);
                    }
                }
            }
        }

        Ok(roots)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Panics when `type_id` was produced by another graph.
    pub fn get(&self, type_id: TypeId) -> &NamedType<'d> {
        &self.types[type_id.0]
    }

    pub fn type_id(&self, name: &str) -> Option<TypeId> {
        self.index.get(name).copied()
    }

    pub fn root_type(&self, kind: OperationKind) -> Option<TypeId> {
        self.roots.get(kind)
    }

    pub fn root_field(&self, kind: OperationKind, field_name: &str) -> Option<&FieldEdge<'d>> {
        self.root_type(kind)
            .and_then(|type_id| self.get(type_id).field(field_name))
    }
}

pub fn type_definition_name<'a>(type_def: &'a TypeDefinition<'static, String>) -> &'a str {
    match type_def {
        TypeDefinition::Scalar(scalar) => &scalar.name,
        TypeDefinition::Object(object) => &object.name,
        TypeDefinition::Interface(interface) => &interface.name,
        TypeDefinition::Union(union) => &union.name,
        TypeDefinition::Enum(enum_type) => &enum_type.name,
        TypeDefinition::InputObject(input_object) => &input_object.name,
    }
}
