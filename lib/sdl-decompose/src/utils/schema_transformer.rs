use graphql_parser::{
    query::{Directive, Text},
    schema::{
        Definition, Document, EnumType, EnumValue, Field, InputObjectType, InputValue,
        InterfaceType, ObjectType, ScalarType, TypeDefinition, UnionType,
    },
};

#[derive(Clone, Debug)]
pub enum Transformed<T> {
    Keep,
    Replace(T),
}

#[derive(Clone, Debug)]
pub enum TransformedValue<T> {
    Keep,
    Replace(T),
}

impl<T> TransformedValue<T> {
    pub fn should_keep(&self) -> bool {
        match self {
            TransformedValue::Keep => true,
            TransformedValue::Replace(_) => false,
        }
    }

    pub fn replace_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            TransformedValue::Keep => f(),
            TransformedValue::Replace(next_value) => next_value,
        }
    }
}

impl<T> From<TransformedValue<T>> for Transformed<T> {
    fn from(val: TransformedValue<T>) -> Self {
        match val {
            TransformedValue::Keep => Transformed::Keep,
            TransformedValue::Replace(replacement) => Transformed::Replace(replacement),
        }
    }
}

impl<T> Transformed<T> {
    pub fn map<U, F>(self, f: F) -> Transformed<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Transformed::Keep => Transformed::Keep,
            Transformed::Replace(t) => Transformed::Replace(f(t)),
        }
    }
}

/// Copy-on-write rewrite of a schema document.
///
/// Every hook answers `Keep` when the node is untouched, so unchanged
/// subtrees are never cloned. Implementations override only the hooks they
/// care about and fall back to the `default_*` walkers for the rest.
///
/// Schema definitions, directive definitions and type extensions are
/// always kept as they are.
pub trait SchemaTransformer<'a, T: Text<'a> + Clone> {
    fn transform_document(
        &mut self,
        document: &Document<'a, T>,
    ) -> TransformedValue<Document<'a, T>> {
        self.default_transform_document(document)
    }

    fn default_transform_document(
        &mut self,
        document: &Document<'a, T>,
    ) -> TransformedValue<Document<'a, T>> {
        match self.transform_list(&document.definitions, Self::transform_definition) {
            TransformedValue::Keep => TransformedValue::Keep,
            TransformedValue::Replace(definitions) => {
                TransformedValue::Replace(Document { definitions })
            }
        }
    }

    fn transform_definition(
        &mut self,
        definition: &Definition<'a, T>,
    ) -> Transformed<Definition<'a, T>> {
        match definition {
            Definition::TypeDefinition(type_def) => self
                .transform_type_definition(type_def)
                .map(Definition::TypeDefinition),
            Definition::SchemaDefinition(_)
            | Definition::DirectiveDefinition(_)
            | Definition::TypeExtension(_) => Transformed::Keep,
        }
    }

    fn transform_type_definition(
        &mut self,
        type_def: &TypeDefinition<'a, T>,
    ) -> Transformed<TypeDefinition<'a, T>> {
        match type_def {
            TypeDefinition::Scalar(scalar) => self
                .transform_scalar_type(scalar)
                .map(TypeDefinition::Scalar),
            TypeDefinition::Object(obj) => {
                self.transform_object_type(obj).map(TypeDefinition::Object)
            }
            TypeDefinition::Interface(interface) => self
                .transform_interface_type(interface)
                .map(TypeDefinition::Interface),
            TypeDefinition::Union(union) => {
                self.transform_union_type(union).map(TypeDefinition::Union)
            }
            TypeDefinition::Enum(enum_type) => self
                .transform_enum_type(enum_type)
                .map(TypeDefinition::Enum),
            TypeDefinition::InputObject(input) => self
                .transform_input_object_type(input)
                .map(TypeDefinition::InputObject),
        }
    }

    fn transform_scalar_type(
        &mut self,
        scalar: &ScalarType<'a, T>,
    ) -> Transformed<ScalarType<'a, T>> {
        let description = self.transform_description(&scalar.description);
        let directives = self.transform_directives(&scalar.directives);

        if description.should_keep() && directives.should_keep() {
            return Transformed::Keep;
        }

        Transformed::Replace(ScalarType {
            position: scalar.position,
            description: description.replace_or_else(|| scalar.description.clone()),
            name: scalar.name.clone(),
            directives: directives.replace_or_else(|| scalar.directives.clone()),
        })
    }

    fn transform_object_type(&mut self, obj: &ObjectType<'a, T>) -> Transformed<ObjectType<'a, T>> {
        let description = self.transform_description(&obj.description);
        let directives = self.transform_directives(&obj.directives);
        let fields = self.transform_fields(&obj.fields);

        if description.should_keep() && directives.should_keep() && fields.should_keep() {
            return Transformed::Keep;
        }

        Transformed::Replace(ObjectType {
            position: obj.position,
            description: description.replace_or_else(|| obj.description.clone()),
            name: obj.name.clone(),
            implements_interfaces: obj.implements_interfaces.clone(),
            directives: directives.replace_or_else(|| obj.directives.clone()),
            fields: fields.replace_or_else(|| obj.fields.clone()),
        })
    }

    fn transform_interface_type(
        &mut self,
        interface: &InterfaceType<'a, T>,
    ) -> Transformed<InterfaceType<'a, T>> {
        let description = self.transform_description(&interface.description);
        let directives = self.transform_directives(&interface.directives);
        let fields = self.transform_fields(&interface.fields);

        if description.should_keep() && directives.should_keep() && fields.should_keep() {
            return Transformed::Keep;
        }

        Transformed::Replace(InterfaceType {
            position: interface.position,
            description: description.replace_or_else(|| interface.description.clone()),
            name: interface.name.clone(),
            implements_interfaces: interface.implements_interfaces.clone(),
            directives: directives.replace_or_else(|| interface.directives.clone()),
            fields: fields.replace_or_else(|| interface.fields.clone()),
        })
    }

    fn transform_union_type(&mut self, union: &UnionType<'a, T>) -> Transformed<UnionType<'a, T>> {
        let description = self.transform_description(&union.description);
        let directives = self.transform_directives(&union.directives);

        if description.should_keep() && directives.should_keep() {
            return Transformed::Keep;
        }

        Transformed::Replace(UnionType {
            position: union.position,
            description: description.replace_or_else(|| union.description.clone()),
            name: union.name.clone(),
            directives: directives.replace_or_else(|| union.directives.clone()),
            types: union.types.clone(),
        })
    }

    fn transform_enum_type(&mut self, enum_type: &EnumType<'a, T>) -> Transformed<EnumType<'a, T>> {
        let description = self.transform_description(&enum_type.description);
        let directives = self.transform_directives(&enum_type.directives);
        let values = self.transform_list(&enum_type.values, Self::transform_enum_value);

        if description.should_keep() && directives.should_keep() && values.should_keep() {
            return Transformed::Keep;
        }

        Transformed::Replace(EnumType {
            position: enum_type.position,
            description: description.replace_or_else(|| enum_type.description.clone()),
            name: enum_type.name.clone(),
            directives: directives.replace_or_else(|| enum_type.directives.clone()),
            values: values.replace_or_else(|| enum_type.values.clone()),
        })
    }

    fn transform_enum_value(
        &mut self,
        enum_value: &EnumValue<'a, T>,
    ) -> Transformed<EnumValue<'a, T>> {
        let description = self.transform_description(&enum_value.description);
        let directives = self.transform_directives(&enum_value.directives);

        if description.should_keep() && directives.should_keep() {
            return Transformed::Keep;
        }

        Transformed::Replace(EnumValue {
            position: enum_value.position,
            description: description.replace_or_else(|| enum_value.description.clone()),
            name: enum_value.name.clone(),
            directives: directives.replace_or_else(|| enum_value.directives.clone()),
        })
    }

    fn transform_input_object_type(
        &mut self,
        input: &InputObjectType<'a, T>,
    ) -> Transformed<InputObjectType<'a, T>> {
        let description = self.transform_description(&input.description);
        let directives = self.transform_directives(&input.directives);
        let fields = self.transform_input_fields(&input.fields);

        if description.should_keep() && directives.should_keep() && fields.should_keep() {
            return Transformed::Keep;
        }

        Transformed::Replace(InputObjectType {
            position: input.position,
            description: description.replace_or_else(|| input.description.clone()),
            name: input.name.clone(),
            directives: directives.replace_or_else(|| input.directives.clone()),
            fields: fields.replace_or_else(|| input.fields.clone()),
        })
    }

    // FIELD_DEFINITION for both interface and object type
    fn transform_fields(&mut self, fields: &[Field<'a, T>]) -> TransformedValue<Vec<Field<'a, T>>> {
        self.default_transform_fields(fields)
    }

    fn default_transform_fields(
        &mut self,
        fields: &[Field<'a, T>],
    ) -> TransformedValue<Vec<Field<'a, T>>> {
        self.transform_list(fields, Self::transform_field)
    }

    fn transform_field(&mut self, field: &Field<'a, T>) -> Transformed<Field<'a, T>> {
        let description = self.transform_description(&field.description);
        let directives = self.transform_directives(&field.directives);
        let arguments = self.transform_input_values(&field.arguments);

        if description.should_keep() && directives.should_keep() && arguments.should_keep() {
            return Transformed::Keep;
        }

        Transformed::Replace(Field {
            position: field.position,
            description: description.replace_or_else(|| field.description.clone()),
            name: field.name.clone(),
            arguments: arguments.replace_or_else(|| field.arguments.clone()),
            field_type: field.field_type.clone(),
            directives: directives.replace_or_else(|| field.directives.clone()),
        })
    }

    // INPUT_FIELD_DEFINITION
    fn transform_input_fields(
        &mut self,
        fields: &[InputValue<'a, T>],
    ) -> TransformedValue<Vec<InputValue<'a, T>>> {
        self.transform_input_values(fields)
    }

    // ARGUMENT_DEFINITION, and the default for input fields
    fn transform_input_values(
        &mut self,
        values: &[InputValue<'a, T>],
    ) -> TransformedValue<Vec<InputValue<'a, T>>> {
        self.transform_list(values, Self::transform_input_value)
    }

    fn transform_input_value(
        &mut self,
        value: &InputValue<'a, T>,
    ) -> Transformed<InputValue<'a, T>> {
        let description = self.transform_description(&value.description);
        let directives = self.transform_directives(&value.directives);

        if description.should_keep() && directives.should_keep() {
            return Transformed::Keep;
        }

        Transformed::Replace(InputValue {
            position: value.position,
            description: description.replace_or_else(|| value.description.clone()),
            name: value.name.clone(),
            value_type: value.value_type.clone(),
            default_value: value.default_value.clone(),
            directives: directives.replace_or_else(|| value.directives.clone()),
        })
    }

    fn transform_description(
        &mut self,
        _description: &Option<String>,
    ) -> TransformedValue<Option<String>> {
        TransformedValue::Keep
    }

    fn transform_directives(
        &mut self,
        directives: &[Directive<'a, T>],
    ) -> TransformedValue<Vec<Directive<'a, T>>> {
        self.transform_list(directives, Self::transform_directive)
    }

    fn transform_directive(
        &mut self,
        _directive: &Directive<'a, T>,
    ) -> Transformed<Directive<'a, T>> {
        Transformed::Keep
    }

    // Helper method for transforming lists
    fn transform_list<I, F, R>(&mut self, list: &[I], f: F) -> TransformedValue<Vec<I>>
    where
        I: Clone,
        F: Fn(&mut Self, &I) -> R,
        R: Into<Transformed<I>>,
    {
        let mut result = Vec::new();
        let mut has_changes = false;

        for (index, prev_item) in list.iter().enumerate() {
            match f(self, prev_item).into() {
                Transformed::Keep => {
                    if has_changes {
                        result.push(prev_item.clone());
                    }
                }
                Transformed::Replace(next_item) => {
                    if !has_changes {
                        result.reserve(list.len());
                        result.extend(list.iter().take(index).cloned());
                    }
                    result.push(next_item);
                    has_changes = true;
                }
            }
        }

        if has_changes {
            TransformedValue::Replace(result)
        } else {
            TransformedValue::Keep
        }
    }
}
