use std::borrow::Cow;

use graphql_parser::query::{Directive, Text};
use graphql_parser::schema::{Field, InputValue};
use tracing::{debug, instrument};

use crate::{
    options::DecompositionOptions,
    type_graph::SchemaDocument,
    utils::{
        ast::{is_deprecated, DEPRECATED_DIRECTIVE},
        schema_transformer::{SchemaTransformer, TransformedValue},
    },
};

/// Rewrites a parsed document before the type graph is built.
///
/// Deprecated fields have to disappear here, ahead of the reachability
/// walk, because dropping one can make a type unreachable. Descriptions are
/// cleared in the same pass; that never changes what is reachable.
pub struct NodeFilter<'o> {
    options: &'o DecompositionOptions,
    removed_fields: usize,
    cleared_descriptions: usize,
}

impl<'o> NodeFilter<'o> {
    pub fn new(options: &'o DecompositionOptions) -> Self {
        Self {
            options,
            removed_fields: 0,
            cleared_descriptions: 0,
        }
    }

    /// Returns the input untouched (borrowed) when no option asks for a rewrite
    /// or when the document contains nothing to rewrite.
    #[instrument(level = "debug", skip_all, name = "node_filter")]
    pub fn filter<'d>(
        options: &DecompositionOptions,
        document: &'d SchemaDocument,
    ) -> Cow<'d, SchemaDocument> {
        if !options.requires_filtering() {
            debug!("no filtering requested, passing document through");
            return Cow::Borrowed(document);
        }

        let mut filter = NodeFilter::new(options);
        let result = match filter.transform_document(document) {
            TransformedValue::Keep => Cow::Borrowed(document),
            TransformedValue::Replace(next_document) => Cow::Owned(next_document),
        };

        debug!(
            removed_fields = filter.removed_fields,
            cleared_descriptions = filter.cleared_descriptions,
            "node filter applied"
        );

        result
    }

    fn strips_deprecated(&self) -> bool {
        !self.options.include_deprecated
    }

    /// `None` when nothing has to be dropped from `values`.
    fn without_deprecated<V: Clone>(
        &mut self,
        values: &[V],
        deprecated: impl Fn(&V) -> bool,
    ) -> Option<Vec<V>> {
        if !self.strips_deprecated() || !values.iter().any(&deprecated) {
            return None;
        }

        let retained: Vec<V> = values
            .iter()
            .filter(|value| !deprecated(*value))
            .cloned()
            .collect();
        self.removed_fields += values.len() - retained.len();

        Some(retained)
    }
}

impl<'a, T: Text<'a> + Clone> SchemaTransformer<'a, T> for NodeFilter<'_> {
    fn transform_fields(&mut self, fields: &[Field<'a, T>]) -> TransformedValue<Vec<Field<'a, T>>> {
        let deprecated = |field: &Field<'a, T>| is_deprecated(&field.directives);

        match self.without_deprecated(fields, deprecated) {
            None => self.default_transform_fields(fields),
            Some(retained) => TransformedValue::Replace(
                self.default_transform_fields(&retained)
                    .replace_or_else(|| retained),
            ),
        }
    }

    fn transform_input_fields(
        &mut self,
        fields: &[InputValue<'a, T>],
    ) -> TransformedValue<Vec<InputValue<'a, T>>> {
        let deprecated = |field: &InputValue<'a, T>| is_deprecated(&field.directives);

        match self.without_deprecated(fields, deprecated) {
            None => self.transform_input_values(fields),
            Some(retained) => TransformedValue::Replace(
                self.transform_input_values(&retained)
                    .replace_or_else(|| retained),
            ),
        }
    }

    // Arguments and enum values are kept, only the marker goes.
    fn transform_directives(
        &mut self,
        directives: &[Directive<'a, T>],
    ) -> TransformedValue<Vec<Directive<'a, T>>> {
        if !self.strips_deprecated() || !is_deprecated(directives) {
            return TransformedValue::Keep;
        }

        TransformedValue::Replace(
            directives
                .iter()
                .filter(|d| d.name.as_ref() != DEPRECATED_DIRECTIVE)
                .cloned()
                .collect(),
        )
    }

    fn transform_description(
        &mut self,
        description: &Option<String>,
    ) -> TransformedValue<Option<String>> {
        if self.options.exclude_comments && description.is_some() {
            self.cleared_descriptions += 1;
            return TransformedValue::Replace(None);
        }

        TransformedValue::Keep
    }
}
