use indexmap::IndexSet;
use tracing::{instrument, trace};

use crate::{
    options::DecompositionOptions,
    type_graph::{FieldEdge, TypeGraph, TypeId, TypeKind},
};

/// Computes the closure of named types reachable from a field.
///
/// The visit order is a pre-order depth-first walk over fields in
/// declaration order, each field's type before its arguments. The walk keeps
/// its own stack, so the depth of the schema is not bounded by the call stack.
pub struct TypeCollector<'g, 'd> {
    graph: &'g TypeGraph<'d>,
    include_builtin_scalars: bool,
    /// Visited set and emission order at once.
    collected: IndexSet<TypeId>,
}

impl<'g, 'd> TypeCollector<'g, 'd> {
    pub fn new(graph: &'g TypeGraph<'d>, options: &DecompositionOptions) -> Self {
        Self {
            graph,
            include_builtin_scalars: options.include_builtin_scalars,
            collected: IndexSet::new(),
        }
    }

    #[instrument(level = "debug", skip_all, fields(field = field.source.name()))]
    pub fn collect_from_field(&mut self, field: &FieldEdge<'d>) {
        let mut stack: Vec<TypeId> = Vec::new();
        Self::push_field(&mut stack, field);
        stack.reverse();

        while let Some(type_id) = stack.pop() {
            if !self.admit(type_id) {
                continue;
            }

            let named_type = self.graph.get(type_id);
            let pending = stack.len();

            match named_type.kind {
                TypeKind::Object | TypeKind::Interface | TypeKind::InputObject => {
                    for field in &named_type.fields {
                        Self::push_field(&mut stack, field);
                    }
                    stack.extend(&named_type.interfaces);
                }
                TypeKind::Union => stack.extend(&named_type.members),
                TypeKind::Scalar | TypeKind::Enum => {}
            }

            // children were pushed in visit order, the stack pops from the back
            stack[pending..].reverse();
        }
    }

    pub fn collected(&self) -> &IndexSet<TypeId> {
        &self.collected
    }

    pub fn into_collected(self) -> IndexSet<TypeId> {
        self.collected
    }

    fn push_field(stack: &mut Vec<TypeId>, field: &FieldEdge<'d>) {
        stack.push(field.type_id);
        stack.extend(&field.arguments);
    }

    fn admit(&mut self, type_id: TypeId) -> bool {
        if self.collected.contains(&type_id) {
            return false;
        }

        let named_type = self.graph.get(type_id);

        if named_type.is_builtin() && !self.include_builtin_scalars {
            return false;
        }

        trace!(name = named_type.name, "collected");
        self.collected.insert(type_id)
    }
}
