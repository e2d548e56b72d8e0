use graphql_parser::schema::Field;
use indexmap::IndexSet;
use tracing::{debug, instrument};

use crate::{
    options::OperationKind,
    type_graph::{FieldSource, TypeGraph, TypeId},
    utils::ast::TypeHelpers,
};

/// Emits the synthetic root block followed by every collected definition,
/// separated by blank lines.
///
/// Types named `Query`, `Mutation` or `Subscription` are never printed, since
/// the synthetic block already owns that name. Built-in scalars have no body
/// and are skipped as well.
#[instrument(level = "debug", skip(graph, collected))]
pub fn reconstruct(
    graph: &TypeGraph<'_>,
    collected: &IndexSet<TypeId>,
    kind: OperationKind,
    operation_name: &str,
) -> String {
    let mut definitions: Vec<String> = Vec::with_capacity(collected.len() + 1);

    if let Some(FieldSource::Output(field)) = graph
        .root_field(kind, operation_name)
        .map(|edge| edge.source)
    {
        definitions.push(root_block(kind, field));
    }

    for type_id in collected {
        let named_type = graph.get(*type_id);

        if OperationKind::is_root_type_name(named_type.name) {
            continue;
        }

        if let Some(definition) = named_type.definition {
            definitions.push(definition.to_string().trim_end().to_string());
        }
    }

    debug!(definitions = definitions.len(), "partial schema printed");

    definitions.join("\n\n")
}

fn root_block(kind: OperationKind, field: &Field<'static, String>) -> String {
    format!(
        "type {} {{\n  {}{}\n}}",
        kind.root_type_name(),
        field.name,
        field_signature(field)
    )
}

/// `(id: ID!, first: Int = 10): [User!]`
fn field_signature(field: &Field<'static, String>) -> String {
    let arguments = if field.arguments.is_empty() {
        String::new()
    } else {
        let printed: Vec<String> = field
            .arguments
            .iter()
            .map(|argument| match &argument.default_value {
                Some(default_value) => format!(
                    "{}: {} = {}",
                    argument.name,
                    argument.value_type.to_sdl(),
                    default_value
                ),
                None => format!("{}: {}", argument.name, argument.value_type.to_sdl()),
            })
            .collect();

        format!("({})", printed.join(", "))
    };

    format!("{}: {}", arguments, field.field_type.to_sdl())
}

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;

    use crate::{
        options::OperationKind,
        type_graph::{parse_schema_document, TypeGraph},
    };

    use super::reconstruct;

    #[test]
    fn root_block_keeps_signature() {
        let document = parse_schema_document(
            r#"
            type Query {
              users(first: Int = 10, after: String, ids: [ID!]!): [User!]!
            }
            type User { id: ID! }
            "#,
        )
        .unwrap();
        let graph = TypeGraph::new(&document).unwrap();
        let collected: IndexSet<_> = [graph.type_id("User").unwrap()].into_iter().collect();

        insta::assert_snapshot!(reconstruct(&graph, &collected, OperationKind::Query, "users"), @r"
        type Query {
          users(first: Int = 10, after: String, ids: [ID!]!): [User!]!
        }

        type User {
          id: ID!
        }
        ");
    }

    #[test]
    fn skips_root_named_and_builtin_types() {
        let document = parse_schema_document(
            r#"
            schema { mutation: Writes }
            type Writes { touch(at: Int): Query }
            type Query { ok: Boolean }
            "#,
        )
        .unwrap();
        let graph = TypeGraph::new(&document).unwrap();
        let collected: IndexSet<_> = ["Query", "Boolean", "Int"]
            .into_iter()
            .map(|name| graph.type_id(name).unwrap())
            .collect();

        insta::assert_snapshot!(reconstruct(&graph, &collected, OperationKind::Mutation, "touch"), @r"
        type Mutation {
          touch(at: Int): Query
        }
        ");
    }

    #[test]
    fn missing_field_prints_only_collected_types() {
        let document = parse_schema_document("type Query { a: A } type A { b: Int }").unwrap();
        let graph = TypeGraph::new(&document).unwrap();
        let collected: IndexSet<_> = [graph.type_id("A").unwrap()].into_iter().collect();

        assert_eq!(
            reconstruct(&graph, &collected, OperationKind::Query, "missing"),
            "type A {\n  b: Int\n}"
        );
    }
}
