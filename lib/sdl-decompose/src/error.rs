use graphql_parser::schema::ParseError;

use crate::type_graph::TypeGraphError;

/// Raised when the input text cannot be parsed or no type graph can be built from it.
///
/// A missing operation field is not an error, see [`crate::DecompositionResult::not_found`].
#[derive(Debug, thiserror::Error)]
pub enum DecompositionError {
    #[error("failed to decompose GraphQL: {0}")]
    Parse(#[from] ParseError),
    #[error("failed to decompose GraphQL: {0}")]
    Build(#[from] TypeGraphError),
}
