use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    collector::TypeCollector,
    error::DecompositionError,
    filter::NodeFilter,
    options::{DecompositionOptions, OperationKind},
    reconstruct::reconstruct,
    type_graph::{parse_schema_document, TypeGraph},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompositionResult {
    pub sdl: String,
    /// Names of the collected types, in emission order.
    pub collected_types: IndexSet<String>,
    pub operation_found: bool,
}

impl DecompositionResult {
    /// Returned when the requested field does not exist on the requested root type.
    pub fn not_found() -> Self {
        Self::default()
    }
}

/// Extracts the partial schema needed by `operation_name` on the `kind` root type.
///
/// Parses `full_sdl`, applies the node filter, builds the type graph, walks
/// the closure of the root field and prints it back. A valid schema without
/// the requested field yields [`DecompositionResult::not_found`].
#[instrument(level = "debug", skip(full_sdl, options))]
pub fn decompose(
    full_sdl: &str,
    operation_name: &str,
    kind: OperationKind,
    options: &DecompositionOptions,
) -> Result<DecompositionResult, DecompositionError> {
    let parsed = parse_schema_document(full_sdl)?;
    let document = NodeFilter::filter(options, &parsed);
    let graph = TypeGraph::new(&document)?;

    let Some(field) = graph.root_field(kind, operation_name) else {
        debug!("operation not found on root type");
        return Ok(DecompositionResult::not_found());
    };

    let mut collector = TypeCollector::new(&graph, options);
    collector.collect_from_field(field);
    let collected = collector.into_collected();

    debug!(collected = collected.len(), "closure computed");

    let sdl = reconstruct(&graph, &collected, kind, operation_name);
    let collected_types = collected
        .iter()
        .map(|type_id| graph.get(*type_id).name.to_string())
        .collect();

    Ok(DecompositionResult {
        sdl,
        collected_types,
        operation_found: true,
    })
}
