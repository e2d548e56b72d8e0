use std::path::PathBuf;
use std::sync::Once;

use lazy_static::lazy_static;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::type_graph::parse_schema_document;

fn init_test_logger_internal() {
    let tree_layer = tracing_tree::HierarchicalLayer::new(2)
        .with_bracketed_fields(true)
        .with_deferred_spans(false)
        .with_wraparound(25)
        .with_indent_lines(true)
        .with_timer(tracing_tree::time::Uptime::default())
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_targets(false);

    tracing_subscriber::registry()
        .with(tree_layer)
        .with(EnvFilter::from_default_env())
        .init();
}

lazy_static! {
    static ref TRACING_INIT: Once = Once::new();
}

pub fn init_logger() {
    TRACING_INIT.call_once(|| {
        init_test_logger_internal();
    });
}

pub fn read_fixture(fixture_path: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixture")
        .join(fixture_path);

    std::fs::read_to_string(path).expect("Unable to read fixture file")
}

/// Type names with their field names, in document order, descriptions ignored.
pub fn structure(sdl: &str) -> Vec<(String, Vec<String>)> {
    use graphql_parser::schema::{Definition, TypeDefinition};

    let document = parse_schema_document(sdl).expect("output should parse");

    document
        .definitions
        .iter()
        .filter_map(|definition| match definition {
            Definition::TypeDefinition(type_def) => Some(type_def),
            _ => None,
        })
        .map(|type_def| match type_def {
            TypeDefinition::Object(object) => (
                object.name.clone(),
                object.fields.iter().map(|f| f.name.clone()).collect(),
            ),
            TypeDefinition::Interface(interface) => (
                interface.name.clone(),
                interface.fields.iter().map(|f| f.name.clone()).collect(),
            ),
            TypeDefinition::InputObject(input) => (
                input.name.clone(),
                input.fields.iter().map(|f| f.name.clone()).collect(),
            ),
            TypeDefinition::Enum(enum_type) => (
                enum_type.name.clone(),
                enum_type.values.iter().map(|v| v.name.clone()).collect(),
            ),
            TypeDefinition::Union(union) => (union.name.clone(), union.types.clone()),
            TypeDefinition::Scalar(scalar) => (scalar.name.clone(), vec![]),
        })
        .collect()
}
