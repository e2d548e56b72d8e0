pub mod ast;
pub mod schema_transformer;
