//! SDL decomposition
//! =================
//!
//! Extracts, from a full GraphQL schema document, the minimal standalone
//! SDL needed by one root operation field plus every type it transitively
//! depends on.
//!
//! ```rust
//! use sdl_decompose::{decompose, DecompositionOptions, OperationKind};
//!
//! # fn run() -> Result<(), sdl_decompose::DecompositionError> {
//! let result = decompose(
//!     r#"
//!     type Query { getUser(id: ID!): User }
//!     type User { id: ID! }
//!     "#,
//!     "getUser",
//!     OperationKind::Query,
//!     &DecompositionOptions::default(),
//! )?;
//!
//! assert!(result.operation_found);
//! assert!(result.collected_types.contains("User"));
//! # Ok(())
//! # }
//! # fn main() {
//! #    run().unwrap()
//! # }
//! ```

pub mod collector;
pub mod error;
pub mod filter;
pub mod options;
pub mod reconstruct;
pub mod type_graph;
pub mod utils;

mod decompose;

#[cfg(test)]
mod tests;

pub use decompose::{decompose, DecompositionResult};
pub use error::DecompositionError;
pub use options::{DecompositionOptions, OperationKind};
pub use type_graph::{TypeGraph, TypeGraphError, TypeId};
