use crate::options::OperationKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeGraphError {
    #[error("There can be only one type named \"{0}\"")]
    DuplicateType(String),
    #[error("Must provide only one schema definition")]
    DuplicateSchemaDefinition,
    #[error("Unknown type \"{type_name}\" referenced by \"{referenced_by}\"")]
    UnknownType {
        type_name: String,
        referenced_by: String,
    },
    #[error("Specified {0} type \"{1}\" not found in document")]
    MissingRootType(OperationKind, String),
    #[error("Specified {0} type \"{1}\" must be an object type")]
    InvalidRootType(OperationKind, String),
}
