use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Selects which root type is searched for the requested operation field.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    #[default]
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The canonical root type name used for the synthetic root block.
    pub fn root_type_name(&self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }

    pub fn is_root_type_name(name: &str) -> bool {
        matches!(name, "Query" | "Mutation" | "Subscription")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecompositionOptions {
    /// Record `String`, `Int`, `Float`, `Boolean` and `ID` in the collected set.
    pub include_builtin_scalars: bool,
    /// Drop descriptions from every emitted definition.
    pub exclude_comments: bool,
    /// Keep fields marked with `@deprecated` (and the marker itself).
    pub include_deprecated: bool,
}

impl DecompositionOptions {
    /// Whether the document has to go through the node filter at all.
    pub fn requires_filtering(&self) -> bool {
        self.exclude_comments || !self.include_deprecated
    }
}
