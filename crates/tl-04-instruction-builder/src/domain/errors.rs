use super::operation::Operation;
use thiserror::Error;
use tl_01_wire_codec::EncodeError;
use tl_02_address_derivation::DerivationError;
use tl_03_record_schemas::{WorkItemLayout, WorkItemStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Operation name not known at all.
    #[error("Unknown operation '{0}'")]
    UnknownOperationName(String),

    /// Operation exists but the deployment's layout does not offer it.
    #[error("Operation {operation} is not available in the {layout} layout")]
    UnknownOperation {
        operation: Operation,
        layout: WorkItemLayout,
    },

    #[error("Missing required argument '{field}'")]
    MissingArgument { field: &'static str },

    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// The supplied snapshot shows the work item cannot take this operation.
    #[error("Work item {id} is {status}; {operation} is not allowed")]
    InvalidStatus {
        id: u64,
        status: WorkItemStatus,
        operation: Operation,
    },

    #[error("Address derivation failed: {0}")]
    Derivation(#[from] DerivationError),

    #[error("Encoding failed: {0}")]
    Encode(#[from] EncodeError),
}

impl BuildError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}
