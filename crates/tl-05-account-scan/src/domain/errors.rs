use shared_types::Pubkey;
use thiserror::Error;
use tl_03_record_schemas::{RecordKind, SchemaError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A record of a known kind ended early. Under the strict policy this
    /// points at a layout mismatch for the whole deployment.
    #[error("Truncated {kind} at {address}: {source}")]
    Truncated {
        address: Pubkey,
        kind: RecordKind,
        #[source]
        source: SchemaError,
    },
}
