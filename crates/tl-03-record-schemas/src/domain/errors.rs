use super::tags::RecordKind;
use thiserror::Error;
use tl_01_wire_codec::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// No data, or data carrying another kind's tag.
    #[error("Not a {expected} record")]
    WrongKind { expected: RecordKind },

    /// The tag matched but the data ended early.
    #[error("Truncated {kind} record: {source}")]
    TruncatedData {
        kind: RecordKind,
        #[source]
        source: DecodeError,
    },

    /// The tag matched but a field broke a structural rule.
    #[error("Malformed {kind} record: {source}")]
    Malformed {
        kind: RecordKind,
        #[source]
        source: DecodeError,
    },
}

impl SchemaError {
    /// Classify a field-level decode failure for a record of `kind`.
    pub fn from_decode(kind: RecordKind, source: DecodeError) -> Self {
        if source.is_truncation() {
            Self::TruncatedData { kind, source }
        } else {
            Self::Malformed { kind, source }
        }
    }

    pub fn is_wrong_kind(&self) -> bool {
        matches!(self, Self::WrongKind { .. })
    }

    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::TruncatedData { .. })
    }
}
