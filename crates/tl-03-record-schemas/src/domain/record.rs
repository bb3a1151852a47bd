//! The tagged-record contract shared by every account kind.

use super::errors::SchemaError;
use super::tags::{RecordKind, TAG_LEN};
use tl_01_wire_codec::{ByteReader, ByteWriter, DecodeError, EncodeError};

/// An account layout: an 8-byte tag followed by fields in a fixed order.
pub trait Record: Sized {
    const KIND: RecordKind;

    /// Read the fields that follow the tag.
    fn read_fields(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError>;

    /// Write the fields that follow the tag.
    fn write_fields(&self, writer: &mut ByteWriter) -> Result<(), EncodeError>;

    /// Check the tag, then decode the fields. Bytes after the last field are
    /// account padding and are ignored.
    fn decode(data: &[u8]) -> Result<Self, SchemaError> {
        check_tag(data, Self::KIND)?;
        let mut reader = ByteReader::at(data, TAG_LEN);
        Self::read_fields(&mut reader).map_err(|e| SchemaError::from_decode(Self::KIND, e))
    }

    /// Tag plus fields, without padding.
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut writer = ByteWriter::with_capacity(128);
        writer.write_raw(&Self::KIND.tag());
        self.write_fields(&mut writer)?;
        Ok(writer.into_bytes())
    }
}

/// Verify `data` starts with the tag of `kind`.
///
/// Data shorter than a tag counts as truncated only when it is a non-empty
/// prefix of the expected tag; anything else is the wrong kind.
pub fn check_tag(data: &[u8], kind: RecordKind) -> Result<(), SchemaError> {
    let tag = kind.tag();
    match data.get(..TAG_LEN) {
        Some(prefix) if prefix == tag => Ok(()),
        Some(_) => Err(SchemaError::WrongKind { expected: kind }),
        None if !data.is_empty() && tag.starts_with(data) => Err(SchemaError::TruncatedData {
            kind,
            source: DecodeError::TruncatedData {
                offset: 0,
                needed: TAG_LEN,
                available: data.len(),
            },
        }),
        None => Err(SchemaError::WrongKind { expected: kind }),
    }
}
