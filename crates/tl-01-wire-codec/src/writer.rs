//! # Byte Writer
//!
//! Append-only little-endian encoder, the mirror of [`crate::ByteReader`].

use shared_types::Pubkey;

use crate::errors::EncodeError;
use crate::traits::Encode;

/// Growable output buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Raw bytes with no prefix (tags, fixed-width identifiers).
    pub fn write_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        self.write_raw(&value.to_le_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.write_raw(&value.to_le_bytes())
    }

    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.write_raw(&value.to_le_bytes())
    }

    pub fn write_i64(&mut self, value: i64) -> &mut Self {
        self.write_raw(&value.to_le_bytes())
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_u8(u8::from(value))
    }

    pub fn write_pubkey(&mut self, key: &Pubkey) -> &mut Self {
        self.write_raw(key.as_bytes())
    }

    /// `len: u32 LE` then the UTF-8 bytes.
    pub fn write_str(&mut self, value: &str) -> Result<&mut Self, EncodeError> {
        self.write_len(value.len())?;
        Ok(self.write_raw(value.as_bytes()))
    }

    /// Tag byte then, when present, the payload written by `write_value`.
    pub fn write_option<T, F>(
        &mut self,
        value: Option<&T>,
        write_value: F,
    ) -> Result<&mut Self, EncodeError>
    where
        T: ?Sized,
        F: FnOnce(&mut Self, &T) -> Result<(), EncodeError>,
    {
        match value {
            None => {
                self.write_u8(0);
            }
            Some(inner) => {
                self.write_u8(1);
                write_value(self, inner)?;
            }
        }
        Ok(self)
    }

    /// `count: u32 LE` then each element.
    pub fn write_seq<T, F>(&mut self, items: &[T], mut write_element: F) -> Result<&mut Self, EncodeError>
    where
        F: FnMut(&mut Self, &T) -> Result<(), EncodeError>,
    {
        self.write_len(items.len())?;
        for item in items {
            write_element(self, item)?;
        }
        Ok(self)
    }

    /// Encode any [`Encode`] value.
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> Result<&mut Self, EncodeError> {
        value.encode(self)?;
        Ok(self)
    }

    fn write_len(&mut self, length: usize) -> Result<(), EncodeError> {
        let prefix = u32::try_from(length).map_err(|_| EncodeError::LengthOverflow { length })?;
        self.write_u32(prefix);
        Ok(())
    }
}
