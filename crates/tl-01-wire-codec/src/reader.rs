//! # Byte Reader
//!
//! A cursor over a borrowed buffer. Every `read_*` advances the cursor by the
//! width of the field it consumed, so field order is the only thing a record
//! decoder has to get right.

use shared_types::{Pubkey, PUBKEY_BYTES};

use crate::errors::DecodeError;
use crate::traits::Decode;

/// Sequential little-endian reader.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Start reading at `offset`. An offset past the end is allowed; the
    /// first read reports truncation.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            position: offset,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume exactly `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let truncated = DecodeError::TruncatedData {
            offset: self.position,
            needed: len,
            available: self.data.len(),
        };
        let end = self.position.checked_add(len).ok_or(truncated.clone())?;
        let slice = self.data.get(self.position..end).ok_or(truncated)?;
        self.position = end;
        Ok(slice)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        self.read_array().map(u64::from_le_bytes)
    }

    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        self.read_array().map(i64::from_le_bytes)
    }

    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        let offset = self.position;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(DecodeError::InvalidBool { offset, value }),
        }
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey, DecodeError> {
        self.read_array::<PUBKEY_BYTES>().map(Pubkey::new)
    }

    /// `len: u32 LE` followed by UTF-8 bytes.
    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let len = self.read_u32()? as usize;
        let offset = self.position;
        let bytes = self.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| DecodeError::InvalidUtf8 { offset })
    }

    /// Tag byte then, if the tag is 1, the payload read by `read_value`.
    pub fn read_option<T, F>(&mut self, read_value: F) -> Result<Option<T>, DecodeError>
    where
        F: FnOnce(&mut Self) -> Result<T, DecodeError>,
    {
        let offset = self.position;
        match self.read_u8()? {
            0 => Ok(None),
            1 => read_value(self).map(Some),
            value => Err(DecodeError::InvalidOptionTag { offset, value }),
        }
    }

    /// `count: u32 LE` then exactly `count` elements.
    pub fn read_seq<T, F>(&mut self, mut read_element: F) -> Result<Vec<T>, DecodeError>
    where
        F: FnMut(&mut Self) -> Result<T, DecodeError>,
    {
        let count = self.read_u32()? as usize;
        // Every element occupies at least one byte, so a count beyond the
        // remaining length cannot be satisfied; cap the allocation.
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(read_element(self)?);
        }
        Ok(items)
    }

    /// Decode any [`Decode`] value at the cursor.
    pub fn read<T: Decode>(&mut self) -> Result<T, DecodeError> {
        T::decode(self)
    }
}
