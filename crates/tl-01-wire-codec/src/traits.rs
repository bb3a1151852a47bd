//! # Encode / Decode Traits
//!
//! Implementations for every primitive shape the ledger program stores.
//! Record and argument structs compose these through [`ByteReader::read`]
//! and [`ByteWriter::write`].

use shared_types::Pubkey;

use crate::errors::{DecodeError, EncodeError};
use crate::reader::ByteReader;
use crate::writer::ByteWriter;

/// A value with a fixed wire encoding.
pub trait Encode {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError>;

    /// Encode into a fresh buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut writer = ByteWriter::new();
        self.encode(&mut writer)?;
        Ok(writer.into_bytes())
    }
}

/// A value that can be read back from its wire encoding.
pub trait Decode: Sized {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError>;

    /// Decode at `offset`, returning the value and the offset just past it.
    fn decode_at(bytes: &[u8], offset: usize) -> Result<(Self, usize), DecodeError> {
        let mut reader = ByteReader::at(bytes, offset);
        let value = Self::decode(&mut reader)?;
        Ok((value, reader.position()))
    }
}

macro_rules! impl_int {
    ($($ty:ty),*) => {$(
        impl Encode for $ty {
            fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
                writer.write_raw(&self.to_le_bytes());
                Ok(())
            }
        }

        impl Decode for $ty {
            fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
                reader.read_array().map(<$ty>::from_le_bytes)
            }
        }
    )*};
}

impl_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Encode for bool {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_bool(*self);
        Ok(())
    }
}

impl Decode for bool {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        reader.read_bool()
    }
}

impl Encode for str {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_str(self).map(|_| ())
    }
}

impl Encode for String {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        self.as_str().encode(writer)
    }
}

impl Decode for String {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        reader.read_string()
    }
}

impl Encode for Pubkey {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_pubkey(self);
        Ok(())
    }
}

impl Decode for Pubkey {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        reader.read_pubkey()
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_raw(self);
        Ok(())
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        reader.read_array()
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer
            .write_option(self.as_ref(), |w, value| value.encode(w))
            .map(|_| ())
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        reader.read_option(T::decode)
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_seq(self, |w, item| item.encode(w)).map(|_| ())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        self.as_slice().encode(writer)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        reader.read_seq(T::decode)
    }
}
