//! Serialize an ID as its raw bytes.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use tickid::{TickId, adapter::as_bytes_id};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Row {
//!     #[serde(with = "as_bytes_id")]
//!     id: TickId,
//! }
//! ```

use crate::Id;
use core::marker::PhantomData;
use serde::{Deserializer, Serialize, Serializer, de};

struct RawBytes<'a>(&'a [u8]);

impl Serialize for RawBytes<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bytes(self.0)
    }
}

/// Writes the raw bytes, or `none` for `NIL`.
///
/// # Errors
///
/// Returns the serializer's error.
pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
where
    ID: Id,
    S: Serializer,
{
    if id.is_nil() {
        s.serialize_none()
    } else {
        s.serialize_some(&RawBytes(id.as_bytes()))
    }
}

/// Reads raw bytes (or a sequence of byte values); `none` and unit yield
/// `NIL`.
///
/// # Errors
///
/// Returns an `invalid_length` error when the byte count differs from
/// [`Id::SIZE`].
pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
where
    ID: Id,
    D: Deserializer<'de>,
{
    d.deserialize_option(BytesVisitor(PhantomData))
}

struct BytesVisitor<ID>(PhantomData<ID>);

impl<'de, ID: Id> de::Visitor<'de> for BytesVisitor<ID> {
    type Value = ID;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(formatter, "{} identifier bytes or null", ID::SIZE)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ID::NIL)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ID::NIL)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_bytes(self)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        ID::from_slice(v).map_err(|_| E::invalid_length(v.len(), &self))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut bytes = ID::Bytes::default();
        let buf = bytes.as_mut();
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(ID::SIZE + 1, &self));
        }
        Ok(ID::from_bytes(bytes))
    }
}
