use crate::{Base32Ext, Id};
use core::marker::PhantomData;
use serde::{Deserializer, Serializer, de};

/// Serializes an ID as its text form, or as `none` for `NIL`.
///
/// # Errors
///
/// Returns the serializer's error.
pub fn serialize_text<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
where
    ID: Id,
    S: Serializer,
{
    if id.is_nil() {
        s.serialize_none()
    } else {
        s.serialize_some(id.encode().as_str())
    }
}

/// Deserializes an ID from its text form. `none`, unit and the empty string
/// yield `NIL`.
///
/// # Errors
///
/// Returns a custom error carrying [`crate::Error::InvalidId`] for malformed
/// text.
pub fn deserialize_text<'de, ID, D>(d: D) -> Result<ID, D::Error>
where
    ID: Id,
    D: Deserializer<'de>,
{
    d.deserialize_option(TextVisitor(PhantomData))
}

struct TextVisitor<ID>(PhantomData<ID>);

impl<'de, ID: Id> de::Visitor<'de> for TextVisitor<ID> {
    type Value = ID;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(formatter, "a {}-symbol base32 identifier or null", ID::TEXT_SIZE)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ID::NIL)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ID::NIL)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_str(self)
    }

    #[inline]
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Ok(ID::NIL);
        }
        ID::decode(v).map_err(de::Error::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Ok(ID::NIL);
        }
        ID::decode(v).map_err(de::Error::custom)
    }
}
