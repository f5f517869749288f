//! Structured-data adapters (feature `serde`).
//!
//! Types built with [`define_id!`](crate::define_id) serialize as their text
//! form through [`serialize_text`] and [`deserialize_text`]. [`as_bytes_id`]
//! is a `#[serde(with = ...)]` module for binary formats.
//!
//! In both forms [`Id::NIL`](crate::Id::NIL) is written as a missing value
//! (`null` in JSON), and a missing value reads back as `NIL`.

pub mod as_bytes_id;
mod text;

#[cfg(test)]
mod tests;

pub use text::*;
