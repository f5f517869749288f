#![doc = include_str!("../README.md")]

#[cfg(feature = "serde")]
pub mod adapter;
mod base32;
mod error;
mod generator;
mod id;
pub mod ordering;
mod rand;
mod sequencer;
mod tag;
mod time;

pub use crate::base32::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::sequencer::*;
pub use crate::tag::*;
pub use crate::time::*;

#[doc(hidden)]
pub mod __internal {
    #[cfg(feature = "serde")]
    pub use serde;
}
