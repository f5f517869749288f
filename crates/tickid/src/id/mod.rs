mod be_bytes;
mod define;
mod interface;
mod types;
mod utils;

#[cfg(test)]
mod tests;

pub use interface::*;
pub use types::*;
