mod alphabet;
mod codec;
mod interface;

pub use alphabet::*;
pub use codec::*;
pub use interface::*;
