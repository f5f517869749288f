mod counter;
mod interface;
mod mutex;
mod random;


pub use counter::*;
pub use interface::*;
pub use random::*;
