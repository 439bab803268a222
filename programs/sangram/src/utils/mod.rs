pub mod contest_id;
pub mod prize;
pub mod rng;
pub mod roster;

pub use contest_id::*;
pub use prize::*;
pub use rng::*;
