pub mod rng;
pub mod similarity;

pub use rng::*;
pub use similarity::*;
