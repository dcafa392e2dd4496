pub mod classifier;
pub mod outcome;

pub use classifier::*;
pub use outcome::*;
