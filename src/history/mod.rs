pub mod action;
pub mod blocks;
pub mod hand;
pub mod line;
pub mod seat;

pub use action::*;
pub use blocks::*;
pub use hand::*;
pub use line::*;
pub use seat::*;
