pub mod disk;
pub mod memory;
pub mod store;

pub use disk::*;
pub use memory::*;
pub use store::*;
