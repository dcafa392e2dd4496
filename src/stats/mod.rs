pub mod aggregate;
pub mod profile;
pub mod sheet;

pub use aggregate::*;
pub use profile::*;
pub use sheet::*;
