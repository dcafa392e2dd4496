pub mod analysis;
pub mod cli;
pub mod query;

pub use analysis::*;
pub use cli::*;
pub use query::*;
