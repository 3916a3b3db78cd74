pub mod error;
pub mod format;
pub mod output;
pub mod pagination;
pub mod stats;

pub use error::*;
pub use output::*;
