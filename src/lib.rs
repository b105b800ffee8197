pub mod cs;
pub mod error;

pub use cs::{dynamic, tree};
pub use error::{Error, Result};
