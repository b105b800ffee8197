pub mod dynamic;
pub mod tree;


// Re-export all modules
pub use dynamic::*;
pub use tree::*;
