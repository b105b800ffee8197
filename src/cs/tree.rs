pub mod binary_tree;
pub mod diameter;

// Re-export tree types and algorithms with descriptive names
pub use binary_tree::{parse_level_order, Side, TreeNode};
pub use diameter::{diameter_of_binary_tree, diameter_of_binary_tree_iterative};
