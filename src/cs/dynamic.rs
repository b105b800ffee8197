pub mod longest_increasing_subsequence;

// Re-export dynamic programming algorithms with descriptive names
pub use longest_increasing_subsequence::{
    longest_increasing_subsequence, longest_increasing_subsequence_length,
    longest_increasing_subsequence_length_memoized, longest_increasing_subsequence_length_patience,
};
