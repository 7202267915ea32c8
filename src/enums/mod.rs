pub mod difficulty;
pub mod verdict;
