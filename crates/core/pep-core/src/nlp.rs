//! Text normalization and keyword matching

pub mod keywords;
pub mod normalizer;

pub use keywords::KeywordTable;
pub use normalizer::normalize;
