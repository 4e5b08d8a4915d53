//! Core types for PEP

pub mod analysis;
pub mod classes;
pub mod distribution;
pub mod turn;

pub use analysis::*;
pub use classes::*;
pub use distribution::*;
pub use turn::*;
