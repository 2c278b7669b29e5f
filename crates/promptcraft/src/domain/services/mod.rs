//! Domain Services
//!
//! Pure functions over domain values: instruction composition and output cleanup.

pub mod instruction;
pub mod normalizer;

pub use instruction::{evaluation_instruction, refine_instruction, tag_list};
pub use normalizer::normalize;
