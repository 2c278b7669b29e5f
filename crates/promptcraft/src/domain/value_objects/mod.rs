//! Value Objects
//!
//! Immutable types with no identity of their own.

mod language;
mod length_tier;
mod page;

pub use language::*;
pub use length_tier::*;
pub use page::*;
