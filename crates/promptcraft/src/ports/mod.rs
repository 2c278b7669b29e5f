//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the application layer
//! reaches external systems (generation model, feedback endpoint).
//!
//! Implementations of these traits live in `adapters`.

mod feedback;
mod generation;

pub use feedback::*;
pub use generation::*;
