//! Subnet calculation logic.
//!
//! This module contains the calculator core:
//! - [`parser`] - Validation of `a.b.c.d/n` input
//! - [`engine`] - Subnet arithmetic on validated input

mod engine;
mod parser;

// Re-export public functions
pub use engine::compute_subnet;
pub use parser::{parse, validate_octets};
