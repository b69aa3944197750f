//! Neutral fill toggle recipe, the palettes it walks and the legacy design-system call shape,
//! exposed for the binary and integration tests.

#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod design_system;
pub mod error;
pub mod palette;
pub mod recipes;
pub mod report;
