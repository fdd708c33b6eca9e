//! Cross-crate integration tests.

#[cfg(test)]
mod support;

pub mod interleaving;
pub mod persistence;
pub mod scenario;
