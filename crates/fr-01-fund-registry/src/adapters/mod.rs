//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implementations of the outbound storage and codec ports.

pub mod serializer;
pub mod storage;
