//! # Domain Layer
//!
//! Pure fund-record logic. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod guard;
pub mod keys;
