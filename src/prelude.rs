//! Prelude module for tanggalan crate.
//!
//! Re-exports the derive macros shared across modules from derive_more.

pub use derive_more::Display;
