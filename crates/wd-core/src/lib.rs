//! # wd-core
//!
//! Core error definitions for workdays.
//!
//! This crate provides the pieces shared across the other crates in the
//! workspace: the error enum, the `Result` alias, and the `ensure!` /
//! `fail!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
