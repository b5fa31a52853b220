//! schedweb core: runtime-free primitives shared by the server and tooling.
//!
//! This crate defines the error surface and the static asset helpers (path
//! normalization, content types, cache policy). It carries no HTTP or async
//! runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SchedWebError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod assets;
pub mod error;

/// Shared result type.
pub use error::{Result, SchedWebError};
