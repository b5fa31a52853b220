//! Top-level facade crate for schedweb.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use schedweb_core::*;
}

pub mod server {
    pub use schedweb_server::*;
}
