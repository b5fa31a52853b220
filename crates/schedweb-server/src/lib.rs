//! schedweb server library entry.
//!
//! This crate wires the static file handler, the ops endpoints and the
//! request metrics registry into one axum router. It is consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod assets;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
