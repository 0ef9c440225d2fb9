//! Robotic recipe engine API — library crate for the session REST server.
//!
//! Exposes the router builder and state so the binary (`main.rs`) and
//! `rc-e2e-tests` share the same wiring.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
