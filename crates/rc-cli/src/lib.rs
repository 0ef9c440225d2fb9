//! Robotic recipe engine CLI — library crate so the command runner can be
//! exercised from tests without spawning the binary.

pub mod cli;
pub mod commands;
