// ABOUTME: Library root for cutter - exposes the release pipeline and its collaborators.
// ABOUTME: The main binary is in main.rs.

pub mod adapters;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod release;
pub mod types;
