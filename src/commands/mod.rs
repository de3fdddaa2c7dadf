// ABOUTME: Command module aggregator for the cutter CLI.
// ABOUTME: Re-exports the prepare and init command handlers.

mod init;
mod prepare;

pub use init::init;
pub use prepare::{PrepareRequest, prepare};
