//! Command handlers for the CLI binary.

pub mod init;
pub mod score;
