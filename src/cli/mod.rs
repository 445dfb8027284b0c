//! CLI command implementations

pub mod init;
pub mod play;
pub mod render;
pub mod tasks;
