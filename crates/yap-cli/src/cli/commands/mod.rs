//! CLI command handlers.

pub mod config;
pub mod landing;
pub mod typewriter;
