//! Core Yap landing library (typewriter, particles, scroll, config).

pub mod config;
pub mod content;
pub mod interrupt;
pub mod logging;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod typewriter;
