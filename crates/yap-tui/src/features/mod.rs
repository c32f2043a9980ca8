//! Page sections.
//!
//! Each section owns its state (where it has any) and a pure render function.

pub mod hero;
pub mod navbar;
pub mod scroll;
pub mod steps;
