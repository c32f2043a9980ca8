//! Full-screen terminal rendition of the Hear Me Yap landing page.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{Write, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;
use yap_core::config::Config;

/// Shows the landing page until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal, the configuration is
/// invalid, or the run was interrupted.
pub fn run_landing(config: &Config) -> Result<()> {
    if !terminal::is_interactive() {
        anyhow::bail!(
            "The landing page requires a terminal.\n\
             Use `yap type` to print the typewriter to a pipe."
        );
    }

    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()?;

    writeln!(stderr(), "Thanks for yapping!")?;
    Ok(())
}
