//! Default command: the full-screen landing page.

use anyhow::Result;
use yap_core::config::Config;

pub fn run(config: &Config) -> Result<()> {
    tracing::info!(
        phrases = config.typewriter.phrases.len(),
        particles = config.particles.count,
        "starting landing page"
    );
    yap_tui::run_landing(config)
}
