use anyhow::Result;
use yap_core::config::{Config, ParticlesConfig};
use yap_core::particles::ParticleField;
use yap_core::typewriter::{Timeline, Typewriter};

/// Hero section state.
#[derive(Debug)]
pub struct HeroState {
    pub typewriter: Typewriter,
    /// Drawn on the first frame, then fixed for the life of the page.
    pub particles: Option<ParticleField>,
    particle_config: ParticlesConfig,
    /// Last pointer position as a fraction of the terminal (0..1 each axis).
    pub pointer: (f32, f32),
}

impl HeroState {
    /// Starts the typewriter on `timeline`.
    ///
    /// # Errors
    /// Returns an error if the configured phrases are invalid.
    pub fn mount(config: &Config, timeline: &mut Timeline) -> Result<Self> {
        let script = config.typewriter.script()?;
        let typewriter = Typewriter::start(script, config.typewriter.timing(), timeline);
        Ok(Self {
            typewriter,
            particles: None,
            particle_config: config.particles.clone(),
            pointer: (0.0, 0.0),
        })
    }

    /// Generates the particle field if it does not exist yet.
    ///
    /// Returns `true` when the field was created by this call.
    pub fn ensure_particles(&mut self) -> bool {
        if self.particles.is_some() {
            return false;
        }
        let field = self.particle_config.field();
        tracing::debug!(
            count = field.len(),
            seed = ?self.particle_config.seed,
            "particles generated"
        );
        self.particles = Some(field);
        true
    }

    /// Records the pointer position for the background parallax.
    pub fn track_pointer(&mut self, column: u16, row: u16, width: u16, height: u16) {
        let fx = f32::from(column) / f32::from(width.max(1));
        let fy = f32::from(row) / f32::from(height.max(1));
        self.pointer = (fx.clamp(0.0, 1.0), fy.clamp(0.0, 1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(seed: Option<u64>) -> (HeroState, Timeline) {
        let mut config = Config::default();
        config.particles.seed = seed;
        let mut timeline = Timeline::new();
        let hero = HeroState::mount(&config, &mut timeline).unwrap();
        (hero, timeline)
    }

    #[test]
    fn test_particles_generated_once() {
        let (mut hero, _timeline) = mounted(Some(11));
        assert!(hero.particles.is_none());
        assert!(hero.ensure_particles());
        let first = hero.particles.clone();
        assert!(!hero.ensure_particles());
        assert_eq!(hero.particles, first);
        assert_eq!(hero.particles.unwrap().len(), 15);
    }

    #[test]
    fn test_pointer_is_normalized() {
        let (mut hero, _timeline) = mounted(None);
        hero.track_pointer(60, 10, 120, 40);
        assert_eq!(hero.pointer, (0.5, 0.25));
        hero.track_pointer(500, 500, 120, 40);
        assert_eq!(hero.pointer, (1.0, 1.0));
    }
}
