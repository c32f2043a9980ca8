mod render;
mod state;

pub use render::render_hero;
pub use state::HeroState;
