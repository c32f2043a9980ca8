mod render;
mod state;

pub use render::render_steps;
pub use state::StepsState;
