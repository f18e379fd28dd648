pub mod faq_section;
pub mod load_state;
pub mod particle_background;

pub use faq_section::FaqSection;
pub use load_state::LoadState;
pub use particle_background::ParticleBackground;
