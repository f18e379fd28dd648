//! Ambient particle background: simulation, drawing and the frame loop.

pub mod animation;
pub mod field;
pub mod surface;

pub use animation::{stop, AnimationHandle, AnimationLoop, BrowserFrames, FrameScheduler};
pub use field::{FieldSettings, Particle, ParticleField, FADE_SCALE};
pub use surface::{CanvasSurface, DrawSurface, SurfaceStatus};
