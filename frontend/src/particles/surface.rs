//! Drawing target for the particle field.

use log::debug;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::field::Particle;

/// Gradient stops from the particle centre outwards.
const GRADIENT_STOPS: [(f32, &str); 3] = [
    (0.0, "rgba(232, 180, 160, 0.8)"),
    (0.5, "rgba(212, 181, 212, 0.6)"),
    (1.0, "rgba(247, 231, 206, 0.2)"),
];

pub trait DrawSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn draw_particle(&mut self, particle: &Particle);
}

/// Outcome of acquiring the canvas context.
///
/// The background is decorative: `RenderingUnavailable` means "draw
/// nothing", never an error shown to the visitor.
pub enum SurfaceStatus {
    Ready(CanvasSurface),
    RenderingUnavailable,
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn acquire(canvas: &HtmlCanvasElement) -> SurfaceStatus {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
        match ctx {
            Some(ctx) => SurfaceStatus::Ready(Self { ctx }),
            None => {
                debug!("event=particle_surface status=unavailable");
                SurfaceStatus::RenderingUnavailable
            }
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    // Individual draw failures are dropped; the next frame redraws anyway.
    fn draw_particle(&mut self, particle: &Particle) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(particle.opacity);
        if let Ok(gradient) = ctx.create_radial_gradient(
            particle.x,
            particle.y,
            0.0,
            particle.x,
            particle.y,
            particle.size,
        ) {
            for (offset, color) in GRADIENT_STOPS {
                let _ = gradient.add_color_stop(offset, color);
            }
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            if ctx
                .arc(particle.x, particle.y, particle.size, 0.0, TAU)
                .is_ok()
            {
                ctx.fill();
            }
        }
        ctx.restore();
    }
}
