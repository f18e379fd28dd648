//! Runtime state of the particle background and its mount/unmount steps.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};
use yew::NodeRef;

use crate::particles::{
    stop, AnimationHandle, AnimationLoop, BrowserFrames, CanvasSurface, ParticleField,
    SurfaceStatus,
};

pub struct ParticleBackground {
    /// The full-viewport `<canvas>`.
    pub canvas_ref: NodeRef,

    /// Running frame loop; `None` before mount, after unmount, or when the
    /// canvas has no 2D context.
    pub animation: Option<AnimationHandle<BrowserFrames>>,

    /// `resize` listener on the window, kept alive until unmount.
    pub resize_listener: Option<Closure<dyn FnMut()>>,
}

impl Default for ParticleBackground {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleBackground {
    pub fn new() -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            animation: None,
            resize_listener: None,
        }
    }

    /// Sizes the canvas, hooks the resize listener and starts the loop.
    ///
    /// Does nothing when there is no window, no canvas, or no 2D context.
    pub fn mount(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        fit_to_viewport(&window, &canvas);

        let mut surface = match CanvasSurface::acquire(&canvas) {
            SurfaceStatus::Ready(surface) => surface,
            SurfaceStatus::RenderingUnavailable => return,
        };

        let listener = {
            let window = window.clone();
            let canvas = canvas.clone();
            Closure::<dyn FnMut()>::new(move || fit_to_viewport(&window, &canvas))
        };
        let _ = window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        self.resize_listener = Some(listener);

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut field = ParticleField::seeded(
            f64::from(canvas.width()),
            f64::from(canvas.height()),
            seed,
        );
        // The tick owns the field; the resize listener only touches the canvas.
        self.animation = Some(AnimationLoop::start(BrowserFrames::new(window), move || {
            field.resize(f64::from(canvas.width()), f64::from(canvas.height()));
            field.frame(&mut surface);
        }));
        debug!("event=particle_background status=started");
    }

    pub fn unmount(&mut self) {
        if let Some(handle) = self.animation.take() {
            stop(handle);
        }
        if let Some(listener) = self.resize_listener.take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            }
        }
        debug!("event=particle_background status=stopped");
    }
}

fn fit_to_viewport(window: &Window, canvas: &HtmlCanvasElement) {
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    canvas.set_width(dimension(window.inner_width()));
    canvas.set_height(dimension(window.inner_height()));
}

#[cfg(test)]
mod tests {
    use super::ParticleBackground;

    #[test]
    fn starts_unmounted_and_unmount_is_harmless() {
        let mut background = ParticleBackground::default();
        assert!(background.animation.is_none());
        assert!(background.resize_listener.is_none());
        background.unmount();
        assert!(background.animation.is_none());
    }
}
