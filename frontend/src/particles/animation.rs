//! Frame-driven loop with an explicit start/stop lifecycle.
//!
//! [`AnimationLoop::start`] binds a tick to a [`FrameScheduler`], requests
//! the first frame and returns an [`AnimationHandle`]. Each fired frame runs
//! the tick once and requests the next frame. [`stop`] (or dropping the
//! handle) cancels the pending frame and releases the tick; no callback runs
//! afterwards.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// A source of display-refresh callbacks.
///
/// The loop binds one callback, then asks for it to be run on the next
/// frame, at most one pending request at a time.
pub trait FrameScheduler {
    /// Token identifying a pending request.
    type Frame: Copy;

    fn bind(&self, callback: Box<dyn FnMut()>);
    /// Requests one run of the bound callback. `None` if the host refused.
    fn request(&self) -> Option<Self::Frame>;
    fn cancel(&self, frame: Self::Frame);
    /// Drops the bound callback.
    fn unbind(&self);
}

/// `requestAnimationFrame` on the page window.
pub struct BrowserFrames {
    window: Window,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl BrowserFrames {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: RefCell::new(None),
        }
    }
}

impl FrameScheduler for BrowserFrames {
    type Frame = i32;

    fn bind(&self, callback: Box<dyn FnMut()>) {
        *self.callback.borrow_mut() = Some(Closure::wrap(callback));
    }

    fn request(&self) -> Option<i32> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel(&self, frame: i32) {
        let _ = self.window.cancel_animation_frame(frame);
    }

    fn unbind(&self) {
        self.callback.borrow_mut().take();
    }
}

struct LoopState<S: FrameScheduler> {
    scheduler: S,
    pending: Cell<Option<S::Frame>>,
    running: Cell<bool>,
    ticks: Cell<u64>,
}

pub struct AnimationLoop;

impl AnimationLoop {
    pub fn start<S, F>(scheduler: S, mut tick: F) -> AnimationHandle<S>
    where
        S: FrameScheduler + 'static,
        F: FnMut() + 'static,
    {
        let state = Rc::new(LoopState {
            scheduler,
            pending: Cell::new(None),
            running: Cell::new(true),
            ticks: Cell::new(0),
        });

        // Weak: the scheduler owns this closure and the state owns the scheduler.
        let weak: Weak<LoopState<S>> = Rc::downgrade(&state);
        state.scheduler.bind(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if !state.running.get() {
                return;
            }
            tick();
            state.ticks.set(state.ticks.get() + 1);
            if state.running.get() {
                state.pending.set(state.scheduler.request());
            }
        }));
        state.pending.set(state.scheduler.request());

        AnimationHandle { state }
    }
}

/// Owner of a running loop. Dropping it stops the loop.
pub struct AnimationHandle<S: FrameScheduler> {
    state: Rc<LoopState<S>>,
}

impl<S: FrameScheduler> AnimationHandle<S> {
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Frames that have run the tick so far.
    pub fn ticks(&self) -> u64 {
        self.state.ticks.get()
    }

    pub fn scheduler(&self) -> &S {
        &self.state.scheduler
    }

    pub fn stop(self) {
        // Drop does the work.
    }

    fn halt(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        if let Some(frame) = self.state.pending.take() {
            self.state.scheduler.cancel(frame);
        }
        self.state.scheduler.unbind();
    }
}

impl<S: FrameScheduler> Drop for AnimationHandle<S> {
    fn drop(&mut self) {
        self.halt();
    }
}

/// Stops the loop behind `handle` and cancels its pending frame.
pub fn stop<S: FrameScheduler>(handle: AnimationHandle<S>) {
    handle.stop();
}

#[cfg(test)]
mod tests {
    use super::{stop, AnimationLoop, FrameScheduler};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Frames fire only when the test says so.
    #[derive(Default)]
    struct ManualFrames {
        callback: RefCell<Option<Box<dyn FnMut()>>>,
        pending: Cell<Option<u32>>,
        next: Cell<u32>,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl ManualFrames {
        /// Runs the pending frame, if any. Returns whether one ran.
        fn fire(&self) -> bool {
            if self.pending.take().is_none() {
                return false;
            }
            let Some(mut callback) = self.callback.borrow_mut().take() else {
                return false;
            };
            callback();
            let mut slot = self.callback.borrow_mut();
            if slot.is_none() {
                *slot = Some(callback);
            }
            true
        }
    }

    impl FrameScheduler for ManualFrames {
        type Frame = u32;

        fn bind(&self, callback: Box<dyn FnMut()>) {
            *self.callback.borrow_mut() = Some(callback);
        }

        fn request(&self) -> Option<u32> {
            let id = self.next.get() + 1;
            self.next.set(id);
            self.pending.set(Some(id));
            Some(id)
        }

        fn cancel(&self, frame: u32) {
            if self.pending.get() == Some(frame) {
                self.pending.set(None);
            }
            self.cancelled.borrow_mut().push(frame);
        }

        fn unbind(&self) {
            self.callback.borrow_mut().take();
        }
    }

    #[test]
    fn each_fired_frame_runs_one_tick_and_requests_the_next() {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let handle = AnimationLoop::start(ManualFrames::default(), move || {
            seen.set(seen.get() + 1)
        });

        assert_eq!(count.get(), 0);
        for _ in 0..3 {
            assert!(handle.scheduler().fire());
        }
        assert_eq!(count.get(), 3);
        assert_eq!(handle.ticks(), 3);
        assert!(handle.scheduler().pending.get().is_some());
    }

    #[test]
    fn stop_cancels_the_pending_frame_and_releases_the_tick() {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let frames = ManualFrames::default();
        let cancelled = frames.cancelled.clone();
        let handle = AnimationLoop::start(frames, move || seen.set(seen.get() + 1));
        assert!(handle.scheduler().fire());
        let pending = handle.scheduler().pending.get().expect("next frame requested");

        stop(handle);

        assert_eq!(*cancelled.borrow(), vec![pending]);
        assert_eq!(count.get(), 1);
        // The tick closure held the only other reference.
        assert_eq!(Rc::strong_count(&count), 1);
    }

    #[test]
    fn dropping_the_handle_stops_the_loop() {
        let frames = ManualFrames::default();
        let cancelled = frames.cancelled.clone();
        {
            let handle = AnimationLoop::start(frames, || {});
            assert!(handle.is_running());
        }
        assert_eq!(cancelled.borrow().len(), 1);
    }
}
