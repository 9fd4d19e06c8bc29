use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use strum::{AsRefStr, Display};
use wasm_bindgen::JsValue;

use crate::domain::chart::{PriceSeries, SeriesGenerator, SeriesUpdater, SurfaceSize};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::random::RandomSource;
use crate::infrastructure::rendering::CanvasRenderer;
use crate::log_debug;

/// Lifecycle of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum LoopState {
    #[strum(serialize = "stopped")]
    Stopped,
    #[strum(serialize = "running")]
    Running,
}

/// Start/stop state machine, separate from the scheduler so the transitions
/// stay testable off-browser. Both transitions are idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLoop {
    state: LoopState,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self { state: LoopState::Stopped }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// `Stopped -> Running`; returns whether a first frame must be scheduled.
    pub fn begin(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = LoopState::Running;
        true
    }

    /// `Running -> Stopped`; returns whether a pending frame must be
    /// cancelled. Safe to call when not running.
    pub fn halt(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = LoopState::Stopped;
        was_running
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

struct AnimatorInner {
    surface: SurfaceSize,
    series: PriceSeries,
    updater: SeriesUpdater,
    renderer: CanvasRenderer,
    rng: Box<dyn RandomSource>,
    frame_loop: FrameLoop,
    pending: Option<AnimationFrame>,
    frames_rendered: u64,
}

impl AnimatorInner {
    /// Render the current state, then mutate it for the next frame.
    fn render_and_update(&mut self) -> Result<(), JsValue> {
        self.renderer.render_frame(&self.series, self.rng.as_mut())?;
        self.updater.advance(&mut self.series, self.surface, self.rng.as_mut());
        self.frames_rendered += 1;
        Ok(())
    }
}

/// Animation driver: owns the series, the renderer and the repaint schedule.
/// Each frame runs render-then-update synchronously before rescheduling.
#[derive(Clone)]
pub struct ChartAnimator {
    inner: Rc<RefCell<AnimatorInner>>,
}

impl ChartAnimator {
    pub fn new(renderer: CanvasRenderer, mut rng: Box<dyn RandomSource>) -> Self {
        let surface = renderer.surface();
        let series = SeriesGenerator::generate(surface, rng.as_mut());
        log_debug!(
            LogComponent::Application("ChartAnimator"),
            "generated {} points for {}x{}",
            series.len(),
            surface.width,
            surface.height
        );

        Self {
            inner: Rc::new(RefCell::new(AnimatorInner {
                surface,
                series,
                updater: SeriesUpdater::new(),
                renderer,
                rng,
                frame_loop: FrameLoop::new(),
                pending: None,
                frames_rendered: 0,
            })),
        }
    }

    pub fn state(&self) -> LoopState {
        self.inner.borrow().frame_loop.state()
    }

    pub fn start(&self) {
        if !self.inner.borrow_mut().frame_loop.begin() {
            return;
        }
        get_logger().info(LogComponent::Application("ChartAnimator"), "animation loop started");
        Self::schedule(&self.inner);
    }

    /// Cancel the pending frame if one is scheduled. Idempotent.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.frame_loop.halt() {
            get_logger().info(LogComponent::Application("ChartAnimator"), "animation loop stopped");
        }
        // Dropping the handle cancels the browser callback.
        inner.pending = None;
    }

    /// Rebuild the series for new surface dimensions. The rebuild happens
    /// under the same borrow as the frame callback uses, so no frame can
    /// observe a half-rebuilt series; the running loop is left untouched.
    pub fn resize(&self, surface: SurfaceSize) {
        let mut inner = self.inner.borrow_mut();
        inner.surface = surface;
        inner.renderer.set_dimensions(surface);
        inner.series = SeriesGenerator::generate(surface, inner.rng.as_mut());
        log_debug!(
            LogComponent::Application("ChartAnimator"),
            "surface resized to {}x{}, series rebuilt with {} points",
            surface.width,
            surface.height,
            inner.series.len()
        );
    }

    /// JSON snapshot of the driver state for the host page.
    pub fn stats(&self) -> String {
        let inner = self.inner.borrow();
        serde_json::json!({
            "state": inner.frame_loop.state().as_ref(),
            "points": inner.series.len(),
            "framesRendered": inner.frames_rendered,
            "animClock": inner.updater.clock(),
            "width": inner.surface.width,
            "height": inner.surface.height,
        })
        .to_string()
    }

    fn schedule(inner: &Rc<RefCell<AnimatorInner>>) {
        let hook = Rc::clone(inner);
        let frame = request_animation_frame(move |_timestamp| Self::on_frame(&hook));
        inner.borrow_mut().pending = Some(frame);
    }

    fn on_frame(inner: &Rc<RefCell<AnimatorInner>>) {
        {
            let mut guard = inner.borrow_mut();
            guard.pending = None;
            if !guard.frame_loop.is_running() {
                return;
            }
            if let Err(error) = guard.render_and_update() {
                // A failing frame halts the loop instead of retrying forever.
                guard.frame_loop.halt();
                get_logger().error(
                    LogComponent::Application("ChartAnimator"),
                    &format!("frame failed, loop stopped: {:?}", error),
                );
                return;
            }
        }
        Self::schedule(inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halt_before_begin_is_a_no_op() {
        let mut frame_loop = FrameLoop::new();
        assert!(!frame_loop.halt());
        assert_eq!(frame_loop.state(), LoopState::Stopped);
    }

    #[test]
    fn begin_is_idempotent() {
        let mut frame_loop = FrameLoop::new();
        assert!(frame_loop.begin());
        assert!(!frame_loop.begin());
        assert!(frame_loop.is_running());
    }

    #[test]
    fn halt_cancels_only_when_running() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.begin();
        assert!(frame_loop.halt());
        assert!(!frame_loop.halt());
    }

    #[test]
    fn state_labels() {
        assert_eq!(LoopState::Stopped.as_ref(), "stopped");
        assert_eq!(LoopState::Running.to_string(), "running");
    }
}
