use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::application::ChartAnimator;
use crate::domain::chart::SurfaceSize;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::rendering::CanvasRenderer;
use crate::infrastructure::services::BrowserRandom;

const FALLBACK_WIDTH: u32 = 800;
const FALLBACK_HEIGHT: u32 = 500;

/// WASM API for the animated chart. Binds one animator to one canvas and
/// keeps the window resize subscription alive for as long as the chart
/// object exists on the JS side.
#[wasm_bindgen]
pub struct TradingChart {
    animator: Option<ChartAnimator>,
    _resize_listener: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl TradingChart {
    /// A missing canvas yields an inert chart: no crash, start() is a no-op.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String) -> TradingChart {
        match CanvasRenderer::from_element_id(&canvas_id, viewport_size()) {
            Ok(renderer) => {
                let animator = ChartAnimator::new(renderer, Box::new(BrowserRandom::new()));
                let resize_listener = attach_resize_listener(animator.clone());
                Self { animator: Some(animator), _resize_listener: Some(resize_listener) }
            }
            Err(error) => {
                get_logger().warn(
                    LogComponent::Presentation("TradingChart"),
                    &format!("chart disabled: {}", error),
                );
                Self { animator: None, _resize_listener: None }
            }
        }
    }

    pub fn start(&self) {
        if let Some(animator) = &self.animator {
            animator.start();
        }
    }

    pub fn stop(&self) {
        if let Some(animator) = &self.animator {
            animator.stop();
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.animator
            .as_ref()
            .is_some_and(|animator| animator.state() == crate::application::LoopState::Running)
    }

    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> String {
        match &self.animator {
            Some(animator) => animator.stats(),
            None => "{}".to_string(),
        }
    }
}

/// Current window dimensions; the canvas fills the whole viewport.
fn viewport_size() -> SurfaceSize {
    let window = web_sys::window();
    let width = window
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|v| v as u32)
        .unwrap_or(FALLBACK_WIDTH);
    let height = window
        .as_ref()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .map(|v| v as u32)
        .unwrap_or(FALLBACK_HEIGHT);
    SurfaceSize::new(width, height)
}

fn attach_resize_listener(animator: ChartAnimator) -> Closure<dyn FnMut(web_sys::Event)> {
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        animator.resize(viewport_size());
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure
}
