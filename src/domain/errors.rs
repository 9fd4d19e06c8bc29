use derive_more::Display;
use wasm_bindgen::JsValue;

/// Errors raised while binding the chart to its drawing surface. Drawing
/// itself has no failure path; a missing surface degrades to a no-op chart.
#[derive(Debug, Clone, Display)]
pub enum SurfaceError {
    #[display(fmt = "canvas element '{}' not found", _0)]
    CanvasNotFound(String),
    #[display(fmt = "2d context unavailable for '{}': {}", _0, _1)]
    ContextUnavailable(String, String),
}

impl From<SurfaceError> for JsValue {
    fn from(error: SurfaceError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
