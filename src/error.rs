// Errors raised while mounting the hero on the page. They are host
// precondition failures and surface to JS as thrown strings.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum HeroError {
    NoWindow,
    NoDocument,
    /// No element with this id.
    CanvasNotFound(String),
    /// Element exists but is not a `<canvas>`.
    NotACanvas(String),
    /// The canvas refused to hand out a 2d context.
    SurfaceUnavailable,
    /// Any other failed DOM call, already stringified.
    Js(String),
}

impl fmt::Display for HeroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeroError::NoWindow => write!(f, "no global window"),
            HeroError::NoDocument => write!(f, "window has no document"),
            HeroError::CanvasNotFound(id) => write!(f, "canvas '{}' not found", id),
            HeroError::NotACanvas(id) => write!(f, "element '{}' is not a canvas", id),
            HeroError::SurfaceUnavailable => write!(f, "drawable surface unavailable"),
            HeroError::Js(msg) => write!(f, "DOM call failed: {}", msg),
        }
    }
}

impl std::error::Error for HeroError {}

impl From<JsValue> for HeroError {
    fn from(value: JsValue) -> Self {
        HeroError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<HeroError> for JsValue {
    fn from(err: HeroError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
