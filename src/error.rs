use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons a page feature could not be wired up. None of them are fatal;
/// the caller logs and moves on to the next feature.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("missing element `{0}`")]
    MissingElement(String),
    #[error("optional library `{0}` not loaded")]
    MissingLibrary(&'static str),
    #[error("{library} failed to initialize: {reason}")]
    LibraryInit {
        library: &'static str,
        reason: String,
    },
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for InitError {
    fn from(v: JsValue) -> Self {
        InitError::Js(format!("{:?}", v))
    }
}
