//! Structured error types for gridkeep.

/// All errors that can occur while decoding positions or editing items.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Form validation failure. The message is shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    /// The external save call rejected. The message is shown inline.
    #[error("{0}")]
    Save(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
