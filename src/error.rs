//! Errors raised while wiring the page. None of them reach the visitor.

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("element not found: {0}")]
    MissingElement(String),

    /// The canvas would not hand out a WebGL2 context.
    #[error("webgl2 context unavailable")]
    ContextUnavailable,

    #[error("shader compile failed: {0}")]
    ShaderCompile(String),

    #[error("program link failed: {0}")]
    ProgramLink(String),

    #[error("uniform not found: {0}")]
    MissingUniform(String),

    /// An exception thrown by a browser API.
    #[error("browser error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(err: SiteError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
