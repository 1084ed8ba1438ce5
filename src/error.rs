use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong between loading a config and drawing a frame
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    /// The YAML document could not be parsed
    #[error("YAML parse error: {0}")]
    Parse(String),

    /// The config parsed but holds values the generator cannot use
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("step distance must be positive and finite, got {0}")]
    InvalidStepDistance(f64),

    /// The rendering backend failed; fatal for the current run
    #[error("render failed: {0}")]
    Render(String),

    #[error("logger setup failed: {0}")]
    Logging(String),
}

impl From<serde_yaml::Error> for TreeError {
    fn from(e: serde_yaml::Error) -> Self {
        TreeError::Parse(e.to_string())
    }
}

impl From<TreeError> for JsValue {
    fn from(e: TreeError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
