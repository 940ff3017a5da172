use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Input type error: {0}")]
    InputType(String),

    #[error("Input value error: {0}")]
    InputValue(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, DemoError>;

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for DemoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
