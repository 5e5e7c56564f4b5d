//! Error types for the texframe library.

use thiserror::Error;

/// Result type alias for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Precondition failed: {0}")]
    Precondition(#[from] PreconditionError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to load typesetting engine: {0}")]
    ResourceLoad(String),

    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Checks performed before any host mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("typesetting engine is not ready")]
    EngineNotReady,

    #[error("equation is empty")]
    EmptyEquation,

    #[error("preview has not been rendered")]
    PreviewNotReady,
}

/// Errors that occur while typesetting or materializing an equation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("typesetting engine is not ready")]
    NotReady,

    #[error("invalid LaTeX: {0}")]
    Invalid(String),

    #[error("unsupported: {0}")]
    Unsupported(String),

    #[error("malformed markup: {0}")]
    Markup(#[from] MarkupError),

    #[error("rasterization failed: {0}")]
    Raster(String),
}

/// Errors from the markup parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("no root element")]
    MissingRoot,

    #[error("expected <{expected}> root, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },
}

/// Failures reported by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("{operation} rejected: {message}")]
    Rejected { operation: String, message: String },

    #[error("host did not create a frame")]
    MissingFrame,

    #[error("frame node has no identifier")]
    MissingNodeId,
}

impl HostError {
    /// Build a rejection for the named host operation.
    pub fn rejected(operation: impl Into<String>, message: impl Into<String>) -> Self {
        HostError::Rejected {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Errors that occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid value for `{key}`: {message}")]
    InvalidValue { key: &'static str, message: String },
}
