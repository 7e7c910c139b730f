use menucss::MenuCssError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Style error: {0}")]
    Style(#[from] MenuCssError),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Logger error: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
