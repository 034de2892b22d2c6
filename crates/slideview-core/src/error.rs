use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Layer index {index} out of range (total: {total})")]
    LayerIndexOutOfRange { index: usize, total: usize },

    #[error("Empty layer stack")]
    EmptyStack,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("Invalid histogram: {0}")]
    InvalidHistogram(String),

    #[error("Pixel buffer holds {actual} values, expected {expected}")]
    PixelBufferSize { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, SlideviewError>;
