use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeafscanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Element {id} out of range (total: {len})")]
    ElementOutOfRange { id: usize, len: usize },

    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Invalid leaf size range: min={min}, max={max}")]
    InvalidSizeRange { min: usize, max: usize },

    #[error("No leaf colors selected")]
    NoLeafColors,

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, LeafscanError>;
