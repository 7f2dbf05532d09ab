use thiserror::Error;

/// Error type returned by a customize hook.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum MasonryError {
    #[error("Invalid column count: {columns} (must be at least 1)")]
    InvalidColumns { columns: u32 },
    #[error("Invalid container width: {width} (must be finite and positive)")]
    InvalidWidth { width: f64 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Gutters leave no room for columns (column width {column_width})")]
    NonPositiveColumnWidth { column_width: f64 },
    #[error("Invalid dimension at index {index}: {width}x{height}")]
    InvalidDimension {
        index: usize,
        width: f64,
        height: f64,
    },
    #[error(transparent)]
    Customize(BoxError),
}

pub type Result<T> = std::result::Result<T, MasonryError>;
