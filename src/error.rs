use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be nonzero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("failed to allocate cell buffers for a {width}x{height} grid")]
    Allocation { width: usize, height: usize },
}
