//! Error types for the editing engine

use thiserror::Error;
use vellum_model::Path;

use crate::transforms::TransformError;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),

    #[error("not an image url: {0}")]
    NotAnImageUrl(String),

    #[error("no image at {0}")]
    NotAnImage(Path),
}
