#[derive(Debug, thiserror::Error)]
pub enum SpacesError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn empty_name_error() -> SpacesError {
    SpacesError::InvalidArgument("cannot add a color space with an empty name")
}
