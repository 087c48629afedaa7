use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Inference(#[from] sn_inference::error::Error),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}
