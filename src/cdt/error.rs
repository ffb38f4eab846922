use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdtError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

pub type CdtResult<T> = Result<T, CdtError>;
