use thiserror::Error;

#[derive(Debug, Error)]
pub enum CcdError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

pub type CcdResult<T> = Result<T, CcdError>;
