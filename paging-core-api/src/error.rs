use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagingError {
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
}

pub type PagingResult<T> = Result<T, PagingError>;
