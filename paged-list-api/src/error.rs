use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagingError {
    #[error("Invalid argument {name} = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    #[error("Inconsistent subset: expected {expected} items on page, found {actual}")]
    InconsistentSubset { expected: usize, actual: usize },
}

pub type PagingResult<T> = Result<T, PagingError>;
