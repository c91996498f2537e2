use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("duplicate parameter name '{param}' in pattern '{pattern}'")]
    DuplicateParamName { param: String, pattern: String },
    #[error("pattern '{pattern}' has {segments} segments, exceeding the limit of {limit}")]
    TooManySegments {
        pattern: String,
        segments: usize,
        limit: usize,
    },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type TreeResult<T> = Result<T, TreeError>;
