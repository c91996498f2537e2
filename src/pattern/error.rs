use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("parameter segment '{segment}' is missing a name")]
    ParameterMissingName { segment: String },
    #[error("invalid constraint for parameter '{name}' in segment '{pattern}': {error}")]
    InvalidConstraint {
        pattern: String,
        name: String,
        error: String,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
