mod constraint;
mod error;
mod lexer;
mod matcher;
mod segment;

pub use constraint::ConstraintCache;
pub use error::{PatternError, PatternResult};
pub use lexer::parse_segment;
pub use matcher::match_segment;
pub use segment::{ParamConstraint, SegmentKind, SegmentSpec};
