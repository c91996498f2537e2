use super::PathParams;
use crate::enums::MethodMask;

/// Result of resolving a request against the route tree.
///
/// Misses are ordinary values here; only lifecycle problems are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<T> {
    Matched { handler: T, params: PathParams },
    /// No node chain matches the path under any method.
    NotFound,
    /// The path matches but not for the requested method. `allowed` holds the
    /// methods registered on the first fully matching node.
    MethodNotAllowed { allowed: MethodMask },
    Cancelled,
}

impl<T> MatchOutcome<T> {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }

    pub fn handler(&self) -> Option<&T> {
        match self {
            MatchOutcome::Matched { handler, .. } => Some(handler),
            _ => None,
        }
    }

    pub fn params(&self) -> Option<&PathParams> {
        match self {
            MatchOutcome::Matched { params, .. } => Some(params),
            _ => None,
        }
    }

    pub fn into_matched(self) -> Option<(T, PathParams)> {
        match self {
            MatchOutcome::Matched { handler, params } => Some((handler, params)),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> MatchOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            MatchOutcome::Matched { handler, params } => MatchOutcome::Matched {
                handler: f(handler),
                params,
            },
            MatchOutcome::NotFound => MatchOutcome::NotFound,
            MatchOutcome::MethodNotAllowed { allowed } => {
                MatchOutcome::MethodNotAllowed { allowed }
            }
            MatchOutcome::Cancelled => MatchOutcome::Cancelled,
        }
    }
}

impl<T: Clone> MatchOutcome<&T> {
    pub fn cloned(self) -> MatchOutcome<T> {
        self.map(|handler| handler.clone())
    }
}
