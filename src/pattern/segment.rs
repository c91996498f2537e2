use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// A compiled, fully anchored parameter constraint.
#[derive(Debug, Clone)]
pub struct ParamConstraint {
    raw: Box<str>,
    compiled: Arc<Regex>,
}

impl ParamConstraint {
    pub fn new(raw: &str, compiled: Arc<Regex>) -> Self {
        Self {
            raw: raw.into(),
            compiled,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn compiled(&self) -> &Arc<Regex> {
        &self.compiled
    }

    #[inline]
    pub fn is_match(&self, segment: &str) -> bool {
        self.compiled.is_match(segment)
    }
}

impl PartialEq for ParamConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ParamConstraint {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Literal,
    OpenDynamic,
    RegexDynamic,
}

/// Registration-time description of one path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentSpec {
    Literal(Box<str>),
    Param {
        name: Box<str>,
    },
    Constrained {
        name: Box<str>,
        constraint: ParamConstraint,
    },
}

impl SegmentSpec {
    pub fn kind(&self) -> SegmentKind {
        match self {
            SegmentSpec::Literal(_) => SegmentKind::Literal,
            SegmentSpec::Param { .. } => SegmentKind::OpenDynamic,
            SegmentSpec::Constrained { .. } => SegmentKind::RegexDynamic,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        !matches!(self, SegmentSpec::Literal(_))
    }

    /// Variable bound by this segment, `None` for literals.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            SegmentSpec::Literal(_) => None,
            SegmentSpec::Param { name } | SegmentSpec::Constrained { name, .. } => Some(&**name),
        }
    }

    /// Structural equality used to reuse sibling nodes during registration.
    pub fn same_as(&self, other: &SegmentSpec, case_sensitive: bool) -> bool {
        match (self, other) {
            (SegmentSpec::Literal(a), SegmentSpec::Literal(b)) if !case_sensitive => {
                a.eq_ignore_ascii_case(b)
            }
            _ => self == other,
        }
    }
}

/// Renders the segment back in pattern syntax.
impl fmt::Display for SegmentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentSpec::Literal(text) => f.write_str(text),
            SegmentSpec::Param { name } => write!(f, "{{{name}}}"),
            SegmentSpec::Constrained { name, constraint } => {
                write!(f, "{{{}:{}}}", name, constraint.raw())
            }
        }
    }
}
