use hashbrown::HashMap as FastHashMap;
use regex::Regex;
use std::sync::Arc;

use super::{PatternError, PatternResult};

/// Shares compiled constraint regexes between segments with the same text.
#[derive(Debug, Default)]
pub struct ConstraintCache {
    compiled: FastHashMap<Box<str>, Arc<Regex>>,
}

impl ConstraintCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Compiles `raw` anchored at both ends so it must cover the whole segment.
    ///
    /// `raw` has to be a valid regex on its own; text such as `a)|(b` only
    /// parses once wrapped and would then escape the anchors.
    pub fn compile(&mut self, segment: &str, name: &str, raw: &str) -> PatternResult<Arc<Regex>> {
        if let Some(existing) = self.compiled.get(raw) {
            return Ok(existing.clone());
        }

        let invalid = |err: regex::Error| PatternError::InvalidConstraint {
            pattern: segment.to_string(),
            name: name.to_string(),
            error: err.to_string(),
        };

        Regex::new(raw).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{})$", raw)).map_err(invalid)?;

        let arc = Arc::new(regex);
        self.compiled.insert(raw.into(), arc.clone());
        Ok(arc)
    }
}
