use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_SEGMENTS: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    /// Literal segments compare byte for byte when set, ASCII case-insensitively otherwise.
    pub case_sensitive: bool,
    /// Deepest pattern accepted at registration.
    pub max_segments: usize,
    /// Emit a DEBUG event for every lookup outcome.
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            max_segments: DEFAULT_MAX_SEGMENTS,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_segments == 0 {
            return Err(RouterOptionsError::MaxSegmentsInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn max_segments(mut self, value: usize) -> Self {
        self.options.max_segments = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_segments must be at least 1 (got {provided})")]
    MaxSegmentsInvalid { provided: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_case_sensitive_and_quiet() {
        let options = RouterOptions::default();
        assert!(options.case_sensitive);
        assert!(!options.debug);
        assert_eq!(options.max_segments, DEFAULT_MAX_SEGMENTS);
    }

    #[test]
    fn builder_rejects_zero_segment_limit() {
        let err = RouterOptions::builder().max_segments(0).build().unwrap_err();
        assert_eq!(err, RouterOptionsError::MaxSegmentsInvalid { provided: 0 });
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let options: RouterOptions =
            serde_json::from_str(r#"{ "case_sensitive": false }"#).unwrap();
        assert!(!options.case_sensitive);
        assert_eq!(options.max_segments, DEFAULT_MAX_SEGMENTS);
    }
}
