use super::{ConstraintCache, ParamConstraint, PatternError, PatternResult, SegmentSpec};

/// Classifies one registration-time segment.
///
/// `{name}` is an open parameter, `{name:regex}` a constrained one; anything
/// else is taken as literal text. Only the first `:` separates the name from
/// the constraint, so the regex itself may contain colons and braces.
#[tracing::instrument(level = "trace", skip(cache), fields(segment = %seg))]
pub fn parse_segment(seg: &str, cache: &mut ConstraintCache) -> PatternResult<SegmentSpec> {
    let Some(inner) = seg
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    else {
        return Ok(SegmentSpec::Literal(seg.into()));
    };

    let (name, raw) = match inner.split_once(':') {
        Some((name, raw)) => (name, Some(raw)),
        None => (inner, None),
    };

    if name.is_empty() {
        return Err(PatternError::ParameterMissingName {
            segment: seg.to_string(),
        });
    }

    match raw {
        Some(raw) if !raw.is_empty() => {
            let compiled = cache.compile(seg, name, raw)?;
            Ok(SegmentSpec::Constrained {
                name: name.into(),
                constraint: ParamConstraint::new(raw, compiled),
            })
        }
        _ => Ok(SegmentSpec::Param { name: name.into() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::SegmentKind;

    fn parse(seg: &str) -> PatternResult<SegmentSpec> {
        parse_segment(seg, &mut ConstraintCache::new())
    }

    #[test]
    fn plain_text_is_literal() {
        let spec = parse("name").unwrap();
        assert_eq!(spec, SegmentSpec::Literal("name".into()));
    }

    #[test]
    fn braces_without_colon_are_open_parameter() {
        let spec = parse("{key}").unwrap();
        assert_eq!(spec.kind(), SegmentKind::OpenDynamic);
        assert_eq!(spec.param_name(), Some("key"));
    }

    #[test]
    fn braces_with_colon_are_constrained_parameter() {
        let spec = parse("{id:[0-9]+}").unwrap();
        match &spec {
            SegmentSpec::Constrained { name, constraint } => {
                assert_eq!(&**name, "id");
                assert_eq!(constraint.raw(), "[0-9]+");
                assert!(constraint.is_match("24"));
                assert!(!constraint.is_match("piyush"));
                assert_eq!(constraint.compiled().as_str(), "^(?:[0-9]+)$");
            }
            other => panic!("expected constrained segment, got {other:?}"),
        }
    }

    #[test]
    fn constraint_may_contain_colons_and_braces() {
        let spec = parse("{t:[0-9]{2}:[0-9]{2}}").unwrap();
        match &spec {
            SegmentSpec::Constrained { name, constraint } => {
                assert_eq!(&**name, "t");
                assert_eq!(constraint.raw(), "[0-9]{2}:[0-9]{2}");
                assert!(constraint.is_match("12:30"));
            }
            other => panic!("expected constrained segment, got {other:?}"),
        }
    }

    #[test]
    fn empty_constraint_falls_back_to_open_parameter() {
        let spec = parse("{id:}").unwrap();
        assert_eq!(spec, SegmentSpec::Param { name: "id".into() });
    }

    #[test]
    fn unbalanced_braces_stay_literal() {
        assert_eq!(parse("{id").unwrap().kind(), SegmentKind::Literal);
        assert_eq!(parse("id}").unwrap().kind(), SegmentKind::Literal);
    }

    #[test]
    fn missing_name_is_rejected() {
        for seg in ["{}", "{:[0-9]+}"] {
            match parse(seg).unwrap_err() {
                PatternError::ParameterMissingName { segment } => assert_eq!(segment, seg),
                other => panic!("expected ParameterMissingName, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_regex_is_rejected() {
        match parse("{id:(}").unwrap_err() {
            PatternError::InvalidConstraint { name, .. } => assert_eq!(name, "id"),
            other => panic!("expected InvalidConstraint, got {other:?}"),
        }
    }

    #[test]
    fn unbalanced_group_in_constraint_is_rejected() {
        match parse("{id:[0-9]+)|(?:x}").unwrap_err() {
            PatternError::InvalidConstraint { name, pattern, .. } => {
                assert_eq!(name, "id");
                assert_eq!(pattern, "{id:[0-9]+)|(?:x}");
            }
            other => panic!("expected InvalidConstraint, got {other:?}"),
        }
    }
}
