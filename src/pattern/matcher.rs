use super::SegmentSpec;

/// Tests one request segment against a registered segment spec.
#[inline]
pub fn match_segment(seg: &str, spec: &SegmentSpec, case_sensitive: bool) -> bool {
    match spec {
        SegmentSpec::Literal(lit) if case_sensitive => &**lit == seg,
        SegmentSpec::Literal(lit) => lit.eq_ignore_ascii_case(seg),
        SegmentSpec::Param { .. } => !seg.is_empty(),
        SegmentSpec::Constrained { constraint, .. } => constraint.is_match(seg),
    }
}
