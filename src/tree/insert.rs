use smallvec::SmallVec;

use super::node::{NodeId, ROOT_NODE, RouteNode};
use super::{RouteTree, TreeError, TreeResult};
use crate::enums::HttpMethod;
use crate::path::split_segments;
use crate::pattern::{SegmentSpec, parse_segment};

type SpecList = SmallVec<[SegmentSpec; 8]>;

impl<H> RouteTree<H> {
    /// Registers `handler` for `method` on `pattern`.
    ///
    /// The whole pattern is parsed before the tree is touched, so a rejected
    /// pattern leaves no partial nodes behind. Registering the same pattern
    /// and method again replaces the handler.
    #[tracing::instrument(level = "trace", skip(self, handler), fields(method = %method, pattern = %pattern))]
    pub fn insert(&mut self, method: HttpMethod, pattern: &str, handler: H) -> TreeResult<()> {
        let specs = self.prepare_pattern(pattern)?;
        let depth = specs.len();
        let leaf = self.descend_or_create(specs);

        if self.nodes[leaf].attach(method, handler).is_some() {
            tracing::event!(
                tracing::Level::DEBUG,
                method = %method,
                pattern = %pattern,
                "replaced existing handler"
            );
        } else {
            self.route_count += 1;
        }

        tracing::event!(
            tracing::Level::TRACE,
            operation = "insert",
            method = %method,
            depth = depth as u64,
            nodes = self.nodes.len() as u64
        );
        Ok(())
    }

    fn prepare_pattern(&mut self, pattern: &str) -> TreeResult<SpecList> {
        let segments = split_segments(pattern);
        let limit = self.options.max_segments;
        if segments.len() > limit {
            return Err(TreeError::TooManySegments {
                pattern: pattern.to_string(),
                segments: segments.len(),
                limit,
            });
        }

        let mut specs = SpecList::with_capacity(segments.len());
        for seg in segments {
            let spec = parse_segment(seg, &mut self.constraints)?;
            if let Some(name) = spec.param_name()
                && specs.iter().any(|prev| prev.param_name() == Some(name))
            {
                return Err(TreeError::DuplicateParamName {
                    param: name.to_string(),
                    pattern: pattern.to_string(),
                });
            }
            specs.push(spec);
        }

        Ok(specs)
    }

    fn descend_or_create(&mut self, specs: SpecList) -> NodeId {
        let case_sensitive = self.options.case_sensitive;
        let mut current = ROOT_NODE;

        for spec in specs {
            let existing = self.nodes[current].children.iter().copied().find(|&child| {
                self.nodes[child]
                    .spec
                    .as_ref()
                    .is_some_and(|known| known.same_as(&spec, case_sensitive))
            });

            current = match existing {
                Some(child) => child,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(RouteNode::with_spec(spec));
                    self.nodes[current].children.push(id);
                    id
                }
            };
        }

        current
    }
}
