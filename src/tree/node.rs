use smallvec::SmallVec;
use std::fmt;

use crate::enums::{HTTP_METHOD_COUNT, HttpMethod, MethodMask};
use crate::pattern::SegmentSpec;

/// Index of a node inside its tree's arena.
pub type NodeId = usize;

pub const ROOT_NODE: NodeId = 0;

pub struct RouteNode<H> {
    // None only for the root
    pub(crate) spec: Option<SegmentSpec>,
    // insertion order is the match order
    pub(crate) children: SmallVec<[NodeId; 4]>,
    pub(crate) handlers: [Option<H>; HTTP_METHOD_COUNT],
    pub(crate) methods: MethodMask,
}

impl<H> RouteNode<H> {
    pub(crate) fn root() -> Self {
        Self {
            spec: None,
            children: SmallVec::new(),
            handlers: std::array::from_fn(|_| None),
            methods: MethodMask::empty(),
        }
    }

    pub(crate) fn with_spec(spec: SegmentSpec) -> Self {
        Self {
            spec: Some(spec),
            ..Self::root()
        }
    }

    #[inline(always)]
    pub fn spec(&self) -> Option<&SegmentSpec> {
        self.spec.as_ref()
    }

    #[inline(always)]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline(always)]
    pub fn methods(&self) -> MethodMask {
        self.methods
    }

    #[inline]
    pub fn handler(&self, method: HttpMethod) -> Option<&H> {
        self.handlers[method.index()].as_ref()
    }

    /// True when at least one pattern ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.methods.is_empty()
    }

    /// Stores `handler` for `method`, returning the one it replaced.
    pub(crate) fn attach(&mut self, method: HttpMethod, handler: H) -> Option<H> {
        self.methods.insert(method.mask());
        self.handlers[method.index()].replace(handler)
    }
}

impl<H> fmt::Debug for RouteNode<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteNode")
            .field("spec", &self.spec)
            .field("children", &self.children)
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}
