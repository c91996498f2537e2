use smallvec::SmallVec;

use super::{Cancellation, MatchOutcome, PathParams};
use crate::enums::{HttpMethod, MethodMask};
use crate::path::split_segments;
use crate::pattern::match_segment;
use crate::tree::{NodeId, ROOT_NODE, RouteTree};

const STACK_INLINE_CAPACITY: usize = 16;
const CAPTURE_INLINE_CAPACITY: usize = 8;

/// Pending node to examine, `depth` segments already consumed.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    depth: usize,
    capture: Option<usize>,
}

// Captures form parent-linked chains so sibling frames share their prefix.
#[derive(Debug, Clone, Copy)]
struct Capture {
    parent: Option<usize>,
    node: NodeId,
    depth: usize,
}

/// Depth-first search with an explicit stack.
///
/// Children are pushed in insertion order and popped LIFO, so the last
/// inserted matching child is tried first. A node that fully consumes the
/// path but lacks `method` is remembered and the search goes on; only when
/// nothing matches does it turn into [`MatchOutcome::MethodNotAllowed`].
/// `method` is `None` for request methods the router does not know, which
/// can never be served.
pub fn find_route<'t, H, C>(
    tree: &'t RouteTree<H>,
    method: Option<HttpMethod>,
    path: &str,
    cancel: &C,
) -> MatchOutcome<&'t H>
where
    C: Cancellation + ?Sized,
{
    let segments = split_segments(path);
    let case_sensitive = tree.options().case_sensitive;

    let mut stack: SmallVec<[Frame; STACK_INLINE_CAPACITY]> = SmallVec::new();
    let mut captures: SmallVec<[Capture; CAPTURE_INLINE_CAPACITY]> = SmallVec::new();
    let mut mismatch: Option<MethodMask> = None;

    stack.push(Frame {
        node: ROOT_NODE,
        depth: 0,
        capture: None,
    });

    loop {
        if cancel.is_cancelled() {
            return MatchOutcome::Cancelled;
        }
        let Some(frame) = stack.pop() else {
            break;
        };
        let node = tree.node(frame.node);

        let Some(&segment) = segments.get(frame.depth) else {
            if let Some(handler) = method.and_then(|m| node.handler(m)) {
                let params = collect_params(tree, &segments, &captures, frame.capture);
                return MatchOutcome::Matched { handler, params };
            }
            if mismatch.is_none() && node.is_terminal() {
                mismatch = Some(node.methods());
            }
            continue;
        };

        for &child_id in node.children() {
            let Some(spec) = tree.node(child_id).spec() else {
                continue;
            };
            if !match_segment(segment, spec, case_sensitive) {
                continue;
            }

            let capture = if spec.is_dynamic() {
                captures.push(Capture {
                    parent: frame.capture,
                    node: child_id,
                    depth: frame.depth,
                });
                Some(captures.len() - 1)
            } else {
                frame.capture
            };

            stack.push(Frame {
                node: child_id,
                depth: frame.depth + 1,
                capture,
            });
        }
    }

    match mismatch {
        Some(allowed) => MatchOutcome::MethodNotAllowed { allowed },
        None => MatchOutcome::NotFound,
    }
}

fn collect_params<H>(
    tree: &RouteTree<H>,
    segments: &[&str],
    captures: &[Capture],
    last: Option<usize>,
) -> PathParams {
    let mut chain: SmallVec<[&Capture; CAPTURE_INLINE_CAPACITY]> = SmallVec::new();
    let mut cursor = last;
    while let Some(idx) = cursor {
        let capture = &captures[idx];
        chain.push(capture);
        cursor = capture.parent;
    }

    let mut params = PathParams::with_capacity(chain.len());
    for capture in chain.iter().rev() {
        let name = tree
            .node(capture.node)
            .spec()
            .and_then(|spec| spec.param_name());
        if let Some(name) = name {
            params.push(name, segments[capture.depth]);
        }
    }
    params
}
