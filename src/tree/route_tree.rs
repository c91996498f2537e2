use serde::Serialize;
use std::fmt;

use super::node::{NodeId, ROOT_NODE, RouteNode};
use super::traversal::traverse;
use crate::enums::HttpMethod;
use crate::matcher::{Cancellation, MatchOutcome, NeverCancel, find_route};
use crate::pattern::ConstraintCache;
use crate::router::RouterOptions;

/// Segment trie holding every registered pattern.
///
/// Nodes live in an arena indexed by [`NodeId`]; the root is always
/// [`ROOT_NODE`] and stands for the path before the first segment. Children
/// keep insertion order, which is also the order they are tried in (last
/// inserted first, see [`RouteTree::find`]).
pub struct RouteTree<H> {
    pub(crate) nodes: Vec<RouteNode<H>>,
    pub(crate) options: RouterOptions,
    pub(crate) constraints: ConstraintCache,
    pub(crate) route_count: usize,
}

/// One registered (method, pattern) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteInfo {
    pub method: HttpMethod,
    pub pattern: String,
}

impl<H> RouteTree<H> {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            nodes: vec![RouteNode::root()],
            options,
            constraints: ConstraintCache::new(),
            route_count: 0,
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    #[inline(always)]
    pub fn root(&self) -> &RouteNode<H> {
        &self.nodes[ROOT_NODE]
    }

    /// Looks up a node by id. Ids handed out by this tree are always valid.
    #[inline(always)]
    pub fn node(&self, id: NodeId) -> &RouteNode<H> {
        &self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct (pattern, method) registrations.
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    /// Resolves `method` and `path` to a handler.
    ///
    /// Matching children of a node are explored last-inserted first, so when
    /// a literal and a parameter both fit the same segment, whichever was
    /// registered later wins. Register literals after parameters to give them
    /// priority.
    pub fn find(&self, method: HttpMethod, path: &str) -> MatchOutcome<&H> {
        find_route(self, Some(method), path, &NeverCancel)
    }

    /// Same as [`RouteTree::find`], aborting with [`MatchOutcome::Cancelled`]
    /// once `cancel` fires.
    pub fn find_with_cancel<C>(
        &self,
        method: HttpMethod,
        path: &str,
        cancel: &C,
    ) -> MatchOutcome<&H>
    where
        C: Cancellation + ?Sized,
    {
        find_route(self, Some(method), path, cancel)
    }

    /// Lists registered routes in tree order, patterns in canonical form.
    pub fn routes(&self) -> Vec<RouteInfo> {
        let mut out = Vec::with_capacity(self.route_count);
        let mut trail: Vec<String> = Vec::new();

        traverse(self, |node, depth| {
            trail.truncate(depth.saturating_sub(1));
            if let Some(spec) = node.spec() {
                trail.push(spec.to_string());
            }
            for method in node.methods().methods() {
                out.push(RouteInfo {
                    method,
                    pattern: format!("/{}", trail.join("/")),
                });
            }
        });

        out
    }
}

impl<H> Default for RouteTree<H> {
    fn default() -> Self {
        Self::new(RouterOptions::default())
    }
}

impl<H> fmt::Debug for RouteTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTree")
            .field("nodes", &self.nodes.len())
            .field("routes", &self.route_count)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Indented dump of the tree, one node per line with its methods.
impl<H> fmt::Display for RouteTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());

        traverse(self, |node, depth| {
            if result.is_err() {
                return;
            }
            result = write_node(f, node, depth);
        });

        result
    }
}

fn write_node<H>(f: &mut fmt::Formatter<'_>, node: &RouteNode<H>, depth: usize) -> fmt::Result {
    let indent = depth * 2;
    match node.spec() {
        Some(spec) => write!(f, "{:indent$}{}", "", spec)?,
        None => f.write_str("/")?,
    }

    if node.is_terminal() {
        let methods: Vec<&str> = node.methods().methods().map(HttpMethod::as_str).collect();
        write!(f, " [{}]", methods.join(", "))?;
    }

    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> RouteTree<u32> {
        let mut tree = RouteTree::default();
        tree.insert(HttpMethod::Get, "/", 0).unwrap();
        tree.insert(HttpMethod::Get, "/user/{key}", 1).unwrap();
        tree.insert(HttpMethod::Post, "/user/{key}", 2).unwrap();
        tree.insert(HttpMethod::Get, "/name", 3).unwrap();
        tree.insert(HttpMethod::Get, "/user/{key}/{id:[0-9]+}", 4).unwrap();
        tree
    }

    #[test]
    fn routes_are_listed_in_tree_order() {
        let routes = sample_tree().routes();
        let listed: Vec<(HttpMethod, &str)> = routes
            .iter()
            .map(|r| (r.method, r.pattern.as_str()))
            .collect();

        assert_eq!(
            listed,
            vec![
                (HttpMethod::Get, "/"),
                (HttpMethod::Get, "/user/{key}"),
                (HttpMethod::Post, "/user/{key}"),
                (HttpMethod::Get, "/user/{key}/{id:[0-9]+}"),
                (HttpMethod::Get, "/name"),
            ]
        );
    }

    #[test]
    fn display_renders_indented_tree() {
        let rendered = sample_tree().to_string();
        let expected = "\
/ [GET]
  user
    {key} [GET, POST]
      {id:[0-9]+} [GET]
  name [GET]
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn counts_track_nodes_and_routes() {
        let tree = sample_tree();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.route_count(), 5);
    }
}
