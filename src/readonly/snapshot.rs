use crate::enums::HttpMethod;
use crate::matcher::{Cancellation, MatchOutcome, NeverCancel, find_route};
use crate::tree::{RouteInfo, RouteTree};
use std::fmt;

/// Sealed route tree used in the serving phase.
///
/// Only shared references reach the tree from here, so any number of threads
/// may run lookups at once without further locking.
pub struct RouterReadOnly<H> {
    tree: RouteTree<H>,
    debug: bool,
}

impl<H> RouterReadOnly<H> {
    pub fn from_tree(tree: RouteTree<H>) -> Self {
        let debug = tree.options().debug;
        Self { tree, debug }
    }

    pub fn tree(&self) -> &RouteTree<H> {
        &self.tree
    }

    pub fn routes(&self) -> Vec<RouteInfo> {
        self.tree.routes()
    }

    #[tracing::instrument(level = "trace", skip(self, path), fields(method = %method, path = %path))]
    pub fn find(&self, method: HttpMethod, path: &str) -> MatchOutcome<&H> {
        self.resolve(Some(method), method.as_str(), path, &NeverCancel)
    }

    #[tracing::instrument(level = "trace", skip(self, path, cancel), fields(method = %method, path = %path))]
    pub fn find_with_cancel<C>(
        &self,
        method: HttpMethod,
        path: &str,
        cancel: &C,
    ) -> MatchOutcome<&H>
    where
        C: Cancellation + ?Sized,
    {
        self.resolve(Some(method), method.as_str(), path, cancel)
    }

    /// Lookup by method token; tokens that do not name an [`HttpMethod`]
    /// still walk the tree so the caller can tell a wrong method from a
    /// missing path.
    #[tracing::instrument(level = "trace", skip(self, path), fields(method = %method, path = %path))]
    pub fn find_by_name(&self, method: &str, path: &str) -> MatchOutcome<&H> {
        self.resolve(method.parse().ok(), method, path, &NeverCancel)
    }

    fn resolve<C>(
        &self,
        method: Option<HttpMethod>,
        token: &str,
        path: &str,
        cancel: &C,
    ) -> MatchOutcome<&H>
    where
        C: Cancellation + ?Sized,
    {
        tracing::event!(tracing::Level::TRACE, operation = "find", method = %token, path = %path);

        let outcome = find_route(&self.tree, method, path, cancel);

        if self.debug {
            match &outcome {
                MatchOutcome::Matched { params, .. } => tracing::event!(
                    tracing::Level::DEBUG,
                    outcome = "matched",
                    method = %token,
                    path = %path,
                    params = params.len() as u64,
                    "route matched"
                ),
                MatchOutcome::NotFound => tracing::event!(
                    tracing::Level::DEBUG,
                    outcome = "not_found",
                    method = %token,
                    path = %path,
                    "no route matched"
                ),
                MatchOutcome::MethodNotAllowed { allowed } => tracing::event!(
                    tracing::Level::DEBUG,
                    outcome = "method_not_allowed",
                    method = %token,
                    path = %path,
                    allowed = ?allowed,
                    "route matched for other methods"
                ),
                MatchOutcome::Cancelled => tracing::event!(
                    tracing::Level::DEBUG,
                    outcome = "cancelled",
                    method = %token,
                    path = %path,
                    "route lookup cancelled"
                ),
            }
        }

        outcome
    }
}

impl<H> fmt::Debug for RouterReadOnly<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterReadOnly")
            .field("tree", &self.tree)
            .field("debug", &self.debug)
            .finish()
    }
}
