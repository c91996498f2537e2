use crate::enums::HttpMethod;
use crate::matcher::MatchOutcome;
use crate::readonly::RouterReadOnly;
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::tree::{RouteInfo, RouteTree};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::OnceLock;

struct RouterState<H> {
    tree: RouteTree<H>,
    readonly: OnceLock<Arc<RouterReadOnly<H>>>,
}

impl<H> RouterState<H> {
    fn new(options: RouterOptions) -> Self {
        Self {
            tree: RouteTree::new(options),
            readonly: OnceLock::new(),
        }
    }
}

/// Thread-safe router with a registration phase followed by a serving phase.
///
/// Routes are added until [`Router::seal`] is called. Sealing moves the tree
/// into an immutable [`RouterReadOnly`] snapshot; from then on adding fails
/// and lookups never take the write lock.
pub struct Router<H> {
    inner: RwLock<RouterState<H>>,
}

impl<H> Router<H> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        let state = RouterState::new(options.unwrap_or_default());
        Self {
            inner: RwLock::new(state),
        }
    }

    pub fn add(&self, method: HttpMethod, pattern: &str, handler: H) -> RouterResult<()> {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                path: pattern.to_string(),
            });
        }

        guard.tree.insert(method, pattern, handler)?;
        Ok(())
    }

    /// Like [`Router::add`] with the method given by its HTTP token.
    pub fn add_by_name(&self, method: &str, pattern: &str, handler: H) -> RouterResult<()> {
        let method: HttpMethod = method.parse()?;
        self.add(method, pattern, handler)
    }

    /// Registers routes in order and stops at the first rejected pattern.
    /// Routes before it stay registered.
    pub fn add_bulk<I, S>(&self, entries: I) -> RouterResult<usize>
    where
        I: IntoIterator<Item = (HttpMethod, S, H)>,
        S: AsRef<str>,
    {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            let count = entries.into_iter().count();
            return Err(RouterError::BulkAddWhileSealed { count });
        }

        let mut added = 0usize;
        for (method, pattern, handler) in entries {
            guard.tree.insert(method, pattern.as_ref(), handler)?;
            added += 1;
        }
        Ok(added)
    }

    pub fn get(&self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Get, pattern, handler)
    }

    pub fn post(&self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Post, pattern, handler)
    }

    pub fn put(&self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Put, pattern, handler)
    }

    pub fn delete(&self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Delete, pattern, handler)
    }

    pub fn patch(&self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Patch, pattern, handler)
    }

    /// Ends the registration phase. Calling it again has no effect.
    pub fn seal(&self) {
        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            return;
        }

        let options = guard.tree.options().clone();
        let tree = std::mem::replace(&mut guard.tree, RouteTree::new(options));
        tracing::event!(
            tracing::Level::DEBUG,
            nodes = tree.node_count() as u64,
            routes = tree.route_count() as u64,
            "router sealed"
        );

        let snapshot = Arc::new(RouterReadOnly::from_tree(tree));
        let _ = guard.readonly.set(snapshot);
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().readonly.get().is_some()
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouterReadOnly<H>>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => Ok(ro.clone()),
            None => Err(RouterError::ReadOnlyUnavailable),
        }
    }

    /// Registered routes, in either phase.
    pub fn routes(&self) -> Vec<RouteInfo> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => ro.routes(),
            None => guard.tree.routes(),
        }
    }
}

impl<H: Clone> Router<H> {
    pub fn find(&self, method: HttpMethod, path: &str) -> RouterResult<MatchOutcome<H>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => Ok(ro.find(method, path).cloned()),
            None => Err(RouterError::FindWhileMutable),
        }
    }

    /// Lookup with the method given by its HTTP token. Unknown tokens have
    /// no handlers, so they end in `MethodNotAllowed` or `NotFound`.
    pub fn find_by_name(&self, method: &str, path: &str) -> RouterResult<MatchOutcome<H>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => Ok(ro.find_by_name(method, path).cloned()),
            None => Err(RouterError::FindWhileMutable),
        }
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<H> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.read();
        let sealed = guard.readonly.get();
        let tree = sealed.map_or(&guard.tree, |ro| ro.tree());
        f.debug_struct("Router")
            .field("tree", tree)
            .field("sealed", &sealed.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_is_idempotent() {
        let router = Router::new(None);
        router.get("/once", 1u8).unwrap();
        router.seal();
        let first = router.get_readonly().unwrap();
        router.seal();
        let second = router.get_readonly().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.tree().route_count(), 1);
    }

    #[test]
    fn bulk_add_stops_at_first_invalid_pattern() {
        let router = Router::new(None);
        let err = router
            .add_bulk([
                (HttpMethod::Get, "/a", 1u8),
                (HttpMethod::Get, "/b/{id:(}", 2),
                (HttpMethod::Get, "/c", 3),
            ])
            .unwrap_err();

        assert!(matches!(err, RouterError::Tree(_)));
        let patterns: Vec<String> = router.routes().into_iter().map(|r| r.pattern).collect();
        assert_eq!(patterns, vec!["/a".to_string()]);
    }

    #[test]
    fn add_by_name_rejects_unknown_method() {
        let router = Router::new(None);
        let err = router.add_by_name("FETCH", "/a", 1u8).unwrap_err();
        assert!(matches!(err, RouterError::UnsupportedMethod(_)));
    }

    #[test]
    fn debug_reports_sealed_tree() {
        let router = Router::new(None);
        router.get("/a", 1u8).unwrap();
        router.post("/b/{id}", 2).unwrap();
        let before = format!("{router:?}");
        router.seal();
        let after = format!("{router:?}");

        assert!(before.contains("routes: 2"), "{before}");
        assert!(before.contains("sealed: false"), "{before}");
        assert!(after.contains("nodes: 4, routes: 2"), "{after}");
        assert!(after.contains("sealed: true"), "{after}");
    }
}
