// ── Per-flow navigation stack ──
//
// `NavigationPath` is what a presentation layer binds its stack view to.
// Like the platform type it mirrors, it does not report its own length,
// so the router keeps a parallel log of routes and derives depth from
// that. Every mutation touches both together.

use tokio::sync::watch;
use tracing::debug;

use super::Route;
use crate::stream::StateStream;

/// Opaque navigation path bound by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPath {
    entries: Vec<Route>,
}

impl NavigationPath {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn append(&mut self, route: Route) {
        self.entries.push(route);
    }

    fn remove_last(&mut self, n: usize) {
        let keep = self.entries.len().saturating_sub(n);
        self.entries.truncate(keep);
    }

    fn from_routes(routes: &[Route]) -> Self {
        let mut path = Self::default();
        for r in routes {
            path.append(r.clone());
        }
        path
    }
}

/// Mutable navigation stack for one flow.
pub struct Router {
    path: NavigationPath,
    routes: Vec<Route>,
    published: watch::Sender<Vec<Route>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        let (published, _) = watch::channel(Vec::new());
        Self {
            path: NavigationPath::default(),
            routes: Vec::new(),
            published,
        }
    }

    // ── Push / replace ───────────────────────────────────────────────

    /// Push a new route on top of the stack.
    pub fn push(&mut self, route: Route) {
        debug!(%route, depth = self.routes.len() + 1, "push");
        self.path.append(route.clone());
        self.routes.push(route);
        self.publish();
    }

    /// Replace the whole stack, discarding history.
    pub fn set_stack(&mut self, new_routes: Vec<Route>) {
        debug!(depth = new_routes.len(), "set stack");
        self.path = NavigationPath::from_routes(&new_routes);
        self.routes = new_routes;
        self.publish();
    }

    // ── Pop operations ───────────────────────────────────────────────

    /// Go back one level. No-op on an empty stack.
    pub fn pop(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.path.remove_last(1);
        self.routes.pop();
        debug!(depth = self.routes.len(), "pop");
        self.publish();
    }

    /// Keep exactly `depth` entries. No-op when already at or below that
    /// depth, or when `depth` is negative.
    pub fn pop_to(&mut self, depth: i64) {
        let Ok(depth) = usize::try_from(depth) else {
            return;
        };
        let current = self.count();
        if current <= depth {
            return;
        }
        let to_remove = current - depth;
        self.path.remove_last(to_remove);
        self.routes.truncate(depth);
        debug!(depth, removed = to_remove, "pop to depth");
        self.publish();
    }

    /// Clear back to the flow's root screen.
    pub fn pop_to_root(&mut self) {
        self.pop_to(0);
    }

    // ── Helpers ──────────────────────────────────────────────────────

    /// Current stack depth, taken from the route log.
    pub fn count(&self) -> usize {
        self.routes.len()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn top(&self) -> Option<&Route> {
        self.routes.last()
    }

    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    /// Subscribe to the route log; a new value arrives after every change.
    pub fn subscribe(&self) -> StateStream<Vec<Route>> {
        StateStream::new(self.published.subscribe())
    }

    fn publish(&self) {
        self.published.send_replace(self.routes.clone());
    }

    #[cfg(test)]
    fn in_sync(&self) -> bool {
        self.path.entries == self.routes
    }
}
