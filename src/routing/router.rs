use crate::http::request::Request;
use crate::routing::resource::Resource;

/// A rule mapping an incoming request to a resource.
pub trait Route: Send + Sync {
    /// The resource this route resolves the request to, or `None` when the
    /// request is not a match for this route.
    fn resolve(&self, request: &Request) -> Option<Box<dyn Resource>>;
}

/// Ordered chain of routes.
///
/// Routes are registered once at startup and tried strictly in
/// registration order; the first match wins. Registration order is part of
/// the server's configuration, not an accident of initialization.
pub struct Router {
    routes: Vec<Box<dyn Route>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn register(&mut self, route: Box<dyn Route>) {
        self.routes.push(route);
    }

    /// The first matching route's resource, or `None` when no route
    /// matches — which the connection answers with 501 Not Implemented.
    pub fn route(&self, request: &Request) -> Option<Box<dyn Resource>> {
        self.routes.iter().find_map(|r| r.resolve(request))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
