use crate::http::request::Request;
use crate::http::response::Response;

/// Handles GET for a resource.
pub trait GetHandler: Send + Sync {
    fn get(&self, request: &Request) -> anyhow::Result<Response>;
}

/// Handles HEAD for a resource.
pub trait HeadHandler: Send + Sync {
    fn head(&self, request: &Request) -> anyhow::Result<Response>;
}

/// Handles POST for a resource.
pub trait PostHandler: Send + Sync {
    fn post(&self, request: &Request) -> anyhow::Result<Response>;
}

/// Handles PUT for a resource.
pub trait PutHandler: Send + Sync {
    fn put(&self, request: &Request) -> anyhow::Result<Response>;
}

/// Handles PATCH for a resource.
pub trait PatchHandler: Send + Sync {
    fn patch(&self, request: &Request) -> anyhow::Result<Response>;
}

/// Handles DELETE for a resource.
pub trait DeleteHandler: Send + Sync {
    fn delete(&self, request: &Request) -> anyhow::Result<Response>;
}

/// The entity addressed by a request path once a route has matched it.
///
/// A resource advertises each verb it supports by returning a handler from
/// the matching accessor; the defaults advertise nothing. The dispatcher
/// probes these accessors to build the OPTIONS `Allow` set and to reject
/// unsupported verbs with 405, so the same negotiation works for every
/// resource type.
///
/// Resources are constructed fresh per request and hold no cross-request
/// state; whatever state they touch lives in the filesystem.
///
/// Handlers express every business outcome as a returned [`Response`];
/// `Err` is reserved for unexpected internal failure, which the connection
/// turns into a bare 500.
pub trait Resource: Send + Sync {
    fn get_handler(&self) -> Option<&dyn GetHandler> {
        None
    }

    fn head_handler(&self) -> Option<&dyn HeadHandler> {
        None
    }

    fn post_handler(&self) -> Option<&dyn PostHandler> {
        None
    }

    fn put_handler(&self) -> Option<&dyn PutHandler> {
        None
    }

    fn patch_handler(&self) -> Option<&dyn PatchHandler> {
        None
    }

    fn delete_handler(&self) -> Option<&dyn DeleteHandler> {
        None
    }
}
