use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routing::resource::Resource;

/// The HTTP verbs this server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Every verb the server recognizes. Built once at startup and handed
    /// to the dispatcher; nothing mutates it afterwards.
    pub const KNOWN: &'static [Method] = &[
        Method::Get,
        Method::Head,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether `resource` implements the capability for this verb.
    fn supported_by(&self, resource: &dyn Resource) -> bool {
        match self {
            Method::Get => resource.get_handler().is_some(),
            Method::Head => resource.head_handler().is_some(),
            Method::Post => resource.post_handler().is_some(),
            Method::Put => resource.put_handler().is_some(),
            Method::Patch => resource.patch_handler().is_some(),
            Method::Delete => resource.delete_handler().is_some(),
        }
    }
}

/// Maps (verb, resource) to a handler invocation, or negotiates the verb
/// set for OPTIONS.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    verbs: &'static [Method],
}

impl Dispatcher {
    /// A dispatcher over an explicit verb registry, normally
    /// [`Method::KNOWN`].
    pub fn new(verbs: &'static [Method]) -> Self {
        Self { verbs }
    }

    /// The `Allow` value for a resource: every verb the resource supports
    /// plus OPTIONS itself, alphabetically sorted, comma-joined without
    /// spaces.
    pub fn allow(&self, resource: &dyn Resource) -> String {
        let mut verbs: Vec<&str> = self
            .verbs
            .iter()
            .filter(|m| m.supported_by(resource))
            .map(|m| m.as_str())
            .collect();
        verbs.push("OPTIONS");
        verbs.sort_unstable();
        verbs.join(",")
    }

    /// Executes the request against the resource.
    ///
    /// OPTIONS answers with the negotiated `Allow` set. A verb the
    /// resource does not support — or one outside the registry entirely —
    /// answers 405 carrying the same `Allow` value. A supported verb
    /// invokes exactly one capability handler.
    pub fn dispatch(&self, resource: &dyn Resource, request: &Request) -> anyhow::Result<Response> {
        if request.method == "OPTIONS" {
            return Ok(ResponseBuilder::new(StatusCode::Ok)
                .header("Allow", self.allow(resource))
                .build());
        }

        if let Some(verb) = self.verbs.iter().find(|m| m.as_str() == request.method) {
            let invoked = match verb {
                Method::Get => resource.get_handler().map(|h| h.get(request)),
                Method::Head => resource.head_handler().map(|h| h.head(request)),
                Method::Post => resource.post_handler().map(|h| h.post(request)),
                Method::Put => resource.put_handler().map(|h| h.put(request)),
                Method::Patch => resource.patch_handler().map(|h| h.patch(request)),
                Method::Delete => resource.delete_handler().map(|h| h.delete(request)),
            };

            if let Some(result) = invoked {
                return result;
            }
        }

        Ok(ResponseBuilder::new(StatusCode::MethodNotAllowed)
            .header("Allow", self.allow(resource))
            .build())
    }
}
