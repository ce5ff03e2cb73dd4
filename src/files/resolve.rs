use std::path::{Component, Path, PathBuf};

use crate::files::file::FileResource;
use crate::files::locks::PathLocks;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routing::resource::{GetHandler, HeadHandler, PutHandler, Resource};
use crate::routing::router::Route;

/// Serves a directory tree: every request path resolves to a not-found,
/// directory-listing, or file resource under the content root.
pub struct FsRoute {
    root: PathBuf,
    locks: PathLocks,
}

impl FsRoute {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locks: PathLocks::new(),
        }
    }
}

impl Route for FsRoute {
    fn resolve(&self, request: &Request) -> Option<Box<dyn Resource>> {
        Some(resolve_resource(
            &self.root,
            &request.path,
            self.locks.clone(),
        ))
    }
}

/// Pure factory from request path to resource: stat once, hand back the
/// variant matching what is on disk.
pub fn resolve_resource(root: &Path, request_path: &str, locks: PathLocks) -> Box<dyn Resource> {
    let relative = request_path.trim_start_matches('/');
    let fs_path = root.join(relative);

    // A path that climbs out of the root resolves to nothing.
    if fs_path
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Box::new(NotFoundResource::new(request_path, fs_path, locks));
    }

    match std::fs::metadata(&fs_path) {
        Ok(meta) if meta.is_dir() => Box::new(ListingResource {
            fs_path,
            request_path: request_path.to_string(),
        }),
        Ok(_) => Box::new(FileResource::new(fs_path, request_path, locks)),
        Err(_) => Box::new(NotFoundResource::new(request_path, fs_path, locks)),
    }
}

/// Resource for paths with nothing on disk behind them.
///
/// GET/HEAD report the miss; PUT creates the file.
pub struct NotFoundResource {
    request_path: String,
    fs_path: PathBuf,
    locks: PathLocks,
}

impl NotFoundResource {
    fn new(request_path: &str, fs_path: PathBuf, locks: PathLocks) -> Self {
        Self {
            request_path: request_path.to_string(),
            fs_path,
            locks,
        }
    }

    fn not_found_response(&self) -> Response {
        ResponseBuilder::new(StatusCode::NotFound)
            .header("Content-Type", "text/plain")
            .body(format!("Not found: {}", self.request_path))
            .build()
    }
}

impl Resource for NotFoundResource {
    fn get_handler(&self) -> Option<&dyn GetHandler> {
        Some(self)
    }

    fn head_handler(&self) -> Option<&dyn HeadHandler> {
        Some(self)
    }

    fn put_handler(&self) -> Option<&dyn PutHandler> {
        Some(self)
    }
}

impl GetHandler for NotFoundResource {
    fn get(&self, _request: &Request) -> anyhow::Result<Response> {
        Ok(self.not_found_response())
    }
}

impl HeadHandler for NotFoundResource {
    fn head(&self, _request: &Request) -> anyhow::Result<Response> {
        Ok(self.not_found_response().without_body())
    }
}

impl PutHandler for NotFoundResource {
    fn put(&self, request: &Request) -> anyhow::Result<Response> {
        let lock = self.locks.for_path(&self.fs_path);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        std::fs::write(&self.fs_path, &request.body)?;

        Ok(ResponseBuilder::new(StatusCode::Created).build())
    }
}

/// Resource for directories: renders an HTML page linking the immediate
/// children under the request's own path.
pub struct ListingResource {
    fs_path: PathBuf,
    request_path: String,
}

impl ListingResource {
    fn render(&self) -> anyhow::Result<Response> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.fs_path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        let prefix = self.request_path.trim_end_matches('/');
        let mut items = String::new();
        for name in &names {
            items.push_str(&format!(
                "<li><a href=\"{prefix}/{name}\">{name}</a></li>",
            ));
        }

        let body = format!(
            "<html><head><title>Index of {path}</title></head>\
             <body><h1>Index of {path}</h1><ul>{items}</ul></body></html>",
            path = self.request_path,
        );

        Ok(ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/html")
            .body(body)
            .build())
    }
}

impl Resource for ListingResource {
    fn get_handler(&self) -> Option<&dyn GetHandler> {
        Some(self)
    }

    fn head_handler(&self) -> Option<&dyn HeadHandler> {
        Some(self)
    }
}

impl GetHandler for ListingResource {
    fn get(&self, _request: &Request) -> anyhow::Result<Response> {
        self.render()
    }
}

impl HeadHandler for ListingResource {
    fn head(&self, _request: &Request) -> anyhow::Result<Response> {
        self.render().map(Response::without_body)
    }
}
