use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;

use crate::files::etag;
use crate::files::locks::PathLocks;
use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routing::resource::{GetHandler, HeadHandler, PatchHandler, PutHandler, Resource};

/// How much of a file a request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSlice {
    /// The entire file.
    WholeFile,
    /// An inclusive byte window. `total` is the file size from the stat
    /// taken when the slice was built; `last >= first` always holds.
    ByteRange { first: u64, last: u64, total: u64 },
}

/// Outcome of range negotiation against the file's current size.
enum SliceOutcome {
    Slice(FileSlice),
    NotSatisfiable { total: u64 },
}

/// An existing regular file under the content root.
///
/// Supports GET/HEAD (whole file or a single byte range), PUT (overwrite)
/// and PATCH (ETag-guarded overwrite).
pub struct FileResource {
    fs_path: PathBuf,
    request_path: String,
    locks: PathLocks,
}

impl FileResource {
    pub(crate) fn new(fs_path: PathBuf, request_path: &str, locks: PathLocks) -> Self {
        Self {
            fs_path,
            request_path: request_path.to_string(),
            locks,
        }
    }

    /// Decides which slice of the file the request addresses.
    ///
    /// Exactly one `Range: bytes=<first>-<last>` header selects a window;
    /// zero, several, or an unparseable value fall back to the whole file.
    /// A window that starts at or past EOF, or is inverted, is not
    /// satisfiable; an end past EOF is clamped to the final byte.
    fn negotiate_slice(&self, request: &Request) -> anyhow::Result<SliceOutcome> {
        let total = std::fs::metadata(&self.fs_path)?.len();

        let ranges = request.header_values("Range");
        if ranges.len() != 1 {
            return Ok(SliceOutcome::Slice(FileSlice::WholeFile));
        }

        match parse_range(ranges[0]) {
            Some((first, last)) => {
                if first > last || first >= total {
                    Ok(SliceOutcome::NotSatisfiable { total })
                } else {
                    Ok(SliceOutcome::Slice(FileSlice::ByteRange {
                        first,
                        last: last.min(total - 1),
                        total,
                    }))
                }
            }
            None => Ok(SliceOutcome::Slice(FileSlice::WholeFile)),
        }
    }

    fn read_window(&self, first: u64, last: u64) -> anyhow::Result<Vec<u8>> {
        let mut file = std::fs::File::open(&self.fs_path)?;
        file.seek(SeekFrom::Start(first))?;

        let mut window = vec![0u8; (last - first + 1) as usize];
        file.read_exact(&mut window)?;

        Ok(window)
    }
}

/// Parses a strict `bytes=<first>-<last>` range value; anything else is
/// no range at all.
fn parse_range(value: &str) -> Option<(u64, u64)> {
    let range_spec = value.trim().strip_prefix("bytes=")?;
    let (first, last) = range_spec.split_once('-')?;

    Some((first.parse().ok()?, last.parse().ok()?))
}

fn range_not_satisfiable(total: u64) -> Response {
    ResponseBuilder::new(StatusCode::RangeNotSatisfiable)
        .header("Content-Range", format!("bytes */{}", total))
        .build()
}

impl Resource for FileResource {
    fn get_handler(&self) -> Option<&dyn GetHandler> {
        Some(self)
    }

    fn head_handler(&self) -> Option<&dyn HeadHandler> {
        Some(self)
    }

    fn put_handler(&self) -> Option<&dyn PutHandler> {
        Some(self)
    }

    fn patch_handler(&self) -> Option<&dyn PatchHandler> {
        Some(self)
    }
}

impl GetHandler for FileResource {
    fn get(&self, request: &Request) -> anyhow::Result<Response> {
        match self.negotiate_slice(request)? {
            SliceOutcome::NotSatisfiable { total } => Ok(range_not_satisfiable(total)),
            SliceOutcome::Slice(FileSlice::WholeFile) => {
                let content = std::fs::read(&self.fs_path)?;
                Ok(ResponseBuilder::new(StatusCode::Ok)
                    .header("Content-Type", mime::from_path(&self.fs_path))
                    .body(content)
                    .build())
            }
            SliceOutcome::Slice(FileSlice::ByteRange { first, last, total }) => {
                let window = self.read_window(first, last)?;
                Ok(ResponseBuilder::new(StatusCode::PartialContent)
                    .header("Content-Type", mime::from_path(&self.fs_path))
                    .header("Content-Range", format!("bytes {}-{}/{}", first, last, total))
                    .body(window)
                    .build())
            }
        }
    }
}

impl HeadHandler for FileResource {
    fn head(&self, request: &Request) -> anyhow::Result<Response> {
        self.get(request).map(Response::without_body)
    }
}

impl PutHandler for FileResource {
    fn put(&self, request: &Request) -> anyhow::Result<Response> {
        let lock = self.locks.for_path(&self.fs_path);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        std::fs::write(&self.fs_path, &request.body)?;

        Ok(ResponseBuilder::new(StatusCode::Ok).build())
    }
}

impl PatchHandler for FileResource {
    fn patch(&self, request: &Request) -> anyhow::Result<Response> {
        let if_match = request.header_values("If-Match");
        if if_match.len() != 1 {
            // Absent and ambiguous preconditions collapse to the same
            // answer.
            return Ok(ResponseBuilder::new(StatusCode::Conflict).build());
        }

        let lock = self.locks.for_path(&self.fs_path);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        let current = std::fs::read(&self.fs_path)?;
        let current_tag = etag::quoted(&etag::content_digest(&current));
        if if_match[0].trim() != current_tag {
            return Ok(ResponseBuilder::new(StatusCode::PreconditionFailed).build());
        }

        std::fs::write(&self.fs_path, &request.body)?;

        let fresh_tag = etag::quoted(&etag::content_digest(&request.body));
        Ok(ResponseBuilder::new(StatusCode::NoContent)
            .header("Content-Location", self.request_path.clone())
            .header("ETag", fresh_tag)
            .build())
    }
}
