use std::path::PathBuf;

use anyhow::Context;

/// Startup configuration: where to listen and which directory to serve.
#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub content_root: PathBuf,
}

impl Config {
    /// Builds a configuration from the port and content-root flags.
    ///
    /// The content root must exist and be a directory; anything else is a
    /// startup configuration error.
    pub fn new(port: u16, content_root: PathBuf) -> anyhow::Result<Self> {
        let meta = std::fs::metadata(&content_root)
            .with_context(|| format!("content root {} does not exist", content_root.display()))?;

        if !meta.is_dir() {
            anyhow::bail!("content root {} is not a directory", content_root.display());
        }

        Ok(Self {
            listen_addr: format!("127.0.0.1:{}", port),
            content_root,
        })
    }
}
