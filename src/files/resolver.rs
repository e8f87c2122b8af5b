//! Maps request targets onto files below the served root.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::StaticFilesConfig;
use crate::http::mime;

/// Body served, with status 200, for targets that are not regular files.
pub const NOT_FOUND_PAGE: &str = "<html>
  <head><title>Not Found</title></head>
  <body>
    <h1>404 FILE NOT FOUND</h1>
  </body>
</html>";

/// Static file lookup rooted at a directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    confine_to_root: bool,
}

/// Content type and bytes of a resolved target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// `None` when the extension is not in the content type table
    pub content_type: Option<&'static str>,
    pub content: Vec<u8>,
}

impl Resolved {
    fn not_found() -> Self {
        Self {
            content_type: Some("text/html"),
            content: NOT_FOUND_PAGE.as_bytes().to_vec(),
        }
    }
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            confine_to_root: false,
        }
    }

    pub fn from_config(cfg: &StaticFilesConfig) -> Self {
        Self::new(cfg.root.clone()).confine_to_root(cfg.confine_to_root)
    }

    pub fn confine_to_root(mut self, enabled: bool) -> Self {
        self.confine_to_root = enabled;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a request target to a filesystem path.
    ///
    /// `/` becomes `<root>/index.html`; anything else is appended to the
    /// root as is, without normalization. With the root `.` this yields
    /// `./index.html` and `.<target>`.
    pub fn resolve_path(&self, url: &str) -> PathBuf {
        let target = if url == "/" { "/index.html" } else { url };
        PathBuf::from(format!("{}{}", self.root.display(), target))
    }

    /// Resolves a request target to its content and content type.
    pub async fn resolve(&self, url: &str) -> Result<Resolved> {
        if self.confine_to_root && escapes_root(url) {
            tracing::warn!(url, "Rejected target outside of the served root");
            return Ok(Resolved::not_found());
        }

        self.content_and_type(&self.resolve_path(url)).await
    }

    /// Reads a resolved path.
    ///
    /// A path that is missing or not a regular file yields the not-found
    /// page as `text/html`. Any other I/O failure is returned.
    pub async fn content_and_type(&self, path: &Path) -> Result<Resolved> {
        let is_file = match tokio::fs::metadata(path).await {
            Ok(meta) => meta.is_file(),
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) if e.kind() == ErrorKind::NotADirectory => false,
            Err(e) => {
                return Err(e).with_context(|| format!("failed to stat {}", path.display()));
            }
        };

        if !is_file {
            return Ok(Resolved::not_found());
        }

        let content_type = mime::content_type_for_path(&path.to_string_lossy());
        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;

        Ok(Resolved {
            content_type,
            content,
        })
    }
}

fn escapes_root(url: &str) -> bool {
    url.split(['/', '\\']).any(|segment| segment == "..")
}
