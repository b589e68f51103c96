//! Static site collaborators
//!
//! The listing, reading, and existence-probe helpers the dispatcher leans on.
//! [`SiteDir`] wraps the fixed directory the server publishes pages from;
//! [`path_exists`] probes an arbitrary path relative to the working
//! directory, which is what the `file/` route historically did.

use crate::Result;
use std::path::{Path, PathBuf};

/// Placeholder substituted with the rendered file list in `root.html`
pub const LINKS_PLACEHOLDER: &str = "${links}";

/// The fixed directory the server publishes pages from
#[derive(Debug, Clone)]
pub struct SiteDir {
    root: PathBuf,
}

impl SiteDir {
    /// Wrap a site directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The wrapped directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ordered list of file names in the directory
    pub fn file_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    /// Raw bytes of a named file, or an error if absent
    pub fn read(&self, name: &str) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.root.join(name))?)
    }

    /// Render the directory's files as an HTML unordered list
    pub fn render_links(&self) -> Result<String> {
        let names = self.file_names()?;
        if names.is_empty() {
            return Ok("No files in directory".to_string());
        }

        let mut html = String::from("<ul>\n");
        for name in &names {
            html.push_str("<li>");
            html.push_str(name);
            html.push_str("</li>");
        }
        html.push_str("</ul>\n");
        Ok(html)
    }
}

/// Existence probe for the `file/` route.
///
/// The path is taken as-is, relative to the working directory rather than
/// the site root.
pub fn path_exists(path: &str) -> bool {
    Path::new(path).exists()
}
