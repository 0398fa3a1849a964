//! Documentation pages on disk.
//!
//! Routes map back to `.mdx`/`.md` files under the docs root. A loaded
//! [`Document`] carries the frontmatter title (used as the page title), the
//! body without frontmatter, and the markdown headings that feed the right-hand
//! contextual sidebar.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{Result, ResultExt};
use crate::route::Route;

/// Bytes read from a document file; anything past this is dropped (1MB)
const MAX_DOCUMENT_SIZE: u64 = 1024 * 1024;

static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+?)\s*#*\s*$").expect("Invalid heading regex"));

static FRONTMATTER_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^title:\s*["']?(.*?)["']?\s*$"#).expect("Invalid frontmatter regex")
});

/// A markdown heading within a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 for `#`, 6 for `######`
    pub level: u8,
    pub text: String,
    /// 0-based line within the body
    pub line: usize,
}

/// A loaded documentation page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub route: Route,
    pub path: PathBuf,
    pub title: Option<String>,
    pub body: String,
    pub headings: Vec<Heading>,
}

impl Document {
    /// Parse raw file content into a document
    pub fn parse(route: Route, path: PathBuf, content: &str) -> Self {
        let (frontmatter, body) = split_frontmatter(content);
        let title = frontmatter.and_then(|fm| {
            FRONTMATTER_TITLE
                .captures(fm)
                .map(|c| c[1].trim().to_string())
                .filter(|t| !t.is_empty())
        });
        let headings = extract_headings(body);
        Self {
            route,
            path,
            title,
            body: body.to_string(),
            headings,
        }
    }

    /// Title to display: frontmatter title, else the first heading
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .or_else(|| self.headings.first().map(|h| h.text.as_str()))
    }
}

/// Split `---` delimited frontmatter from the body
fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    match rest.find("\n---") {
        Some(end) => {
            let frontmatter = &rest[..end];
            let after = &rest[end + 4..];
            let body = after
                .strip_prefix("\r\n")
                .or_else(|| after.strip_prefix('\n'))
                .unwrap_or(after);
            (Some(frontmatter), body)
        }
        None => (None, content),
    }
}

/// Extract markdown headings, ignoring fenced code blocks
pub fn extract_headings(body: &str) -> Vec<Heading> {
    let mut in_fence = false;
    let mut headings = Vec::new();

    for (line_no, line) in body.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(caps) = HEADING_PATTERN.captures(line) {
            headings.push(Heading {
                level: caps[1].len() as u8,
                text: caps[2].to_string(),
                line: line_no,
            });
        }
    }

    headings
}

/// Files that may hold the document for `route`, in lookup order
pub fn candidate_paths(docs_root: &Path, route: &Route) -> Vec<PathBuf> {
    let relative = route.relative().trim_end_matches('/');
    if relative.is_empty() {
        return vec![docs_root.join("index.mdx"), docs_root.join("index.md")];
    }
    let base = docs_root.join(relative);
    vec![
        docs_root.join(format!("{relative}.mdx")),
        docs_root.join(format!("{relative}.md")),
        base.join("index.mdx"),
        base.join("index.md"),
    ]
}

/// First existing file for `route`
pub fn resolve(docs_root: &Path, route: &Route) -> Option<PathBuf> {
    candidate_paths(docs_root, route).into_iter().find(|p| {
        trace!("Checking document candidate {}", p.display());
        p.is_file()
    })
}

/// Load the document for `route`; `Ok(None)` when no file exists
pub fn load(docs_root: &Path, route: &Route) -> Result<Option<Document>> {
    let Some(path) = resolve(docs_root, route) else {
        debug!("No document for route {}", route);
        return Ok(None);
    };

    let file = File::open(&path).with_context(|| format!("Opening {}", path.display()))?;
    let mut bytes = Vec::new();
    file.take(MAX_DOCUMENT_SIZE)
        .read_to_end(&mut bytes)
        .with_context(|| format!("Reading {}", path.display()))?;
    if bytes.len() as u64 == MAX_DOCUMENT_SIZE {
        debug!("Document {} read up to the size cap", path.display());
    }

    // Invalid UTF-8 renders as replacement characters
    let content = String::from_utf8_lossy(&bytes);

    Ok(Some(Document::parse(route.clone(), path, &content)))
}
