//! Request-time error taxonomy

use thiserror::Error;

/// Errors surfaced while serving a single post request.
///
/// Startup failures are handled separately (they abort the process via
/// `anyhow` before the server accepts connections); everything here is
/// scoped to one request and leaves the rest of the registry untouched.
#[derive(Debug, Error)]
pub enum PostError {
    /// No registry entry for the requested slug. Maps to 404.
    #[error("post not found")]
    NotFound,

    /// The post source could not be re-read for lazy rendering.
    #[error("failed to read post source: {0}")]
    Read(#[from] std::io::Error),

    /// The post file no longer carries a valid front-matter block.
    #[error("invalid front matter: {0}")]
    FrontMatter(String),

    /// Markdown conversion failed.
    #[error("markdown rendering failed: {0}")]
    Render(String),

    /// Page template rendering failed.
    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),
}
