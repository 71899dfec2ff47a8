//! Post models

use serde::{Deserialize, Serialize};

/// Post author, owned by exactly one post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// A blog post held in the registry.
///
/// `content` stays empty until the first request for the post triggers
/// a render; once `loaded` is true the HTML is final and never changes.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Slug used to re-read the source document. Usually the filename
    /// stem, unless the front-matter overrides it.
    pub slug: String,

    /// Post author
    pub author: Author,

    /// Rendered HTML content, empty until loaded
    pub content: String,

    /// Whether `content` holds the final rendered HTML
    pub loaded: bool,
}

impl Post {
    /// Create an unloaded post.
    pub fn new(title: String, slug: String, author: Author) -> Self {
        Self {
            title,
            slug,
            author,
            content: String::new(),
            loaded: false,
        }
    }
}

/// By-value snapshot for the index listing.
///
/// Built once at startup; the index never shows rendered content, so
/// later lazy renders do not need to be reflected here. The slug is
/// the registry key (filename stem), so every listed link resolves.
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub title: String,
    pub slug: String,
    pub author: Author,
}
