//! Post registry with lazy render-and-cache
//!
//! The registry owns the only mutable state in the process: the slug
//! to post map. Entries are created once at startup and never added or
//! removed afterwards; the only mutation is filling in a post's
//! rendered content on its first request.

use indexmap::IndexMap;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::content::{
    body_after_front_matter, LoadedPosts, MarkdownRenderer, Post, PostSummary, SlugReader,
};
use crate::error::PostError;

/// A post as handed to the post template: metadata plus final HTML.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RenderedPost {
    pub title: String,
    pub slug: String,
    pub author: crate::content::Author,
    pub content: String,
}

/// In-memory post store guarding all lazy-render state behind one lock.
pub struct PostRegistry {
    posts: Mutex<IndexMap<String, Post>>,
    listing: Vec<PostSummary>,
    reader: Arc<dyn SlugReader>,
    renderer: MarkdownRenderer,
}

impl PostRegistry {
    pub fn new(loaded: LoadedPosts, reader: Arc<dyn SlugReader>) -> Self {
        Self {
            posts: Mutex::new(loaded.posts),
            listing: loaded.listing,
            reader,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// The ordered index listing, snapshotted at startup.
    pub fn listing(&self) -> &[PostSummary] {
        &self.listing
    }

    /// Look up a post and return its rendered HTML, rendering and
    /// caching it on first access.
    ///
    /// The lock is held across the whole read-render-store sequence,
    /// so each slug is rendered at most once; concurrent first
    /// requests for the same slug serialize behind the lock and all
    /// see the cached result. On failure the post stays unloaded and
    /// the next request retries.
    pub fn get_rendered(&self, slug: &str) -> Result<RenderedPost, PostError> {
        let mut posts = self.posts.lock();
        let post = posts.get_mut(slug).ok_or(PostError::NotFound)?;

        if !post.loaded {
            let document = self.reader.read(&post.slug)?;
            let body = body_after_front_matter(&document)?;
            let html = self.renderer.render(body)?;
            post.content = html;
            post.loaded = true;
            tracing::debug!("rendered and cached post {}", slug);
        }

        Ok(RenderedPost {
            title: post.title.clone(),
            slug: post.slug.clone(),
            author: post.author.clone(),
            content: post.content.clone(),
        })
    }
}
