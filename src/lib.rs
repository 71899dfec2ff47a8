//! blogd: a small blog server that lazily renders markdown posts
//!
//! Posts live as `<slug>.md` files with `+++`-delimited TOML
//! front-matter. All metadata is parsed once at startup; a post's
//! markdown body is converted to HTML on its first request and cached
//! in memory for the lifetime of the process.

pub mod content;
pub mod error;
pub mod registry;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use content::FileReader;
use registry::PostRegistry;
use server::AppState;
use templates::TemplateRenderer;

/// Application bootstrap: ties a posts directory to a ready-to-serve
/// state.
pub struct Blog {
    /// Directory holding the `<slug>.md` post documents
    pub posts_dir: PathBuf,
}

impl Blog {
    pub fn new<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
        }
    }

    /// Load all posts and build the shared server state.
    ///
    /// Fail-fast: any unreadable or malformed post aborts startup so a
    /// broken collection never serves a half-initialized catalog.
    pub fn load(&self) -> Result<Arc<AppState>> {
        let reader = Arc::new(FileReader::new(&self.posts_dir));
        let loaded = content::load_posts(&self.posts_dir, reader.as_ref())?;

        Ok(Arc::new(AppState {
            registry: PostRegistry::new(loaded, reader),
            templates: TemplateRenderer::new()?,
        }))
    }
}
