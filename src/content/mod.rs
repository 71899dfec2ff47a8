//! Content handling: reading, parsing and rendering posts

mod frontmatter;
mod loader;
mod markdown;
mod post;
mod store;

pub use frontmatter::{body_after_front_matter, FrontMatter};
pub use loader::{load_posts, LoadedPosts};
pub use markdown::MarkdownRenderer;
pub use post::{Author, Post, PostSummary};
pub use store::{FileReader, SlugReader};
