//! Page templates using the Tera template engine
//!
//! Both page templates are embedded in the binary. Autoescaping is
//! disabled: post content is already rendered HTML and authors are
//! trusted, so escaping here would break intentional embedded markup.

use anyhow::Result;
use tera::{Context, Tera};

use crate::content::PostSummary;
use crate::error::PostError;
use crate::registry::RenderedPost;

/// Renderer for the index and single-post pages.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            ("index.html", include_str!("views/index.html")),
            ("post.html", include_str!("views/post.html")),
        ])?;
        Ok(Self { tera })
    }

    /// Render the index page from the startup listing.
    pub fn render_index(&self, posts: &[PostSummary]) -> Result<String, PostError> {
        let mut context = Context::new();
        context.insert("posts", posts);
        Ok(self.tera.render("index.html", &context)?)
    }

    /// Render a single post page.
    pub fn render_post(&self, post: &RenderedPost) -> Result<String, PostError> {
        let mut context = Context::new();
        context.insert("post", post);
        Ok(self.tera.render("post.html", &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Author;

    #[test]
    fn test_render_index_with_posts() {
        let renderer = TemplateRenderer::new().unwrap();
        let posts = vec![PostSummary {
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            author: Author {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
            },
        }];

        let html = renderer.render_index(&posts).unwrap();
        assert!(html.contains(r#"<a href="/posts/hello">Hello</a>"#));
        assert!(html.contains("by A"));
    }

    #[test]
    fn test_render_empty_index() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render_index(&[]).unwrap();
        assert!(html.contains("No posts yet."));
    }

    #[test]
    fn test_render_post_keeps_content_unescaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let post = RenderedPost {
            title: "T".to_string(),
            slug: "t".to_string(),
            author: Author::default(),
            content: "<h1>Hi</h1>\n<p>world</p>\n".to_string(),
        };

        let html = renderer.render_post(&post).unwrap();
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(!html.contains("&lt;h1&gt;"));
    }
}
