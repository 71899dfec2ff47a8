//! Startup loading of posts from the posts directory

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Post, PostSummary, SlugReader};

/// Everything the startup scan produces: the registry map keyed by
/// filename-derived slug, plus the ordered index listing.
pub struct LoadedPosts {
    pub posts: IndexMap<String, Post>,
    pub listing: Vec<PostSummary>,
}

/// Scan the posts directory and parse every document's front-matter.
///
/// Content is left unrendered; only metadata is extracted here. Any
/// unreadable file or malformed metadata block aborts the load, so a
/// broken collection never serves a partial catalog. Entries are in
/// file-name order, which is the order the index lists them in.
pub fn load_posts(posts_dir: &Path, reader: &dyn SlugReader) -> Result<LoadedPosts> {
    let mut posts = IndexMap::new();
    let mut listing = Vec::new();

    for entry in WalkDir::new(posts_dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
    {
        let entry =
            entry.with_context(|| format!("failed to read posts directory {:?}", posts_dir))?;
        let path = entry.path();
        if !path.is_file() || !is_markdown_file(path) {
            continue;
        }

        let Some(file_slug) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let document = reader
            .read(file_slug)
            .with_context(|| format!("failed to read post {:?}", path))?;
        let (fm, _body) = FrontMatter::parse(&document)
            .with_context(|| format!("invalid front matter in {:?}", path))?;

        // The registry key is always the filename stem; a slug key in
        // the front-matter only changes which file the lazy re-read
        // targets.
        let slug = fm.slug.unwrap_or_else(|| file_slug.to_string());
        let post = Post::new(fm.title, slug, fm.author);

        listing.push(PostSummary {
            title: post.title.clone(),
            slug: file_slug.to_string(),
            author: post.author.clone(),
        });
        posts.insert(file_slug.to_string(), post);

        tracing::debug!("loaded post {}", file_slug);
    }

    tracing::info!("loaded {} posts from {:?}", posts.len(), posts_dir);
    Ok(LoadedPosts { posts, listing })
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FileReader;
    use std::fs;

    fn write_post(dir: &Path, name: &str, title: &str) {
        let doc = format!(
            "+++\ntitle = \"{}\"\n\n[author]\nname = \"A\"\nemail = \"a@x.com\"\n+++\nbody\n",
            title
        );
        fs::write(dir.join(name), doc).unwrap();
    }

    #[test]
    fn test_load_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let reader = FileReader::new(dir.path());

        let loaded = load_posts(dir.path(), &reader).unwrap();
        assert!(loaded.posts.is_empty());
        assert!(loaded.listing.is_empty());
    }

    #[test]
    fn test_load_lists_posts_in_file_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "zebra.md", "Z");
        write_post(dir.path(), "alpha.md", "First");
        write_post(dir.path(), "mid.md", "M");
        let reader = FileReader::new(dir.path());

        let loaded = load_posts(dir.path(), &reader).unwrap();
        let slugs: Vec<_> = loaded.listing.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["alpha", "mid", "zebra"]);
        assert_eq!(loaded.posts.len(), 3);
    }

    #[test]
    fn test_listing_has_one_entry_per_registry_slug() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "one.md", "One");
        write_post(dir.path(), "two.md", "Two");
        let reader = FileReader::new(dir.path());

        let loaded = load_posts(dir.path(), &reader).unwrap();
        assert_eq!(loaded.listing.len(), loaded.posts.len());
        for summary in &loaded.listing {
            assert!(loaded.posts.contains_key(&summary.slug));
        }
    }

    #[test]
    fn test_non_markdown_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "real.md", "Real");
        fs::write(dir.path().join("notes.txt"), "not a post").unwrap();
        let reader = FileReader::new(dir.path());

        let loaded = load_posts(dir.path(), &reader).unwrap();
        assert_eq!(loaded.posts.len(), 1);
    }

    #[test]
    fn test_missing_front_matter_aborts_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.md"), "# no front matter\n").unwrap();
        let reader = FileReader::new(dir.path());

        assert!(load_posts(dir.path(), &reader).is_err());
    }

    #[test]
    fn test_slug_override_kept_on_post_but_not_registry_key() {
        let dir = tempfile::tempdir().unwrap();
        let doc = "+++\ntitle = \"T\"\nslug = \"other\"\n+++\nbody\n";
        fs::write(dir.path().join("file.md"), doc).unwrap();
        let reader = FileReader::new(dir.path());

        let loaded = load_posts(dir.path(), &reader).unwrap();
        let post = loaded.posts.get("file").unwrap();
        assert_eq!(post.slug, "other");
        assert_eq!(loaded.listing[0].slug, "file");
    }

    #[test]
    fn test_posts_start_unloaded() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "p.md", "P");
        let reader = FileReader::new(dir.path());

        let loaded = load_posts(dir.path(), &reader).unwrap();
        let post = loaded.posts.get("p").unwrap();
        assert!(!post.loaded);
        assert!(post.content.is_empty());
    }
}
