//! Front-matter parsing for `+++`-delimited TOML metadata blocks

use serde::Deserialize;

use super::Author;
use crate::error::PostError;

/// Structured metadata from the top of a post document.
///
/// Missing keys fall back to empty values rather than failing, so a
/// minimal post only needs the delimiters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: String,
    /// Optional override for the filename-derived slug.
    pub slug: Option<String>,
    pub author: Author,
}

impl FrontMatter {
    /// Parse front-matter from a document.
    ///
    /// The document must begin with a line containing exactly `+++`;
    /// the metadata is the TOML between that line and the next `+++`
    /// line. Returns the metadata and the text after the closing
    /// delimiter. A missing or undecodable block is an error, never a
    /// silent fallback.
    pub fn parse(document: &str) -> Result<(Self, &str), PostError> {
        let rest = document
            .strip_prefix("+++\n")
            .or_else(|| document.strip_prefix("+++\r\n"))
            .ok_or_else(|| {
                PostError::FrontMatter("document does not start with a +++ block".to_string())
            })?;

        let (block, remaining) = split_at_closing_delimiter(rest).ok_or_else(|| {
            PostError::FrontMatter("unterminated +++ block".to_string())
        })?;

        let fm: FrontMatter = toml::from_str(block)
            .map_err(|e| PostError::FrontMatter(e.to_string()))?;

        Ok((fm, remaining))
    }
}

/// Split `rest` (the text after the opening delimiter) at the first
/// closing `+++` line.
fn split_at_closing_delimiter(rest: &str) -> Option<(&str, &str)> {
    if let Some(remaining) = rest.strip_prefix("+++\n") {
        return Some(("", remaining));
    }
    let pos = rest.find("\n+++\n")?;
    Some((&rest[..pos + 1], &rest[pos + "\n+++\n".len()..]))
}

/// Extract the markdown body to render: everything after the *last*
/// occurrence of the closing delimiter followed by a newline.
///
/// The split is deliberately last-occurrence, not first: a body whose
/// text contains the literal delimiter on its own line still splits at
/// the final boundary. A document with no delimiter at all is
/// malformed.
pub fn body_after_front_matter(document: &str) -> Result<&str, PostError> {
    let needle = "+++\n";
    let pos = document.rfind(needle).ok_or_else(|| {
        PostError::FrontMatter("document has no +++ delimiter".to_string())
    })?;
    Ok(&document[pos + needle.len()..])
}
