//! YAML front-matter handling.
//!
//! The front matter is treated as an opaque text blob: new lines are appended
//! only when the corresponding key is absent, and presence is checked by raw
//! substring against the block, not by structured key lookup. A key appearing
//! anywhere in the block, even inside a value, suppresses re-addition. This
//! mirrors the contract the downstream Pandoc pipeline was written against and
//! is intentional; see the crate documentation.

use crate::processor::PreprocessOptions;
use crate::refs::ReferenceMap;

/// Numbered citation style consumed by `pandoc --citeproc`.
pub const CSL_URL: &str =
    "https://raw.githubusercontent.com/citation-style-language/styles/master/nature.csl";

/// LaTeX engine the downstream wrapper invokes.
pub const PDF_ENGINE: &str = "lualatex";

/// Fallback ordering shared by the main, sans, and mono font fields.
pub const FALLBACK_FONTS: &[&str] = &["FreeSans:", "FreeSerif:", "NotoColorEmoji:mode=harf"];

const FONT_KEYS: &[&str] = &["mainfontfallback", "sansfontfallback", "monofontfallback"];

/// A document split into its front-matter body and the text after it.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDocument<'a> {
    /// Text between the `---` markers, without them; `None` if the document
    /// has no front matter or the closing marker is missing
    pub front_matter: Option<&'a str>,
    /// Everything after the closing marker, or the whole document
    pub body: &'a str,
}

/// Splits a document into front matter and body.
///
/// Front matter is recognized only when `---\n` sits at byte 0 and a matching
/// `\n---\n` line follows. A missing closing marker degrades to "no front
/// matter"; this never fails.
pub fn split_front_matter(text: &str) -> SplitDocument<'_> {
    if text.starts_with("---\n") {
        if let Some(offset) = text[4..].find("\n---\n") {
            let close = 4 + offset;
            return SplitDocument {
                front_matter: Some(&text[4..close]),
                body: &text[close + 5..],
            };
        }
    }

    SplitDocument {
        front_matter: None,
        body: text,
    }
}

/// Injects bibliography entries and rendering metadata into the front matter
/// and reassembles the document.
///
/// With no unique references the document is reassembled unmodified: existing
/// front matter is preserved verbatim, and none is created when none existed.
/// Otherwise each absent key is appended as described in the module
/// documentation, and a fresh front-matter block is synthesized when the
/// document had none.
pub fn inject_metadata(
    split: &SplitDocument<'_>,
    refs: &ReferenceMap,
    options: &PreprocessOptions,
) -> String {
    if refs.is_empty() {
        return match split.front_matter {
            Some(existing) => format!("---\n{existing}\n---\n{}", split.body),
            None => split.body.to_string(),
        };
    }

    match split.front_matter {
        Some(existing) => {
            let mut block = existing.to_string();
            append_references(&mut block, refs);
            append_metadata_fields(&mut block, options);
            format!("---\n{block}---\n{}", split.body)
        }
        None => {
            let mut block = String::new();
            append_references(&mut block, refs);
            append_metadata_fields(&mut block, options);
            format!("---\n{block}---\n\n{}", split.body)
        }
    }
}

/// Appends the `references:` section header when absent, then one entry per
/// unique reference in canonical-id order.
fn append_references(block: &mut String, refs: &ReferenceMap) {
    if block.is_empty() {
        block.push_str("references:\n");
    } else if !block.contains("references:") {
        block.push_str("\nreferences:\n");
    }

    for (id, url) in refs.unique_refs() {
        block.push_str(&format!("  - id: {id}\n    type: webpage\n    URL: {url}\n"));
    }
}

/// Appends each absent styling field expected by the downstream renderer.
fn append_metadata_fields(block: &mut String, options: &PreprocessOptions) {
    if !block.contains("csl:") {
        block.push_str(&format!("\ncsl: {CSL_URL}\n"));
    }
    if !block.contains("lang:") {
        block.push_str(&format!("\nlang: {}\n", options.language));
    }
    if !block.contains("link-citations:") {
        block.push_str("\nlink-citations: true\n");
    }
    if !block.contains("pdf-engine:") {
        block.push_str(&format!("\npdf-engine: {PDF_ENGINE}\n"));
    }

    if options.fallback_fonts {
        for key in FONT_KEYS {
            let field = format!("{key}:");
            if !block.contains(&field) {
                block.push_str(&format!("\n{field}\n"));
                for font in FALLBACK_FONTS {
                    block.push_str(&format!("  - \"{font}\"\n"));
                }
            }
        }
    }
}
