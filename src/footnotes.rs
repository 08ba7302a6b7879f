//! Footnote definition extraction.
//!
//! Finds footnote *definitions* of the form `[^id]: content` in Markdown text.
//! A definition's content runs until the next line starting with `[`, the next
//! blank line, or the end of the document, so "lazy" multi-line bodies are
//! supported. Inline footnote *references* (`[^id]` without a colon) are never
//! matched.

use regex::Regex;

/// A footnote definition found in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Footnote {
    /// The marker as written, including the leading caret (e.g. "^1", "^note-a")
    pub marker: String,
    /// The raw definition body, possibly spanning multiple lines
    pub content: String,
    /// Byte span from the opening `[` of the marker to the end of the content
    pub span: (usize, usize),
}

/// Extracts all footnote definitions from the given Markdown text.
///
/// Definitions are returned in document order, duplicates preserved.
/// Definitions with an entirely empty body are skipped; the line sweep in
/// [`crate::rewrite::sweep_definition_lines`] still removes them from the text.
///
/// # Examples
///
/// ```
/// use citeprep::extract_footnotes;
///
/// let footnotes = extract_footnotes("Text[^1].\n\n[^1]: https://example.com");
/// assert_eq!(footnotes.len(), 1);
/// assert_eq!(footnotes[0].marker, "^1");
/// assert_eq!(footnotes[0].content, "https://example.com");
/// ```
pub fn extract_footnotes(markdown: &str) -> Vec<Footnote> {
    // Matches the start of a definition; the body is scanned manually because
    // its end depends on what follows (next definition, blank line, or EOF).
    let def_start = Regex::new(r"\[(\^[\w-]+)\]:").unwrap();

    let mut footnotes = Vec::new();
    let mut pos = 0;

    while let Some(cap) = def_start.captures_at(markdown, pos) {
        let whole = cap.get(0).unwrap();
        let marker = cap.get(1).unwrap().as_str().to_string();

        // Skip whitespace between the colon and the body.
        let mut content_start = whole.end();
        for c in markdown[whole.end()..].chars() {
            if !c.is_whitespace() {
                break;
            }
            content_start += c.len_utf8();
        }

        let content_end = content_boundary(markdown, content_start);
        if content_end <= content_start {
            // Nothing but whitespace after the colon.
            pos = whole.end();
            continue;
        }

        footnotes.push(Footnote {
            marker,
            content: markdown[content_start..content_end].to_string(),
            span: (whole.start(), content_end),
        });

        // Continue scanning after this definition's content so that text inside
        // the body is never picked up as a second definition.
        pos = content_end;
    }

    footnotes
}

/// Returns the byte offset where a definition body starting at `from` ends:
/// at the next newline followed by `[`, the next blank line, or EOF,
/// whichever comes first. The terminating newline is not part of the body.
fn content_boundary(markdown: &str, from: usize) -> usize {
    let rest = &markdown[from..];
    let next_def = rest.find("\n[");
    let next_blank = rest.find("\n\n");

    match (next_def, next_blank) {
        (Some(a), Some(b)) => from + a.min(b),
        (Some(a), None) => from + a,
        (None, Some(b)) => from + b,
        (None, None) => markdown.len(),
    }
}
