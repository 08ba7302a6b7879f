//! Citation rewriting.
//!
//! Removes footnote definitions from the text, substitutes inline footnote
//! references with Pandoc citation tokens, and consolidates adjacent tokens
//! into grouped citations.

use regex::{Captures, Regex};

use crate::footnotes::Footnote;
use crate::refs::ReferenceMap;

/// Deletes every extracted footnote definition from the text.
///
/// Removal is unconditional: definitions whose marker never appears inline in
/// the body text are deleted all the same. Spans are removed from the end of
/// the text towards the beginning so that earlier spans stay valid.
pub fn remove_definitions(markdown: &str, footnotes: &[Footnote]) -> String {
    if footnotes.is_empty() {
        return markdown.to_string();
    }

    let mut spans: Vec<(usize, usize)> = footnotes.iter().map(|f| f.span).collect();
    spans.sort_by(|a, b| b.0.cmp(&a.0));

    let mut result = markdown.to_string();
    for (start, end) in spans {
        result.replace_range(start..end, "");
    }

    result
}

/// Removes any remaining line that still begins with a footnote-definition
/// marker.
///
/// Cleanup behind [`remove_definitions`] for definitions the extractor could
/// not harvest, such as an empty definition at the very end of the document.
pub fn sweep_definition_lines(markdown: &str) -> String {
    let re = Regex::new(r"(?m)^\[\^[\w-]+\]:.*$").unwrap();
    re.replace_all(markdown, "").into_owned()
}

/// Replaces every inline `[^marker]` occurrence with its `[@canonical-id]`
/// citation token.
///
/// This is a literal-text substitution over the entire document; any text that
/// coincidentally contains `[^marker]` is rewritten too. References without a
/// matching definition are left untouched, silently.
pub fn substitute_references(markdown: &str, refs: &ReferenceMap) -> String {
    let mut result = markdown.to_string();

    for (marker, canonical) in refs.marker_mapping() {
        result = result.replace(&format!("[{marker}]"), &format!("[@{canonical}]"));
    }

    result
}

/// Rewrites runs of two or more immediately adjacent citation tokens into a
/// single grouped citation.
///
/// `[@ref1][@ref2][@ref3]` becomes `[@ref1; @ref2; @ref3]`. Tokens separated
/// by any character, including a single space, are never merged; single tokens
/// are untouched.
///
/// # Examples
///
/// ```
/// use citeprep::rewrite::consolidate_citations;
///
/// assert_eq!(consolidate_citations("See [@ref1][@ref2]."), "See [@ref1; @ref2].");
/// assert_eq!(consolidate_citations("See [@ref1] [@ref2]."), "See [@ref1] [@ref2].");
/// ```
pub fn consolidate_citations(markdown: &str) -> String {
    let run_re = Regex::new(r"\[@\w+\](?:\[@\w+\])+").unwrap();
    let id_re = Regex::new(r"\[@(\w+)\]").unwrap();

    run_re
        .replace_all(markdown, |caps: &Captures| {
            let ids: Vec<String> = id_re
                .captures_iter(&caps[0])
                .map(|c| format!("@{}", &c[1]))
                .collect();
            format!("[{}]", ids.join("; "))
        })
        .into_owned()
}
