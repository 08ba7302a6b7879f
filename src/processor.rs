//! The preprocessing pipeline.
//!
//! A pure function over one in-memory string: footnote harvesting, citation
//! rewriting, structural fixes, front-matter split, and bibliography
//! injection, in that order. Every invocation is independent; nothing
//! persists between calls.

use crate::fixes::apply_structural_fixes;
use crate::footnotes::extract_footnotes;
use crate::frontmatter::{inject_metadata, split_front_matter};
use crate::refs::build_reference_map;
use crate::rewrite::{
    consolidate_citations, remove_definitions, substitute_references, sweep_definition_lines,
};

/// Caller-supplied knobs for one preprocessing run.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessOptions {
    /// Language tag written to `lang:` when absent, already resolved to its
    /// full locale form (see [`resolve_language`])
    pub language: String,
    /// When false, the three font-fallback fields are not injected
    pub fallback_fonts: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            fallback_fonts: true,
        }
    }
}

/// Expands language shorthands to full locale tags.
///
/// `de` becomes `de-DE` and `en` becomes `en-US`; anything else passes
/// through verbatim.
///
/// # Examples
///
/// ```
/// use citeprep::resolve_language;
///
/// assert_eq!(resolve_language("de"), "de-DE");
/// assert_eq!(resolve_language("fr-FR"), "fr-FR");
/// ```
pub fn resolve_language(tag: &str) -> String {
    match tag {
        "de" => "de-DE".to_string(),
        "en" => "en-US".to_string(),
        other => other.to_string(),
    }
}

/// Runs the whole preprocessing transform on a Markdown document.
///
/// Converts footnotes to Pandoc citations, normalizes math delimiters and
/// centered blocks, and injects bibliography metadata into the YAML front
/// matter. Without any footnote definitions only the structural fixes apply;
/// the front matter, if any, is left untouched.
///
/// # Examples
///
/// ```
/// use citeprep::{preprocess, PreprocessOptions};
///
/// let input = "Claim[^1].\n\n[^1]: https://example.com/source";
/// let output = preprocess(input, &PreprocessOptions::default());
/// assert!(output.contains("Claim[@ref1]."));
/// assert!(output.contains("URL: https://example.com/source"));
/// ```
pub fn preprocess(markdown: &str, options: &PreprocessOptions) -> String {
    let footnotes = extract_footnotes(markdown);
    if footnotes.is_empty() {
        // No citation or front-matter work to do; the structural fixes still
        // run over the whole document.
        return apply_structural_fixes(markdown);
    }

    let refs = build_reference_map(&footnotes);

    let stripped = remove_definitions(markdown, &footnotes);
    let stripped = sweep_definition_lines(&stripped);
    let substituted = substitute_references(&stripped, &refs);
    let consolidated = consolidate_citations(&substituted);

    let fixed = apply_structural_fixes(&consolidated);

    let split = split_front_matter(&fixed);
    inject_metadata(&split, &refs, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language_shorthands() {
        assert_eq!(resolve_language("de"), "de-DE");
        assert_eq!(resolve_language("en"), "en-US");
    }

    #[test]
    fn test_resolve_language_passthrough() {
        assert_eq!(resolve_language("fr-FR"), "fr-FR");
        assert_eq!(resolve_language("ja"), "ja");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let output = preprocess("", &PreprocessOptions::default());
        assert_eq!(output, "");
    }

    #[test]
    fn test_no_footnotes_skips_front_matter_work() {
        // Given: A document with front matter but no footnotes
        let input = "---\ntitle: Test\n---\n\nPlain prose.";

        // When: We preprocess
        let output = preprocess(input, &PreprocessOptions::default());

        // Then: No references section appears, front matter survives
        assert!(!output.contains("references:"));
        assert!(output.contains("title: Test"));
    }

    #[test]
    fn test_no_footnotes_still_applies_fixes() {
        // Given: No footnotes but an escaped math span
        let input = r"Value: \$ x \$";

        // When: We preprocess
        let output = preprocess(input, &PreprocessOptions::default());

        // Then: The math fix ran anyway
        assert_eq!(output, "Value: $x$");
    }

    #[test]
    fn test_full_conversion() {
        // Given: A document with two footnotes sharing one source
        let input = "\
# Title

Claims[^1] and more claims[^2].

[^1]: https://example.com/source1
[^2]: https://example.com/source1
";

        // When: We preprocess
        let output = preprocess(input, &PreprocessOptions::default());

        // Then: Both markers collapse onto ref1 and one entry is emitted
        assert!(output.contains("Claims[@ref1] and more claims[@ref1]."));
        assert!(!output.contains("[^1]"));
        assert_eq!(output.matches("id: ref1").count(), 1);
        assert_eq!(output.matches("URL: https://example.com/source1").count(), 1);
    }

    #[test]
    fn test_definition_lines_never_survive() {
        // Given: A definition at document end without a trailing blank line
        let input = "Text[^1].\n[^1]: https://example.com/a";

        // When: We preprocess
        let output = preprocess(input, &PreprocessOptions::default());

        // Then: No definition line remains in the output
        assert!(!output.contains("[^1]:"));
        assert!(output.contains("Text[@ref1]."));
    }
}
