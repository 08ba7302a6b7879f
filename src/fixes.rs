//! Structural text fixes.
//!
//! Four independent rewrites applied to the whole document, in order: math
//! delimiter normalization, centered div conversion, separator insertion
//! after center environments, and whitespace normalization. They run
//! unconditionally, whether or not any footnotes were found.

use regex::{Captures, Regex};

/// Applies all four structural fixes in order.
pub fn apply_structural_fixes(markdown: &str) -> String {
    let fixed = normalize_math(markdown);
    let fixed = convert_centered_divs(&fixed);
    let fixed = insert_separators(&fixed);
    normalize_whitespace(&fixed)
}

/// Converts escaped math delimiters `\$ ... \$` to plain `$...$`.
///
/// The inner content is anything not containing a bare dollar sign; padding
/// spaces next to the delimiters are stripped, the content itself is kept
/// verbatim. Already-converted `$...$` spans contain no `\$` delimiter and are
/// left alone, so the rewrite is idempotent.
pub fn normalize_math(markdown: &str) -> String {
    let re = Regex::new(r"\\\$ *([^$]*) *\\\$").unwrap();

    re.replace_all(markdown, |caps: &Captures| {
        format!("${}$", caps[1].trim_matches(' '))
    })
    .into_owned()
}

/// Converts single-line centered HTML divs to LaTeX center environments.
///
/// Both `<div style="text-align: center">` and `<div align="center">` forms
/// are recognized; the captured content is wrapped verbatim.
pub fn convert_centered_divs(markdown: &str) -> String {
    let re = Regex::new(r#"<div (?:style="text-align: center"|align="center")>(.*?)</div>"#)
        .unwrap();

    re.replace_all(markdown, "\\begin{center}\n${1}\n\\end{center}")
        .into_owned()
}

/// Inserts a blank line and a horizontal rule after every `\end{center}` that
/// is not already followed, after optional whitespace, by a rule line.
pub fn insert_separators(markdown: &str) -> String {
    const CLOSE: &str = "\\end{center}";

    let mut result = String::with_capacity(markdown.len());
    let mut rest = markdown;

    while let Some(idx) = rest.find(CLOSE) {
        let after = idx + CLOSE.len();
        result.push_str(&rest[..after]);

        let tail = &rest[after..];
        let skipped = tail.len() - tail.trim_start().len();
        if !tail[skipped..].starts_with("---") {
            result.push_str("\n\n---");
        }

        rest = tail;
    }

    result.push_str(rest);
    result
}

/// Normalizes whitespace over the whole document: runs of three or more
/// newlines collapse to a blank line, runs of spaces and tabs collapse to one
/// space, and the document is trimmed at both ends.
pub fn normalize_whitespace(markdown: &str) -> String {
    let blank_lines = Regex::new(r"\n\n\n+").unwrap();
    let collapsed = blank_lines.replace_all(markdown, "\n\n");

    let horizontal = Regex::new(r"[ \t]+").unwrap();
    let collapsed = horizontal.replace_all(&collapsed, " ");

    collapsed.trim().to_string()
}
