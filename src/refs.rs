//! Reference deduplication and canonical id assignment.
//!
//! Consumes the ordered footnote sequence and builds two mappings: canonical
//! id -> unique content (insertion order, drives bibliography generation) and
//! original marker -> canonical id (drives in-text substitution). Two markers
//! whose trimmed contents are byte-identical share one canonical id.

use crate::footnotes::Footnote;

/// The deduplicated reference tables built from one document's footnotes.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceMap {
    /// Canonical id -> trimmed content, in first-seen order ("ref1", "ref2", ...)
    unique: Vec<(String, String)>,
    /// Original marker (with caret) -> canonical id, in first-seen marker order
    mapping: Vec<(String, String)>,
}

impl ReferenceMap {
    /// The unique references in canonical-id order.
    pub fn unique_refs(&self) -> &[(String, String)] {
        &self.unique
    }

    /// The per-marker mapping applied during substitution.
    pub fn marker_mapping(&self) -> &[(String, String)] {
        &self.mapping
    }

    /// Number of unique references.
    pub fn len(&self) -> usize {
        self.unique.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unique.is_empty()
    }
}

/// Builds the reference tables from extracted footnotes.
///
/// Contents are compared by exact string equality after trimming, first match
/// wins; the linear scan per entry is fine at document scale. Canonical ids
/// are minted as `ref` plus a 1-based counter derived from the table length,
/// so the numbering is a pure function of the input order.
///
/// # Examples
///
/// ```
/// use citeprep::{build_reference_map, extract_footnotes};
///
/// let footnotes = extract_footnotes(
///     "[^1]: https://example.com/a\n[^2]: https://example.com/a\n[^3]: https://example.com/b",
/// );
/// let refs = build_reference_map(&footnotes);
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs.unique_refs()[0], ("ref1".into(), "https://example.com/a".into()));
/// assert_eq!(refs.marker_mapping()[1], ("^2".into(), "ref1".into()));
/// ```
pub fn build_reference_map(footnotes: &[Footnote]) -> ReferenceMap {
    let mut unique: Vec<(String, String)> = Vec::new();
    let mut mapping: Vec<(String, String)> = Vec::new();

    for footnote in footnotes {
        let content = footnote.content.trim().to_string();

        let canonical = match unique.iter().find(|(_, existing)| *existing == content) {
            Some((id, _)) => id.clone(),
            None => {
                let id = format!("ref{}", unique.len() + 1);
                unique.push((id.clone(), content));
                id
            }
        };

        // A marker defined twice keeps its original position but the later
        // definition wins, matching insertion into a keyed map.
        match mapping.iter_mut().find(|(marker, _)| *marker == footnote.marker) {
            Some(entry) => entry.1 = canonical,
            None => mapping.push((footnote.marker.clone(), canonical)),
        }
    }

    ReferenceMap { unique, mapping }
}
