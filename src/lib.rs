//! citeprep: CLI preprocessor converting Markdown footnotes to Pandoc citations.
//!
//! This library provides functionality to:
//! - Extract and deduplicate footnote definitions from Markdown documents
//! - Rewrite inline footnote references as Pandoc citation tokens
//! - Normalize escaped math delimiters and centered HTML blocks for LaTeX
//! - Inject bibliography and rendering metadata into YAML front matter
//!
//! The transform is a pure function from text to text; the external Pandoc +
//! LuaLaTeX pipeline that turns the output into a PDF is out of scope here.
//!
//! Two quirks are contract, not accident: inline references without a
//! matching definition pass through as literal text with no diagnostic, and
//! adjacent citations are only grouped when zero characters separate them
//! (`[@ref1] [@ref2]` stays split). Front-matter key presence is checked by
//! substring, so a key mentioned anywhere in the block is never re-added.

pub mod fixes;
pub mod footnotes;
pub mod frontmatter;
pub mod processor;
pub mod refs;
pub mod rewrite;

pub use fixes::apply_structural_fixes;
pub use footnotes::{extract_footnotes, Footnote};
pub use frontmatter::{inject_metadata, split_front_matter, SplitDocument};
pub use processor::{preprocess, resolve_language, PreprocessOptions};
pub use refs::{build_reference_map, ReferenceMap};
