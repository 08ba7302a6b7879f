//! CLI integration tests.
//!
//! Tests the command-line interface by running the binary as a subprocess
//! with a piped stdin, the way the PDF wrapper scripts invoke it.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled binary
fn binary_path() -> PathBuf {
    // The binary is built in target/debug or target/release
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("citeprep");
    path
}

/// Runs the binary with the given arguments and stdin content.
fn run_citeprep(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn citeprep");

    {
        let stdin = child.stdin.as_mut().expect("Failed to open stdin");
        stdin
            .write_all(input.as_bytes())
            .expect("Failed to write to stdin");
    }

    child.wait_with_output().expect("Failed to wait for citeprep")
}

const SIMPLE_DOC: &str = "\
# Test Document

Some text with a footnote[^1].

[^1]: https://example.com/source1
";

// ============================================
// Tests for CLI argument parsing
// ============================================

#[test]
fn test_cli_help() {
    // Given: The CLI binary
    let output = Command::new(binary_path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    // Then: Help is displayed with expected content
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("citeprep") || stdout.contains("footnotes"),
        "Help should mention the tool name or purpose: {}",
        stdout
    );
    assert!(
        stdout.contains("--language"),
        "Help should mention the language option: {}",
        stdout
    );
    assert!(
        stdout.contains("--no-fallback-fonts"),
        "Help should mention the font suppression flag: {}",
        stdout
    );
    assert!(output.status.success(), "Help should exit with success");
}

#[test]
fn test_cli_version() {
    let output = Command::new(binary_path())
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Version should exit with success");
}

#[test]
fn test_cli_unknown_flag_fails() {
    let output = run_citeprep(&["--does-not-exist"], "");

    assert!(!output.status.success(), "Unknown flag should fail");
}

// ============================================
// Tests for the transform over stdin/stdout
// ============================================

#[test]
fn test_cli_converts_footnotes() {
    // Given: A document with a footnote piped through stdin
    let output = run_citeprep(&[], SIMPLE_DOC);

    // Then: The converted document lands on stdout
    assert!(
        output.status.success(),
        "Processing should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[@ref1]"), "Output: {}", stdout);
    assert!(!stdout.contains("[^1]:"), "Output: {}", stdout);
    assert!(stdout.contains("references:"), "Output: {}", stdout);
    assert!(
        stdout.contains("lang: en-US"),
        "Default language should be en-US: {}",
        stdout
    );
}

#[test]
fn test_cli_language_shorthand() {
    // Given: The 'de' shorthand
    let output = run_citeprep(&["-l", "de"], SIMPLE_DOC);

    // Then: The front matter carries the full locale tag
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lang: de-DE"), "Output: {}", stdout);
}

#[test]
fn test_cli_language_passthrough() {
    let output = run_citeprep(&["--language", "fr-FR"], SIMPLE_DOC);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lang: fr-FR"), "Output: {}", stdout);
}

#[test]
fn test_cli_no_fallback_fonts() {
    // Given: Font fallback suppressed on the command line
    let output = run_citeprep(&["--no-fallback-fonts"], SIMPLE_DOC);

    // Then: No font fields appear in the output
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("mainfontfallback:"), "Output: {}", stdout);
    assert!(!stdout.contains("sansfontfallback:"), "Output: {}", stdout);
    assert!(!stdout.contains("monofontfallback:"), "Output: {}", stdout);
}

#[test]
fn test_cli_empty_input() {
    // Given: Zero bytes on stdin
    let output = run_citeprep(&[], "");

    // Then: Zero bytes on stdout, exit 0
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "Expected empty output");
}

#[test]
fn test_cli_document_without_footnotes_passes_through() {
    // Given: A plain document, no footnotes, no fixable constructs
    let input = "# Title\n\nPlain prose.";
    let output = run_citeprep(&[], input);

    // Then: The document comes back unchanged
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), input);
}

#[test]
fn test_cli_errors_go_to_stderr() {
    // Given: A bad invocation
    let output = run_citeprep(&["--does-not-exist"], "");

    // Then: The message is on stderr, stdout stays clean
    assert!(!output.stderr.is_empty(), "Expected an error message");
    assert!(output.stdout.is_empty(), "stdout should stay clean on error");
}
