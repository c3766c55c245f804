use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// Word split across a line break by a hyphen, e.g. "recog-\nnition".
static SOFT_HYPHEN_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w)-[ \t]*\r?\n[ \t]*(\w)").expect("hyphen break pattern compiles")
});

/// Normalizes text pulled out of a PDF page.
///
/// Applies NFKC, rejoins hyphenated line breaks, drops control characters,
/// collapses runs of spaces within a line, and keeps at most one blank line
/// between paragraphs.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let joined = SOFT_HYPHEN_BREAK.replace_all(&normalized, "$1$2");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in joined.lines() {
        let line = collapse_line(line);
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs.join("\n\n")
}

fn collapse_line(line: &str) -> String {
    line.split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
