/// Split narrative text into paragraph chunks for independent synthesis.
///
/// Paragraphs are separated by blank lines (double newline). Each chunk is
/// trimmed; empty or whitespace-only segments are dropped rather than kept
/// as empty chunks. Order follows the original text. A single-paragraph
/// input yields exactly one chunk.
pub fn split_into_chunks(text: &str) -> Vec<String> {
    // Story text arrives from upstream generators that may emit Windows
    // line endings; normalize before looking for blank lines.
    let normalized = text.replace("\r\n", "\n");

    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
