/// Splits extracted text into paragraph chunks.
///
/// Boundaries are blank lines (two or more consecutive newlines). Each
/// segment is trimmed and empty segments are dropped, so runs of blank
/// lines never produce empty chunks. Text without any blank line comes back
/// as a single chunk; whitespace-only input yields nothing.
pub fn segment(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
