use std::fs;
use std::path::Path;

use crate::core::errors::PipelineError;

/// Extracts plain text from a source document.
///
/// `.txt` files are read verbatim as UTF-8. `.pdf` files are extracted page
/// by page in document order; pages that yield no text contribute nothing
/// and are not an error. Anything else is rejected.
pub fn extract(path: &Path) -> Result<String, PipelineError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => extract_pdf(path),
        "txt" => extract_txt(path),
        other => Err(PipelineError::extraction(
            path,
            format!("unsupported extension: {:?}", other),
        )),
    }
}

fn extract_txt(path: &Path) -> Result<String, PipelineError> {
    let bytes = fs::read(path).map_err(|e| PipelineError::extraction(path, e))?;
    String::from_utf8(bytes).map_err(|e| PipelineError::extraction(path, e))
}

fn extract_pdf(path: &Path) -> Result<String, PipelineError> {
    let doc = lopdf::Document::load(path).map_err(|e| PipelineError::extraction(path, e))?;

    let mut text = String::new();
    // get_pages is keyed by page number, so iteration follows document order.
    for (&page_number, _) in doc.get_pages().iter() {
        match doc.extract_text(&[page_number]) {
            Ok(page_text) if !page_text.trim().is_empty() => text.push_str(&page_text),
            // Empty or unextractable pages (scans, images) are skipped.
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn txt_is_read_verbatim() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("manual.txt");
        let mut file = fs::File::create(&path).expect("create");
        write!(file, "Hold the button.\n\nReplace the battery.").expect("write");

        let text = extract(&path).expect("extract");
        assert_eq!(text, "Hold the button.\n\nReplace the battery.");
    }

    #[test]
    fn missing_file_is_an_extraction_error() {
        let err = extract(Path::new("/nonexistent/manual.txt")).unwrap_err();
        assert!(matches!(err, PipelineError::Extraction { .. }));
    }

    #[test]
    fn invalid_utf8_is_an_extraction_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).expect("write");

        let err = extract(&path).unwrap_err();
        assert!(matches!(err, PipelineError::Extraction { .. }));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("manual.docx");
        fs::write(&path, "whatever").expect("write");

        let err = extract(&path).unwrap_err();
        assert!(matches!(err, PipelineError::Extraction { .. }));
    }
}
