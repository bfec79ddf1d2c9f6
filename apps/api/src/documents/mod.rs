//! Upload text extraction: PDF, DOCX and plain text.
//!
//! Extraction is synchronous and CPU-bound; handlers run it inside
//! `tokio::task::spawn_blocking`.

pub mod cleaning;
pub mod docx;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

pub use cleaning::clean_document_text;

/// PDFs yielding fewer non-whitespace characters are treated as image-only.
const MIN_PDF_CHARS: usize = 10;
/// Unknown formats are sniffed as UTF-8 within this prefix.
const SNIFF_PREFIX_BYTES: usize = 100_000;
const MIN_SNIFFED_CHARS: usize = 10;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("the uploaded file is empty")]
    Empty,

    #[error("Could not extract text from PDF (only {chars} characters found)")]
    TooShort { chars: usize },

    #[error("Unsupported file format. Please use PDF, DOCX, or TXT.")]
    Unsupported,

    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("DOCX parse error: {0}")]
    Docx(String),
}

/// A file received through the `resume` multipart field.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
    Unknown,
}

impl DocumentKind {
    /// Decides the format from the MIME type first, then the file extension.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Self {
        let mime = content_type.unwrap_or_default().to_ascii_lowercase();
        let name = file_name.to_ascii_lowercase();

        if mime == "application/pdf" || name.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if mime.contains("word") || name.ends_with(".docx") {
            DocumentKind::Docx
        } else if mime == "text/plain"
            || mime == "text/markdown"
            || name.ends_with(".txt")
            || name.ends_with(".md")
        {
            DocumentKind::PlainText
        } else {
            DocumentKind::Unknown
        }
    }
}

/// Extracts raw text from an uploaded document. The caller cleans it.
pub fn extract_text(file: &UploadedFile) -> Result<String, ExtractionError> {
    if file.bytes.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let kind = DocumentKind::detect(&file.file_name, file.content_type.as_deref());
    debug!(
        "Extracting text from '{}' ({:?}, {} bytes)",
        file.file_name,
        kind,
        file.bytes.len()
    );

    let text = match kind {
        DocumentKind::Pdf => extract_pdf(&file.bytes)?,
        DocumentKind::Docx => docx::extract_docx_text(&file.bytes)?,
        DocumentKind::PlainText => String::from_utf8_lossy(&file.bytes).into_owned(),
        DocumentKind::Unknown => sniff_utf8(&file.bytes)?,
    };

    debug!("Extracted {} characters from '{}'", text.len(), file.file_name);
    Ok(text)
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed documents.
    let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractionError::Pdf("malformed PDF document".to_string()))?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let chars = text.chars().filter(|c| !c.is_whitespace()).count();
    if chars < MIN_PDF_CHARS {
        return Err(ExtractionError::TooShort { chars });
    }
    Ok(text)
}

fn sniff_utf8(bytes: &[u8]) -> Result<String, ExtractionError> {
    let prefix = &bytes[..bytes.len().min(SNIFF_PREFIX_BYTES)];
    let text = match std::str::from_utf8(prefix) {
        Ok(text) => text,
        // A multi-byte character cut by the prefix boundary is still text.
        Err(e) if e.error_len().is_none() => {
            std::str::from_utf8(&prefix[..e.valid_up_to()]).map_err(|_| ExtractionError::Unsupported)?
        }
        Err(_) => return Err(ExtractionError::Unsupported),
    };

    if text.chars().count() <= MIN_SNIFFED_CHARS {
        return Err(ExtractionError::Unsupported);
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, content_type: Option<&str>, bytes: &'static [u8]) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            content_type: content_type.map(str::to_string),
            bytes: Bytes::from_static(bytes),
        }
    }

    #[test]
    fn test_detect_prefers_mime_then_extension() {
        assert_eq!(
            DocumentKind::detect("cv.bin", Some("application/pdf")),
            DocumentKind::Pdf
        );
        assert_eq!(DocumentKind::detect("CV.PDF", None), DocumentKind::Pdf);
        assert_eq!(
            DocumentKind::detect(
                "cv",
                Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
            ),
            DocumentKind::Docx
        );
        assert_eq!(DocumentKind::detect("cv.docx", None), DocumentKind::Docx);
        assert_eq!(DocumentKind::detect("cv.md", None), DocumentKind::PlainText);
        assert_eq!(
            DocumentKind::detect("cv", Some("text/plain")),
            DocumentKind::PlainText
        );
        assert_eq!(
            DocumentKind::detect("cv.rtf", Some("application/rtf")),
            DocumentKind::Unknown
        );
    }

    #[test]
    fn test_plain_text_is_returned_verbatim() {
        let file = upload("cv.txt", Some("text/plain"), b"Rust developer\nTokio, Axum");
        assert_eq!(extract_text(&file).unwrap(), "Rust developer\nTokio, Axum");
    }

    #[test]
    fn test_empty_upload_is_rejected() {
        let file = upload("cv.txt", Some("text/plain"), b"");
        assert!(matches!(extract_text(&file), Err(ExtractionError::Empty)));
    }

    #[test]
    fn test_unknown_format_accepts_utf8_text() {
        let file = upload("cv.rtf", None, b"Experienced backend engineer");
        assert_eq!(extract_text(&file).unwrap(), "Experienced backend engineer");
    }

    #[test]
    fn test_unknown_format_rejects_binary_and_short_text() {
        let binary = upload("cv.bin", None, &[0xff, 0xfe, 0x00, 0x81, 0x90, 0xaa, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15]);
        assert!(matches!(extract_text(&binary), Err(ExtractionError::Unsupported)));

        let short = upload("cv.bin", None, b"tiny text");
        assert!(matches!(extract_text(&short), Err(ExtractionError::Unsupported)));
    }

    #[test]
    fn test_invalid_pdf_reports_pdf_error() {
        let file = upload("cv.pdf", Some("application/pdf"), b"definitely not a pdf document");
        assert!(matches!(extract_text(&file), Err(ExtractionError::Pdf(_))));
    }
}
