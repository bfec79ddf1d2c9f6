//! DOCX text extraction: reads `word/document.xml` out of the zip container.

use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::documents::ExtractionError;

const DOCUMENT_XML: &str = "word/document.xml";

static PARAGRAPH_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</w:p>").expect("valid paragraph regex"));
static BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<w:(?:br|cr)\b[^>]*/?>").expect("valid break regex"));
static TAB: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:tab\b[^>]*/?>").expect("valid tab regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Docx(format!("not a DOCX container: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_XML)
        .map_err(|e| ExtractionError::Docx(format!("missing {DOCUMENT_XML}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(format!("unreadable {DOCUMENT_XML}: {e}")))?;

    Ok(document_xml_to_text(&xml))
}

/// Flattens WordprocessingML to text: paragraphs become lines, breaks and
/// tabs become whitespace, every other tag is dropped.
fn document_xml_to_text(xml: &str) -> String {
    let text = PARAGRAPH_END.replace_all(xml, "\n");
    let text = BREAK.replace_all(&text, "\n");
    let text = TAB.replace_all(&text, "\t");
    let text = TAG.replace_all(&text, "");

    unescape_xml(&text)
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut buffer);
            let options: zip::write::SimpleFileOptions = zip::write::SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            zip.start_file(DOCUMENT_XML, options).unwrap();
            zip.write_all(document_xml.as_bytes()).unwrap();
            zip.finish().unwrap();
        }
        buffer.into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
            <w:p><w:r><w:t>Skills: Rust, C++ &amp; Go</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let text = extract_docx_text(&build_docx(xml)).unwrap();
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["Jane Doe", "Skills: Rust, C++ & Go"]);
    }

    #[test]
    fn test_breaks_and_tabs_become_whitespace() {
        let text = document_xml_to_text(
            "<w:p><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t><w:br/><w:t>C</w:t></w:r></w:p>",
        );
        assert_eq!(text, "A\tB\nC");
    }

    #[test]
    fn test_entities_are_unescaped_once() {
        assert_eq!(unescape_xml("&lt;T&gt; &amp;lt;"), "<T> &lt;");
    }

    #[test]
    fn test_non_zip_bytes_are_a_docx_error() {
        let err = extract_docx_text(b"plain bytes").unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }

    #[test]
    fn test_zip_without_document_xml_is_a_docx_error() {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut buffer);
            let options: zip::write::SimpleFileOptions = zip::write::SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            zip.start_file("other.xml", options).unwrap();
            zip.write_all(b"<x/>").unwrap();
            zip.finish().unwrap();
        }
        let err = extract_docx_text(&buffer.into_inner()).unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(msg) if msg.contains(DOCUMENT_XML)));
    }
}
