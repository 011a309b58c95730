//! Reading XML input files.
//!
//! Files are decoded as UTF-8 first. Content that is not valid UTF-8 is
//! decoded as ISO-8859-1 (latin-1), byte for byte.

use std::fs;
use std::path::Path;

use encoding_rs::mem::decode_latin1;

use crate::error::{ExtractorError, Result};
use crate::extractor::extract_doc_numbers;

/// UTF-8 BOM: EF BB BF
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read a file into a string with encoding fallback.
///
/// # Arguments
/// * `path` - File to read
///
/// # Returns
/// File content as a string
///
/// # Errors
/// * `ExtractorError::NotFound` if the path does not exist
/// * `ExtractorError::Io` for any other read failure
pub fn read_xml_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ExtractorError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExtractorError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ExtractorError::Io(e)
        }
    })?;

    // latin-1 maps every byte, so decoding cannot produce UnreadableEncoding
    Ok(decode_content(&bytes))
}

/// Decode raw bytes as UTF-8, falling back to latin-1.
///
/// A leading UTF-8 BOM is stripped.
pub fn decode_content(bytes: &[u8]) -> String {
    let data = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::warn!(
                valid_up_to = e.valid_up_to(),
                "content is not valid UTF-8, decoding as latin-1"
            );
            decode_latin1(data).into_owned()
        }
    }
}

/// Read a file and extract its doc-numbers in priority order.
///
/// # Errors
/// Any error from [`read_xml_file`] or [`extract_doc_numbers`].
pub fn extract_doc_numbers_from_file(path: &Path) -> Result<Vec<String>> {
    let content = read_xml_file(path)?;
    extract_doc_numbers(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        let text = "<root>é</root>";
        assert_eq!(decode_content(text.as_bytes()), text);
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"<root/>");
        assert_eq!(decode_content(&bytes), "<root/>");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // "café" in ISO-8859-1
        let bytes = b"<n>caf\xe9</n>";
        assert_eq!(decode_content(bytes), "<n>café</n>");
    }

    #[test]
    fn test_decode_latin1_keeps_c1_controls() {
        // 0x80-0x9F map to U+0080-U+009F, not the windows-1252 punctuation
        assert_eq!(decode_content(b"<n>\x80\x93</n>"), "<n>\u{80}\u{93}</n>");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_xml_file(Path::new("/nonexistent/dir/patent.xml")).unwrap_err();
        assert!(matches!(err, ExtractorError::NotFound { .. }));
    }
}
