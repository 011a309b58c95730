//! Configuration constants for doc-number extraction.

use roxmltree::ParsingOptions;

/// Element that records one identifier and its format.
pub const DOCUMENT_ID_TAG: &str = "document-id";

/// Element holding the literal identifier text.
pub const DOC_NUMBER_TAG: &str = "doc-number";

/// Classification attribute on `document-id`.
pub const FORMAT_ATTRIBUTE: &str = "format";

/// Tag name delimiting XML fragments embedded in free text.
pub const FRAGMENT_TAG: &str = "root";

/// Opening of a fragment tag, without the terminating `>` or attributes.
pub const FRAGMENT_OPEN: &str = "<root";

/// Closing fragment tag.
pub const FRAGMENT_CLOSE: &str = "</root>";

/// XML declaration marker.
pub const XML_DECLARATION: &str = "<?xml";

/// Exit code for failures writing output.
pub const EXIT_OUTPUT_ERROR: i32 = 1;

/// Exit code for a missing input file.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Exit code for input that cannot be decoded.
pub const EXIT_UNREADABLE_ENCODING: i32 = 3;

/// Exit code for malformed XML.
pub const EXIT_PARSE_ERROR: i32 = 4;

/// Exit code for other I/O failures.
pub const EXIT_IO_ERROR: i32 = 5;

/// Options used for every XML parse.
///
/// Patent documents usually carry a `<!DOCTYPE ...>` declaration, which
/// roxmltree rejects unless DTDs are explicitly allowed.
pub fn parsing_options<'input>() -> ParsingOptions<'input> {
    ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    }
}

/// Check whether a byte can follow `<root` in an opening tag.
///
/// Only whitespace (start of attributes) or `>` qualify, so `<rootx>` and
/// `<root/>` are not fragment openings.
pub fn is_fragment_tag_terminator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | b'>')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_markers_agree() {
        assert_eq!(FRAGMENT_OPEN, format!("<{FRAGMENT_TAG}"));
        assert_eq!(FRAGMENT_CLOSE, format!("</{FRAGMENT_TAG}>"));
    }

    #[test]
    fn test_fragment_tag_terminator() {
        assert!(is_fragment_tag_terminator(b'>'));
        assert!(is_fragment_tag_terminator(b' '));
        assert!(is_fragment_tag_terminator(b'\n'));
        assert!(!is_fragment_tag_terminator(b'/'));
        assert!(!is_fragment_tag_terminator(b'x'));
    }

    #[test]
    fn test_parsing_options_allow_dtd() {
        let xml = r#"<?xml version="1.0"?>
<!DOCTYPE root SYSTEM "patent.dtd">
<root><document-id/></root>"#;
        assert!(roxmltree::Document::parse_with_options(xml, parsing_options()).is_ok());
    }

    #[test]
    fn test_exit_codes_distinct() {
        let codes = [
            EXIT_OUTPUT_ERROR,
            EXIT_NOT_FOUND,
            EXIT_UNREADABLE_ENCODING,
            EXIT_PARSE_ERROR,
            EXIT_IO_ERROR,
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
