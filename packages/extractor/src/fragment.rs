//! Locating XML fragments inside free text.
//!
//! Input is either one whole XML document, or prose with one or more
//! `<root ...>...</root>` blocks embedded in it. The locator hands back the
//! slices to parse; it never fails.

use crate::config::{
    is_fragment_tag_terminator, FRAGMENT_CLOSE, FRAGMENT_OPEN, FRAGMENT_TAG, XML_DECLARATION,
};

/// Split input text into candidate XML strings.
///
/// Returns the input unchanged as the single candidate when its trimmed
/// form starts with an XML declaration or a `<root` opening tag. Otherwise
/// every `<root ...>...</root>` block is returned in order of occurrence,
/// each ending at the nearest following `</root>`. If no block is found the
/// whole input is the single candidate, so a parse failure surfaces later.
///
/// # Examples
/// ```
/// use docnumber_extractor::fragment::locate_fragments;
///
/// let text = "see <root><a/></root> and <root x=\"1\"><b/></root>.";
/// assert_eq!(
///     locate_fragments(text),
///     ["<root><a/></root>", "<root x=\"1\"><b/></root>"]
/// );
///
/// let xml = "  <root><a/></root>\n";
/// assert_eq!(locate_fragments(xml), [xml]);
/// ```
pub fn locate_fragments(content: &str) -> Vec<&str> {
    if is_whole_document(content) {
        tracing::debug!("input is a single XML document");
        return vec![content];
    }

    let fragments = scan_fragments(content);
    if fragments.is_empty() {
        tracing::debug!(tag = FRAGMENT_TAG, "no fragments found, using whole input");
        return vec![content];
    }

    tracing::debug!(count = fragments.len(), "located XML fragments");
    fragments
}

/// Fast-path check on the trimmed input.
fn is_whole_document(content: &str) -> bool {
    let trimmed = content.trim();
    trimmed.starts_with(XML_DECLARATION) || opens_fragment_at(trimmed, 0)
}

/// Check whether a fragment opening tag starts at byte offset `pos`.
fn opens_fragment_at(content: &str, pos: usize) -> bool {
    content[pos..].starts_with(FRAGMENT_OPEN)
        && content
            .as_bytes()
            .get(pos + FRAGMENT_OPEN.len())
            .is_some_and(|&b| is_fragment_tag_terminator(b))
}

/// Find the next fragment opening tag at or after `from`.
fn find_fragment_open(content: &str, from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(offset) = content[search..].find(FRAGMENT_OPEN) {
        let pos = search + offset;
        if opens_fragment_at(content, pos) {
            return Some(pos);
        }
        // '<' is a single byte, so pos + 1 is a char boundary
        search = pos + 1;
    }
    None
}

/// Collect non-overlapping `<root ...>...</root>` spans left to right.
fn scan_fragments(content: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut cursor = 0;

    while let Some(start) = find_fragment_open(content, cursor) {
        let body = start + FRAGMENT_OPEN.len();
        let Some(offset) = content[body..].find(FRAGMENT_CLOSE) else {
            break;
        };
        let end = body + offset + FRAGMENT_CLOSE.len();
        fragments.push(&content[start..end]);
        cursor = end;
    }

    fragments
}
