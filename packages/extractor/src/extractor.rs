//! Doc-number extraction and priority ordering.

use roxmltree::{Document, Node};

use crate::config::{parsing_options, DOCUMENT_ID_TAG, DOC_NUMBER_TAG, FORMAT_ATTRIBUTE};
use crate::error::Result;
use crate::fragment::locate_fragments;
use crate::types::{BucketedDocNumbers, DocNumberEntry, FormatBucket};
use crate::xml::{attribute_or_empty, find_descendant, find_descendants, trimmed_text};

/// Extract doc-number values from text in priority order.
///
/// Values are ordered epo first, then patent-office, then everything else.
/// Within a bucket, fragments are taken in input order and elements in
/// document order.
///
/// # Arguments
/// * `content` - A whole XML document, or text with embedded `<root>` blocks
///
/// # Returns
/// Trimmed doc-number values; empty if no `document-id` has a usable value
///
/// # Errors
/// Returns `ExtractorError::XmlParse` if any located fragment is not
/// well-formed XML. No partial result is returned.
///
/// # Examples
/// ```
/// use docnumber_extractor::extract_doc_numbers;
///
/// let xml = r#"<root>
///     <document-id format="patent-office"><doc-number>222222</doc-number></document-id>
///     <document-id format="epo"><doc-number>111111</doc-number></document-id>
/// </root>"#;
/// assert_eq!(extract_doc_numbers(xml).unwrap(), ["111111", "222222"]);
/// ```
pub fn extract_doc_numbers(content: &str) -> Result<Vec<String>> {
    Ok(extract_doc_number_entries(content)?
        .into_iter()
        .map(|entry| entry.value)
        .collect())
}

/// Extract doc-numbers with their format and bucket, in priority order.
///
/// # Arguments
/// * `content` - A whole XML document, or text with embedded `<root>` blocks
///
/// # Returns
/// Entries in the same order [`extract_doc_numbers`] returns values
pub fn extract_doc_number_entries(content: &str) -> Result<Vec<DocNumberEntry>> {
    let fragments = locate_fragments(content);
    Ok(extract_from_fragments(&fragments)?.into_ordered())
}

/// Parse each fragment and merge their buckets in fragment order.
///
/// Stops at the first fragment that fails to parse.
///
/// # Arguments
/// * `fragments` - Candidate XML strings, in input order
///
/// # Returns
/// Accumulated entries, each bucket holding fragment 1's entries before
/// fragment 2's
pub fn extract_from_fragments<S: AsRef<str>>(fragments: &[S]) -> Result<BucketedDocNumbers> {
    let mut totals = BucketedDocNumbers::new();

    for (index, fragment) in fragments.iter().enumerate() {
        let doc = Document::parse_with_options(fragment.as_ref(), parsing_options())?;
        let found = collect_doc_numbers(doc.root());
        tracing::debug!(
            fragment = index,
            epo = found.bucket(FormatBucket::Epo).len(),
            patent_office = found.bucket(FormatBucket::PatentOffice).len(),
            other = found.bucket(FormatBucket::Other).len(),
            "extracted fragment"
        );
        totals.append(found);
    }

    if totals.is_empty() {
        tracing::debug!(fragments = fragments.len(), "no doc-numbers found");
    }

    Ok(totals)
}

/// Walk a parsed tree and bucket every qualifying `document-id`.
pub fn collect_doc_numbers(root: Node<'_, '_>) -> BucketedDocNumbers {
    let mut found = BucketedDocNumbers::new();

    for document_id in find_descendants(root, DOCUMENT_ID_TAG) {
        if let Some(entry) = read_document_id(document_id) {
            found.push(entry);
        }
    }

    found
}

/// Read one `document-id`, or `None` if it has no usable doc-number.
fn read_document_id(document_id: Node<'_, '_>) -> Option<DocNumberEntry> {
    let format = attribute_or_empty(document_id, FORMAT_ATTRIBUTE);

    let Some(doc_number) = find_descendant(document_id, DOC_NUMBER_TAG) else {
        tracing::trace!(format, "document-id without doc-number, skipping");
        return None;
    };

    let Some(value) = trimmed_text(doc_number) else {
        tracing::trace!(format, "blank doc-number, skipping");
        return None;
    };

    Some(DocNumberEntry::new(value, format))
}
