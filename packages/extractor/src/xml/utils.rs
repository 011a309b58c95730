//! Depth-first search helpers over parsed XML trees.
//!
//! Lookups match elements by name and only when they carry no namespace,
//! so `<x:document-id>` or an element under a default `xmlns` does not
//! count as `document-id`. Traversal is pre-order, which is document order
//! for elements.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Arguments
/// * `node` - XML node
///
/// # Returns
/// Local tag name (e.g., "document-id" for both `<document-id>` and `<x:document-id>`)
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use docnumber_extractor::xml::get_tag_name;
///
/// let xml = r#"<root><document-id/></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let id = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(id), "document-id");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is a non-namespaced element with a specific tag name.
///
/// # Arguments
/// * `node` - Node to check
/// * `tag` - Expected tag name
///
/// # Returns
/// `true` if the node is an element named exactly `tag` with no namespace
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().namespace().is_none() && get_tag_name(node) == tag
}

/// Find every element with the given tag name in the subtree rooted at
/// `node`, `node` itself included.
///
/// # Arguments
/// * `node` - Root of the subtree to search
/// * `tag` - Tag name to search for
///
/// # Returns
/// Iterator over matching elements in document order
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use docnumber_extractor::xml::find_descendants;
///
/// let xml = r#"<root><a><item>1</item></a><item>2</item></root>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let items: Vec<_> = find_descendants(doc.root_element(), "item")
///     .map(|n| n.text().unwrap_or_default())
///     .collect();
/// assert_eq!(items, ["1", "2"]);
/// ```
pub fn find_descendants<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants().filter(move |n| has_tag(*n, tag))
}

/// Find the first element below `node` with the given tag name, depth-first.
///
/// # Arguments
/// * `node` - Node to search under; never returned itself
/// * `tag` - Tag name to search for
///
/// # Returns
/// First matching descendant, or `None` if not found
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use docnumber_extractor::xml::find_descendant;
///
/// let xml = r#"<document-id><wrap><doc-number>1</doc-number></wrap></document-id>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let nr = find_descendant(doc.root_element(), "doc-number");
/// assert_eq!(nr.and_then(|n| n.text()), Some("1"));
/// assert!(find_descendant(doc.root_element(), "document-id").is_none());
/// ```
pub fn find_descendant<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants().skip(1).find(|n| has_tag(*n, tag))
}

/// Get an attribute value, treating a missing attribute as empty.
///
/// # Arguments
/// * `node` - Node to get attribute from
/// * `name` - Attribute name
///
/// # Returns
/// Attribute value, or `""` if not present
pub fn attribute_or_empty<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
    node.attribute(name).unwrap_or_default()
}

/// Get the leading text of an element, trimmed.
///
/// Joins the text children that come before the first child element.
/// Comments and processing instructions in between are skipped, so
/// `<n>12<!--x-->34</n>` reads as `1234`.
///
/// # Arguments
/// * `node` - Element to read
///
/// # Returns
/// Trimmed text, or `None` if it is missing or blank
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use docnumber_extractor::xml::trimmed_text;
///
/// let doc = Document::parse("<n><!-- c --> 123 <sub>x</sub></n>").unwrap();
/// assert_eq!(trimmed_text(doc.root_element()).as_deref(), Some("123"));
/// ```
pub fn trimmed_text(node: Node<'_, '_>) -> Option<String> {
    let text: String = node
        .children()
        .take_while(|child| !child.is_element())
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<ns:root xmlns:ns="http://example.com"><ns:child/></ns:root>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_has_tag_ignores_namespaced_elements() {
        let xml = r#"<root xmlns:x="urn:x"><x:document-id/><document-id/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let mut children = doc.root_element().children().filter(|n| n.is_element());

        assert!(!has_tag(children.next().unwrap(), "document-id"));
        assert!(has_tag(children.next().unwrap(), "document-id"));

        let xml = r#"<root xmlns="urn:default"><document-id/></root>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(find_descendants(doc.root_element(), "document-id").count(), 0);
    }

    #[test]
    fn test_trimmed_text_skips_comments_and_instructions() {
        let doc = Document::parse("<n><!-- c -->123</n>").unwrap();
        assert_eq!(trimmed_text(doc.root_element()).as_deref(), Some("123"));

        let doc = Document::parse("<n>12<!--x-->3<?pi data?>4</n>").unwrap();
        assert_eq!(trimmed_text(doc.root_element()).as_deref(), Some("1234"));

        let doc = Document::parse("<n>12<b>x</b>34</n>").unwrap();
        assert_eq!(trimmed_text(doc.root_element()).as_deref(), Some("12"));
    }

    #[test]
    fn test_has_tag() {
        let xml = r#"<document-id>text</document-id>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert!(has_tag(root, "document-id"));
        assert!(!has_tag(root, "doc-number"));
        let text = root.first_child().unwrap();
        assert!(!has_tag(text, "document-id"));
    }

    #[test]
    fn test_find_descendants_any_depth_in_order() {
        let xml = r#"<root>
            <a><b><t>1</t></b></a>
            <t>2</t>
            <c><t>3<t>4</t></t></c>
        </root>"#;
        let doc = Document::parse(xml).unwrap();

        let found: Vec<_> = find_descendants(doc.root_element(), "t")
            .filter_map(|n| n.text())
            .collect();
        assert_eq!(found, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_find_descendants_includes_self() {
        let xml = r#"<t><t/></t>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(find_descendants(doc.root_element(), "t").count(), 2);
    }

    #[test]
    fn test_find_descendant_first_depth_first() {
        let xml = r#"<id>
            <x><n>deep</n></x>
            <n>shallow</n>
        </id>"#;
        let doc = Document::parse(xml).unwrap();

        let n = find_descendant(doc.root_element(), "n").unwrap();
        assert_eq!(n.text(), Some("deep"));
        assert!(find_descendant(doc.root_element(), "missing").is_none());
    }

    #[test]
    fn test_attribute_or_empty() {
        let xml = r#"<root format="epo"><child/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(attribute_or_empty(root, "format"), "epo");
        let child = root.first_element_child().unwrap();
        assert_eq!(attribute_or_empty(child, "format"), "");
    }

    #[test]
    fn test_trimmed_text() {
        let doc = Document::parse("<n>  123  </n>").unwrap();
        assert_eq!(trimmed_text(doc.root_element()).as_deref(), Some("123"));

        let doc = Document::parse("<n>   \n\t</n>").unwrap();
        assert_eq!(trimmed_text(doc.root_element()), None);

        let doc = Document::parse("<n></n>").unwrap();
        assert_eq!(trimmed_text(doc.root_element()), None);

        let doc = Document::parse("<n/>").unwrap();
        assert_eq!(trimmed_text(doc.root_element()), None);
    }
}
