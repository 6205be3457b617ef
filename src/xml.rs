//! Small helpers shared by the catalog, label and SVG readers.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::error::IconkitError;

/// Read a whole document from disk, tagging failures with the path.
pub(crate) fn read_file(path: &Path) -> Result<String, IconkitError> {
    fs::read_to_string(path).map_err(|source| IconkitError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn parse_document<'input>(
    xml: &'input str,
    path: &Path,
) -> Result<Document<'input>, IconkitError> {
    Document::parse(xml).map_err(|source| IconkitError::XmlParse {
        path: path.to_path_buf(),
        message: source.to_string(),
    })
}

/// Direct element children with the given local name.
pub(crate) fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

/// Concatenated text content of an element, entities already decoded.
pub(crate) fn element_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}

pub(crate) fn escape_attr(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape element text. Quotes are left alone since label values rely on
/// their backslash escapes being preserved verbatim.
pub(crate) fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_text_joins_text_nodes_and_decodes_entities() {
        let doc = Document::parse("<label name=\"a\">Fish &amp; chips</label>").expect("parse");
        assert_eq!(element_text(doc.root_element()), "Fish & chips");
    }

    #[test]
    fn escape_text_keeps_quotes() {
        assert_eq!(escape_text("a < b & \\\"c\\\""), "a &lt; b &amp; \\\"c\\\"");
        assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
    }
}
