//! Icon catalog XML reader and writer.
//!
//! The catalog layout is a flat list of categories:
//!
//! ```xml
//! <list>
//!     <category id="0" name="@string/catg_animals">
//!         <icon id="12" labels="cat,pet,_feline" path="M3 3h18v18H3z"/>
//!     </category>
//! </list>
//! ```

use std::fmt::Write as _;
use std::path::Path;

use roxmltree::Node;

use super::model::{split_labels, Catalog, CatalogKind, Category, Icon, IncompleteIcon};
use super::{CategoryId, IconId};
use crate::error::IconkitError;
use crate::xml::{child_elements, escape_attr, parse_document, read_file};

/// Read an icon catalog from disk.
pub fn read_catalog(path: &Path, kind: CatalogKind) -> Result<Catalog, IconkitError> {
    let xml = read_file(path)?;
    parse_catalog_str(&xml, path, kind)
}

/// Parse a catalog held in memory.
///
/// Mostly useful for tests; `path` is only used for error messages.
pub fn from_catalog_str(xml: &str, kind: CatalogKind) -> Result<Catalog, IconkitError> {
    parse_catalog_str(xml, Path::new("<memory>"), kind)
}

fn parse_catalog_str(xml: &str, path: &Path, kind: CatalogKind) -> Result<Catalog, IconkitError> {
    let document = parse_document(xml, path)?;
    let root = document.root_element();

    let mut catalog = Catalog::default();
    for category_node in child_elements(root, "category") {
        let id = parse_category_id(category_node, path)?;
        let name = category_node.attribute("name").unwrap_or_default();
        let mut category = Category::new(id, name);

        for (position, icon_node) in child_elements(category_node, "icon").enumerate() {
            match parse_icon(icon_node, id, kind) {
                Ok(icon) => category.icons.push(icon),
                Err(missing) => catalog.incomplete.push(IncompleteIcon {
                    category: id,
                    position,
                    id: icon_node.attribute("id").and_then(|raw| raw.parse().ok()),
                    missing,
                }),
            }
        }

        catalog.categories.push(category);
    }

    tracing::debug!(
        path = %path.display(),
        categories = catalog.categories.len(),
        icons = catalog.icon_count(),
        incomplete = catalog.incomplete.len(),
        "parsed icon catalog"
    );

    Ok(catalog)
}

fn parse_category_id(node: Node<'_, '_>, path: &Path) -> Result<CategoryId, IconkitError> {
    let raw = node
        .attribute("id")
        .ok_or_else(|| IconkitError::CatalogInvalid {
            path: path.to_path_buf(),
            message: "<category> without an id attribute".to_string(),
        })?;
    raw.parse::<CategoryId>()
        .map_err(|_| IconkitError::CatalogInvalid {
            path: path.to_path_buf(),
            message: format!("invalid category id '{raw}'; expected a non-negative integer"),
        })
}

/// Build an icon, or return the list of required attributes it lacks.
///
/// An `id` that is present but not a non-negative integer counts as missing.
fn parse_icon(
    node: Node<'_, '_>,
    category: CategoryId,
    kind: CatalogKind,
) -> Result<Icon, Vec<&'static str>> {
    let id = node.attribute("id").and_then(|raw| raw.parse::<IconId>().ok());
    let labels = node.attribute("labels");
    let path = node.attribute("path");

    let missing: Vec<&'static str> = kind
        .required_icon_attributes()
        .iter()
        .copied()
        .filter(|attr| match *attr {
            "id" => id.is_none(),
            "labels" => labels.is_none(),
            "path" => path.is_none(),
            _ => false,
        })
        .collect();

    match id {
        Some(id) if missing.is_empty() => Ok(Icon {
            id,
            category,
            labels: labels.map(split_labels).unwrap_or_default(),
            path: path.map(ToOwned::to_owned),
        }),
        _ => Err(missing),
    }
}

/// Render categories as catalog XML.
///
/// Icons without drawing data are written without a `path` attribute.
pub fn to_catalog_xml_string(categories: &[Category]) -> String {
    let mut xml = String::new();
    writeln!(xml, "<list>").expect("write to string");

    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            writeln!(xml).expect("write to string");
        }
        writeln!(
            xml,
            "    <category id=\"{}\" name=\"{}\">",
            category.id,
            escape_attr(&category.name)
        )
        .expect("write to string");

        for icon in &category.icons {
            write!(
                xml,
                "        <icon id=\"{}\" labels=\"{}\"",
                icon.id,
                escape_attr(&icon.labels.join(","))
            )
            .expect("write to string");
            if let Some(path) = &icon.path {
                write!(xml, " path=\"{}\"", escape_attr(path)).expect("write to string");
            }
            writeln!(xml, "/>").expect("write to string");
        }

        writeln!(xml, "    </category>").expect("write to string");
    }

    writeln!(xml, "</list>").expect("write to string");
    xml
}
