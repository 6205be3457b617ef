//! Icon catalog types and XML I/O.
//!
//! The catalog is the master document grouping icons into categories. Each
//! icon has a numeric ID (also the name of its graphics file), a comma
//! separated list of label names and a drawing path.

pub mod ids;
pub mod io_xml;
mod model;

pub use ids::{CategoryId, IconId};
pub use io_xml::{from_catalog_str, read_catalog, to_catalog_xml_string};
pub use model::{
    is_private_label, split_labels, Catalog, CatalogKind, Category, Icon, IncompleteIcon,
    LABEL_SEPARATOR, PRIVATE_LABEL_PREFIX,
};
