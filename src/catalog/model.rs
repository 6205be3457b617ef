//! In-memory icon catalog.
//!
//! The catalog keeps icon labels exactly as they were split from the
//! `labels` attribute, empty and repeated segments included, so the checker
//! can report formatting typos instead of silently normalizing them.

use serde::Serialize;

use super::{CategoryId, IconId};

/// Separator between label names in an icon's `labels` attribute.
pub const LABEL_SEPARATOR: char = ',';

/// Prefix marking a private label (an internal tag with no translation).
pub const PRIVATE_LABEL_PREFIX: char = '_';

/// Returns true if a label name is a private tag.
pub fn is_private_label(name: &str) -> bool {
    name.starts_with(PRIVATE_LABEL_PREFIX)
}

/// Split a raw `labels` attribute into its segments, keeping empty ones.
pub fn split_labels(raw: &str) -> Vec<String> {
    raw.split(LABEL_SEPARATOR).map(ToOwned::to_owned).collect()
}

/// Which flavour of catalog is being read.
///
/// The default catalog owns its graphics folder and every icon carries
/// labels and drawing data. An extra catalog only adds or overrides icons on
/// top of the default one, so icons there may omit both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CatalogKind {
    #[default]
    Default,
    Extra,
}

impl CatalogKind {
    /// Icon attributes that must be present for this kind of catalog.
    pub fn required_icon_attributes(self) -> &'static [&'static str] {
        match self {
            CatalogKind::Default => &["id", "labels", "path"],
            CatalogKind::Extra => &["id"],
        }
    }
}

/// A parsed icon catalog.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Categories in document order.
    pub categories: Vec<Category>,
    /// Icons that were skipped because required attributes were missing.
    pub incomplete: Vec<IncompleteIcon>,
}

impl Catalog {
    /// All complete icons, in document order.
    pub fn icons(&self) -> impl Iterator<Item = &Icon> {
        self.categories.iter().flat_map(|category| category.icons.iter())
    }

    pub fn icon_count(&self) -> usize {
        self.categories.iter().map(|c| c.icons.len()).sum()
    }
}

/// A catalog category and the icons it contains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icons: Vec<Icon>,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icons: Vec::new(),
        }
    }
}

/// A single icon entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub id: IconId,
    pub category: CategoryId,
    /// Raw label segments, in attribute order.
    pub labels: Vec<String>,
    /// Drawing data, absent only for icons of an extra catalog.
    pub path: Option<String>,
}

impl Icon {
    pub fn new(
        id: impl Into<IconId>,
        category: impl Into<CategoryId>,
        labels: &str,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            labels: split_labels(labels),
            path: Some(path.into()),
        }
    }

    /// Labels that belong to the translated vocabulary: non-empty and not private.
    pub fn public_labels(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .map(String::as_str)
            .filter(|label| !label.is_empty() && !is_private_label(label))
    }
}

/// An icon element missing one or more required attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncompleteIcon {
    pub category: CategoryId,
    /// Zero-based position of the icon inside its category.
    pub position: usize,
    /// The icon ID, when the `id` attribute itself was usable.
    pub id: Option<IconId>,
    pub missing: Vec<&'static str>,
}

impl IncompleteIcon {
    /// Human-readable identifier used in reports.
    pub fn locator(&self) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => format!("category {} icon #{}", self.category, self.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_labels_keeps_empty_segments() {
        assert_eq!(split_labels("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split_labels("a,"), vec!["a", ""]);
        assert_eq!(split_labels(""), vec![""]);
    }

    #[test]
    fn public_labels_skip_private_and_empty() {
        let icon = Icon::new(1u32, 0u32, "home,_internal,,house", "M0 0");
        let labels: Vec<&str> = icon.public_labels().collect();
        assert_eq!(labels, vec!["home", "house"]);
    }

    #[test]
    fn incomplete_icon_locator_falls_back_to_position() {
        let with_id = IncompleteIcon {
            category: CategoryId(2),
            position: 4,
            id: Some(IconId(9)),
            missing: vec!["path"],
        };
        let without_id = IncompleteIcon { id: None, ..with_id.clone() };
        assert_eq!(with_id.locator(), "9");
        assert_eq!(without_id.locator(), "category 2 icon #4");
    }
}
