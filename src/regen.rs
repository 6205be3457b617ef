//! Catalog regeneration: sort icons and renumber them.
//!
//! Icons are ordered by category, then by label list, then by old ID, and
//! each icon's new ID becomes its position in that order. Graphics files are
//! renamed to follow.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, Category, CategoryId, Icon, IconId};
use crate::error::IconkitError;
use crate::graphics::scan_numbered_svgs;

/// Prefix given to graphics files between the two rename phases.
const PENDING_PREFIX: char = '_';

/// A regenerated catalog and the old-to-new ID mapping.
#[derive(Clone, Debug)]
pub struct Regenerated {
    pub categories: Vec<Category>,
    pub renumbered: BTreeMap<IconId, IconId>,
}

/// Sort and renumber every icon of a catalog.
///
/// Every icon must have drawing data; an icon with missing attributes makes
/// the catalog unusable for regeneration.
pub fn regenerate(catalog: &Catalog, path: &Path) -> Result<Regenerated, IconkitError> {
    if let Some(icon) = catalog.incomplete.first() {
        return Err(IconkitError::CatalogInvalid {
            path: path.to_path_buf(),
            message: format!(
                "icon {} is missing {}",
                icon.locator(),
                icon.missing.join(", ")
            ),
        });
    }

    let names: HashMap<CategoryId, &str> = catalog
        .categories
        .iter()
        .map(|category| (category.id, category.name.as_str()))
        .collect();

    let mut icons: Vec<&Icon> = catalog.icons().collect();
    icons.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.labels.cmp(&b.labels))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut categories: Vec<Category> = Vec::new();
    let mut renumbered = BTreeMap::new();
    for (position, icon) in icons.into_iter().enumerate() {
        let new_id = u32::try_from(position)
            .map(IconId::new)
            .map_err(|_| IconkitError::CatalogInvalid {
                path: path.to_path_buf(),
                message: format!("too many icons to renumber ({position})"),
            })?;
        if renumbered.insert(icon.id, new_id).is_some() {
            return Err(IconkitError::CatalogInvalid {
                path: path.to_path_buf(),
                message: format!("icon ID {} is used more than once", icon.id),
            });
        }

        if categories.last().map(|c| c.id) != Some(icon.category) {
            let name = names.get(&icon.category).copied().unwrap_or_default();
            categories.push(Category::new(icon.category, name));
        }
        if let Some(category) = categories.last_mut() {
            category.icons.push(Icon {
                id: new_id,
                ..icon.clone()
            });
        }
    }

    Ok(Regenerated {
        categories,
        renumbered,
    })
}

/// Pending renames of a graphics folder, checked for conflicts.
#[derive(Clone, Debug, Default)]
pub struct RenamePlan {
    /// `(old, staged, target)` paths, in old ID order.
    moves: Vec<(PathBuf, PathBuf, PathBuf)>,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move every file to `_<new>.svg`, then drop the prefix.
    ///
    /// The two phases keep a new name from colliding with an old name still
    /// waiting to be renamed. Returns the number of renamed files.
    pub fn apply(self) -> Result<usize, IconkitError> {
        for (old, staged, _) in &self.moves {
            rename(old, staged)?;
        }
        for (_, staged, target) in &self.moves {
            rename(staged, target)?;
        }
        tracing::info!(renamed = self.moves.len(), "renamed graphics files");
        Ok(self.moves.len())
    }
}

/// Work out how `<old>.svg` graphics files become `<new>.svg`.
///
/// Files whose ID is not in the mapping are left alone. The plan is refused
/// when a target name is taken by such a file, or when a staging name
/// `_<new>.svg` already exists, since either rename would overwrite it.
pub fn plan_graphics_renames(
    dir: &Path,
    renumbered: &BTreeMap<IconId, IconId>,
) -> Result<RenamePlan, IconkitError> {
    let files = scan_numbered_svgs(dir)?;

    let mut moves = Vec::new();
    let mut sources: HashSet<PathBuf> = HashSet::new();
    for (old_id, old_path) in files {
        let Some(new_id) = renumbered.get(&old_id) else {
            tracing::warn!(file = %old_path.display(), "graphics file has no icon, left untouched");
            continue;
        };
        let staged = dir.join(format!("{PENDING_PREFIX}{new_id}.svg"));
        let target = dir.join(format!("{new_id}.svg"));
        sources.insert(old_path.clone());
        moves.push((old_path, staged, target));
    }

    for (_, staged, target) in &moves {
        if staged.exists() {
            return Err(IconkitError::GraphicsConflict {
                path: staged.clone(),
                message: "staging file already exists".to_string(),
            });
        }
        if target.exists() && !sources.contains(target) {
            return Err(IconkitError::GraphicsConflict {
                path: target.clone(),
                message: "file belongs to no icon and would be overwritten".to_string(),
            });
        }
    }

    Ok(RenamePlan { moves })
}

/// Rename `<old>.svg` graphics files to `<new>.svg`.
///
/// Nothing is renamed if the plan has a conflict. Returns the number of
/// renamed files.
pub fn rename_graphics(
    dir: &Path,
    renumbered: &BTreeMap<IconId, IconId>,
) -> Result<usize, IconkitError> {
    plan_graphics_renames(dir, renumbered)?.apply()
}

fn rename(from: &Path, to: &Path) -> Result<(), IconkitError> {
    fs::rename(from, to).map_err(|source| IconkitError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}
