//! Stats report types and terminal formatting.

use serde::Serialize;
use std::fmt;

use crate::catalog::IconId;

/// Label usage statistics for a catalog.
#[derive(Clone, Debug, Default, Serialize)]
pub struct StatsReport {
    /// Labels grouped by how many icons use them, fewest uses first.
    pub labels_by_uses: Vec<LabelUseGroup>,
    /// Icons grouped by how many labels they have, fewest labels first.
    pub icons_by_label_count: Vec<IconCountGroup>,
}

/// Labels used by the same number of icons.
#[derive(Clone, Debug, Serialize)]
pub struct LabelUseGroup {
    pub uses: usize,
    /// Label names, alphabetical.
    pub labels: Vec<String>,
}

/// Icons having the same number of labels.
#[derive(Clone, Debug, Serialize)]
pub struct IconCountGroup {
    pub label_count: usize,
    /// Icon IDs, ascending.
    pub icons: Vec<IconId>,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Labels by uses:")?;
        for group in &self.labels_by_uses {
            writeln!(
                f,
                "{} uses ({}) -> {}",
                group.uses,
                group.labels.len(),
                group.labels.join(", ")
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Icons by number of labels:")?;
        for group in &self.icons_by_label_count {
            let ids: Vec<String> = group.icons.iter().map(ToString::to_string).collect();
            writeln!(
                f,
                "{} labels ({}) -> {}",
                group.label_count,
                group.icons.len(),
                ids.join(", ")
            )?;
        }

        Ok(())
    }
}
