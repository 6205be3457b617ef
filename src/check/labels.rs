//! Label pass: coverage of the vocabulary, value hygiene and references.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use super::catalog::Vocabulary;
use super::report::{FindingCode, ReportSection, SectionKind};
use crate::labels::{Label, LabelBody, LabelFile, LabelRef, LabelValue, RefKind};

/// Check one language's label file against the catalog vocabulary.
///
/// `borrowable` is the default icon set's label file for the same language,
/// available when checking an extra catalog. Labels defined there need not be
/// redefined, and cross-catalog references may point into it.
pub fn check_labels(
    path: &Path,
    file: &LabelFile,
    vocabulary: &Vocabulary,
    borrowable: Option<&LabelFile>,
) -> ReportSection {
    let borrowed: BTreeSet<&str> = borrowable
        .map(|default| default.labels.iter().map(|l| l.name.as_str()).collect())
        .unwrap_or_default();

    let mut defined: BTreeMap<&str, &Label> = BTreeMap::new();
    let mut matched: BTreeSet<&str> = BTreeSet::new();
    let mut duplicates = Vec::new();
    let mut unused = Vec::new();
    let mut unescaped = Vec::new();
    let mut references: Vec<(String, &LabelValue)> = Vec::new();

    for label in &file.labels {
        let name = label.name.as_str();
        if defined.contains_key(name) {
            duplicates.push(name);
            continue;
        }
        defined.insert(name, label);

        if vocabulary.contains(name) {
            matched.insert(name);
        } else if !borrowed.contains(name) {
            unused.push(name);
        }

        for (source, value) in label.values() {
            if has_unescaped_quote(value.text()) {
                unescaped.push(source.clone());
            }
            if value.is_reference() {
                references.push((source, value));
            }
        }
    }

    let missing = vocabulary
        .iter()
        .filter(|name| !matched.contains(name.as_str()) && !borrowed.contains(name.as_str()));

    let mut unknown = Vec::new();
    let mut chained = Vec::new();
    for (source, value) in &references {
        let item = format!("{} -> {}", source, value.text());
        match value {
            LabelValue::Reference(reference) => match resolve(reference, &defined, &borrowed) {
                Resolution::Resolved => {}
                Resolution::Unknown => unknown.push(item),
                Resolution::ToReference => chained.push(item),
            },
            _ => unknown.push(item),
        }
    }

    let mut section = ReportSection::new(SectionKind::LabelFile, path);
    section.push(FindingCode::UnusedLabel, unused);
    section.push(FindingCode::MissingLabel, missing);
    section.push(FindingCode::DuplicateLabel, duplicates);
    section.push(FindingCode::UnescapedQuotes, unescaped);
    section.push(FindingCode::SameValue, same_value_groups(defined.values().copied()));
    section.push(FindingCode::UnknownReference, unknown);
    section.push(FindingCode::ReferenceToReference, chained);

    tracing::debug!(
        path = %path.display(),
        labels = defined.len(),
        references = references.len(),
        findings = section.findings.len(),
        "checked label file"
    );

    section
}

/// Outcome of following one reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Resolved,
    /// No such label, no such alias, or an alias index on a single-valued label.
    Unknown,
    /// The target itself holds a reference.
    ToReference,
}

/// Follow a reference one step.
///
/// Cross-catalog references may point at a label that is itself a
/// reference, and may target the borrowable default labels when the label
/// is not defined locally. The default label set is only consulted for its
/// names; its values are not inspected.
pub fn resolve(
    reference: &LabelRef,
    defined: &BTreeMap<&str, &Label>,
    borrowed: &BTreeSet<&str>,
) -> Resolution {
    let cross_catalog = reference.kind == RefKind::CrossCatalog;

    let Some(target) = defined.get(reference.label.as_str()) else {
        return if cross_catalog && borrowed.contains(reference.label.as_str()) {
            Resolution::Resolved
        } else {
            Resolution::Unknown
        };
    };

    let value = match (&target.body, reference.alias) {
        (LabelBody::Value(value), None) => value,
        (LabelBody::Aliases(_), None) => return Resolution::Resolved,
        (LabelBody::Aliases(aliases), Some(index)) => match aliases.get(index) {
            Some(alias) => alias,
            None => return Resolution::Unknown,
        },
        (LabelBody::Value(_), Some(_)) => return Resolution::Unknown,
    };

    if value.is_reference() && !cross_catalog {
        Resolution::ToReference
    } else {
        Resolution::Resolved
    }
}

/// Returns true if the text has a `"` or `'` not preceded by a backslash.
pub fn has_unescaped_quote(text: &str) -> bool {
    let mut previous = None;
    for c in text.chars() {
        if (c == '"' || c == '\'') && previous != Some('\\') {
            return true;
        }
        previous = Some(c);
    }
    false
}

/// Groups of literal values sharing the same text, rendered `a/b$1/c`.
///
/// Labels are visited in name order. Groups come out in the order of their
/// first member.
pub fn same_value_groups<'a, I>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Label>,
{
    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut group_by_text: HashMap<&'a str, usize> = HashMap::new();

    for label in labels {
        for (source, value) in label.values() {
            let LabelValue::Literal(text) = value else {
                continue;
            };
            match group_by_text.get(text.as_str()) {
                Some(&group) => groups[group].push(source),
                None => {
                    group_by_text.insert(text.as_str(), groups.len());
                    groups.push(vec![source]);
                }
            }
        }
    }

    groups
        .into_iter()
        .filter(|members| members.len() > 1)
        .map(|members| members.join("/"))
        .collect()
}
