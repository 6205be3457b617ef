//! Check report types.
//!
//! A report has one section per input file. Each section holds one finding
//! per kind of problem, listing every offending identifier, so a single run
//! surfaces the full set of problems.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// The result of checking a catalog and its label files.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CheckReport {
    /// One section per checked file, catalog first.
    pub sections: Vec<ReportSection>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Number of offending items reported at ERROR level.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of offending items reported at WARNING level.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Returns true if there are neither errors nor warnings.
    pub fn is_ok_strict(&self) -> bool {
        self.error_count() == 0 && self.warning_count() == 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.sections
            .iter()
            .flat_map(|section| section.findings.iter())
            .filter(|finding| finding.severity == severity)
            .map(|finding| finding.items.len())
            .sum()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

/// What kind of file a section describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    IconFile,
    LabelFile,
}

/// Findings for one input file.
#[derive(Clone, Debug, Serialize)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub path: PathBuf,
    pub findings: Vec<Finding>,
}

impl ReportSection {
    pub fn new(kind: SectionKind, path: &Path) -> Self {
        Self {
            kind,
            path: path.to_path_buf(),
            findings: Vec::new(),
        }
    }

    /// Record a finding. Nothing is recorded when `items` is empty.
    pub fn push<I, S>(&mut self, code: FindingCode, items: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
        if !items.is_empty() {
            self.findings.push(Finding::new(code, items));
        }
    }

    /// Items reported under `code`, empty if the check passed.
    pub fn items(&self, code: FindingCode) -> &[String] {
        self.findings
            .iter()
            .find(|finding| finding.code == code)
            .map(|finding| finding.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self.kind {
            SectionKind::IconFile => "Icon file",
            SectionKind::LabelFile => "Label file",
        };
        writeln!(f, "-> {}: {}", title, self.path.display())?;
        for finding in &self.findings {
            writeln!(f, "     {finding}")?;
        }
        writeln!(f, "     DONE")
    }
}

/// All offending items for one kind of problem.
#[derive(Clone, Debug, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub code: FindingCode,
    pub items: Vec<String>,
}

impl Finding {
    pub fn new(code: FindingCode, items: Vec<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            items,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}: {}",
            self.severity,
            self.items.len(),
            self.code.description(),
            self.items.join(", ")
        )
    }
}

/// How urgent a finding is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// An optional improvement.
    Info,
    /// Should be fixed, but consumers keep working.
    Warning,
    /// Consumers of the files will malfunction.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        })
    }
}

/// A stable code identifying the type of finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCode {
    // Catalog
    /// Several icons share an ID.
    DuplicateIconId,
    /// A graphics file has no matching icon.
    UnusedSvgFile,
    /// An icon has no graphics file.
    MissingSvgFile,
    /// An icon lacks a required attribute.
    MissingAttributes,
    /// An icon's label list has an empty entry (stray comma).
    EmptyLabel,
    /// An icon lists the same label twice.
    DuplicateIconLabel,

    // Label files
    /// A label is defined but no icon uses it.
    UnusedLabel,
    /// An icon uses a label this file does not define.
    MissingLabel,
    /// A label name is defined twice.
    DuplicateLabel,
    /// A value contains a quote without a backslash before it.
    UnescapedQuotes,
    /// Several values hold the same text and could share a reference.
    SameValue,
    /// A reference points at no label or alias.
    UnknownReference,
    /// A reference points at another reference.
    ReferenceToReference,
}

impl FindingCode {
    pub fn severity(self) -> Severity {
        match self {
            FindingCode::UnusedSvgFile | FindingCode::MissingSvgFile | FindingCode::SameValue => {
                Severity::Info
            }
            FindingCode::UnusedLabel | FindingCode::MissingLabel => Severity::Warning,
            FindingCode::DuplicateIconId
            | FindingCode::MissingAttributes
            | FindingCode::EmptyLabel
            | FindingCode::DuplicateIconLabel
            | FindingCode::DuplicateLabel
            | FindingCode::UnescapedQuotes
            | FindingCode::UnknownReference
            | FindingCode::ReferenceToReference => Severity::Error,
        }
    }

    /// Text used after the item count in the report line.
    pub fn description(self) -> &'static str {
        match self {
            FindingCode::DuplicateIconId => "duplicate icon IDs",
            FindingCode::UnusedSvgFile => "unused SVG files",
            FindingCode::MissingSvgFile => "missing SVG files",
            FindingCode::MissingAttributes => "icons with missing attributes",
            FindingCode::EmptyLabel => "icons with empty labels",
            FindingCode::DuplicateIconLabel => "icons with duplicate labels",
            FindingCode::UnusedLabel => "unused labels",
            FindingCode::MissingLabel => "missing labels",
            FindingCode::DuplicateLabel => "duplicate labels",
            FindingCode::UnescapedQuotes => "labels with unescaped quotes",
            FindingCode::SameValue => "label sets with same value",
            FindingCode::UnknownReference => "unknown label references",
            FindingCode::ReferenceToReference => "references to another reference",
        }
    }
}
