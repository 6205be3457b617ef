//! Label file model and reference decoding.
//!
//! A label either holds a single value or an ordered list of aliases. Any
//! value starting with [`REFERENCE_SIGIL`] points at another label (or one
//! alias of it) instead of holding text. The reference namespace and target
//! are decoded once here, so consumers match on [`LabelValue`] instead of
//! sniffing prefixes.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// First character of every reference value.
pub const REFERENCE_SIGIL: char = '@';

/// Prefix of a reference to a label of the same label file.
pub const LOCAL_REFERENCE_PREFIX: &str = "@label/";

/// Prefix of a reference to a label of the default icon set.
pub const CROSS_CATALOG_REFERENCE_PREFIX: &str = "@icdlabel/";

/// Separates a referenced label name from an alias index.
pub const ALIAS_SEPARATOR: char = '$';

/// Namespace of a label reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefKind {
    /// `@label/...`: resolved against the label file being read.
    Local,
    /// `@icdlabel/...`: resolved against the default icon set's labels,
    /// which an extra label file may borrow without redefining them.
    CrossCatalog,
}

/// Why a value starting with the reference sigil could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RefParseError {
    #[error("unknown reference namespace")]
    UnknownNamespace,
    #[error("empty reference target")]
    EmptyTarget,
    #[error("invalid alias index '{0}'")]
    InvalidAliasIndex(String),
}

/// A decoded reference to a label or to one alias of a label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelRef {
    raw: String,
    pub kind: RefKind,
    /// Name of the referenced label.
    pub label: String,
    /// Alias index, when the reference selects a single alias.
    pub alias: Option<usize>,
}

impl LabelRef {
    pub fn parse(raw: &str) -> Result<Self, RefParseError> {
        let (kind, target) = if let Some(rest) = raw.strip_prefix(LOCAL_REFERENCE_PREFIX) {
            (RefKind::Local, rest)
        } else if let Some(rest) = raw.strip_prefix(CROSS_CATALOG_REFERENCE_PREFIX) {
            (RefKind::CrossCatalog, rest)
        } else {
            return Err(RefParseError::UnknownNamespace);
        };

        let (label, alias) = match target.split_once(ALIAS_SEPARATOR) {
            Some((label, index)) => {
                let index = index
                    .parse::<usize>()
                    .map_err(|_| RefParseError::InvalidAliasIndex(index.to_string()))?;
                (label, Some(index))
            }
            None => (target, None),
        };

        if label.is_empty() {
            return Err(RefParseError::EmptyTarget);
        }

        Ok(Self {
            raw: raw.to_string(),
            kind,
            label: label.to_string(),
            alias,
        })
    }

    /// The reference exactly as written in the label file.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for LabelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// The value of a label or of one of its aliases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelValue {
    /// Plain text.
    Literal(String),
    /// A well-formed reference.
    Reference(LabelRef),
    /// Starts with the reference sigil but cannot be decoded.
    Malformed { raw: String, reason: RefParseError },
}

impl LabelValue {
    pub fn parse(text: &str) -> Self {
        if !text.starts_with(REFERENCE_SIGIL) {
            return LabelValue::Literal(text.to_string());
        }
        match LabelRef::parse(text) {
            Ok(reference) => LabelValue::Reference(reference),
            Err(reason) => LabelValue::Malformed {
                raw: text.to_string(),
                reason,
            },
        }
    }

    /// True for anything written with the reference sigil, decodable or not.
    pub fn is_reference(&self) -> bool {
        !matches!(self, LabelValue::Literal(_))
    }

    /// The value exactly as written.
    pub fn text(&self) -> &str {
        match self {
            LabelValue::Literal(text) => text,
            LabelValue::Reference(reference) => reference.as_str(),
            LabelValue::Malformed { raw, .. } => raw,
        }
    }
}

/// Either a single value or a list of aliases, never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelBody {
    Value(LabelValue),
    Aliases(Vec<LabelValue>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub body: LabelBody,
}

impl Label {
    pub fn with_value(name: impl Into<String>, value: &str) -> Self {
        Self {
            name: name.into(),
            body: LabelBody::Value(LabelValue::parse(value)),
        }
    }

    pub fn with_aliases(name: impl Into<String>, aliases: &[&str]) -> Self {
        Self {
            name: name.into(),
            body: LabelBody::Aliases(aliases.iter().map(|a| LabelValue::parse(a)).collect()),
        }
    }

    /// Every value of the label paired with the name used to report it:
    /// the label name for a direct value, `name$i` for alias `i`.
    pub fn values(&self) -> Vec<(String, &LabelValue)> {
        match &self.body {
            LabelBody::Value(value) => vec![(self.name.clone(), value)],
            LabelBody::Aliases(aliases) => aliases
                .iter()
                .enumerate()
                .map(|(i, alias)| (format!("{}{}{}", self.name, ALIAS_SEPARATOR, i), alias))
                .collect(),
        }
    }
}

/// All labels of one label file, in document order.
///
/// Repeated names are kept so they can be reported; lookups go through
/// [`LabelFile::index`], which keeps the first definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelFile {
    pub labels: Vec<Label>,
}

impl LabelFile {
    pub fn new(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    /// Name lookup keeping the first definition of each name.
    pub fn index(&self) -> BTreeMap<&str, &Label> {
        let mut index = BTreeMap::new();
        for label in &self.labels {
            index.entry(label.name.as_str()).or_insert(label);
        }
        index
    }

    /// Sort labels by name. The sort is stable, so repeated names keep their order.
    pub fn sort_by_name(&mut self) {
        self.labels.sort_by(|a, b| a.name.cmp(&b.name));
    }
}
