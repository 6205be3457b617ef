//! Per-language label files.
//!
//! Each language directory (`xml`, `xml-fr`, ...) holds one label file
//! translating the label names used by the catalog.

pub mod io_xml;
mod model;

use std::fmt;
use std::path::{Path, PathBuf};

pub use io_xml::{from_label_str, read_label_file, to_label_xml_string};
pub use model::{
    Label, LabelBody, LabelFile, LabelRef, LabelValue, RefKind, RefParseError, ALIAS_SEPARATOR,
    CROSS_CATALOG_REFERENCE_PREFIX, LOCAL_REFERENCE_PREFIX, REFERENCE_SIGIL,
};

/// A label language, identified by its resource directory suffix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// The untranslated resource directory.
    Primary,
    /// A translation, e.g. `fr` for the `-fr` directory.
    Secondary(String),
}

impl Language {
    /// The primary language followed by the given secondary codes.
    pub fn with_secondaries<S: AsRef<str>>(codes: &[S]) -> Vec<Language> {
        std::iter::once(Language::Primary)
            .chain(
                codes
                    .iter()
                    .map(|code| code.as_ref().trim())
                    .filter(|code| !code.is_empty())
                    .map(|code| Language::Secondary(code.to_string())),
            )
            .collect()
    }

    /// Directory suffix: empty for the primary language, `-xx` otherwise.
    pub fn suffix(&self) -> String {
        match self {
            Language::Primary => String::new(),
            Language::Secondary(code) => format!("-{code}"),
        }
    }

    /// Path of this language's label file, given the primary resource directory.
    ///
    /// `res/xml` with `fr` resolves to `res/xml-fr/<file_name>`.
    pub fn label_path(&self, base_dir: &Path, file_name: &str) -> PathBuf {
        let mut dir = base_dir.as_os_str().to_os_string();
        dir.push(self.suffix());
        PathBuf::from(dir).join(file_name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Primary => write!(f, "primary"),
            Language::Secondary(code) => write!(f, "{code}"),
        }
    }
}
