//! Newtype IDs for icons and categories.
//!
//! Both kinds of ID are small non-negative integers in the XML, so keeping
//! them apart in the type system prevents passing a category where an icon
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unique identifier for an icon in the catalog.
///
/// The icon's graphics file is named after it (`<id>.svg`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub u32);

impl IconId {
    /// Creates a new IconId.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying value.
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IconId({})", self.0)
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IconId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

impl From<u32> for IconId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of a catalog category.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl CategoryId {
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryId({})", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_id_orders_numerically() {
        let mut ids = vec![IconId::new(10), IconId::new(2), IconId::new(33)];
        ids.sort();
        assert_eq!(ids, vec![IconId(2), IconId(10), IconId(33)]);
    }

    #[test]
    fn parse_rejects_negative_and_garbage() {
        assert_eq!("42".parse::<IconId>().ok(), Some(IconId(42)));
        assert!("-1".parse::<IconId>().is_err());
        assert!("abc".parse::<CategoryId>().is_err());
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(IconId::new(7).to_string(), "7");
        assert_eq!(format!("{:?}", CategoryId::new(3)), "CategoryId(3)");
    }
}
