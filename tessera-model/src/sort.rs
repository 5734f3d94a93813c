//! Sort instructions.
//!
//! A [`SortOrder`] is an ordered list of [`SortOrderItem`]s. Position in the
//! list is tie-break precedence: the first item decides, later items only
//! break ties left by earlier ones. An empty order means "unsorted".

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Direction a single field is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn all() -> &'static [SortDirection] {
        &[SortDirection::Asc, SortDirection::Desc]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == SortDirection::default()
    }

    pub fn is_descending(&self) -> bool {
        *self == SortDirection::Desc
    }
}

/// Whether text comparison honours letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CaseHandling {
    Sensitive,
    #[default]
    Insensitive,
}

impl CaseHandling {
    pub fn all() -> &'static [CaseHandling] {
        &[CaseHandling::Sensitive, CaseHandling::Insensitive]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseHandling::Sensitive => "sensitive",
            CaseHandling::Insensitive => "insensitive",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == CaseHandling::default()
    }

    pub fn ignores_case(&self) -> bool {
        *self == CaseHandling::Insensitive
    }
}

/// Where missing values land relative to present ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NullHandling {
    /// Defer to the backing store's own null ordering.
    #[default]
    Native,
    NullsFirst,
    NullsLast,
}

impl NullHandling {
    pub fn all() -> &'static [NullHandling] {
        &[
            NullHandling::Native,
            NullHandling::NullsFirst,
            NullHandling::NullsLast,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NullHandling::Native => "native",
            NullHandling::NullsFirst => "nulls-first",
            NullHandling::NullsLast => "nulls-last",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == NullHandling::default()
    }
}

macro_rules! token_enum_impls {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let token = s.trim();
                <$ty>::all()
                    .iter()
                    .copied()
                    .find(|candidate| {
                        candidate.as_str().eq_ignore_ascii_case(token)
                    })
                    .ok_or_else(|| ModelError::unknown($kind, token))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

token_enum_impls!(SortDirection, "direction");
token_enum_impls!(CaseHandling, "case");
token_enum_impls!(NullHandling, "nulls");

/// One field's sort instruction.
///
/// A `None` field is the natural-order placeholder: it sorts nothing but
/// still occupies a position in the order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SortOrderItem {
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "serde_support::empty_as_none")
    )]
    field: Option<String>,
    direction: SortDirection,
    case_handling: CaseHandling,
    null_handling: NullHandling,
}

impl SortOrderItem {
    pub fn new(
        field: Option<String>,
        direction: SortDirection,
        case_handling: CaseHandling,
        null_handling: NullHandling,
    ) -> Self {
        Self {
            field: field.filter(|f| !f.is_empty()),
            direction,
            case_handling,
            null_handling,
        }
    }

    /// Item for `field` with every other slot at its default.
    pub fn by(field: impl Into<String>) -> Self {
        Self::default().with_field(Some(field.into()))
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::by(field)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::by(field).with_direction(SortDirection::Desc)
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn case_handling(&self) -> CaseHandling {
        self.case_handling
    }

    pub fn null_handling(&self) -> NullHandling {
        self.null_handling
    }

    pub fn is_natural(&self) -> bool {
        self.field.is_none()
    }

    pub fn with_field(mut self, field: Option<String>) -> Self {
        self.field = field.filter(|f| !f.is_empty());
        self
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_case_handling(mut self, case_handling: CaseHandling) -> Self {
        self.case_handling = case_handling;
        self
    }

    pub fn with_null_handling(mut self, null_handling: NullHandling) -> Self {
        self.null_handling = null_handling;
        self
    }
}

/// Ordered sequence of sort instructions. Empty means unsorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SortOrder(Vec<SortOrderItem>);

impl SortOrder {
    pub fn new(items: Vec<SortOrderItem>) -> Self {
        Self(items)
    }

    pub fn unsorted() -> Self {
        Self(Vec::new())
    }

    pub fn is_unsorted(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[SortOrderItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortOrderItem> {
        self.0.iter()
    }

    pub fn into_items(self) -> Vec<SortOrderItem> {
        self.0
    }

    /// Appends `item` with the lowest precedence so far.
    pub fn and(mut self, item: SortOrderItem) -> Self {
        self.0.push(item);
        self
    }

    /// Explicit instruction for `field`, or a default one carrying `field`
    /// when the order does not mention it.
    pub fn item_for(&self, field: &str) -> SortOrderItem {
        self.0
            .iter()
            .find(|item| item.field() == Some(field))
            .cloned()
            .unwrap_or_else(|| SortOrderItem::by(field))
    }
}

impl From<Vec<SortOrderItem>> for SortOrder {
    fn from(items: Vec<SortOrderItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<SortOrderItem> for SortOrder {
    fn from_iter<I: IntoIterator<Item = SortOrderItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SortOrder {
    type Item = SortOrderItem;
    type IntoIter = std::vec::IntoIter<SortOrderItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SortOrder {
    type Item = &'a SortOrderItem;
    type IntoIter = std::slice::Iter<'a, SortOrderItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use serde::{Deserialize, Deserializer};

    pub(super) fn empty_as_none<'de, D>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|f| !f.is_empty()))
    }
}
