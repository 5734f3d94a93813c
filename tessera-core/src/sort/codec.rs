//! Text codec for sort orders.
//!
//! ```text
//! sortOrderText := item (chainSep item)*
//! item          := field? (argSep direction)? (argSep case)? (argSep nulls)?
//! ```
//!
//! Parsing is lenient: an unrecognized token leaves its slot at the default
//! and never fails the parse. Serialization writes each item up to its last
//! non-default slot, keeping earlier slots positional.

use std::str::FromStr;

use tessera_model::{ModelError, SortOrder, SortOrderItem};
use tracing::debug;

pub const DEFAULT_CHAIN_SEPARATOR: &str = ";";
pub const DEFAULT_ARGUMENT_SEPARATOR: &str = ",";

/// Separators used by [`SortOrderCodec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    chain: String,
    argument: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            chain: DEFAULT_CHAIN_SEPARATOR.to_string(),
            argument: DEFAULT_ARGUMENT_SEPARATOR.to_string(),
        }
    }
}

impl Separators {
    /// Absent or empty separators fall back to the built-in defaults.
    pub fn new(chain: Option<&str>, argument: Option<&str>) -> Self {
        let pick = |value: Option<&str>, fallback: &str| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        Self {
            chain: pick(chain, DEFAULT_CHAIN_SEPARATOR),
            argument: pick(argument, DEFAULT_ARGUMENT_SEPARATOR),
        }
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }

    pub fn argument(&self) -> &str {
        &self.argument
    }
}

/// Parses and serializes the sort-order text grammar.
#[derive(Debug, Clone, Default)]
pub struct SortOrderCodec {
    separators: Separators,
}

impl SortOrderCodec {
    pub fn new(separators: Separators) -> Self {
        Self { separators }
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Parse sort-order text.
    ///
    /// `None` is unsorted. `Some("")` is a single natural-order item, not an
    /// empty order.
    pub fn parse(&self, text: Option<&str>) -> SortOrder {
        let Some(text) = text else {
            return SortOrder::unsorted();
        };

        text.split(self.separators.chain())
            .map(|chunk| self.parse_item(chunk))
            .collect()
    }

    /// Parse every value of a repeated parameter (`?sort=a,desc&sort=b`),
    /// concatenating the items in order.
    pub fn parse_all<I, S>(&self, values: I) -> SortOrder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .flat_map(|value| self.parse(Some(value.as_ref())).into_items())
            .collect()
    }

    fn parse_item(&self, chunk: &str) -> SortOrderItem {
        let mut tokens = chunk.split(self.separators.argument()).map(str::trim);

        let field = tokens
            .next()
            .filter(|field| !field.is_empty())
            .map(str::to_string);
        let direction = lenient(tokens.next());
        let case_handling = lenient(tokens.next());
        let null_handling = lenient(tokens.next());

        let extra: Vec<&str> = tokens.collect();
        if !extra.is_empty() {
            debug!(chunk, ?extra, "ignoring trailing sort tokens");
        }

        SortOrderItem::new(field, direction, case_handling, null_handling)
    }

    /// Render a sort order as text. Unsorted renders as `""`.
    pub fn serialize(&self, order: &SortOrder) -> String {
        order
            .iter()
            .map(|item| self.serialize_item(item))
            .collect::<Vec<_>>()
            .join(self.separators.chain())
    }

    /// Like [`serialize`](Self::serialize), but unsorted yields `None` so
    /// that `parse(encode(x))` is the identity for every order.
    pub fn encode(&self, order: &SortOrder) -> Option<String> {
        if order.is_unsorted() {
            None
        } else {
            Some(self.serialize(order))
        }
    }

    fn serialize_item(&self, item: &SortOrderItem) -> String {
        let slots = [
            (item.direction().as_str(), item.direction().is_default()),
            (
                item.case_handling().as_str(),
                item.case_handling().is_default(),
            ),
            (
                item.null_handling().as_str(),
                item.null_handling().is_default(),
            ),
        ];

        let mut out = item.field().unwrap_or_default().to_string();
        if let Some(last) = slots.iter().rposition(|(_, default)| !default) {
            for (token, _) in &slots[..=last] {
                out.push_str(self.separators.argument());
                out.push_str(token);
            }
        }
        out
    }
}

fn lenient<T>(token: Option<&str>) -> T
where
    T: FromStr<Err = ModelError> + Default,
{
    match token {
        None | Some("") => T::default(),
        Some(token) => token.parse().unwrap_or_else(|err| {
            debug!(%err, "falling back to default sort token");
            T::default()
        }),
    }
}

/// Parse with the default separators.
pub fn parse(text: Option<&str>) -> SortOrder {
    SortOrderCodec::default().parse(text)
}

/// Serialize with the default separators.
pub fn serialize(order: &SortOrder) -> String {
    SortOrderCodec::default().serialize(order)
}

/// Encode with the default separators; `None` for unsorted.
pub fn encode(order: &SortOrder) -> Option<String> {
    SortOrderCodec::default().encode(order)
}
