//! Mapping between [`SortOrder`] and a generic sort/page request.

use tessera_model::{
    CaseHandling, NullHandling, SortDirection, SortOrder, SortOrderItem,
};

use super::codec::SortOrderCodec;

/// Page size used when a request does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// One property's ordering in a [`Sort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub property: String,
    pub direction: SortDirection,
    pub ignore_case: bool,
    pub null_handling: NullHandling,
}

impl Order {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: SortDirection::Asc,
            ignore_case: false,
            null_handling: NullHandling::Native,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            direction: SortDirection::Desc,
            ..Self::asc(property)
        }
    }

    pub fn ignoring_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub fn with_null_handling(mut self, null_handling: NullHandling) -> Self {
        self.null_handling = null_handling;
        self
    }
}

/// Property-keyed sort as understood by paging/query layers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_for(&self, property: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.property == property)
    }
}

/// Convert a sort order into a [`Sort`], preserving precedence.
///
/// Natural-order placeholders carry no property and produce no [`Order`].
pub fn to_sort(order: &SortOrder) -> Sort {
    let orders = order
        .iter()
        .filter_map(|item| {
            item.field().map(|field| Order {
                property: field.to_string(),
                direction: item.direction(),
                ignore_case: item.case_handling().ignores_case(),
                null_handling: item.null_handling(),
            })
        })
        .collect();
    Sort { orders }
}

/// Convert a [`Sort`] back into a sort order, preserving precedence.
pub fn from_sort(sort: &Sort) -> SortOrder {
    sort.orders
        .iter()
        .map(|order| {
            let case_handling = if order.ignore_case {
                CaseHandling::Insensitive
            } else {
                CaseHandling::Sensitive
            };
            SortOrderItem::new(
                Some(order.property.clone()),
                order.direction,
                case_handling,
                order.null_handling,
            )
        })
        .collect()
}

impl From<&SortOrder> for Sort {
    fn from(order: &SortOrder) -> Self {
        to_sort(order)
    }
}

impl From<&Sort> for SortOrder {
    fn from(sort: &Sort) -> Self {
        from_sort(sort)
    }
}

/// Zero-based page request with an attached sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::unsorted(),
        }
    }
}

impl PageRequest {
    /// A size of zero is raised to one.
    pub fn new(page: u32, size: u32, sort: Sort) -> Self {
        Self {
            page,
            size: size.max(1),
            sort,
        }
    }

    /// Build a request from raw query parameters, e.g.
    /// `?page=2&size=50&sort=title,desc&sort=year`.
    pub fn from_query<I, S>(
        page: Option<u32>,
        size: Option<u32>,
        sort_values: I,
        codec: &SortOrderCodec,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let order = codec.parse_all(sort_values);
        Self::new(
            page.unwrap_or(0),
            size.unwrap_or(DEFAULT_PAGE_SIZE),
            to_sort(&order),
        )
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }
}
