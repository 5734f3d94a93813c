//! Applying a sort order to in-memory records.
//!
//! Records expose their fields through [`SortFieldSource`]; the comparator
//! walks the order's items in precedence order and stops at the first one
//! that tells two records apart.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde_json::Value;
use tessera_model::{CaseHandling, NullHandling, SortOrder, SortOrderItem};

/// A field value as seen by the comparator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Text(String),
}

impl SortValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SortValue::Null)
    }

    pub fn float(value: f64) -> Self {
        SortValue::Float(OrderedFloat(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        SortValue::Text(value.into())
    }

    fn kind_rank(&self) -> u8 {
        match self {
            SortValue::Null => 0,
            SortValue::Bool(_) => 1,
            SortValue::Int(_) | SortValue::Float(_) => 2,
            SortValue::Text(_) => 3,
        }
    }

    // Nulls are handled by the caller.
    fn cmp_present(&self, other: &Self, case: CaseHandling) -> Ordering {
        match (self, other) {
            (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
            (SortValue::Int(a), SortValue::Int(b)) => a.cmp(b),
            (SortValue::Float(a), SortValue::Float(b)) => a.cmp(b),
            (SortValue::Int(a), SortValue::Float(b)) => {
                cmp_int_float(*a, b.0)
            }
            (SortValue::Float(a), SortValue::Int(b)) => {
                cmp_int_float(*b, a.0).reverse()
            }
            (SortValue::Text(a), SortValue::Text(b)) => {
                if case.ignores_case() {
                    a.to_lowercase()
                        .cmp(&b.to_lowercase())
                        .then_with(|| a.cmp(b))
                } else {
                    a.cmp(b)
                }
            }
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

/// Exact `i64` vs `f64` ordering. NaN sorts above every number, matching
/// `OrderedFloat`.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
    if float.is_nan() {
        return Ordering::Less;
    }
    if float.is_infinite() {
        return if float > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    let floor = float.floor();
    i128::from(int).cmp(&(floor as i128)).then_with(|| {
        if float > floor {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Int(value)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::float(value)
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Bool(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SortValue::Null, Into::into)
    }
}

/// Records that can be sorted by field name.
pub trait SortFieldSource {
    /// Value of `field`, or [`SortValue::Null`] when the record lacks it.
    fn sort_value(&self, field: &str) -> SortValue;
}

impl<T: SortFieldSource + ?Sized> SortFieldSource for &T {
    fn sort_value(&self, field: &str) -> SortValue {
        (**self).sort_value(field)
    }
}

/// JSON objects resolve dotted paths (`owner.name`) through nested objects.
impl SortFieldSource for Value {
    fn sort_value(&self, field: &str) -> SortValue {
        let mut current = self;
        for segment in field.split('.') {
            match current.get(segment) {
                Some(next) => current = next,
                None => return SortValue::Null,
            }
        }
        match current {
            Value::Null | Value::Array(_) | Value::Object(_) => SortValue::Null,
            Value::Bool(b) => SortValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => SortValue::Int(i),
                None => n.as_f64().map_or(SortValue::Null, SortValue::float),
            },
            Value::String(s) => SortValue::Text(s.clone()),
        }
    }
}

/// Compare two values under a single sort instruction.
pub fn compare_values(
    a: &SortValue,
    b: &SortValue,
    item: &SortOrderItem,
) -> Ordering {
    let descending = item.direction().is_descending();
    let directed = |ord: Ordering| if descending { ord.reverse() } else { ord };

    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => match item.null_handling() {
            NullHandling::NullsFirst => Ordering::Less,
            NullHandling::NullsLast => Ordering::Greater,
            // Null is the lowest value and follows the direction.
            NullHandling::Native => directed(Ordering::Less),
        },
        (false, true) => match item.null_handling() {
            NullHandling::NullsFirst => Ordering::Greater,
            NullHandling::NullsLast => Ordering::Less,
            NullHandling::Native => directed(Ordering::Greater),
        },
        (false, false) => directed(a.cmp_present(b, item.case_handling())),
    }
}

/// Compare two records under a full sort order. Natural-order items are
/// skipped.
pub fn compare<T: SortFieldSource + ?Sized>(
    a: &T,
    b: &T,
    order: &SortOrder,
) -> Ordering {
    order
        .iter()
        .filter_map(|item| item.field().map(|field| (field, item)))
        .map(|(field, item)| {
            compare_values(&a.sort_value(field), &b.sort_value(field), item)
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Stable in-place sort of `items` by `order`. Unsorted leaves them as is.
pub fn sort_by_order<T: SortFieldSource>(items: &mut [T], order: &SortOrder) {
    if order.iter().all(SortOrderItem::is_natural) {
        return;
    }
    items.sort_by(|a, b| compare(a, b, order));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::codec::parse;
    use serde_json::json;

    fn titles(items: &[Value]) -> Vec<&str> {
        items
            .iter()
            .map(|v| v["title"].as_str().unwrap_or("<none>"))
            .collect()
    }

    #[test]
    fn case_insensitive_by_default() {
        let mut items =
            vec![json!({"title": "beta"}), json!({"title": "Alpha"})];
        sort_by_order(&mut items, &parse(Some("title")));
        assert_eq!(titles(&items), vec!["Alpha", "beta"]);

        sort_by_order(&mut items, &parse(Some("title,asc,sensitive")));
        assert_eq!(titles(&items), vec!["Alpha", "beta"]);

        let mut items =
            vec![json!({"title": "alpha"}), json!({"title": "Beta"})];
        sort_by_order(&mut items, &parse(Some("title,asc,sensitive")));
        assert_eq!(titles(&items), vec!["Beta", "alpha"]);
    }

    #[test]
    fn native_nulls_follow_direction() {
        let mut items = vec![
            json!({"title": "a", "year": 2001}),
            json!({"title": "b"}),
            json!({"title": "c", "year": 1999}),
        ];
        sort_by_order(&mut items, &parse(Some("year")));
        assert_eq!(titles(&items), vec!["b", "c", "a"]);

        sort_by_order(&mut items, &parse(Some("year,desc")));
        assert_eq!(titles(&items), vec!["a", "c", "b"]);
    }

    #[test]
    fn pinned_nulls_ignore_direction() {
        let mut items = vec![
            json!({"title": "a", "year": 2001}),
            json!({"title": "b"}),
            json!({"title": "c", "year": 1999}),
        ];
        sort_by_order(
            &mut items,
            &parse(Some("year,desc,insensitive,nulls-last")),
        );
        assert_eq!(titles(&items), vec!["a", "c", "b"]);

        sort_by_order(
            &mut items,
            &parse(Some("year,asc,insensitive,nulls-last")),
        );
        assert_eq!(titles(&items), vec!["c", "a", "b"]);

        sort_by_order(
            &mut items,
            &parse(Some("year,desc,insensitive,nulls-first")),
        );
        assert_eq!(titles(&items), vec!["b", "a", "c"]);
    }

    #[test]
    fn later_items_break_ties() {
        let mut items = vec![
            json!({"title": "x", "rank": 1, "score": 2.5}),
            json!({"title": "y", "rank": 2, "score": 1.0}),
            json!({"title": "z", "rank": 1, "score": 9.0}),
        ];
        sort_by_order(&mut items, &parse(Some("rank;score,desc")));
        assert_eq!(titles(&items), vec!["z", "x", "y"]);
    }

    #[test]
    fn natural_items_keep_input_order() {
        let mut items = vec![json!({"title": "b"}), json!({"title": "a"})];
        sort_by_order(&mut items, &parse(Some("")));
        assert_eq!(titles(&items), vec!["b", "a"]);
    }

    #[test]
    fn dotted_paths_and_mixed_numbers() {
        let a = json!({"meta": {"size": 3}});
        let b = json!({"meta": {"size": 2.5}});
        assert_eq!(
            compare(&a, &b, &parse(Some("meta.size"))),
            Ordering::Greater
        );
        assert_eq!(a.sort_value("meta.missing"), SortValue::Null);
    }

    #[test]
    fn large_ints_and_floats_order_exactly() {
        let two_53: i64 = 1 << 53;
        let above = SortValue::Int(two_53 + 1);
        let float = SortValue::float(two_53 as f64);
        let exact = SortValue::Int(two_53);
        let item = SortOrderItem::by("n");

        assert_eq!(compare_values(&above, &float, &item), Ordering::Greater);
        assert_eq!(compare_values(&float, &exact, &item), Ordering::Equal);
        assert_eq!(compare_values(&above, &exact, &item), Ordering::Greater);
        assert_eq!(compare_values(&float, &above, &item), Ordering::Less);

        let mut items = vec![
            json!({"title": "above", "n": 9007199254740993_i64}),
            json!({"title": "float", "n": 9007199254740992.0}),
            json!({"title": "exact", "n": 9007199254740992_i64}),
        ];
        sort_by_order(&mut items, &parse(Some("n")));
        assert_eq!(titles(&items), vec!["float", "exact", "above"]);
    }

    #[test]
    fn int_float_edges() {
        let item = SortOrderItem::by("n");
        let cmp = |a: SortValue, b: SortValue| compare_values(&a, &b, &item);

        assert_eq!(cmp(SortValue::Int(5), 5.5.into()), Ordering::Less);
        assert_eq!(
            cmp(SortValue::Int(-5), (-5.5).into()),
            Ordering::Greater
        );
        assert_eq!(
            cmp(SortValue::Int(i64::MAX), f64::NAN.into()),
            Ordering::Less
        );
        assert_eq!(
            cmp(SortValue::Int(i64::MIN), f64::NEG_INFINITY.into()),
            Ordering::Greater
        );
        assert_eq!(
            cmp(f64::INFINITY.into(), SortValue::Int(i64::MAX)),
            Ordering::Greater
        );
    }

    #[test]
    fn option_conversion() {
        assert_eq!(SortValue::from(None::<i64>), SortValue::Null);
        assert_eq!(SortValue::from(Some("x")), SortValue::text("x"));
    }
}
