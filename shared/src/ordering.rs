//! Display ordering for hero slides, products and services
//!
//! Items carry a free integer `order`. Values need not be unique, contiguous
//! or zero-based; only their relative order matters. The canonical display
//! order is `order` ascending, then `createdAt` descending, then id ascending.
//!
//! The dashboard moves one item at a time: [`plan_move`] swaps the `order`
//! values of the item and its displayed neighbour and yields the two pairs to
//! submit to the reorder endpoint.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::{HeroSlide, Product, Service};

/// Capability shared by every orderable document kind
pub trait Orderable {
    fn id(&self) -> &str;
    fn order(&self) -> i64;
    fn is_active(&self) -> bool;
    /// Unix millis
    fn created_at(&self) -> i64;
}

/// Canonical comparison: `(order ASC, created_at DESC, id ASC)`
pub fn canonical_cmp<T: Orderable>(a: &T, b: &T) -> Ordering {
    a.order()
        .cmp(&b.order())
        .then_with(|| b.created_at().cmp(&a.created_at()))
        .then_with(|| a.id().cmp(b.id()))
}

/// Sort a slice into canonical display order
pub fn sort_canonical<T: Orderable>(items: &mut [T]) {
    items.sort_by(canonical_cmp);
}

/// One `(id, order)` pair of a reorder request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub order: i64,
}

impl OrderUpdate {
    pub fn new(id: impl Into<String>, order: i64) -> Self {
        Self {
            id: id.into(),
            order,
        }
    }
}

/// Reorder request body
///
/// The list is accepted under `items` or under the collection's own name
/// (`slides`, `products`, `services`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    #[serde(alias = "slides", alias = "products", alias = "services")]
    pub items: Vec<OrderUpdate>,
}

/// Outcome of applying a reorder batch
///
/// A batch never fails as a whole: unknown ids are skipped and pairs whose
/// write errored are counted as failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderReport {
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ReorderReport {
    pub fn total(&self) -> usize {
        self.updated + self.skipped + self.failed
    }
}

/// Reorder endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderResponse {
    pub message: String,
    #[serde(flatten)]
    pub report: ReorderReport,
}

/// Direction of a single-step move in the dashboard list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Plan a one-step move of `id` within the displayed sequence
///
/// Returns the two pairs to submit: the moved item takes its neighbour's
/// `order` and the neighbour takes the moved item's. Returns `None` when the
/// id is not displayed, or when moving the first item up or the last one down.
///
/// Equal `order` values are swapped as-is, so such a move does not change the
/// canonical order.
pub fn plan_move<T: Orderable>(
    displayed: &[T],
    id: &str,
    direction: MoveDirection,
) -> Option<[OrderUpdate; 2]> {
    let index = displayed.iter().position(|item| item.id() == id)?;
    let neighbour = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => Some(index + 1).filter(|n| *n < displayed.len())?,
    };

    let moved = &displayed[index];
    let other = &displayed[neighbour];
    Some([
        OrderUpdate::new(moved.id(), other.order()),
        OrderUpdate::new(other.id(), moved.order()),
    ])
}

macro_rules! impl_orderable {
    ($($ty:ty),*) => {
        $(
            impl Orderable for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
                fn order(&self) -> i64 {
                    self.order
                }
                fn is_active(&self) -> bool {
                    self.active
                }
                fn created_at(&self) -> i64 {
                    self.created_at
                }
            }
        )*
    };
}

impl_orderable!(HeroSlide, Product, Service);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        id: &'static str,
        order: i64,
        active: bool,
        created_at: i64,
    }

    impl Orderable for Item {
        fn id(&self) -> &str {
            self.id
        }
        fn order(&self) -> i64 {
            self.order
        }
        fn is_active(&self) -> bool {
            self.active
        }
        fn created_at(&self) -> i64 {
            self.created_at
        }
    }

    fn item(id: &'static str, order: i64, created_at: i64) -> Item {
        Item {
            id,
            order,
            active: true,
            created_at,
        }
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_sort_by_order_then_newest_first() {
        let mut items = vec![
            item("a", 0, 100),
            item("b", 0, 200),
            item("c", -5, 50),
            item("d", 7, 300),
        ];
        sort_canonical(&mut items);
        assert_eq!(ids(&items), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_sort_full_tie_uses_id() {
        let mut items = vec![item("z", 1, 10), item("m", 1, 10), item("a", 1, 10)];
        sort_canonical(&mut items);
        assert_eq!(ids(&items), vec!["a", "m", "z"]);
    }

    #[test]
    fn test_sort_gaps_are_kept() {
        let mut items = vec![item("x", 100, 0), item("y", 3, 0), item("z", 40, 0)];
        sort_canonical(&mut items);
        assert_eq!(ids(&items), vec!["y", "z", "x"]);
        assert_eq!(items[0].order, 3);
    }

    #[test]
    fn test_active_filter_preserves_relative_order() {
        let mut items = vec![
            item("a", 1, 0),
            Item {
                active: false,
                ..item("b", 2, 0)
            },
            item("c", 3, 0),
        ];
        sort_canonical(&mut items);
        let active: Vec<&str> = items
            .iter()
            .filter(|i| i.is_active())
            .map(|i| i.id)
            .collect();
        assert_eq!(active, vec!["a", "c"]);
    }

    #[test]
    fn test_move_up_swaps_with_previous() {
        let displayed = vec![item("x", 1, 0), item("y", 2, 0), item("z", 3, 0)];
        let plan = plan_move(&displayed, "y", MoveDirection::Up).unwrap();
        assert_eq!(
            plan,
            [OrderUpdate::new("y", 1), OrderUpdate::new("x", 2)]
        );
    }

    #[test]
    fn test_move_down_swaps_with_next() {
        let displayed = vec![item("x", 10, 0), item("y", 20, 0), item("z", 30, 0)];
        let plan = plan_move(&displayed, "y", MoveDirection::Down).unwrap();
        assert_eq!(
            plan,
            [OrderUpdate::new("y", 30), OrderUpdate::new("z", 20)]
        );
    }

    #[test]
    fn test_move_applied_changes_display() {
        let mut displayed = vec![item("x", 1, 0), item("y", 2, 0), item("z", 3, 0)];
        let plan = plan_move(&displayed, "y", MoveDirection::Up).unwrap();
        for update in &plan {
            if let Some(target) = displayed.iter_mut().find(|i| i.id == update.id) {
                target.order = update.order;
            }
        }
        sort_canonical(&mut displayed);
        assert_eq!(ids(&displayed), vec!["y", "x", "z"]);
        assert_eq!(displayed[2].order, 3);
    }

    #[test]
    fn test_boundary_moves_are_noops() {
        let displayed = vec![item("x", 1, 0), item("y", 2, 0)];
        assert!(plan_move(&displayed, "x", MoveDirection::Up).is_none());
        assert!(plan_move(&displayed, "y", MoveDirection::Down).is_none());
        assert!(plan_move(&displayed, "missing", MoveDirection::Up).is_none());
        assert!(plan_move::<Item>(&[], "x", MoveDirection::Down).is_none());
    }

    #[test]
    fn test_equal_orders_swap_is_invisible() {
        let displayed = vec![item("x", 5, 20), item("y", 5, 10)];
        let plan = plan_move(&displayed, "y", MoveDirection::Up).unwrap();
        assert_eq!(plan[0].order, 5);
        assert_eq!(plan[1].order, 5);
    }

    #[test]
    fn test_reorder_request_aliases() {
        let body = r#"{"slides":[{"_id":"hero_slide:a","order":2},{"id":"hero_slide:b","order":1}]}"#;
        let request: ReorderRequest = serde_json::from_str(body).unwrap();
        assert_eq!(
            request.items,
            vec![
                OrderUpdate::new("hero_slide:a", 2),
                OrderUpdate::new("hero_slide:b", 1)
            ]
        );

        let body = r#"{"items":[{"_id":"product:p","order":-3}]}"#;
        let request: ReorderRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.items[0].order, -3);
    }

    #[test]
    fn test_reorder_request_rejects_bad_shape() {
        assert!(serde_json::from_str::<ReorderRequest>(r#"{"items":{}}"#).is_err());
        assert!(serde_json::from_str::<ReorderRequest>(r#"{"items":[{"order":1}]}"#).is_err());
        assert!(
            serde_json::from_str::<ReorderRequest>(r#"{"items":[{"_id":"a","order":1.5}]}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<ReorderRequest>(r#"[]"#).is_err());
    }

    #[test]
    fn test_reorder_response_flattens_report() {
        let response = ReorderResponse {
            message: "Reordered".to_string(),
            report: ReorderReport {
                updated: 2,
                skipped: 1,
                failed: 0,
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["updated"], 2);
        assert_eq!(json["skipped"], 1);
        assert_eq!(json["failed"], 0);
        assert_eq!(response.report.total(), 3);
    }
}
