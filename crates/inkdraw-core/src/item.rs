//! The drawn item: one committed stroke or shape.

use crate::brush::Brush;
use crate::path::ItemPath;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for drawn items.
pub type ItemId = Uuid;

/// One drawn stroke or shape.
///
/// Created when a gesture begins, its path grows (or is rebuilt) while the
/// gesture is in progress, and it becomes immutable once finalized. The
/// brush is a snapshot taken at gesture begin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnItem {
    pub id: ItemId,
    pub path: ItemPath,
    pub brush: Brush,
    /// Whether an external rasterizer should fill the path instead of
    /// stroking it.
    pub is_filled: bool,
}

impl DrawnItem {
    /// Create an item with an empty path.
    pub fn new(brush: Brush, is_filled: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            path: ItemPath::new(),
            brush,
            is_filled,
        }
    }
}

/// Serialize an item list to JSON for an external persistence layer.
pub fn items_to_json(items: &[DrawnItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Deserialize an item list previously produced by [`items_to_json`].
/// Malformed input is rejected here, before it can reach the history store.
pub fn items_from_json(json: &str) -> Result<Vec<DrawnItem>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathOp;
    use kurbo::Point;

    #[test]
    fn test_new_item_is_empty() {
        let item = DrawnItem::new(Brush::default(), false);
        assert!(item.path.is_empty());
        assert!(!item.is_filled);
    }

    #[test]
    fn test_items_have_distinct_ids() {
        let a = DrawnItem::new(Brush::default(), false);
        let b = DrawnItem::new(Brush::default(), false);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_json_round_trip() {
        let mut item = DrawnItem::new(Brush::default(), true);
        item.path.push(PathOp::MoveTo(Point::new(1.0, 2.0)));
        item.path.push(PathOp::LineTo(Point::new(3.0, 4.0)));

        let json = items_to_json(std::slice::from_ref(&item)).unwrap();
        let back = items_from_json(&json).unwrap();
        assert_eq!(back, vec![item]);
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(items_from_json("not json").is_err());
        assert!(items_from_json("{\"wrong\": \"shape\"}").is_err());
    }
}
