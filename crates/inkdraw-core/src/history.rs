//! Undo/redo history of drawn items.

use crate::item::DrawnItem;

/// The committed item list plus the redo tail.
///
/// Invariant: `committed` is always an element-wise prefix of `tail`.
/// Committing appends to `committed` and overwrites `tail` with it, which
/// discards any redo data past the new append point. Undo shrinks
/// `committed` only; redo copies `tail[committed.len()]` back.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    committed: Vec<DrawnItem>,
    tail: Vec<DrawnItem>,
}

impl HistoryStore {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently visible items, in back-to-front order.
    pub fn items(&self) -> &[DrawnItem] {
        &self.committed
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Append an item and overwrite the redo tail with the committed list.
    pub fn commit(&mut self, item: DrawnItem) {
        self.committed.push(item);
        self.tail = self.committed.clone();
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.tail.len() > self.committed.len()
    }

    /// Remove the most recent item. The tail keeps it for redo.
    /// Returns true if an item was removed.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.committed.pop();
        true
    }

    /// Restore the next item from the redo tail.
    /// Returns true if an item was restored.
    pub fn redo(&mut self) -> bool {
        let Some(item) = self.tail.get(self.committed.len()) else {
            return false;
        };
        self.committed.push(item.clone());
        true
    }

    /// Empty the committed list. The redo tail is intentionally left
    /// untouched, so a redo after a clear can resurrect pre-clear items
    /// one by one.
    pub fn clear(&mut self) {
        self.committed.clear();
    }

    /// Replace both the committed list and the tail, discarding all prior
    /// history. Used for bulk loads from an external persistence layer.
    pub fn replace_all(&mut self, items: Vec<DrawnItem>) {
        log::debug!("history replaced with {} items", items.len());
        self.committed = items;
        self.tail = self.committed.clone();
    }

    /// Mutable access to the in-progress head item, for the session only.
    pub(crate) fn active_item_mut(&mut self) -> Option<&mut DrawnItem> {
        self.committed.last_mut()
    }

    /// Re-sync the tail with the committed list once a gesture finishes,
    /// so the redo copy of the head item carries its complete path.
    pub(crate) fn finalize(&mut self) {
        self.tail = self.committed.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::Brush;
    use crate::path::PathOp;
    use kurbo::Point;

    fn item() -> DrawnItem {
        DrawnItem::new(Brush::default(), false)
    }

    fn prefix_invariant_holds(history: &HistoryStore) -> bool {
        history.tail.len() >= history.committed.len()
            && history.tail[..history.committed.len()] == history.committed[..]
    }

    #[test]
    fn test_empty_history() {
        let mut history = HistoryStore::new();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.undo());
        assert!(!history.redo());
    }

    #[test]
    fn test_commit_undo_redo() {
        let mut history = HistoryStore::new();
        let first = item();
        let second = item();
        history.commit(first.clone());
        history.commit(second.clone());
        assert_eq!(history.len(), 2);

        assert!(history.undo());
        assert_eq!(history.items(), &[first.clone()]);
        assert!(history.can_redo());

        assert!(history.redo());
        assert_eq!(history.items(), &[first, second]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_round_trip_identity() {
        let mut history = HistoryStore::new();
        let mut drawn = item();
        drawn.path.push(PathOp::MoveTo(Point::new(1.0, 2.0)));
        drawn.path.push(PathOp::QuadTo {
            ctrl: Point::new(3.0, 4.0),
            to: Point::new(5.0, 6.0),
        });
        history.commit(drawn.clone());

        assert!(history.undo());
        assert!(history.redo());
        assert_eq!(history.items(), &[drawn]);
    }

    #[test]
    fn test_commit_after_undo_discards_redo() {
        let mut history = HistoryStore::new();
        history.commit(item());
        history.commit(item());
        assert!(history.undo());
        assert!(history.can_redo());

        history.commit(item());
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_prefix_invariant_across_interleavings() {
        let mut history = HistoryStore::new();
        assert!(prefix_invariant_holds(&history));

        for step in 0..4 {
            history.commit(item());
            assert!(prefix_invariant_holds(&history), "after commit {step}");
        }
        for _ in 0..3 {
            history.undo();
            assert!(prefix_invariant_holds(&history));
        }
        history.redo();
        assert!(prefix_invariant_holds(&history));
        history.commit(item());
        assert!(prefix_invariant_holds(&history));
        history.undo();
        history.redo();
        assert!(prefix_invariant_holds(&history));
    }

    #[test]
    fn test_redo_exhausts_at_tail_length() {
        let mut history = HistoryStore::new();
        history.commit(item());
        history.commit(item());
        history.undo();
        history.undo();

        assert!(history.redo());
        assert!(history.redo());
        assert!(!history.redo());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_clear_leaves_tail_untouched() {
        let mut history = HistoryStore::new();
        let first = item();
        let second = item();
        history.commit(first.clone());
        history.commit(second.clone());

        history.clear();
        assert!(history.is_empty());
        // The tail survives a clear, so redo resurrects the pre-clear
        // items in order.
        assert!(history.can_redo());
        assert!(history.redo());
        assert_eq!(history.items(), &[first.clone()]);
        assert!(history.redo());
        assert_eq!(history.items(), &[first, second]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_replace_all_discards_history() {
        let mut history = HistoryStore::new();
        history.commit(item());
        history.undo();
        assert!(history.can_redo());

        let loaded = vec![item(), item(), item()];
        history.replace_all(loaded.clone());
        assert_eq!(history.items(), &loaded[..]);
        assert!(!history.can_redo());
        assert!(history.can_undo());
    }

    #[test]
    fn test_finalize_syncs_grown_path() {
        let mut history = HistoryStore::new();
        history.commit(item());
        if let Some(active) = history.active_item_mut() {
            active.path.push(PathOp::MoveTo(Point::new(0.0, 0.0)));
            active.path.push(PathOp::LineTo(Point::new(9.0, 9.0)));
        }
        history.finalize();

        let grown = history.items()[0].clone();
        assert!(history.undo());
        assert!(history.redo());
        assert_eq!(history.items(), &[grown]);
    }
}
