// src/models/ordering.rs
// DOCUMENTATION: Ordering engine for image collections
// PURPOSE: Recompute sibling display orders for drag-and-drop moves

use std::collections::HashMap;
use uuid::Uuid;

/// Ordered view over one parent's sibling images.
///
/// DOCUMENTATION: The sibling set is held as a list of image ids where the
/// index IS the display order, so contiguity ({0..n-1}, no gaps, no
/// duplicates) holds by construction. Rows loaded with gapped or duplicated
/// orders (data predating the commit-time constraint) normalize on the next
/// write instead of poisoning it.
///
/// The repository builds one of these per request from the locked sibling
/// rows, applies a move, and persists `changes()`.
#[derive(Debug)]
pub struct SiblingOrder {
    /// Sibling ids sorted by display order; index = new order value.
    ids: Vec<Uuid>,
    /// Order values as loaded, used to compute the minimal write set.
    baseline: HashMap<Uuid, i32>,
}

impl SiblingOrder {
    /// Build from `(id, display_order)` rows of a single parent.
    /// Rows may arrive in any order; ties keep their input order, so the
    /// resolver's secondary sort (created_at) decides between duplicates.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Uuid, i32)>,
    {
        let mut rows: Vec<(Uuid, i32)> = rows.into_iter().collect();
        rows.sort_by_key(|&(_, order)| order);

        let baseline = rows.iter().copied().collect();
        let ids = rows.into_iter().map(|(id, _)| id).collect();

        Self { ids, baseline }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Highest order value currently assigned (-1 for an empty set).
    pub fn max_order(&self) -> i32 {
        self.ids.len() as i32 - 1
    }

    /// Current position of an image within the sibling set.
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.ids.iter().position(|&candidate| candidate == id)
    }

    /// Apply a caller-supplied target position to one image.
    ///
    /// Policy (in this order):
    /// - target beyond the current maximum: move to the bottom;
    /// - negative target: clamp to 0;
    /// - target equal to the current position: no-op;
    /// - otherwise: the image lands exactly at `requested`, every sibling
    ///   between source and destination shifts by one.
    ///
    /// Returns the final position, or None when the id is not a sibling.
    pub fn reorder(&mut self, id: Uuid, requested: i32) -> Option<i32> {
        if requested > self.max_order() {
            return self.move_to_end(id);
        }
        self.move_to(id, requested.max(0) as usize)
    }

    /// Move an image to an explicit index (clamped to the valid range).
    pub fn move_to(&mut self, id: Uuid, index: usize) -> Option<i32> {
        let current = self.position(id)?;
        let target = index.min(self.ids.len() - 1);

        if target != current {
            let id = self.ids.remove(current);
            self.ids.insert(target, id);
        }

        Some(target as i32)
    }

    /// Move an image to the end of the sibling set; everything that sat
    /// behind it compacts down by one.
    pub fn move_to_end(&mut self, id: Uuid) -> Option<i32> {
        let current = self.position(id)?;

        let id = self.ids.remove(current);
        self.ids.push(id);

        Some(self.max_order())
    }

    /// Drop an image from the sibling set; everything that sat behind it
    /// compacts down by one. The survivors' reassignments surface through
    /// `changes()`, so deleting a row closes its gap the same way a move
    /// does. Returns the removed image's old position.
    pub fn remove(&mut self, id: Uuid) -> Option<i32> {
        let current = self.position(id)?;

        self.ids.remove(current);
        self.baseline.remove(&id);

        Some(current as i32)
    }

    /// Full `(id, order)` assignment in display order.
    pub fn orders(&self) -> impl Iterator<Item = (Uuid, i32)> + '_ {
        self.ids
            .iter()
            .enumerate()
            .map(|(index, &id)| (id, index as i32))
    }

    /// Only the rows whose persisted order must change.
    pub fn changes(&self) -> Vec<(Uuid, i32)> {
        self.ids
            .iter()
            .enumerate()
            .filter_map(|(index, &id)| {
                let order = index as i32;
                match self.baseline.get(&id) {
                    Some(&loaded) if loaded == order => None,
                    _ => Some((id, order)),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn siblings(n: usize) -> (Vec<Uuid>, SiblingOrder) {
        let ids: Vec<Uuid> = (0..n).map(|_| Uuid::new_v4()).collect();
        let order = SiblingOrder::from_rows(
            ids.iter()
                .enumerate()
                .map(|(index, &id)| (id, index as i32)),
        );
        (ids, order)
    }

    fn order_map(order: &SiblingOrder) -> HashMap<Uuid, i32> {
        order.orders().collect()
    }

    fn assert_contiguous(order: &SiblingOrder) {
        let mut values: Vec<i32> = order.orders().map(|(_, value)| value).collect();
        values.sort();
        let expected: Vec<i32> = (0..order.len() as i32).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_move_to_front() {
        // [A=0, B=1, C=2, D=3]; reorder(C, 0) => A=1, B=2, C=0, D=3
        let (ids, mut order) = siblings(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        assert_eq!(order.reorder(c, 0), Some(0));

        let orders = order_map(&order);
        assert_eq!(orders[&a], 1);
        assert_eq!(orders[&b], 2);
        assert_eq!(orders[&c], 0);
        assert_eq!(orders[&d], 3);
        assert_contiguous(&order);
    }

    #[test]
    fn test_bottom_move_beyond_max() {
        // [A=0, B=1, C=2, D=3]; reorder(A, 10) => A=3, B=0, C=1, D=2
        let (ids, mut order) = siblings(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        assert_eq!(order.reorder(a, 10), Some(3));

        let orders = order_map(&order);
        assert_eq!(orders[&a], 3);
        assert_eq!(orders[&b], 0);
        assert_eq!(orders[&c], 1);
        assert_eq!(orders[&d], 2);
        assert_contiguous(&order);
    }

    #[test]
    fn test_move_within_middle() {
        let (ids, mut order) = siblings(5);

        assert_eq!(order.reorder(ids[1], 3), Some(3));

        let orders = order_map(&order);
        assert_eq!(orders[&ids[0]], 0);
        assert_eq!(orders[&ids[2]], 1);
        assert_eq!(orders[&ids[3]], 2);
        assert_eq!(orders[&ids[1]], 3);
        assert_eq!(orders[&ids[4]], 4);
        assert_contiguous(&order);
    }

    #[test]
    fn test_own_position_is_noop() {
        let (ids, mut order) = siblings(4);

        assert_eq!(order.reorder(ids[1], 1), Some(1));
        assert!(order.changes().is_empty());
    }

    #[test]
    fn test_bottom_move_idempotent_under_growing_targets() {
        let (ids, mut order) = siblings(4);
        order.reorder(ids[0], 10);

        // Rebuild from the persisted state, as a fresh request would.
        let mut again = SiblingOrder::from_rows(order.orders());
        assert_eq!(again.reorder(ids[0], 100), Some(3));
        assert!(again.changes().is_empty());
    }

    #[test]
    fn test_negative_target_clamps_to_zero() {
        let (ids, mut order) = siblings(4);

        assert_eq!(order.reorder(ids[2], -5), Some(0));
        assert_eq!(order_map(&order)[&ids[2]], 0);
        assert_contiguous(&order);
    }

    #[test]
    fn test_unknown_id() {
        let (_, mut order) = siblings(3);

        assert_eq!(order.reorder(Uuid::new_v4(), 1), None);
        assert!(order.changes().is_empty());
    }

    #[test]
    fn test_single_element_any_target() {
        let (ids, mut order) = siblings(1);

        assert_eq!(order.reorder(ids[0], 10), Some(0));
        assert_eq!(order.reorder(ids[0], -3), Some(0));
        assert!(order.changes().is_empty());
    }

    #[test]
    fn test_changes_are_minimal() {
        // Moving D from 3 to 2 touches only C and D.
        let (ids, mut order) = siblings(4);
        order.reorder(ids[3], 2);

        let mut changes = order.changes();
        changes.sort_by_key(|&(_, value)| value);
        assert_eq!(changes, vec![(ids[3], 2), (ids[2], 3)]);
    }

    #[test]
    fn test_gapped_orders_normalize() {
        // Loaded orders [0, 2, 5] compact to [0, 1, 2] on the next write.
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let mut order =
            SiblingOrder::from_rows(vec![(ids[0], 0), (ids[1], 2), (ids[2], 5)]);

        order.reorder(ids[0], 0);

        let mut changes = order.changes();
        changes.sort_by_key(|&(_, value)| value);
        assert_eq!(changes, vec![(ids[1], 1), (ids[2], 2)]);
        assert_contiguous(&order);
    }

    #[test]
    fn test_unsorted_rows_are_sorted_on_load() {
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let order =
            SiblingOrder::from_rows(vec![(ids[2], 2), (ids[0], 0), (ids[1], 1)]);

        assert_eq!(order.position(ids[0]), Some(0));
        assert_eq!(order.position(ids[1]), Some(1));
        assert_eq!(order.position(ids[2]), Some(2));
        assert!(order.changes().is_empty());
    }

    #[test]
    fn test_move_to_clamps_oversized_index() {
        let (ids, mut order) = siblings(4);

        assert_eq!(order.move_to(ids[0], 99), Some(3));
        assert_contiguous(&order);
    }

    #[test]
    fn test_move_to_end_compacts_gap() {
        let (ids, mut order) = siblings(3);

        assert_eq!(order.move_to_end(ids[0]), Some(2));

        let orders = order_map(&order);
        assert_eq!(orders[&ids[1]], 0);
        assert_eq!(orders[&ids[2]], 1);
        assert_eq!(orders[&ids[0]], 2);
    }

    #[test]
    fn test_remove_compacts_survivors() {
        // [A=0, B=1, C=2, D=3]; remove(B) => A=0, C=1, D=2
        let (ids, mut order) = siblings(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        assert_eq!(order.remove(b), Some(1));
        assert_eq!(order.len(), 3);

        let orders = order_map(&order);
        assert_eq!(orders[&a], 0);
        assert_eq!(orders[&c], 1);
        assert_eq!(orders[&d], 2);
        assert_contiguous(&order);

        // Only the rows behind the removed image need a write.
        let mut changes = order.changes();
        changes.sort_by_key(|&(_, value)| value);
        assert_eq!(changes, vec![(c, 1), (d, 2)]);
    }

    #[test]
    fn test_remove_last_needs_no_writes() {
        let (ids, mut order) = siblings(3);

        assert_eq!(order.remove(ids[2]), Some(2));
        assert!(order.changes().is_empty());
        assert_contiguous(&order);
    }

    #[test]
    fn test_remove_unknown_id() {
        let (_, mut order) = siblings(3);

        assert_eq!(order.remove(Uuid::new_v4()), None);
        assert!(order.changes().is_empty());
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_remove_only_element_empties_the_set() {
        let (ids, mut order) = siblings(1);

        assert_eq!(order.remove(ids[0]), Some(0));
        assert!(order.is_empty());
        assert!(order.changes().is_empty());
    }

    #[test]
    fn test_remove_then_reorder_stays_contiguous() {
        let (ids, mut order) = siblings(5);

        order.remove(ids[1]);
        order.reorder(ids[4], 0);

        assert_eq!(order.len(), 4);
        assert_contiguous(&order);
    }

    #[test]
    fn test_contiguous_after_move_sequence() {
        let (ids, mut order) = siblings(6);

        order.reorder(ids[5], 0);
        order.reorder(ids[0], 3);
        order.reorder(ids[2], 100);
        order.reorder(ids[4], -1);

        assert_contiguous(&order);
        assert_eq!(order.len(), 6);
    }
}
