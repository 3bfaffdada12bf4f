//! Ordered row collections and their editing algorithms.

use serde::{Deserialize, Serialize};

use super::{Row, RowField, RowMeta};
use crate::error::{DomainError, DomainResult};
use crate::id::RowId;

/// An ordered, invariant-preserving collection of rows for one field group.
///
/// The list maintains, across every operation:
///
/// - at least one row (the empty list is repaired to a single blank row);
/// - a perpetually available blank row: editing the key of the last
///   editable row appends a fresh blank one, so the user never needs an
///   explicit "add" action;
/// - locked rows at their absolute positions: deletion requests against
///   them are rejected and reordering moves editable rows around them;
/// - stable row identity: ids survive edits and reorders and are never
///   recomputed from content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowList<M = ()> {
    rows: Vec<Row<M>>,
}

impl<M: RowMeta> Default for RowList<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RowMeta> FromIterator<Row<M>> for RowList<M> {
    fn from_iter<T: IntoIterator<Item = Row<M>>>(iter: T) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}

impl<M: RowMeta> RowList<M> {
    /// Creates a list holding a single blank editable row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: vec![Row::blank()],
        }
    }

    /// Builds a list from explicit rows.
    ///
    /// An empty input is replaced by a single blank row, keeping the
    /// non-empty floor.
    #[must_use]
    pub fn from_rows(rows: Vec<Row<M>>) -> Self {
        let mut list = Self { rows };
        if list.rows.is_empty() {
            list.rows.push(Row::blank());
        }
        list
    }

    /// All rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[Row<M>] {
        &self.rows
    }

    /// Number of rows, locked included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false while the list invariants hold; present for
    /// completeness of the collection API.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a row by id.
    #[must_use]
    pub fn get(&self, id: RowId) -> Option<&Row<M>> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn index_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Absolute indices of the editable (non-locked) rows.
    #[must_use]
    pub fn editable_indices(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.locked)
            .map(|(index, _)| index)
            .collect()
    }

    /// Absolute indices of the locked rows.
    #[must_use]
    pub fn locked_indices(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.locked)
            .map(|(index, _)| index)
            .collect()
    }

    /// The editable projection: non-locked rows in display order.
    pub fn editable_rows(&self) -> impl Iterator<Item = &Row<M>> {
        self.rows.iter().filter(|row| !row.locked)
    }

    /// Locked rows in display order.
    pub fn locked_rows(&self) -> impl Iterator<Item = &Row<M>> {
        self.rows.iter().filter(|row| row.locked)
    }

    /// Rows that participate in a resolved request: enabled, with a
    /// non-empty key.
    pub fn active_entries(&self) -> impl Iterator<Item = &Row<M>> {
        self.rows
            .iter()
            .filter(|row| row.enabled && !row.key.is_empty())
    }

    /// Edits one text field of the row identified by `id`.
    ///
    /// Setting a non-empty key on the last editable row appends a fresh
    /// blank row right after it (which places it before any trailing
    /// locked rows), so a blank entry row is always available. Clearing a
    /// key never removes rows; rows only disappear via [`Self::delete_row`].
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownRow`] if `id` is not in the list;
    /// [`DomainError::RowLocked`] for key edits to a locked row. The list
    /// is unchanged on error.
    pub fn edit_field(
        &mut self,
        id: RowId,
        field: RowField,
        value: impl Into<String>,
    ) -> DomainResult<()> {
        let index = self.index_of(id).ok_or(DomainError::UnknownRow(id))?;
        if matches!(field, RowField::Key) && self.rows[index].locked {
            return Err(DomainError::RowLocked(id));
        }

        let value = value.into();
        let grow = matches!(field, RowField::Key)
            && !value.is_empty()
            && self.is_last_editable(index);

        let row = &mut self.rows[index];
        match field {
            RowField::Key => row.key = value,
            RowField::Value => row.value = value,
            RowField::Description => row.description = value,
        }

        if grow {
            self.rows.insert(index + 1, Row::blank());
        }
        Ok(())
    }

    /// True when no editable row exists after `index`.
    fn is_last_editable(&self, index: usize) -> bool {
        self.rows[index + 1..].iter().all(|row| row.locked)
    }

    /// Toggles whether the row participates in resolution.
    ///
    /// Allowed on locked rows: locking pins position and key, not the
    /// enabled state.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownRow`] if `id` is not in the list.
    pub fn set_enabled(&mut self, id: RowId, enabled: bool) -> DomainResult<()> {
        let index = self.index_of(id).ok_or(DomainError::UnknownRow(id))?;
        self.rows[index].enabled = enabled;
        Ok(())
    }

    /// Updates the row's group-specific payload in place.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownRow`] if `id` is not in the list.
    pub fn update_meta(&mut self, id: RowId, update: impl FnOnce(&mut M)) -> DomainResult<()> {
        let index = self.index_of(id).ok_or(DomainError::UnknownRow(id))?;
        update(&mut self.rows[index].meta);
        Ok(())
    }

    /// Removes the row identified by `id`.
    ///
    /// If removal leaves the list empty, a fresh blank row is substituted
    /// so the list never reaches zero rows.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownRow`] if `id` is not in the list;
    /// [`DomainError::RowLocked`] if the row is locked (locked rows are
    /// structurally required and survive deletion requests).
    pub fn delete_row(&mut self, id: RowId) -> DomainResult<()> {
        let index = self.index_of(id).ok_or(DomainError::UnknownRow(id))?;
        if self.rows[index].locked {
            return Err(DomainError::RowLocked(id));
        }
        self.rows.remove(index);
        if self.rows.is_empty() {
            self.rows.push(Row::blank());
        }
        Ok(())
    }

    /// Removes every unlocked row and resets to a single fresh blank row.
    ///
    /// Locked rows survive in their original relative order; those that
    /// formed a prefix run stay ahead of the blank, all others follow it.
    pub fn delete_all(&mut self) {
        let mut leading = Vec::new();
        let mut trailing = Vec::new();
        let mut in_prefix = true;
        for row in self.rows.drain(..) {
            if row.locked {
                if in_prefix {
                    leading.push(row);
                } else {
                    trailing.push(row);
                }
            } else {
                in_prefix = false;
            }
        }
        self.rows = leading;
        self.rows.push(Row::blank());
        self.rows.extend(trailing);
    }

    /// Moves the editable row at `from` to `to`, both positions within the
    /// editable projection (locked rows are not addressable here).
    ///
    /// Standard array-move semantics: remove then insert, no swap. Locked
    /// rows are re-spliced at their original absolute indices, so their
    /// anchoring is untouched by any reorder of the rows around them.
    /// `from == to` is a no-op.
    ///
    /// # Errors
    ///
    /// [`DomainError::IndexOutOfRange`] when either position falls outside
    /// the editable projection. The list is unchanged on error.
    pub fn reorder(&mut self, from: usize, to: usize) -> DomainResult<()> {
        let count = self.editable_rows().count();
        if from >= count {
            return Err(DomainError::IndexOutOfRange { index: from, len: count });
        }
        if to >= count {
            return Err(DomainError::IndexOutOfRange { index: to, len: count });
        }
        if from == to {
            return Ok(());
        }

        let mut anchored = Vec::new();
        let mut moving = Vec::new();
        for (absolute, row) in self.rows.drain(..).enumerate() {
            if row.locked {
                anchored.push((absolute, row));
            } else {
                moving.push(row);
            }
        }

        let row = moving.remove(from);
        moving.insert(to, row);

        let total = anchored.len() + moving.len();
        let mut rows = Vec::with_capacity(total);
        let mut anchored = anchored.into_iter().peekable();
        let mut moving = moving.into_iter();
        for slot in 0..total {
            let take_locked = anchored.peek().is_some_and(|(anchor, _)| *anchor == slot);
            if take_locked {
                if let Some((_, row)) = anchored.next() {
                    rows.push(row);
                }
            } else if let Some(row) = moving.next() {
                rows.push(row);
            }
        }
        self.rows = rows;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys<M: RowMeta>(list: &RowList<M>) -> Vec<&str> {
        list.rows().iter().map(|row| row.key.as_str()).collect()
    }

    #[test]
    fn test_new_list_has_single_blank() {
        let list: RowList = RowList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.rows()[0].key, "");
        assert!(!list.rows()[0].locked);
    }

    #[test]
    fn test_from_rows_empty_is_repaired() {
        let list: RowList = RowList::from_rows(Vec::new());
        assert_eq!(list.len(), 1);
        assert_eq!(list.rows()[0].key, "");
    }

    #[test]
    fn test_key_edit_on_last_editable_appends_blank() {
        let mut list: RowList = RowList::new();
        let id = list.rows()[0].id;
        list.edit_field(id, RowField::Key, "page").unwrap();
        assert_eq!(keys(&list), vec!["page", ""]);
    }

    #[test]
    fn test_blank_appends_before_trailing_locked_row() {
        let mut list: RowList =
            RowList::from_rows(vec![Row::blank(), Row::new("content-type", "text/plain").locked()]);
        let id = list.rows()[0].id;
        list.edit_field(id, RowField::Key, "Accept").unwrap();
        assert_eq!(keys(&list), vec!["Accept", "", "content-type"]);
        assert!(list.rows()[2].locked);
    }

    #[test]
    fn test_key_edit_on_non_last_row_does_not_grow() {
        let mut list: RowList = RowList::from_rows(vec![Row::new("a", "1"), Row::blank()]);
        let id = list.rows()[0].id;
        list.edit_field(id, RowField::Key, "b").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(keys(&list), vec!["b", ""]);
    }

    #[test]
    fn test_value_edit_never_grows() {
        let mut list: RowList = RowList::new();
        let id = list.rows()[0].id;
        list.edit_field(id, RowField::Value, "v").unwrap();
        list.edit_field(id, RowField::Description, "d").unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_clearing_key_keeps_appended_row() {
        let mut list: RowList = RowList::new();
        let id = list.rows()[0].id;
        list.edit_field(id, RowField::Key, "page").unwrap();
        list.edit_field(id, RowField::Key, "").unwrap();
        assert_eq!(keys(&list), vec!["", ""]);
    }

    #[test]
    fn test_key_edit_on_locked_row_rejected() {
        let mut list: RowList = RowList::from_rows(vec![Row::new("host", "example").locked()]);
        let id = list.rows()[0].id;
        let before = list.clone();
        assert_eq!(
            list.edit_field(id, RowField::Key, "Host"),
            Err(DomainError::RowLocked(id))
        );
        assert_eq!(list, before);
    }

    #[test]
    fn test_value_edit_on_locked_row_allowed() {
        let mut list: RowList = RowList::from_rows(vec![Row::new("content-type", "").locked()]);
        let id = list.rows()[0].id;
        list.edit_field(id, RowField::Value, "application/json").unwrap();
        assert_eq!(list.rows()[0].value, "application/json");
    }

    #[test]
    fn test_edit_unknown_row_rejected() {
        let mut list: RowList = RowList::new();
        let ghost = RowId::new();
        assert_eq!(
            list.edit_field(ghost, RowField::Key, "x"),
            Err(DomainError::UnknownRow(ghost))
        );
    }

    #[test]
    fn test_edit_preserves_identity() {
        let mut list: RowList = RowList::new();
        let id = list.rows()[0].id;
        list.edit_field(id, RowField::Key, "page").unwrap();
        assert_eq!(list.rows()[0].id, id);
    }

    #[test]
    fn test_delete_locked_row_rejected() {
        let mut list: RowList =
            RowList::from_rows(vec![Row::blank(), Row::new("content-type", "x").locked()]);
        let locked_id = list.rows()[1].id;
        assert_eq!(list.delete_row(locked_id), Err(DomainError::RowLocked(locked_id)));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_last_row_substitutes_blank() {
        let mut list: RowList = RowList::new();
        let id = list.rows()[0].id;
        list.delete_row(id).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.rows()[0].key, "");
        assert_ne!(list.rows()[0].id, id, "ids are never reused");
    }

    #[test]
    fn test_delete_all_resets_around_locked() {
        let mut list: RowList = RowList::from_rows(vec![
            Row::new("lead", "").locked(),
            Row::new("a", "1"),
            Row::new("b", "2"),
            Row::new("content-type", "x").locked(),
        ]);
        list.delete_all();
        assert_eq!(keys(&list), vec!["lead", "", "content-type"]);
        assert!(list.rows()[0].locked);
        assert!(!list.rows()[1].locked);
        assert!(list.rows()[2].locked);
    }

    #[test]
    fn test_reorder_moves_editable_rows() {
        let mut list: RowList =
            RowList::from_rows(vec![Row::new("a", ""), Row::new("b", ""), Row::blank()]);
        let ids: Vec<RowId> = list.rows().iter().map(|row| row.id).collect();
        list.reorder(0, 1).unwrap();
        assert_eq!(keys(&list), vec!["b", "a", ""]);
        let moved: Vec<RowId> = list.rows().iter().map(|row| row.id).collect();
        assert_eq!(moved, vec![ids[1], ids[0], ids[2]]);
    }

    #[test]
    fn test_reorder_keeps_locked_rows_anchored() {
        let mut list: RowList = RowList::from_rows(vec![
            Row::new("a", ""),
            Row::new("pinned", "").locked(),
            Row::new("b", ""),
            Row::new("c", ""),
        ]);
        // Editable projection is [a, b, c]; move a to the end.
        list.reorder(0, 2).unwrap();
        assert_eq!(keys(&list), vec!["b", "pinned", "c", "a"]);
        assert_eq!(list.locked_indices(), vec![1]);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut list: RowList = RowList::from_rows(vec![Row::new("a", ""), Row::new("b", "")]);
        let before = list.clone();
        list.reorder(1, 1).unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn test_reorder_out_of_range_rejected() {
        let mut list: RowList =
            RowList::from_rows(vec![Row::new("a", ""), Row::new("pinned", "").locked()]);
        let before = list.clone();
        assert_eq!(
            list.reorder(0, 1),
            Err(DomainError::IndexOutOfRange { index: 1, len: 1 }),
            "locked rows are not addressable by reorder"
        );
        assert_eq!(list, before);
    }

    #[test]
    fn test_projections() {
        let list: RowList = RowList::from_rows(vec![
            Row::new("a", ""),
            Row::new("pinned", "").locked(),
            Row::blank(),
        ]);
        assert_eq!(list.editable_indices(), vec![0, 2]);
        assert_eq!(list.locked_indices(), vec![1]);
    }

    #[test]
    fn test_active_entries_skip_disabled_and_blank() {
        let mut list: RowList = RowList::from_rows(vec![
            Row::new("a", "1"),
            Row::new("b", "2"),
            Row::blank(),
        ]);
        let b = list.rows()[1].id;
        list.set_enabled(b, false).unwrap();
        let active: Vec<&str> = list.active_entries().map(|row| row.key.as_str()).collect();
        assert_eq!(active, vec!["a"]);
    }
}
