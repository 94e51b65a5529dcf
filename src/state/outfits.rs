//! Saved outfits and the browse cursor.
//!
//! An append-only sequence of outfits (except for explicit deletes)
//! plus a transient cursor tracking which outfit is on screen. Only
//! the sequence persists; the cursor resets or clamps on structural
//! changes. This is also where catalog deletions cascade: outfits are
//! reconciled by item id, never by live references.

use super::cycler::next_index;
use super::data::Outfit;

#[derive(Debug, Clone, Default)]
pub struct OutfitStore {
    outfits: Vec<Outfit>,
    /// Index of the outfit currently being browsed. Meaningless while
    /// the store is empty; `browsing()` returns None then.
    cursor: usize,
}

impl OutfitStore {
    pub fn new() -> Self {
        OutfitStore::default()
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Append a saved outfit and focus the cursor on it. Returns its
    /// position. The outfit type itself guarantees a top and bottom
    /// are present, so saving cannot produce an invalid entry.
    pub fn save(&mut self, outfit: Outfit) -> usize {
        self.outfits.push(outfit);
        self.cursor = self.outfits.len() - 1;
        self.cursor
    }

    /// Cycle the browse cursor. Empty store: no-op.
    pub fn change_browse(&mut self, delta: isize) {
        self.cursor = next_index(self.outfits.len(), self.cursor, delta);
    }

    /// The outfit under the cursor, if the store has any.
    pub fn browsing(&self) -> Option<&Outfit> {
        self.outfits.get(self.cursor)
    }

    /// Delete an outfit by id. Unknown id is a no-op. Returns whether
    /// anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.outfits.len();
        self.outfits.retain(|outfit| outfit.id != id);
        let removed = self.outfits.len() != before;
        if removed {
            self.clamp_cursor();
        }
        removed
    }

    /// Cascade for a catalog deletion: unset any optional slot that
    /// references the item, and destroy outfits whose top or bottom
    /// references it. Returns whether anything changed (so the caller
    /// knows to re-persist).
    pub fn purge_item(&mut self, item_id: &str) -> bool {
        let mut changed = false;
        self.outfits.retain_mut(|outfit| {
            if outfit.hat.as_ref().is_some_and(|hat| hat.id == item_id) {
                outfit.hat = None;
                changed = true;
            }
            if outfit.shoes.as_ref().is_some_and(|shoes| shoes.id == item_id) {
                outfit.shoes = None;
                changed = true;
            }
            // An outfit without both top and bottom is no longer
            // valid; it goes away with the item.
            if outfit.top.id == item_id || outfit.bottom.id == item_id {
                changed = true;
                return false;
            }
            true
        });
        if changed {
            self.clamp_cursor();
        }
        changed
    }

    /// Clamp against the post-mutation length: the cursor stays where
    /// it was unless it fell off the end, in which case it lands on
    /// the new last outfit (or 0 for an empty store).
    fn clamp_cursor(&mut self) {
        if self.cursor >= self.outfits.len() {
            self.cursor = self.outfits.len().saturating_sub(1);
        }
    }

    /// Serialize the outfit sequence for the persistence bridge. The
    /// cursor is deliberately not part of the persisted state.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.outfits)
    }

    /// Restore from a persisted blob; the cursor starts at 0.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let outfits: Vec<Outfit> = serde_json::from_str(json)?;
        Ok(OutfitStore { outfits, cursor: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Category, ClothingItem};

    fn item(id: &str, kind: Category) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            image: format!("img-{id}"),
            kind,
        }
    }

    fn outfit(id: &str) -> Outfit {
        Outfit {
            id: id.to_string(),
            hat: None,
            top: item(&format!("{id}-top"), Category::Top),
            bottom: item(&format!("{id}-bottom"), Category::Bottom),
            shoes: None,
        }
    }

    fn store_with(ids: &[&str]) -> OutfitStore {
        let mut store = OutfitStore::new();
        for id in ids {
            store.save(outfit(id));
        }
        store
    }

    #[test]
    fn test_save_focuses_the_new_outfit() {
        let mut store = OutfitStore::new();
        assert_eq!(store.save(outfit("a")), 0);
        assert_eq!(store.save(outfit("b")), 1);
        assert_eq!(store.browsing().unwrap().id, "b");
    }

    #[test]
    fn test_browse_cycles_through_saved_outfits() {
        let mut store = store_with(&["a", "b", "c"]);
        // Cursor sits on "c" after the last save.
        store.change_browse(1);
        assert_eq!(store.browsing().unwrap().id, "a");
        store.change_browse(-1);
        assert_eq!(store.browsing().unwrap().id, "c");
    }

    #[test]
    fn test_empty_store_browses_nothing() {
        let mut store = OutfitStore::new();
        assert!(store.browsing().is_none());
        store.change_browse(1);
        assert!(store.browsing().is_none());
        assert_eq!(store.cursor(), 0);
    }

    #[test]
    fn test_delete_last_outfit_reclamps_cursor() {
        // Three outfits, cursor on the last one.
        let mut store = store_with(&["a", "b", "c"]);
        assert_eq!(store.cursor(), 2);

        assert!(store.delete("c"));
        assert_eq!(store.cursor(), 1);
        assert_eq!(store.browsing().unwrap().id, "b");
    }

    #[test]
    fn test_delete_before_cursor_keeps_cursor_in_bounds() {
        let mut store = store_with(&["a", "b", "c"]);
        store.change_browse(-1); // cursor -> "b" (index 1)

        // Deleting "a" shifts "b" left but the numeric cursor is still
        // in bounds, so it stays put.
        assert!(store.delete("a"));
        assert_eq!(store.cursor(), 1);
        assert_eq!(store.browsing().unwrap().id, "c");
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = store_with(&["a"]);
        assert!(!store.delete("missing"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_only_outfit_empties_the_store() {
        let mut store = store_with(&["a"]);
        assert!(store.delete("a"));
        assert!(store.is_empty());
        assert_eq!(store.cursor(), 0);
        assert!(store.browsing().is_none());
    }

    #[test]
    fn test_purge_unsets_optional_slots_but_keeps_outfit() {
        let mut store = OutfitStore::new();
        store.save(Outfit {
            id: "o".into(),
            hat: Some(item("h", Category::Hat)),
            top: item("t", Category::Top),
            bottom: item("b", Category::Bottom),
            shoes: Some(item("s", Category::Shoes)),
        });

        assert!(store.purge_item("h"));
        let outfit = &store.outfits()[0];
        assert!(outfit.hat.is_none());
        assert_eq!(outfit.top.id, "t");
        assert_eq!(outfit.bottom.id, "b");
        assert_eq!(outfit.shoes.as_ref().unwrap().id, "s");
    }

    #[test]
    fn test_purge_destroys_outfit_missing_top_or_bottom() {
        let mut store = store_with(&["a", "b"]);
        assert!(store.purge_item("a-top"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.outfits()[0].id, "b");
        assert_eq!(store.browsing().unwrap().id, "b");
    }

    #[test]
    fn test_purge_unknown_item_changes_nothing() {
        let mut store = store_with(&["a"]);
        assert!(!store.purge_item("missing"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_json_round_trip_drops_the_cursor() {
        let mut store = store_with(&["a", "b", "c"]);
        store.change_browse(-1);

        let json = store.to_json().unwrap();
        let restored = OutfitStore::from_json(&json).unwrap();
        assert_eq!(restored.outfits(), store.outfits());
        assert_eq!(restored.cursor(), 0);
    }
}
