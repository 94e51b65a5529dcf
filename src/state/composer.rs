//! The in-progress outfit selection.
//!
//! Holds one index per category into the catalog's categorized view.
//! The selection is ephemeral: it is never persisted, and resets to
//! all-zero after a successful save. Bounds are always recomputed
//! against the view passed in, never cached, so a catalog deletion can
//! leave an index stale but never make the composer misbehave.

use super::catalog::CategorizedView;
use super::cycler::next_index;
use super::data::{fresh_id, Category, ClothingItem, Outfit};
use crate::error::Error;

#[derive(Debug, Clone, Default)]
pub struct Composer {
    selection: [usize; Category::ALL.len()],
}

impl Composer {
    pub fn new() -> Self {
        Composer::default()
    }

    /// The currently selected index for a category.
    pub fn selected_index(&self, category: Category) -> usize {
        self.selection[category.index()]
    }

    /// Cycle the selection for one category. An empty category is a
    /// no-op: the cycler pins the index to 0 and there is nothing to
    /// show.
    pub fn change_part(&mut self, view: &CategorizedView, category: Category, delta: isize) {
        let length = view.len(category);
        self.selection[category.index()] = next_index(length, self.selected_index(category), delta);
    }

    /// The item the selection currently resolves to, if any.
    pub fn selected<'a>(
        &self,
        view: &'a CategorizedView,
        category: Category,
    ) -> Option<&'a ClothingItem> {
        view.items(category).get(self.selected_index(category))
    }

    /// Whether the current selection can be saved: the top and bottom
    /// lists are non-empty and both selected indices resolve to real
    /// items. This is the sole gate for enabling save.
    pub fn can_save(&self, view: &CategorizedView) -> bool {
        self.selected(view, Category::Top).is_some()
            && self.selected(view, Category::Bottom).is_some()
    }

    /// Materialize the current selection into an outfit.
    ///
    /// Walks the categories in display order; a category with no
    /// resolvable selection is left out, and a selected hat sentinel
    /// is omitted rather than stored. Without a resolvable top and
    /// bottom this fails with `IncompleteOutfit` instead of
    /// fabricating an invalid outfit.
    pub fn build_outfit(&self, view: &CategorizedView) -> Result<Outfit, Error> {
        let hat = self
            .selected(view, Category::Hat)
            .filter(|item| !item.is_sentinel())
            .cloned();
        let top = self
            .selected(view, Category::Top)
            .cloned()
            .ok_or(Error::IncompleteOutfit)?;
        let bottom = self
            .selected(view, Category::Bottom)
            .cloned()
            .ok_or(Error::IncompleteOutfit)?;
        let shoes = self.selected(view, Category::Shoes).cloned();

        Ok(Outfit {
            id: fresh_id("outfit"),
            hat,
            top,
            bottom,
            shoes,
        })
    }

    /// Reset every category back to its first entry.
    pub fn reset(&mut self) {
        self.selection = Default::default();
    }
}
