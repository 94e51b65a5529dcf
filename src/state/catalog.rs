//! The clothing catalog.
//!
//! Owns every classified clothing item in insertion order and derives
//! the per-category view the composer works against. The view is
//! recomputed on every read (it is cheap, linear in catalog size) so
//! the "no hat" sentinel can appear consistently without ever being a
//! real catalog entry.

use serde::de::Error as _;

use super::data::{Category, ClothingItem};
use crate::error::Error;

/// All clothing items the user has classified, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<ClothingItem>,
}

/// Derived partition of the catalog by category.
///
/// The hat list always starts with the "no hat" sentinel. This is a
/// snapshot: it does not observe later catalog mutations.
#[derive(Debug, Clone)]
pub struct CategorizedView {
    hats: Vec<ClothingItem>,
    tops: Vec<ClothingItem>,
    bottoms: Vec<ClothingItem>,
    shoes: Vec<ClothingItem>,
}

impl CategorizedView {
    /// The ordered items for one category.
    pub fn items(&self, category: Category) -> &[ClothingItem] {
        match category {
            Category::Hat => &self.hats,
            Category::Top => &self.tops,
            Category::Bottom => &self.bottoms,
            Category::Shoes => &self.shoes,
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.items(category).len()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Add a newly classified item and return its generated id.
    ///
    /// The image handle is opaque but must be present; the category is
    /// already validated by the `Category` type at the call boundary.
    pub fn add(&mut self, image: String, category: Category) -> Result<String, Error> {
        if image.trim().is_empty() {
            return Err(Error::MissingImage);
        }
        let item = ClothingItem::new(image, category);
        let id = item.id.clone();
        self.items.push(item);
        Ok(id)
    }

    /// Remove an item by id. Returns whether anything was removed;
    /// deleting an unknown id is a no-op, not an error.
    ///
    /// The caller (the session) is responsible for running the outfit
    /// cascade in the same mutation, before anything is persisted.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Compute the categorized view: one ordered list per category,
    /// with the sentinel prefixed to the hat list.
    pub fn view(&self) -> CategorizedView {
        let mut view = CategorizedView {
            hats: vec![ClothingItem::no_hat()],
            tops: Vec::new(),
            bottoms: Vec::new(),
            shoes: Vec::new(),
        };
        for item in &self.items {
            match item.kind {
                Category::Hat => view.hats.push(item.clone()),
                Category::Top => view.tops.push(item.clone()),
                Category::Bottom => view.bottoms.push(item.clone()),
                Category::Shoes => view.shoes.push(item.clone()),
            }
        }
        view
    }

    /// Serialize the item list for the persistence bridge.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Restore a catalog from a persisted blob. A blob that somehow
    /// contains the reserved sentinel id is rejected as corrupt.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<ClothingItem> = serde_json::from_str(json)?;
        if items.iter().any(ClothingItem::is_sentinel) {
            return Err(serde_json::Error::custom(
                "sentinel item must never be persisted",
            ));
        }
        Ok(Catalog { items })
    }
}
