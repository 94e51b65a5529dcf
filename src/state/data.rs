//! Shared data structures for the wardrobe engine.
//!
//! These structs represent the data model that flows between the
//! storage layer and the UI layer. Everything that persists is plain
//! serde-serializable data; image contents are opaque string handles
//! supplied by the upload pipeline and never interpreted here.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Reserved id of the synthetic "wear no hat" entry.
pub const NO_HAT_ID: &str = "no-hat";

/// The four fixed clothing slots.
///
/// The order here is the display/iteration order; correctness never
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hat,
    Top,
    Bottom,
    Shoes,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Hat,
        Category::Top,
        Category::Bottom,
        Category::Shoes,
    ];

    /// Stable position of this category, used to index per-category
    /// selection state.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Hat => "hat",
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Shoes => "shoes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse a category name from untyped input (e.g. a classify
    /// action coming out of the UI). Anything but the four known slots
    /// is rejected so an item can never be silently miscategorized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hat" => Ok(Category::Hat),
            "top" => Ok(Category::Top),
            "bottom" => Ok(Category::Bottom),
            "shoes" => Ok(Category::Shoes),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// A single classified clothing item.
///
/// Immutable after creation except for deletion. Owned exclusively by
/// the catalog; outfits reference items by value snapshot and are
/// reconciled by id when the catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Unique id, generated at classification time.
    pub id: String,
    /// Opaque image handle from the upload pipeline.
    pub image: String,
    /// Which slot this item fills.
    #[serde(rename = "type")]
    pub kind: Category,
}

impl ClothingItem {
    /// Create a new item with a freshly generated id.
    pub fn new(image: String, kind: Category) -> Self {
        ClothingItem {
            id: fresh_id("item"),
            image,
            kind,
        }
    }

    /// The synthetic "wear no hat" entry. It is injected as the first
    /// element of the hat view every time the view is computed; it is
    /// never stored in the catalog and never persisted.
    pub fn no_hat() -> Self {
        ClothingItem {
            id: NO_HAT_ID.to_string(),
            image: String::new(),
            kind: Category::Hat,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id == NO_HAT_ID
    }
}

/// A saved outfit.
///
/// `top` and `bottom` are required by construction; `hat` and `shoes`
/// are omitted (not stored as a sentinel) when the user picked "no
/// hat" or had no shoes in the catalog at save time. A later catalog
/// deletion may unset `hat` or `shoes`; one that would unset `top` or
/// `bottom` destroys the whole outfit instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hat: Option<ClothingItem>,
    pub top: ClothingItem,
    pub bottom: ClothingItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoes: Option<ClothingItem>,
}

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique id: a millisecond timestamp plus a process-local
/// counter, so two saves inside the same millisecond still differ.
pub(crate) fn fresh_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let n = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{millis}-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_known_slots_only() {
        assert_eq!("top".parse::<Category>().unwrap(), Category::Top);
        assert_eq!("shoes".parse::<Category>().unwrap(), Category::Shoes);
        assert!("scarf".parse::<Category>().is_err());
        assert!("Top".parse::<Category>().is_err());
    }

    #[test]
    fn test_item_serializes_kind_as_type() {
        let item = ClothingItem {
            id: "item-1".into(),
            image: "blob".into(),
            kind: Category::Bottom,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"bottom\""));

        let restored: ClothingItem = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, item);
    }

    #[test]
    fn test_outfit_omits_absent_optional_slots() {
        let outfit = Outfit {
            id: "outfit-1".into(),
            hat: None,
            top: ClothingItem {
                id: "a".into(),
                image: "img-a".into(),
                kind: Category::Top,
            },
            bottom: ClothingItem {
                id: "b".into(),
                image: "img-b".into(),
                kind: Category::Bottom,
            },
            shoes: None,
        };
        let json = serde_json::to_string(&outfit).unwrap();
        assert!(!json.contains("\"hat\""));
        assert!(!json.contains("\"shoes\""));

        let restored: Outfit = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, outfit);
    }

    #[test]
    fn test_sentinel_is_a_hat_with_reserved_id() {
        let sentinel = ClothingItem::no_hat();
        assert!(sentinel.is_sentinel());
        assert_eq!(sentinel.kind, Category::Hat);
        assert!(sentinel.image.is_empty());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = fresh_id("item");
        let b = fresh_id("item");
        assert_ne!(a, b);
        assert!(a.starts_with("item-"));
    }
}
