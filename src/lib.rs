//! Wardrobe Studio: a personal wardrobe catalog and outfit-planning
//! engine.
//!
//! Users upload clothing photos, classify them into the four fixed
//! slots (hat, top, bottom, shoes), assemble outfits by cycling
//! through items per slot, and keep a small catalog of clothing and
//! saved outfits on the local machine. This crate is the engine under
//! that flow: the data model, the categorized-view and cycling logic,
//! the save-eligibility rules, and the cascade that keeps saved
//! outfits consistent when clothing is deleted. Rendering and the
//! upload/image-decoding pipeline live outside; images pass through as
//! opaque string handles.
//!
//! Typical wiring:
//!
//! ```no_run
//! use wardrobe_studio::{Category, SqliteStore, Wardrobe};
//!
//! # fn main() -> Result<(), wardrobe_studio::Error> {
//! let store = SqliteStore::open_default()?;
//! let mut wardrobe = Wardrobe::open(store)?;
//!
//! let upload = wardrobe.upload_image("data:image/png;base64,...")?;
//! let _item = wardrobe.classify_pending(&upload, Category::Top)?;
//!
//! wardrobe.change_part(Category::Top, 1);
//! if wardrobe.can_save() {
//!     wardrobe.save_outfit()?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod prefs;
pub mod session;
pub mod state;
pub mod storage;

pub use error::Error;
pub use prefs::{AccentColor, Preferences, Theme};
pub use session::{PendingUpload, Wardrobe};
pub use state::catalog::{Catalog, CategorizedView};
pub use state::composer::Composer;
pub use state::cycler::next_index;
pub use state::data::{Category, ClothingItem, Outfit, NO_HAT_ID};
pub use state::outfits::OutfitStore;
pub use storage::sqlite::SqliteStore;
pub use storage::{KeyValueStore, MemoryStore};
