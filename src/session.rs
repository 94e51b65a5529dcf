//! The wardrobe session.
//!
//! One `Wardrobe` value owns everything with process lifetime: the
//! catalog, the saved outfits, the in-progress composer selection, the
//! pending-upload queue, and the display preferences. It is built once
//! at startup from the persistence bridge and every mutation goes
//! through it, so the whole-state persistence writes and the
//! catalog-to-outfits delete cascade always happen inside a single
//! method call. There are no ambient globals.

use crate::error::Error;
use crate::prefs::{AccentColor, Preferences, Theme};
use crate::state::catalog::{Catalog, CategorizedView};
use crate::state::composer::Composer;
use crate::state::data::{fresh_id, Category, Outfit};
use crate::state::outfits::OutfitStore;
use crate::storage::{KeyValueStore, CATALOG_KEY, OUTFITS_KEY, ACCENT_KEY, THEME_KEY};

/// A decoded upload waiting for the user to classify it.
///
/// The image handle is opaque; the id is provisional and discarded
/// once the upload becomes a catalog item. The queue is in-memory
/// only: an unclassified upload does not survive a restart.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub id: String,
    pub image: String,
}

pub struct Wardrobe<S: KeyValueStore> {
    store: S,
    catalog: Catalog,
    outfits: OutfitStore,
    composer: Composer,
    pending: Vec<PendingUpload>,
    prefs: Preferences,
}

impl<S: KeyValueStore> Wardrobe<S> {
    /// Build a session from persisted state.
    ///
    /// A missing blob means a fresh install; an unreadable blob is
    /// logged and treated the same way. Corruption never crashes the
    /// session and never propagates past this point.
    pub fn open(store: S) -> Result<Self, Error> {
        let catalog = match store.get(CATALOG_KEY)? {
            Some(raw) => Catalog::from_json(&raw).unwrap_or_else(|err| {
                log::warn!("stored catalog is unreadable, starting empty: {err}");
                Catalog::new()
            }),
            None => Catalog::new(),
        };
        let outfits = match store.get(OUTFITS_KEY)? {
            Some(raw) => OutfitStore::from_json(&raw).unwrap_or_else(|err| {
                log::warn!("stored outfits are unreadable, starting empty: {err}");
                OutfitStore::new()
            }),
            None => OutfitStore::new(),
        };
        let prefs = Preferences::load(&store)?;

        log::info!(
            "wardrobe ready: {} items, {} saved outfits",
            catalog.len(),
            outfits.len()
        );

        Ok(Wardrobe {
            store,
            catalog,
            outfits,
            composer: Composer::new(),
            pending: Vec::new(),
            prefs,
        })
    }

    // ---------- uploads & classification ----------

    /// Queue a decoded upload for classification. Returns the
    /// provisional id.
    pub fn upload_image(&mut self, image: impl Into<String>) -> Result<String, Error> {
        let image = image.into();
        if image.trim().is_empty() {
            return Err(Error::MissingImage);
        }
        let id = fresh_id("upload");
        self.pending.push(PendingUpload {
            id: id.clone(),
            image,
        });
        Ok(id)
    }

    pub fn pending(&self) -> &[PendingUpload] {
        &self.pending
    }

    /// Classify a pending upload into the catalog. Returns the new
    /// item's id, or None if the pending id is unknown (a stale
    /// classify action is a no-op, not an error).
    pub fn classify_pending(
        &mut self,
        pending_id: &str,
        category: Category,
    ) -> Result<Option<String>, Error> {
        let Some(pos) = self.pending.iter().position(|p| p.id == pending_id) else {
            return Ok(None);
        };
        let upload = self.pending.remove(pos);
        let id = self.add_item(upload.image, category)?;
        Ok(Some(id))
    }

    /// Drop a pending upload without classifying it. Unknown id is a
    /// no-op.
    pub fn discard_pending(&mut self, pending_id: &str) {
        self.pending.retain(|p| p.id != pending_id);
    }

    // ---------- catalog ----------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The per-category view the UI renders and the composer indexes.
    /// Recomputed on every call; never stored.
    pub fn view(&self) -> CategorizedView {
        self.catalog.view()
    }

    /// Add a classified item directly and persist the catalog.
    pub fn add_item(&mut self, image: impl Into<String>, category: Category) -> Result<String, Error> {
        let id = self.catalog.add(image.into(), category)?;
        self.persist_catalog()?;
        Ok(id)
    }

    /// Delete a clothing item and cascade into the saved outfits: any
    /// outfit slot referencing the item is unset, and an outfit left
    /// without its top or bottom is removed entirely. The cascade runs
    /// before anything is persisted, so no stored state ever holds a
    /// dangling reference. Unknown id is a no-op.
    pub fn delete_item(&mut self, id: &str) -> Result<(), Error> {
        if !self.catalog.remove(id) {
            return Ok(());
        }
        let cascaded = self.outfits.purge_item(id);
        self.persist_catalog()?;
        if cascaded {
            self.persist_outfits()?;
        }
        Ok(())
    }

    // ---------- composing ----------

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Cycle the selection for one category.
    pub fn change_part(&mut self, category: Category, delta: isize) {
        let view = self.catalog.view();
        self.composer.change_part(&view, category, delta);
    }

    /// Whether the current selection is save-eligible. The UI keeps
    /// the save action disabled whenever this is false.
    pub fn can_save(&self) -> bool {
        self.composer.can_save(&self.catalog.view())
    }

    /// Save the current composition: materialize it, append it to the
    /// store with the browse cursor focused on it, reset the selection
    /// and persist. Fails with `IncompleteOutfit` if the selection
    /// lacks a top or bottom; nothing is stored in that case.
    pub fn save_outfit(&mut self) -> Result<String, Error> {
        let outfit = self.composer.build_outfit(&self.catalog.view())?;
        let id = outfit.id.clone();
        self.outfits.save(outfit);
        self.composer.reset();
        self.persist_outfits()?;
        log::info!("saved outfit {id}");
        Ok(id)
    }

    // ---------- browsing saved outfits ----------

    pub fn outfits(&self) -> &OutfitStore {
        &self.outfits
    }

    /// Cycle the browse cursor over the saved outfits.
    pub fn change_browse(&mut self, delta: isize) {
        self.outfits.change_browse(delta);
    }

    /// The saved outfit currently being browsed, if any.
    pub fn browsing(&self) -> Option<&Outfit> {
        self.outfits.browsing()
    }

    /// Delete a saved outfit. Unknown id is a no-op.
    pub fn delete_outfit(&mut self, id: &str) -> Result<(), Error> {
        if self.outfits.delete(id) {
            self.persist_outfits()?;
        }
        Ok(())
    }

    // ---------- preferences ----------

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), Error> {
        self.prefs.theme = theme;
        self.store.set(THEME_KEY, theme.as_str())
    }

    pub fn set_accent(&mut self, accent: AccentColor) -> Result<(), Error> {
        self.prefs.accent = accent;
        self.store.set(ACCENT_KEY, accent.as_str())
    }

    // ---------- persistence ----------

    fn persist_catalog(&mut self) -> Result<(), Error> {
        let raw = self.catalog.to_json()?;
        self.store.set(CATALOG_KEY, &raw)
    }

    fn persist_outfits(&mut self) -> Result<(), Error> {
        let raw = self.outfits.to_json()?;
        self.store.set(OUTFITS_KEY, &raw)
    }
}
