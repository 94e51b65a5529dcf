//! State management module
//!
//! This module holds the whole outfit engine:
//! - Shared data structures (data.rs)
//! - Circular index arithmetic (cycler.rs)
//! - The clothing catalog and its categorized view (catalog.rs)
//! - The in-progress outfit selection (composer.rs)
//! - Saved outfits and the browse cursor (outfits.rs)

pub mod catalog;
pub mod composer;
pub mod cycler;
pub mod data;
pub mod outfits;
