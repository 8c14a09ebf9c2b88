//! # Packup Archive Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything that touches the ZIP format lives here:
//!
//! - **`item`**: `ItemSpec` (a name plus required/optional) and the `ItemOutcome` recorded for it.
//! - **`writer`**: `ArchiveWriter`, the scoped owner of the output file. Writes deflate entries and always finalizes.
//! - **`builder`**: `build_archive`, the single pass that resolves items, walks folders and fills the writer.
//! - **`listing`**: `list_entries`, reads an existing archive's central directory for `packup list`.
//!
//! ```rust
//! use crate::common::archive::{builder, item::ItemSpec};
//! use crate::core::clock::SystemClock;
//!
//! let items = ItemSpec::from_lists(cfg.items.required, cfg.items.optional);
//! let report = builder::build_archive(&base_dir, &cfg.archive.prefix, &items, &SystemClock)?;
//! ```
//!

pub mod builder;
pub mod item;
pub mod listing;
pub mod writer;
