//! Durable-slot persistence for the cart.
//!
//! The cart survives page views through a single named slot holding a JSON
//! array of line item records. Persistence is best-effort and fire-and-forget:
//! there are no retries, and the store treats every failure as non-fatal.
//!
//! # Snapshot compatibility
//!
//! Earlier releases of the storefront wrote Spanish field names (`nombre`,
//! `precio`, `fechaAgregado`) and an always-1 `cantidad` column. Readers
//! tolerate all of these: renamed fields are accepted via aliases, absent
//! fields fall back to their defaults, and unknown fields are ignored. A slot
//! that cannot be parsed at all is treated the same as an absent one.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use magma_core::{Item, ItemId, ItemName, Price};

/// Errors that can occur when reading or writing the slot.
///
/// These never escape the cart store; they are logged and swallowed there.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the slot failed.
    #[error("slot I/O error: {0}")]
    Io(#[from] io::Error),

    /// The snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Backend for the durable cart slot.
pub trait CartStorage {
    /// Read the full item sequence from the slot.
    ///
    /// An absent slot is not an error: it reads as an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the slot exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<Vec<Item>, StorageError>;

    /// Replace the slot contents with the given sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot cannot be written.
    fn save(&mut self, items: &[Item]) -> Result<(), StorageError>;
}

/// One line item as stored in the snapshot.
///
/// All fields are optional on read so that records written by any earlier
/// storefront release still load.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredItem {
    #[serde(default)]
    id: Option<ItemId>,
    #[serde(default, alias = "nombre")]
    name: Option<String>,
    #[serde(default, alias = "precio", alias = "price")]
    unit_price: Option<Price>,
    #[serde(default, alias = "fechaAgregado", alias = "timestamp")]
    added_at: Option<DateTime<Utc>>,
}

impl StoredItem {
    /// Fill the gaps a legacy record may have: mint an ID, substitute the
    /// placeholder label, zero price, epoch timestamp.
    fn into_item(self) -> Item {
        Item {
            id: self.id.unwrap_or_else(ItemId::generate),
            name: ItemName::or_placeholder(self.name.as_deref().unwrap_or("")),
            unit_price: self.unit_price.unwrap_or(Price::ZERO),
            added_at: self.added_at.unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

impl From<&Item> for StoredItem {
    fn from(item: &Item) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: Some(item.name.as_str().to_owned()),
            unit_price: Some(item.unit_price),
            added_at: Some(item.added_at),
        }
    }
}

fn decode_snapshot(raw: &str) -> Result<Vec<Item>, StorageError> {
    let stored: Vec<StoredItem> = serde_json::from_str(raw)?;
    Ok(stored.into_iter().map(StoredItem::into_item).collect())
}

fn encode_snapshot(items: &[Item]) -> Result<String, StorageError> {
    let stored: Vec<StoredItem> = items.iter().map(StoredItem::from).collect();
    Ok(serde_json::to_string(&stored)?)
}

/// The durable slot as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backend for the given slot file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Item>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode_snapshot(&raw),
            // No slot yet: no cart yet.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, items: &[Item]) -> Result<(), StorageError> {
        let raw = encode_snapshot(items)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory slot, mainly a test double for [`JsonFileStorage`].
///
/// Holds the raw snapshot string, so tests can inject legacy or corrupt
/// content with [`MemoryStorage::with_slot`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    /// Create an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Create a slot pre-filled with a raw snapshot string.
    pub fn with_slot(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
        }
    }

    /// The raw slot contents, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Item>, StorageError> {
        self.slot.as_deref().map_or_else(|| Ok(Vec::new()), decode_snapshot)
    }

    fn save(&mut self, items: &[Item]) -> Result<(), StorageError> {
        self.slot = Some(encode_snapshot(items)?);
        Ok(())
    }
}
