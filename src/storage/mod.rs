//! Storage module for persisted state and configuration.
//!
//! Every loader is total: a missing blob yields the default value, and a
//! malformed blob is logged and replaced by the default as well.

pub mod blob;
pub mod config;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::collections::CollectionComments;
use crate::places::{seed, PlaceCatalog};
use crate::route::Route;
use crate::stats::ActivityLog;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore, StorageError};
pub use config::{AppConfig, ConfigError, LocationSettings, LoggingSettings};

/// Blob holding the place catalog.
pub const PLACES_BLOB: &str = "places";
/// Blob holding the current route.
pub const ROUTE_BLOB: &str = "currentRoute";
/// Blob holding collection comments.
pub const COMMENTS_BLOB: &str = "collectionComments";
/// Blob holding the active days.
pub const ACTIVITY_BLOB: &str = "activeDays";

/// Load the catalog, falling back to the bundled default.
pub fn load_places(store: &impl BlobStore) -> PlaceCatalog {
    load_or_else(store, PLACES_BLOB, seed::default_catalog)
}

/// Load the current route, falling back to an empty route.
pub fn load_route(store: &impl BlobStore) -> Route {
    load_or_else(store, ROUTE_BLOB, Route::new)
}

/// Load collection comments, falling back to none.
pub fn load_comments(store: &impl BlobStore) -> CollectionComments {
    load_or_else(store, COMMENTS_BLOB, CollectionComments::default)
}

/// Load the activity log, falling back to an empty log.
pub fn load_activity(store: &impl BlobStore) -> ActivityLog {
    load_or_else(store, ACTIVITY_BLOB, ActivityLog::default)
}

/// Serialize a value and write it to a blob.
pub fn save<T: Serialize>(store: &impl BlobStore, name: &str, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.write(name, &json)
}

fn load_or_else<T, F>(store: &impl BlobStore, name: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.read(name) {
        Ok(Some(contents)) => match serde_json::from_str(&contents) {
            Ok(value) => {
                tracing::debug!(blob = name, "Loaded stored state");
                value
            }
            Err(e) => {
                tracing::warn!(blob = name, error = %e, "Malformed stored state, using default");
                fallback()
            }
        },
        Ok(None) => fallback(),
        Err(e) => {
            tracing::warn!(blob = name, error = %e, "Failed to read stored state, using default");
            fallback()
        }
    }
}
