//! streamprefs-core - Core library for streamprefs
//!
//! This crate contains the host and settings models, the settings catalog,
//! the blob store and host directory abstractions, and the per-host
//! `ProfileSettingsStore` used by every streamprefs front end.

pub mod blob;
pub mod catalog;
pub mod choice;
pub mod error;
pub mod hosts;
pub mod models;
pub mod store;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use catalog::SettingsCatalog;
pub use error::{Error, Result};
pub use hosts::{HostDirectory, HostsFile};
pub use models::{Host, HostSelection, ProfileSettings, Resolution, SettingsRecord};
pub use store::{profile_key, ProfileSettingsStore, SELECTED_PROFILE_KEY};
