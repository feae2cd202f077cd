//! Per-host settings profile store.
//!
//! Holds the live settings of the selected host and keeps the blob store in
//! step with them: every setter persists immediately, and switching hosts
//! reloads the profile stored for the new host (or seeds it with defaults).
//!
//! The store is single-threaded by construction; callers confine it to the
//! thread that drives their UI.

use crate::blob::BlobStore;
use crate::catalog::SettingsCatalog;
use crate::choice::{index_of, symbol_at};
use crate::error::{Error, Result};
use crate::hosts::HostDirectory;
use crate::models::{Host, HostSelection, ProfileSettings, Resolution, SettingsRecord};

/// Blob key holding the id of the last selected host
pub const SELECTED_PROFILE_KEY: &str = "selectedSettingsProfile";

/// Blob key holding the settings record of `host_id`
pub fn profile_key(host_id: &str) -> String {
    format!("settingsProfile-{host_id}")
}

type ChangeCallback = Box<dyn FnMut()>;

/// Live settings profile bound to the selected host
pub struct ProfileSettingsStore<B> {
    blobs: B,
    catalog: SettingsCatalog,
    hosts: Vec<Host>,
    selection: HostSelection,
    settings: ProfileSettings,
    resolution_changed: Option<ChangeCallback>,
    fps_changed: Option<ChangeCallback>,
}

impl<B: BlobStore> ProfileSettingsStore<B> {
    /// Build the store and pick the initial host.
    ///
    /// The last selected host wins if it is still listed; otherwise the first
    /// listed host is chosen. Settings start from the default table and
    /// nothing is written until a host is selected or settings are loaded.
    pub fn initialize<D: HostDirectory + ?Sized>(
        directory: &D,
        blobs: B,
        catalog: SettingsCatalog,
    ) -> Self {
        let hosts = directory.list_hosts().unwrap_or_else(|error| {
            tracing::warn!("Failed to list hosts, continuing without any: {}", error);
            Vec::new()
        });

        let last_selected = read_blob(&blobs, SELECTED_PROFILE_KEY)
            .and_then(|bytes| String::from_utf8(bytes).ok());
        let selection = initial_selection(&hosts, last_selected.as_deref());
        if let Some(host) = selection.host() {
            tracing::debug!("Initial settings profile: {}", host);
        }

        let settings = catalog.defaults();
        Self {
            blobs,
            catalog,
            hosts,
            selection,
            settings,
            resolution_changed: None,
            fps_changed: None,
        }
    }

    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub const fn selection(&self) -> &HostSelection {
        &self.selection
    }

    pub const fn selected_host(&self) -> Option<&Host> {
        self.selection.host()
    }

    pub const fn settings(&self) -> &ProfileSettings {
        &self.settings
    }

    pub const fn catalog(&self) -> &SettingsCatalog {
        &self.catalog
    }

    pub const fn blobs(&self) -> &B {
        &self.blobs
    }

    /// Called after every resolution change, including profile loads
    pub fn set_resolution_changed_callback(&mut self, callback: impl FnMut() + 'static) {
        self.resolution_changed = Some(Box::new(callback));
    }

    /// Called after every frame rate change, including profile loads
    pub fn set_fps_changed_callback(&mut self, callback: impl FnMut() + 'static) {
        self.fps_changed = Some(Box::new(callback));
    }

    /// Switch to `host`, remember it, and load its profile.
    ///
    /// `None` is ignored: the current selection, settings and stored pointer
    /// are all left untouched. There is no way to clear a selection.
    pub fn select_host(&mut self, host: Option<Host>) {
        let Some(host) = host else {
            tracing::debug!("Ignoring empty host selection");
            return;
        };

        tracing::info!("Selected settings profile {}", host);
        let id = host.id().as_bytes().to_vec();
        self.selection = HostSelection::Selected(host);
        if let Err(error) = self.blobs.set(SELECTED_PROFILE_KEY, id) {
            tracing::warn!("Failed to remember selected host: {}", error);
        }
        self.load_settings();
    }

    /// Select a host from the directory listing by its id
    pub fn select_host_by_id(&mut self, id: &str) -> Result<()> {
        let host = self
            .hosts
            .iter()
            .find(|host| host.id() == id)
            .cloned()
            .ok_or_else(|| Error::UnknownHost(id.to_string()))?;
        self.select_host(Some(host));
        Ok(())
    }

    /// Replace the live settings with the selected host's stored profile.
    ///
    /// Without a selected host, or when the stored profile is missing or
    /// unreadable, the defaults are applied and written back.
    pub fn load_settings(&mut self) {
        let Some(host_id) = self.selection.host().map(|host| host.id().to_string()) else {
            self.load_and_save_defaults();
            return;
        };

        let key = profile_key(&host_id);
        let Some(bytes) = read_blob(&self.blobs, &key) else {
            tracing::debug!("No stored profile for host {}, using defaults", host_id);
            self.load_and_save_defaults();
            return;
        };

        match SettingsRecord::from_bytes(&bytes) {
            Ok(record) => {
                tracing::debug!("Loaded profile '{}'", key);
                self.settings = self.catalog.to_settings(&record);
                self.notify_resolution_changed();
                self.notify_fps_changed();
            }
            Err(error) => {
                tracing::warn!(
                    "Discarding unreadable profile for host {}: {}",
                    host_id,
                    error
                );
                self.load_and_save_defaults();
            }
        }
    }

    /// Persist the live settings under the selected host's key.
    ///
    /// Does nothing without a selected host. Encoding and write failures are
    /// logged and dropped; the in-memory settings stay as they are.
    pub fn save_settings(&mut self) {
        let Some(host) = self.selection.host() else {
            tracing::debug!("No host selected, not saving settings");
            return;
        };

        let key = profile_key(host.id());
        let bytes = match self.to_record().to_bytes() {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::warn!("Failed to encode profile '{}': {}", key, error);
                return;
            }
        };

        match self.blobs.set(&key, bytes) {
            Ok(()) => tracing::debug!("Saved profile '{}'", key),
            Err(error) => tracing::warn!("Failed to save profile '{}': {}", key, error),
        }
    }

    /// Reset every field to the default table without touching storage
    pub fn load_defaults(&mut self) {
        self.settings = self.catalog.defaults();
        self.notify_resolution_changed();
        self.notify_fps_changed();
    }

    pub fn load_and_save_defaults(&mut self) {
        self.load_defaults();
        self.save_settings();
    }

    /// Stored form of the live settings
    pub fn to_record(&self) -> SettingsRecord {
        self.catalog.to_record(&self.settings)
    }

    pub const fn effective_resolution(&self) -> Resolution {
        self.settings.effective_resolution()
    }

    pub const fn effective_fps(&self) -> u32 {
        self.settings.effective_fps()
    }

    pub fn bitrate_kbps(&self) -> u32 {
        self.catalog.bitrate_kbps(self.settings.bitrate_slider)
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.update(|settings| settings.resolution = resolution);
        self.notify_resolution_changed();
    }

    pub fn set_custom_resolution_width(&mut self, width: u32) {
        self.update(|settings| settings.custom_resolution_width = width);
    }

    pub fn set_custom_resolution_height(&mut self, height: u32) {
        self.update(|settings| settings.custom_resolution_height = height);
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.update(|settings| settings.fps = fps);
        self.notify_fps_changed();
    }

    pub fn set_custom_fps(&mut self, fps: u32) {
        self.update(|settings| settings.custom_fps = fps);
    }

    /// Move the bitrate slider; positions past the step table are clamped
    pub fn set_bitrate_slider(&mut self, slider: usize) {
        let slider = slider.min(self.catalog.max_slider_index());
        self.update(|settings| settings.bitrate_slider = slider);
    }

    /// Choice setters store the catalog's own label; a label missing from
    /// the catalog list is replaced by the list's first entry.
    pub fn set_video_codec(&mut self, codec: &str) {
        let codec = catalog_label(codec, self.catalog.video_codecs);
        self.update(|settings| settings.video_codec = codec);
    }

    pub fn set_hdr_enabled(&mut self, enabled: bool) {
        self.update(|settings| settings.hdr_enabled = enabled);
    }

    pub fn set_frame_pacing_mode(&mut self, mode: &str) {
        let mode = catalog_label(mode, self.catalog.pacing_options);
        self.update(|settings| settings.frame_pacing_mode = mode);
    }

    pub fn set_audio_on_host(&mut self, enabled: bool) {
        self.update(|settings| settings.audio_on_host = enabled);
    }

    pub fn set_multi_controller_mode(&mut self, mode: &str) {
        let mode = catalog_label(mode, self.catalog.multi_controller_modes);
        self.update(|settings| settings.multi_controller_mode = mode);
    }

    pub fn set_swap_face_buttons(&mut self, enabled: bool) {
        self.update(|settings| settings.swap_face_buttons = enabled);
    }

    pub fn set_optimize_for_performance(&mut self, enabled: bool) {
        self.update(|settings| settings.optimize_for_performance = enabled);
    }

    pub fn set_auto_fullscreen(&mut self, enabled: bool) {
        self.update(|settings| settings.auto_fullscreen = enabled);
    }

    pub fn set_rumble_enabled(&mut self, enabled: bool) {
        self.update(|settings| settings.rumble_enabled = enabled);
    }

    pub fn set_controller_driver(&mut self, driver: &str) {
        let driver = catalog_label(driver, self.catalog.controller_drivers);
        self.update(|settings| settings.controller_driver = driver);
    }

    pub fn set_mouse_driver(&mut self, driver: &str) {
        let driver = catalog_label(driver, self.catalog.mouse_drivers);
        self.update(|settings| settings.mouse_driver = driver);
    }

    pub fn set_emulate_guide_button(&mut self, enabled: bool) {
        self.update(|settings| settings.emulate_guide_button = enabled);
    }

    /// Artwork dimensions are kept at 1px or more
    pub fn set_artwork_width(&mut self, width: u32) {
        self.update(|settings| settings.artwork_width = width.max(1));
    }

    pub fn set_artwork_height(&mut self, height: u32) {
        self.update(|settings| settings.artwork_height = height.max(1));
    }

    pub fn set_dim_non_hovered_artwork(&mut self, enabled: bool) {
        self.update(|settings| settings.dim_non_hovered_artwork = enabled);
    }

    fn update(&mut self, apply: impl FnOnce(&mut ProfileSettings)) {
        apply(&mut self.settings);
        self.save_settings();
    }

    fn notify_resolution_changed(&mut self) {
        if let Some(callback) = self.resolution_changed.as_mut() {
            callback();
        }
    }

    fn notify_fps_changed(&mut self) {
        if let Some(callback) = self.fps_changed.as_mut() {
            callback();
        }
    }
}

fn catalog_label(label: &str, list: &[&str]) -> String {
    symbol_at(index_of(label, list), list).to_string()
}

fn read_blob<B: BlobStore>(blobs: &B, key: &str) -> Option<Vec<u8>> {
    blobs.get(key).unwrap_or_else(|error| {
        tracing::warn!("Failed to read '{}', treating as absent: {}", key, error);
        None
    })
}

fn initial_selection(hosts: &[Host], last_selected: Option<&str>) -> HostSelection {
    last_selected
        .and_then(|id| hosts.iter().find(|host| host.id() == id))
        .or_else(|| hosts.first())
        .cloned()
        .map_or(HostSelection::NoSelection, HostSelection::Selected)
}
