//! Durable per-host settings record

use serde::{Deserialize, Serialize};

use super::Resolution;
use crate::error::Result;

/// The stored form of a host's settings profile.
///
/// Symbolic choices are kept as indices into the catalog lists, the
/// multi-controller mode as a flag, and the bitrate in kbps. Every field is
/// required when decoding, so a blob written by an incompatible build fails
/// to decode instead of half-loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    pub resolution: Resolution,
    pub custom_resolution_width: u32,
    pub custom_resolution_height: u32,
    pub fps: u32,
    pub custom_fps: u32,
    pub bitrate_kbps: u32,
    pub video_codec: usize,
    pub hdr_enabled: bool,
    pub frame_pacing_mode: usize,
    pub audio_on_host: bool,
    pub multi_controller_mode: bool,
    pub swap_face_buttons: bool,
    pub optimize_for_performance: bool,
    pub auto_fullscreen: bool,
    pub rumble_enabled: bool,
    pub controller_driver: usize,
    pub mouse_driver: usize,
    pub emulate_guide_button: bool,
    pub artwork_width: u32,
    pub artwork_height: u32,
    pub dim_non_hovered_artwork: bool,
}

impl SettingsRecord {
    /// Encode the record for the blob store
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a record previously written by [`SettingsRecord::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
