//! In-memory settings profile

use serde::{Deserialize, Serialize};

use super::Resolution;

/// The live, user-facing settings of the selected host.
///
/// Symbolic choices hold their display labels and the bitrate is held as a
/// slider position into the catalog's step table. The catalog converts
/// between this and [`super::SettingsRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Selected resolution, or [`Resolution::CUSTOM`]
    pub resolution: Resolution,
    pub custom_resolution_width: u32,
    pub custom_resolution_height: u32,
    /// Selected frame rate, or 0 for custom
    pub fps: u32,
    pub custom_fps: u32,
    /// Position in the bitrate step table
    pub bitrate_slider: usize,
    pub video_codec: String,
    pub hdr_enabled: bool,
    pub frame_pacing_mode: String,
    pub audio_on_host: bool,
    pub multi_controller_mode: String,
    pub swap_face_buttons: bool,
    pub optimize_for_performance: bool,
    pub auto_fullscreen: bool,
    pub rumble_enabled: bool,
    pub controller_driver: String,
    pub mouse_driver: String,
    pub emulate_guide_button: bool,
    pub artwork_width: u32,
    pub artwork_height: u32,
    pub dim_non_hovered_artwork: bool,
}

impl ProfileSettings {
    /// Resolution the stream should actually use
    pub const fn effective_resolution(&self) -> Resolution {
        if self.resolution.is_custom() {
            Resolution::new(self.custom_resolution_width, self.custom_resolution_height)
        } else {
            self.resolution
        }
    }

    /// Frame rate the stream should actually use
    pub const fn effective_fps(&self) -> u32 {
        if self.fps == 0 {
            self.custom_fps
        } else {
            self.fps
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SettingsCatalog;

    #[test]
    fn custom_marker_switches_to_custom_values() {
        let mut settings = SettingsCatalog::standard().defaults();
        settings.custom_resolution_width = 3440;
        settings.custom_resolution_height = 1440;
        settings.custom_fps = 100;

        assert_eq!(settings.effective_resolution(), Resolution::new(1280, 720));
        assert_eq!(settings.effective_fps(), 60);

        settings.resolution = Resolution::CUSTOM;
        settings.fps = 0;
        assert_eq!(settings.effective_resolution(), Resolution::new(3440, 1440));
        assert_eq!(settings.effective_fps(), 100);
    }
}
