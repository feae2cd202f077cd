//! Fixed choice lists and the default settings table.
//!
//! A `SettingsCatalog` is built once and handed to the store, so tests can
//! inject their own tables instead of reaching for global state.

use crate::choice::{bool_from_symbol, index_of, symbol_at, symbol_from_bool};
use crate::models::{ProfileSettings, Resolution, SettingsRecord};

const RESOLUTIONS: &[Resolution] = &[
    Resolution::new(1280, 720),
    Resolution::new(1920, 1080),
    Resolution::new(2560, 1440),
    Resolution::new(3840, 2160),
    Resolution::CUSTOM,
];

const FRAME_RATES: &[u32] = &[30, 60, 90, 120, 144, 0];

const BITRATE_STEPS_MBPS: &[f32] = &[
    0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 12.0, 15.0, 18.0, 20.0,
    25.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 120.0, 150.0, 175.0, 200.0, 225.0,
    250.0, 275.0, 300.0,
];

const VIDEO_CODECS: &[&str] = &["H.264", "H.265"];
const PACING_OPTIONS: &[&str] = &["Lowest Latency", "Smoothest Video"];
const MULTI_CONTROLLER_MODES: &[&str] = &["Single", "Auto"];
const CONTROLLER_DRIVERS: &[&str] = &["HID", "MFi"];
const MOUSE_DRIVERS: &[&str] = &["HID", "MFi"];

/// Values a fresh profile starts with
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDefaults {
    pub resolution: Resolution,
    pub custom_resolution_width: u32,
    pub custom_resolution_height: u32,
    pub fps: u32,
    pub custom_fps: u32,
    /// Mapped to a slider position through the step table
    pub bitrate_kbps: u32,
    pub video_codec: &'static str,
    pub hdr_enabled: bool,
    pub frame_pacing_mode: &'static str,
    pub audio_on_host: bool,
    pub multi_controller_mode: &'static str,
    pub swap_face_buttons: bool,
    pub optimize_for_performance: bool,
    pub auto_fullscreen: bool,
    pub rumble_enabled: bool,
    pub controller_driver: &'static str,
    pub mouse_driver: &'static str,
    pub emulate_guide_button: bool,
    pub artwork_width: u32,
    pub artwork_height: u32,
    pub dim_non_hovered_artwork: bool,
}

impl Default for CatalogDefaults {
    fn default() -> Self {
        Self {
            resolution: Resolution::new(1280, 720),
            custom_resolution_width: 0,
            custom_resolution_height: 0,
            fps: 60,
            custom_fps: 0,
            bitrate_kbps: 10_000,
            video_codec: "H.264",
            hdr_enabled: false,
            frame_pacing_mode: "Smoothest Video",
            audio_on_host: false,
            multi_controller_mode: "Auto",
            swap_face_buttons: false,
            optimize_for_performance: false,
            auto_fullscreen: true,
            rumble_enabled: true,
            controller_driver: "HID",
            mouse_driver: "HID",
            emulate_guide_button: false,
            artwork_width: 300,
            artwork_height: 400,
            dim_non_hovered_artwork: true,
        }
    }
}

/// Choice lists, bitrate steps, and defaults for every profile field
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsCatalog {
    pub resolutions: &'static [Resolution],
    pub frame_rates: &'static [u32],
    /// Ascending, in Mbps
    pub bitrate_steps_mbps: &'static [f32],
    pub video_codecs: &'static [&'static str],
    pub pacing_options: &'static [&'static str],
    pub multi_controller_modes: &'static [&'static str],
    pub controller_drivers: &'static [&'static str],
    pub mouse_drivers: &'static [&'static str],
    pub defaults: CatalogDefaults,
}

impl Default for SettingsCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl SettingsCatalog {
    /// The catalog shipped with the client
    pub fn standard() -> Self {
        Self {
            resolutions: RESOLUTIONS,
            frame_rates: FRAME_RATES,
            bitrate_steps_mbps: BITRATE_STEPS_MBPS,
            video_codecs: VIDEO_CODECS,
            pacing_options: PACING_OPTIONS,
            multi_controller_modes: MULTI_CONTROLLER_MODES,
            controller_drivers: CONTROLLER_DRIVERS,
            mouse_drivers: MOUSE_DRIVERS,
            defaults: CatalogDefaults::default(),
        }
    }

    /// Bitrate in kbps for a slider position.
    ///
    /// Positions past the table read as the first step.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn bitrate_kbps(&self, slider: usize) -> u32 {
        self.bitrate_steps_mbps
            .get(slider)
            .or_else(|| self.bitrate_steps_mbps.first())
            .map_or(0, |mbps| (mbps * 1000.0).round() as u32)
    }

    /// First slider position whose step covers `kbps`, or 0 if none does.
    pub fn slider_index_for_bitrate(&self, kbps: u32) -> usize {
        (0..self.bitrate_steps_mbps.len())
            .find(|&index| kbps <= self.bitrate_kbps(index))
            .unwrap_or(0)
    }

    /// Highest valid slider position
    pub const fn max_slider_index(&self) -> usize {
        self.bitrate_steps_mbps.len().saturating_sub(1)
    }

    /// A profile populated from the default table
    pub fn defaults(&self) -> ProfileSettings {
        let defaults = &self.defaults;
        ProfileSettings {
            resolution: defaults.resolution,
            custom_resolution_width: defaults.custom_resolution_width,
            custom_resolution_height: defaults.custom_resolution_height,
            fps: defaults.fps,
            custom_fps: defaults.custom_fps,
            bitrate_slider: self.slider_index_for_bitrate(defaults.bitrate_kbps),
            video_codec: defaults.video_codec.to_string(),
            hdr_enabled: defaults.hdr_enabled,
            frame_pacing_mode: defaults.frame_pacing_mode.to_string(),
            audio_on_host: defaults.audio_on_host,
            multi_controller_mode: defaults.multi_controller_mode.to_string(),
            swap_face_buttons: defaults.swap_face_buttons,
            optimize_for_performance: defaults.optimize_for_performance,
            auto_fullscreen: defaults.auto_fullscreen,
            rumble_enabled: defaults.rumble_enabled,
            controller_driver: defaults.controller_driver.to_string(),
            mouse_driver: defaults.mouse_driver.to_string(),
            emulate_guide_button: defaults.emulate_guide_button,
            artwork_width: defaults.artwork_width,
            artwork_height: defaults.artwork_height,
            dim_non_hovered_artwork: defaults.dim_non_hovered_artwork,
        }
    }

    /// Durable form of `settings`
    pub fn to_record(&self, settings: &ProfileSettings) -> SettingsRecord {
        SettingsRecord {
            resolution: settings.resolution,
            custom_resolution_width: settings.custom_resolution_width,
            custom_resolution_height: settings.custom_resolution_height,
            fps: settings.fps,
            custom_fps: settings.custom_fps,
            bitrate_kbps: self.bitrate_kbps(settings.bitrate_slider),
            video_codec: index_of(&settings.video_codec, self.video_codecs),
            hdr_enabled: settings.hdr_enabled,
            frame_pacing_mode: index_of(&settings.frame_pacing_mode, self.pacing_options),
            audio_on_host: settings.audio_on_host,
            multi_controller_mode: bool_from_symbol(
                &settings.multi_controller_mode,
                self.multi_controller_modes,
            ),
            swap_face_buttons: settings.swap_face_buttons,
            optimize_for_performance: settings.optimize_for_performance,
            auto_fullscreen: settings.auto_fullscreen,
            rumble_enabled: settings.rumble_enabled,
            controller_driver: index_of(&settings.controller_driver, self.controller_drivers),
            mouse_driver: index_of(&settings.mouse_driver, self.mouse_drivers),
            emulate_guide_button: settings.emulate_guide_button,
            artwork_width: settings.artwork_width,
            artwork_height: settings.artwork_height,
            dim_non_hovered_artwork: settings.dim_non_hovered_artwork,
        }
    }

    /// Live profile rebuilt from a stored record
    pub fn to_settings(&self, record: &SettingsRecord) -> ProfileSettings {
        ProfileSettings {
            resolution: record.resolution,
            custom_resolution_width: record.custom_resolution_width,
            custom_resolution_height: record.custom_resolution_height,
            fps: record.fps,
            custom_fps: record.custom_fps,
            bitrate_slider: self.slider_index_for_bitrate(record.bitrate_kbps),
            video_codec: symbol_at(record.video_codec, self.video_codecs).to_string(),
            hdr_enabled: record.hdr_enabled,
            frame_pacing_mode: symbol_at(record.frame_pacing_mode, self.pacing_options)
                .to_string(),
            audio_on_host: record.audio_on_host,
            multi_controller_mode: symbol_from_bool(
                record.multi_controller_mode,
                self.multi_controller_modes,
            )
            .to_string(),
            swap_face_buttons: record.swap_face_buttons,
            optimize_for_performance: record.optimize_for_performance,
            auto_fullscreen: record.auto_fullscreen,
            rumble_enabled: record.rumble_enabled,
            controller_driver: symbol_at(record.controller_driver, self.controller_drivers)
                .to_string(),
            mouse_driver: symbol_at(record.mouse_driver, self.mouse_drivers).to_string(),
            emulate_guide_button: record.emulate_guide_button,
            artwork_width: record.artwork_width.max(1),
            artwork_height: record.artwork_height.max(1),
            dim_non_hovered_artwork: record.dim_non_hovered_artwork,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_bitrate_is_ten_mbps() {
        let catalog = SettingsCatalog::standard();
        let defaults = catalog.defaults();
        assert_eq!(defaults.bitrate_slider, 12);
        assert_eq!(catalog.bitrate_kbps(defaults.bitrate_slider), 10_000);
    }

    #[test]
    fn every_slider_position_survives_a_round_trip() {
        let catalog = SettingsCatalog::standard();
        for slider in 0..=catalog.max_slider_index() {
            let kbps = catalog.bitrate_kbps(slider);
            assert_eq!(catalog.slider_index_for_bitrate(kbps), slider);
        }
    }

    #[test]
    fn bitrate_between_steps_rounds_up() {
        let catalog = SettingsCatalog::standard();
        assert_eq!(catalog.slider_index_for_bitrate(11_000), 13);
        assert_eq!(catalog.slider_index_for_bitrate(0), 0);
        assert_eq!(catalog.slider_index_for_bitrate(750), 1);
    }

    #[test]
    fn bitrate_above_table_falls_back_to_first_slot() {
        let catalog = SettingsCatalog::standard();
        assert_eq!(catalog.slider_index_for_bitrate(500_000), 0);
        assert_eq!(catalog.bitrate_kbps(1_000), 500);
    }

    #[test]
    fn default_table_matches_client_defaults() {
        let defaults = SettingsCatalog::standard().defaults();
        assert_eq!(defaults.resolution, Resolution::new(1280, 720));
        assert_eq!(defaults.fps, 60);
        assert_eq!(defaults.video_codec, "H.264");
        assert_eq!(defaults.frame_pacing_mode, "Smoothest Video");
        assert_eq!(defaults.multi_controller_mode, "Auto");
        assert_eq!(defaults.controller_driver, "HID");
        assert_eq!(defaults.mouse_driver, "HID");
        assert!(defaults.auto_fullscreen);
        assert!(defaults.rumble_enabled);
        assert!(defaults.dim_non_hovered_artwork);
        assert!(!defaults.hdr_enabled);
        assert_eq!((defaults.artwork_width, defaults.artwork_height), (300, 400));
    }

    #[test]
    fn record_conversion_preserves_settings() {
        let catalog = SettingsCatalog::standard();
        let settings = ProfileSettings {
            video_codec: "H.265".to_string(),
            frame_pacing_mode: "Lowest Latency".to_string(),
            multi_controller_mode: "Single".to_string(),
            controller_driver: "MFi".to_string(),
            bitrate_slider: 20,
            ..catalog.defaults()
        };

        let record = catalog.to_record(&settings);
        assert_eq!(record.video_codec, 1);
        assert_eq!(record.frame_pacing_mode, 0);
        assert!(!record.multi_controller_mode);
        assert_eq!(record.controller_driver, 1);
        assert_eq!(record.bitrate_kbps, 50_000);

        assert_eq!(catalog.to_settings(&record), settings);
    }

    #[test]
    fn zero_artwork_dimensions_load_as_one_pixel() {
        let catalog = SettingsCatalog::standard();
        let mut record = catalog.to_record(&catalog.defaults());
        record.artwork_width = 0;
        record.artwork_height = 0;

        let settings = catalog.to_settings(&record);
        assert_eq!((settings.artwork_width, settings.artwork_height), (1, 1));
    }

    #[test]
    fn unknown_labels_are_stored_as_first_choice() {
        let catalog = SettingsCatalog::standard();
        let settings = ProfileSettings {
            video_codec: "AV1".to_string(),
            mouse_driver: "PS/2".to_string(),
            ..catalog.defaults()
        };

        let record = catalog.to_record(&settings);
        assert_eq!(record.video_codec, 0);
        assert_eq!(record.mouse_driver, 0);
    }
}
