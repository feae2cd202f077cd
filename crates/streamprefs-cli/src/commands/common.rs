use clap::ValueEnum;
use serde::Serialize;
use streamprefs_core::choice::{bool_from_index, symbol_at, symbol_from_bool};
use streamprefs_core::{
    BlobStore, FileBlobStore, Host, HostsFile, ProfileSettings, ProfileSettingsStore, Resolution,
    SettingsCatalog,
};

use crate::cli::SettingField;
use crate::config::CliPaths;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct ProfileView<'a> {
    pub host_id: &'a str,
    pub host_name: &'a str,
    pub effective_resolution: String,
    pub effective_fps: u32,
    pub bitrate_kbps: u32,
    pub settings: &'a ProfileSettings,
}

#[derive(Debug, Serialize)]
pub struct HostListItem<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub selected: bool,
}

pub fn open_store(paths: &CliPaths) -> Result<ProfileSettingsStore<FileBlobStore>, CliError> {
    let blobs = FileBlobStore::open(&paths.store)?;
    let hosts = HostsFile::new(&paths.hosts);
    Ok(ProfileSettingsStore::initialize(
        &hosts,
        blobs,
        SettingsCatalog::standard(),
    ))
}

pub fn require_host<B: BlobStore>(store: &ProfileSettingsStore<B>) -> Result<&Host, CliError> {
    store.selected_host().ok_or(CliError::NoHostSelected)
}

pub fn profile_view<B: BlobStore>(
    store: &ProfileSettingsStore<B>,
) -> Result<ProfileView<'_>, CliError> {
    let host = require_host(store)?;
    Ok(ProfileView {
        host_id: host.id(),
        host_name: host.name(),
        effective_resolution: store.effective_resolution().to_string(),
        effective_fps: store.effective_fps(),
        bitrate_kbps: store.bitrate_kbps(),
        settings: store.settings(),
    })
}

pub fn format_profile_lines(view: &ProfileView<'_>) -> Vec<String> {
    let settings = view.settings;
    let on_off = |flag: bool| if flag { "on" } else { "off" };
    vec![
        format!("Profile for {} ({})", view.host_name, view.host_id),
        format!(
            "  resolution          {} (streams at {})",
            settings.resolution, view.effective_resolution
        ),
        format!(
            "  custom resolution   {}x{}",
            settings.custom_resolution_width, settings.custom_resolution_height
        ),
        format!(
            "  fps                 {} (streams at {})",
            format_fps(settings.fps),
            view.effective_fps
        ),
        format!("  custom fps          {}", settings.custom_fps),
        format!("  bitrate             {} kbps", view.bitrate_kbps),
        format!("  codec               {}", settings.video_codec),
        format!("  hdr                 {}", on_off(settings.hdr_enabled)),
        format!("  frame pacing        {}", settings.frame_pacing_mode),
        format!("  audio on host       {}", on_off(settings.audio_on_host)),
        format!("  multi-controller    {}", settings.multi_controller_mode),
        format!("  swap buttons        {}", on_off(settings.swap_face_buttons)),
        format!(
            "  optimize            {}",
            on_off(settings.optimize_for_performance)
        ),
        format!("  auto fullscreen     {}", on_off(settings.auto_fullscreen)),
        format!("  rumble              {}", on_off(settings.rumble_enabled)),
        format!("  controller driver   {}", settings.controller_driver),
        format!("  mouse driver        {}", settings.mouse_driver),
        format!(
            "  emulate guide       {}",
            on_off(settings.emulate_guide_button)
        ),
        format!(
            "  artwork             {}x{}",
            settings.artwork_width, settings.artwork_height
        ),
        format!(
            "  dim artwork         {}",
            on_off(settings.dim_non_hovered_artwork)
        ),
    ]
}

fn format_fps(fps: u32) -> String {
    if fps == 0 {
        "custom".to_string()
    } else {
        fps.to_string()
    }
}

pub fn field_name(field: SettingField) -> String {
    field
        .to_possible_value()
        .map_or_else(|| format!("{field:?}"), |value| value.get_name().to_string())
}

fn invalid(field: SettingField, message: impl Into<String>) -> CliError {
    CliError::InvalidValue {
        field: field_name(field),
        message: message.into(),
    }
}

/// Apply `value` to `field` through the store's setter.
pub fn apply_setting<B: BlobStore>(
    store: &mut ProfileSettingsStore<B>,
    field: SettingField,
    value: &str,
) -> Result<(), CliError> {
    let catalog = store.catalog().clone();
    match field {
        SettingField::Resolution => {
            store.set_resolution(parse_resolution(field, value, &catalog)?);
        }
        SettingField::CustomWidth => store.set_custom_resolution_width(parse_u32(field, value)?),
        SettingField::CustomHeight => store.set_custom_resolution_height(parse_u32(field, value)?),
        SettingField::Fps => store.set_fps(parse_fps(field, value, &catalog)?),
        SettingField::CustomFps => store.set_custom_fps(parse_u32(field, value)?),
        SettingField::Bitrate => store.set_bitrate_slider(parse_bitrate(field, value, &catalog)?),
        SettingField::Codec => {
            store.set_video_codec(parse_choice(field, value, catalog.video_codecs)?);
        }
        SettingField::Hdr => store.set_hdr_enabled(parse_bool(field, value)?),
        SettingField::FramePacing => {
            store.set_frame_pacing_mode(parse_choice(field, value, catalog.pacing_options)?);
        }
        SettingField::AudioOnHost => store.set_audio_on_host(parse_bool(field, value)?),
        SettingField::MultiController => store.set_multi_controller_mode(parse_flag_choice(
            field,
            value,
            catalog.multi_controller_modes,
        )?),
        SettingField::SwapButtons => store.set_swap_face_buttons(parse_bool(field, value)?),
        SettingField::Optimize => store.set_optimize_for_performance(parse_bool(field, value)?),
        SettingField::AutoFullscreen => store.set_auto_fullscreen(parse_bool(field, value)?),
        SettingField::Rumble => store.set_rumble_enabled(parse_bool(field, value)?),
        SettingField::ControllerDriver => {
            store.set_controller_driver(parse_choice(field, value, catalog.controller_drivers)?);
        }
        SettingField::MouseDriver => {
            store.set_mouse_driver(parse_choice(field, value, catalog.mouse_drivers)?);
        }
        SettingField::EmulateGuide => store.set_emulate_guide_button(parse_bool(field, value)?),
        SettingField::ArtworkWidth => store.set_artwork_width(parse_positive(field, value)?),
        SettingField::ArtworkHeight => store.set_artwork_height(parse_positive(field, value)?),
        SettingField::DimArtwork => store.set_dim_non_hovered_artwork(parse_bool(field, value)?),
    }
    Ok(())
}

pub fn parse_bool(field: SettingField, value: &str) -> Result<bool, CliError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(invalid(field, format!("expected on/off, got '{other}'"))),
    }
}

pub fn parse_u32(field: SettingField, value: &str) -> Result<u32, CliError> {
    value
        .trim()
        .parse()
        .map_err(|error| invalid(field, format!("'{}': {error}", value.trim())))
}

fn parse_positive(field: SettingField, value: &str) -> Result<u32, CliError> {
    match parse_u32(field, value)? {
        0 => Err(invalid(field, "must be greater than zero")),
        parsed => Ok(parsed),
    }
}

/// Match a label (case-insensitively) or an index into `list`.
pub fn parse_choice(
    field: SettingField,
    value: &str,
    list: &[&'static str],
) -> Result<&'static str, CliError> {
    let value = value.trim();
    if let Some(label) = list
        .iter()
        .copied()
        .find(|label| label.eq_ignore_ascii_case(value))
    {
        return Ok(label);
    }

    match value.parse::<usize>() {
        Ok(index) if index < list.len() => Ok(symbol_at(index, list)),
        _ => Err(invalid(
            field,
            format!("expected one of {}, got '{value}'", list.join(", ")),
        )),
    }
}

/// Like [`parse_choice`] for two-way choices stored as a flag.
pub fn parse_flag_choice(
    field: SettingField,
    value: &str,
    list: &[&'static str],
) -> Result<&'static str, CliError> {
    match value.trim().parse::<usize>() {
        Ok(index) if index < list.len() => {
            Ok(symbol_from_bool(bool_from_index(index, list), list))
        }
        _ => parse_choice(field, value, list),
    }
}

pub fn parse_resolution(
    field: SettingField,
    value: &str,
    catalog: &SettingsCatalog,
) -> Result<Resolution, CliError> {
    let resolution = value
        .parse::<Resolution>()
        .map_err(|error| invalid(field, error.to_string()))?;
    if catalog.resolutions.contains(&resolution) {
        Ok(resolution)
    } else {
        let allowed = catalog
            .resolutions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        Err(invalid(
            field,
            format!("expected one of {}", allowed.join(", ")),
        ))
    }
}

pub fn parse_fps(
    field: SettingField,
    value: &str,
    catalog: &SettingsCatalog,
) -> Result<u32, CliError> {
    let fps = if value.trim().eq_ignore_ascii_case("custom") {
        0
    } else {
        parse_u32(field, value)?
    };
    if catalog.frame_rates.contains(&fps) {
        Ok(fps)
    } else {
        let allowed = catalog
            .frame_rates
            .iter()
            .map(|fps| format_fps(*fps))
            .collect::<Vec<_>>();
        Err(invalid(
            field,
            format!("expected one of {}", allowed.join(", ")),
        ))
    }
}

/// Parse a bitrate in Mbps and return the slider position covering it.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_bitrate(
    field: SettingField,
    value: &str,
    catalog: &SettingsCatalog,
) -> Result<usize, CliError> {
    let mbps = value
        .trim()
        .parse::<f32>()
        .map_err(|error| invalid(field, format!("'{}': {error}", value.trim())))?;
    if !mbps.is_finite() || mbps <= 0.0 {
        return Err(invalid(field, "must be a positive number of Mbps"));
    }

    let kbps = (mbps * 1000.0).round() as u32;
    let max_kbps = catalog.bitrate_kbps(catalog.max_slider_index());
    if kbps > max_kbps {
        return Err(invalid(
            field,
            format!("maximum is {} Mbps", max_kbps / 1000),
        ));
    }
    Ok(catalog.slider_index_for_bitrate(kbps))
}
