use crate::cli::SettingField;
use crate::commands::common::{
    apply_setting, field_name, format_profile_lines, open_store, profile_view, require_host,
};
use crate::config::CliPaths;
use crate::error::CliError;

pub fn run_select(paths: &CliPaths, host_id: &str) -> Result<(), CliError> {
    let mut store = open_store(paths)?;
    store.select_host_by_id(host_id.trim())?;
    let host = require_host(&store)?;
    println!("Selected {host}");
    Ok(())
}

pub fn run_show(paths: &CliPaths, as_json: bool) -> Result<(), CliError> {
    let mut store = open_store(paths)?;
    require_host(&store)?;
    store.load_settings();

    let view = profile_view(&store)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        for line in format_profile_lines(&view) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn run_set(paths: &CliPaths, field: SettingField, value: &str) -> Result<(), CliError> {
    let mut store = open_store(paths)?;
    require_host(&store)?;
    store.load_settings();

    apply_setting(&mut store, field, value)?;
    let host = require_host(&store)?;
    println!("Set {} = {} for {host}", field_name(field), value.trim());
    Ok(())
}

pub fn run_reset(paths: &CliPaths) -> Result<(), CliError> {
    let mut store = open_store(paths)?;
    require_host(&store)?;
    store.load_and_save_defaults();

    let host = require_host(&store)?;
    println!("Reset profile for {host}");
    Ok(())
}
