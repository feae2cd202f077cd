use streamprefs_core::{Host, HostDirectory, HostsFile};

use crate::commands::common::{open_store, HostListItem};
use crate::config::CliPaths;
use crate::error::CliError;

pub fn run_hosts_list(paths: &CliPaths, as_json: bool) -> Result<(), CliError> {
    let store = open_store(paths)?;
    let selected = store.selected_host();
    let items = store
        .hosts()
        .iter()
        .map(|host| HostListItem {
            id: host.id(),
            name: host.name(),
            selected: selected == Some(host),
        })
        .collect::<Vec<_>>();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No hosts configured.");
        return Ok(());
    }

    for item in items {
        let marker = if item.selected { "*" } else { " " };
        println!("{marker} {}  {}", item.id, item.name);
    }
    Ok(())
}

pub fn run_hosts_add(paths: &CliPaths, id: &str, name: &str) -> Result<(), CliError> {
    let id = normalize_host_id(id)?;
    let file = HostsFile::new(&paths.hosts);
    let hosts = upsert_host(file.list_hosts()?, Host::new(id, name.trim()));
    file.save(&hosts)?;
    tracing::info!("Saved host '{}' to {}", id, file.path().display());
    println!("Host {id} saved");
    Ok(())
}

pub fn run_hosts_remove(paths: &CliPaths, id: &str) -> Result<(), CliError> {
    let id = normalize_host_id(id)?;
    let file = HostsFile::new(&paths.hosts);
    let mut hosts = file.list_hosts()?;
    let before = hosts.len();
    hosts.retain(|host| host.id() != id);
    if hosts.len() == before {
        return Err(streamprefs_core::Error::UnknownHost(id.to_string()).into());
    }

    file.save(&hosts)?;
    println!("Host {id} removed");
    Ok(())
}

pub fn normalize_host_id(id: &str) -> Result<&str, CliError> {
    let id = id.trim();
    if id.is_empty() {
        Err(CliError::EmptyHostId)
    } else {
        Ok(id)
    }
}

/// Replace the host with the same id in place, or append it.
pub fn upsert_host(mut hosts: Vec<Host>, host: Host) -> Vec<Host> {
    if let Some(existing) = hosts.iter_mut().find(|existing| **existing == host) {
        *existing = host;
    } else {
        hosts.push(host);
    }
    hosts
}
