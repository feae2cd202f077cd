//! Host directory sources

use std::path::{Path, PathBuf};

use crate::blob::write_atomically;
use crate::error::Result;
use crate::models::Host;

/// Supplies the known hosts, in display order
pub trait HostDirectory {
    fn list_hosts(&self) -> Result<Vec<Host>>;
}

impl HostDirectory for Vec<Host> {
    fn list_hosts(&self) -> Result<Vec<Host>> {
        Ok(self.clone())
    }
}

impl HostDirectory for [Host] {
    fn list_hosts(&self) -> Result<Vec<Host>> {
        Ok(self.to_vec())
    }
}

/// Hosts read from a JSON array of `{ "id", "name" }` objects
#[derive(Debug, Clone)]
pub struct HostsFile {
    path: PathBuf,
}

impl HostsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file with `hosts`, creating parent directories as needed
    pub fn save(&self, hosts: &[Host]) -> Result<()> {
        let serialized = serde_json::to_string_pretty(hosts)?;
        write_atomically(&self.path, serialized.as_bytes())
    }
}

impl HostDirectory for HostsFile {
    fn list_hosts(&self) -> Result<Vec<Host>> {
        if !self.path.exists() {
            tracing::debug!("No hosts file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_hosts_file_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let hosts = HostsFile::new(dir.path().join("hosts.json"));
        assert!(hosts.list_hosts().unwrap().is_empty());
    }

    #[test]
    fn hosts_file_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts.json");
        std::fs::write(
            &path,
            r#"[{"id": "b", "name": "Office"}, {"id": "a", "name": "Den"}]"#,
        )
        .unwrap();

        let hosts = HostsFile::new(&path).list_hosts().unwrap();
        let ids: Vec<&str> = hosts.iter().map(Host::id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(hosts[1].name(), "Den");
    }

    #[test]
    fn saved_hosts_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let file = HostsFile::new(dir.path().join("conf").join("hosts.json"));
        let hosts = vec![Host::new("x", "Gaming PC")];

        file.save(&hosts).unwrap();
        assert_eq!(file.list_hosts().unwrap(), hosts);
        assert!(!file.path().with_extension("tmp").exists());
    }

    #[test]
    fn failed_save_keeps_existing_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts.json");
        let file = HostsFile::new(&path);
        file.save(&[Host::new("a", "Den")]).unwrap();

        std::fs::create_dir(path.with_extension("tmp")).unwrap();
        assert!(file.save(&[Host::new("b", "Office")]).is_err());

        let ids: Vec<String> = file
            .list_hosts()
            .unwrap()
            .iter()
            .map(|host| host.id().to_string())
            .collect();
        assert_eq!(ids, vec!["a".to_string()]);
    }

    #[test]
    fn malformed_hosts_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts.json");
        std::fs::write(&path, r#"[{"id": 1}]"#).unwrap();

        assert!(HostsFile::new(&path).list_hosts().is_err());
    }
}
