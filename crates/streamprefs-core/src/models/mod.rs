//! Data models for streamprefs

mod host;
mod record;
mod resolution;
mod settings;

pub use host::{Host, HostSelection};
pub use record::SettingsRecord;
pub use resolution::Resolution;
pub use settings::ProfileSettings;
