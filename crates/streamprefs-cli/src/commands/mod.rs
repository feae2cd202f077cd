pub mod common;
pub mod completions;
pub mod hosts;
pub mod profile;
