use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "streamprefs")]
#[command(about = "Manage per-host stream settings profiles")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the profile store file
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Path to the JSON host list
    #[arg(long, global = true, value_name = "PATH")]
    pub hosts_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage known hosts
    Hosts {
        #[command(subcommand)]
        command: HostsCommands,
    },
    /// Select the host whose profile is edited
    Select {
        /// Host id
        host_id: String,
    },
    /// Show the selected host's profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change one setting of the selected host's profile
    Set {
        /// Setting to change
        #[arg(value_enum)]
        field: SettingField,
        /// New value (choice label or index for choice settings)
        value: String,
    },
    /// Reset the selected host's profile to defaults
    Reset,
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output file path
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum HostsCommands {
    /// List known hosts, marking the selected one
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a host, or rename it if the id is already listed
    Add {
        /// Stable host id
        id: String,
        /// Display name
        name: String,
    },
    /// Remove a host from the list
    Remove {
        /// Host id
        id: String,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SettingField {
    Resolution,
    CustomWidth,
    CustomHeight,
    Fps,
    CustomFps,
    /// Bitrate in Mbps
    Bitrate,
    Codec,
    Hdr,
    FramePacing,
    AudioOnHost,
    MultiController,
    SwapButtons,
    Optimize,
    AutoFullscreen,
    Rumble,
    ControllerDriver,
    MouseDriver,
    EmulateGuide,
    ArtworkWidth,
    ArtworkHeight,
    DimArtwork,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
