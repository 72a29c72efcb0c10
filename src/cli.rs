//! CLI argument parsing module for gemspec

use crate::domain::Requirement;
use crate::render::Format;
use crate::source::SourceMode;
use clap::Parser;
use std::path::PathBuf;

/// Display gem specification metadata
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gemspec",
    about = "Display gem specification metadata",
    after_help = "GEMNAME is a gem name or the path to a spec document; \
                  FIELD narrows the output to one specification field."
)]
pub struct CliArgs {
    /// Name of the gem to show, or path to a spec document
    pub gem: Option<String>,

    /// Single specification field to show instead of the whole document
    pub field: Option<String>,

    /// Version requirement the shown gem must satisfy (e.g. "~> 2.0")
    #[arg(short = 'v', long = "version", value_name = "REQUIREMENT")]
    pub requirement: Option<Requirement>,

    /// Only show specifications for the given platform
    #[arg(long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Allow prerelease versions from the remote index
    #[arg(long)]
    pub prerelease: bool,

    /// Output specifications for all matching versions of the gem
    #[arg(long)]
    pub all: bool,

    // Output format options (the last one given wins)
    /// Output in YAML format (default)
    #[arg(long, overrides_with_all = ["yaml", "toml", "binary"])]
    pub yaml: bool,

    /// Output in TOML format
    #[arg(long, overrides_with_all = ["yaml", "toml", "binary"])]
    pub toml: bool,

    /// Output an exact binary encoding
    #[arg(long, overrides_with_all = ["yaml", "toml", "binary"])]
    pub binary: bool,

    // Source selection
    /// Restrict operations to the locally installed gems
    #[arg(short = 'l', long)]
    pub local: bool,

    /// Restrict operations to rubygems.org
    #[arg(short = 'r', long)]
    pub remote: bool,

    /// Use both local and remote sources (default)
    #[arg(short = 'b', long)]
    pub both: bool,

    /// Specifications directory to read instead of $GEM_HOME/specifications
    #[arg(long, value_name = "DIR")]
    pub install_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// The output format the flags resolve to
    pub fn format(&self) -> Format {
        if self.binary {
            Format::Binary
        } else if self.toml {
            Format::Toml
        } else {
            Format::Yaml
        }
    }

    /// The source mode the flags resolve to
    pub fn source_mode(&self) -> SourceMode {
        SourceMode::from_flags(self.local, self.remote, self.both)
    }
}
