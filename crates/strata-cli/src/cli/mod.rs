//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Feature scaffolding for layered Flutter projects",
    long_about = "Strata creates the directory skeleton and boilerplate for a \
                  feature slice (entities, usecases, repositories, datasources, \
                  providers, pages) and keeps the router and page-name \
                  registries in sync as pages are added.",
    after_help = "EXAMPLES:\n\
        \x20 strata new feature billing\n\
        \x20 strata new page billing invoices\n\
        \x20 strata -C ../app new entity billing invoice\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a feature or a single artifact.
    #[command(
        visible_alias = "n",
        about = "Scaffold a feature or artifact",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata new feature billing\n\
            \x20 strata new page billing invoices\n\
            \x20 strata new repository billing invoice"
    )]
    New(NewCommands),

    /// Initialise a Strata configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 strata init           # local .strata.toml\n\
            \x20 strata init --global  # global config\n\
            \x20 strata init --local   # local config in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Strata configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get layout.source_dir\n\
            \x20 strata config list\n\
            \x20 strata config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// What `strata new` creates.
///
/// Names are case-folded to lowercase before use.
#[derive(Debug, Subcommand)]
pub enum NewCommands {
    /// Directory skeleton plus one of every artifact, named after the feature.
    Feature {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// A page, registered in the router and page-name constants.
    Page {
        #[arg(value_name = "FEATURE")]
        feature: String,
        #[arg(value_name = "PAGE")]
        page: String,
    },

    /// A Riverpod state provider.
    Provider {
        #[arg(value_name = "FEATURE")]
        feature: String,
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// A domain entity.
    Entity {
        #[arg(value_name = "FEATURE")]
        feature: String,
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// A domain usecase.
    Usecase {
        #[arg(value_name = "FEATURE")]
        feature: String,
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// A repository interface and its data-layer implementation.
    Repository {
        #[arg(value_name = "FEATURE")]
        feature: String,
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// A data source interface and implementation.
    Datasource {
        #[arg(value_name = "FEATURE")]
        feature: String,
        #[arg(value_name = "NAME")]
        name: String,
    },
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(
        long = "global",
        conflicts_with = "local",
        help = "Create global configuration"
    )]
    pub global: bool,

    /// Write to `.strata.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `layout.source_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
