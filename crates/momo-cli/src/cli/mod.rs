//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use momo_core::application::TurboTask;
use momo_core::domain::{Flavor, PackageManager};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "momo",
    bin_name = "momo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "A modern CLI tool for managing monorepo projects",
    long_about = "momo creates turborepo monorepos, adds apps and packages to them, \
                  installs dependencies into the right workspace member and forwards \
                  build tasks to turbo.\n\n\
                  Run without a command outside a project to create one.",
    after_help = "EXAMPLES:\n\
        \x20 momo create acme --scope @acme --manager pnpm\n\
        \x20 momo add app web --flavor nextjs\n\
        \x20 momo add dep zod --app web\n\
        \x20 momo build --filter web\n\
        \x20 momo completions bash > /usr/share/bash-completion/completions/momo",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Absent means "create a project here", or
    /// help when already inside one.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// `create-momo`: the create command on its own.
#[derive(Debug, Parser)]
#[command(
    name     = "create-momo",
    bin_name = "create-momo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a new momo monorepo",
    after_help = "EXAMPLES:\n\
        \x20 pnpm create momo\n\
        \x20 create-momo acme --scope @acme --manager bun",
)]
pub struct CreateMomoCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub create: CreateArgs,
}

impl From<CreateMomoCli> for Cli {
    fn from(value: CreateMomoCli) -> Self {
        Self {
            global: value.global,
            command: Some(Commands::Create(value.create)),
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new monorepo project.
    #[command(
        visible_alias = "new",
        about = "Create a new monorepo project",
        after_help = "EXAMPLES:\n\
            \x20 momo create                 # fully interactive\n\
            \x20 momo create acme --scope @acme --manager pnpm\n\
            \x20 momo create . --force       # scaffold into the current directory"
    )]
    Create(CreateArgs),

    /// Add an app, a package or a dependency. Asks which when run bare.
    #[command(about = "Add apps, packages or dependencies")]
    Add(AddArgs),

    /// Install a dependency into the workspace (same as `add dep`).
    #[command(
        visible_alias = "get",
        about = "Install a dependency into the workspace",
        after_help = DEP_EXAMPLES
    )]
    Dep(DepArgs),

    /// Manage the momo configuration.
    #[command(
        subcommand,
        about = "Configuration management",
        after_help = "EXAMPLES:\n\
            \x20 momo config list\n\
            \x20 momo config get manager\n\
            \x20 momo config set scope @acme"
    )]
    Config(ConfigCommands),

    /// Run `turbo build`.
    #[command(about = "Build all apps and packages")]
    Build(TaskArgs),

    /// Run `turbo dev`.
    #[command(about = "Start development servers")]
    Dev(TaskArgs),

    /// Run `turbo lint`.
    #[command(about = "Lint all apps and packages")]
    Lint(TaskArgs),

    /// Run `turbo start`.
    #[command(about = "Start built apps")]
    Start(TaskArgs),

    /// Run `turbo test`.
    #[command(about = "Run tests across the workspace")]
    Test(TaskArgs),

    /// Run `turbo graph`.
    #[command(about = "Show the task graph")]
    Graph(TaskArgs),

    /// Run `turbo login`.
    #[command(about = "Log in to Turborepo (remote caching)")]
    Login,

    /// Run `turbo logout`.
    #[command(about = "Log out from Turborepo")]
    Logout,

    /// Run `turbo link`.
    #[command(about = "Link the project to a Vercel team (remote caching)")]
    Link,

    /// Run `turbo unlink`.
    #[command(about = "Unlink the project from remote caching")]
    Unlink,

    /// Remove `node_modules`, `dist` and `.turbo` directories.
    #[command(about = "Remove build artifacts and installed modules")]
    Clean,

    /// Check the monorepo skeleton.
    #[command(about = "Check project health")]
    Doctor,

    /// List component flavors.
    #[command(visible_alias = "ls", about = "List available component flavors")]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 momo completions bash > ~/.local/share/bash-completion/completions/momo\n\
            \x20 momo completions zsh  > ~/.zfunc/_momo\n\
            \x20 momo completions fish > ~/.config/fish/completions/momo.fish"
    )]
    Completions(CompletionsArgs),
}

const DEP_EXAMPLES: &str = "EXAMPLES:\n\
    \x20 momo add dep zod                # pick the target interactively\n\
    \x20 momo add dep lodash --app web\n\
    \x20 momo add dep @acme/ui --pkg docs\n\
    \x20 momo add dep typescript -D --root";

/// `momo add` with an optional subcommand.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(subcommand)]
    pub command: Option<AddCommands>,
}

/// Subcommands for `momo add`.
#[derive(Debug, Subcommand)]
pub enum AddCommands {
    /// Add an application under `apps/`.
    #[command(
        visible_alias = "a",
        after_help = "EXAMPLES:\n\
            \x20 momo add app web --flavor nextjs"
    )]
    App(ComponentArgs),

    /// Add a library under `packages/`.
    #[command(
        visible_aliases = ["pkg", "p"],
        after_help = "EXAMPLES:\n\
            \x20 momo add package ui --flavor react"
    )]
    Package(ComponentArgs),

    /// Install a dependency into the root or one member.
    #[command(visible_alias = "d", after_help = DEP_EXAMPLES)]
    Dep(DepArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `momo create`.
#[derive(Debug, Clone, Default, Args)]
pub struct CreateArgs {
    /// Project directory name, or `.` for the current directory.
    #[arg(value_name = "NAME", help = "Project name (asked when omitted)")]
    pub name: Option<String>,

    /// npm scope for workspace packages, e.g. `@acme`.
    #[arg(
        short = 's',
        long = "scope",
        value_name = "SCOPE",
        help = "Package scope, e.g. @acme"
    )]
    pub scope: Option<String>,

    /// Package manager to configure.
    #[arg(
        short = 'm',
        long = "manager",
        value_name = "MANAGER",
        value_enum,
        help = "Package manager"
    )]
    pub manager: Option<Manager>,

    /// Scaffold into a non-empty directory without asking.
    #[arg(long = "force", help = "Use the directory even if it is not empty")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── add app / add package ─────────────────────────────────────────────────────

/// Arguments for `momo add app` and `momo add package`.
#[derive(Debug, Clone, Default, Args)]
pub struct ComponentArgs {
    /// Name of the new member. A scoped name such as `@acme/ui` lives in
    /// a directory named after its last segment.
    #[arg(value_name = "NAME", help = "Name (asked when omitted)")]
    pub name: Option<String>,

    /// TypeScript preset to extend.
    #[arg(
        short = 'f',
        long = "flavor",
        value_name = "FLAVOR",
        value_enum,
        help = "TypeScript flavor"
    )]
    pub flavor: Option<FlavorArg>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── dep ───────────────────────────────────────────────────────────────────────

/// Arguments for `momo add dep` / `momo dep`.
#[derive(Debug, Clone, Args)]
pub struct DepArgs {
    /// Package to install, optionally with a version (`zod@3`).
    #[arg(value_name = "PACKAGE", help = "Package to install")]
    pub package: String,

    /// Install as a devDependency.
    #[arg(short = 'D', long = "dev", help = "Install as devDependency")]
    pub dev: bool,

    /// Install into this app.
    #[arg(short = 'a', long = "app", value_name = "NAME", help = "Target app")]
    pub app: Option<String>,

    /// Install into this package.
    #[arg(
        short = 'p',
        long = "pkg",
        visible_alias = "package",
        value_name = "NAME",
        help = "Target package"
    )]
    pub pkg: Option<String>,

    /// Install into the workspace root. Wins over `--app` / `--pkg`.
    #[arg(short = 'w', long = "root", help = "Install into the workspace root")]
    pub root: bool,
}

// ── tasks ─────────────────────────────────────────────────────────────────────

/// Arguments shared by the turbo task commands.
#[derive(Debug, Clone, Default, Args)]
pub struct TaskArgs {
    /// Restrict the task to matching packages.
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "PACKAGE",
        help = "Filter to specific package(s)"
    )]
    pub filter: Option<String>,

    /// Passed through to turbo unchanged.
    #[arg(
        value_name = "TURBO_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Extra arguments for turbo"
    )]
    pub args: Vec<String>,
}

/// Turbo task selected by the subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Build,
    Dev,
    Lint,
    Start,
    Test,
    Graph,
    Login,
    Logout,
    Link,
    Unlink,
}

impl From<TaskKind> for TurboTask {
    fn from(kind: TaskKind) -> Self {
        match kind {
            TaskKind::Build => TurboTask::Build,
            TaskKind::Dev => TurboTask::Dev,
            TaskKind::Lint => TurboTask::Lint,
            TaskKind::Start => TurboTask::Start,
            TaskKind::Test => TurboTask::Test,
            TaskKind::Graph => TurboTask::Graph,
            TaskKind::Login => TurboTask::Login,
            TaskKind::Logout => TurboTask::Logout,
            TaskKind::Link => TurboTask::Link,
            TaskKind::Unlink => TurboTask::Unlink,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `momo list`.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `momo completions`.
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
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `momo config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print every configuration value and where it came from.
    #[command(visible_alias = "ls")]
    List,
    /// Print the value of a configuration key.
    Get {
        /// Key as spelled in momo.config.json, e.g. `packageScope`.
        key: String,
    },
    /// Set a configuration key and save the file.
    Set {
        /// Key as spelled in momo.config.json.
        key: String,
        /// New value.
        value: String,
    },
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Package managers accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Manager {
    Pnpm,
    Npm,
    Yarn,
    Bun,
}

impl From<Manager> for PackageManager {
    fn from(manager: Manager) -> Self {
        match manager {
            Manager::Pnpm => PackageManager::Pnpm,
            Manager::Npm => PackageManager::Npm,
            Manager::Yarn => PackageManager::Yarn,
            Manager::Bun => PackageManager::Bun,
        }
    }
}

/// Component flavors accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FlavorArg {
    #[value(alias = "vanilla")]
    Base,
    #[value(alias = "next")]
    Nextjs,
    #[value(alias = "vite")]
    React,
    #[value(alias = "express")]
    Node,
}

impl From<FlavorArg> for Flavor {
    fn from(flavor: FlavorArg) -> Self {
        match flavor {
            FlavorArg::Base => Flavor::Base,
            FlavorArg::Nextjs => Flavor::Nextjs,
            FlavorArg::React => Flavor::React,
            FlavorArg::Node => Flavor::Node,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
