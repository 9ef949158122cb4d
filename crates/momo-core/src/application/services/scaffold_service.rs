//! Scaffold Service - new projects and new workspace members.
//!
//! Each use case has two phases:
//! 1. `prepare_*`: ask questions, validate, build a `ProjectStructure`
//! 2. `write_*`: put the structure on disk, rolling back on failure
//!
//! The split lets the CLI show a spinner around the write phase only.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, Prompter},
        services::discovery::WorkspaceDiscovery,
    },
    domain::{
        APPS_DIR, CONFIG_FILE, CommandSpec, DomainError, DomainValidator as validator, Flavor,
        FsEntry, MANIFEST_FILE, MemberKind, MomoConfig, PACKAGES_DIR, PackageManager,
        ProjectStructure,
        blueprint::{self, CONFIG_TS_DIR},
    },
    error::{MomoError, MomoResult},
};

/// Placeholder offered when asking for a project name.
pub const DEFAULT_PROJECT_NAME: &str = "my-momo-project";

/// Inputs to `create`; anything left `None` is asked for.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub name: Option<String>,
    pub scope: Option<String>,
    pub manager: Option<PackageManager>,
    /// Scaffold into a non-empty directory without asking.
    pub force: bool,
    /// Value of `npm_config_user_agent`, used to preselect the manager.
    pub user_agent: Option<String>,
}

/// A project ready to be written.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub name: String,
    pub scope: String,
    pub manager: PackageManager,
    pub manager_version: String,
    /// True when scaffolding into the working directory itself.
    pub in_place: bool,
    /// Whether this run creates the root directory (and may remove it again).
    pub creates_root: bool,
    pub structure: ProjectStructure,
}

impl ProjectPlan {
    pub fn root(&self) -> &Path {
        self.structure.root()
    }

    /// Shell lines to get going after creation.
    pub fn next_steps(&self) -> Vec<String> {
        let mut steps = Vec::with_capacity(3);
        if !self.in_place {
            steps.push(format!("cd {}", self.name));
        }
        steps.push(format!("{} install", self.manager));
        steps.push(self.manager.dev_command());
        steps
    }
}

/// Inputs to `add app` / `add package`.
#[derive(Debug, Clone, Default)]
pub struct ComponentOptions {
    pub name: Option<String>,
    pub flavor: Option<Flavor>,
}

/// A new app or package ready to be written.
#[derive(Debug, Clone)]
pub struct ComponentPlan {
    pub kind: MemberKind,
    pub name: String,
    pub flavor: Flavor,
    /// Member directory (absolute).
    pub path: PathBuf,
    /// Set when the flavor preset is missing and will be added.
    pub added_preset: Option<Flavor>,
    pub structure: ProjectStructure,
}

pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    prompter: Box<dyn Prompter>,
    runner: Box<dyn CommandRunner>,
}

impl ScaffoldService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        prompter: Box<dyn Prompter>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            filesystem,
            prompter,
            runner,
        }
    }

    // -------------------------------------------------------------------------
    // Create project
    // -------------------------------------------------------------------------

    /// Settle every question about a new project under `cwd`.
    #[instrument(skip_all, fields(cwd = %cwd.display()))]
    pub fn prepare_project(
        &self,
        cwd: &Path,
        options: &CreateOptions,
        config: &MomoConfig,
        momo_version: &str,
    ) -> MomoResult<ProjectPlan> {
        let discovery = WorkspaceDiscovery::new(self.filesystem.as_ref());
        if let Some(root) = discovery.find_project_root(cwd) {
            return Err(ApplicationError::AlreadyInsideProject { root }.into());
        }

        let requested = match &options.name {
            Some(name) => name.clone(),
            None => self.ask_input("What is the name of your monorepo?", DEFAULT_PROJECT_NAME)?,
        };

        let (name, root, in_place) = if requested == "." {
            let name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            (name, cwd.to_path_buf(), true)
        } else {
            validator::package_name(&requested)?;
            let root = cwd.join(&requested);
            (requested, root, false)
        };
        debug!(name = %name, root = %root.display(), "Project target");

        let creates_root = !self.filesystem.exists(&root);
        if !creates_root && !options.force {
            self.confirm_non_empty(&root, &name, in_place)?;
        }

        let scope = match &options.scope {
            Some(scope) => scope.clone(),
            None => {
                let default = if config.preferred_scope().is_empty() {
                    validator::scope_from_project_name(&name)
                } else {
                    config.preferred_scope().to_string()
                };
                self.ask_input("What is the package scope?", &default)?
            }
        };
        validator::scope(&scope)?;

        let manager = match options.manager {
            Some(manager) => manager,
            None => {
                let detected = options
                    .user_agent
                    .as_deref()
                    .map(PackageManager::from_user_agent)
                    .unwrap_or_default();
                self.ask_manager(detected)?
            }
        };

        let manager_version = self.manager_version(manager);
        let structure = project_structure(&root, &name, &scope, manager, &manager_version, momo_version);
        structure.validate()?;

        Ok(ProjectPlan {
            name,
            scope,
            manager,
            manager_version,
            in_place,
            creates_root,
            structure,
        })
    }

    /// Write a prepared project. A root created by this call is removed
    /// again if any write fails.
    #[instrument(skip_all, fields(root = %plan.root().display()))]
    pub fn write_project(&self, plan: &ProjectPlan) -> MomoResult<()> {
        let rollback = plan.creates_root.then(|| plan.root().to_path_buf());
        self.write_structure(&plan.structure, rollback.as_deref())?;
        info!(project = %plan.name, "Project scaffolded");
        Ok(())
    }

    /// `<pm> --version`, or the known fallback when that fails.
    pub fn manager_version(&self, manager: PackageManager) -> String {
        let probe = CommandSpec::new(manager.as_str(), ".").arg("--version");
        match self.runner.output(&probe) {
            Ok(out) if !out.trim().is_empty() => out.trim().to_string(),
            Ok(_) => manager.fallback_version().to_string(),
            Err(e) => {
                debug!(error = %e, manager = %manager, "Version probe failed, using fallback");
                manager.fallback_version().to_string()
            }
        }
    }

    // -------------------------------------------------------------------------
    // Add component
    // -------------------------------------------------------------------------

    /// Settle every question about a new app or package.
    #[instrument(skip_all, fields(cwd = %cwd.display(), kind = %kind))]
    pub fn prepare_component(
        &self,
        cwd: &Path,
        kind: MemberKind,
        options: &ComponentOptions,
        config: &MomoConfig,
    ) -> MomoResult<ComponentPlan> {
        let discovery = WorkspaceDiscovery::new(self.filesystem.as_ref());
        let root = discovery
            .find_project_root(cwd)
            .ok_or_else(|| ApplicationError::NotAProjectRoot {
                dir: cwd.to_path_buf(),
            })?;

        let name = match &options.name {
            Some(name) => name.clone(),
            None => self.ask_input(&format!("What is the name of your {kind}?"), "")?,
        };
        validator::package_name(&name)?;

        // `@scope/ui` lives in `packages/ui`
        let dir_name = name.rsplit('/').next().unwrap_or(&name).to_string();
        let relative = PathBuf::from(kind.root_dir()).join(&dir_name);
        let path = root.join(&relative);
        if self.filesystem.exists(&path) {
            return Err(DomainError::MemberExists { kind, name, path }.into());
        }

        let flavor = match options.flavor {
            Some(flavor) => flavor,
            None => self.ask_flavor()?,
        };

        let mut structure = ProjectStructure::new(&root)
            .with_json(relative.join(MANIFEST_FILE), &blueprint::member_package_json(&name))
            .with_json(relative.join("tsconfig.json"), &blueprint::member_tsconfig(flavor))
            .with_directory(relative.join("src"));

        let presets = root.join(CONFIG_TS_DIR);
        if !self.filesystem.exists(&presets.join(MANIFEST_FILE)) {
            structure = structure.with_json(
                Path::new(CONFIG_TS_DIR).join(MANIFEST_FILE),
                &blueprint::config_ts_package_json(&config.scope),
            );
        }
        if !self.filesystem.exists(&presets.join(Flavor::Base.preset_file())) {
            structure = structure.with_json(
                Path::new(CONFIG_TS_DIR).join(Flavor::Base.preset_file()),
                &blueprint::flavor_tsconfig(Flavor::Base),
            );
        }

        let mut added_preset = None;
        if flavor != Flavor::Base && !self.filesystem.exists(&presets.join(flavor.preset_file())) {
            structure = structure.with_json(
                Path::new(CONFIG_TS_DIR).join(flavor.preset_file()),
                &blueprint::flavor_tsconfig(flavor),
            );
            added_preset = Some(flavor);
        }

        structure.validate()?;

        Ok(ComponentPlan {
            kind,
            name,
            flavor,
            path,
            added_preset,
            structure,
        })
    }

    /// Write a prepared component. The member directory is removed again if
    /// any write fails.
    #[instrument(skip_all, fields(member = %plan.name))]
    pub fn write_component(&self, plan: &ComponentPlan) -> MomoResult<()> {
        self.write_structure(&plan.structure, Some(&plan.path))?;
        info!(kind = %plan.kind, flavor = %plan.flavor, "Component added");
        Ok(())
    }

    /// Ask whether a bare `add` should create an app or a package.
    pub fn ask_component_kind(&self) -> MomoResult<MemberKind> {
        let items: Vec<String> = MemberKind::ALL
            .iter()
            .map(|kind| match kind {
                MemberKind::App => format!("Application (in /{})", kind.root_dir()),
                MemberKind::Library => format!("Package (in /{})", kind.root_dir()),
            })
            .collect();

        let index = self
            .prompter
            .select("What do you want to add?", &items, 0)?
            .ok_or(ApplicationError::Cancelled)?;
        MemberKind::ALL
            .get(index)
            .copied()
            .ok_or_else(|| MomoError::Internal {
                message: format!("component kind index {index} out of range"),
            })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ask_input(&self, prompt: &str, default: &str) -> MomoResult<String> {
        self.prompter
            .input(prompt, default)?
            .ok_or_else(|| ApplicationError::Cancelled.into())
    }

    fn ask_manager(&self, detected: PackageManager) -> MomoResult<PackageManager> {
        let items: Vec<String> = PackageManager::ALL
            .iter()
            .map(|pm| pm.label().to_string())
            .collect();
        let default = PackageManager::ALL
            .iter()
            .position(|pm| *pm == detected)
            .unwrap_or_default();

        let index = self
            .prompter
            .select("Which package manager do you want to use?", &items, default)?
            .ok_or(ApplicationError::Cancelled)?;
        PackageManager::ALL
            .get(index)
            .copied()
            .ok_or_else(|| MomoError::Internal {
                message: format!("package manager index {index} out of range"),
            })
    }

    fn ask_flavor(&self) -> MomoResult<Flavor> {
        let items: Vec<String> = Flavor::ALL
            .iter()
            .map(|f| format!("{} - {}", f.as_str(), f.description()))
            .collect();

        let index = self
            .prompter
            .select("Which flavor should it use?", &items, 0)?
            .ok_or(ApplicationError::Cancelled)?;
        Flavor::ALL
            .get(index)
            .copied()
            .ok_or_else(|| MomoError::Internal {
                message: format!("flavor index {index} out of range"),
            })
    }

    /// Ask before scaffolding over existing files. A lone `.git` is fine.
    fn confirm_non_empty(&self, root: &Path, name: &str, in_place: bool) -> MomoResult<()> {
        let entries = self.filesystem.list_entries(root)?;
        if entries.iter().all(|e| e == ".git") {
            return Ok(());
        }

        let label = if in_place { "Current Directory" } else { name };
        let items = vec![
            "Cancel operation".to_string(),
            "Ignore (files might be overwritten)".to_string(),
        ];
        match self
            .prompter
            .select(&format!("Directory \"{label}\" is not empty. Proceed?"), &items, 0)
        {
            Ok(Some(1)) => Ok(()),
            Ok(_) => Err(ApplicationError::Cancelled.into()),
            Err(MomoError::Application(ApplicationError::PromptUnavailable { .. })) => {
                Err(ApplicationError::DirectoryNotEmpty {
                    path: root.to_path_buf(),
                }
                .into())
            }
            Err(e) => Err(e),
        }
    }

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure, rollback: Option<&Path>) -> MomoResult<()> {
        match self.write_all(structure) {
            Ok(()) => {
                info!(entries = structure.entry_count(), "Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                if let Some(path) = rollback {
                    warn!("Write failed, attempting rollback");
                    self.rollback(path);
                }
                Err(e)
            }
        }
    }

    fn write_all(&self, structure: &ProjectStructure) -> MomoResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for entry in structure.entries() {
            let path = structure.root().join(entry.path());
            match entry {
                FsEntry::Directory(_) => self.filesystem.create_dir_all(&path)?,
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

/// Everything a fresh project contains.
fn project_structure(
    root: &Path,
    name: &str,
    scope: &str,
    manager: PackageManager,
    manager_version: &str,
    momo_version: &str,
) -> ProjectStructure {
    let mut structure = ProjectStructure::new(root).with_json(
        MANIFEST_FILE,
        &blueprint::root_package_json(name, manager, manager_version, momo_version),
    );

    if manager == PackageManager::Pnpm {
        structure.add_file("pnpm-workspace.yaml", blueprint::PNPM_WORKSPACE);
    }

    structure
        .with_json("turbo.json", &blueprint::turbo_json())
        .with_json("tsconfig.json", &blueprint::root_tsconfig())
        .with_file(".gitignore", blueprint::GITIGNORE)
        .with_json(CONFIG_FILE, &blueprint::project_config(scope, manager))
        .with_directory(APPS_DIR)
        .with_directory(PACKAGES_DIR)
        .with_json(
            Path::new(CONFIG_TS_DIR).join(MANIFEST_FILE),
            &blueprint::config_ts_package_json(scope),
        )
        .with_json(
            Path::new(CONFIG_TS_DIR).join(Flavor::Base.preset_file()),
            &blueprint::flavor_tsconfig(Flavor::Base),
        )
}
