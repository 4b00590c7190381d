//! Project initializer
//!
//! Runs the fixed scaffold pipeline for one project. Steps execute strictly in
//! [`Step::all`] order against an explicit project root; the process working
//! directory is never changed. The first failing step aborts the run and its
//! error is returned as-is. Nothing is rolled back.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Blueprint;
use crate::error::{Result, ScaffoldError};
use crate::manifest::{PackageManifest, MANIFEST_FILE};
use crate::package_manager::PackageManager;
use crate::templates::{Template, TemplateContext, TemplateRenderer};

/// Validated project name, used verbatim as directory name and README title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Reject empty names; anything else is accepted as-is
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ScaffoldError::InvalidProjectName(
                "project name must not be empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pipeline steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CreateDirectory,
    InitManifest,
    RewriteManifest,
    InstallDevDependencies,
    WriteCompilerConfig,
    WriteLinterConfig,
    WriteFormatterConfig,
    InstallDependencies,
    WriteEnvTemplate,
    SeedSources,
    WriteReadme,
    WriteGitignore,
}

impl Step {
    /// Every step, in the order they run
    pub fn all() -> &'static [Step] {
        &[
            Step::CreateDirectory,
            Step::InitManifest,
            Step::RewriteManifest,
            Step::InstallDevDependencies,
            Step::WriteCompilerConfig,
            Step::WriteLinterConfig,
            Step::WriteFormatterConfig,
            Step::InstallDependencies,
            Step::WriteEnvTemplate,
            Step::SeedSources,
            Step::WriteReadme,
            Step::WriteGitignore,
        ]
    }

    /// Short progress message
    pub fn description(&self) -> &'static str {
        match self {
            Step::CreateDirectory => "Creating project directory",
            Step::InitManifest => "Initializing package.json",
            Step::RewriteManifest => "Configuring scripts and entry point",
            Step::InstallDevDependencies => "Installing development dependencies",
            Step::WriteCompilerConfig => "Writing TypeScript config",
            Step::WriteLinterConfig => "Writing ESLint config",
            Step::WriteFormatterConfig => "Writing Prettier config",
            Step::InstallDependencies => "Installing dependencies",
            Step::WriteEnvTemplate => "Writing environment template",
            Step::SeedSources => "Seeding src/ and README",
            Step::WriteReadme => "Writing README",
            Step::WriteGitignore => "Writing .gitignore",
        }
    }

    /// Whether this step shells out to the package manager
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            Step::InitManifest | Step::InstallDevDependencies | Step::InstallDependencies
        )
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct InitReport {
    /// Directory that was created
    pub root: PathBuf,
    /// Steps completed, in order
    pub steps: Vec<Step>,
    /// Files written by the initializer, relative to `root`, first write order
    pub files: Vec<PathBuf>,
}

/// Mutable state of one run
struct Run<'a> {
    root: PathBuf,
    name: &'a ProjectName,
    files: Vec<PathBuf>,
}

impl Run<'_> {
    fn record(&mut self, relative: impl Into<PathBuf>) {
        let relative = relative.into();
        if !self.files.contains(&relative) {
            self.files.push(relative);
        }
    }
}

/// Scaffolds projects from a [`Blueprint`] using a [`PackageManager`]
pub struct ProjectInitializer<P> {
    blueprint: Blueprint,
    package_manager: P,
    renderer: TemplateRenderer,
}

impl<P: PackageManager> ProjectInitializer<P> {
    pub fn new(blueprint: Blueprint, package_manager: P) -> Self {
        Self {
            blueprint,
            package_manager,
            renderer: TemplateRenderer::new(),
        }
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn package_manager(&self) -> &P {
        &self.package_manager
    }

    /// Scaffold `name` as a new directory under `parent`
    pub fn initialize(&self, parent: &Path, name: &ProjectName) -> Result<InitReport> {
        self.initialize_with(parent, name, |_| {})
    }

    /// Like [`initialize`](Self::initialize), calling `on_step` before each step starts
    pub fn initialize_with<F>(
        &self,
        parent: &Path,
        name: &ProjectName,
        mut on_step: F,
    ) -> Result<InitReport>
    where
        F: FnMut(Step),
    {
        let mut run = Run {
            root: parent.join(name.as_str()),
            name,
            files: Vec::new(),
        };
        let mut steps = Vec::with_capacity(Step::all().len());

        for &step in Step::all() {
            on_step(step);
            tracing::debug!(?step, "Starting step");
            self.run_step(step, &mut run)?;
            steps.push(step);
        }

        tracing::info!("Initialized {} in {}", name, run.root.display());

        Ok(InitReport {
            root: run.root,
            steps,
            files: run.files,
        })
    }

    fn run_step(&self, step: Step, run: &mut Run<'_>) -> Result<()> {
        let root = run.root.clone();

        match step {
            Step::CreateDirectory => {
                std::fs::create_dir(&root)
                    .map_err(|e| ScaffoldError::io("failed to create directory", &root, e))?;
            }
            Step::InitManifest => {
                self.package_manager.init(&root)?;
            }
            Step::RewriteManifest => {
                let mut manifest = PackageManifest::load(&root)?;
                manifest.set_scripts(self.blueprint.scripts.clone());
                manifest.set_main(self.blueprint.main.clone());
                manifest.save()?;
                tracing::debug!("Rewrote {}", manifest.path().display());
                run.record(MANIFEST_FILE);
            }
            Step::InstallDevDependencies => {
                self.package_manager
                    .install(&root, &self.blueprint.dev_dependencies, true)?;
            }
            Step::WriteCompilerConfig => {
                self.write_template(Template::CompilerConfig, run)?;
            }
            Step::WriteLinterConfig => {
                self.write_template(Template::LinterConfig, run)?;
                self.write_template(Template::LinterIgnore, run)?;
            }
            Step::WriteFormatterConfig => {
                self.write_template(Template::FormatterConfig, run)?;
            }
            Step::InstallDependencies => {
                self.package_manager
                    .install(&root, &self.blueprint.dependencies, false)?;
            }
            Step::WriteEnvTemplate => {
                self.write_template(Template::EnvExample, run)?;
            }
            Step::SeedSources => {
                let src = root.join("src");
                std::fs::create_dir_all(&src)
                    .map_err(|e| ScaffoldError::io("failed to create directory", &src, e))?;
                self.write_template(Template::EntryPoint, run)?;
                self.write_template(Template::Readme, run)?;
            }
            Step::WriteReadme => {
                self.write_template(Template::Readme, run)?;
            }
            Step::WriteGitignore => {
                self.write_template(Template::Gitignore, run)?;
            }
        }

        Ok(())
    }

    /// Render `template` and replace whatever is at its path
    fn write_template(&self, template: Template, run: &mut Run<'_>) -> Result<()> {
        let context = TemplateContext {
            name: run.name.as_str(),
        };
        let content = self.renderer.render(template, &context)?;
        let path = run.root.join(template.output_path());

        tracing::debug!("Writing {} ({})", path.display(), template.name());
        std::fs::write(&path, content).map_err(|e| ScaffoldError::io("failed to write", &path, e))?;

        run.record(template.output_path());
        Ok(())
    }
}
