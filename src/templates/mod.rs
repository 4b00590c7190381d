//! Project file templates
//!
//! Every file the initializer writes (other than `package.json`) comes from
//! this table. Static payloads are compiled into the binary from `templates/`;
//! the README is rendered with the project name.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Result, ScaffoldError};

const TSCONFIG: &str = include_str!("../../templates/tsconfig.json");
const ESLINTRC: &str = include_str!("../../templates/eslintrc.js");
const ESLINTIGNORE: &str = include_str!("../../templates/eslintignore");
const PRETTIERRC: &str = include_str!("../../templates/prettierrc.json");
const ENV_EXAMPLE: &str = include_str!("../../templates/env.example");
const INDEX_TS: &str = include_str!("../../templates/index.ts");
const GITIGNORE: &str = include_str!("../../templates/gitignore");
const README: &str = "# {{name}}";

/// Files emitted into a new project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    CompilerConfig,
    LinterConfig,
    LinterIgnore,
    FormatterConfig,
    EnvExample,
    EntryPoint,
    Readme,
    Gitignore,
}

impl Template {
    /// Get all templates
    pub fn all() -> &'static [Template] {
        &[
            Template::CompilerConfig,
            Template::LinterConfig,
            Template::LinterIgnore,
            Template::FormatterConfig,
            Template::EnvExample,
            Template::EntryPoint,
            Template::Readme,
            Template::Gitignore,
        ]
    }

    /// Path relative to the project root
    pub fn output_path(&self) -> &'static str {
        match self {
            Template::CompilerConfig => "tsconfig.json",
            Template::LinterConfig => ".eslintrc.js",
            Template::LinterIgnore => ".eslintignore",
            Template::FormatterConfig => ".prettierrc.json",
            Template::EnvExample => ".env.example",
            Template::EntryPoint => "src/index.ts",
            Template::Readme => "README.md",
            Template::Gitignore => ".gitignore",
        }
    }

    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Template::CompilerConfig => "TypeScript config",
            Template::LinterConfig => "ESLint config",
            Template::LinterIgnore => "ESLint ignore",
            Template::FormatterConfig => "Prettier config",
            Template::EnvExample => "environment template",
            Template::EntryPoint => "entry point",
            Template::Readme => "README",
            Template::Gitignore => "Git ignore",
        }
    }

    /// Raw template source
    fn source(&self) -> &'static str {
        match self {
            Template::CompilerConfig => TSCONFIG,
            Template::LinterConfig => ESLINTRC,
            Template::LinterIgnore => ESLINTIGNORE,
            Template::FormatterConfig => PRETTIERRC,
            Template::EnvExample => ENV_EXAMPLE,
            Template::EntryPoint => INDEX_TS,
            Template::Readme => README,
            Template::Gitignore => GITIGNORE,
        }
    }

    /// Whether the output depends on the render context
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Template::Readme)
    }
}

/// Values available to parameterized templates
#[derive(Debug, Serialize)]
pub struct TemplateContext<'a> {
    pub name: &'a str,
}

/// Renders templates into file contents
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        // Output is plain text, not HTML
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        Self { registry }
    }

    /// Produce the file content for `template`
    pub fn render(&self, template: Template, context: &TemplateContext<'_>) -> Result<String> {
        if !template.is_parameterized() {
            return Ok(template.source().to_string());
        }

        self.registry
            .render_template(template.source(), context)
            .map_err(|source| ScaffoldError::Template {
                name: template.output_path().to_string(),
                source: Box::new(source),
            })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
