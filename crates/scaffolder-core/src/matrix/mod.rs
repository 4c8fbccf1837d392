//! Template matrix: choice enumerations and the selection-to-files resolver
//!
//! This module provides:
//! - The closed choice sets (`Language`, `Framework`, `ProjectType`, `Complexity`)
//! - The `Language -> [Framework]` registry consulted by both the wizard and the resolver
//! - `resolve`, a pure function from a finalized selection to an ordered `ProjectMatrix`

mod catalog;

use crate::error::ParseChoiceError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Target language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    Go,
    JavaScript,
    Python,
}

impl Language {
    /// Wizard order
    pub const ALL: &'static [Language] = &[Language::Go, Language::JavaScript, Language::Python];

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Go => "Go",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
        }
    }

    /// Frameworks offered for this language, in wizard order
    pub fn frameworks(self) -> &'static [Framework] {
        FRAMEWORK_REGISTRY
            .iter()
            .find(|(lang, _)| *lang == self)
            .map(|(_, frameworks)| *frameworks)
            .unwrap_or(&[])
    }

    pub fn supports(self, framework: Framework) -> bool {
        self.frameworks().contains(&framework)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Language {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "go" | "golang" => Ok(Language::Go),
            "javascript" | "js" | "node" => Ok(Language::JavaScript),
            "python" | "py" => Ok(Language::Python),
            _ => Err(ParseChoiceError::new(
                "language",
                s,
                &["go", "javascript", "python"],
            )),
        }
    }
}

/// Web framework used for the entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Framework {
    Gin,
    Echo,
    Fiber,
    Express,
    Fastify,
    Flask,
    FastApi,
    Django,
}

impl Framework {
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Gin => "Gin",
            Framework::Echo => "Echo",
            Framework::Fiber => "Fiber",
            Framework::Express => "Express",
            Framework::Fastify => "Fastify",
            Framework::Flask => "Flask",
            Framework::FastApi => "FastAPI",
            Framework::Django => "Django",
        }
    }

    /// The language whose registry entry lists this framework
    pub fn language(self) -> Option<Language> {
        FRAMEWORK_REGISTRY
            .iter()
            .find(|(_, frameworks)| frameworks.contains(&self))
            .map(|(lang, _)| *lang)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Framework {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FRAMEWORK_REGISTRY
            .iter()
            .flat_map(|(_, frameworks)| frameworks.iter())
            .find(|fw| fw.display_name().to_lowercase() == wanted)
            .copied()
            .ok_or_else(|| {
                let names: Vec<&str> = FRAMEWORK_REGISTRY
                    .iter()
                    .flat_map(|(_, frameworks)| frameworks.iter())
                    .map(|fw| fw.display_name())
                    .collect();
                ParseChoiceError::new("framework", s, &names)
            })
    }
}

/// Single source of truth for which frameworks each language offers.
/// Cursor bounds in the wizard and the resolver's lookups both read this table.
const FRAMEWORK_REGISTRY: &[(Language, &[Framework])] = &[
    (
        Language::Go,
        &[Framework::Gin, Framework::Echo, Framework::Fiber],
    ),
    (
        Language::JavaScript,
        &[Framework::Express, Framework::Fastify],
    ),
    (
        Language::Python,
        &[Framework::Flask, Framework::FastApi, Framework::Django],
    ),
];

/// Kind of project being generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectType {
    WebApp,
    Cli,
    Backend,
}

impl ProjectType {
    pub const ALL: &'static [ProjectType] =
        &[ProjectType::WebApp, ProjectType::Cli, ProjectType::Backend];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::WebApp => "Web Application",
            ProjectType::Cli => "CLI Tool",
            ProjectType::Backend => "Backend Service",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ProjectType {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "webapp" | "web" | "web-app" => Ok(ProjectType::WebApp),
            "cli" => Ok(ProjectType::Cli),
            "backend" | "service" => Ok(ProjectType::Backend),
            _ => Err(ParseChoiceError::new(
                "project type",
                s,
                &["webapp", "cli", "backend"],
            )),
        }
    }
}

/// Architecture tier of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Complexity {
    Minimal,
    Standard,
    Enterprise,
}

impl Complexity {
    pub const ALL: &'static [Complexity] = &[
        Complexity::Minimal,
        Complexity::Standard,
        Complexity::Enterprise,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Complexity::Minimal => "Minimal (MVP)",
            Complexity::Standard => "Standard (Clean Architecture)",
            Complexity::Enterprise => "Enterprise (Microservices Ready)",
        }
    }

    /// Whether this tier asks for repository/service layering
    pub fn is_layered(&self) -> bool {
        matches!(self, Complexity::Standard | Complexity::Enterprise)
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Complexity {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" | "mvp" => Ok(Complexity::Minimal),
            "standard" => Ok(Complexity::Standard),
            "enterprise" => Ok(Complexity::Enterprise),
            _ => Err(ParseChoiceError::new(
                "complexity",
                s,
                &["minimal", "standard", "enterprise"],
            )),
        }
    }
}

/// A relative output path and its literal content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTemplate {
    path: String,
    content: String,
}

impl FileTemplate {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered list of files to materialize: entry point, manifest, then architecture extras
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectMatrix {
    files: Vec<FileTemplate>,
}

impl ProjectMatrix {
    pub fn files(&self) -> &[FileTemplate] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileTemplate> {
        self.files.iter()
    }

    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path()).collect()
    }

    pub fn get(&self, path: &str) -> Option<&FileTemplate> {
        self.files.iter().find(|f| f.path() == path)
    }

    fn push(&mut self, file: FileTemplate) {
        self.files.push(file);
    }
}

impl<'a> IntoIterator for &'a ProjectMatrix {
    type Item = &'a FileTemplate;
    type IntoIter = std::slice::Iter<'a, FileTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// A finalized set of wizard choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub language: Language,
    pub framework: Framework,
    pub project_type: ProjectType,
    pub complexity: Complexity,
}

impl Selection {
    pub fn resolve(&self) -> ProjectMatrix {
        resolve(
            self.language,
            self.framework,
            self.project_type,
            self.complexity,
        )
    }
}

/// Map a finalized selection to the files to generate.
///
/// Total over the enumerated domain. A framework that does not belong to
/// `language` gets that language's plain "hello world" entry point.
/// `project_type` is accepted but does not change the output, and
/// `complexity` only matters for languages that declare layer placeholders
/// (currently Go).
pub fn resolve(
    language: Language,
    framework: Framework,
    _project_type: ProjectType,
    complexity: Complexity,
) -> ProjectMatrix {
    let layout = catalog::layout(language);
    let mut matrix = ProjectMatrix::default();

    let entry_body = catalog::entry_point(language, framework).unwrap_or(layout.fallback_entry);
    matrix.push(FileTemplate::new(layout.entry_path, entry_body));
    matrix.push(FileTemplate::new(
        layout.manifest_path,
        (layout.manifest)(framework),
    ));

    if complexity.is_layered() {
        for (path, content) in layout.layers {
            matrix.push(FileTemplate::new(*path, *content));
        }
    }

    matrix
}
