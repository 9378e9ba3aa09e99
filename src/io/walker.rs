use crate::analysis::SourceFile;
use crate::core::{Dialect, Error, Result};
use glob::Pattern;
use ignore::WalkBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Component, Path, PathBuf};

/// Test, spec, declaration and Flow stub files never declare project exports.
static EXCLUDED_FILE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\.(test|spec)\.(js|mjs|jsx|ts|tsx)|\.d\.ts|\.flow)$").unwrap()
});

const EXCLUDED_PATH_FRAGMENTS: &[&str] = &["node_modules", "flow-typed"];
const EXCLUDED_DIRECTORIES: &[&str] = &["dist", "build"];

/// Collects the source set under a root: every ECMAScript and TypeScript file
/// not excluded by default or by a caller ignore pattern, in path order.
pub struct SourceSetResolver {
    root: PathBuf,
    ignore_patterns: Vec<Pattern>,
}

impl SourceSetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_patterns: Vec::new(),
        }
    }

    /// Add ignore globs; relative patterns are resolved against the root.
    pub fn with_ignore_patterns<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let resolved = if Path::new(pattern).is_absolute() {
                pattern.to_string()
            } else {
                self.root.join(pattern).to_string_lossy().into_owned()
            };
            self.ignore_patterns.push(Pattern::new(&resolved)?);
        }
        Ok(self)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths of the source set, sorted.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(if self.should_process(&self.root) {
                vec![self.root.clone()]
            } else {
                Vec::new()
            });
        }
        if !self.root.exists() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("path does not exist: {}", self.root.display()),
            )));
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        log::debug!(
            "Resolved {} source files under {}",
            files.len(),
            self.root.display()
        );
        Ok(files)
    }

    /// Walk and read every file of the source set.
    pub fn resolve(&self) -> Result<Vec<SourceFile>> {
        self.walk()?
            .into_iter()
            .filter_map(|path| Dialect::from_path(&path).map(|dialect| (path, dialect)))
            .map(|(path, dialect)| {
                let text = std::fs::read_to_string(&path)
                    .map_err(|err| Error::analysis_failure(path.clone(), err.into()))?;
                Ok(SourceFile::new(path, text, dialect))
            })
            .collect()
    }

    fn should_process(&self, path: &Path) -> bool {
        if Dialect::from_path(path).is_none() {
            return false;
        }
        if is_excluded_by_default(path.strip_prefix(&self.root).unwrap_or(path)) {
            log::trace!("Skipping {} (default exclusion)", path.display());
            return false;
        }
        if self.ignore_patterns.iter().any(|p| p.matches_path(path)) {
            log::trace!("Skipping {} (ignore pattern)", path.display());
            return false;
        }
        true
    }
}

/// Default exclusions, checked against the path relative to the walk root.
fn is_excluded_by_default(relative: &Path) -> bool {
    let text = relative.to_string_lossy();
    if EXCLUDED_FILE_NAME.is_match(&text) {
        return true;
    }
    if EXCLUDED_PATH_FRAGMENTS
        .iter()
        .any(|fragment| text.contains(fragment))
    {
        return true;
    }
    // Only directories count; a file named `build.js` is kept
    let mut components = relative.components().collect::<Vec<_>>();
    components.pop();
    components.iter().any(|component| match component {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRECTORIES.contains(&name)),
        _ => false,
    })
}

pub fn find_source_files(root: &Path, ignore_patterns: &[String]) -> Result<Vec<SourceFile>> {
    SourceSetResolver::new(root)
        .with_ignore_patterns(ignore_patterns)?
        .resolve()
}
