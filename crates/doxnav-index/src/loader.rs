//! Index discovery and loading.
//!
//! Loading is two-phase: read and parse the main script, then chase
//! string-reference children to sibling `<name>.js` files until the set
//! is closed. Every script is read exactly once; reference cycles are
//! rejected up front so later expansion always terminates.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use doxnav_script::NavScript;

use crate::error::IndexError;
use crate::index::NavIndex;

/// Default main script filename.
pub const DEFAULT_FILENAME: &str = "index.js";

/// Loads a [`NavIndex`] from a documentation directory.
pub struct IndexLoader {
    dir: PathBuf,
    filename: String,
    resolve_external: bool,
}

impl IndexLoader {
    /// Create a loader for `dir` with the default filename.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            filename: DEFAULT_FILENAME.to_owned(),
            resolve_external: true,
        }
    }

    /// Create a loader from a user-supplied path.
    ///
    /// A directory loads `<path>/<default_filename>`; a file path loads
    /// that file, with sub-indexes resolved next to it.
    #[must_use]
    pub fn for_path(path: &Path, default_filename: &str) -> Self {
        if path.is_dir() {
            return Self::new(path.to_path_buf()).with_filename(default_filename);
        }
        let dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        let filename = path.file_name().map_or_else(
            || default_filename.to_owned(),
            |name| name.to_string_lossy().into_owned(),
        );
        Self::new(dir).with_filename(filename)
    }

    /// Override the main script filename.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Disable or enable chasing external sub-index references.
    #[must_use]
    pub fn with_resolve_external(mut self, resolve_external: bool) -> Self {
        self.resolve_external = resolve_external;
        self
    }

    /// Load the index.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if a script cannot be read or parsed, a
    /// referenced sub-index is missing or misdeclared, or references
    /// form a cycle.
    pub fn load(&self) -> Result<NavIndex, IndexError> {
        let main_path = self.dir.join(&self.filename);
        let main = load_script(&main_path)?;
        tracing::debug!(
            path = %main_path.display(),
            roots = main.roots.len(),
            "loaded index script"
        );

        let mut externals = BTreeMap::new();
        if self.resolve_external {
            let mut pending: Vec<(String, String)> = main
                .external_refs()
                .into_iter()
                .map(|name| (main.name.clone(), name.to_owned()))
                .collect();

            while let Some((referrer, name)) = pending.pop() {
                if externals.contains_key(&name) {
                    continue;
                }
                let path = self.dir.join(format!("{name}.js"));
                if !path.exists() {
                    return Err(IndexError::MissingExternal {
                        name,
                        referrer,
                        path,
                    });
                }
                let script = load_script(&path)?;
                if script.name != name {
                    return Err(IndexError::NameMismatch {
                        expected: name,
                        found: script.name,
                    });
                }
                tracing::debug!(
                    path = %path.display(),
                    roots = script.roots.len(),
                    "loaded sub-index script"
                );
                pending.extend(
                    script
                        .external_refs()
                        .into_iter()
                        .map(|child| (name.clone(), child.to_owned())),
                );
                externals.insert(name, script);
            }
        }

        check_cycles(&main, &externals)?;

        let index = NavIndex::new(
            self.dir.clone(),
            self.filename.clone(),
            main,
            externals,
        );
        tracing::info!(
            scripts = index.scripts().count(),
            entries = index.node_count(),
            "navigation index loaded"
        );
        Ok(index)
    }
}

/// Read and parse one script file.
fn load_script(path: &Path) -> Result<NavScript, IndexError> {
    let source = fs::read_to_string(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    doxnav_script::parse(&source).map_err(|source| IndexError::Script {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    InProgress,
    Done,
}

/// Reject reference cycles in the loaded script set.
fn check_cycles(
    main: &NavScript,
    externals: &BTreeMap<String, NavScript>,
) -> Result<(), IndexError> {
    let mut state: HashMap<&str, VisitState> = HashMap::new();
    for name in main.external_refs() {
        visit(name, externals, &mut state)?;
    }
    Ok(())
}

fn visit<'a>(
    name: &'a str,
    externals: &'a BTreeMap<String, NavScript>,
    state: &mut HashMap<&'a str, VisitState>,
) -> Result<(), IndexError> {
    match state.get(name) {
        Some(VisitState::Done) => return Ok(()),
        Some(VisitState::InProgress) => {
            return Err(IndexError::CircularExternal(name.to_owned()));
        }
        None => {}
    }
    state.insert(name, VisitState::InProgress);
    if let Some(script) = externals.get(name) {
        for child in script.external_refs() {
            visit(child, externals, state)?;
        }
    }
    state.insert(name, VisitState::Done);
    Ok(())
}
