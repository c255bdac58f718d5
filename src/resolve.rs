//! Path routing for the catalog server.
//!
//! The server reads from two directory roots and a single rule decides which
//! one a request hits: paths under [`ASSET_PREFIX`] come from the `UI/Assets`
//! tree, everything else from the docs tree. [`CatalogRoots`] carries both
//! roots as absolute paths, so request handling never depends on the process
//! working directory.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Request-path prefix remapped onto the assets root.
pub const ASSET_PREFIX: &str = "/assets/";

/// The catalog page the startup line points at.
pub const CATALOG_PAGE: &str = "icon-catalog.html";

/// Errors that can occur while resolving the serving roots at startup.
#[derive(Error, Debug)]
pub enum RootsError {
    /// The docs directory is missing or unreadable
    #[error("docs directory {0}: {1}")]
    DocsDir(String, #[source] io::Error),

    /// An explicitly requested UI directory is missing or unreadable
    #[error("UI directory {0}: {1}")]
    UiDir(String, #[source] io::Error),

    /// The docs directory sits at the filesystem root, so there is no
    /// sibling location to look for the UI tree in
    #[error("cannot locate a UI directory next to {0}")]
    NoUiSibling(String),
}

/// Which root a request path is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// The path matched [`ASSET_PREFIX`]; holds the remainder after the prefix.
    Assets(&'a str),
    /// Any other path, held unchanged.
    Docs(&'a str),
}

/// Apply the asset prefix rule to a request path.
///
/// Exactly one branch applies, decided solely by the literal prefix. Note
/// that bare `/assets` (no trailing slash) is not a match and falls through
/// to the docs root.
pub fn route(request_path: &str) -> Route<'_> {
    match request_path.strip_prefix(ASSET_PREFIX) {
        Some(remainder) => Route::Assets(remainder),
        None => Route::Docs(request_path),
    }
}

/// Absolute directory roots the server reads from.
#[derive(Debug, Clone)]
pub struct CatalogRoots {
    docs: PathBuf,
    assets: PathBuf,
}

impl CatalogRoots {
    /// Resolve the serving roots from CLI arguments.
    ///
    /// The docs directory must exist; its canonical form anchors everything
    /// else. The UI directory must exist when passed explicitly, otherwise it
    /// is assumed to live next to the docs root, matching the source tree
    /// this tool previews. The assets root is the `Assets` subdirectory of
    /// the UI directory and is allowed to be absent, in which case asset
    /// requests simply 404.
    pub fn locate(docs_dir: &Path, ui_dir: Option<&Path>) -> Result<Self, RootsError> {
        let docs = docs_dir
            .canonicalize()
            .map_err(|e| RootsError::DocsDir(docs_dir.display().to_string(), e))?;

        let ui = match ui_dir {
            Some(dir) => dir
                .canonicalize()
                .map_err(|e| RootsError::UiDir(dir.display().to_string(), e))?,
            None => docs
                .parent()
                .ok_or_else(|| RootsError::NoUiSibling(docs.display().to_string()))?
                .join("UI"),
        };

        Ok(Self {
            docs,
            assets: ui.join("Assets"),
        })
    }

    /// Documentation root; serves every path outside the asset prefix.
    pub fn docs(&self) -> &Path {
        &self.docs
    }

    /// Image tree behind the asset prefix.
    pub fn assets(&self) -> &Path {
        &self.assets
    }

    /// Map a request path to the file it is served from.
    ///
    /// This is the entire translation step: `/assets/<rest>` lands in the
    /// assets root, any other path lands in the docs root with its leading
    /// slashes dropped.
    pub fn resolve(&self, request_path: &str) -> PathBuf {
        match route(request_path) {
            Route::Assets(remainder) => self.assets.join(remainder),
            Route::Docs(path) => self.docs.join(path.trim_start_matches('/')),
        }
    }
}
