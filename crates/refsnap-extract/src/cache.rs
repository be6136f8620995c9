//! Bare clone cache
//!
//! Keeps one bare clone per project under an injected base directory and
//! memoizes open handles for the lifetime of the process. Strictly
//! single-threaded: there is one writer and no locking.

use anyhow::{Context, Result};
use git2::build::RepoBuilder;
use git2::Repository;
use refsnap_core::CloneSource;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Cache of bare repositories keyed by project name
///
/// On-disk layout: `<base_dir>/<project>.git`. An existing directory is
/// opened and validated as bare; a missing one is cloned from the configured
/// [`CloneSource`]. Clone failures propagate and abort the run.
pub struct RepoCache {
    base_dir: PathBuf,
    source: CloneSource,
    open: HashMap<String, Repository>,
}

impl RepoCache {
    /// Creates a cache rooted at `base_dir`, cloning from `source`
    pub fn new<P: AsRef<Path>>(base_dir: P, source: CloneSource) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            source,
            open: HashMap::new(),
        }
    }

    /// Local path of a project's bare clone
    pub fn repo_path(&self, project: &str) -> PathBuf {
        self.base_dir.join(format!("{}.git", project))
    }

    /// Returns a handle to the project's bare clone, cloning it on first use
    pub fn open_or_clone(&mut self, project: &str) -> Result<&Repository> {
        if !self.open.contains_key(project) {
            let repo = self.load(project)?;
            self.open.insert(project.to_string(), repo);
        }
        Ok(&self.open[project])
    }

    fn load(&self, project: &str) -> Result<Repository> {
        let path = self.repo_path(project);

        if path.exists() {
            log::debug!("Reusing cached clone at {:?}", path);
            let repo = Repository::open(&path)
                .with_context(|| format!("Failed to open cached repository at {:?}", path))?;
            if !repo.is_bare() {
                anyhow::bail!("Cached repository at {:?} is not bare", path);
            }
            return Ok(repo);
        }

        let url = self.source.url_for(project);
        log::info!("Cloning {} into {:?}", url, path);

        RepoBuilder::new()
            .bare(true)
            .clone(&url, &path)
            .with_context(|| format!("Failed to clone {} into {:?}", url, path))
    }
}
