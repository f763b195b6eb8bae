//! Resolution of command-line inputs into scan targets.
//!
//! [`TargetResolver`] turns a list of paths into a lazy sequence of
//! [`ResolvedPath`]s. Directories are expanded with `walkdir` only when
//! recursion is enabled; entries are sorted by file name so the order is
//! stable for a given filesystem state.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};
use walkdir::WalkDir;

use crate::config::ScanConfig;

/// Why an input path produced no scan target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    /// Exists, but is neither a regular file nor a directory.
    NotAFile,
    /// A directory given while recursion is disabled.
    DirectoryNotRecursive,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NotFound => "not found",
            SkipReason::NotAFile => "not a regular file",
            SkipReason::DirectoryNotRecursive => "directory (recursion disabled)",
        };
        f.write_str(text)
    }
}

/// One item produced by path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPath {
    /// A regular file at enumeration time.
    Target(PathBuf),
    Skipped { path: PathBuf, reason: SkipReason },
}

#[derive(Debug, Clone, Copy)]
struct WalkOptions {
    recursive: bool,
    follow_links: bool,
    max_depth: Option<usize>,
}

impl From<&ScanConfig> for WalkOptions {
    fn from(config: &ScanConfig) -> Self {
        Self {
            recursive: config.recursive,
            follow_links: config.follow_links,
            max_depth: config.max_depth,
        }
    }
}

/// Resolves input paths into scan targets.
///
/// The resolver itself holds no traversal state: every call to
/// [`TargetResolver::iter`] starts a fresh pass over the inputs.
#[derive(Debug, Clone)]
pub struct TargetResolver {
    inputs: Vec<PathBuf>,
    options: WalkOptions,
}

impl TargetResolver {
    pub fn new<I, P>(inputs: I, config: &ScanConfig) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            options: WalkOptions::from(config),
        }
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Starts a new lazy pass over the inputs.
    pub fn iter(&self) -> Targets {
        Targets {
            inputs: self.inputs.clone().into_iter(),
            options: self.options,
            walk: None,
        }
    }
}

impl IntoIterator for &TargetResolver {
    type Item = ResolvedPath;
    type IntoIter = Targets;

    fn into_iter(self) -> Targets {
        self.iter()
    }
}

/// Lazy iterator over resolved paths, in input order.
pub struct Targets {
    inputs: std::vec::IntoIter<PathBuf>,
    options: WalkOptions,
    walk: Option<walkdir::IntoIter>,
}

impl fmt::Debug for Targets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Targets")
            .field("remaining_inputs", &self.inputs.len())
            .field("options", &self.options)
            .field("walking", &self.walk.is_some())
            .finish()
    }
}

impl Targets {
    fn start_walk(&mut self, root: &Path) {
        let mut walker = WalkDir::new(root)
            .follow_links(self.options.follow_links)
            .sort_by_file_name();
        if let Some(depth) = self.options.max_depth {
            walker = walker.max_depth(depth);
        }
        debug!(
            "Walking directory '{}' (follow_links: {}, max_depth: {:?})",
            root.display(),
            self.options.follow_links,
            self.options.max_depth
        );
        self.walk = Some(walker.into_iter());
    }

    /// Pulls the next regular file out of the active walk, if any.
    ///
    /// Symlinks to files are yielded even when links are not followed; only
    /// descending into linked directories is governed by `follow_links`. A
    /// dangling link is yielded too, so reading it reports the error.
    fn next_walked(&mut self) -> Option<PathBuf> {
        let walk = self.walk.as_mut()?;
        for entry in walk.by_ref() {
            match entry {
                Ok(entry) if entry.file_type().is_file() => return Some(entry.into_path()),
                Ok(entry) if entry.path_is_symlink() => match fs::metadata(entry.path()) {
                    Ok(meta) if meta.is_file() => return Some(entry.into_path()),
                    Ok(meta) if meta.is_dir() => {
                        debug!("Not following symlink '{}'", entry.path().display());
                    }
                    Ok(_) => trace!("Ignoring non-file link '{}'", entry.path().display()),
                    Err(e) => {
                        debug!("Dangling symlink '{}': {}", entry.path().display(), e);
                        return Some(entry.into_path());
                    }
                },
                Ok(entry) => trace!("Ignoring non-file entry '{}'", entry.path().display()),
                Err(err) => {
                    if let Some(ancestor) = err.loop_ancestor() {
                        warn!(
                            "Symlink loop detected back to '{}', skipping",
                            ancestor.display()
                        );
                    } else if let Some(path) = err.path().filter(|p| is_dangling_link(p)) {
                        debug!("Dangling symlink '{}': {}", path.display(), err);
                        return Some(path.to_path_buf());
                    } else {
                        warn!("Directory walk error: {}", err);
                    }
                }
            }
        }
        self.walk = None;
        None
    }

    fn resolve_input(&mut self, path: PathBuf) -> Option<ResolvedPath> {
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Some(ResolvedPath::Target(path)),
            Ok(meta) if meta.is_dir() => {
                if self.options.recursive {
                    self.start_walk(&path);
                    None
                } else {
                    Some(ResolvedPath::Skipped {
                        path,
                        reason: SkipReason::DirectoryNotRecursive,
                    })
                }
            }
            Ok(_) => Some(ResolvedPath::Skipped {
                path,
                reason: SkipReason::NotAFile,
            }),
            Err(err) => {
                debug!("Cannot stat '{}': {}", path.display(), err);
                Some(ResolvedPath::Skipped {
                    path,
                    reason: SkipReason::NotFound,
                })
            }
        }
    }
}

fn is_dangling_link(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
        && fs::metadata(path).is_err()
}

impl Iterator for Targets {
    type Item = ResolvedPath;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.walk.is_some() {
                if let Some(file) = self.next_walked() {
                    return Some(ResolvedPath::Target(file));
                }
                continue;
            }

            let path = self.inputs.next()?;
            if let Some(resolved) = self.resolve_input(path) {
                return Some(resolved);
            }
        }
    }
}
