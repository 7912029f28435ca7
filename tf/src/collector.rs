//! Template directory walk
//!
//! A directory belongs to a template tree when its own name, or the name of
//! any ancestor inside the scanned root, contains one of the configured
//! markers. Files with an accepted extension directly inside such a directory
//! are reported relative to the root they were found under.

use std::path::{self, Component, Path};
use walkdir::{DirEntry, WalkDir};

use crate::error::ScanError;

/// Directory-name substrings that mark a template tree
pub const DEFAULT_MARKERS: &[&str] = &["templates", "items"];

/// File extensions collected from template trees
pub const DEFAULT_EXTENSIONS: &[&str] = &["cs", "zip"];

/// Rules deciding which directories and files take part in a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRules {
    /// Case-insensitive substrings matched against directory names
    pub markers: Vec<String>,
    /// Accepted file extensions, without the leading dot
    pub extensions: Vec<String>,
    /// Whether a root's own name can start a template tree
    pub match_root_name: bool,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            match_root_name: true,
        }
    }
}

impl MatchRules {
    /// True if a directory with this name starts a template tree
    pub fn is_template_dir_name(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.markers
            .iter()
            .filter(|m| !m.is_empty())
            .any(|m| name.contains(&m.to_lowercase()))
    }

    /// True if the file name ends in one of the accepted extensions.
    ///
    /// Matches on the name suffix, so a bare dotfile such as `.cs` counts.
    pub fn accepts_file(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy().to_lowercase();
        self.extensions
            .iter()
            .map(|accepted| accepted.trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .any(|ext| name.ends_with(&format!(".{}", ext.to_lowercase())))
    }
}

/// A file found inside a template tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Absolute path of the root the file was found under, as it was stripped
    pub root: String,
    /// Path of the file with `root` removed from its front
    pub relative: String,
}

impl TemplateFile {
    /// Full path of the file, rebuilt by putting the root back in front
    pub fn absolute(&self) -> String {
        format!("{}{}", self.root, self.relative)
    }
}

/// Outcome of a scan over a set of roots
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Matching files in traversal order, grouped by root in root order
    pub files: Vec<TemplateFile>,
    /// Subtrees that could not be read and were skipped
    pub diagnostics: Vec<ScanError>,
}

impl ScanReport {
    /// Root-relative paths of all files found, in traversal order
    pub fn relative_paths(&self) -> Vec<String> {
        self.files.iter().map(|f| f.relative.clone()).collect()
    }

    /// Full paths of all files found, in traversal order
    pub fn absolute_paths(&self) -> Vec<String> {
        self.files.iter().map(TemplateFile::absolute).collect()
    }
}

/// Walks root directories looking for files inside template trees
#[derive(Debug, Clone, Default)]
pub struct TemplateFileCollector {
    rules: MatchRules,
}

impl TemplateFileCollector {
    pub fn new(rules: MatchRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// Collect root-relative paths of all template files under `roots`.
    ///
    /// Roots that do not exist are skipped. Unreadable subtrees are skipped
    /// too; use [`TemplateFileCollector::scan`] to see which ones.
    pub fn collect<P: AsRef<Path>>(&self, roots: &[P]) -> Vec<String> {
        self.scan(roots).relative_paths()
    }

    /// Walk every root in order and report the files found plus any subtrees
    /// that had to be skipped
    pub fn scan<P: AsRef<Path>>(&self, roots: &[P]) -> ScanReport {
        let mut report = ScanReport::default();
        for root in roots {
            self.scan_root(root.as_ref(), &mut report);
        }
        report
    }

    fn scan_root(&self, root: &Path, report: &mut ScanReport) {
        let Ok(root) = path::absolute(root) else {
            return;
        };
        if !root.is_dir() {
            return;
        }
        let prefix = root.to_string_lossy().into_owned();
        let root_flag = self.rules.match_root_name
            && root_name(&root).is_some_and(|name| self.rules.is_template_dir_name(&name));

        // flags[d] is the template flag of the directory at depth d on the current branch
        let mut flags: Vec<bool> = Vec::new();

        // Pre-order with subdirectories ahead of files: a directory's own files
        // are reached only after every subtree below it has been walked.
        // Linked directories are descended into; walkdir reports link loops as errors.
        let walker = WalkDir::new(&root).follow_links(true).sort_by(|a, b| {
            let a_dir = sorts_as_dir(a);
            let b_dir = sorts_as_dir(b);
            b_dir.cmp(&a_dir).then_with(|| a.file_name().cmp(b.file_name()))
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    report.diagnostics.push(ScanError::from_walk(err, &root));
                    continue;
                }
            };

            let depth = entry.depth();
            if entry.file_type().is_dir() {
                flags.truncate(depth);
                let flag = if depth == 0 {
                    root_flag
                } else {
                    let name = entry.file_name().to_string_lossy();
                    parent_flag(&flags, depth) || self.rules.is_template_dir_name(&name)
                };
                flags.push(flag);
            } else if entry.file_type().is_file()
                && depth > 0
                && parent_flag(&flags, depth)
                && self.rules.accepts_file(entry.path())
            {
                report.files.push(TemplateFile {
                    root: prefix.clone(),
                    relative: strip_root(entry.path(), &prefix),
                });
            }
        }
    }
}

/// Name of the directory a root points at, with `.` and `..` resolved
/// lexically. `None` for a filesystem root.
fn root_name(root: &Path) -> Option<String> {
    let mut names = Vec::new();
    for component in root.components() {
        match component {
            Component::Normal(name) => names.push(name),
            Component::ParentDir => {
                names.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    names.last().map(|name| name.to_string_lossy().into_owned())
}

// Sorting sees entries before links are followed
fn sorts_as_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

fn parent_flag(flags: &[bool], depth: usize) -> bool {
    flags.get(depth - 1).copied().unwrap_or(false)
}

fn strip_root(path: &Path, prefix: &str) -> String {
    let full = path.to_string_lossy();
    match full.strip_prefix(prefix) {
        Some(rest) => rest.to_string(),
        None => full.into_owned(),
    }
}

/// Convenience wrapper using the default markers and extensions
pub fn collect<P: AsRef<Path>>(roots: &[P]) -> Vec<String> {
    TemplateFileCollector::default().collect(roots)
}
