use crate::analyzers::{is_go_source, is_go_test};
use crate::errors::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Finds the Go files to analyze under a set of roots.
///
/// Directories are walked honoring `.gitignore`; files named directly are
/// always kept.
pub struct FileWalker {
    roots: Vec<PathBuf>,
    exclude: Vec<glob::Pattern>,
    include_tests: bool,
}

impl FileWalker {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            exclude: vec![],
            include_tests: true,
        }
    }

    pub fn with_exclude_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.exclude = patterns
            .iter()
            .map(|pattern| glob::Pattern::new(pattern))
            .collect::<std::result::Result<_, _>>()?;
        Ok(self)
    }

    pub fn with_tests(mut self, include_tests: bool) -> Self {
        self.include_tests = include_tests;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in &self.roots {
            if root.is_file() {
                files.push(root.clone());
                continue;
            }

            let walker = WalkBuilder::new(root).hidden(true).git_ignore(true).build();
            for entry in walker {
                let entry = entry?;
                let path = entry.path();
                if path.is_file() && self.should_process(path) {
                    files.push(path.to_path_buf());
                }
            }
        }

        files.sort();
        files.dedup();
        log::debug!("Discovered {} Go files", files.len());
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if !is_go_source(path) {
            return false;
        }
        if !self.include_tests && is_go_test(path) {
            return false;
        }
        let path_str = path.to_string_lossy();
        !self
            .exclude
            .iter()
            .any(|pattern| pattern.matches(&path_str))
    }
}
