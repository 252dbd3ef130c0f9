//! File discovery for finding qualifying images in a directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{DiscoveryConfig, MatchMode};
use crate::error::{PipelineError, PipelineResult};

/// Discovers qualifying image files in a directory.
pub struct FileDiscovery {
    config: DiscoveryConfig,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// Discover all qualifying files in a directory.
    ///
    /// Only regular files whose names match the configured marker are
    /// returned. Results are sorted by path so processing order (and
    /// therefore progress output and the report) is reproducible.
    pub fn discover(&self, dir: &Path) -> PipelineResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(PipelineError::DirectoryNotFound(dir.to_path_buf()));
        }

        let max_depth = if self.config.recursive {
            usize::MAX
        } else {
            1
        };

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).max_depth(max_depth) {
            let entry = entry.map_err(|e| PipelineError::ReadDir {
                path: dir.to_path_buf(),
                message: e.to_string(),
            })?;
            let path = entry.path();
            if entry.file_type().is_file() && self.matches(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Check whether a file name matches the configured marker.
    fn matches(&self, path: &Path) -> bool {
        match self.config.mode {
            MatchMode::Substring => path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.contains(&self.config.marker)),
            MatchMode::Extension => {
                let wanted = self.config.marker.trim_start_matches('.');
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
            }
        }
    }

    /// The marker this discovery instance matches against.
    pub fn marker(&self) -> &str {
        &self.config.marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiscoveryConfig;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_substring_match_is_permissive() {
        let discovery = FileDiscovery::new(DiscoveryConfig::default());

        assert!(discovery.matches(Path::new("shot.png")));
        // Substring mode: marker anywhere in the name qualifies
        assert!(discovery.matches(Path::new("shot.png.bak")));
        assert!(!discovery.matches(Path::new("notes.txt")));
        // Substring matching is case-sensitive
        assert!(!discovery.matches(Path::new("shot.PNG")));
    }

    #[test]
    fn test_extension_match_is_exact() {
        let config = DiscoveryConfig {
            mode: MatchMode::Extension,
            ..Default::default()
        };
        let discovery = FileDiscovery::new(config);

        assert!(discovery.matches(Path::new("shot.png")));
        assert!(discovery.matches(Path::new("shot.PNG")));
        assert!(!discovery.matches(Path::new("shot.png.bak")));
        assert!(!discovery.matches(Path::new("png_notes.txt")));
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.png");
        touch(dir.path(), "a.png");
        touch(dir.path(), "notes.txt");

        let discovery = FileDiscovery::new(DiscoveryConfig::default());
        let files = discovery.discover(dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_discover_non_recursive_skips_subdirs() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "top.png");
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub"), "nested.png");

        let discovery = FileDiscovery::new(DiscoveryConfig::default());
        let files = discovery.discover(dir.path()).unwrap();
        assert_eq!(files.len(), 1);

        let config = DiscoveryConfig {
            recursive: true,
            ..Default::default()
        };
        let discovery = FileDiscovery::new(config);
        let files = discovery.discover(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_discover_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let discovery = FileDiscovery::new(DiscoveryConfig::default());
        assert!(matches!(
            discovery.discover(&missing),
            Err(PipelineError::DirectoryNotFound(_))
        ));
    }
}
