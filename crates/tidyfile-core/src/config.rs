//! Cleanup run configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Which operations a run performs.
///
/// Operations always execute in the order sort, dedupe, sweep regardless of
/// how they were selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Sort top-level files into category folders.
    #[serde(default)]
    pub sort: bool,
    /// Remove byte-identical duplicates.
    #[serde(default)]
    pub dedupe: bool,
    /// Remove files not modified in this many days.
    #[serde(default)]
    pub retention_days: Option<u32>,
}

impl Selection {
    /// Check if nothing was selected.
    pub fn is_empty(&self) -> bool {
        !self.sort && !self.dedupe && self.retention_days.is_none()
    }
}

/// Configuration for a cleanup run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CleanConfig {
    /// Directory to clean.
    pub root: PathBuf,

    /// Operations to run.
    #[builder(default)]
    #[serde(default)]
    pub selection: Selection,

    /// Include hidden files (starting with .) in recursive passes.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// Follow symbolic links during recursive passes.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_true() -> bool {
    true
}

impl CleanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                return Err("Root path cannot be empty".to_string());
            }
            None => return Err("Root path is required".to_string()),
            _ => {}
        }
        if let Some(Selection {
            retention_days: Some(0),
            ..
        }) = self.selection
        {
            return Err("Retention threshold must be at least one day".to_string());
        }
        Ok(())
    }
}

impl CleanConfig {
    /// Create a new config builder.
    pub fn builder() -> CleanConfigBuilder {
        CleanConfigBuilder::default()
    }

    /// Create a config for a path with nothing selected.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            selection: Selection::default(),
            include_hidden: true,
            follow_symlinks: false,
        }
    }

    /// Enable sorting.
    pub fn with_sort(mut self) -> Self {
        self.selection.sort = true;
        self
    }

    /// Enable duplicate removal.
    pub fn with_dedupe(mut self) -> Self {
        self.selection.dedupe = true;
        self
    }

    /// Enable the retention sweep with the given threshold in days.
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.selection.retention_days = Some(days);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = CleanConfig::builder()
            .root("/home/user/Desktop")
            .selection(Selection {
                sort: true,
                dedupe: false,
                retention_days: Some(30),
            })
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("/home/user/Desktop"));
        assert!(config.selection.sort);
        assert_eq!(config.selection.retention_days, Some(30));
        assert!(config.include_hidden);
        assert!(!config.follow_symlinks);
    }

    #[test]
    fn test_config_builder_requires_root() {
        assert!(CleanConfig::builder().build().is_err());
        assert!(CleanConfig::builder().root("").build().is_err());
    }

    #[test]
    fn test_config_builder_rejects_zero_days() {
        let result = CleanConfig::builder()
            .root("/tmp")
            .selection(Selection {
                retention_days: Some(0),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_selection() {
        assert!(Selection::default().is_empty());
        let config = CleanConfig::new("/tmp").with_dedupe();
        assert!(!config.selection.is_empty());
        assert!(config.selection.dedupe);
        assert!(!config.selection.sort);
    }
}
