//! Age-based retention.
//!
//! A file expires when its last modification is strictly earlier than
//! `reference_time - max_age_days`. The cutoff is computed once per
//! evaluation so every file is judged against the same instant.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use tidyfile_core::FileEntry;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Retention threshold for the sweep.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RetentionPolicy {
    /// Files older than this many days expire.
    pub max_age_days: u32,

    /// Reference time for age calculations (default: now).
    #[builder(default = "SystemTime::now()")]
    pub reference_time: SystemTime,
}

impl RetentionPolicyBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.max_age_days {
            Some(0) => Err("Retention threshold must be at least one day".to_string()),
            None => Err("Retention threshold is required".to_string()),
            _ => Ok(()),
        }
    }
}

impl RetentionPolicy {
    /// Create a policy measured from now.
    pub fn new(max_age_days: u32) -> Self {
        Self {
            max_age_days,
            reference_time: SystemTime::now(),
        }
    }

    /// Create a new policy builder.
    pub fn builder() -> RetentionPolicyBuilder {
        RetentionPolicyBuilder::default()
    }

    /// The threshold as a duration.
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(u64::from(self.max_age_days) * SECS_PER_DAY)
    }

    /// The instant before which files expire.
    pub fn cutoff(&self) -> SystemTime {
        self.reference_time
            .checked_sub(self.max_age())
            .unwrap_or(SystemTime::UNIX_EPOCH)
    }

    /// Check a modification time against the cutoff.
    pub fn is_expired(&self, modified: SystemTime) -> bool {
        modified < self.cutoff()
    }

    /// Split `files` into expired, retained and undated.
    pub fn evaluate(&self, files: &[FileEntry]) -> RetentionPlan {
        let cutoff = self.cutoff();
        let mut plan = RetentionPlan {
            cutoff,
            ..Default::default()
        };

        for file in files {
            match file.modified {
                Some(modified) if modified < cutoff => plan.expired.push(file.clone()),
                Some(_) => plan.retained += 1,
                None => plan.undated.push(file.path.clone()),
            }
        }

        plan
    }
}

/// Outcome of evaluating files against a retention policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionPlan {
    /// Cutoff every file was compared against.
    pub cutoff: SystemTime,
    /// Files modified before the cutoff, in input order.
    pub expired: Vec<FileEntry>,
    /// Number of files at or after the cutoff.
    pub retained: u64,
    /// Files whose modification time could not be read.
    pub undated: Vec<PathBuf>,
}

impl Default for RetentionPlan {
    fn default() -> Self {
        Self {
            cutoff: SystemTime::UNIX_EPOCH,
            expired: Vec::new(),
            retained: 0,
            undated: Vec::new(),
        }
    }
}

impl RetentionPlan {
    /// Total size of expired files.
    pub fn expired_bytes(&self) -> u64 {
        self.expired.iter().map(|f| f.size).sum()
    }
}
