//! Filesystem rule-snapshot loader.
//!
//! Scans a directory (recursively) for `*.yml` / `*.yaml` files, one rule
//! document per file, and materializes an in-memory snapshot keyed by rule
//! ID. Parse errors are reported per file and never abort the scan, so one
//! malformed rule cannot take down the rest of the snapshot.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::schema::TriggerRule;

// ── Errors and load results ─────────────────────────────────────────

/// Errors that can occur while scanning the rules directory.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Outcome of loading a single rule file.
#[derive(Debug)]
pub struct LoadResult {
    /// Path to the file that was inspected.
    pub path: PathBuf,
    /// Status of the load attempt.
    pub status: LoadStatus,
}

/// Status of a single file load attempt.
#[derive(Debug)]
pub enum LoadStatus {
    /// Rule was successfully loaded.
    Loaded { rule_id: String },
    /// File was skipped (dotfile, non-YAML extension).
    Skipped { reason: String },
    /// Parse or deserialization error occurred.
    Failed { error: String },
}

// ── Loader ──────────────────────────────────────────────────────────

/// Directory-backed snapshot loader for trigger rules.
///
/// The engine consumes immutable snapshots: call [`load_all`](Self::load_all)
/// to (re)scan the directory, then hand [`rules`](Self::rules) to the
/// validator. Duplicate rule IDs replace the earlier document with a
/// warning.
pub struct RuleLoader {
    rules_dir: PathBuf,
    rules: HashMap<String, TriggerRule>,
}

impl RuleLoader {
    /// Create a loader for the given directory.
    pub fn new(rules_dir: PathBuf) -> Self {
        Self {
            rules_dir,
            rules: HashMap::new(),
        }
    }

    /// Recursively scan the rules directory and load all YAML files.
    ///
    /// Dotfiles and non-YAML files are skipped; per-file failures are
    /// reported in the returned list but do not abort the scan.
    pub fn load_all(&mut self) -> Result<Vec<LoadResult>> {
        self.rules.clear();
        let dir = self.rules_dir.clone();
        let mut results = Vec::new();
        self.scan_dir(&dir, &mut results)?;
        Ok(results)
    }

    fn scan_dir(&mut self, dir: &Path, results: &mut Vec<LoadResult>) -> Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "failed to read rules directory");
                return Ok(());
            }
        };

        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') {
                    if path.is_file() {
                        results.push(LoadResult {
                            path,
                            status: LoadStatus::Skipped {
                                reason: "dotfile".to_string(),
                            },
                        });
                    }
                    continue;
                }
            }

            if path.is_dir() {
                self.scan_dir(&path, results)?;
                continue;
            }

            let is_yaml = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e == "yml" || e == "yaml")
                .unwrap_or(false);
            if !is_yaml {
                results.push(LoadResult {
                    path,
                    status: LoadStatus::Skipped {
                        reason: "not a YAML file".to_string(),
                    },
                });
                continue;
            }

            match load_file(&path) {
                Ok(rule) => {
                    let rule_id = rule.id.clone();
                    info!(rule_id = %rule_id, path = %path.display(), "loaded trigger rule");
                    if self.rules.insert(rule_id.clone(), rule).is_some() {
                        warn!(rule_id = %rule_id, path = %path.display(), "duplicate rule id, replacing earlier document");
                    }
                    results.push(LoadResult {
                        path,
                        status: LoadStatus::Loaded { rule_id },
                    });
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load rule file");
                    results.push(LoadResult {
                        path,
                        status: LoadStatus::Failed {
                            error: e.to_string(),
                        },
                    });
                }
            }
        }

        Ok(())
    }

    /// Snapshot of all loaded rules, for handing to the validator.
    pub fn rules(&self) -> Vec<TriggerRule> {
        self.rules.values().cloned().collect()
    }

    /// Look up a loaded rule by ID.
    pub fn get(&self, rule_id: &str) -> Option<&TriggerRule> {
        self.rules.get(rule_id)
    }

    /// Number of loaded rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn load_file(path: &Path) -> std::result::Result<TriggerRule, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_yaml::from_str(&content).map_err(|e| e.to_string())
}

// ── Tests ───────────────────────────────────────────────────────────
