use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::models::GenerationState;

/// File-backed JSON record of the rotation cursor.
///
/// Writes go to a sibling `.tmp` file that is then renamed over the target,
/// so a crash mid-write leaves either the previous or the new record.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state. Absent or unreadable files yield the default.
    pub fn read(&self) -> GenerationState {
        if !self.path.exists() {
            return GenerationState::default();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read state file {:?}: {}. Starting fresh.", self.path, e);
                return GenerationState::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Error decoding state file {:?}: {}. Starting fresh.", self.path, e);
                GenerationState::default()
            }
        }
    }

    pub fn write(&self, index: usize, date: NaiveDate) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let state = GenerationState::new(index, date);
        let content = serde_json::to_string_pretty(&state)?;

        let tmp_path = self.tmp_path();
        let mut file = File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        drop(file);
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    pub fn can_run_on(&self, date: NaiveDate) -> bool {
        !self.read().ran_on(date)
    }

    pub fn can_run_today(&self) -> bool {
        self.can_run_on(Local::now().date_naive())
    }

    pub fn next_index(&self, total: usize) -> Result<usize> {
        let state = self.read();
        if total > 0 && state.wraps_at(total) {
            tracing::info!("Reached end of list. Looping back to start.");
        }
        state.next_index(total)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
