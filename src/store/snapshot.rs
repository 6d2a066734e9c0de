//! Snapshot file persistence.
//!
//! The snapshot is a pretty-printed JSON array of match records. Writes go
//! to a temp file in the same directory which is then renamed over the
//! target, so a reader only ever sees the old or the new snapshot.

use crate::model::MatchRecord;
use crate::utils::error::StoreError;
use log::{debug, error, info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Flat-file store for the most recent match collection
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the previous collection
    ///
    /// Never fails: a missing, unreadable or corrupt snapshot yields an
    /// empty collection and `found = false`.
    ///
    /// # Returns
    /// `(records, found)`
    pub fn load(&self) -> (Vec<MatchRecord>, bool) {
        match self.try_load() {
            Ok(Some(records)) => {
                info!(
                    "Loaded {} previous matches from {}",
                    records.len(),
                    self.path.display()
                );
                (records, true)
            }
            Ok(None) => {
                info!("No previous matches file found at {}", self.path.display());
                (Vec::new(), false)
            }
            Err(e) => {
                warn!(
                    "Ignoring unusable snapshot {}: {}. Treating this run as a cold start",
                    self.path.display(),
                    e
                );
                (Vec::new(), false)
            }
        }
    }

    /// Load the previous collection, surfacing every failure
    ///
    /// # Returns
    /// `Ok(None)` when no snapshot exists yet
    ///
    /// # Errors
    /// * `StoreError::Io` - file exists but cannot be read
    /// * `StoreError::Corrupt` - content is not a valid match list
    pub fn try_load(&self) -> Result<Option<Vec<MatchRecord>>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let records: Vec<MatchRecord> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(records))
    }

    /// Replace the snapshot with `records`
    ///
    /// # Returns
    /// `false` on any I/O failure; the previous snapshot is left intact
    pub fn save(&self, records: &[MatchRecord]) -> bool {
        match self.try_save(records) {
            Ok(()) => {
                info!(
                    "Saved {} current matches to {}",
                    records.len(),
                    self.path.display()
                );
                true
            }
            Err(e) => {
                error!("Error saving current matches to {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// Atomically replace the snapshot with `records`
    ///
    /// # Errors
    /// * `StoreError::InvalidPath` - path is empty or a directory
    /// * `StoreError::Io` - temp file cannot be created or written
    /// * `StoreError::PersistFailed` - rename over the target failed
    pub fn try_save(&self, records: &[MatchRecord]) -> Result<(), StoreError> {
        self.replace_with(|writer| {
            serde_json::to_writer_pretty(writer, records).map_err(|e| StoreError::Io(e.into()))
        })
    }

    /// Stream new content into a temp file and rename it over the snapshot
    ///
    /// If `write` fails the temp file is dropped (and removed) before the
    /// rename, so the existing snapshot is untouched.
    fn replace_with<F>(&self, write: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BufWriter<&mut File>) -> Result<(), StoreError>,
    {
        let dir = self.parent_dir()?;

        if !dir.exists() {
            debug!("Creating snapshot directory: {}", dir.display());
            fs::create_dir_all(&dir)?;
        }

        // Temp file must live on the same filesystem for the rename to be atomic
        let mut temp = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            write(&mut writer)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path)?;

        Ok(())
    }

    fn parent_dir(&self) -> Result<PathBuf, StoreError> {
        if self.path.as_os_str().is_empty() {
            return Err(StoreError::InvalidPath("Path is empty".to_string()));
        }

        if self.path.is_dir() {
            return Err(StoreError::InvalidPath(format!(
                "Path is a directory: {}",
                self.path.display()
            )));
        }

        Ok(match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        })
    }
}
