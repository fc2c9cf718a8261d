//! Directory-backed queue using write-then-rename publication.
//!
//! The rename step is a hard link of the staging file to its visible name
//! followed by removal of the staging name. Unlike `rename(2)`, linking
//! fails if the visible name already exists, so a published entry is never
//! replaced.

use crate::backend::{validate_entry_name, QueueBackend};
use crate::error::{QueueError, QueueResult};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name prefix of an entry that is still being written.
pub const STAGING_PREFIX: &str = "t";

/// File name prefix of an entry that is complete and visible to consumers.
pub const VISIBLE_PREFIX: &str = "s";

/// A queue that publishes each entry as a file in a directory.
///
/// Publication follows the write-then-rename pattern:
/// 1. Create `t<name>` (create-new, never overwrites)
/// 2. Write the full payload, flush, optionally fsync, close
/// 3. Link `t<name>` to `s<name>` (fails if `s<name>` exists), then
///    remove `t<name>`
/// 4. Optionally fsync the directory so the rename is durable
///
/// Consumers only ever look at `s`-prefixed files, and the link appears
/// atomically with the full payload, so a truncated payload is never
/// observable.
///
/// # Thread Safety
///
/// `DirectoryQueue` holds no mutable state. Any number of threads or
/// processes may publish into the same directory concurrently as long as
/// entry names are unique.
///
/// # Example
///
/// ```no_run
/// use wordvote_queue::{DirectoryQueue, QueueBackend};
/// use std::path::Path;
///
/// let queue = DirectoryQueue::open(Path::new("pending"), true).unwrap();
/// queue.publish("abc123", b"payload").unwrap();
/// assert!(Path::new("pending/sabc123").exists());
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryQueue {
    path: PathBuf,
    sync_writes: bool,
}

impl DirectoryQueue {
    /// Opens a queue directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the queue directory
    /// * `create_if_missing` - If true, creates the directory if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::DirectoryUnavailable`] if the directory doesn't
    /// exist (and `create_if_missing` is false) or the path is not a directory.
    pub fn open(path: &Path, create_if_missing: bool) -> QueueResult<Self> {
        if !path.exists() && create_if_missing {
            fs::create_dir_all(path)?;
        }

        if !path.is_dir() {
            return Err(QueueError::DirectoryUnavailable {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            sync_writes: true,
        })
    }

    /// Sets whether payloads and the directory are fsynced on publish.
    ///
    /// Enabled by default. Disabling keeps atomic visibility but a power
    /// loss may drop recently published entries.
    #[must_use]
    pub fn with_sync_writes(mut self, sync_writes: bool) -> Self {
        self.sync_writes = sync_writes;
        self
    }

    /// Returns the queue directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns whether publication fsyncs.
    #[must_use]
    pub fn sync_writes(&self) -> bool {
        self.sync_writes
    }

    /// Returns the staging path for an entry.
    #[must_use]
    pub fn staging_path(&self, name: &str) -> PathBuf {
        self.path.join(format!("{STAGING_PREFIX}{name}"))
    }

    /// Returns the visible path for an entry.
    #[must_use]
    pub fn visible_path(&self, name: &str) -> PathBuf {
        self.path.join(format!("{VISIBLE_PREFIX}{name}"))
    }

    fn write_staging(&self, staging_path: &Path, payload: &[u8]) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(staging_path)?;
        file.write_all(payload)?;
        file.flush()?;
        if self.sync_writes {
            file.sync_all()?;
        }
        // Closed before the rename.
        drop(file);
        Ok(())
    }

    /// Moves `staging_path` to `visible_path` without replacing an
    /// existing entry.
    fn rename_no_replace(&self, staging_path: &Path, visible_path: &Path) -> QueueResult<()> {
        fs::hard_link(staging_path, visible_path).map_err(|source| QueueError::Publish {
            path: staging_path.to_path_buf(),
            source,
        })?;

        // The entry is visible; a leftover staging name is only clutter.
        if let Err(e) = fs::remove_file(staging_path) {
            warn!(staging = %staging_path.display(), error = %e, "failed to remove staging name");
        }
        Ok(())
    }

    #[cfg(unix)]
    fn sync_directory(&self) -> std::io::Result<()> {
        File::open(&self.path)?.sync_all()
    }

    #[cfg(not(unix))]
    fn sync_directory(&self) -> std::io::Result<()> {
        // Directory fsync is not available; NTFS journals the rename.
        Ok(())
    }
}

impl QueueBackend for DirectoryQueue {
    fn publish(&self, name: &str, payload: &[u8]) -> QueueResult<()> {
        validate_entry_name(name)?;

        let staging_path = self.staging_path(name);
        let visible_path = self.visible_path(name);

        self.write_staging(&staging_path, payload)
            .map_err(|source| QueueError::Stage {
                path: staging_path.clone(),
                source,
            })?;

        self.rename_no_replace(&staging_path, &visible_path)?;

        // The entry is already visible here; failing now would invite a
        // duplicate retry from the caller.
        if self.sync_writes {
            if let Err(e) = self.sync_directory() {
                warn!(dir = %self.path.display(), error = %e, "queue directory fsync failed");
            }
        }

        debug!(entry = %visible_path.display(), bytes = payload.len(), "published queue entry");
        Ok(())
    }
}
