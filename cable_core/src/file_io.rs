//! # File I/O Module
//!
//! Project file operations with safety features:
//! - **Atomic saves**: write to .tmp, fsync, rename, so an interrupted save
//!   never corrupts the existing file
//! - **File locking**: prevents concurrent edits on shared drives
//! - **Version validation**: rejects files newer than the schema we speak
//!
//! ## File Format
//!
//! Projects are saved as `.cmv` (cable medium-voltage) files containing
//! JSON. Lock files use the `.cmv.lock` extension and carry metadata about
//! who holds the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cable_core::file_io::{save_project, load_project, FileLock};
//! use cable_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "25-001", "Utility");
//! let path = Path::new("feeders.cmv");
//!
//! let lock = FileLock::acquire(path, "engineer@utility.example").unwrap();
//! save_project(&project, path).unwrap();
//! drop(lock); // releases the lock
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CableError, CableResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Metadata stored in `.cmv.lock` files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where the lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

fn ser_err(e: serde_json::Error) -> CableError {
    CableError::SerializationError {
        reason: e.to_string(),
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Two mechanisms back it:
/// 1. an OS-level exclusive lock (via fs2) for process safety,
/// 2. a `.lock` sidecar file with metadata for user visibility.
pub struct FileLock {
    project_path: PathBuf,
    lock_path: PathBuf,
    /// Keeps the OS lock alive
    _lock_file: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a project file.
    ///
    /// Returns [`CableError::FileLocked`] when another live process holds
    /// the lock; a stale lock (dead process, or older than 24 h) is taken
    /// over silently.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CableResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !is_lock_stale(&existing) {
                    return Err(CableError::file_locked(
                        path.display().to_string(),
                        format!("{} ({})", existing.user_id, existing.machine),
                        existing.locked_at.to_rfc3339(),
                    ));
                }
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                CableError::file_error(
                    "create lock",
                    lock_path.display().to_string(),
                    e.to_string(),
                )
            })?;

        // Non-blocking: a held lock is an error, not a wait
        lock_file.try_lock_exclusive().map_err(|_| {
            CableError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json = serde_json::to_string_pretty(&info).map_err(ser_err)?;
        lock_file.write_all(lock_json.as_bytes()).map_err(|e| {
            CableError::file_error("write lock", lock_path.display().to_string(), e.to_string())
        })?;
        lock_file.sync_all().map_err(|e| {
            CableError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            project_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check whether a file is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if locked, `None` if available.
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        if lock_path.exists() {
            if let Ok(info) = read_lock_info(&lock_path) {
                if !is_lock_stale(&info) {
                    return Some(info);
                }
            }
        }
        None
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
        // OS lock is released when _lock_file is dropped
    }
}

/// Lock file path for a project file (`feeders.cmv` -> `feeders.cmv.lock`)
fn lock_path_for(project_path: &Path) -> PathBuf {
    let mut lock_path = project_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn read_lock_info(lock_path: &Path) -> CableResult<LockInfo> {
    let contents = fs::read_to_string(lock_path).map_err(|e| {
        CableError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;
    serde_json::from_str(&contents).map_err(ser_err)
}

/// Whether a lock was left behind by a process that is no longer running.
fn is_lock_stale(info: &LockInfo) -> bool {
    if let Some(our_machine) = hostname() {
        if info.machine == our_machine {
            #[cfg(windows)]
            {
                use std::process::Command;
                let output = Command::new("tasklist")
                    .args(["/FI", &format!("PID eq {}", info.pid), "/NH"])
                    .output();
                if let Ok(output) = output {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    if stdout.contains("No tasks") || !stdout.contains(&info.pid.to_string()) {
                        return true;
                    }
                }
            }
            #[cfg(unix)]
            {
                if fs::metadata(format!("/proc/{}", info.pid)).is_err() {
                    return true;
                }
            }
        }
    }

    // Cross-machine locks cannot be probed; fall back on age
    let age = Utc::now() - info.locked_at;
    age.num_hours() > 24
}

/// Save a project to a file with atomic write semantics.
///
/// The save process:
/// 1. serialize the project to JSON,
/// 2. write to a temporary file (`.cmv.tmp`),
/// 3. fsync,
/// 4. rename onto the target (atomic on most filesystems).
///
/// # Example
///
/// ```rust,no_run
/// use cable_core::file_io::save_project;
/// use cable_core::project::Project;
/// use std::path::Path;
///
/// let project = Project::new("Engineer", "25-001", "Utility");
/// save_project(&project, Path::new("feeders.cmv"))?;
/// # Ok::<(), cable_core::errors::CableError>(())
/// ```
pub fn save_project(project: &Project, path: &Path) -> CableResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(ser_err)?;

    let tmp_path = path.with_extension("cmv.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CableError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;
    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CableError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;
    tmp_file.sync_all().map_err(|e| {
        CableError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CableError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a project from a `.cmv` file.
///
/// # Returns
///
/// * `Ok(Project)` - successfully loaded
/// * `Err(CableError::VersionMismatch)` - file schema is incompatible
/// * `Err(CableError::SerializationError)` - invalid JSON
/// * `Err(CableError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CableResult<Project> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CableError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let project: Project =
        serde_json::from_str(&contents).map_err(|e| CableError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;

    Ok(project)
}

/// Load a project, also reporting whether another user holds its lock.
///
/// # Returns
///
/// * `Ok((Project, None))` - loaded, no lock
/// * `Ok((Project, Some(LockInfo)))` - loaded, but open read-only elsewhere
pub fn load_project_with_lock_check(path: &Path) -> CableResult<(Project, Option<LockInfo>)> {
    let project = load_project(path)?;
    let lock_info = FileLock::check(path);
    Ok((project, lock_info))
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CableResult<()> {
    let mismatch = || CableError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // In 0.x the minor version also breaks: refuse files newer than us
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_project_path(name: &str) -> PathBuf {
        temp_dir().join(format!("cablecalc_test_{}.cmv", name))
    }

    #[test]
    fn test_lock_path_generation() {
        let project_path = Path::new("/path/to/feeders.cmv");
        assert_eq!(
            lock_path_for(project_path),
            Path::new("/path/to/feeders.cmv.lock")
        );
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("test@example.com");
        assert_eq!(info.user_id, "test@example.com");
        assert!(info.pid > 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_project_path("roundtrip");

        let mut project = Project::new("Test Engineer", "TEST-001", "Test Utility");
        project.add_circuit(crate::project::Circuit::new("Feeder A"));
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.meta.job_id, "TEST-001");
        assert_eq!(loaded.circuit_count(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_project_path("atomic");
        let tmp_path = path.with_extension("cmv.tmp");

        let project = Project::new("Test", "TEST", "Utility");
        save_project(&project, &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_project_path("lock_test");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "test@example.com").unwrap();
        assert_eq!(lock.info.user_id, "test@example.com");

        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());

        drop(lock);
        assert!(!lock_path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());

        // Newer than the schema we speak
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_load_with_lock_check() {
        let path = temp_project_path("lock_check");

        let project = Project::new("Test", "TEST", "Utility");
        save_project(&project, &path).unwrap();

        let (loaded, lock_info) = load_project_with_lock_check(&path).unwrap();
        assert_eq!(loaded.meta.job_id, "TEST");
        assert!(lock_info.is_none());

        let _ = fs::remove_file(&path);
    }
}
