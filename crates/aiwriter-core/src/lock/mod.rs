//! Advisory file locks guarding the local JSON stores
//!
//! Two CLI invocations writing the content library (or the post store) at the
//! same time would otherwise race on the read-modify-write cycle. Every store
//! operation takes a lock on a sibling `.lock` file first.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use fs2::FileExt;

mod error;
mod guard;

pub use error::LockError;
pub use guard::LockGuard;


/// Timeout for writers
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for readers
pub const READ_TIMEOUT: Duration = Duration::from_secs(5);

const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(10);
const MAX_RETRY_DELAY: Duration = Duration::from_millis(500);
const PROGRESS_THRESHOLD: Duration = Duration::from_secs(2);

/// Lock flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    /// Many readers may hold a shared lock at once
    Shared,
    /// A single writer, excluding readers
    Exclusive,
}

/// Acquires an exclusive lock on `lock_path`, retrying until `timeout`.
///
/// ```no_run
/// use aiwriter_core::lock::{acquire_lock, WRITE_TIMEOUT};
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let guard = acquire_lock(Path::new("/tmp/library.lock"), WRITE_TIMEOUT, "library update")?;
/// // read-modify-write here
/// drop(guard);
/// # Ok(())
/// # }
/// ```
pub fn acquire_lock(
    lock_path: &Path,
    timeout: Duration,
    description: &str,
) -> Result<LockGuard, LockError> {
    acquire(lock_path, LockMode::Exclusive, timeout, description)
}

/// Acquires a shared lock on `lock_path`, retrying until `timeout`.
pub fn acquire_shared_lock(
    lock_path: &Path,
    timeout: Duration,
    description: &str,
) -> Result<LockGuard, LockError> {
    acquire(lock_path, LockMode::Shared, timeout, description)
}

fn acquire(
    lock_path: &Path,
    mode: LockMode,
    timeout: Duration,
    description: &str,
) -> Result<LockGuard, LockError> {
    if let Some(parent) = lock_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| LockError::io(e, lock_path, "create parent directories"))?;
    }

    let mut backoff = Backoff::new();
    loop {
        let file = open_lock_file(lock_path)?;
        match try_lock(&file, mode) {
            Ok(()) => {
                tracing::trace!(path = %lock_path.display(), ?mode, "lock acquired");
                return Ok(LockGuard::new(file, lock_path.to_path_buf(), mode));
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                if backoff.elapsed() >= timeout {
                    return Err(LockError::Timeout {
                        path: lock_path.to_path_buf(),
                        description: description.to_string(),
                    });
                }
                if backoff.should_report() {
                    tracing::warn!(
                        path = %lock_path.display(),
                        waiting_for = description,
                        "another aiwriter process holds the lock, waiting"
                    );
                }
                backoff.wait();
            }
            Err(e) => return Err(LockError::io(e, lock_path, "acquire lock")),
        }
    }
}

fn open_lock_file(lock_path: &Path) -> Result<File, LockError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)
        .map_err(|e| LockError::io(e, lock_path, "open lock file"))
}

fn try_lock(file: &File, mode: LockMode) -> std::io::Result<()> {
    match mode {
        LockMode::Shared => FileExt::try_lock_shared(file),
        LockMode::Exclusive => FileExt::try_lock_exclusive(file),
    }
}

/// Doubling sleep between attempts, reported once after a while
struct Backoff {
    started: Instant,
    delay: Duration,
    reported: bool,
}

impl Backoff {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            delay: INITIAL_RETRY_DELAY,
            reported: false,
        }
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// True exactly once, after `PROGRESS_THRESHOLD`
    fn should_report(&mut self) -> bool {
        if self.reported || self.elapsed() < PROGRESS_THRESHOLD {
            return false;
        }
        self.reported = true;
        true
    }

    fn wait(&mut self) {
        thread::sleep(self.delay);
        self.delay = (self.delay * 2).min(MAX_RETRY_DELAY);
    }
}
