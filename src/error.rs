use thiserror::Error;
use tracing::{error, warn};

/// Domain errors for the navigation data model.
///
/// The split matters for propagation: `OutOfRange` is always recoverable and
/// call sites that accept a user-supplied index treat it as a no-op, while
/// `DuplicateName` and `NameNotFound` only happen during one-time setup or
/// diagnostic lookups and propagate with `?`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// An index or paging request outside the visible page or the data bounds.
    #[error("slot {slot} is outside the visible page")]
    OutOfRange { slot: usize },

    /// Something was registered twice under the same name within one group.
    /// This is a configuration or programming error, fatal at registration time.
    #[error("redeclaration of '{name}' in {group}")]
    DuplicateName { group: String, name: String },

    /// A lookup by name failed.
    #[error("name not found: {name}")]
    NameNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, DataError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know,
/// for example a best-effort clipboard write.
pub trait ResultExt<T> {
    /// Log the error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as a warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
