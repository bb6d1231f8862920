//! File system errors

use super::MigrateError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> MigrateError {
    MigrateError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> MigrateError {
    MigrateError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file move failed error
pub fn move_failed(
    from: impl Into<String>,
    to: impl Into<String>,
    reason: impl Into<String>,
) -> MigrateError {
    MigrateError::FileMoveFailed {
        from: from.into(),
        to: to.into(),
        reason: reason.into(),
    }
}

/// Creates a directory creation failed error
pub fn dir_create_failed(path: impl Into<String>, reason: impl Into<String>) -> MigrateError {
    MigrateError::DirCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
