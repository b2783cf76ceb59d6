//! Filesystem validation helpers.

use std::path::Path;

use log::warn;

use crate::error::{PluginError, Result};

/// Ensure that `path` exists and is a regular file.
///
/// Distinguishes a missing path from one that exists but is a directory,
/// socket, or other non-file.
pub fn validate_file(path: &Path) -> Result<()> {
    let Ok(metadata) = path.metadata() else {
        return Err(PluginError::FileNotFound {
            path: path.to_path_buf(),
        });
    };

    if !metadata.is_file() {
        return Err(PluginError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Ensure that `path` is a regular file and warn about unsafe permissions.
///
/// Any "other" read/write/execute bit is a credential-leak risk, but only a
/// warning: permissive bits never fail the load. Mode bits are only
/// inspected on Unix.
pub fn validate_file_permissions(path: &Path) -> Result<()> {
    validate_file(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = path.metadata()
            && metadata.permissions().mode() & 0o007 != 0
        {
            warn!(
                "Unsafe permissions on credentials configuration file: {}",
                path.display()
            );
        }
    }

    Ok(())
}
