//! Path helpers

use std::fs;
use std::io;
use std::path::Path;

/// Create the missing directories above `path`, if any.
///
/// A bare filename has no parent to create and is a no-op.
pub fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
