//! Helpers for tests that need paths the current user cannot access.

use std::path::Path;
use std::process::Command;

/// Whether the tests run as root, which bypasses permission checks.
pub fn is_root() -> bool {
    match Command::new("id").arg("-u").output() {
        Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
        Err(_) => false,
    }
}

/// Set mode `0o000` on `path` (a file or a directory) for the duration of
/// `f`, restoring the original mode afterwards even if `f` panics.
#[cfg(unix)]
pub fn with_unreadable<T>(path: &Path, f: impl FnOnce() -> T) -> T {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    struct Restore<'a>(&'a Path, u32);
    impl Drop for Restore<'_> {
        fn drop(&mut self) {
            let _ = fs::set_permissions(self.0, Permissions::from_mode(self.1));
        }
    }

    let original = fs::metadata(path)
        .unwrap_or_else(|e| panic!("with_unreadable: stat {} failed: {e}", path.display()))
        .permissions()
        .mode();
    fs::set_permissions(path, Permissions::from_mode(0o000))
        .unwrap_or_else(|e| panic!("with_unreadable: chmod {} failed: {e}", path.display()));
    let _restore = Restore(path, original);
    f()
}
