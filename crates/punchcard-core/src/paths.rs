use std::path::{Path, PathBuf};

pub const PUNCHCARD_DIR: &str = ".punchcard";
pub const CONFIG_FILE: &str = ".punchcard/config.yaml";

pub fn punchcard_dir(root: &Path) -> PathBuf {
    root.join(PUNCHCARD_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    punchcard_dir(root).join("config.yaml")
}

/// Resolve the configured export directory against the project root.
/// Absolute directories are used as-is.
pub fn export_dir(root: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        root.join(configured)
    }
}
