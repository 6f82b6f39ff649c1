//! Locating runtime data.
//!
//! The data directory holds files the player may edit, such as `cave.map`.
//! `CAVERN_DATA_DIR` wins when set; otherwise a handful of conventional
//! locations near the working directory and the executable are probed.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::info;

/// Environment variable naming an explicit data directory.
pub const DATA_DIR_VAR: &str = "CAVERN_DATA_DIR";

static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(|| {
    let root = resolve_data_root(env::var_os(DATA_DIR_VAR).map(PathBuf::from));
    info!("using data directory {}", root.display());
    root
});

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Pick the data directory, preferring an explicit override.
pub fn resolve_data_root(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }

    let mut candidates = vec![PathBuf::from("cavern_engine/data"), PathBuf::from("data")];
    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.extend(dir.ancestors().take(2).flat_map(|base| [base.join("cavern_engine/data"), base.join("data")]));
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directory_wins() {
        let dir = PathBuf::from("/somewhere/else");
        assert_eq!(resolve_data_root(Some(dir.clone())), dir);
    }
}
