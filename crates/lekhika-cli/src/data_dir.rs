//! Where to look for `mapping.toml` and `autocorrect.toml` when no
//! directory is given on the command line.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "LEKHIKA_DATA_DIR";
pub const SYSTEM_DATA_DIR: &str = "/usr/share/liblekhika/";
pub const LOCAL_DATA_DIR: &str = "/usr/local/share/liblekhika/";

/// Explicit directory, then `$LEKHIKA_DATA_DIR`, then the system directory
/// if it exists, else the local one.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    resolve_with(explicit, std::env::var_os(DATA_DIR_ENV), |p| p.is_dir())
}

fn resolve_with(
    explicit: Option<PathBuf>,
    env: Option<OsString>,
    exists: impl Fn(&Path) -> bool,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(dir) = env.filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    let system = Path::new(SYSTEM_DATA_DIR);
    if exists(system) {
        system.to_path_buf()
    } else {
        PathBuf::from(LOCAL_DATA_DIR)
    }
}
