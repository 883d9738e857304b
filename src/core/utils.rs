use dirs::home_dir;
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use super::errors::Result;

const DEFAULT_DIR_NAME: &str = ".hours_core";
const DATA_DIR: &str = "data";
const CONFIG_DIR: &str = "config";
const STORE_FILE: &str = "entries.json";
const CONFIG_FILE: &str = "config.json";
const HISTORY_FILE: &str = "history.txt";
const TMP_SUFFIX: &str = "tmp";

/// Environment variable that relocates every file the application writes.
pub const HOME_ENV: &str = "HOURS_CORE_HOME";

/// Returns the application-specific data directory, defaulting to `~/.hours_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the entry store document under `base`.
pub fn store_file_in(base: &Path) -> PathBuf {
    base.join(DATA_DIR).join(STORE_FILE)
}

/// Path of the configuration document under `base`.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Path of the interactive shell history under `base`.
pub fn history_file_in(base: &Path) -> PathBuf {
    base.join(HISTORY_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Sibling path used to stage writes before the final rename.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to a temporary sibling and renames it over `path`.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}
