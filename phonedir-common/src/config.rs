//! Configuration loading and root folder resolution

use std::path::{Path, PathBuf};

/// Environment variable overriding the data root folder
pub const ROOT_ENV_VAR: &str = "PHONEDIR_ROOT";

/// Environment variable carrying the admin bearer token
pub const ADMIN_TOKEN_ENV_VAR: &str = "PHONEDIR_ADMIN_TOKEN";

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `PHONEDIR_ROOT` environment variable
/// 3. `root_folder` key in the TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(root) = config_value("root_folder") {
        return PathBuf::from(root);
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Admin token resolution: environment variable first, then the
/// `admin_token` config key. `None` (or an empty value) disables the
/// admin gate entirely.
pub fn load_admin_token() -> Option<String> {
    if let Ok(token) = std::env::var(ADMIN_TOKEN_ENV_VAR) {
        if !token.is_empty() {
            return Some(token);
        }
    }
    config_value("admin_token").filter(|t| !t.is_empty())
}

/// SQLite database file under the root folder
pub fn database_path(root: &Path) -> PathBuf {
    root.join("phonedir.db")
}

/// Uploaded photo storage under the root folder
pub fn photos_dir(root: &Path) -> PathBuf {
    root.join("uploads").join("photos")
}

/// Read a top-level string value from the config file, if both exist
fn config_value(key: &str) -> Option<String> {
    let path = config_file_path()?;
    let content = std::fs::read_to_string(path).ok()?;
    let config = toml::from_str::<toml::Value>(&content).ok()?;
    config.get(key).and_then(|v| v.as_str()).map(String::from)
}

/// Platform config file location: `<config_dir>/phonedir/config.toml`
fn config_file_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("phonedir").join("config.toml");
    path.exists().then_some(path)
}

/// OS-dependent default root folder
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("phonedir"))
        .unwrap_or_else(|| PathBuf::from("./phonedir_data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins() {
        let root = resolve_root_folder(Some(Path::new("/tmp/phonedir-test")));
        assert_eq!(root, PathBuf::from("/tmp/phonedir-test"));
    }

    #[test]
    fn derived_paths() {
        let root = Path::new("/data/phonedir");
        assert_eq!(database_path(root), PathBuf::from("/data/phonedir/phonedir.db"));
        assert_eq!(
            photos_dir(root),
            PathBuf::from("/data/phonedir/uploads/photos")
        );
    }
}
