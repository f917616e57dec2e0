use std::path::PathBuf;

const APP_DIR: &str = "ecocampus-ai";
const CONFIG_FILE: &str = "ecocampus.toml";

/// Location of the optional settings file for the current platform.
///
/// The directory is not created here; a missing file simply means defaults.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let mut path = get_config_dir()?;
    path.push(CONFIG_FILE);
    Ok(path)
}

/// Platform configuration directory:
/// - Linux: `$XDG_CONFIG_HOME/ecocampus-ai/`, else `~/.config/ecocampus-ai/`
/// - macOS: `~/Library/Application Support/ecocampus-ai/`
/// - Windows: `%APPDATA%\ecocampus-ai\`
fn get_config_dir() -> Result<PathBuf, std::io::Error> {
    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
            let mut path = PathBuf::from(xdg);
            path.push(APP_DIR);
            return Ok(path);
        }
        let mut path = home_dir()?;
        path.push(".config");
        path.push(APP_DIR);
        Ok(path)
    }

    #[cfg(target_os = "macos")]
    {
        let mut path = home_dir()?;
        path.push("Library");
        path.push("Application Support");
        path.push(APP_DIR);
        Ok(path)
    }

    #[cfg(target_os = "windows")]
    {
        let appdata = std::env::var_os("APPDATA").ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "APPDATA environment variable not set")
        })?;
        let mut path = PathBuf::from(appdata);
        path.push(APP_DIR);
        Ok(path)
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        let mut path = std::env::current_dir()?;
        path.push(format!(".{}", APP_DIR));
        Ok(path)
    }
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn home_dir() -> Result<PathBuf, std::io::Error> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "HOME environment variable not set")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_file_name() {
        if let Ok(path) = get_config_path() {
            assert_eq!(path.file_name(), Some(std::ffi::OsStr::new(CONFIG_FILE)));
            assert_eq!(path.extension(), Some(std::ffi::OsStr::new("toml")));
        }
    }

    #[test]
    fn test_config_dir_is_app_scoped() {
        if let Ok(dir) = get_config_dir() {
            let name = dir.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            assert!(name.ends_with(APP_DIR));
        }
    }
}
