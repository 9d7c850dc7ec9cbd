use std::path::PathBuf;

const APP_DIR: &str = "bonokiosk";

/// Get the home directory, with fallback to "."
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Config directory (`~/.config/bonokiosk` on every OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join(APP_DIR)
}

/// Default config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join(APP_DIR)
}

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(path_str: &str) -> PathBuf {
    if path_str == "~" {
        get_home_dir()
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        get_home_dir().join(rest)
    } else {
        PathBuf::from(path_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let path = get_config_path();
        assert!(path.ends_with(".config/bonokiosk/config.toml"));
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("/opt/assets"), PathBuf::from("/opt/assets"));
        assert_eq!(expand_path("assets"), PathBuf::from("assets"));
        assert_eq!(expand_path("~/art"), get_home_dir().join("art"));
        assert_eq!(expand_path("~"), get_home_dir());
    }
}
