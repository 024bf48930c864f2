use directories::BaseDirs;
use std::path::PathBuf;

const ENV_CONFIG_DIR: &str = "ANIMATEDFETCHING_CONFIG_DIR";
const APP_DIR: &str = "animatedfetching";

pub const FALLBACK_GIF: &str = "animation.gif";
const CONFIG_FILE: &str = "config.toml";

/// `$ANIMATEDFETCHING_CONFIG_DIR`, else `~/.config/animatedfetching`.
pub fn config_root() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(p));
    }
    BaseDirs::new().map(|d| d.home_dir().join(".config").join(APP_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_root().map(|root| root.join(CONFIG_FILE))
}

pub fn default_gif_path() -> PathBuf {
    config_root()
        .map(|root| root.join(FALLBACK_GIF))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_GIF))
}

/// Expands a leading `~` to the home directory; anything else is returned as is.
pub fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(raw),
    };
    match BaseDirs::new() {
        Some(d) => d.home_dir().join(rest),
        None => PathBuf::from(raw),
    }
}
