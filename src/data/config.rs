use crate::data::assets;
use crate::host::InfoKey;
use crate::render::gif_loader::PaletteMode;
use crate::render::scaler::MAX_DISPLAY_WIDTH;
use crate::ui::theme::InfoColor;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One `label value` line. Keys the host record does not know are skipped when drawing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InfoSection {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: InfoColor,
}

impl InfoSection {
    pub fn info_key(&self) -> Option<InfoKey> {
        InfoKey::from_name(&self.key)
    }

    /// Falls back to the key itself.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub show_image: bool,
    pub gif_path: Option<String>,
    pub max_width: u32,
    pub clear_screen: bool,
    pub show_hostname: bool,

    /// Reject out-of-range palette indices instead of drawing color 0.
    pub strict_palette: bool,

    pub info_sections: Vec<InfoSection>,
}

pub fn default_info_sections() -> Vec<InfoSection> {
    let section = |label: &str, key: &str, color: InfoColor| InfoSection {
        key: key.to_string(),
        label: Some(label.to_string()),
        color,
    };
    vec![
        section("OS", "os", InfoColor::Cyan),
        section("Kernel", "kernel", InfoColor::Blue),
        section("Uptime", "uptime", InfoColor::Green),
        section("Shell", "shell", InfoColor::Yellow),
        section("Terminal", "terminal", InfoColor::Magenta),
        section("CPU", "cpu", InfoColor::Red),
        section("Memory", "memory", InfoColor::Cyan),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_image: true,
            gif_path: None,
            max_width: MAX_DISPLAY_WIDTH,
            clear_screen: true,
            show_hostname: true,
            strict_palette: false,
            info_sections: default_info_sections(),
        }
    }
}

impl Config {
    pub fn load_or_default() -> Self {
        match assets::config_path() {
            Some(path) => Self::load_or_fallback(&path),
            None => Self::default(),
        }
    }

    /// Never fails: problems become a warning and the defaults.
    pub fn load_or_fallback(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}; using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("config {} ignored: {e:#}", path.display());
                eprintln!("Warning: Failed to load config from {}: {e:#}", path.display());
                eprintln!("Using default configuration...");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("parse config")?;
        Ok(config)
    }

    pub fn palette_mode(&self) -> PaletteMode {
        if self.strict_palette {
            PaletteMode::Strict
        } else {
            PaletteMode::Clamp
        }
    }

    /// Grid width cap, never below 1.
    pub fn display_width(&self) -> u32 {
        self.max_width.max(1)
    }

    /// Command line first, then config, then `~/.config/animatedfetching/animation.gif`.
    pub fn resolve_gif_path(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(p) = cli_override {
            return p.to_path_buf();
        }
        match self.gif_path.as_deref() {
            Some(raw) => assets::expand_home(raw),
            None => assets::default_gif_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str("max_width = 24\nstrict_palette = true\n").unwrap();
        assert_eq!(config.max_width, 24);
        assert_eq!(config.palette_mode(), PaletteMode::Strict);
        assert!(config.clear_screen);
        assert!(config.show_image);
        assert_eq!(config.info_sections, default_info_sections());
    }

    #[test]
    fn sections_can_be_replaced() {
        let raw = r#"
            show_hostname = false

            [[info_sections]]
            label = "Host"
            key = "hostname"
            color = "green"
        "#;
        let config = Config::from_toml_str(raw).unwrap();
        assert!(!config.show_hostname);
        assert_eq!(config.info_sections.len(), 1);
        let section = &config.info_sections[0];
        assert_eq!(section.label(), "Host");
        assert_eq!(section.info_key(), Some(InfoKey::Hostname));
        assert_eq!(section.color, InfoColor::Green);
    }

    #[test]
    fn unknown_section_key_keeps_rest_of_file() {
        let raw = r#"
            max_width = 30

            [[info_sections]]
            label = "Disk"
            key = "disk"
            color = "blue"

            [[info_sections]]
            key = "kernel"
        "#;
        let config = Config::from_toml_str(raw).unwrap();
        assert_eq!(config.max_width, 30);
        assert_eq!(config.info_sections.len(), 2);
        assert_eq!(config.info_sections[0].info_key(), None);
        assert_eq!(config.info_sections[1].info_key(), Some(InfoKey::Kernel));
    }

    #[test]
    fn label_and_color_default() {
        let raw = "[[info_sections]]\nkey = \"shell\"\n";
        let config = Config::from_toml_str(raw).unwrap();
        let section = &config.info_sections[0];
        assert_eq!(section.label(), "shell");
        assert_eq!(section.color, InfoColor::White);
    }

    #[test]
    fn image_can_be_disabled() {
        let config = Config::from_toml_str("show_image = false\n").unwrap();
        assert!(!config.show_image);
        assert_eq!(config.max_width, MAX_DISPLAY_WIDTH);
    }

    #[test]
    fn unknown_color_falls_back_to_white() {
        let raw = "[[info_sections]]\nlabel = \"OS\"\nkey = \"os\"\ncolor = \"teal\"\n";
        let config = Config::from_toml_str(raw).unwrap();
        assert_eq!(config.info_sections[0].color, InfoColor::White);
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gif_path = \"/srv/banner.gif\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.resolve_gif_path(None), PathBuf::from("/srv/banner.gif"));
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_width = \"wide\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
        assert_eq!(Config::load_or_fallback(&path), Config::default());

        std::fs::write(&path, "max_width = 12\n").unwrap();
        assert_eq!(Config::load_or_fallback(&path).max_width, 12);
        assert_eq!(
            Config::load_or_fallback(&dir.path().join("absent.toml")),
            Config::default()
        );
    }

    #[test]
    fn cli_path_wins() {
        let config = Config {
            gif_path: Some("/from/config.gif".into()),
            ..Config::default()
        };
        let cli = Path::new("/from/cli.gif");
        assert_eq!(config.resolve_gif_path(Some(cli)), cli.to_path_buf());
    }

    #[test]
    fn zero_width_is_raised() {
        let config = Config {
            max_width: 0,
            ..Config::default()
        };
        assert_eq!(config.display_width(), 1);
    }
}
