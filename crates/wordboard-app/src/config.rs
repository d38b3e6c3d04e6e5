//! User settings loaded from `.wordboard/config.toml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wordboard_core::{Error, Result, DEFAULT_BOARD_SIZE};

pub const CONFIG_DIR_NAME: &str = ".wordboard";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardSettings,
    pub tiles: TileSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Side length of the square board.
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileSettings {
    /// Tile interior width in terminal cells.
    pub width: u16,
    /// Tile interior height in terminal cells.
    pub height: u16,
}

impl Settings {
    /// Reject values the board or geometry cannot represent.
    ///
    /// `origin_x`/`origin_y` are where the grid's top-left corner will be
    /// placed; every coordinate of the drawn grid must stay within `u16`
    /// from there, so oversized boards fail here instead of overflowing
    /// inside the geometry arithmetic.
    pub fn validate(&self, origin_x: u16, origin_y: u16) -> Result<()> {
        if self.board.size == 0 {
            return Err(Error::config_invalid("board size must be at least 1"));
        }
        // cell ids pack row and column into 16 bits each
        if self.board.size > u16::MAX as usize {
            return Err(Error::config_invalid(format!(
                "board size {} is too large (maximum {})",
                self.board.size,
                u16::MAX
            )));
        }
        if self.tiles.width == 0 || self.tiles.height == 0 {
            return Err(Error::config_invalid("tile dimensions must be at least 1"));
        }
        // the grid spans size * (tile + divider) cells past its origin
        let span_x = self.board.size * (self.tiles.width as usize + 1);
        let span_y = self.board.size * (self.tiles.height as usize + 1);
        if origin_x as usize + span_x > u16::MAX as usize
            || origin_y as usize + span_y > u16::MAX as usize
        {
            return Err(Error::config_invalid(format!(
                "a board of {} tiles at {}x{} cells does not fit addressable screen space",
                self.board.size, self.tiles.width, self.tiles.height
            )));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            board: BoardSettings::default(),
            tiles: TileSettings::default(),
        }
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        BoardSettings {
            size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl Default for TileSettings {
    fn default() -> Self {
        TileSettings {
            width: 5,
            height: 3,
        }
    }
}

/// Path of the config file under a base directory (usually the user's
/// home directory).
pub fn config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Load settings from the config file under `base`.
///
/// A missing or unreadable file falls back to defaults; a file that exists
/// but fails to parse also falls back, with a warning, so a typo in the
/// config never prevents startup.
pub fn load_settings(base: &Path) -> Settings {
    let path = config_path(base);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no config file, using defaults");
            return Settings::default();
        }
    };
    match toml::from_str(&contents) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "invalid config file, using defaults");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, contents: &str) {
        let path = config_path(dir);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.board.size, DEFAULT_BOARD_SIZE);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[board]\nsize = 5\n");
        let settings = load_settings(dir.path());
        assert_eq!(settings.board.size, 5);
        assert_eq!(settings.tiles, TileSettings::default());
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "board = \"not a table\"\n");
        let settings = load_settings(dir.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        assert!(Settings::default().validate(0, 0).is_ok());

        let mut settings = Settings::default();
        settings.board.size = 0;
        assert!(settings.validate(0, 0).is_err());

        let mut settings = Settings::default();
        settings.tiles.height = 0;
        assert!(settings.validate(0, 0).is_err());
    }

    #[test]
    fn test_validate_rejects_boards_wider_than_the_screen_space() {
        // 20_000 tiles of the default 5-cell width span 120_000 cells,
        // past what u16 coordinates can address
        let mut settings = Settings::default();
        settings.board.size = 20_000;
        assert!(settings.validate(0, 0).is_err());

        // a tall-but-thin variant overflows on the vertical axis alone
        let mut settings = Settings::default();
        settings.tiles.width = 1;
        settings.tiles.height = 9;
        settings.board.size = 7_000;
        assert!(settings.validate(0, 0).is_err());

        // the largest grid that fits at the origin is accepted, and the
        // origin offset tips it over
        let mut settings = Settings::default();
        settings.tiles.width = 1;
        settings.tiles.height = 1;
        settings.board.size = u16::MAX as usize / 2;
        assert!(settings.validate(0, 0).is_ok());
        assert!(settings.validate(2, 2).is_err());
    }

    #[test]
    fn test_full_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "[board]\nsize = 7\n\n[tiles]\nwidth = 3\nheight = 1\n",
        );
        let settings = load_settings(dir.path());
        assert_eq!(settings.board.size, 7);
        assert_eq!(settings.tiles.width, 3);
        assert_eq!(settings.tiles.height, 1);
    }
}
