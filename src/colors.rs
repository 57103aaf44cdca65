use crate::error::{AppError, Result};
use crate::utils::hex_to_rgb;

use std::fs;
use std::path::Path;

use palette::Srgb;
use serde_derive::Deserialize;

/// Built-in streetwear palette.
pub const STREETWEAR: [&str; 8] = [
    "#b536ff", // Neon Purple
    "#39ff14", // Neon Green
    "#ff4d4d", // Street Red
    "#f5f5f5", // Off White
    "#282828", // Charcoal
    "#0096ff", // Cyber Blue
    "#ffc800", // Caution Yellow
    "#ff3296", // Electric Pink
];

#[derive(Debug, Deserialize)]
struct PaletteFile {
    colors: Vec<String>,
}

/// Resolves a palette by name. A `<name>.toml` file in `config_dir` takes
/// precedence over the built-in palette of the same name.
pub fn load_palette(name: &str, config_dir: &Path) -> Result<Vec<Srgb<u8>>> {
    let palette_path = config_dir.join(format!("{}.toml", name));
    let hexes: Vec<String> = if palette_path.exists() {
        let contents = fs::read_to_string(&palette_path).map_err(|source| {
            AppError::FileSystem {
                path: palette_path.clone(),
                operation: "read palette",
                source,
            }
        })?;
        let file: PaletteFile = toml::from_str(&contents).map_err(|source| {
            AppError::PaletteFile {
                path: palette_path.clone(),
                source,
            }
        })?;
        file.colors
    } else if name == "streetwear" {
        STREETWEAR.iter().map(|&s| s.to_string()).collect()
    } else {
        return Err(AppError::PaletteNotFound {
            name: name.to_string(),
        });
    };

    hexes.iter().map(|hex| hex_to_rgb(hex)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_palette_has_eight_colors() {
        let dir = tempfile::tempdir().unwrap();
        let colors = load_palette("streetwear", dir.path()).unwrap();

        assert_eq!(colors.len(), 8);
        assert_eq!(colors[0], Srgb::new(181, 54, 255));
        assert_eq!(colors[4], Srgb::new(40, 40, 40));
        assert_eq!(colors[7], Srgb::new(255, 50, 150));
    }

    #[test]
    fn palette_file_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("streetwear.toml"),
            "colors = [\"#000000\", \"ffffff\"]\n",
        )
        .unwrap();

        let colors = load_palette("streetwear", dir.path()).unwrap();
        assert_eq!(colors, vec![Srgb::new(0, 0, 0), Srgb::new(255, 255, 255)]);
    }

    #[test]
    fn unknown_palette_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_palette("pastel", dir.path()).unwrap_err();
        assert!(matches!(err, AppError::PaletteNotFound { name } if name == "pastel"));
    }

    #[test]
    fn malformed_palette_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.toml"), "colors = 12").unwrap();

        let err = load_palette("broken", dir.path()).unwrap_err();
        assert!(matches!(err, AppError::PaletteFile { .. }));
    }
}
