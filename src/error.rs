use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("pattern not found: '{}'", path.display())]
    PatternNotFound { path: PathBuf },

    #[error("failed to load image '{}': {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to save image to '{}': {source}", path.display())]
    ImageExport {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("file system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        path: PathBuf,
        operation: &'static str,
        source: std::io::Error,
    },

    #[error("invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid color '{value}', expected #rrggbb")]
    InvalidColor { value: String },

    #[error("palette '{name}' not found")]
    PaletteNotFound { name: String },

    #[error("failed to parse palette file '{}': {source}", path.display())]
    PaletteFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("image dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch { left: (u32, u32), right: (u32, u32) },

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, AppError>;

pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AppError {
    AppError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
