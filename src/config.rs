use crate::colors::load_palette;
use crate::constants::{
    CONFIG_DIR, DEFAULT_COUNT, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_PALETTE,
    DEFAULT_PATTERNS, VERSION,
};
use crate::error::{invalid_parameter, Result};
use crate::types::AppConfig;

use clap::{App, Arg, ArgMatches};
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct SerializedAppConfig {
    input_dir: String,
    output_dir: String,
    patterns: Vec<String>,
    palette: String,
    count: String,
    seed: Option<String>,
}

fn load_config(
    config_dir: &Path,
    config_path: Option<&str>,
) -> std::result::Result<SerializedAppConfig, config::ConfigError> {
    let mut builder = ConfigBuilder::default();

    builder = builder
        .set_default("input_dir", DEFAULT_INPUT_DIR)?
        .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
        .set_default("patterns", DEFAULT_PATTERNS.to_vec())?
        .set_default("palette", DEFAULT_PALETTE)?
        .set_default("count", DEFAULT_COUNT.to_string())?;

    let default_config_path = config_dir.join("config.toml");

    if default_config_path.exists() {
        builder = ConfigBuilder::<DefaultState>::add_source(
            builder,
            File::from(default_config_path).required(false),
        );
    }

    if let Some(path) = config_path {
        builder = builder.add_source(File::with_name(path).required(true));
    }

    let config = builder.build()?;

    config.try_deserialize()
}

pub fn app() -> App<'static> {
    App::new("Bandana Variants")
        .version(VERSION)
        .about("Generates colorized bandana variants from base pattern images")
        .after_help("Without arguments, 33 variants are generated from the five default patterns using the built-in streetwear palette. Defaults can be overridden in ~/.config/bandana-variants/config.toml. A palette named NAME is read from NAME.toml in the same directory, as a `colors = [\"#rrggbb\", ...]` list.")
        .arg(
            Arg::with_name("Input Dir")
                .long("input-dir")
                .value_name("DIR")
                .help("Directory containing the pattern images")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("Output Dir")
                .long("output-dir")
                .value_name("DIR")
                .help("Directory the variants are written to")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("Count")
                .short('n')
                .long("count")
                .value_name("N")
                .help("Number of variants to generate")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("Palette")
                .short('p')
                .long("palette")
                .value_name("NAME")
                .help("Name of the palette to draw colors from")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("Seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seeds color selection for reproducible output")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("config")
                .short('c')
                .long("config")
                .value_name("/path/to/config.toml")
                .help("Sets a custom config file")
                .takes_value(true),
        )
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from(""))
        .join(CONFIG_DIR)
}

/// Merges command-line overrides on top of the layered file configuration.
pub fn from_matches(matches: &ArgMatches, config_dir: &Path) -> Result<AppConfig> {
    let config = load_config(config_dir, matches.value_of("config"))?;

    let input_dir = matches
        .value_of("Input Dir")
        .unwrap_or(&config.input_dir);
    let output_dir = matches
        .value_of("Output Dir")
        .unwrap_or(&config.output_dir);
    let palette_name = matches.value_of("Palette").unwrap_or(&config.palette);

    let count = matches.value_of("Count").unwrap_or(&config.count);
    let count: usize = count
        .parse()
        .map_err(|e| invalid_parameter("count", &count, &e))?;

    let seed = match matches.value_of("Seed").or(config.seed.as_deref()) {
        Some(seed) => Some(
            seed.parse::<u64>()
                .map_err(|e| invalid_parameter("seed", &seed, &e))?,
        ),
        None => None,
    };

    let colors = load_palette(palette_name, config_dir)?;

    Ok(AppConfig {
        input_dir: PathBuf::from(input_dir),
        output_dir: PathBuf::from(output_dir),
        patterns: config.patterns,
        palette_name: palette_name.to_string(),
        colors,
        count,
        seed,
    })
}

pub fn init() -> Result<AppConfig> {
    let matches = app().get_matches();
    from_matches(&matches, &default_config_dir())
}
