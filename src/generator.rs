//! Round-robin variant generation over the pattern list.

use crate::colorize::colorize;
use crate::constants::FILE_PREFIX;
use crate::error::{invalid_parameter, AppError, Result};
use crate::types::{AppConfig, VariantPlan};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Output file name for the 1-based variant `index`.
pub fn variant_file_name(index: usize) -> String {
    format!("{}-{}.png", FILE_PREFIX, index)
}

/// A seeded generator when `seed` is given, otherwise one seeded from the OS.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn validate(config: &AppConfig) -> Result<()> {
    if config.patterns.is_empty() {
        return Err(invalid_parameter(
            "patterns",
            &"[]",
            &"at least one pattern is required",
        ));
    }
    if config.count == 0 {
        return Err(invalid_parameter(
            "count",
            &config.count,
            &"must be at least 1",
        ));
    }
    Ok(())
}

/// Decides pattern and color for every variant. Patterns are assigned
/// round-robin; colors are drawn independently and uniformly, with
/// replacement.
pub fn plan<R: Rng + ?Sized>(config: &AppConfig, rng: &mut R) -> Result<Vec<VariantPlan>> {
    validate(config)?;

    (0..config.count)
        .map(|i| -> Result<VariantPlan> {
            let pattern_index = i % config.patterns.len();
            // Empty palettes surface here, before any file is touched.
            let color = *config.colors.choose(&mut *rng).ok_or_else(|| {
                invalid_parameter("palette", &config.palette_name, &"palette has no colors")
            })?;

            Ok(VariantPlan {
                index: i + 1,
                pattern_index,
                pattern: config.patterns[pattern_index].clone(),
                color,
            })
        })
        .collect()
}

pub fn load_pattern(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| match source {
        ImageError::IoError(ref e) if e.kind() == ErrorKind::NotFound => {
            AppError::PatternNotFound {
                path: path.to_path_buf(),
            }
        }
        source => AppError::ImageLoad {
            path: path.to_path_buf(),
            source,
        },
    })
}

pub fn render_variant(config: &AppConfig, variant: &VariantPlan) -> Result<PathBuf> {
    let input_path = config.input_dir.join(&variant.pattern);
    let output_path = config.output_dir.join(variant_file_name(variant.index));

    let img = load_pattern(&input_path)?;
    let output = colorize(&img, variant.color);
    output
        .save(&output_path)
        .map_err(|source| AppError::ImageExport {
            path: output_path.clone(),
            source,
        })?;

    Ok(output_path)
}

/// Generates every variant in order, overwriting existing files. The first
/// failure aborts the run; files already written are left in place.
pub fn run<R, F>(config: &AppConfig, rng: &mut R, mut on_variant: F) -> Result<Vec<PathBuf>>
where
    R: Rng + ?Sized,
    F: FnMut(&VariantPlan, &Path),
{
    let variants = plan(config, rng)?;

    fs::create_dir_all(&config.output_dir).map_err(|source| AppError::FileSystem {
        path: config.output_dir.clone(),
        operation: "create output directory",
        source,
    })?;

    let mut written = Vec::with_capacity(variants.len());
    for variant in &variants {
        let output_path = render_variant(config, variant)?;
        on_variant(variant, &output_path);
        written.push(output_path);
    }

    Ok(written)
}
