use std::path::PathBuf;

use palette::Srgb;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub patterns: Vec<String>,
    pub palette_name: String,
    pub colors: Vec<Srgb<u8>>,
    pub count: usize,
    pub seed: Option<u64>,
}

/// One iteration's decision: which pattern gets which color.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantPlan {
    /// 1-based index used in the output file name.
    pub index: usize,
    pub pattern_index: usize,
    pub pattern: String,
    pub color: Srgb<u8>,
}
