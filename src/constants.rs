pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_INPUT_DIR: &str =
    r"C:\Users\Ali\.gemini\antigravity\brain\9e8f9fed-2be0-40a7-b84f-10cb5b2765d9";
pub const DEFAULT_OUTPUT_DIR: &str = "public/images/products/bandanas";
pub const DEFAULT_PALETTE: &str = "streetwear";
pub const DEFAULT_COUNT: usize = 33;

pub const DEFAULT_PATTERNS: [&str; 5] = [
    "bandana_pattern_camo_1772229124182.png",
    "bandana_pattern_cyber_1772229164670.png",
    "bandana_pattern_graffiti_1772229152251.png",
    "bandana_pattern_paisley_1772229137864.png",
    "bandana_pattern_topo_1772229176564.png",
];

pub const FILE_PREFIX: &str = "bandana";

// Relative to the home directory.
pub const CONFIG_DIR: &str = ".config/bandana-variants";
