//! Run configuration.
//!
//! Everything here defaults to the values in [`crate::constants`]; there is no
//! config file or command line, so changing the picture means editing those
//! constants.

use std::path::PathBuf;

use crate::constants::*;

/// Settings for a single sketch run
#[derive(Debug, Clone)]
pub struct SketchConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Pixels per inch used to convert point sizes
    pub dpi: f64,
    /// Half-width of the visible world square
    pub view_extent: f64,
    /// Outline noise as a fraction of heart scale
    pub noise_level: f64,
    /// Centered text
    pub text: String,
    /// Font size in points
    pub text_size: f64,
    /// Fixed seed for reproducible output; `None` seeds from the OS
    pub seed: Option<u64>,
    pub output_path: PathBuf,
    pub font_candidates: Vec<PathBuf>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            dpi: DPI,
            view_extent: VIEW_EXTENT,
            noise_level: DEFAULT_NOISE_LEVEL,
            text: TEXT.to_owned(),
            text_size: TEXT_SIZE,
            seed: SEED,
            output_path: PathBuf::from(OUTPUT_PATH),
            font_candidates: FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl SketchConfig {
    /// Pixels per typographic point
    pub fn px_per_point(&self) -> f64 {
        self.dpi / 72.0
    }
}
