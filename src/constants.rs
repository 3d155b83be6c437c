use image::Rgb;

/// Canvas width in pixels (12 in at 100 dpi).
pub const CANVAS_WIDTH: u32 = 1200;

/// Canvas height in pixels (10 in at 100 dpi).
pub const CANVAS_HEIGHT: u32 = 1000;

/// Pixels per inch; line widths and font sizes are given in points.
pub const DPI: f64 = 100.0;

/// Half-width of the visible world square on the shorter canvas axis.
pub const VIEW_EXTENT: f64 = 10.0;

pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const PENCIL_GRAY: Rgb<u8> = Rgb([0xDD, 0xDD, 0xDD]);
pub const SHADE_GRAY: Rgb<u8> = Rgb([0x33, 0x33, 0x33]);
pub const GLOW_GRAY: Rgb<u8> = Rgb([0x88, 0x88, 0x88]);

/// Samples per heart outline.
pub const OUTLINE_SAMPLES: usize = 100;

/// Default outline noise, as a fraction of heart scale.
pub const DEFAULT_NOISE_LEVEL: f64 = 0.02;

/// Hearts always drawn, as (center_x, center_y, scale).
pub const FIXED_HEARTS: [(f64, f64, f64); 5] = [
    (0.0, 0.0, 1.0),
    (-5.0, 5.0, 0.7),
    (5.0, 5.0, 0.7),
    (-5.0, -5.0, 0.7),
    (5.0, -5.0, 0.7),
];

/// Placement attempts for decorative extra hearts.
pub const EXTRA_HEART_ATTEMPTS: usize = 8;
pub const EXTRA_HEART_RANGE: f64 = 8.0;
pub const EXTRA_HEART_MIN_SCALE: f64 = 0.2;
pub const EXTRA_HEART_MAX_SCALE: f64 = 0.4;

/// Extra hearts closer than this to an existing center are rejected.
pub const MIN_HEART_DISTANCE: f64 = 2.0;

pub const FILL_ALPHA: f64 = 0.3;
pub const PENCIL_ALPHA: f64 = 0.8;
pub const PENCIL_BASE_WIDTH: f64 = 1.5;

pub const JITTER_PASSES: usize = 5;
pub const JITTER_AMPLITUDE: f64 = 0.01;
pub const TEXTURE_STROKES: usize = 20;
pub const TEXTURE_MIN_LEN: usize = 3;
pub const TEXTURE_MAX_LEN: usize = 10;

/// Only hearts larger than this get cross-hatching.
pub const HATCH_SCALE_THRESHOLD: f64 = 0.5;
pub const HATCH_LINES: usize = 20;
pub const HATCH_ALPHA: f64 = 0.1;
pub const HATCH_WIDTH: f64 = 0.5;

pub const TEXT: &str = "شهد";
pub const TEXT_SIZE: f64 = 60.0;

pub const STAR_COUNT: usize = 100;
pub const STAR_RANGE: f64 = 10.0;
pub const STAR_MIN_SIZE: f64 = 0.01;
pub const STAR_MAX_SIZE: f64 = 0.05;
pub const STAR_MIN_ALPHA: f64 = 0.3;
pub const STAR_MAX_ALPHA: f64 = 1.0;
/// Marker area in points² per unit of star size.
pub const STAR_AREA_FACTOR: f64 = 100.0;

/// Draw order layers, lowest first.
pub const Z_STARS: i32 = 0;
pub const Z_SKETCH: i32 = 1;
pub const Z_OUTLINE: i32 = 2;
pub const Z_TEXT: i32 = 10;

/// Fixed seed for reproducible output; `None` seeds from the OS.
pub const SEED: Option<u64> = None;

pub const OUTPUT_PATH: &str = "heart_sketch.png";

/// Bold fonts tried in order for the centered text.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/local/share/fonts/DejaVuSans-Bold.ttf",
    "/Library/Fonts/DejaVuSans-Bold.ttf",
    "C:\\Windows\\Fonts\\DejaVuSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

pub const CONFIRMATION: &str = "تم رسم القلوب بأسلوب الرصاص مع اسم 'شهد' بخط جميل على خلفية سوداء!";
