//! Glyph outlines for the centered text.
//!
//! Text is turned into a single vector path so it can be stroked and filled
//! like any other shape. There is no shaping: each character maps to its
//! nominal glyph, and strings written entirely in a right-to-left script are
//! laid out in reverse so they read correctly.

use std::fs;
use std::path::PathBuf;

use tiny_skia::{Path, PathBuilder};
use tracing::{debug, info};
use ttf_parser::{Face, GlyphId};

use crate::error::{Result, SketchError};

/// A parsed TrueType/OpenType font file
pub struct GlyphFont {
    data: Vec<u8>,
    path: PathBuf,
}

impl GlyphFont {
    pub fn from_data(data: Vec<u8>, path: PathBuf) -> Result<Self> {
        Face::parse(&data, 0).map_err(|err| SketchError::Font {
            path: path.clone(),
            reason: err.to_string(),
        })?;
        Ok(Self { data, path })
    }

    /// First candidate that exists on disk; `Ok(None)` when none do
    pub fn load(candidates: &[PathBuf]) -> Result<Option<Self>> {
        for candidate in candidates {
            if !candidate.is_file() {
                continue;
            }
            let data = fs::read(candidate)?;
            let font = Self::from_data(data, candidate.clone())?;
            info!(font = %candidate.display(), "loaded font");
            return Ok(Some(font));
        }
        Ok(None)
    }

    fn face(&self) -> Result<Face<'_>> {
        Face::parse(&self.data, 0).map_err(|err| SketchError::Font {
            path: self.path.clone(),
            reason: err.to_string(),
        })
    }

    /// Outline of `content` at `size_px`, ink box centered on `(cx, cy)`
    ///
    /// Returns `Ok(None)` when the text has no visible ink.
    pub fn text_path(
        &self,
        content: &str,
        cx: f32,
        cy: f32,
        size_px: f32,
    ) -> Result<Option<Path>> {
        let face = self.face()?;
        let scale = size_px / f32::from(face.units_per_em());
        let glyphs = layout(&face, content);

        let mut bounds: Option<(f32, f32, f32, f32)> = None;
        for &(id, pen_x) in &glyphs {
            if let Some(rect) = face.glyph_bounding_box(id) {
                let (x0, y0) = (pen_x + f32::from(rect.x_min), f32::from(rect.y_min));
                let (x1, y1) = (pen_x + f32::from(rect.x_max), f32::from(rect.y_max));
                bounds = Some(match bounds {
                    None => (x0, y0, x1, y1),
                    Some((a, b, c, d)) => (a.min(x0), b.min(y0), c.max(x1), d.max(y1)),
                });
            }
        }
        let Some((x_min, y_min, x_max, y_max)) = bounds else {
            return Ok(None);
        };

        let origin_x = cx - (x_min + x_max) / 2.0 * scale;
        let baseline_y = cy + (y_min + y_max) / 2.0 * scale;

        let mut builder = PathBuilder::new();
        for &(id, pen_x) in &glyphs {
            let mut sink = GlyphSink {
                builder: &mut builder,
                origin_x: origin_x + pen_x * scale,
                baseline_y,
                scale,
            };
            if face.outline_glyph(id, &mut sink).is_none() {
                debug!(glyph = id.0, "glyph has no outline");
            }
        }
        Ok(builder.finish())
    }
}

/// Glyph ids with their pen positions in font units, in visual order
fn layout(face: &Face<'_>, content: &str) -> Vec<(GlyphId, f32)> {
    let mut chars: Vec<char> = content.chars().collect();
    if is_right_to_left(content) {
        chars.reverse();
    }

    let mut pen_x = 0.0;
    let mut glyphs = Vec::with_capacity(chars.len());
    for ch in chars {
        let id = face.glyph_index(ch).unwrap_or_else(|| {
            debug!(?ch, "no glyph, using .notdef");
            GlyphId(0)
        });
        glyphs.push((id, pen_x));
        pen_x += f32::from(face.glyph_hor_advance(id).unwrap_or(0));
    }
    glyphs
}

fn is_rtl_char(ch: char) -> bool {
    matches!(ch as u32, 0x0590..=0x08FF | 0xFB1D..=0xFDFF | 0xFE70..=0xFEFF)
}

/// True when every alphabetic character belongs to a right-to-left script
pub fn is_right_to_left(content: &str) -> bool {
    let mut letters = content.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(is_rtl_char)
}

/// Feeds font-unit outlines into a pixel-space path, flipping y
struct GlyphSink<'a> {
    builder: &'a mut PathBuilder,
    origin_x: f32,
    baseline_y: f32,
    scale: f32,
}

impl GlyphSink<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.baseline_y - y * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for GlyphSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
