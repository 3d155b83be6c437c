//! Rasterization of draw commands onto an off-screen canvas.

use std::path::Path as FsPath;

use image::{Rgb, RgbImage};
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};
use tracing::{debug, info, warn};

use crate::command::{DrawCommand, Point, Shape, Style, TextEffect};
use crate::config::SketchConfig;
use crate::constants::BACKGROUND;
use crate::error::{Result, SketchError};
use crate::text::GlyphFont;

/// Maps world coordinates onto the canvas with equal aspect
///
/// The square `[-extent, extent]²` fits the shorter canvas side; the origin
/// sits at the canvas center and y points up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub extent: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32, extent: f64) -> Self {
        Self {
            width,
            height,
            extent,
        }
    }

    /// Pixels per world unit
    pub fn scale(&self) -> f64 {
        f64::from(self.width.min(self.height)) / (2.0 * self.extent)
    }

    pub fn to_pixel(&self, p: Point) -> (f32, f32) {
        let s = self.scale();
        let x = f64::from(self.width) / 2.0 + p.x * s;
        let y = f64::from(self.height) / 2.0 - p.y * s;
        (x as f32, y as f32)
    }
}

/// Commands in paint order: ascending z-order, emission order within a layer
pub fn draw_order(commands: &[DrawCommand]) -> Vec<&DrawCommand> {
    let mut ordered: Vec<&DrawCommand> = commands.iter().collect();
    ordered.sort_by_key(|cmd| cmd.z_order);
    ordered
}

fn alpha_u8(alpha: f64) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn paint_for(color: Rgb<u8>, alpha: f64) -> Paint<'static> {
    let mut paint = Paint::default();
    let Rgb([r, g, b]) = color;
    paint.set_color_rgba8(r, g, b, alpha_u8(alpha));
    paint.anti_alias = true;
    paint
}

pub struct PixmapRenderer {
    pixmap: Pixmap,
    viewport: Viewport,
    px_per_point: f64,
    font: Option<GlyphFont>,
}

impl PixmapRenderer {
    /// Blank canvas filled with the background color
    pub fn new(config: &SketchConfig) -> Result<Self> {
        let mut pixmap = Pixmap::new(config.width, config.height).ok_or(SketchError::Canvas {
            width: config.width,
            height: config.height,
        })?;
        let Rgb([r, g, b]) = BACKGROUND;
        pixmap.fill(Color::from_rgba8(r, g, b, 255));

        Ok(Self {
            pixmap,
            viewport: Viewport::new(config.width, config.height, config.view_extent),
            px_per_point: config.px_per_point(),
            font: None,
        })
    }

    pub fn with_font(mut self, font: Option<GlyphFont>) -> Self {
        self.font = font;
        self
    }

    pub fn render(&mut self, commands: &[DrawCommand]) -> Result<()> {
        for cmd in draw_order(commands) {
            self.draw(cmd)?;
        }
        info!(commands = commands.len(), "rendered");
        Ok(())
    }

    fn draw(&mut self, cmd: &DrawCommand) -> Result<()> {
        match &cmd.shape {
            Shape::Polyline(points) => {
                if let Some(path) = self.world_path(points, false) {
                    self.stroke(&path, &cmd.style);
                }
            }
            Shape::Polygon(points) => {
                if let Some(path) = self.world_path(points, true) {
                    self.fill(&path, &cmd.style);
                }
            }
            Shape::Marker { center, area } => {
                let (x, y) = self.viewport.to_pixel(*center);
                let radius = area.sqrt() / 2.0 * self.px_per_point;
                if let Some(path) = PathBuilder::from_circle(x, y, radius as f32) {
                    self.fill(&path, &cmd.style);
                }
            }
            Shape::Text {
                content,
                anchor,
                font_size,
                effects,
            } => self.draw_text(content, *anchor, *font_size, effects, &cmd.style)?,
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        content: &str,
        anchor: Point,
        font_size: f64,
        effects: &[TextEffect],
        style: &Style,
    ) -> Result<()> {
        let Some(font) = &self.font else {
            warn!(%content, "no font available, skipping text");
            return Ok(());
        };
        let (cx, cy) = self.viewport.to_pixel(anchor);
        let size_px = (font_size * self.px_per_point) as f32;
        let Some(path) = font.text_path(content, cx, cy, size_px)? else {
            debug!(%content, "text has no ink");
            return Ok(());
        };

        for effect in effects {
            match *effect {
                TextEffect::Stroke {
                    width,
                    color,
                    alpha,
                } => self.stroke(&path, &Style::new(color, alpha, width)),
                TextEffect::Fill => self.fill(&path, style),
            }
        }
        Ok(())
    }

    fn world_path(&self, points: &[Point], close: bool) -> Option<Path> {
        let mut pb = PathBuilder::new();
        let mut iter = points.iter().map(|p| self.viewport.to_pixel(*p));
        let (x, y) = iter.next()?;
        pb.move_to(x, y);
        for (x, y) in iter {
            pb.line_to(x, y);
        }
        if close {
            pb.close();
        }
        pb.finish()
    }

    fn stroke(&mut self, path: &Path, style: &Style) {
        let stroke = Stroke {
            width: (style.line_width * self.px_per_point) as f32,
            line_cap: LineCap::Square,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            path,
            &paint_for(style.color, style.alpha),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn fill(&mut self, path: &Path, style: &Style) {
        self.pixmap.fill_path(
            path,
            &paint_for(style.color, style.alpha),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Current canvas as an opaque RGB image
    pub fn to_image(&self) -> RgbImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        let mut img = RgbImage::new(width, self.pixmap.height());
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let c = pixels[(y * width + x) as usize].demultiply();
            *pixel = Rgb([c.red(), c.green(), c.blue()]);
        }
        img
    }

    pub fn save(&self, path: &FsPath) -> Result<()> {
        self.to_image().save(path)?;
        info!(path = %path.display(), "image saved");
        Ok(())
    }
}
