//! Composition of the whole picture as an ordered list of draw commands.

use rand::Rng;
use tracing::{debug, info};

use crate::command::{DrawCommand, Point, Shape, Style, TextEffect};
use crate::config::SketchConfig;
use crate::constants::*;
use crate::heart::{heart_positions, sketch_heart, HeartSpec};
use crate::pencil::{cross_hatching, pencil_strokes};

/// One background star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSpec {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
}

impl StarSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(-STAR_RANGE..STAR_RANGE),
            y: rng.random_range(-STAR_RANGE..STAR_RANGE),
            size: rng.random_range(STAR_MIN_SIZE..STAR_MAX_SIZE),
            alpha: rng.random_range(STAR_MIN_ALPHA..STAR_MAX_ALPHA),
        }
    }

    pub fn to_command(&self) -> DrawCommand {
        DrawCommand::marker(
            Point::new(self.x, self.y),
            self.size * STAR_AREA_FACTOR,
            Style::fill(WHITE, self.alpha),
            Z_STARS,
        )
    }
}

/// Fill, pencil strokes and (for large hearts) hatching for one heart
pub fn heart_commands<R: Rng + ?Sized>(
    rng: &mut R,
    heart: &HeartSpec,
    noise_level: f64,
) -> Vec<DrawCommand> {
    let outline = sketch_heart(rng, heart.center_x, heart.center_y, heart.scale, noise_level);

    let mut commands = vec![DrawCommand::polygon(
        outline.points(),
        Style::fill(SHADE_GRAY, FILL_ALPHA),
        Z_SKETCH,
    )];
    commands.extend(pencil_strokes(
        rng,
        &outline,
        Style::new(PENCIL_GRAY, PENCIL_ALPHA, PENCIL_BASE_WIDTH * heart.scale),
    ));
    if heart.scale > HATCH_SCALE_THRESHOLD {
        commands.extend(cross_hatching(rng, &outline));
    }
    commands
}

/// Centered text with a gray halo and a soft white rim
pub fn text_command(content: &str, font_size: f64) -> DrawCommand {
    DrawCommand {
        z_order: Z_TEXT,
        shape: Shape::Text {
            content: content.to_owned(),
            anchor: Point::new(0.0, 0.0),
            font_size,
            effects: vec![
                TextEffect::Stroke {
                    width: 3.0,
                    color: GLOW_GRAY,
                    alpha: 1.0,
                },
                TextEffect::Fill,
                TextEffect::Stroke {
                    width: 2.0,
                    color: WHITE,
                    alpha: 0.6,
                },
                TextEffect::Fill,
            ],
        },
        style: Style::fill(WHITE, 1.0),
    }
}

pub fn starfield<R: Rng + ?Sized>(rng: &mut R) -> Vec<DrawCommand> {
    (0..STAR_COUNT)
        .map(|_| StarSpec::random(rng).to_command())
        .collect()
}

/// Build every draw command for one picture, in emission order
///
/// Layering comes from each command's z-order; the renderer sorts stably, so
/// commands sharing a layer keep the order produced here.
pub fn compose<R: Rng + ?Sized>(config: &SketchConfig, rng: &mut R) -> Vec<DrawCommand> {
    let hearts = heart_positions(rng);
    info!(
        hearts = hearts.len(),
        extras = hearts.len() - FIXED_HEARTS.len(),
        "placed hearts"
    );

    let mut commands = Vec::new();
    for heart in &hearts {
        let heart_cmds = heart_commands(rng, heart, config.noise_level);
        debug!(
            x = heart.center_x,
            y = heart.center_y,
            scale = heart.scale,
            commands = heart_cmds.len(),
            "sketched heart"
        );
        commands.extend(heart_cmds);
    }

    commands.push(text_command(&config.text, config.text_size));
    commands.extend(starfield(rng));

    info!(commands = commands.len(), "scene composed");
    commands
}
