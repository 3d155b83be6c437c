//! Pencil-style line art for a single outline.

use rand::Rng;

use crate::command::{DrawCommand, Style};
use crate::constants::*;
use crate::heart::Outline;
use crate::utils::{gaussian_noise, to_points};

/// Layered strokes that make an outline look hand drawn
///
/// Emits five faint jittered copies, one crisp white outline on the layer
/// above, then short white texture strokes along random stretches of the
/// curve. `style` gives the jitter color, the overall opacity and the base
/// line width.
pub fn pencil_strokes<R: Rng + ?Sized>(
    rng: &mut R,
    outline: &Outline,
    style: Style,
) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(JITTER_PASSES + 1 + TEXTURE_STROKES);
    let n = outline.len();

    for _ in 0..JITTER_PASSES {
        // one offset per sample, shared by both axes
        let noise = gaussian_noise(rng, n, JITTER_AMPLITUDE);
        let x = &outline.x + &noise;
        let y = &outline.y + &noise;
        commands.push(DrawCommand::polyline(
            to_points(&x, &y),
            Style::new(style.color, style.alpha / 2.0, style.line_width),
            Z_SKETCH,
        ));
    }

    commands.push(DrawCommand::polyline(
        outline.points(),
        Style::new(WHITE, style.alpha, style.line_width + 0.5),
        Z_OUTLINE,
    ));

    if n <= 5 {
        return commands;
    }
    for _ in 0..TEXTURE_STROKES {
        let start = rng.random_range(0..n - 5);
        let length = rng.random_range(TEXTURE_MIN_LEN..TEXTURE_MAX_LEN);
        commands.push(DrawCommand::polyline(
            outline.slice_points(start, start + length),
            Style::new(WHITE, style.alpha * 0.8, style.line_width * 0.7),
            Z_SKETCH,
        ));
    }

    commands
}

/// Faint chords across the heart to suggest shading
///
/// Each chord joins a point on the first half of the outline to one on the
/// second half.
pub fn cross_hatching<R: Rng + ?Sized>(rng: &mut R, outline: &Outline) -> Vec<DrawCommand> {
    let n = outline.len();
    let half = n / 2;
    if half == 0 {
        return Vec::new();
    }

    (0..HATCH_LINES)
        .map(|_| {
            let start = rng.random_range(0..half);
            let end = rng.random_range(half..n);
            DrawCommand::polyline(
                vec![outline.point(start), outline.point(end)],
                Style::new(WHITE, HATCH_ALPHA, HATCH_WIDTH),
                Z_SKETCH,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Shape;
    use crate::heart::heart_curve;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pencil_style() -> Style {
        Style::new(PENCIL_GRAY, 0.8, 1.5)
    }

    #[test]
    fn test_pencil_stroke_layers() {
        let mut rng = StdRng::seed_from_u64(1);
        let outline = heart_curve(0.0, 0.0, 1.0);
        let commands = pencil_strokes(&mut rng, &outline, pencil_style());
        assert_eq!(commands.len(), JITTER_PASSES + 1 + TEXTURE_STROKES);

        for cmd in &commands[..JITTER_PASSES] {
            assert_eq!(cmd.z_order, Z_SKETCH);
            assert_eq!(cmd.style.color, PENCIL_GRAY);
            assert_relative_eq!(cmd.style.alpha, 0.4);
            assert_relative_eq!(cmd.style.line_width, 1.5);
        }

        let main = &commands[JITTER_PASSES];
        assert_eq!(main.z_order, Z_OUTLINE);
        assert_eq!(main.style.color, WHITE);
        assert_relative_eq!(main.style.alpha, 0.8);
        assert_relative_eq!(main.style.line_width, 2.0);
        assert_eq!(main.shape, Shape::Polyline(outline.points()));

        for cmd in &commands[JITTER_PASSES + 1..] {
            assert_eq!(cmd.z_order, Z_SKETCH);
            assert_relative_eq!(cmd.style.alpha, 0.64);
            assert_relative_eq!(cmd.style.line_width, 1.05);
        }
    }

    #[test]
    fn test_jitter_is_shared_between_axes() {
        let mut rng = StdRng::seed_from_u64(8);
        let outline = heart_curve(0.0, 0.0, 1.0);
        let commands = pencil_strokes(&mut rng, &outline, pencil_style());

        for cmd in &commands[..JITTER_PASSES] {
            let Shape::Polyline(points) = &cmd.shape else {
                panic!("expected polyline");
            };
            assert_eq!(points.len(), outline.len());
            for (i, p) in points.iter().enumerate() {
                let dx = p.x - outline.x[i];
                let dy = p.y - outline.y[i];
                assert!((dx - dy).abs() < 1e-12);
                assert!(dx.abs() < 0.1);
            }
        }
    }

    #[test]
    fn test_texture_strokes_are_short_runs() {
        let mut rng = StdRng::seed_from_u64(21);
        let outline = heart_curve(0.0, 0.0, 1.0);
        let commands = pencil_strokes(&mut rng, &outline, pencil_style());

        for cmd in &commands[JITTER_PASSES + 1..] {
            let Shape::Polyline(points) = &cmd.shape else {
                panic!("expected polyline");
            };
            assert!(points.len() >= TEXTURE_MIN_LEN && points.len() < TEXTURE_MAX_LEN);
        }
    }

    #[test]
    fn test_cross_hatching_spans_halves() {
        let mut rng = StdRng::seed_from_u64(4);
        let outline = heart_curve(0.0, 0.0, 1.0);
        let first_half = outline.slice_points(0, 50);
        let second_half = outline.slice_points(50, 100);

        let commands = cross_hatching(&mut rng, &outline);
        assert_eq!(commands.len(), HATCH_LINES);
        for cmd in &commands {
            assert_relative_eq!(cmd.style.alpha, HATCH_ALPHA);
            let Shape::Polyline(points) = &cmd.shape else {
                panic!("expected polyline");
            };
            assert_eq!(points.len(), 2);
            assert!(first_half.contains(&points[0]));
            assert!(second_half.contains(&points[1]));
        }
    }
}
