mod command;
mod config;
mod constants;
mod error;
mod heart;
mod pencil;
mod render;
mod scene;
mod text;
mod utils;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use config::SketchConfig;
use render::PixmapRenderer;
use text::GlyphFont;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = SketchConfig::default();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!("composing heart sketch");
    let commands = scene::compose(&config, &mut rng);

    let font = GlyphFont::load(&config.font_candidates)?;

    let mut renderer = PixmapRenderer::new(&config)?.with_font(font);
    renderer.render(&commands)?;
    renderer.save(&config.output_path)?;

    println!("{}", constants::CONFIRMATION);
    Ok(())
}
