use offshore_siting::prelude::*;
use offshore_siting_examples::{init_tracing, load_demo_catalog, Canvas, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let catalog = load_demo_catalog()?;
    let image_size = (1200, 900);

    // Finer grid than the map default for a smoother image.
    let config = FieldConfig::default().with_step(0.125);
    let generator = DepthFieldGenerator::try_new(config, DepthFieldParams::default())?;

    let mut noise = RngNoise::new(StdRng::seed_from_u64(2026));
    let samples = generator.generate(catalog.sites(), &mut noise);

    let deepest = samples.iter().map(|s| s.depth_m).fold(0.0_f64, f64::max);
    info!(
        "{} depth samples around {} sites, deepest {:.1} m",
        samples.len(),
        catalog.len(),
        deepest
    );

    let points: Vec<HeatPoint> = samples.into_iter().map(HeatPoint::from).collect();
    let gradient = depth_gradient();

    let render = RenderConfig::around_sites(image_size, catalog.sites(), 3.0)
        .with_background([241, 245, 249])
        .with_splat_radius(5);
    let mut canvas = Canvas::new(render);
    canvas.draw_heat(&points, |t| gradient.sample(t));
    canvas.draw_sites(catalog.sites(), catalog.scorer());
    canvas.save("fields-depth-heatmap.png")?;

    Ok(())
}
