use offshore_siting::prelude::*;
use offshore_siting_examples::{init_tracing, load_demo_catalog, Canvas, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let catalog = load_demo_catalog()?;
    let image_size = (1200, 900);

    let generator = WindFieldGenerator::try_new(FieldConfig::default(), WindFieldParams::default())?
        .with_scorer(*catalog.scorer());

    // Direction jitter uses its own seeded hash so reruns draw identical arrows.
    let mut direction_noise = HashNoise::new(42.0);
    let reference = MonthPeriod::new(2026, 10)?;
    let snapshots =
        generate_wind_scenarios(&generator, catalog.sites(), reference, &mut direction_noise);

    let ramp = wind_ramp();
    let render = RenderConfig::around_sites(image_size, catalog.sites(), 3.0).with_splat_radius(9);

    for (i, snapshot) in snapshots.iter().enumerate() {
        let mut canvas = Canvas::new(render);
        canvas.draw_heat(&snapshot.field.points, |t| ramp.color_for(t));
        canvas.draw_wind(&snapshot.field.vectors, &ramp, 0.8);
        canvas.draw_sites(catalog.sites(), catalog.scorer());

        info!(
            "{} ({}): {} samples, mean intensity {:.2}, reported average {}",
            snapshot.label,
            snapshot.date_label(),
            snapshot.field.len(),
            snapshot.field.mean_intensity().unwrap_or(0.0),
            snapshot.average_score
        );
        canvas.save(format!("fields-wind-scenarios-{}.png", i + 1))?;
    }

    Ok(())
}
