use offshore_siting::prelude::*;
use offshore_siting_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let hotspots = vec![
        Hotspot::new("hs-001", "Marina Bay Beach", Coordinates::new(1.2644, 103.854), "critical", 95)
            .with_debris(["plastics", "microplastics", "fishing nets"])
            .with_accessibility(Accessibility::Easy)
            .with_estimated_volume("850 kg"),
        Hotspot::new("hs-002", "East Coast Mangroves", Coordinates::new(1.3012, 103.9275), "high", 82)
            .with_debris(["plastics", "styrofoam"])
            .with_last_survey("2026-09-21"),
        Hotspot::new("hs-003", "Sentosa South", Coordinates::new(1.2494, 103.8303), "medium", 61)
            .with_accessibility(Accessibility::Easy),
        Hotspot::new("hs-004", "Pulau Ubin Shore", Coordinates::new(1.4165, 103.9608), "high", 88)
            .with_accessibility(Accessibility::Difficult)
            .with_estimated_volume("1.2 t"),
        Hotspot::new("hs-005", "Labrador Coast", Coordinates::new(1.2721, 103.8025), "low", 42),
    ];

    info!("Cleanup priorities:");
    for (rank, h) in priority_hotspots(&hotspots, PRIORITY_HOTSPOT_COUNT)
        .into_iter()
        .enumerate()
    {
        info!(
            "  {}. {:<22} impact {:>3}  density {:<8} {}  access {}  debris [{}]",
            rank + 1,
            h.name,
            h.impact_score,
            h.density,
            density_color(&h.density),
            h.accessibility,
            h.debris_types.join(", ")
        );
    }

    Ok(())
}
