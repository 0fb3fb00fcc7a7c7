use offshore_siting::prelude::*;
use offshore_siting_examples::{init_tracing, load_demo_catalog};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let catalog = load_demo_catalog()?;

    info!("Priority sites:");
    for site in catalog.priority_sites(PRIORITY_PANEL_SIZE) {
        info!(
            "  {:<16} {:>3} {}",
            site.name,
            site.effective_score(catalog.scorer()),
            site.feasibility_class(catalog.scorer())
        );
    }

    let shallow_low_impact = SiteQuery::new()
        .with_max_water_depth(60.0)
        .with_environmental_impact(vec![ImpactLevel::Low])
        .with_sort(SortKey::CapacityFactor);
    print_hits("Shallow, low impact", catalog.search(&shallow_low_impact));

    let norway = SiteQuery::new().with_countries(["norway"]).with_sort(SortKey::WaterDepth);
    print_hits("Norway by depth", catalog.search(&norway));

    let pair = catalog.compare(&["site-6", "site-1", "site-99"])?;
    info!("Comparison:");
    for site in pair {
        let b = catalog.scorer().score(site);
        info!(
            "  {:<16} depth {:>3} port {:>3} grid {:>3} capex {:>3} env {:>3} => {}",
            site.name,
            b.depth_score,
            b.port_distance_score,
            b.grid_distance_score,
            b.capex_score,
            b.environmental_score,
            b.total
        );
    }

    if let Err(err) = catalog.require("Atlantis") {
        info!("{err}");
    }

    Ok(())
}

fn print_hits(title: &str, hits: Vec<&Site>) {
    info!("{title}:");
    for site in hits {
        info!(
            "  {:<16} {:>5.1} m  CF {:>4.1}%  {}",
            site.name, site.water_depth_m, site.capacity_factor, site.environmental_impact
        );
    }
}
