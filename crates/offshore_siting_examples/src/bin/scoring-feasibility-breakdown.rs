use offshore_siting::prelude::*;
use offshore_siting_examples::{init_tracing, load_demo_catalog};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let catalog = load_demo_catalog()?;

    // Missing port/grid distances and CAPEX fall back to these assumptions.
    let defaults = ScoringDefaults::default().with_grid_distance(120.0);
    let scorer = FeasibilityScorer::try_new(defaults)?;

    info!("{}", weights_legend());
    for site in catalog.sites() {
        let breakdown = scorer.score(site);
        info!(
            "{} ({}) total {} [{}]",
            site.name,
            site.id,
            breakdown.total,
            FeasibilityClass::from_score(breakdown.total)
        );
        for (factor, score) in breakdown.factors() {
            info!(
                "  {:<24} {:>3} {} {}",
                factor.label(),
                score,
                bar(score),
                ScoreBand::for_score(score).color()
            );
        }
        if let Some(stored) = site.overall_score {
            info!("  stored overall score {stored}");
        }
    }

    Ok(())
}

fn bar(score: u8) -> String {
    let filled = usize::from(score / 5);
    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}
