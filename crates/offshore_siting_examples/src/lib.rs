#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, Canvas, RenderConfig};

use offshore_siting::prelude::*;

/// North Sea and Baltic fixture shared by the example binaries.
pub const NORTH_SEA_SITES: &str = include_str!("../assets/north_sea_sites.ron");

pub fn load_demo_catalog() -> anyhow::Result<SiteCatalog> {
    Ok(SiteCatalog::from_ron_str(NORTH_SEA_SITES)?)
}
