//! In-memory site catalog: ranking, lookup, filtered search and comparison.
//!
//! This mirrors the queries the dashboard's assistant tools run against the
//! sites table, over an owned `Vec<Site>` loaded from any source.
use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Error, Result};
use crate::scoring::FeasibilityScorer;
use crate::site::{FeasibilityClass, Site};

pub mod query;

pub use query::{SiteQuery, SortKey, DEFAULT_SEARCH_LIMIT};

/// Number of sites shown in the dashboard's priority panel.
pub const PRIORITY_PANEL_SIZE: usize = 3;

#[derive(Clone, Debug, Default)]
pub struct SiteCatalog {
    sites: Vec<Site>,
    scorer: FeasibilityScorer,
}

impl SiteCatalog {
    pub fn new(sites: Vec<Site>) -> Self {
        Self {
            sites,
            scorer: FeasibilityScorer::default(),
        }
    }

    /// Scorer used for sites without a stored overall score or class.
    pub fn with_scorer(mut self, scorer: FeasibilityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Parse a RON list of sites.
    #[cfg(feature = "ron")]
    pub fn from_ron_str(source: &str) -> Result<Self> {
        let sites: Vec<Site> = ron::from_str(source).map_err(|e| Error::Parse(e.to_string()))?;
        debug!("Loaded {} sites from RON.", sites.len());
        Ok(Self::new(sites))
    }

    /// Read and parse a RON fixture file.
    #[cfg(feature = "ron")]
    pub fn load_ron(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_ron_str(&source)
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn scorer(&self) -> &FeasibilityScorer {
        &self.scorer
    }

    pub fn get(&self, id: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.id == id)
    }

    /// Exact id match, else the first site whose name contains `identifier`
    /// (case-insensitive).
    pub fn find(&self, identifier: &str) -> Option<&Site> {
        if let Some(site) = self.get(identifier) {
            return Some(site);
        }
        let needle = identifier.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.sites
            .iter()
            .find(|s| s.name.to_lowercase().contains(&needle))
    }

    /// Like [`SiteCatalog::find`] but reports a miss as [`Error::UnknownSite`].
    pub fn require(&self, identifier: &str) -> Result<&Site> {
        self.find(identifier).ok_or_else(|| Error::UnknownSite {
            id: identifier.to_owned(),
        })
    }

    /// Top `n` sites by overall score, highest first. Ties keep catalog order.
    pub fn priority_sites(&self, n: usize) -> Vec<&Site> {
        let mut ranked = self.scored();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked.into_iter().take(n).map(|(_, s)| s).collect()
    }

    /// Sites whose id is listed, in catalog order. Unlisted ids are ignored;
    /// fails only when none of them is in the catalog.
    pub fn compare<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<&Site>> {
        let out: Vec<&Site> = self
            .sites
            .iter()
            .filter(|site| ids.iter().any(|id| id.as_ref() == site.id))
            .collect();
        if out.is_empty() {
            let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
            return Err(Error::UnknownSite { id: ids.join(", ") });
        }
        debug!("Comparing {} of {} requested sites.", out.len(), ids.len());
        Ok(out)
    }

    /// Filter, order and truncate according to `query`.
    pub fn search(&self, query: &SiteQuery) -> Vec<&Site> {
        let text = query
            .text
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());
        let countries: Vec<String> = query.countries.iter().map(|c| c.to_lowercase()).collect();

        let mut hits: Vec<(u8, &Site)> = self
            .scored()
            .into_iter()
            .filter(|(score, site)| {
                if let Some(min) = query.min_capacity_factor {
                    if site.capacity_factor < min {
                        return false;
                    }
                }
                if let Some(max) = query.max_water_depth {
                    if site.water_depth_m > max {
                        return false;
                    }
                }
                if !query.environmental_impact.is_empty()
                    && !query.environmental_impact.contains(&site.environmental_impact)
                {
                    return false;
                }
                if !query.feasibility.is_empty() {
                    let class = site
                        .feasibility
                        .unwrap_or_else(|| FeasibilityClass::from_score(*score));
                    if !query.feasibility.contains(&class) {
                        return false;
                    }
                }
                let country = site.country.to_lowercase();
                if !countries.is_empty() && !countries.iter().any(|c| country.contains(c)) {
                    return false;
                }
                if let Some(t) = &text {
                    if !site.name.to_lowercase().contains(t) && !country.contains(t) {
                        return false;
                    }
                }
                true
            })
            .collect();

        hits.sort_by(|a, b| compare_by(query.sort_by, a, b));
        debug!(
            "Search matched {} sites (limit {}).",
            hits.len(),
            query.limit
        );
        hits.into_iter().take(query.limit).map(|(_, s)| s).collect()
    }

    fn scored(&self) -> Vec<(u8, &Site)> {
        self.sites
            .iter()
            .map(|s| (s.effective_score(&self.scorer), s))
            .collect()
    }
}

fn compare_by(key: SortKey, a: &(u8, &Site), b: &(u8, &Site)) -> Ordering {
    match key {
        SortKey::OverallScore => b.0.cmp(&a.0),
        SortKey::CapacityFactor => b.1.capacity_factor.total_cmp(&a.1.capacity_factor),
        SortKey::WaterDepth => a.1.water_depth_m.total_cmp(&b.1.water_depth_m),
        SortKey::EnvironmentalImpact => a.1.environmental_impact.cmp(&b.1.environmental_impact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{Coordinates, ImpactLevel};

    fn catalog() -> SiteCatalog {
        SiteCatalog::new(vec![
            Site::new("site-1", "Dogger Bank", Coordinates::new(54.75, 2.0))
                .with_country("United Kingdom")
                .with_water_depth(25.0)
                .with_capacity_factor(48.0)
                .with_environmental_impact("medium")
                .with_overall_score(88),
            Site::new("site-2", "Hornsea Two", Coordinates::new(53.9, 1.7))
                .with_country("United Kingdom")
                .with_water_depth(35.0)
                .with_capacity_factor(45.0)
                .with_environmental_impact("low")
                .with_overall_score(82),
            Site::new("site-3", "Utsira Nord", Coordinates::new(59.3, 4.5))
                .with_country("Norway")
                .with_water_depth(265.0)
                .with_capacity_factor(52.0)
                .with_environmental_impact("high")
                .with_overall_score(64),
            Site::new("site-4", "Golfe du Lion", Coordinates::new(43.0, 4.0))
                .with_country("France")
                .with_water_depth(80.0)
                .with_capacity_factor(38.0)
                .with_environmental_impact("critical")
                .with_feasibility(FeasibilityClass::Challenging)
                .with_overall_score(47),
            Site::new("site-5", "Baltic Power", Coordinates::new(54.9, 17.8))
                .with_country("Poland")
                .with_water_depth(40.0)
                .with_capacity_factor(42.0)
                .with_environmental_impact("low"),
        ])
    }

    fn ids(sites: &[&Site]) -> Vec<String> {
        sites.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn priority_sites_rank_by_effective_score() {
        let c = catalog();
        // site-5 has no stored score: 23 + 11.2 + 11.2 + 7.5 + 20
        let unscored = c.get("site-5").unwrap().effective_score(c.scorer());
        assert_eq!(unscored, 73);
        assert_eq!(
            ids(&c.priority_sites(PRIORITY_PANEL_SIZE)),
            vec!["site-1", "site-2", "site-5"]
        );
        assert_eq!(c.priority_sites(100).len(), 5);
        assert!(c.priority_sites(0).is_empty());
    }

    #[test]
    fn find_prefers_id_then_name_substring() {
        let c = catalog();
        assert_eq!(c.find("site-3").unwrap().name, "Utsira Nord");
        assert_eq!(c.find("dogger").unwrap().id, "site-1");
        assert_eq!(c.find("HORNSEA").unwrap().id, "site-2");
        assert!(c.find("Atlantis").is_none());
        assert!(c.find("  ").is_none());
        assert!(matches!(
            c.require("Atlantis"),
            Err(Error::UnknownSite { ref id }) if id == "Atlantis"
        ));
    }

    #[test]
    fn compare_matches_ids_only_in_catalog_order() {
        let c = catalog();
        let out = c.compare(&["site-4", "site-1", "site-4", "nowhere"]).unwrap();
        assert_eq!(ids(&out), vec!["site-1", "site-4"]);
        let out = c.compare(&["site-2", "site-1"]).unwrap();
        assert_eq!(ids(&out), vec!["site-1", "site-2"]);
        assert!(matches!(
            c.compare(&["Dogger Bank"]),
            Err(Error::UnknownSite { .. })
        ));
        assert!(c.compare(&["nowhere"]).is_err());
        assert!(c.compare::<&str>(&[]).is_err());
    }

    #[test]
    fn default_search_sorts_by_score_and_limits_to_five() {
        let c = catalog();
        let out = c.search(&SiteQuery::new());
        assert_eq!(
            ids(&out),
            vec!["site-1", "site-2", "site-5", "site-3", "site-4"]
        );
        assert_eq!(c.search(&SiteQuery::new().with_limit(2)).len(), 2);
    }

    #[test]
    fn search_filters_combine() {
        let c = catalog();
        let out = c.search(
            &SiteQuery::new()
                .with_max_water_depth(50.0)
                .with_environmental_impact(vec![ImpactLevel::Low]),
        );
        assert_eq!(ids(&out), vec!["site-2", "site-5"]);

        let out = c.search(&SiteQuery::new().with_min_capacity_factor(45.0));
        assert_eq!(ids(&out), vec!["site-1", "site-2", "site-3"]);

        let out = c.search(&SiteQuery::new().with_countries(["norway", "france"]));
        assert_eq!(ids(&out), vec!["site-3", "site-4"]);
    }

    #[test]
    fn search_feasibility_uses_stored_or_derived_class() {
        let c = catalog();
        let out = c.search(&SiteQuery::new().with_feasibility(vec![FeasibilityClass::Challenging]));
        assert_eq!(ids(&out), vec!["site-4"]);
        let out = c.search(&SiteQuery::new().with_feasibility(vec![FeasibilityClass::Good]));
        assert_eq!(ids(&out), vec!["site-5"]);
    }

    #[test]
    fn search_text_matches_name_or_country() {
        let c = catalog();
        assert_eq!(
            ids(&c.search(&SiteQuery::new().with_text("united"))),
            vec!["site-1", "site-2"]
        );
        assert_eq!(
            ids(&c.search(&SiteQuery::new().with_text("Baltic"))),
            vec!["site-5"]
        );
        assert_eq!(c.search(&SiteQuery::new().with_text("   ")).len(), 5);
    }

    #[test]
    fn search_sort_keys() {
        let c = catalog();
        let by_cf = c.search(&SiteQuery::new().with_sort(SortKey::CapacityFactor));
        assert_eq!(by_cf[0].id, "site-3");
        let by_depth = c.search(&SiteQuery::new().with_sort(SortKey::WaterDepth));
        assert_eq!(&ids(&by_depth)[..2], &["site-1", "site-2"]);
        let by_env = c.search(&SiteQuery::new().with_sort(SortKey::EnvironmentalImpact));
        assert_eq!(
            ids(&by_env),
            vec!["site-2", "site-5", "site-1", "site-3", "site-4"]
        );
    }

    #[cfg(feature = "ron")]
    #[test]
    fn loads_sites_from_ron() {
        let source = r#"[
            (
                id: "site-1",
                name: "Dogger Bank",
                country: "United Kingdom",
                coordinates: (54.75, 2.0),
                water_depth: 25.0,
                capacity_factor: 48.0,
                distance_to_port_km: Some(120.0),
                environmental_impact: "medium",
                sea_floor_impact: "disturbed",
                overall_score: Some(88),
                feasibility: Some(excellent),
            ),
        ]"#;
        let c = SiteCatalog::from_ron_str(source).unwrap();
        let site = c.get("site-1").unwrap();
        assert_eq!(site.coordinates, Coordinates::new(54.75, 2.0));
        assert_eq!(site.environmental_impact, ImpactLevel::Medium);
        assert_eq!(site.seafloor_impact, ImpactLevel::Unknown("disturbed".into()));
        assert_eq!(site.capex_eur_m_per_mw, None);
        assert_eq!(site.feasibility, Some(FeasibilityClass::Excellent));

        assert!(matches!(
            SiteCatalog::from_ron_str("[(id: 1)]"),
            Err(Error::Parse(_))
        ));
    }
}
