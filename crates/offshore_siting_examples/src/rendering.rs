use std::path::Path;

use anyhow::Context;
use glam::DVec2;
use image::{Rgb as Pixel, RgbImage};
use offshore_siting::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber. `RUST_LOG` overrides the default filter,
/// which shows the library's per-site debug counts.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,offshore_siting=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Maps a lat/lng window onto an image.
///
/// `min` and `max` hold (lat, lng) corners; longitude runs along x and
/// latitude along y with north at the top.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub min: DVec2,
    pub max: DVec2,
    pub background: [u8; 3],
    pub splat_radius: i32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), min: DVec2, max: DVec2) -> Self {
        Self {
            image_size,
            min,
            max,
            background: [15, 23, 42],
            splat_radius: 6,
        }
    }

    /// Window enclosing every site with valid coordinates plus `padding_deg`.
    pub fn around_sites(image_size: (u32, u32), sites: &[Site], padding_deg: f64) -> Self {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for site in sites.iter().filter(|s| s.coordinates.is_valid()) {
            let p = site.coordinates.as_dvec2();
            min = min.min(p);
            max = max.max(p);
        }
        if !min.is_finite() || !max.is_finite() {
            min = DVec2::new(-1.0, -1.0);
            max = DVec2::new(1.0, 1.0);
        }
        Self::new(
            image_size,
            min - DVec2::splat(padding_deg),
            max + DVec2::splat(padding_deg),
        )
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_splat_radius(mut self, radius: i32) -> Self {
        self.splat_radius = radius.max(1);
        self
    }

    fn project(&self, lat: f64, lng: f64) -> (i32, i32) {
        let (w, h) = self.image_size;
        let extent = (self.max - self.min).max(DVec2::splat(f64::EPSILON));
        let u = (lng - self.min.y) / extent.y;
        let v = (self.max.x - lat) / extent.x;
        ((u * f64::from(w)) as i32, (v * f64::from(h)) as i32)
    }
}

/// RGB canvas with additive-looking heat splats, wind arrows and site markers.
pub struct Canvas {
    image: RgbImage,
    config: RenderConfig,
}

impl Canvas {
    pub fn new(config: RenderConfig) -> Self {
        let (w, h) = config.image_size;
        let image = RgbImage::from_pixel(w, h, Pixel(config.background));
        Self { image, config }
    }

    /// Blend a disc per point, coloured by `color` and weighted by intensity.
    pub fn draw_heat<F>(&mut self, points: &[HeatPoint], color: F)
    where
        F: Fn(f64) -> Rgb,
    {
        let r = self.config.splat_radius;
        for p in points {
            let (cx, cy) = self.config.project(p.lat, p.lng);
            let tint = color(p.intensity);
            for dy in -r..=r {
                for dx in -r..=r {
                    let d2 = dx * dx + dy * dy;
                    if d2 > r * r {
                        continue;
                    }
                    let falloff = 1.0 - (f64::from(d2).sqrt() / f64::from(r));
                    self.blend(cx + dx, cy + dy, tint, 0.35 * p.intensity * falloff);
                }
            }
        }
    }

    /// Short line per vector pointing along its direction, scaled by speed.
    pub fn draw_wind(&mut self, vectors: &[WindVector], ramp: &ColorRamp, px_per_mps: f64) {
        for v in vectors {
            let (x0, y0) = self.config.project(v.lat, v.lng);
            let length = v.speed * px_per_mps;
            let angle = v.direction_deg.to_radians();
            // Compass bearing: 0 points north (up), 90 east (right).
            let x1 = f64::from(x0) + angle.sin() * length;
            let y1 = f64::from(y0) - angle.cos() * length;
            self.line(x0, y0, x1 as i32, y1 as i32, ramp.color_for(v.intensity));
        }
    }

    /// Filled marker per site coloured by its feasibility class.
    pub fn draw_sites(&mut self, sites: &[Site], scorer: &FeasibilityScorer) {
        for site in sites.iter().filter(|s| s.coordinates.is_valid()) {
            let (cx, cy) = self
                .config
                .project(site.coordinates.lat, site.coordinates.lng);
            let fill = feasibility_color(site.feasibility_class(scorer));
            for dy in -4i32..=4 {
                for dx in -4i32..=4 {
                    let d2 = dx * dx + dy * dy;
                    if d2 <= 9 {
                        self.put(cx + dx, cy + dy, fill);
                    } else if d2 <= 16 {
                        self.put(cx + dx, cy + dy, Rgb([255, 255, 255]));
                    }
                }
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.image
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            let x = f64::from(x0) + f64::from(x1 - x0) * t;
            let y = f64::from(y0) + f64::from(y1 - y0) * t;
            self.put(x.round() as i32, y.round() as i32, color);
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(px) = self.pixel_mut(x, y) {
            *px = Pixel(color.0);
        }
    }

    fn blend(&mut self, x: i32, y: i32, color: Rgb, alpha: f64) {
        if let Some(px) = self.pixel_mut(x, y) {
            let mixed = Rgb(px.0).lerp(color, alpha);
            *px = Pixel(mixed.0);
        }
    }

    fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut Pixel<u8>> {
        let (w, h) = self.image.dimensions();
        if x < 0 || y < 0 || x as u32 >= w || y as u32 >= h {
            return None;
        }
        Some(self.image.get_pixel_mut(x as u32, y as u32))
    }
}
