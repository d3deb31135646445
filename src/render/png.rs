use anyhow::{Result, anyhow};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::{
    BitMapBackend, Cartesian2d, DrawingArea, IntoDrawingArea, PathElement, Polygon, RGBColor,
    WHITE,
};
use plotters::style::Color as _;
use std::path::Path;

use super::{MapSurface, PaintedRegion};
use crate::geometry::Bounds;
use crate::style::Color;

/// Raster surface backed by a plotters bitmap.
///
/// The drawing area spans the world bounding box directly, so region
/// coordinates pass through unprojected; latitude increases upward. Pixels
/// only hit the file when `present` commits the batch.
pub struct PngSurface<'a> {
    area: DrawingArea<BitMapBackend<'a>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
}

impl<'a> PngSurface<'a> {
    /// Open a PNG surface for the given world bounds.
    ///
    /// `width` is the raster width in pixels; the height follows from the
    /// aspect ratio of the bounds.
    pub fn create(path: &'a Path, bounds: &Bounds, width: u32) -> Result<Self> {
        let height = bounds.scaled_height(width);
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow!("failed to clear {}: {e}", path.display()))?;

        // Latitude range is given top-down so north ends up at the top of
        // the raster.
        let area = root.apply_coord_spec(Cartesian2d::<RangedCoordf64, RangedCoordf64>::new(
            bounds.min_lon..bounds.max_lon,
            bounds.max_lat..bounds.min_lat,
            (0..width as i32, 0..height as i32),
        ));

        Ok(Self { area })
    }
}

impl MapSurface for PngSurface<'_> {
    fn draw_region(&mut self, region: &PaintedRegion) -> Result<()> {
        if region.points.is_empty() {
            return Ok(());
        }

        let fill = raster_color(&region.fill);
        let outline = raster_color(&region.outline);

        self.area
            .draw(&Polygon::new(region.points.clone(), fill.filled()))
            .map_err(|e| anyhow!("failed to fill region {:?}: {e}", region.name))?;

        // The closing edge is implied by the format, so close the ring here
        let mut ring = region.points.clone();
        ring.push(region.points[0]);
        self.area
            .draw(&PathElement::new(ring, outline))
            .map_err(|e| anyhow!("failed to outline region {:?}: {e}", region.name))?;

        Ok(())
    }

    fn present(self) -> Result<()> {
        self.area
            .present()
            .map_err(|e| anyhow!("failed to write map image: {e}"))
    }
}

/// Quantize fractional channels to the 8-bit raster palette
fn raster_color(color: &Color) -> RGBColor {
    RGBColor(
        raster_channel(color.r),
        raster_channel(color.g),
        raster_channel(color.b),
    )
}

fn raster_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_map;
    use tempfile::tempdir;

    #[test]
    fn test_raster_channel_quantization() {
        assert_eq!(raster_channel(0.0), 0);
        assert_eq!(raster_channel(1.0), 255);
        assert_eq!(raster_channel(0.5), 128);
        // Out-of-range survives as a clamp, not a wrap
        assert_eq!(raster_channel(1.5), 255);
    }

    #[test]
    fn test_png_surface_writes_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("map.png");

        let bounds = Bounds {
            min_lon: -1.0,
            min_lat: -1.0,
            max_lon: 1.0,
            max_lat: 1.0,
        };

        let plan = vec![PaintedRegion {
            name: "triangle".to_string(),
            points: vec![(-0.5, -0.5), (0.5, -0.5), (0.0, 0.5)],
            outline: Color::WHITE,
            fill: Color::new(0.75, 0.0, 0.25),
        }];

        let surface = PngSurface::create(&path, &bounds, 64).unwrap();
        render_map(surface, &plan).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_empty_region_draws_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");

        let bounds = Bounds {
            min_lon: 0.0,
            min_lat: 0.0,
            max_lon: 1.0,
            max_lat: 1.0,
        };

        let plan = vec![PaintedRegion {
            name: "nowhere".to_string(),
            points: Vec::new(),
            outline: Color::BLACK,
            fill: Color::WHITE,
        }];

        let surface = PngSurface::create(&path, &bounds, 16).unwrap();
        render_map(surface, &plan).unwrap();
        assert!(path.exists());
    }
}
