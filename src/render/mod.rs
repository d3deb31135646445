use anyhow::Result;

pub mod plan;
pub mod png;

pub use plan::{PaintedRegion, build_draw_plan, unmatched_regions};
pub use png::PngSurface;

/// A drawing surface for the finished map.
///
/// Regions are queued in draw order; nothing is guaranteed to reach the
/// output until `present` commits the whole batch in one shot.
pub trait MapSurface {
    /// Queue one region's fill-and-outline draw
    fn draw_region(&mut self, region: &PaintedRegion) -> Result<()>;

    /// Commit everything queued so far and finish the output
    fn present(self) -> Result<()>
    where
        Self: Sized;
}

/// Draw every painted region in order, then commit the surface
pub fn render_map<S: MapSurface>(mut surface: S, plan: &[PaintedRegion]) -> Result<()> {
    for region in plan {
        surface.draw_region(region)?;
    }
    surface.present()
}
