use std::io::BufRead;

use super::{FormatError, LineCursor};
use crate::domain::Region;
use crate::geometry::Bounds;

/// Parse a geography file into its bounding box and region polygons.
///
/// # Format
/// 1. Two lines with the global min and max (longitude, latitude) corners
/// 2. One line with the number of regions
/// 3. Per region: a marker line (ignored), the region name, a second marker
///    line (ignored), the vertex count, then that many coordinate lines
///
/// Parsing is strict and positional: exactly the declared number of regions
/// and vertices is consumed, and region order in the result equals file
/// order. Overlapping regions rely on that order, later ones paint on top.
pub fn parse_geography<R: BufRead>(reader: R) -> Result<(Bounds, Vec<Region>), FormatError> {
    let mut cursor = LineCursor::new(reader);

    let (min_lon, min_lat) = cursor.read_pair("minimum longitude and latitude")?;
    let (max_lon, max_lat) = cursor.read_pair("maximum longitude and latitude")?;
    let region_count = cursor.read_count("region count")?;

    let mut regions = Vec::with_capacity(region_count);
    for _ in 0..region_count {
        regions.push(read_region(&mut cursor)?);
    }

    let bounds = Bounds {
        min_lon,
        min_lat,
        max_lon,
        max_lat,
    };
    Ok((bounds, regions))
}

/// Read one region record from the cursor
fn read_region<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Region, FormatError> {
    cursor.read_line("region separator")?;
    let name = cursor.read_line("region name")?.trim().to_string();
    cursor.read_line("coordinate marker")?;
    let point_count = cursor.read_count("vertex count")?;

    let mut points = Vec::with_capacity(point_count);
    for _ in 0..point_count {
        points.push(cursor.read_pair("vertex longitude and latitude")?);
    }

    Ok(Region::new(name, points))
}
