//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Web Mercator tile addressing (XYZ / "slippy map" scheme)

use std::f64::consts;

/// Geographic extent
///
/// For lon/lat extents `x` is the longitude and `y` the latitude.
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    /// Closed interval intersection test
    pub fn intersects(&self, other: &Extent) -> bool {
        self.minx <= other.maxx
            && other.minx <= self.maxx
            && self.miny <= other.maxy
            && other.miny <= self.maxy
    }
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.minx && lon <= self.maxx && lat >= self.miny && lat <= self.maxy
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct LngLat {
    pub lon: f64,
    pub lat: f64,
}

/// Northern and southern latitude limit of the Web Mercator grid
pub const MAX_LATITUDE: f64 = 85.0511287798066;

/// Earth radius used by EPSG:3857
const EARTH_RADIUS: f64 = 6378137.0;

/// Highest zoom level with tile indices exact in `f64`
pub const MAX_ZOOM: u8 = 30;

// Relative tolerance. Rounding errors of the projection grow with the number
// of tiles, so the tolerance in tile units is `EPSILON * 2^zoom`, capped at
// `MAX_TOLERANCE` above `MAX_ZOOM`.
const EPSILON: f64 = 0.000000000001;
const MAX_TOLERANCE: f64 = 0.001;

fn num_tiles(zoom: u8) -> f64 {
    (zoom as f64).exp2()
}

/// Tolerance in tile units at `zoom`
pub(crate) fn tolerance(zoom: u8) -> f64 {
    (EPSILON * num_tiles(zoom)).min(MAX_TOLERANCE)
}

/// Fractional tile coordinates of a point
pub(crate) fn tile_coords(lon: f64, lat: f64, zoom: u8) -> (f64, f64) {
    let n = num_tiles(zoom);
    let xtile = (lon + 180.0) / 360.0 * n;
    let ytile = (1.0 - lat.to_radians().tan().asinh() / consts::PI) / 2.0 * n;
    (xtile, ytile)
}

/// Tile index `(x, y)` of the tile containing a point
///
/// Indices are not clamped. Points outside the latitude range of the grid
/// (`MAX_LATITUDE`) or the longitude range [-180, 180] yield indices outside
/// `[0, 2^zoom - 1]`. Tile corners computed with `tile_ul` map to their own tile.
pub fn lonlat_to_tile(lon: f64, lat: f64, zoom: u8) -> (i64, i64) {
    let (xtile, ytile) = tile_coords(lon, lat, zoom);
    let tol = tolerance(zoom);
    ((xtile + tol).floor() as i64, (ytile + tol).floor() as i64)
}

/// Returns the upper left (lon, lat) of a tile
///
/// Any index is accepted, `tile_ul(x + 1, y + 1, zoom)` is the lower right
/// corner of tile `(x, y)`.
pub fn tile_ul(xtile: i64, ytile: i64, zoom: u8) -> LngLat {
    // Credits: Mercantile by Sean C. Gillies (https://github.com/mapbox/mercantile)
    let n = num_tiles(zoom);
    let lon_deg = xtile as f64 / n * 360.0 - 180.0;
    let lat_rad = (consts::PI * (1.0 - 2.0 * ytile as f64 / n)).sinh().atan();
    LngLat {
        lon: lon_deg,
        lat: lat_rad.to_degrees(),
    }
}

/// Returns the (lon, lat) bounding box of a tile
pub fn tile_bounds(xtile: i64, ytile: i64, zoom: u8) -> Extent {
    let a = tile_ul(xtile, ytile, zoom);
    let b = tile_ul(xtile + 1, ytile + 1, zoom);
    Extent {
        minx: a.lon,
        miny: b.lat,
        maxx: b.lon,
        maxy: a.lat,
    }
}

/// Returns the Spherical Mercator (x, y) in meters
pub fn lonlat_to_merc(lon: f64, lat: f64) -> (f64, f64) {
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * ((consts::PI * 0.25) + (0.5 * lat.to_radians())).tan().ln();
    (x, y)
}

/// Projected extent
pub fn extent_wgs84_to_merc(extent: &Extent) -> Extent {
    let (minx, miny) = lonlat_to_merc(extent.minx, extent.miny);
    let (maxx, maxy) = lonlat_to_merc(extent.maxx, extent.maxy);
    Extent {
        minx,
        miny,
        maxx,
        maxy,
    }
}
