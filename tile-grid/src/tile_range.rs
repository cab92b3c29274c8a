//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile index ranges

use crate::mercator::{tile_coords, tolerance, Extent};

/// Min and max tile indices of a zoom level (inclusive)
#[derive(PartialEq, Clone, Debug)]
pub struct TileRange {
    pub zoom: u8,
    pub minx: i64,
    pub maxx: i64,
    pub miny: i64,
    pub maxy: i64,
}

impl TileRange {
    /// Degenerate range, e.g. from an inverted extent
    pub fn is_empty(&self) -> bool {
        self.minx > self.maxx || self.miny > self.maxy
    }
    /// Number of tiles, saturating at `u64::MAX`
    pub fn tile_count(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let cols = self.maxx.abs_diff(self.minx).saturating_add(1);
        let rows = self.maxy.abs_diff(self.miny).saturating_add(1);
        cols.saturating_mul(rows)
    }
    pub fn contains(&self, xtile: i64, ytile: i64) -> bool {
        xtile >= self.minx && xtile <= self.maxx && ytile >= self.miny && ytile <= self.maxy
    }
    /// Tile indices `(x, y)`, columns first
    pub fn iter(&self) -> TileRangeIter {
        TileRangeIter {
            range: self.clone(),
            x: self.minx,
            y: self.miny,
        }
    }
}

/// Column-by-column iterator over a `TileRange`
pub struct TileRangeIter {
    range: TileRange,
    x: i64,
    y: i64,
}

impl Iterator for TileRangeIter {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.range.is_empty() || self.x > self.range.maxx {
            return None;
        }
        let current = (self.x, self.y);
        if self.y < self.range.maxy {
            self.y += 1;
        } else {
            self.x += 1;
            self.y = self.range.miny;
        }
        Some(current)
    }
}

/// Tile indices covering a lon/lat extent at a zoom level
///
/// Tile rows count from north to south, so the southern edge of the extent
/// gives the max y and the northern edge the min y.
/// Max edges lying on a tile boundary don't include the following tile.
/// Indices are not clamped to the grid.
pub fn tile_range(extent: &Extent, zoom: u8) -> TileRange {
    let (west, south) = tile_coords(extent.minx, extent.miny, zoom);
    let (east, north) = tile_coords(extent.maxx, extent.maxy, zoom);
    let tol = tolerance(zoom);
    let minx = (west + tol).floor() as i64;
    let miny = (north + tol).floor() as i64;
    TileRange {
        zoom,
        minx,
        maxx: upper_index(east, west, minx, tol),
        miny,
        maxy: upper_index(south, north, miny, tol),
    }
}

// Last index of an edge. Zero-width extents keep the tile of the min edge.
fn upper_index(max: f64, min: f64, min_index: i64, tol: f64) -> i64 {
    let index = (max - tol).floor() as i64;
    if max >= min {
        index.max(min_index)
    } else {
        index
    }
}

/// Tile ranges of all zoom levels from `minzoom` to `maxzoom`
pub fn tile_ranges(extent: &Extent, minzoom: u8, maxzoom: u8) -> Vec<TileRange> {
    (minzoom..=maxzoom)
        .map(|zoom| tile_range(extent, zoom))
        .collect()
}
