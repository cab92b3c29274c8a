//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile pyramid traversal

use tile_grid::{tile_bounds, tile_ranges, Extent};

/// Call `render` for every tile covering `extent` from `minzoom` to `maxzoom`
///
/// Tiles are visited sequentially by ascending zoom level, column and row.
/// The first error returned by `render` aborts the traversal.
/// Returns the number of rendered tiles.
pub fn render_pyramid<F, E>(extent: &Extent, minzoom: u8, maxzoom: u8, mut render: F) -> Result<u64, E>
where
    F: FnMut(u8, i64, i64, &Extent) -> Result<(), E>,
{
    let mut tileno: u64 = 0;
    for limit in tile_ranges(extent, minzoom, maxzoom) {
        info!(
            "Level {}: x range [{}, {}], y range [{}, {}]",
            limit.zoom, limit.minx, limit.maxx, limit.miny, limit.maxy
        );
        if limit.is_empty() {
            warn!("Level {}: no tiles in range", limit.zoom);
            continue;
        }
        for (xtile, ytile) in limit.iter() {
            info!("Rendering tile z={}, x={}, y={}", limit.zoom, xtile, ytile);
            let tile_extent = tile_bounds(xtile, ytile, limit.zoom);
            render(limit.zoom, xtile, ytile, &tile_extent)?;
            tileno += 1;
        }
    }
    Ok(tileno)
}

/// Number of tiles `render_pyramid` visits
pub fn pyramid_tile_count(extent: &Extent, minzoom: u8, maxzoom: u8) -> u64 {
    tile_ranges(extent, minzoom, maxzoom)
        .iter()
        .map(|limit| limit.tile_count())
        .fold(0, u64::saturating_add)
}
