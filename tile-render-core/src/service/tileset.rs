//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::Config;
use crate::core::config::TilesetCfg;
use tile_grid::{tile_ranges, Extent, TileRange, MAX_LATITUDE, MAX_ZOOM};

/// Geographic extent and zoom levels of a tile pyramid
#[derive(Clone, Debug)]
pub struct Tileset {
    /// Extent in lon/lat
    pub extent: Extent,
    pub minzoom: u8,
    pub maxzoom: u8,
}

impl Tileset {
    /// Tile ranges of all zoom levels
    pub fn tile_ranges(&self) -> Vec<TileRange> {
        tile_ranges(&self.extent, self.minzoom, self.maxzoom)
    }
    pub fn tile_count(&self) -> u64 {
        self.tile_ranges()
            .iter()
            .map(|r| r.tile_count())
            .fold(0, u64::saturating_add)
    }
    /// Inverted extents produce empty tile ranges
    pub fn is_inverted(&self) -> bool {
        self.extent.minx > self.extent.maxx || self.extent.miny > self.extent.maxy
    }
    /// Extent reaches beyond the latitude limits of the Web Mercator grid
    pub fn exceeds_grid(&self) -> bool {
        self.extent.miny < -MAX_LATITUDE || self.extent.maxy > MAX_LATITUDE
    }
}

impl<'a> Config<'a, TilesetCfg> for Tileset {
    fn from_config(cfg: &TilesetCfg) -> Result<Self, String> {
        if cfg.minzoom > cfg.maxzoom {
            return Err(format!(
                "minzoom {} is greater than maxzoom {}",
                cfg.minzoom, cfg.maxzoom
            ));
        }
        if cfg.maxzoom > MAX_ZOOM {
            return Err(format!(
                "maxzoom {} exceeds the highest zoom level {}",
                cfg.maxzoom, MAX_ZOOM
            ));
        }
        Ok(Tileset {
            extent: Extent::from(&cfg.extent),
            minzoom: cfg.minzoom,
            maxzoom: cfg.maxzoom,
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[tileset]
# Extent in lon/lat
extent = { minx = 120.845924, miny = 30.6592375, maxx = 122.2430515, maxy = 31.8756055 }
minzoom = 0
maxzoom = 18
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        format!(
            r#"
[tileset]
extent = {{ minx = {}, miny = {}, maxx = {}, maxy = {} }}
minzoom = {}
maxzoom = {}
"#,
            self.extent.minx,
            self.extent.miny,
            self.extent.maxx,
            self.extent.maxy,
            self.minzoom,
            self.maxzoom
        )
    }
}
