//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::pyramid::render_pyramid;
use pbr::ProgressBar;
use std::io::Stdout;
use tile_grid::{tile_bounds, Extent, TileRange, MAX_LATITUDE};
use tile_render_core::core::{ApplicationCfg, Config};
use tile_render_core::render::{png_bytes, RasterRenderer, Renderer};
use tile_render_core::service::tileset::Tileset;
use tile_render_core::store::{Store, Tilestore};
use tile_render_core::Error;

/// Raster tile pyramid service
pub struct RenderService<R: Renderer> {
    pub renderer: R,
    pub tileset: Tileset,
    pub store: Tilestore,
}

impl<R: Renderer> RenderService<R> {
    pub fn new(renderer: R, tileset: Tileset, store: Tilestore) -> RenderService<R> {
        RenderService {
            renderer,
            tileset,
            store,
        }
    }
    /// Render tile at z, x, y in XYZ adressing scheme as PNG
    pub fn tile(&mut self, zoom: u8, xtile: i64, ytile: i64) -> Result<Vec<u8>, Error> {
        let extent = tile_bounds(xtile, ytile, zoom);
        render_png(&mut self.renderer, &extent)
    }
    /// Render all tiles of the tileset into the tile store
    pub fn generate(&mut self, progress: bool) -> Result<u64, Error> {
        info!("{}", self.store.info());
        info!("{}", self.renderer.info());
        let tileset = &self.tileset;
        if tileset.is_inverted() {
            warn!(
                "Inverted extent {:?} - levels with an empty tile range are skipped",
                tileset.extent
            );
        }
        if tileset.exceeds_grid() {
            warn!(
                "Extent {:?} exceeds the Web Mercator latitude range of +/-{}",
                tileset.extent, MAX_LATITUDE
            );
        }
        let limits = tileset.tile_ranges();
        if progress {
            println!(
                "Generating {} tiles of zoom levels {}-{}...",
                tileset.tile_count(),
                tileset.minzoom,
                tileset.maxzoom
            );
        }

        let renderer = &mut self.renderer;
        let store = &self.store;
        let mut pb = ProgressBar::new(0);
        let mut pb_z = None;
        let tileno = render_pyramid(
            &tileset.extent,
            tileset.minzoom,
            tileset.maxzoom,
            |zoom, xtile, ytile, extent| -> Result<(), Error> {
                if progress && pb_z != Some(zoom) {
                    pb_z = Some(zoom);
                    let limit = &limits[(zoom - tileset.minzoom) as usize];
                    pb = progress_bar(&format!("Level {}: ", zoom), limit);
                    pb.tick();
                }
                let png = render_png(renderer, extent)?;
                store.write(&Tilestore::tile_path(zoom, xtile, ytile), &png)?;
                if progress {
                    pb.inc();
                }
                Ok(())
            },
        )?;
        if progress {
            println!("");
        }
        info!("{} tiles rendered", tileno);
        Ok(tileno)
    }
}

fn render_png<R: Renderer>(renderer: &mut R, extent: &Extent) -> Result<Vec<u8>, Error> {
    let image = renderer.render_extent(extent)?;
    png_bytes(&image)
}

fn progress_bar(msg: &str, limit: &TileRange) -> ProgressBar<Stdout> {
    let mut pb = ProgressBar::new(limit.tile_count());
    pb.message(msg);
    pb.show_speed = false;
    pb.show_percent = false;
    pb.show_time_left = false;
    pb
}

impl<'a> Config<'a, ApplicationCfg> for RenderService<RasterRenderer> {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let renderer = RasterRenderer::from_config(&config.render)?;
        let tileset = Tileset::from_config(&config.tileset)?;
        let store = Tilestore::from_config(config)?;
        Ok(RenderService::new(renderer, tileset, store))
    }
    fn gen_config() -> String {
        let mut config = String::new();
        config.push_str(TOML_HEADER);
        config.push_str(&RasterRenderer::gen_config());
        config.push_str(&Tileset::gen_config());
        config.push_str(&Tilestore::gen_config());
        config
    }
    fn gen_runtime_config(&self) -> String {
        let mut config = String::new();
        config.push_str(TOML_HEADER);
        config.push_str(&self.renderer.gen_runtime_config());
        config.push_str(&self.tileset.gen_runtime_config());
        config.push_str(&self.store.gen_runtime_config());
        config
    }
}

const TOML_HEADER: &'static str = "# tile_render configuration\n";
