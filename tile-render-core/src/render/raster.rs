//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::RenderCfg;
use crate::core::Config;
use crate::error::Error;
use crate::render::renderer::Renderer;
use crate::render::style::RenderStyle;
use image::RgbaImage;
use tile_grid::{extent_wgs84_to_merc, Extent};

/// Raster renderer filling tiles with the style background
#[derive(Clone, Debug)]
pub struct RasterRenderer {
    width: u32,
    height: u32,
    style_path: Option<String>,
    style: Option<RenderStyle>,
    viewport: Option<Extent>,
    viewport_merc: Option<Extent>,
}

impl RasterRenderer {
    pub fn new(width: u32, height: u32) -> RasterRenderer {
        RasterRenderer {
            width,
            height,
            style_path: None,
            style: None,
            viewport: None,
            viewport_merc: None,
        }
    }
    pub fn with_style(width: u32, height: u32, style: RenderStyle) -> RasterRenderer {
        let mut renderer = RasterRenderer::new(width, height);
        renderer.style = Some(style);
        renderer
    }
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    /// Current viewport in lon/lat
    pub fn viewport(&self) -> Option<&Extent> {
        self.viewport.as_ref()
    }
    /// Horizontal and vertical meters per pixel of the current viewport
    pub fn resolution(&self) -> Option<(f64, f64)> {
        self.viewport_merc.as_ref().map(|ext| {
            (
                (ext.maxx - ext.minx) / self.width as f64,
                (ext.maxy - ext.miny) / self.height as f64,
            )
        })
    }
}

impl Default for RasterRenderer {
    fn default() -> Self {
        RasterRenderer::new(256, 256)
    }
}

impl Renderer for RasterRenderer {
    fn info(&self) -> String {
        format!(
            "Raster renderer {}x{} style: {}",
            self.width,
            self.height,
            self.style_path.as_deref().unwrap_or("-")
        )
    }
    fn configure(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
    fn load_style(&mut self, path: &str) -> Result<(), Error> {
        let style = RenderStyle::from_file(path)?;
        info!(
            "Loaded style '{}' from {}",
            style.name.as_deref().unwrap_or(""),
            path
        );
        self.style = Some(style);
        self.style_path = Some(path.to_string());
        Ok(())
    }
    fn set_viewport(&mut self, extent: &Extent) {
        self.viewport_merc = Some(extent_wgs84_to_merc(extent));
        self.viewport = Some(extent.clone());
    }
    fn render_to_image(&mut self) -> Result<RgbaImage, Error> {
        let style = self
            .style
            .as_ref()
            .ok_or_else(|| Error::Style("No style loaded".to_string()))?;
        if self.viewport.is_none() {
            return Err(Error::Config("Viewport not set".to_string()));
        }
        if let Some((resx, resy)) = self.resolution() {
            debug!("Rendering with resolution {:.4}x{:.4} m/px", resx, resy);
        }
        Ok(RgbaImage::from_pixel(
            self.width,
            self.height,
            style.background,
        ))
    }
}

impl<'a> Config<'a, RenderCfg> for RasterRenderer {
    fn from_config(cfg: &RenderCfg) -> Result<Self, String> {
        if cfg.tile_size == 0 {
            return Err("tile_size must be positive".to_string());
        }
        let mut renderer = RasterRenderer::default();
        renderer.configure(cfg.tile_size, cfg.tile_size);
        renderer
            .load_style(&cfg.style)
            .map_err(|e| format!("{}", e))?;
        Ok(renderer)
    }
    fn gen_config() -> String {
        let toml = r#"
[render]
# Mapbox GL style (JSON or TOML)
style = "style.json"
tile_size = 256
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        match self.style_path {
            Some(ref path) => format!(
                "\n[render]\nstyle = {}\ntile_size = {}\n",
                toml::Value::String(path.clone()),
                self.width
            ),
            None => Self::gen_config(),
        }
    }
}
