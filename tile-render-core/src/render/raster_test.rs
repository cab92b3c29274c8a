//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::RenderCfg;
use crate::core::Config;
use crate::error::Error;
use crate::render::raster::RasterRenderer;
use crate::render::renderer::{png_bytes, Renderer};
use image::Rgba;
use tile_grid::tile_bounds;

#[test]
fn test_render_tile() {
    let mut renderer = RasterRenderer::new(64, 64);
    renderer.configure(256, 256);
    renderer.load_style("src/test/style.json").unwrap();
    assert_eq!(renderer.size(), (256, 256));
    assert_eq!(
        renderer.info(),
        "Raster renderer 256x256 style: src/test/style.json"
    );

    let extent = tile_bounds(857, 418, 10);
    let image = renderer.render_extent(&extent).unwrap();
    assert_eq!(image.dimensions(), (256, 256));
    assert_eq!(*image.get_pixel(0, 0), Rgba([0xf8, 0xf4, 0xf0, 255]));
    assert_eq!(*image.get_pixel(255, 255), Rgba([0xf8, 0xf4, 0xf0, 255]));
    assert_eq!(renderer.viewport(), Some(&extent));

    // Web Mercator tiles are square in projected units
    let (resx, resy) = renderer.resolution().unwrap();
    assert!((resx - 152.87405657035254).abs() < 1e-6);
    assert!((resx - resy).abs() < 1e-6);
}

#[test]
fn test_viewport_not_forced() {
    let mut renderer = RasterRenderer::new(256, 128);
    renderer.load_style("src/test/style.toml").unwrap();
    let extent = tile_bounds(3, 1, 2);
    let image = renderer.render_extent(&extent).unwrap();
    assert_eq!(image.dimensions(), (256, 128));
    assert_eq!(renderer.viewport(), Some(&extent));
    let (resx, resy) = renderer.resolution().unwrap();
    assert!((resy - 2.0 * resx).abs() < 1e-3);
}

#[test]
fn test_render_errors() {
    let mut renderer = RasterRenderer::new(256, 256);
    match renderer.render_extent(&tile_bounds(0, 0, 0)) {
        Err(Error::Style(msg)) => assert_eq!(msg, "No style loaded"),
        other => panic!("unexpected result {:?}", other),
    }
    assert!(renderer.load_style("src/test/missing.json").is_err());

    let mut renderer = RasterRenderer::new(256, 256);
    renderer.load_style("src/test/style.json").unwrap();
    match renderer.render_to_image() {
        Err(Error::Config(msg)) => assert_eq!(msg, "Viewport not set"),
        other => panic!("unexpected result {:?}", other),
    }
    renderer.set_viewport(&tile_bounds(0, 0, 0));
    assert!(renderer.render_to_image().is_ok());
}

#[test]
fn test_png_bytes() {
    let mut renderer = RasterRenderer::new(16, 16);
    renderer.load_style("src/test/style.json").unwrap();
    let tile = renderer.render_extent(&tile_bounds(0, 0, 0)).unwrap();
    let png = png_bytes(&tile).unwrap();
    assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded, tile);
}

#[test]
fn test_renderer_from_config() {
    let cfg = RenderCfg {
        style: "src/test/style.json".to_string(),
        tile_size: 512,
    };
    let renderer = RasterRenderer::from_config(&cfg).unwrap();
    assert_eq!(renderer.size(), (512, 512));
    assert_eq!(
        renderer.gen_runtime_config(),
        "\n[render]\nstyle = \"src/test/style.json\"\ntile_size = 512\n"
    );

    let cfg = RenderCfg {
        style: "src/test/missing.json".to_string(),
        tile_size: 256,
    };
    assert!(RasterRenderer::from_config(&cfg).is_err());

    let cfg = RenderCfg {
        style: "src/test/style.json".to_string(),
        tile_size: 0,
    };
    assert_eq!(
        RasterRenderer::from_config(&cfg).err().unwrap(),
        "tile_size must be positive"
    );
}

#[test]
fn test_runtime_config_quoting() {
    use crate::core::config::ApplicationCfg;
    use crate::core::parse_config;
    use std::{env, fs};

    let mut path = env::temp_dir();
    path.push("tile_render_test_style \"quoted\".json");
    fs::copy("src/test/style.json", &path).unwrap();
    let style = format!("{}", path.display());
    let cfg = RenderCfg {
        style: style.clone(),
        tile_size: 256,
    };
    let renderer = RasterRenderer::from_config(&cfg).unwrap();
    let toml = format!(
        "{}\n[tileset]\nextent = {{ minx = 0.0, miny = 0.0, maxx = 1.0, maxy = 1.0 }}\n",
        renderer.gen_runtime_config()
    );
    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    assert_eq!(config.render.style, style);
    assert_eq!(config.render.tile_size, 256);
}
