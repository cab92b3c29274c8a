//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use clap::ArgMatches;
use std::process;
use std::str::FromStr;
use tile_render_core::core::config::{ApplicationCfg, ExtentCfg, StoreCfg, StoreFileCfg, DEFAULT_CONFIG};
use tile_render_core::core::{parse_config, read_config, Config};
use tile_render_core::render::RasterRenderer;
use tile_render_service::RenderService;

pub fn config_from_args(args: &ArgMatches) -> ApplicationCfg {
    let mut config: ApplicationCfg = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath).unwrap_or_else(|err| {
            println!("Error reading configuration - {} ", err);
            process::exit(1)
        })
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "").unwrap_or_else(|err| {
            println!("Error reading default configuration - {} ", err);
            process::exit(1)
        })
    };
    apply_args(&mut config, args).unwrap_or_else(|err| {
        println!("{}", err);
        process::exit(1)
    });
    config
}

/// Override configuration values with command line arguments
pub fn apply_args(config: &mut ApplicationCfg, args: &ArgMatches) -> Result<(), String> {
    if let Some(style) = args.value_of("style") {
        config.render.style = style.to_string();
    }
    if let Some(tilesize) = args.value_of("tilesize") {
        config.render.tile_size = u32::from_str(tilesize)
            .map_err(|_| "Error parsing 'tilesize' as integer value".to_string())?;
    }
    if let Some(numlist) = args.value_of("extent") {
        config.tileset.extent = parse_extent(numlist)?;
    }
    if let Some(minzoom) = args.value_of("minzoom") {
        config.tileset.minzoom = u8::from_str(minzoom)
            .map_err(|_| "Error parsing 'minzoom' as integer value".to_string())?;
    }
    if let Some(maxzoom) = args.value_of("maxzoom") {
        config.tileset.maxzoom = u8::from_str(maxzoom)
            .map_err(|_| "Error parsing 'maxzoom' as integer value".to_string())?;
    }
    if let Some(dir) = args.value_of("store") {
        config.store = Some(StoreCfg {
            file: Some(StoreFileCfg {
                base: dir.to_string(),
            }),
        });
    }
    Ok(())
}

fn parse_extent(numlist: &str) -> Result<ExtentCfg, String> {
    let arr = numlist
        .split(",")
        .map(|v| f64::from_str(v.trim()))
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| "Error parsing 'extent' as list of float values".to_string())?;
    if arr.len() != 4 {
        return Err("'extent' requires four values minx,miny,maxx,maxy".to_string());
    }
    Ok(ExtentCfg {
        minx: arr[0],
        miny: arr[1],
        maxx: arr[2],
        maxy: arr[3],
    })
}

pub fn service_from_args(config: &ApplicationCfg) -> RenderService<RasterRenderer> {
    RenderService::from_config(config).unwrap_or_else(|err| {
        println!("Error reading configuration - {} ", err);
        process::exit(1)
    })
}

pub fn gen_config(args: &ArgMatches) -> String {
    if args.value_of("config").is_some() || args.value_of("style").is_some() {
        let service = service_from_args(&config_from_args(args));
        service.gen_runtime_config()
    } else {
        RenderService::<RasterRenderer>::gen_config()
    }
}
