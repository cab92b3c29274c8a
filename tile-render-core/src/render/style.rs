//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Render style loading

use crate::error::Error;
use crate::render::glstyle_converter::toml_style_to_gljson;
use image::Rgba;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Subset of a Mapbox GL style used for raster rendering
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    pub name: Option<String>,
    /// Fill color of the `background` layer
    pub background: Rgba<u8>,
}

impl RenderStyle {
    /// Read GL style JSON or, for `.toml` files, a GL style in TOML format
    pub fn from_file(path: &str) -> Result<RenderStyle, Error> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Style(format!("Could not read style '{}': {}", path, e)))?;
        let is_toml = Path::new(path)
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("toml"));
        let json = if is_toml {
            let toml = content
                .parse::<toml::Value>()
                .map_err(|e| Error::Style(format!("{} - {}", path, e)))?;
            toml_style_to_gljson(&toml)
        } else {
            serde_json::from_str(&content)
                .map_err(|e| Error::Style(format!("{} - {}", path, e)))?
        };
        RenderStyle::from_gljson(&json)
    }

    pub fn from_gljson(json: &Value) -> Result<RenderStyle, Error> {
        if !json.is_object() {
            return Err(Error::Style("Style must be a JSON object".to_string()));
        }
        let name = json["name"].as_str().map(|s| s.to_string());
        let layers = match json.get("layers") {
            None => Vec::new(),
            Some(Value::Array(layers)) => layers.iter().collect(),
            Some(_) => return Err(Error::Style("`layers` must be an array".to_string())),
        };
        let mut background = TRANSPARENT;
        for layer in layers {
            if layer["type"].as_str() != Some("background") {
                continue;
            }
            if let Some(color) = layer["paint"]["background-color"].as_str() {
                background = parse_color(color)
                    .ok_or_else(|| Error::Style(format!("Invalid color '{}'", color)))?;
            }
        }
        Ok(RenderStyle { name, background })
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`
pub fn parse_color(color: &str) -> Option<Rgba<u8>> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let mut rgba = [255u8; 4];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgba[i] = v * 17;
            }
            Some(Rgba(rgba))
        }
        6 => Some(Rgba([channel(0)?, channel(2)?, channel(4)?, 255])),
        8 => Some(Rgba([channel(0)?, channel(2)?, channel(4)?, channel(6)?])),
        _ => None,
    }
}
