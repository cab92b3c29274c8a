//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::Error;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use tile_grid::Extent;

/// Map rendering engine
///
/// One instance renders one tile at a time. The viewport is honored exactly,
/// the aspect ratio of the image is never forced onto it.
pub trait Renderer {
    fn info(&self) -> String;
    /// Set image size in pixels
    fn configure(&mut self, width: u32, height: u32);
    fn load_style(&mut self, path: &str) -> Result<(), Error>;
    /// Set map extent in lon/lat
    fn set_viewport(&mut self, extent: &Extent);
    fn render_to_image(&mut self) -> Result<RgbaImage, Error>;
    /// Render `extent` into a new image
    fn render_extent(&mut self, extent: &Extent) -> Result<RgbaImage, Error> {
        self.set_viewport(extent);
        self.render_to_image()
    }
}

/// PNG encoded image
pub fn png_bytes(image: &RgbaImage) -> Result<Vec<u8>, Error> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
