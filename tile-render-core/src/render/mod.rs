//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod glstyle_converter;
pub mod raster;
pub mod renderer;
pub mod style;

#[cfg(test)]
mod raster_test;

pub use self::raster::RasterRenderer;
pub use self::renderer::{png_bytes, Renderer};
pub use self::style::RenderStyle;
