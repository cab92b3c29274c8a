//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;

pub mod pyramid;
pub mod render_service;

pub use pyramid::{pyramid_tile_count, render_pyramid};
pub use render_service::RenderService;
