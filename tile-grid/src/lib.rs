//! A library for Web Mercator tile grid calculations
//!
//! ## Tile addressing
//!
//! ```rust
//! use tile_grid::{lonlat_to_tile, tile_bounds, MAX_LATITUDE};
//!
//! assert_eq!(lonlat_to_tile(121.4737, 31.2304, 10), (857, 418));
//!
//! // North-western quarter of the world
//! let bounds = tile_bounds(0, 0, 1);
//! assert_eq!((bounds.minx, bounds.maxx), (-180.0, 0.0));
//! assert_eq!(bounds.miny, 0.0);
//! assert!((bounds.maxy - MAX_LATITUDE).abs() < 1e-9);
//! ```
//!
//! ## Tile ranges
//!
//! ```rust
//! use tile_grid::{tile_range, Extent};
//!
//! let extent = Extent {
//!     minx: 120.845924,
//!     miny: 30.6592375,
//!     maxx: 122.2430515,
//!     maxy: 31.8756055,
//! };
//! let range = tile_range(&extent, 10);
//! assert_eq!((range.minx, range.maxx), (855, 859));
//! assert_eq!((range.miny, range.maxy), (416, 420));
//! assert_eq!(range.tile_count(), 25);
//! ```
//!
//! ## Grid iterators
//!
//! ```rust
//! use tile_grid::{Extent, GridIterator};
//!
//! let extent = Extent {
//!     minx: 120.845924,
//!     miny: 30.6592375,
//!     maxx: 122.2430515,
//!     maxy: 31.8756055,
//! };
//! for (z, x, y) in GridIterator::from_extent(&extent, 0, 8) {
//!     println!("Tile {}/{}/{}", z, x, y);
//! }
//! ```

mod grid_iterator;
mod mercator;
mod tile_range;
#[cfg(test)]
mod tile_range_test;

pub use grid_iterator::GridIterator;
pub use mercator::{
    extent_wgs84_to_merc, lonlat_to_merc, lonlat_to_tile, tile_bounds, tile_ul, Extent, LngLat,
    MAX_LATITUDE, MAX_ZOOM,
};
pub use tile_range::{tile_range, tile_ranges, TileRange, TileRangeIter};
