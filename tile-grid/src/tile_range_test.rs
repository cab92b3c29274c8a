//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::mercator::{lonlat_to_tile, tile_bounds, Extent, MAX_LATITUDE};
use crate::tile_range::{tile_range, tile_ranges, TileRange};

fn shanghai() -> Extent {
    Extent {
        minx: 120.845924,
        miny: 30.6592375,
        maxx: 122.2430515,
        maxy: 31.8756055,
    }
}

#[test]
fn test_zoom0() {
    for extent in &[
        shanghai(),
        Extent {
            minx: -180.0,
            miny: -85.0,
            maxx: 179.9,
            maxy: 85.0,
        },
        Extent {
            minx: -74.1,
            miny: 40.6,
            maxx: -73.9,
            maxy: 40.9,
        },
    ] {
        let range = tile_range(extent, 0);
        assert_eq!(
            range,
            TileRange {
                zoom: 0,
                minx: 0,
                maxx: 0,
                miny: 0,
                maxy: 0,
            }
        );
        assert_eq!(range.tile_count(), 1);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![(0, 0)]);
    }
}

#[test]
fn test_sample_bounds() {
    let extent = shanghai();
    let range = tile_range(&extent, 5);
    assert!(range.minx <= range.maxx);
    assert!(range.miny <= range.maxy);

    // Corners of the extent
    let sw = lonlat_to_tile(extent.minx, extent.miny, 5);
    let ne = lonlat_to_tile(extent.maxx, extent.maxy, 5);
    let nw = lonlat_to_tile(extent.minx, extent.maxy, 5);
    let se = lonlat_to_tile(extent.maxx, extent.miny, 5);
    assert_eq!((range.minx, range.maxy), sw);
    assert_eq!((range.maxx, range.miny), ne);
    assert_eq!((range.minx, range.miny), nw);
    assert_eq!((range.maxx, range.maxy), se);
    assert_eq!(
        range.tile_count(),
        ((range.maxx - range.minx + 1) * (range.maxy - range.miny + 1)) as u64
    );
    assert_eq!(
        range,
        TileRange {
            zoom: 5,
            minx: 26,
            maxx: 26,
            miny: 13,
            maxy: 13,
        }
    );

    let range = tile_range(&extent, 10);
    assert_eq!(
        range,
        TileRange {
            zoom: 10,
            minx: 855,
            maxx: 859,
            miny: 416,
            maxy: 420,
        }
    );
    assert_eq!(range.tile_count(), 25);
}

#[test]
fn test_tile_ranges() {
    let ranges = tile_ranges(&shanghai(), 0, 18);
    assert_eq!(ranges.len(), 19);
    assert_eq!(
        ranges.iter().map(|r| r.zoom).collect::<Vec<_>>(),
        (0..=18).collect::<Vec<u8>>()
    );
    let counts = ranges.iter().map(|r| r.tile_count()).collect::<Vec<_>>();
    assert_eq!(
        counts,
        vec![
            1, 1, 1, 1, 1, 1, 1, 2, 4, 9, 25, 81, 289, 1089, 4225, 16640, 66300, 264690, 1055666
        ]
    );

    assert_eq!(tile_ranges(&shanghai(), 7, 7)[0], tile_range(&shanghai(), 7));
    assert!(tile_ranges(&shanghai(), 5, 4).is_empty());
}

#[test]
fn test_range_inclusivity() {
    let extent = shanghai();
    for zoom in 0..=12 {
        let range = tile_range(&extent, zoom);
        let n = 1i64 << zoom;
        for (x, y) in range.iter() {
            assert!(tile_bounds(x, y, zoom).intersects(&extent));
        }
        // Tiles beyond the range grown by one don't intersect
        for x in (range.minx - 3).max(0)..=(range.maxx + 3).min(n - 1) {
            for y in (range.miny - 3).max(0)..=(range.maxy + 3).min(n - 1) {
                let outside = x < range.minx - 1
                    || x > range.maxx + 1
                    || y < range.miny - 1
                    || y > range.maxy + 1;
                if outside {
                    assert!(!tile_bounds(x, y, zoom).intersects(&extent));
                }
            }
        }
    }
}

fn assert_range(extent: &Extent, zoom: u8, (minx, maxx, miny, maxy): (i64, i64, i64, i64)) {
    let range = tile_range(extent, zoom);
    assert_eq!(
        range,
        TileRange {
            zoom,
            minx,
            maxx,
            miny,
            maxy,
        },
        "{:?}",
        extent
    );
    for (x, y) in range.iter() {
        assert!(tile_bounds(x, y, zoom).intersects(extent));
    }
}

#[test]
fn test_edges_on_tile_boundaries() {
    // Max edges just inside a tile boundary
    let west = Extent {
        minx: -10.0,
        miny: 10.0,
        maxx: -0.00001,
        maxy: 20.0,
    };
    assert_range(&west, 1, (0, 0, 0, 0));
    let south = Extent {
        minx: -10.0,
        miny: -20.0,
        maxx: 10.0,
        maxy: -0.00001,
    };
    assert_range(&south, 1, (0, 1, 1, 1));
    // Min edge just inside a tile boundary
    let east = Extent {
        minx: 0.00001,
        miny: 10.0,
        maxx: 10.0,
        maxy: 20.0,
    };
    assert_range(&east, 1, (1, 1, 0, 0));
    // Max edge on the boundary
    let western_hemisphere = Extent {
        minx: -180.0,
        miny: -85.0,
        maxx: 0.0,
        maxy: 85.0,
    };
    assert_range(&western_hemisphere, 1, (0, 0, 0, 1));
    // Zero-width extent on a boundary
    let point = Extent {
        minx: 0.0,
        miny: 0.0,
        maxx: 0.0,
        maxy: 0.0,
    };
    assert_range(&point, 1, (1, 1, 1, 1));

    // Tile extents cover their own tile only
    for zoom in 1..=12 {
        let n = 1i64 << zoom;
        let step = (n / 16).max(1) as usize;
        for x in (0..n).step_by(step) {
            for y in (0..n).step_by(step) {
                assert_range(&tile_bounds(x, y, zoom), zoom, (x, x, y, y));
            }
        }
    }
}

#[test]
fn test_world_extent() {
    let world = Extent {
        minx: -180.0,
        miny: -MAX_LATITUDE,
        maxx: 180.0,
        maxy: MAX_LATITUDE,
    };
    for zoom in 0..=8 {
        let n = 1i64 << zoom;
        let range = tile_range(&world, zoom);
        assert_eq!((range.minx, range.maxx), (0, n - 1));
        assert_eq!((range.miny, range.maxy), (0, n - 1));
        assert_eq!(range.tile_count(), (n * n) as u64);
    }
    let range = tile_range(&world, 31);
    assert_eq!((range.minx, range.maxx), (0, (1i64 << 31) - 1));
    assert_eq!(range.tile_count(), 1u64 << 62);
    let range = tile_range(&world, 40);
    assert_eq!((range.minx, range.maxx), (0, (1i64 << 40) - 1));
    assert_eq!(range.tile_count(), u64::MAX);
}

#[test]
fn test_tile_count_saturates() {
    let range = TileRange {
        zoom: 64,
        minx: i64::MIN,
        maxx: i64::MAX,
        miny: 0,
        maxy: 1,
    };
    assert_eq!(range.tile_count(), u64::MAX);
}

#[test]
fn test_inverted_extent() {
    let inverted = Extent {
        minx: 122.2430515,
        miny: 31.8756055,
        maxx: 120.845924,
        maxy: 30.6592375,
    };
    let range = tile_range(&inverted, 10);
    assert!(range.is_empty());
    assert_eq!(range.tile_count(), 0);
    assert_eq!(range.iter().count(), 0);
}

#[test]
fn test_range_iter() {
    let range = TileRange {
        zoom: 3,
        minx: 2,
        maxx: 3,
        miny: 5,
        maxy: 7,
    };
    assert_eq!(
        range.iter().collect::<Vec<_>>(),
        vec![(2, 5), (2, 6), (2, 7), (3, 5), (3, 6), (3, 7)]
    );
    assert_eq!(range.tile_count(), 6);
    assert!(range.contains(3, 7));
    assert!(!range.contains(4, 7));
    assert!(!range.contains(2, 4));
}
