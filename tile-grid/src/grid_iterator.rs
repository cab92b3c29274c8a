//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::mercator::Extent;
use crate::tile_range::{tile_ranges, TileRange, TileRangeIter};

/// Level-by-level iterator
///
/// Yields `(z, x, y)` ordered by zoom level, then column, then row.
/// Empty levels are skipped.
pub struct GridIterator {
    levels: std::vec::IntoIter<TileRange>,
    zoom: u8,
    cells: Option<TileRangeIter>,
}

impl GridIterator {
    pub fn new(limits: Vec<TileRange>) -> GridIterator {
        GridIterator {
            levels: limits.into_iter(),
            zoom: 0,
            cells: None,
        }
    }
    /// Iterator over all tiles covering `extent` from `minz` to `maxz`
    pub fn from_extent(extent: &Extent, minz: u8, maxz: u8) -> GridIterator {
        GridIterator::new(tile_ranges(extent, minz, maxz))
    }
}

impl Iterator for GridIterator {
    /// Current cell index `(z, x, y)`
    type Item = (u8, i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(cells) = self.cells.as_mut() {
                if let Some((x, y)) = cells.next() {
                    return Some((self.zoom, x, y));
                }
            }
            let limit = self.levels.next()?;
            self.zoom = limit.zoom;
            self.cells = Some(limit.iter());
        }
    }
}

#[test]
fn test_world_iter() {
    let world = Extent {
        minx: -180.0,
        miny: -85.0,
        maxx: 179.9,
        maxy: 85.0,
    };
    let griditer = GridIterator::from_extent(&world, 0, 2);
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (0, 0, 0),
            (1, 0, 0),
            (1, 0, 1),
            (1, 1, 0),
            (1, 1, 1),
            (2, 0, 0),
            (2, 0, 1),
            (2, 0, 2),
            (2, 0, 3),
            (2, 1, 0),
            (2, 1, 1),
            (2, 1, 2),
            (2, 1, 3),
            (2, 2, 0),
            (2, 2, 1),
            (2, 2, 2),
            (2, 2, 3),
            (2, 3, 0),
            (2, 3, 1),
            (2, 3, 2),
            (2, 3, 3)
        ]
    );

    let griditer = GridIterator::from_extent(&world, 1, 1);
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(cells, vec![(1, 0, 0), (1, 0, 1), (1, 1, 0), (1, 1, 1)]);

    let griditer = GridIterator::from_extent(&world, 0, 0);
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0, 0)]);
}

#[test]
fn test_bad_params() {
    let world = Extent {
        minx: -180.0,
        miny: -85.0,
        maxx: 179.9,
        maxy: 85.0,
    };

    // no levels
    let griditer = GridIterator::new(Vec::new());
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(cells, vec![]);

    // minz > maxz
    let griditer = GridIterator::from_extent(&world, 3, 2);
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(cells, vec![]);

    // empty level in between
    let griditer = GridIterator::new(vec![
        TileRange {
            zoom: 0,
            minx: 0,
            maxx: 0,
            miny: 0,
            maxy: 0,
        },
        TileRange {
            zoom: 1,
            minx: 1,
            maxx: 0,
            miny: 0,
            maxy: 1,
        },
        TileRange {
            zoom: 2,
            minx: 2,
            maxx: 2,
            miny: 1,
            maxy: 2,
        },
    ]);
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0, 0), (2, 2, 1), (2, 2, 2)]);
}
