//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile pixel space to geographic coordinates

use std::f64::consts::PI;

const RAD_TO_DEG: f64 = 180.0 / PI;

/// Pixel size of a tile used for the projection math
pub const TILE_PIXELS: f64 = 256.0;

/// Scale constants of one zoom level
#[derive(PartialEq, Clone, Debug)]
pub struct LevelScale {
    /// Pixels per degree longitude
    pub pixels_per_degree: f64,
    /// Pixels per radian for the Mercator y-transform
    pub pixels_per_radian: f64,
    /// Pixel coordinate of the map center
    pub center: (f64, f64),
    /// Pixel extent of the world map
    pub world_extent: f64,
}

/// Converts XYZ tile coordinates into longitude/latitude.
///
/// The scale table is built once in `new` and never changes afterwards,
/// so a single instance can be shared between threads.
#[derive(Clone, Debug)]
pub struct TileProjection {
    levels: Vec<LevelScale>,
}

impl TileProjection {
    pub fn new(max_zoom: u8) -> TileProjection {
        let mut levels = Vec::with_capacity(max_zoom as usize + 1);
        let mut c = TILE_PIXELS;
        for _ in 0..=max_zoom {
            let e = c / 2.0;
            levels.push(LevelScale {
                pixels_per_degree: c / 360.0,
                pixels_per_radian: c / (2.0 * PI),
                center: (e, e),
                world_extent: c,
            });
            c *= 2.0;
        }
        TileProjection { levels }
    }
    pub fn max_zoom(&self) -> u8 {
        (self.levels.len() - 1) as u8
    }
    /// Scale constants of `zoom`. Panics if `zoom > max_zoom()`.
    pub fn level(&self, zoom: u8) -> &LevelScale {
        match self.levels.get(zoom as usize) {
            Some(level) => level,
            None => panic!(
                "zoom level {} out of range (max zoom {})",
                zoom,
                self.max_zoom()
            ),
        }
    }
    /// Longitude/latitude in degrees of tile coordinate `x`, `y` at `zoom`.
    ///
    /// `x` and `y` are in tile units, i.e. `(x + 1, y)` is the north-east
    /// corner of tile `x/y`. Longitude is not wrapped into [-180, 180].
    /// Panics if `zoom > max_zoom()`; validate tile addresses before.
    pub fn tile_to_lonlat(&self, zoom: u8, x: f64, y: f64) -> (f64, f64) {
        let level = self.level(zoom);
        let (ex, ey) = level.center;
        let lon = (x * TILE_PIXELS - ex) / level.pixels_per_degree;
        let g = (y * TILE_PIXELS - ey) / -level.pixels_per_radian;
        let lat = RAD_TO_DEG * (2.0 * g.exp().atan() - 0.5 * PI);
        (lon, lat)
    }
}
