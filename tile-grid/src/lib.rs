//! A library for XYZ tile calculations
//!
//! ## Tile coordinates to longitude/latitude
//!
//! ```rust
//! use tile_grid::TileProjection;
//!
//! let proj = TileProjection::new(18);
//! // North-west corner of the world tile
//! let (lon, lat) = proj.tile_to_lonlat(0, 0.0, 0.0);
//! assert!((lon + 180.0).abs() < 1e-9);
//! assert!((lat - 85.0511287798066).abs() < 1e-9);
//! ```
//!
//! ## Tile extent in a target SRS
//!
//! ```rust
//! use tile_grid::{Srs, TileProjection};
//!
//! let proj = TileProjection::new(18);
//! let (lon0, lat0) = proj.tile_to_lonlat(1, 1.0, 1.0);
//! let (lon1, lat1) = proj.tile_to_lonlat(1, 2.0, 0.0);
//! let (minx, miny) = Srs::WebMercator.forward(lon0, lat0);
//! let (maxx, maxy) = Srs::WebMercator.forward(lon1, lat1);
//! assert!(minx.abs() < 1e-6 && miny.abs() < 1e-6);
//! assert!((maxx - 20037508.342789244).abs() < 1e-6);
//! assert!((maxy - 20037508.342789244).abs() < 1e-3);
//! ```

mod grid;
#[cfg(test)]
mod grid_test;
mod projection;

pub use grid::{lonlat_to_merc, merc_to_lonlat, Extent, Srs};
pub use projection::{LevelScale, TileProjection, TILE_PIXELS};
